use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use tgmd_core::{markdown_to_v2, Error};

const USAGE: &str = "\
Usage: tgmd [FILE] [-o FILE]

Convert Markdown to Telegram MarkdownV2.

Reads FILE (stdin when FILE is omitted or `-`) and writes the converted
text to stdout, or to the file given with -o/--output.";

/// Parsed command line. `input: None` means stdin.
struct Options {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl Options {
    /// Returns `Ok(None)` when help was requested.
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Option<Self>, Error> {
        let mut input = None;
        let mut output = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(None),
                "-o" | "--output" => {
                    let path = args
                        .next()
                        .ok_or_else(|| Error::Usage(format!("{arg} requires a file argument")))?;
                    output = Some(PathBuf::from(path));
                }
                "-" => input = None,
                other if other.starts_with('-') => {
                    return Err(Error::Usage(format!("unknown option: {other}")));
                }
                path => {
                    if input.is_some() {
                        return Err(Error::Usage("at most one input file".to_string()));
                    }
                    input = Some(PathBuf::from(path));
                }
            }
        }

        Ok(Some(Self { input, output }))
    }
}

fn main() -> Result<(), Error> {
    tgmd_core::logging::init("tgmd")?;

    let Some(opts) = Options::parse(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let source = match &opts.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let converted = markdown_to_v2(&source);

    match &opts.output {
        Some(path) => fs::write(path, converted)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(converted.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
