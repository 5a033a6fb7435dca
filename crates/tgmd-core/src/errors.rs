/// Workspace error type.
///
/// The converter itself is total over all string inputs and never produces
/// one of these; they cover the edges around it (CLI argument handling and
/// stdio in the `tgmd` binary).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
