use core::fmt;
use derive_more::From;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a document build. Font problems are absorbed by
/// `FontRegistration` and never show up here.
#[derive(Debug,From)]
pub enum Error {
   #[from]
    Io(std::io::Error),
   #[from]
    Config(serde_json::Error),
    /// `--dump-elements` output
    Dump(serde_json::Error),
    EmptyTable,
    ColumnMismatch { row: usize, expected: usize, found: usize },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {e}"),
            Error::Config(e) => write!(f, "invalid config: {e}"),
            Error::Dump(e) => write!(f, "cannot serialize document elements: {e}"),
            Error::EmptyTable => write!(f, "table has no rows or no columns"),
            Error::ColumnMismatch { row, expected, found } => {
                write!(f, "table row {row} has {found} cells, expected {expected}")
            }
        }
    }
}
