pub mod celex;
pub mod elp;
pub mod export;
pub mod udlexicons;
pub mod unimorph;
pub mod wikipron;

/// Errors shared by the source parsers.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
    /// The file parsed cleanly but produced nothing, which means the caller
    /// handed us the wrong file.
    #[error("no data read")]
    NoData,
}

impl ParseError {
    fn malformed(line: usize, message: impl Into<String>) -> Self {
        ParseError::Malformed {
            line: line + 1,
            message: message.into(),
        }
    }
}
