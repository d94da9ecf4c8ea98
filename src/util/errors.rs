use thiserror::Error;


#[derive(Error, Debug)]
pub enum GameError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;


#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind};

    use super::*;

    #[test]
    fn io_errors_convert_and_keep_their_message() {
        let error: GameError = Error::new(ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(error, GameError::Io(ref e) if e.kind() == ErrorKind::BrokenPipe));
        assert_eq!(error.to_string(), "Console I/O failed: pipe closed");
    }
}
