use thiserror::Error;

use crate::domain::UserId;

/// Errors raised by [`Store`](crate::store::Store) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Invalid login or password.")]
    InvalidCredentials,
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),
}

/// Errors produced while reading an answer from the terminal.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("'{input}' is not a valid number")]
    NotANumber { input: String },
    #[error("Input stream closed")]
    EndOfInput,
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end a console session abnormally.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Input(InputError::Io(err))
    }
}
