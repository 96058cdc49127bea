use thiserror::Error;

use crate::application::errors::ApplicationError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl CommandError {
    /// Text placed in the `error` field of the response envelope
    pub fn message(&self) -> &str {
        match self {
            CommandError::BadRequest(msg)
            | CommandError::NotFound(msg)
            | CommandError::Conflict(msg)
            | CommandError::Unauthorized(msg)
            | CommandError::InternalServerError(msg) => msg,
        }
    }
}

impl From<ApplicationError> for CommandError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::ValidationError(msg) => CommandError::BadRequest(msg),
            ApplicationError::NotFound(msg) => CommandError::NotFound(msg),
            ApplicationError::Conflict(msg) => CommandError::Conflict(msg),
            ApplicationError::Unauthorized(msg) => CommandError::Unauthorized(msg),
            ApplicationError::InternalError(msg) => CommandError::InternalServerError(msg),
        }
    }
}
