use thiserror::Error;

pub type CommandResult<T> = Result<T, FlyError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlyError {
    #[error("Command \"{name}\" not found.")]
    CommandNotFound { name: String },
}
