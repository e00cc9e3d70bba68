use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account with id of {0} does not exist")]
    NotFound(i64),

    #[error("Account with id of {0} already exists")]
    AlreadyExists(i64),
}
