use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password must be at least 8 characters")]
    PasswordTooShort,
    #[error("you are not signed in")]
    NotSignedIn,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("the server could not be reached: {0}")]
    Network(String),
    #[error("authentication required")]
    Unauthorized,
    #[error("{detail}")]
    Server { status: u16, detail: String },
}
