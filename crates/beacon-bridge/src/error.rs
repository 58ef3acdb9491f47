use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("missing required argument: {0}")]
    MissingArgument(String),
    #[error("argument {name} has the wrong type (expected {expected})")]
    InvalidArgument {
        name: String,
        expected: &'static str,
    },
    #[error("your project token was not set")]
    TokenNotSet,
    #[error("property keys must be strings")]
    NonStringPropertyKey,
}
