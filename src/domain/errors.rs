use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{0}` is required")]
    MissingField(&'static str),

    #[error("`{0}` cannot be empty")]
    EmptyField(&'static str),

    #[error("`{field}` cannot be longer than {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("`{0}` cannot be changed")]
    ImmutableField(String),

    #[error("`{0}` is not a newsletter field")]
    UnknownField(String),
}
