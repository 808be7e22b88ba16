use crate::error::ChromaveilError;

pub type Result<T> = std::result::Result<T, ChromaveilError>;
