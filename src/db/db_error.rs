use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum DbError {
    IllegalId(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match *self {
            DbError::IllegalId(ref v) => write!(f, "IllegalId '{}'", v),
        }
    }
}

impl Error for DbError {}
