use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum RemoteError {
    HttpStatus(String),
    MalformedRecord(String),
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match *self {
            RemoteError::HttpStatus(ref v) => write!(f, "Remote station list request failed: {}", v),
            RemoteError::MalformedRecord(ref v) => write!(f, "Station record '{}' is not of the form 'name - code'", v),
        }
    }
}

impl Error for RemoteError {}
