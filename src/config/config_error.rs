use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    TypeError(String, String),
    MissingSetting(String),
    IllegalUrl(String),
    IllegalTableName(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match *self {
            ConfigError::TypeError(ref field_name, ref field_value) => write!(f, "Value {} for field {} has wrong type", field_value, field_name),
            ConfigError::MissingSetting(ref field_name) => write!(f, "Setting '{}' is required but was not given", field_name),
            ConfigError::IllegalUrl(ref v) => write!(f, "Remote url '{}' is not an absolute http(s) url", v),
            ConfigError::IllegalTableName(ref v) => write!(f, "Table name '{}' is not a plain sql identifier", v),
        }
    }
}

impl Error for ConfigError {}
