use std::path::PathBuf;

use log::debug;
use thiserror::Error;

use crate::constants::{DEFAULT_OUTPUT, DEFAULT_STACK_SIZE};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Invalid stack size '{0}': expected a positive decimal number")]
    InvalidStackSize(String),
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOptions {
    pub output: PathBuf,
    pub stack_size: u32,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

impl IconOptions {
    /// Reads `[OUTPUT [STACK_SIZE]]`, program name already stripped.
    pub fn from_args<I>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().map(Into::into);

        if let Some(output) = args.next() {
            options.output = PathBuf::from(output);
        }
        if let Some(stack) = args.next() {
            options.stack_size = match stack.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => return Err(OptionsError::InvalidStackSize(stack)),
            };
        }
        if let Some(extra) = args.next() {
            return Err(OptionsError::UnexpectedArgument(extra));
        }

        debug!("Options: {:?}", options);
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = IconOptions::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(options, IconOptions::default());
        assert_eq!(options.output, PathBuf::from("AmigaAI.info"));
        assert_eq!(options.stack_size, 131_072);
    }

    #[test]
    fn test_output_and_stack() {
        let options = IconOptions::from_args(["Tool.info", "8192"]).unwrap();
        assert_eq!(options.output, PathBuf::from("Tool.info"));
        assert_eq!(options.stack_size, 8192);
    }

    #[test]
    fn test_bad_stack_size() {
        assert_eq!(
            IconOptions::from_args(["Tool.info", "lots"]),
            Err(OptionsError::InvalidStackSize("lots".to_string()))
        );
        assert_eq!(
            IconOptions::from_args(["Tool.info", "0"]),
            Err(OptionsError::InvalidStackSize("0".to_string()))
        );
    }

    #[test]
    fn test_extra_argument() {
        assert_eq!(
            IconOptions::from_args(["Tool.info", "8192", "again"]),
            Err(OptionsError::UnexpectedArgument("again".to_string()))
        );
    }
}
