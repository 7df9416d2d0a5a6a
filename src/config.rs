//! JSON option tables.

use crate::backend::Backend;
use crate::parser::Parser;
use crate::translate::translate_long_name;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during option table parsing and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse JSON option table: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("invalid short option '{0}': must be a printable ASCII character other than '-' or ':'")]
    InvalidShortOption(char),

    #[error("option #{0} has neither a short nor a long name")]
    NoNameSpecified(usize),

    #[error("invalid long option '{0}': must not be empty or contain '=' or whitespace")]
    InvalidLongOption(String),

    #[error("duplicate long option: --{0}")]
    DuplicateLong(String),

    #[error("duplicate short option: -{0}")]
    DuplicateShort(char),

    #[error("long options '{0}' and '{1}' both translate to '{2}'")]
    TranslatedCollision(String, String, String),
}

/// Declaration of a single option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionSpec {
    /// Long option name (e.g., "ignore-backups" for --ignore-backups)
    pub long: Option<String>,
    /// Short option character (e.g., 'B' for -B)
    pub short: Option<char>,
    /// Whether the option consumes an argument
    #[serde(default)]
    pub takes_argument: bool,
    /// Help text for this option
    pub help: Option<String>,
}

/// A program's option table.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OptionTable {
    /// Program name (used when no argument vector provides one)
    pub name: Option<String>,
    /// Description shown above the option list
    pub description: Option<String>,
    /// Options in registration order
    #[serde(default)]
    pub options: Vec<OptionSpec>,
}

impl OptionTable {
    /// Parse a JSON string into an OptionTable.
    pub fn from_json(json: &str) -> Result<OptionTable, ConfigError> {
        let table: OptionTable = serde_json::from_str(json)?;
        Ok(table)
    }

    /// Validate the table: every option is named, names are well formed and
    /// no two options can be spelled the same way under any backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut longs = HashMap::new();
        let mut shorts = HashMap::new();
        let mut translated: HashMap<String, &str> = HashMap::new();

        for (index, opt) in self.options.iter().enumerate() {
            if opt.long.is_none() && opt.short.is_none() {
                return Err(ConfigError::NoNameSpecified(index));
            }

            if let Some(short) = opt.short {
                if !short.is_ascii_graphic() || short == '-' || short == ':' {
                    return Err(ConfigError::InvalidShortOption(short));
                }
                if shorts.insert(short, index).is_some() {
                    return Err(ConfigError::DuplicateShort(short));
                }
            }

            if let Some(ref long) = opt.long {
                if long.is_empty() || long.contains('=') || long.contains(char::is_whitespace) {
                    return Err(ConfigError::InvalidLongOption(long.clone()));
                }
                if longs.insert(long.as_str(), index).is_some() {
                    return Err(ConfigError::DuplicateLong(long.clone()));
                }
                let spelled = translate_long_name(long);
                if let Some(previous) = translated.insert(spelled.clone(), long.as_str()) {
                    return Err(ConfigError::TranslatedCollision(
                        previous.to_string(),
                        long.clone(),
                        spelled,
                    ));
                }
            }
        }

        Ok(())
    }

    /// Register every option with `parser`, in table order.
    pub fn register<B: Backend>(&self, parser: &mut Parser<'_, B>) {
        for opt in &self.options {
            parser.add_option(
                opt.long.as_deref(),
                opt.short,
                opt.takes_argument,
                opt.help.as_deref(),
            );
        }
    }
}
