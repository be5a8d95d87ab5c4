//! The repository's `config` file, as a section/key/value store.
//!
//! Parsing and writing are done by `rust-ini`. This module adds the typed
//! accessors the repository layer relies on: integer and git-style boolean
//! reads that fail with a descriptive error.

use std::{io, path::Path};

use ini::{Ini, Properties, WriteOption};
use thiserror::Error;

/// Describes the potential error conditions that might arise from reading
/// or writing a `Config`.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error("config parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("config key `{section}.{key}` is not set")]
    MissingKey { section: String, key: String },

    #[error("config key `{section}.{key}` is not an integer: `{value}`")]
    InvalidInt {
        section: String,
        key: String,
        value: String,
    },

    #[error("config key `{section}.{key}` is not a boolean: `{value}`")]
    InvalidBool {
        section: String,
        key: String,
        value: String,
    },
}

impl From<ini::Error> for Error {
    fn from(err: ini::Error) -> Self {
        match err {
            ini::Error::Io(err) => Error::IoError(err),
            ini::Error::Parse(err) => Error::Parse {
                line: err.line,
                message: err.msg.to_string(),
            },
        }
    }
}

/// A specialized `Result` type for `Config` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// In-memory contents of a config file.
#[derive(Clone, Debug, Default)]
pub struct Config {
    ini: Ini,
}

impl Config {
    /// Create an empty config.
    pub fn new() -> Config {
        Config::default()
    }

    /// Read and parse the config file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        Ok(Config {
            ini: Ini::load_from_file(path)?,
        })
    }

    /// Write the config to `path`, replacing the file's contents.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let opt = WriteOption {
            kv_separator: " = ",
            ..Default::default()
        };

        self.ini.write_to_file_opt(path, opt).map_err(|e| e.into())
    }

    pub fn section(&self, name: &str) -> Option<&Properties> {
        self.ini.section(Some(name))
    }

    /// Returns the named section, creating an empty one if absent.
    pub fn section_mut(&mut self, name: &str) -> &mut Properties {
        self.ini
            .entry(Some(name.to_owned()))
            .or_insert_with(Properties::new)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Sets `section.key` to `value`, replacing any existing value.
    pub fn set<V: Into<String>>(&mut self, section: &str, key: &str, value: V) {
        self.section_mut(section).insert(key, value);
    }

    /// Returns the value of `section.key` parsed as an integer.
    ///
    /// It is an error if the key is missing or is not a decimal integer.
    pub fn get_int(&self, section: &str, key: &str) -> Result<i64> {
        let value = self.require(section, key)?;
        value.trim().parse().map_err(|_| Error::InvalidInt {
            section: section.to_owned(),
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }

    /// Returns the value of `section.key` interpreted as a git boolean.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool> {
        let value = self.require(section, key)?;
        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" | "" => Ok(false),
            _ => Err(Error::InvalidBool {
                section: section.to_owned(),
                key: key.to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    fn require(&self, section: &str, key: &str) -> Result<&str> {
        self.get(section, key).ok_or_else(|| Error::MissingKey {
            section: section.to_owned(),
            key: key.to_owned(),
        })
    }
}
