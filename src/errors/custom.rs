use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid {field}: `{value}`")]
    InvalidValue { field: String, value: String },
}

impl CustomError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
