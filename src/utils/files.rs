use std::path::Path;

use crate::errors::custom::CustomError;

pub async fn file_exists(path: &Path) -> Result<bool, CustomError> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|e| CustomError::io(path, e))
}

pub async fn read_file(path: &Path) -> Result<String, CustomError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CustomError::io(path, e))
}

pub async fn write_file(path: &Path, contents: &str) -> Result<(), CustomError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| CustomError::io(path, e))
}
