use std::path::Path;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required option: --file-path")]
    MissingFilePath,
    #[error("File '{0}' not found")]
    FileNotFound(String),
    #[error("Path '{0}' points to a directory")]
    NotAFile(String),
}

pub fn validate_file_path(file_path: &str) -> Result<(), ValidationError> {
    if file_path.trim().is_empty() {
        return Err(ValidationError::MissingFilePath);
    }
    let meta = std::fs::metadata(Path::new(file_path))
        .map_err(|_| ValidationError::FileNotFound(file_path.to_string()))?;
    if meta.is_dir() {
        return Err(ValidationError::NotAFile(file_path.to_string()));
    }
    Ok(())
}
