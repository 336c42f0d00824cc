use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid library directory: {0}")]
    InvalidLibraryDir(String),
}

/// Read a markdown article and return its content
pub fn read_article(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Scan for markdown files under the library directory, sorted by path
pub fn scan_markdown_files(library_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !library_root.exists() {
        return Err(IoError::InvalidLibraryDir(
            "library directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(library_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        // Symlinked directories are not followed.
        let file_type = entry.file_type().map_err(IoError::Io)?;

        if file_type.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_library_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidLibraryDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
