//! Source file reading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    ///
    /// Chunk offsets index into the returned string, so the bytes are kept
    /// as they are (no BOM stripping, no newline normalisation).
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        String::from_utf8(bytes)
            .with_context(|| format!("{} is not valid UTF-8 text", path.display()))
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "First paragraph.\n\nSecond paragraph.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.bin");
        fs::write(&file_path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = FileReader::read_text(&file_path).unwrap_err();
        assert!(err.to_string().contains("is not valid UTF-8"));
    }

    #[test]
    fn test_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sized.txt");

        fs::write(&file_path, "日本語").unwrap();

        let size = FileReader::file_size(&file_path).unwrap();
        assert_eq!(size, 9);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "");
        assert_eq!(FileReader::file_size(&file_path).unwrap(), 0);
    }
}
