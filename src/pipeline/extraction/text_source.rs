use super::types::{DocumentHandle, TextSource};
use super::ExtractionError;
use crate::config::MAX_DOCUMENT_BYTES;

/// Reads reports that are already plain UTF-8 text on disk.
pub struct PlainTextSource {
    max_bytes: u64,
}

impl PlainTextSource {
    pub fn new() -> Self {
        Self {
            max_bytes: MAX_DOCUMENT_BYTES,
        }
    }

    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl Default for PlainTextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for PlainTextSource {
    fn read_text(&self, document: &DocumentHandle) -> Result<String, ExtractionError> {
        let size = std::fs::metadata(document.path())?.len();
        if size > self.max_bytes {
            return Err(ExtractionError::DocumentTooLarge {
                path: document.path.clone(),
                size,
            });
        }

        let bytes = std::fs::read(document.path())?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ExtractionError::EncodingError(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> DocumentHandle {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        DocumentHandle::new(path)
    }

    #[test]
    fn reads_utf8_report() {
        let dir = tempfile::tempdir().unwrap();
        let handle = write_file(&dir, "report.txt", "HbA1c: 5.8 %".as_bytes());
        let text = PlainTextSource::new().read_text(&handle).unwrap();
        assert_eq!(text, "HbA1c: 5.8 %");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let handle = DocumentHandle::new(dir.path().join("absent.txt"));
        assert!(matches!(
            PlainTextSource::new().read_text(&handle),
            Err(ExtractionError::Io(_))
        ));
    }

    #[test]
    fn invalid_utf8_is_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let handle = write_file(&dir, "scan.pdf", &[0x25, 0x50, 0xff, 0xfe, 0x00]);
        assert!(matches!(
            PlainTextSource::new().read_text(&handle),
            Err(ExtractionError::EncodingError(_))
        ));
    }

    #[test]
    fn blank_file_is_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let handle = write_file(&dir, "blank.txt", b"  \n\n ");
        assert!(matches!(
            PlainTextSource::new().read_text(&handle),
            Err(ExtractionError::EmptyDocument)
        ));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let handle = write_file(&dir, "big.txt", &[b'a'; 64]);
        let err = PlainTextSource::with_max_bytes(16).read_text(&handle).unwrap_err();
        assert!(matches!(err, ExtractionError::DocumentTooLarge { size: 64, .. }));
    }
}
