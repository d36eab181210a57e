use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ExtractionError;

/// An uploaded report. Only `path` is read (by the text source); `id` and
/// `name` are used to label log lines and errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentHandle {
    pub id: Uuid,
    pub name: String,
    pub path: PathBuf,
}

impl DocumentHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            id: Uuid::new_v4(),
            name,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Upstream capability that turns a document into a linear text stream
/// (text layer, OCR, plain file...). Allows mocking for tests.
pub trait TextSource {
    fn read_text(&self, document: &DocumentHandle) -> Result<String, ExtractionError>;
}
