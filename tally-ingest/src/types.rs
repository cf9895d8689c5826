use serde::{Deserialize, Serialize};

/// Default name for exported transaction files
pub const DEFAULT_EXPORT_FILENAME: &str = "transactions.csv";

/// Content type attached to every exported artifact
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Prefix for ids synthesized during import (`imported_<millis>_<line>`)
pub const IMPORTED_ID_PREFIX: &str = "imported";

/// A named text file staged for hand-off to the host's save mechanism
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvArtifact {
    pub filename: String,
    pub mime_type: String,
    pub content: String,
}

impl CsvArtifact {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: CSV_MIME_TYPE.to_string(),
            content: content.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
