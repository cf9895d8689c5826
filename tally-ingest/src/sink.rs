//! Download sinks: where exported CSV artifacts are handed off.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

use crate::types::CsvArtifact;

/// The host's file-save mechanism. Delivery is fire-and-forget for callers.
pub trait DownloadSink {
    fn deliver(&mut self, artifact: CsvArtifact) -> Result<()>;
}

/// Collects artifacts in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub artifacts: Vec<CsvArtifact>,
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, artifact: CsvArtifact) -> Result<()> {
        self.artifacts.push(artifact);
        Ok(())
    }
}

/// Saves artifacts into a directory.
///
/// Content is staged in a temp file next to the target and renamed into
/// place; the temp file is removed if anything fails before the rename.
#[derive(Debug)]
pub struct FileSink {
    dir: PathBuf,
    saved: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            saved: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in delivery order
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }
}

impl DownloadSink for FileSink {
    fn deliver(&mut self, artifact: CsvArtifact) -> Result<()> {
        // only the final path component is honored, like a browser download
        let Some(name) = Path::new(&artifact.filename).file_name() else {
            bail!("invalid export filename: {:?}", artifact.filename);
        };

        fs::create_dir_all(&self.dir).with_context(|| format!("create {}", self.dir.display()))?;
        let target = self.dir.join(name);

        let mut staged = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("staging export in {}", self.dir.display()))?;
        staged
            .write_all(artifact.content.as_bytes())
            .context("write staged export")?;
        staged
            .persist(&target)
            .with_context(|| format!("write {}", target.display()))?;

        info!(
            path = %target.display(),
            bytes = artifact.len(),
            mime = %artifact.mime_type,
            "saved export"
        );
        self.saved.push(target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path());
        sink.deliver(CsvArtifact::new("out.csv", "id\n1")).unwrap();

        let written = fs::read_to_string(dir.path().join("out.csv")).unwrap();
        assert_eq!(written, "id\n1");
        assert_eq!(sink.saved(), &[dir.path().join("out.csv")]);
        // no staging files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_sink_ignores_directory_parts() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path());
        sink.deliver(CsvArtifact::new("../../escape.csv", "x")).unwrap();
        assert!(dir.path().join("escape.csv").exists());
    }

    #[test]
    fn test_file_sink_rejects_nameless_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path());
        assert!(sink.deliver(CsvArtifact::new("..", "x")).is_err());
        assert!(sink.saved().is_empty());
    }

    #[test]
    fn test_file_sink_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path());
        sink.deliver(CsvArtifact::new("t.csv", "old")).unwrap();
        sink.deliver(CsvArtifact::new("t.csv", "new")).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("t.csv")).unwrap(), "new");
    }
}
