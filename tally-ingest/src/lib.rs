//! tally-ingest: CSV import/export of transaction rows and download sinks.

pub mod export;
pub mod parser;
pub mod sink;
pub mod types;

pub use export::{export_to_csv, export_to_csv_default, to_csv_string};
pub use parser::{parse_csv, parse_csv_at, read_csv_file};
pub use sink::{DownloadSink, FileSink, MemorySink};
pub use tally_core::coerce_number;
pub use types::{CSV_MIME_TYPE, CsvArtifact, DEFAULT_EXPORT_FILENAME, IMPORTED_ID_PREFIX};
