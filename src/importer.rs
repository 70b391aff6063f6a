//! Log import pipeline
//!
//! Parses a whole file into memory, then writes every entry to a
//! [`LogSink`] in one bulk insert. Nothing is written unless the file parses
//! completely (or, in lenient mode, unless at least one line parses).

use std::path::Path;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::models::{ImportSummary, LogDocument};
use crate::parser::{LogParser, ParseResult, ParseStats};
use crate::store::{
    LogSink, MemoryStore, MongoStore, validate_collection_name, validate_database_name,
};

/// Parses log files and writes them to a sink
#[derive(Debug)]
pub struct LogImporter<S> {
    parser: LogParser,
    sink: S,
    show_progress: bool,
}

impl<S: LogSink> LogImporter<S> {
    pub fn new(parser: LogParser, sink: S) -> Self {
        Self {
            parser,
            sink,
            show_progress: false,
        }
    }

    /// Show a spinner while the bulk insert is running
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Import one file
    ///
    /// Parse and I/O errors are returned before the sink is touched. An
    /// empty result skips the insert entirely.
    pub async fn import_file(&self, file_path: &Path) -> Result<ImportSummary> {
        let start_time = Instant::now();
        let result = self.parser.parse_file(file_path)?;
        self.insert_parsed(file_path, result, start_time).await
    }

    /// Write an already parsed file to the sink in one batch
    ///
    /// `start_time` is when parsing began, so the summary covers both steps.
    pub async fn insert_parsed(
        &self,
        file_path: &Path,
        result: ParseResult,
        start_time: Instant,
    ) -> Result<ImportSummary> {
        let mut summary = parse_summary(file_path, self.sink.target(), &result.stats);

        if result.entries.is_empty() {
            info!(
                "No log entries in {}; skipping insert",
                file_path.display()
            );
            summary.elapsed = start_time.elapsed();
            return Ok(summary);
        }

        let documents: Vec<LogDocument> = result.entries.into_iter().map(Into::into).collect();
        debug!(
            "Inserting {} documents into {}",
            documents.len(),
            summary.target
        );

        let progress_bar = self.insert_spinner(documents.len(), &summary.target);
        let inserted = self.sink.insert_batch(documents).await;
        if let Some(pb) = &progress_bar {
            pb.finish_and_clear();
        }

        summary.documents_inserted = inserted?;
        summary.elapsed = start_time.elapsed();

        info!(
            "Inserted {} documents into {} in {:.2}s",
            summary.documents_inserted,
            summary.target,
            summary.elapsed.as_secs_f64()
        );

        Ok(summary)
    }

    fn insert_spinner(&self, count: usize, target: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let progress_bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            progress_bar.set_style(style);
        }
        progress_bar.set_message(format!("Inserting {} documents into {}", count, target));
        progress_bar.enable_steady_tick(Duration::from_millis(100));
        Some(progress_bar)
    }
}

/// Import `file_path` into `database.collection` on the configured MongoDB server
///
/// The file is parsed and closed before any client exists, so parse and I/O
/// errors reach the caller unchanged. A client is only created when there is
/// something to insert, lives only for this call, and is shut down whether
/// the insert succeeds or fails.
pub async fn import_log_entries(
    config: &Config,
    database: &str,
    collection: &str,
    file_path: &Path,
    show_progress: bool,
) -> Result<ImportSummary> {
    validate_database_name(database)?;
    validate_collection_name(collection)?;

    let start_time = Instant::now();
    let parser = LogParser::new(config.parsing.mode);
    let result = parser.parse_file(file_path)?;

    if result.entries.is_empty() {
        info!(
            "No log entries in {}; not connecting to MongoDB",
            file_path.display()
        );
        let target = format!("{}.{}", database, collection);
        let mut summary = parse_summary(file_path, target, &result.stats);
        summary.elapsed = start_time.elapsed();
        return Ok(summary);
    }

    let store = MongoStore::connect(&config.storage, database, collection).await?;
    let importer = LogImporter::new(parser, store).with_progress(show_progress);

    let summary = importer.insert_parsed(file_path, result, start_time).await;
    importer.into_sink().shutdown().await;

    summary
}

/// Parse `file_path` and report what would be inserted, without touching MongoDB
pub async fn dry_run_import(
    config: &Config,
    database: &str,
    collection: &str,
    file_path: &Path,
) -> Result<ImportSummary> {
    validate_database_name(database)?;
    validate_collection_name(collection)?;

    info!("Performing dry run - nothing will be written to MongoDB");

    let importer = LogImporter::new(
        LogParser::new(config.parsing.mode),
        MemoryStore::new(database, collection),
    );
    let mut summary = importer.import_file(file_path).await?;
    summary.dry_run = true;

    Ok(summary)
}

fn parse_summary(file_path: &Path, target: String, stats: &ParseStats) -> ImportSummary {
    ImportSummary {
        source: file_path.to_path_buf(),
        target,
        lines_read: stats.lines_read,
        entries_parsed: stats.entries_parsed,
        lines_skipped: stats.lines_skipped,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use crate::parser::ParseMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_LOG: &str = concat!(
        "INFO: \"alice\" [2023-05-01 10:15:00] 42ms \"loginHandler\" \"success\"\n",
        "ERROR: \"bob\" [2024-01-02 03:04:05] 7ms \"saveRecord\" \"failure\"\n",
    );

    const MALFORMED_LOG: &str = concat!(
        "INFO: \"alice\" [2023-05-01 10:15:00] 42ms \"loginHandler\" \"success\"\n",
        "ERROR: \"bob\" [2024-01-02 03:04:05] 7ms \"saveRecord\" \"failure\n",
    );

    fn log_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn importer(mode: ParseMode) -> LogImporter<MemoryStore> {
        LogImporter::new(LogParser::new(mode), MemoryStore::new("logs", "entries"))
    }

    #[tokio::test]
    async fn test_import_writes_one_batch() {
        let file = log_file(VALID_LOG);
        let importer = importer(ParseMode::Strict);

        let summary = importer.import_file(file.path()).await.unwrap();

        assert_eq!(summary.entries_parsed, 2);
        assert_eq!(summary.documents_inserted, 2);
        assert_eq!(summary.target, "logs.entries");
        assert!(summary.is_complete());

        let store = importer.sink();
        assert_eq!(store.insert_calls(), 1);
        let users: Vec<String> = store.documents().into_iter().map(|d| d.user).collect();
        assert_eq!(users, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_empty_file_makes_no_insert_call() {
        let file = log_file("");
        let importer = importer(ParseMode::Strict);

        let summary = importer.import_file(file.path()).await.unwrap();

        assert_eq!(summary.entries_parsed, 0);
        assert_eq!(summary.documents_inserted, 0);
        assert_eq!(importer.sink().insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_parse_failure_inserts_nothing() {
        let file = log_file(MALFORMED_LOG);
        let importer = importer(ParseMode::Strict);

        let error = importer.import_file(file.path()).await.unwrap_err();

        assert!(error.is_parse_error());
        assert_eq!(error.line_number(), Some(2));
        assert_eq!(importer.sink().insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_lenient_import_inserts_good_lines() {
        let file = log_file(MALFORMED_LOG);
        let importer = importer(ParseMode::Lenient);

        let summary = importer.import_file(file.path()).await.unwrap();

        assert_eq!(summary.lines_read, 2);
        assert_eq!(summary.lines_skipped, 1);
        assert_eq!(summary.documents_inserted, 1);
        assert_eq!(importer.sink().documents()[0].user, "alice");
    }

    #[tokio::test]
    async fn test_storage_failure_is_surfaced() {
        let file = log_file(VALID_LOG);
        let importer = LogImporter::new(
            LogParser::default(),
            MemoryStore::failing("logs", "entries", "E11000 duplicate key error"),
        );

        let error = importer.import_file(file.path()).await.unwrap_err();

        assert!(matches!(error, ImportError::Storage { .. }));
        assert!(!error.is_parse_error());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let importer = importer(ParseMode::Strict);
        let error = importer
            .import_file(Path::new("/nonexistent/app.log"))
            .await
            .unwrap_err();

        assert!(matches!(error, ImportError::Io { .. }));
        assert_eq!(importer.sink().insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_dry_run_reports_without_mongodb() {
        let file = log_file(VALID_LOG);
        let summary = dry_run_import(&Config::default(), "logs", "entries", file.path())
            .await
            .unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.entries_parsed, 2);
        assert_eq!(summary.documents_inserted, 2);
    }

    #[tokio::test]
    async fn test_dry_run_validates_names() {
        let file = log_file(VALID_LOG);
        let error = dry_run_import(&Config::default(), "bad.db", "entries", file.path())
            .await
            .unwrap_err();

        assert!(matches!(error, ImportError::Configuration { .. }));
    }

    fn unreachable_server_config() -> Config {
        let mut config = Config::default();
        config.storage.uri = "mongodb+srv://cluster.does-not-exist.invalid".to_string();
        config
    }

    #[tokio::test]
    async fn test_parse_error_is_reported_before_connecting() {
        let file = log_file(MALFORMED_LOG);

        let error = import_log_entries(
            &unreachable_server_config(),
            "logs",
            "entries",
            file.path(),
            false,
        )
        .await
        .unwrap_err();

        assert!(error.is_parse_error(), "got {:?}", error);
        assert_eq!(error.line_number(), Some(2));
    }

    #[tokio::test]
    async fn test_missing_file_is_reported_before_connecting() {
        let error = import_log_entries(
            &unreachable_server_config(),
            "logs",
            "entries",
            Path::new("/nonexistent/app.log"),
            false,
        )
        .await
        .unwrap_err();

        assert!(matches!(error, ImportError::Io { .. }), "got {:?}", error);
    }

    #[tokio::test]
    async fn test_empty_file_never_connects() {
        let file = log_file("");

        let summary = import_log_entries(
            &unreachable_server_config(),
            "logs",
            "entries",
            file.path(),
            false,
        )
        .await
        .unwrap();

        assert_eq!(summary.lines_read, 0);
        assert_eq!(summary.documents_inserted, 0);
        assert_eq!(summary.target, "logs.entries");
    }

    #[tokio::test]
    async fn test_insert_parsed_writes_given_result() {
        let file = log_file(VALID_LOG);
        let importer = importer(ParseMode::Strict);
        let parsed = importer.parser.parse_file(file.path()).unwrap();

        let summary = importer
            .insert_parsed(file.path(), parsed, Instant::now())
            .await
            .unwrap();

        assert_eq!(summary.documents_inserted, 2);
        assert_eq!(importer.sink().insert_calls(), 1);
    }
}
