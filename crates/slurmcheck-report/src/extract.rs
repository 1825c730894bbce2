//! Failure/timeout detail extraction.

use camino::{Utf8Path, Utf8PathBuf};
use slurmcheck_core::{BucketSet, ExperimentId, Stage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Metadata table not found: {0}")]
    NotFound(Utf8PathBuf),
    #[error("Metadata table is empty (no header row): {0}")]
    EmptyTable(Utf8PathBuf),
    /// The manifest, logs and metadata table are positionally aligned; a
    /// bucketed ID past the table's last data row means they have diverged.
    #[error("Metadata table has {rows} data rows but experiment id {id} was bucketed")]
    MissingRow { id: ExperimentId, rows: usize },
    #[error("IO error on {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
}

/// Row-oriented metadata table, one data row per experiment ID.
///
/// Rows are opaque byte strings; detail tables must reproduce them exactly,
/// so nothing here parses delimiters.
#[derive(Debug, Clone)]
pub struct MetadataTable {
    header: String,
    rows: Vec<String>,
}

impl MetadataTable {
    /// Load a table: first line is the header, data row *i* (1-based)
    /// describes experiment ID *i*.
    pub fn load(path: &Utf8Path) -> Result<Self, ReportError> {
        if !path.exists() {
            return Err(ReportError::NotFound(path.to_owned()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_owned(),
            source,
        })?;
        let mut lines = content.lines().map(str::to_string);
        let header = lines
            .next()
            .ok_or_else(|| ReportError::EmptyTable(path.to_owned()))?;
        Ok(Self {
            header,
            rows: lines.collect(),
        })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data row for one experiment ID (1-based).
    pub fn row(&self, id: ExperimentId) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|idx| self.rows.get(idx))
            .map(String::as_str)
    }

    /// Write header plus the rows for `ids` to `dest`.
    ///
    /// All rows are resolved before the destination is opened, so an
    /// out-of-range ID aborts without leaving a partial file behind. Any
    /// prior content at `dest` is overwritten.
    pub fn write_detail(&self, ids: &[ExperimentId], dest: &Utf8Path) -> Result<(), ReportError> {
        let mut content = String::with_capacity(self.header.len() + 1);
        content.push_str(&self.header);
        content.push('\n');
        for &id in ids {
            let row = self.row(id).ok_or(ReportError::MissingRow {
                id,
                rows: self.rows.len(),
            })?;
            content.push_str(row);
            content.push('\n');
        }
        std::fs::write(dest, content).map_err(|source| ReportError::Io {
            path: dest.to_owned(),
            source,
        })
    }
}

/// Which detail tables one run wrote.
#[derive(Debug, Clone, Default)]
pub struct ExtractionOutcome {
    pub failed_table: Option<Utf8PathBuf>,
    pub timeout_table: Option<Utf8PathBuf>,
}

/// Extract failed and timed-out metadata rows into their detail tables.
///
/// The metadata table is only read when at least one of the two buckets is
/// non-empty. An empty bucket writes nothing, and whatever file sits at its
/// destination from an earlier run is left untouched; operators diffing
/// detail tables should check the run that produced them.
pub fn extract_details(
    buckets: &BucketSet,
    metadata_path: &Utf8Path,
    failed_dest: &Utf8Path,
    timeout_dest: &Utf8Path,
) -> Result<ExtractionOutcome, ReportError> {
    let failed_ids = buckets.ids(Stage::Failed);
    let timeout_ids = buckets.ids(Stage::TimedOut);

    let mut outcome = ExtractionOutcome::default();
    if failed_ids.is_empty() && timeout_ids.is_empty() {
        return Ok(outcome);
    }

    let table = MetadataTable::load(metadata_path)?;
    tracing::debug!(
        "Loaded metadata table {metadata_path} with {} data rows",
        table.len()
    );

    if !failed_ids.is_empty() {
        table.write_detail(failed_ids, failed_dest)?;
        outcome.failed_table = Some(failed_dest.to_owned());
    }
    if !timeout_ids.is_empty() {
        table.write_detail(timeout_ids, timeout_dest)?;
        outcome.timeout_table = Some(timeout_dest.to_owned());
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TABLE: &str = "model\tlr\tscore\nresnet\t0.1\t0.91\nvit\t0.01\t0.88\nconvnext\t0.05\t0.90\n";

    fn write_table(dir: &Utf8Path) -> Utf8PathBuf {
        let path = dir.join("experiments.tsv");
        std::fs::write(&path, TABLE).unwrap();
        path
    }

    #[test]
    fn test_row_lookup_is_one_based() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let table = MetadataTable::load(&write_table(&dir)).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.row(1), Some("resnet\t0.1\t0.91"));
        assert_eq!(table.row(3), Some("convnext\t0.05\t0.90"));
        assert_eq!(table.row(0), None);
        assert_eq!(table.row(4), None);
    }

    #[test]
    fn test_detail_rows_are_byte_identical_to_source() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let table = MetadataTable::load(&write_table(&dir)).unwrap();

        let dest = dir.join("failed.tsv");
        table.write_detail(&[2], &dest).unwrap();

        let written = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(written, "model\tlr\tscore\nvit\t0.01\t0.88\n");
    }

    #[test]
    fn test_out_of_range_id_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let table = MetadataTable::load(&write_table(&dir)).unwrap();

        let dest = dir.join("failed.tsv");
        let err = table.write_detail(&[2, 9], &dest).unwrap_err();
        assert!(matches!(err, ReportError::MissingRow { id: 9, rows: 3 }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_empty_buckets_skip_table_and_leave_stale_files() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let failed_dest = dir.join("failed.tsv");
        let timeout_dest = dir.join("timeout.tsv");
        std::fs::write(&failed_dest, "stale contents\n").unwrap();

        let buckets = BucketSet::default();
        // Metadata table path does not exist; with empty buckets it must
        // never be opened.
        let outcome = extract_details(
            &buckets,
            &dir.join("missing.tsv"),
            &failed_dest,
            &timeout_dest,
        )
        .unwrap();

        assert!(outcome.failed_table.is_none());
        assert!(outcome.timeout_table.is_none());
        assert_eq!(
            std::fs::read_to_string(&failed_dest).unwrap(),
            "stale contents\n"
        );
        assert!(!timeout_dest.exists());
    }

    #[test]
    fn test_failed_and_timeout_go_to_distinct_destinations() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let metadata = write_table(&dir);
        let failed_dest = dir.join("failed.tsv");
        let timeout_dest = dir.join("timeout.tsv");

        let mut buckets = BucketSet::default();
        buckets.push(1, Stage::Failed);
        buckets.push(3, Stage::TimedOut);

        let outcome = extract_details(&buckets, &metadata, &failed_dest, &timeout_dest).unwrap();
        assert_eq!(outcome.failed_table.as_deref(), Some(failed_dest.as_path()));
        assert_eq!(
            outcome.timeout_table.as_deref(),
            Some(timeout_dest.as_path())
        );

        assert_eq!(
            std::fs::read_to_string(&failed_dest).unwrap(),
            "model\tlr\tscore\nresnet\t0.1\t0.91\n"
        );
        assert_eq!(
            std::fs::read_to_string(&timeout_dest).unwrap(),
            "model\tlr\tscore\nconvnext\t0.05\t0.90\n"
        );
    }

    #[test]
    fn test_missing_metadata_table_with_failures_is_fatal() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();

        let mut buckets = BucketSet::default();
        buckets.push(1, Stage::Failed);

        let err = extract_details(
            &buckets,
            &dir.join("missing.tsv"),
            &dir.join("failed.tsv"),
            &dir.join("timeout.tsv"),
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::NotFound(_)));
    }
}
