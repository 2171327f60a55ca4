//! Result export - writes comparison output to a durable file.
//!
//! Two formats are supported:
//! - [`ExportFormat::Json`] - a versioned, checksummed [`ExportArtifact`]
//!   that can be loaded back with [`load_artifact`] and compared across runs
//! - [`ExportFormat::Text`] - a human-readable table (write-only)
//!
//! # Artifact layout (JSON)
//! ```text
//! {
//!   "version": 1,
//!   "capacity": 3,
//!   "reference_len": 13,
//!   "entries": [
//!     { "policy": "FIFO", "faults": 10, "hits": 3, "evictions": 7,
//!       "elapsed_nanos": 5120, "history": [[7], [7, 0], ...] },
//!     ...
//!   ],
//!   "checksum": 2835127001
//! }
//! ```
//! `history` is present only when requested. The checksum is a CRC32 over
//! the compact JSON encoding of `(capacity, reference_len, entries)`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::ComparisonReport;
use crate::common::config::EXPORT_FORMAT_VERSION;
use crate::common::{Error, Result};
use crate::simulator::{History, Policy, SimulationResult};

/// On-disk encoding of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Structured, loadable artifact.
    #[default]
    Json,
    /// Plain text table.
    Text,
}

/// What to write and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,

    /// Include every frame snapshot. Histories grow with the reference
    /// string, so they are left out unless asked for.
    pub include_history: bool,
}

impl ExportOptions {
    pub fn json() -> Self {
        Self::default()
    }

    pub fn text() -> Self {
        Self {
            format: ExportFormat::Text,
            ..Self::default()
        }
    }

    pub fn with_history(mut self) -> Self {
        self.include_history = true;
        self
    }
}

/// One policy's line in an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub policy: Policy,
    pub faults: u64,
    pub hits: u64,
    pub evictions: u64,
    pub elapsed_nanos: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<History>,
}

impl ExportEntry {
    fn from_result(result: &SimulationResult, include_history: bool) -> Self {
        Self {
            policy: result.policy,
            faults: result.faults,
            hits: result.hits(),
            evictions: result.evictions,
            elapsed_nanos: u64::try_from(result.elapsed.as_nanos()).unwrap_or(u64::MAX),
            history: include_history.then(|| result.history.clone()),
        }
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_nanos as f64 / 1e9
    }
}

/// The serialized form of a comparison or a single simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub version: u32,
    pub capacity: usize,
    pub reference_len: usize,
    pub entries: Vec<ExportEntry>,
    pub checksum: u32,
}

impl ExportArtifact {
    /// Build an artifact from every result in `report`.
    pub fn from_report(report: &ComparisonReport, include_history: bool) -> Result<Self> {
        let entries = report
            .iter()
            .map(|(_, result)| ExportEntry::from_result(result, include_history))
            .collect();
        Self::sealed(report.capacity(), report.reference_len(), entries)
    }

    /// Build an artifact holding a single result.
    pub fn from_result(result: &SimulationResult, include_history: bool) -> Result<Self> {
        let entries = vec![ExportEntry::from_result(result, include_history)];
        Self::sealed(result.capacity, result.history.len(), entries)
    }

    fn sealed(capacity: usize, reference_len: usize, entries: Vec<ExportEntry>) -> Result<Self> {
        let checksum = Self::compute_checksum(capacity, reference_len, &entries)?;
        Ok(Self {
            version: EXPORT_FORMAT_VERSION,
            capacity,
            reference_len,
            entries,
            checksum,
        })
    }

    /// CRC32 over the compact encoding of the checksummed fields.
    fn compute_checksum(
        capacity: usize,
        reference_len: usize,
        entries: &[ExportEntry],
    ) -> Result<u32> {
        let bytes = serde_json::to_vec(&(capacity, reference_len, entries))?;
        Ok(crc32fast::hash(&bytes))
    }

    /// Check format version and checksum.
    ///
    /// # Errors
    /// Returns `Error::CorruptArtifact` on any mismatch.
    pub fn verify(&self) -> Result<()> {
        if self.version != EXPORT_FORMAT_VERSION {
            return Err(Error::CorruptArtifact(format!(
                "unsupported format version {} (expected {})",
                self.version, EXPORT_FORMAT_VERSION
            )));
        }
        let expected = Self::compute_checksum(self.capacity, self.reference_len, &self.entries)?;
        if expected != self.checksum {
            return Err(Error::CorruptArtifact(format!(
                "checksum mismatch: stored {:#010x}, computed {:#010x}",
                self.checksum, expected
            )));
        }
        Ok(())
    }

    pub fn entry(&self, policy: Policy) -> Option<&ExportEntry> {
        self.entries.iter().find(|e| e.policy == policy)
    }

    /// Fault count per policy.
    pub fn fault_counts(&self) -> BTreeMap<Policy, u64> {
        self.entries.iter().map(|e| (e.policy, e.faults)).collect()
    }

    /// `self.faults - baseline.faults` for every policy present in both.
    pub fn fault_delta(&self, baseline: &ExportArtifact) -> BTreeMap<Policy, i64> {
        let base = baseline.fault_counts();
        self.entries
            .iter()
            .filter_map(|e| {
                base.get(&e.policy)
                    .map(|&b| (e.policy, e.faults as i64 - b as i64))
            })
            .collect()
    }
}

/// Export a comparison report to `path`.
///
/// # Errors
/// Returns `Error::ExportIo` if the file cannot be created, written,
/// flushed or synced. Nothing is retried.
#[tracing::instrument(skip(report, path), fields(path = %path.as_ref().display()))]
pub fn export_report<P: AsRef<Path>>(
    report: &ComparisonReport,
    path: P,
    options: ExportOptions,
) -> Result<()> {
    let artifact = ExportArtifact::from_report(report, options.include_history)?;
    write_artifact(&artifact, path.as_ref(), options.format)
}

/// Export a single simulation result to `path`.
///
/// The artifact has the same layout as a report export with one entry.
#[tracing::instrument(
    skip(result, path),
    fields(path = %path.as_ref().display(), policy = %result.policy)
)]
pub fn export_result<P: AsRef<Path>>(
    result: &SimulationResult,
    path: P,
    options: ExportOptions,
) -> Result<()> {
    let artifact = ExportArtifact::from_result(result, options.include_history)?;
    write_artifact(&artifact, path.as_ref(), options.format)
}

/// Read and verify a JSON artifact.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::Serialization` if it is not a valid artifact
/// - `Error::CorruptArtifact` if version or checksum do not match
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_artifact<P: AsRef<Path>>(path: P) -> Result<ExportArtifact> {
    let file = File::open(path.as_ref())?;
    let artifact: ExportArtifact = serde_json::from_reader(BufReader::new(file))?;
    artifact.verify()?;
    Ok(artifact)
}

fn write_artifact(artifact: &ExportArtifact, path: &Path, format: ExportFormat) -> Result<()> {
    let export_io = |source: std::io::Error| Error::ExportIo {
        path: path.to_path_buf(),
        source,
    };

    let outcome = (|| {
        let file = File::create(path).map_err(export_io)?;
        let mut writer = BufWriter::new(file);

        match format {
            ExportFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, artifact).map_err(|e| {
                    if e.is_io() {
                        export_io(e.into())
                    } else {
                        Error::Serialization(e)
                    }
                })?;
                writer.write_all(b"\n").map_err(export_io)?;
            }
            ExportFormat::Text => write_text(&mut writer, artifact).map_err(export_io)?,
        }

        // Surface flush/sync failures instead of losing them on drop
        let file = writer.into_inner().map_err(|e| export_io(e.into_error()))?;
        file.sync_all().map_err(export_io)
    })();

    match &outcome {
        Ok(()) => tracing::info!(
            path = %path.display(),
            entries = artifact.entries.len(),
            ?format,
            "results exported"
        ),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "export failed"),
    }
    outcome
}

fn write_text<W: Write>(w: &mut W, artifact: &ExportArtifact) -> std::io::Result<()> {
    writeln!(
        w,
        "Page replacement results ({} references, {} frames)",
        artifact.reference_len, artifact.capacity
    )?;
    writeln!(
        w,
        "{:<10} {:>8} {:>8} {:>10} {:>14}",
        "Policy", "Faults", "Hits", "Evictions", "Time (sec)"
    )?;
    for entry in &artifact.entries {
        writeln!(
            w,
            "{:<10} {:>8} {:>8} {:>10} {:>14.6}",
            entry.policy.name(),
            entry.faults,
            entry.hits,
            entry.evictions,
            entry.elapsed_secs()
        )?;
    }

    for entry in &artifact.entries {
        let Some(history) = &entry.history else {
            continue;
        };
        writeln!(w)?;
        writeln!(w, "{} frame history:", entry.policy)?;
        for (step, snapshot) in history.iter().enumerate() {
            let pages: Vec<String> = snapshot.iter().map(|p| p.0.to_string()).collect();
            writeln!(w, "  step {:>4}: [{}]", step + 1, pages.join(", "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compare;
    use crate::common::PageId;
    use crate::simulator::simulate;

    fn report() -> ComparisonReport {
        compare(&PageId::sequence([7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]), 3).unwrap()
    }

    #[test]
    fn test_artifact_from_report() {
        let artifact = ExportArtifact::from_report(&report(), false).unwrap();

        assert_eq!(artifact.version, EXPORT_FORMAT_VERSION);
        assert_eq!(artifact.capacity, 3);
        assert_eq!(artifact.reference_len, 13);
        assert_eq!(artifact.entries.len(), 3);
        assert_eq!(artifact.entry(Policy::Fifo).unwrap().faults, 10);
        assert_eq!(artifact.entry(Policy::Fifo).unwrap().hits, 3);
        assert!(artifact.entries.iter().all(|e| e.history.is_none()));
        artifact.verify().unwrap();
    }

    #[test]
    fn test_artifact_from_single_result() {
        let result = simulate(Policy::Lru, &PageId::sequence([1, 2, 1]), 2).unwrap();
        let artifact = ExportArtifact::from_result(&result, true).unwrap();

        assert_eq!(artifact.entries.len(), 1);
        assert_eq!(artifact.reference_len, 3);
        assert_eq!(artifact.entries[0].history.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_artifact_from_result_with_more_faults_than_steps() {
        let mut result = simulate(Policy::Fifo, &[], 2).unwrap();
        result.faults = 1;

        let artifact = ExportArtifact::from_result(&result, false).unwrap();
        assert_eq!(artifact.entries[0].hits, 0);
        assert_eq!(artifact.entries[0].faults, 1);
    }

    #[test]
    fn test_tampered_artifact_fails_verify() {
        let mut artifact = ExportArtifact::from_report(&report(), false).unwrap();
        artifact.entries[0].faults += 1;

        assert!(matches!(artifact.verify(), Err(Error::CorruptArtifact(_))));
    }

    #[test]
    fn test_wrong_version_fails_verify() {
        let mut artifact = ExportArtifact::from_report(&report(), false).unwrap();
        artifact.version = EXPORT_FORMAT_VERSION + 1;

        assert!(matches!(artifact.verify(), Err(Error::CorruptArtifact(_))));
    }

    #[test]
    fn test_fault_delta() {
        let current = ExportArtifact::from_report(&report(), false).unwrap();
        let mut baseline = current.clone();
        baseline.entries[0].faults = 8; // FIFO
        baseline.entries.pop(); // drop Optimal

        let delta = current.fault_delta(&baseline);
        assert_eq!(delta.get(&Policy::Fifo), Some(&2));
        assert_eq!(delta.get(&Policy::Lru), Some(&0));
        assert_eq!(delta.get(&Policy::Optimal), None);
    }

    #[test]
    fn test_history_omitted_from_json_unless_requested() {
        let without = ExportArtifact::from_report(&report(), false).unwrap();
        let json = serde_json::to_string(&without).unwrap();
        assert!(!json.contains("history"));

        let with = ExportArtifact::from_report(&report(), true).unwrap();
        let json = serde_json::to_string(&with).unwrap();
        assert!(json.contains("\"history\":[[7],[7,0]"));
    }

    #[test]
    fn test_text_rendering() {
        let artifact = ExportArtifact::from_report(&report(), true).unwrap();
        let mut out = Vec::new();
        write_text(&mut out, &artifact).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("13 references, 3 frames"));
        assert!(text.contains("Optimal"));
        assert!(text.contains("FIFO frame history:"));
        assert!(text.contains("step    1: [7]"));
    }

    #[test]
    fn test_options_builders() {
        assert_eq!(ExportOptions::json().format, ExportFormat::Json);
        assert!(!ExportOptions::json().include_history);
        assert_eq!(ExportOptions::text().format, ExportFormat::Text);
        assert!(ExportOptions::text().with_history().include_history);
    }
}
