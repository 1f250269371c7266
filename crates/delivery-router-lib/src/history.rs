use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::location::Location;
use crate::routing::RouteResult;

/// Default filename for the persisted route history.
const HISTORY_FILENAME: &str = "route_history.json";

/// Resolve the default history location using platform project directories.
pub fn default_history_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "deliveryrouter", "delivery-router")
        .ok_or(Error::HistoryDirsUnavailable)?;
    Ok(dirs.data_dir().join(HISTORY_FILENAME))
}

/// One persisted route computation, stamped at creation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteHistoryRecord {
    pub source: String,
    pub target: String,
    /// Location names source to target inclusive; empty when no route exists.
    pub path: Vec<String>,
    #[serde(with = "json_infinity")]
    pub distance: f64,
    #[serde(with = "json_infinity")]
    pub cost: f64,
    #[serde(with = "json_infinity")]
    pub time: f64,
    pub timestamp: DateTime<Utc>,
}

impl RouteHistoryRecord {
    /// Snapshot a computed route, stamping the current time.
    pub fn from_result(result: &RouteResult, source: &Location, target: &Location) -> Self {
        Self {
            source: source.name().to_string(),
            target: target.name().to_string(),
            path: result
                .path()
                .iter()
                .map(|location| location.name().to_string())
                .collect(),
            distance: result.distance(),
            cost: result.cost(),
            time: result.time(),
            timestamp: Utc::now(),
        }
    }
}

/// JSON has no literal for IEEE infinities, so the unreachable sentinel
/// persists distance, cost, and time as `null` and loads back as `+inf`.
mod json_infinity {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// Append-oriented JSON store of past route computations.
///
/// Every append performs a full read-modify-write of the backing file. The
/// rewrite goes to a temporary file in the same directory and is renamed over
/// the target, so a crash mid-write never leaves a torn file. There is no
/// cross-process locking; the store assumes a single writer.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the backing directory and an empty history file exist.
    ///
    /// Idempotent. Failures are logged and swallowed; the store then behaves
    /// as if the history were empty until a later write succeeds.
    pub fn initialize(&self) {
        if let Err(error) = self.try_initialize() {
            warn!(
                path = %self.path.display(),
                %error,
                "failed to initialize route history storage"
            );
        }
    }

    fn try_initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !self.path.exists() {
            self.write_records(&[])?;
            info!(path = %self.path.display(), "created empty route history");
        }
        Ok(())
    }

    /// Load the full persisted sequence, oldest first.
    ///
    /// An absent file yields an empty sequence; an existing file that cannot
    /// be parsed is an error.
    pub fn load_all(&self) -> Result<Vec<RouteHistoryRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "route history absent, treating as empty");
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&contents).map_err(|source| Error::HistoryParse {
            path: self.path.clone(),
            source,
        })?;
        Ok(records)
    }

    /// Append one record and rewrite the full persisted sequence.
    ///
    /// Returns the updated sequence, oldest first.
    pub fn append(&self, record: RouteHistoryRecord) -> Result<Vec<RouteHistoryRecord>> {
        let mut records = self.load_all()?;
        records.push(record);
        self.write_records(&records)?;
        debug!(
            path = %self.path.display(),
            entries = records.len(),
            "route history updated"
        );
        Ok(records)
    }

    /// Convenience wrapper: snapshot a [`RouteResult`] and append it.
    pub fn append_result(
        &self,
        result: &RouteResult,
        source: &Location,
        target: &Location,
    ) -> Result<Vec<RouteHistoryRecord>> {
        self.append(RouteHistoryRecord::from_result(result, source, target))
    }

    fn write_records(&self, records: &[RouteHistoryRecord]) -> Result<()> {
        let directory = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut file = tempfile::NamedTempFile::new_in(directory)?;
        serde_json::to_writer_pretty(&mut file, records).map_err(|source| Error::HistoryEncode {
            path: self.path.clone(),
            source,
        })?;
        file.persist(&self.path)
            .map_err(|persist| Error::Io(persist.error))?;
        Ok(())
    }
}
