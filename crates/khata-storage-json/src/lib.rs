//! khata-storage-json
//!
//! Filesystem JSON persistence for the record slot: one versioned file
//! holding the full transaction list as a JSON array, written atomically.

use std::{
    fs,
    path::{Path, PathBuf},
};

use khata_core::{CoreError, CoreResult, SlotStorage};
use khata_domain::Transaction;

/// Name of the versioned slot file. A format change bumps the version in
/// this constant; slots written under older names are ignored, not migrated.
pub const SLOT_FILE: &str = "transactions_v2.json";

const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed record slot inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonSlotStorage {
    slot_path: PathBuf,
}

impl JsonSlotStorage {
    /// Creates the data directory if needed and binds the slot file inside it.
    pub fn new(data_dir: impl Into<PathBuf>) -> CoreResult<Self> {
        let dir = data_dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            slot_path: dir.join(SLOT_FILE),
        })
    }

    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }
}

impl SlotStorage for JsonSlotStorage {
    fn save(&self, records: &[Transaction]) -> CoreResult<()> {
        save_records_to_path(records, &self.slot_path)
    }

    /// Lenient load: a missing file or undecodable content yields an empty
    /// list. Only read faults on an existing file surface as errors.
    fn load(&self) -> CoreResult<Vec<Transaction>> {
        if !self.slot_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.slot_path)?;
        match serde_json::from_str(&data) {
            Ok(records) => Ok(records),
            Err(err) => {
                tracing::warn!(
                    path = %self.slot_path.display(),
                    "undecodable record slot treated as empty: {err}"
                );
                Ok(Vec::new())
            }
        }
    }
}

/// Writes the record list to an arbitrary path, staging to a temp sibling
/// and renaming so a failed write never clobbers the previous contents.
pub fn save_records_to_path(records: &[Transaction], path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(records).map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Strict load from an arbitrary path; parse failures surface to the caller.
pub fn load_records_from_path(path: &Path) -> CoreResult<Vec<Transaction>> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
