use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use khata_domain::default_category_labels;

/// User-configurable preferences shared by khata frontends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,

    /// Category labels offered when entering a transaction. Advisory only;
    /// stored records may use any non-empty label.
    #[serde(default = "default_category_labels")]
    pub categories: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the record slot. Defaults to the
    /// platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            categories: default_category_labels(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Directory the record slot lives in.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("khata")
    }

    /// Appends a category suggestion, ignoring blanks and case-insensitive
    /// duplicates.
    pub fn add_category(&mut self, label: &str) {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return;
        }
        let known = self
            .categories
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(trimmed));
        if !known {
            self.categories.push(trimmed.to_string());
        }
    }
}
