use std::collections::HashSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

pub const THEMES_PATH: &str = "/api/themes";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub name: String,
    pub bg_color: String,
    pub sub_alt_color: String,
    pub sub_color: String,
    pub main_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("theme catalog request failed: {0}")]
    Fetch(String),
    #[error("theme catalog returned status {0}")]
    Status(u16),
    #[error("theme catalog payload is invalid: {0}")]
    Decode(String),
}

/// Decodes the catalog body, dropping nameless records and keeping the first
/// record for each repeated name.
pub fn parse_catalog(body: &str) -> Result<Vec<ThemeRecord>, CatalogError> {
    let records: Vec<ThemeRecord> =
        serde_json::from_str(body).map_err(|err| CatalogError::Decode(err.to_string()))?;
    let mut seen = HashSet::new();
    Ok(records
        .into_iter()
        .filter(|record| !record.name.trim().is_empty())
        .filter(|record| seen.insert(record.name.clone()))
        .collect())
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum LoadState {
    Unloaded,
    Loading,
    Ready,
}

/// Theme records fetched once per page lifetime.
#[derive(Clone, Debug)]
pub struct ThemeCatalog {
    state: LoadState,
    records: Rc<[ThemeRecord]>,
    error: Option<CatalogError>,
}

impl ThemeCatalog {
    pub fn new() -> Self {
        Self {
            state: LoadState::Unloaded,
            records: Rc::from(Vec::new()),
            error: None,
        }
    }

    pub fn from_records(records: Vec<ThemeRecord>) -> Self {
        let mut catalog = Self::new();
        catalog.begin_load();
        catalog.finish_load(Ok(records));
        catalog
    }

    /// Returns `true` exactly once: the caller that gets `true` owns the fetch.
    pub fn begin_load(&mut self) -> bool {
        if self.state != LoadState::Unloaded {
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    pub fn finish_load(&mut self, result: Result<Vec<ThemeRecord>, CatalogError>) {
        match result {
            Ok(records) => {
                self.records = Rc::from(records);
                self.error = None;
            }
            Err(err) => {
                self.records = Rc::from(Vec::new());
                self.error = Some(err);
            }
        }
        self.state = LoadState::Ready;
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }

    pub fn records(&self) -> Rc<[ThemeRecord]> {
        Rc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn theme_by_name(&self, name: &str) -> Option<&ThemeRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.theme_by_name(name).is_some()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
