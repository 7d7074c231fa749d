use rand::Rng;

use crate::catalog::{ThemeCatalog, ThemeRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeSwatch {
    pub bg: String,
    pub sub_alt: String,
    pub sub: String,
    pub main: String,
    pub text: String,
}

impl From<&ThemeRecord> for ThemeSwatch {
    fn from(record: &ThemeRecord) -> Self {
        Self {
            bg: record.bg_color.clone(),
            sub_alt: record.sub_alt_color.clone(),
            sub: record.sub_color.clone(),
            main: record.main_color.clone(),
            text: record.text_color.clone(),
        }
    }
}

/// One selectable entry of the rendered grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeEntry {
    pub id: String,
    pub label: String,
    pub colors: ThemeSwatch,
    pub is_active: bool,
}

pub fn display_label(name: &str) -> String {
    name.replace('_', " ")
}

pub fn matches_filter(name: &str, filter: &str) -> bool {
    let needle = filter.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    display_label(name).to_lowercase().contains(&needle)
}

/// Projects the catalog through `filter`, marking the entry named `active_id`.
///
/// Names are unique in a loaded catalog, so at most one entry is active.
pub fn render(catalog: &[ThemeRecord], filter: &str, active_id: &str) -> Vec<ThemeEntry> {
    catalog
        .iter()
        .filter(|record| matches_filter(&record.name, filter))
        .map(|record| ThemeEntry {
            id: record.name.clone(),
            label: display_label(&record.name),
            colors: ThemeSwatch::from(record),
            is_active: record.name == active_id,
        })
        .collect()
}

pub fn entry_dom_id(id: &str) -> String {
    format!("theme-{id}")
}

/// Filter text plus a pending scroll request for the view.
#[derive(Clone, Debug, Default)]
pub struct ThemeGrid {
    filter: String,
    scroll_request: Option<ScrollRequest>,
    scroll_nonce: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub nonce: u64,
    pub id: String,
}

impl ThemeGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    pub fn entries(&self, catalog: &ThemeCatalog, active_id: &str) -> Vec<ThemeEntry> {
        render(&catalog.records(), &self.filter, active_id)
    }

    /// Uniform pick over the whole catalog, ignoring the filter. Clears the
    /// filter and queues a scroll to the picked entry. `None` on an empty
    /// catalog, leaving the grid untouched.
    pub fn pick_random<R: Rng + ?Sized>(
        &mut self,
        catalog: &ThemeCatalog,
        rng: &mut R,
    ) -> Option<String> {
        let records = catalog.records();
        if records.is_empty() {
            return None;
        }
        let index = rng.random_range(0..records.len());
        let id = records[index].name.clone();
        self.clear_filter();
        self.scroll_nonce = self.scroll_nonce.wrapping_add(1);
        self.scroll_request = Some(ScrollRequest {
            nonce: self.scroll_nonce,
            id: id.clone(),
        });
        Some(id)
    }

    pub fn scroll_request(&self) -> Option<&ScrollRequest> {
        self.scroll_request.as_ref()
    }
}
