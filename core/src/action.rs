use crate::catalog::{CatalogError, ThemeRecord};
use crate::debounce::DebounceToken;

pub const COPY_FAILED_MESSAGE: &str = "Copy failed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    Url,
    Markdown,
}

impl CopyTarget {
    pub fn success_message(self) -> &'static str {
        match self {
            CopyTarget::Url => "URL copied!",
            CopyTarget::Markdown => "Markdown copied!",
        }
    }
}

#[derive(Clone, Debug)]
pub enum ConfigAction {
    EditUsername { value: String },
    DebounceElapsed { token: DebounceToken },
    SelectTheme { name: String },
    SetWordValue { value: String },
    SetTimeValue { value: String },
    SetFilter { text: String },
    RandomTheme { seed: u64 },
    Refresh,
    ImageLoaded { seq: u64 },
    ImageFailed { seq: u64 },
    CatalogLoaded {
        result: Result<Vec<ThemeRecord>, CatalogError>,
    },
    CopyFinished { target: CopyTarget, ok: bool },
    ToastElapsed { generation: u64 },
    ToggleColorMode,
}
