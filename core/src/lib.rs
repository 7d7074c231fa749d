pub mod action;
pub mod catalog;
pub mod color_mode;
pub mod configurator;
pub mod control;
pub mod debounce;
pub mod grid;
pub mod preview;
pub mod toast;
pub mod url_builder;

pub use action::{ConfigAction, CopyTarget, COPY_FAILED_MESSAGE};
pub use catalog::{parse_catalog, CatalogError, ThemeCatalog, ThemeRecord, THEMES_PATH};
pub use color_mode::{ColorMode, COLOR_MODE_KEY};
pub use configurator::{Configurator, ConfiguratorSnapshot, Effects};
pub use control::{ControlState, TIME_VALUES, WORD_VALUES};
pub use debounce::{DebounceToken, InputDebounce, USERNAME_DEBOUNCE_MS};
pub use grid::{ScrollRequest, ThemeEntry, ThemeGrid, ThemeSwatch};
pub use preview::{Preview, PreviewState, PreviewTicket, PREVIEW_ERROR_MESSAGE};
pub use toast::{Toast, TOAST_DURATION_MS};
pub use url_builder::{build_image_url, build_markdown, CardEndpoint};
