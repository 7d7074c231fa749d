use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::action::{ConfigAction, CopyTarget, COPY_FAILED_MESSAGE};
use crate::catalog::ThemeCatalog;
use crate::color_mode::ColorMode;
use crate::control::ControlState;
use crate::debounce::{DebounceToken, InputDebounce};
use crate::grid::{ScrollRequest, ThemeEntry, ThemeGrid};
use crate::preview::{Preview, PreviewState, PreviewTicket};
use crate::toast::Toast;
use crate::url_builder::{build_image_url, build_markdown, CardEndpoint};

/// What the host has to do after an action: start timers, load the new image
/// source, persist the color mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub changed: bool,
    pub recomputed: Option<PreviewTicket>,
    pub debounce: Option<DebounceToken>,
    pub toast: Option<u64>,
    pub color_mode: Option<ColorMode>,
}

impl Effects {
    fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfiguratorSnapshot {
    pub control: ControlState,
    pub filter: String,
    pub entries: Vec<ThemeEntry>,
    pub catalog_loading: bool,
    pub catalog_len: usize,
    pub theme_resolved: bool,
    pub preview_state: PreviewState,
    pub preview_seq: u64,
    pub url: String,
    pub markdown: String,
    pub error_message: Option<&'static str>,
    pub toast: Option<String>,
    pub color_mode: ColorMode,
    pub scroll_request: Option<ScrollRequest>,
}

/// Single source of truth for the card builder.
#[derive(Clone, Debug)]
pub struct Configurator {
    endpoint: CardEndpoint,
    control: ControlState,
    catalog: ThemeCatalog,
    grid: ThemeGrid,
    preview: Preview,
    debounce: InputDebounce,
    toast: Toast,
    color_mode: ColorMode,
}

impl Configurator {
    pub fn new(endpoint: CardEndpoint, control: ControlState, color_mode: ColorMode) -> Self {
        Self {
            endpoint,
            control,
            catalog: ThemeCatalog::new(),
            grid: ThemeGrid::new(),
            preview: Preview::new(),
            debounce: InputDebounce::new(),
            toast: Toast::new(),
            color_mode,
        }
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn toast_message(&self) -> Option<&str> {
        self.toast.message()
    }

    pub fn filter(&self) -> &str {
        self.grid.filter()
    }

    pub fn entries(&self) -> Vec<ThemeEntry> {
        self.grid.entries(&self.catalog, &self.control.theme)
    }

    pub fn derived_url(&self) -> String {
        build_image_url(&self.endpoint, &self.control)
    }

    pub fn begin_catalog_load(&mut self) -> bool {
        self.catalog.begin_load()
    }

    /// Returns the text for `target`, first flushing a pending username edit
    /// so the copied text, the output field and the image agree.
    pub fn prepare_copy(&mut self, target: CopyTarget) -> (String, Effects) {
        let mut effects = Effects::default();
        if self.debounce.is_pending() {
            effects = self.recompute();
        }
        let url = match self.preview.url() {
            Some(url) => url.to_string(),
            None => self.derived_url(),
        };
        let text = match target {
            CopyTarget::Url => url,
            CopyTarget::Markdown => build_markdown(&url),
        };
        (text, effects)
    }

    pub fn apply(&mut self, action: ConfigAction) -> Effects {
        match action {
            ConfigAction::EditUsername { value } => {
                self.control.username = value;
                Effects {
                    debounce: Some(self.debounce.arm()),
                    ..Effects::changed()
                }
            }
            ConfigAction::DebounceElapsed { token } => {
                if !self.debounce.fire(token) {
                    return Effects::default();
                }
                self.recompute()
            }
            ConfigAction::SelectTheme { name } => {
                self.control.theme = name;
                self.recompute()
            }
            ConfigAction::SetWordValue { value } => {
                self.control.word_value = value;
                self.recompute()
            }
            ConfigAction::SetTimeValue { value } => {
                self.control.time_value = value;
                self.recompute()
            }
            ConfigAction::SetFilter { text } => {
                self.grid.set_filter(&text);
                Effects::changed()
            }
            ConfigAction::RandomTheme { seed } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                let Some(name) = self.grid.pick_random(&self.catalog, &mut rng) else {
                    return Effects::default();
                };
                self.control.theme = name;
                self.recompute()
            }
            ConfigAction::Refresh => self.recompute(),
            ConfigAction::ImageLoaded { seq } => Effects {
                changed: self.preview.image_loaded(seq),
                ..Effects::default()
            },
            ConfigAction::ImageFailed { seq } => Effects {
                changed: self.preview.image_failed(seq),
                ..Effects::default()
            },
            ConfigAction::CatalogLoaded { result } => {
                self.catalog.finish_load(result);
                Effects::changed()
            }
            ConfigAction::CopyFinished { target, ok } => {
                let message = if ok {
                    target.success_message()
                } else {
                    COPY_FAILED_MESSAGE
                };
                self.show_toast(message)
            }
            ConfigAction::ToastElapsed { generation } => Effects {
                changed: self.toast.dismiss(generation),
                ..Effects::default()
            },
            ConfigAction::ToggleColorMode => {
                self.color_mode = self.color_mode.toggled();
                Effects {
                    color_mode: Some(self.color_mode),
                    ..Effects::changed()
                }
            }
        }
    }

    pub fn show_toast(&mut self, message: &str) -> Effects {
        Effects {
            toast: Some(self.toast.show(message)),
            ..Effects::changed()
        }
    }

    /// Derives the URL from the current state. Any pending username edit is
    /// already part of that state, so its timer is cancelled.
    fn recompute(&mut self) -> Effects {
        self.debounce.cancel();
        let url = self.derived_url();
        Effects {
            recomputed: Some(self.preview.recompute(url)),
            ..Effects::changed()
        }
    }

    pub fn snapshot(&self) -> ConfiguratorSnapshot {
        let url = self.preview.url().unwrap_or_default().to_string();
        let markdown = if url.is_empty() {
            String::new()
        } else {
            build_markdown(&url)
        };
        ConfiguratorSnapshot {
            control: self.control.clone(),
            filter: self.grid.filter().to_string(),
            entries: self.entries(),
            catalog_loading: !self.catalog.is_ready(),
            catalog_len: self.catalog.len(),
            theme_resolved: self.catalog.contains(&self.control.theme),
            preview_state: self.preview.state(),
            preview_seq: self.preview.seq(),
            url,
            markdown,
            error_message: self.preview.error_message(),
            toast: self.toast.message().map(str::to_string),
            color_mode: self.color_mode,
            scroll_request: self.grid.scroll_request().cloned(),
        }
    }
}
