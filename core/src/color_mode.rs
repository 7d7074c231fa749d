pub const COLOR_MODE_KEY: &str = "monkeycard.color_mode";

const LIGHT_MARKER: &str = "light";
const DARK_MARKER: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    /// Anything other than the light marker, including nothing, is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(LIGHT_MARKER) => ColorMode::Light,
            _ => ColorMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => LIGHT_MARKER,
            ColorMode::Dark => DARK_MARKER,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}
