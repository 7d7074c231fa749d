use url::form_urlencoded;

pub const PARAM_USERNAME: &str = "username";
pub const PARAM_THEME: &str = "theme";
pub const PARAM_WORD_VALUE: &str = "wordValue";
pub const PARAM_TIME_VALUE: &str = "timeValue";

pub const DEFAULT_THEME: &str = "serika_dark";
pub const DEFAULT_WORD_VALUE: &str = "10";
pub const DEFAULT_TIME_VALUE: &str = "15";

pub const WORD_VALUES: &[&str] = &["10", "25", "50", "100"];
pub const TIME_VALUES: &[&str] = &["15", "30", "60", "120"];

/// The four user-editable values that fully determine the card URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub username: String,
    pub theme: String,
    pub word_value: String,
    pub time_value: String,
}

impl ControlState {
    pub fn new(
        username: impl Into<String>,
        theme: impl Into<String>,
        word_value: impl Into<String>,
        time_value: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            theme: theme.into(),
            word_value: word_value.into(),
            time_value: time_value.into(),
        }
    }

    /// Overlays recognised parameters from a query string onto the defaults.
    ///
    /// A leading `?` is accepted. Values are taken verbatim; unknown keys are
    /// ignored and a repeated key keeps its last value.
    pub fn from_query(query: &str) -> Self {
        let mut state = Self::default();
        state.apply_query(query);
        state
    }

    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                PARAM_USERNAME => self.username = value.into_owned(),
                PARAM_THEME => self.theme = value.into_owned(),
                PARAM_WORD_VALUE => self.word_value = value.into_owned(),
                PARAM_TIME_VALUE => self.time_value = value.into_owned(),
                _ => {}
            }
        }
    }

    pub fn trimmed_username(&self) -> &str {
        self.username.trim()
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new("", DEFAULT_THEME, DEFAULT_WORD_VALUE, DEFAULT_TIME_VALUE)
    }
}

/// Options for a numeric selector, keeping `current` visible even when it is
/// not one of the standard buckets.
pub fn selector_options(buckets: &[&str], current: &str) -> Vec<String> {
    let mut options: Vec<String> = buckets.iter().map(|value| value.to_string()).collect();
    if !current.is_empty() && !buckets.contains(&current) {
        options.push(current.to_string());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_overrides_only_known_keys() {
        let state = ControlState::from_query("?username=bob&foo=1&timeValue=60");
        assert_eq!(state.username, "bob");
        assert_eq!(state.theme, DEFAULT_THEME);
        assert_eq!(state.word_value, DEFAULT_WORD_VALUE);
        assert_eq!(state.time_value, "60");
    }

    #[test]
    fn selector_keeps_unlisted_value() {
        let options = selector_options(WORD_VALUES, "42");
        assert_eq!(options.last().map(String::as_str), Some("42"));
        assert_eq!(selector_options(WORD_VALUES, "25").len(), WORD_VALUES.len());
    }
}
