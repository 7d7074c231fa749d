use url::form_urlencoded;

use crate::control::{
    ControlState, PARAM_THEME, PARAM_TIME_VALUE, PARAM_USERNAME, PARAM_WORD_VALUE,
};

pub const DEFAULT_CARD_PATH: &str = "/monkeytype.svg";
pub const MARKDOWN_ALT: &str = "Monkeytype Stats";

/// Where the card image is rendered: `origin` has no trailing slash and `path`
/// always starts with one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardEndpoint {
    origin: String,
    path: String,
}

impl CardEndpoint {
    pub fn new(origin: &str, path: &str) -> Self {
        let origin = origin.trim().trim_end_matches('/').to_string();
        let path = path.trim();
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self { origin, path }
    }

    pub fn with_origin(origin: &str) -> Self {
        Self::new(origin, DEFAULT_CARD_PATH)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

pub fn build_query(state: &ControlState) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(PARAM_USERNAME, state.trimmed_username())
        .append_pair(PARAM_THEME, &state.theme)
        .append_pair(PARAM_WORD_VALUE, &state.word_value)
        .append_pair(PARAM_TIME_VALUE, &state.time_value)
        .finish()
}

pub fn build_image_url(endpoint: &CardEndpoint, state: &ControlState) -> String {
    format!(
        "{}{}?{}",
        endpoint.origin,
        endpoint.path,
        build_query(state)
    )
}

pub fn build_markdown(url: &str) -> String {
    format!("![{MARKDOWN_ALT}]({url})")
}
