use crate::persisted_store;
use monkeycard_core::url_builder::DEFAULT_CARD_PATH;
use monkeycard_core::{CardEndpoint, ColorMode, ControlState, THEMES_PATH};

#[derive(Clone, Debug)]
pub(crate) struct InitConfig {
    pub(crate) endpoint: CardEndpoint,
    pub(crate) themes_url: String,
    pub(crate) control: ControlState,
    pub(crate) color_mode: ColorMode,
}

pub(crate) fn load_init_config() -> InitConfig {
    let mut control = ControlState::default();
    if let Some(search) = page_search() {
        control.apply_query(&search);
    }
    InitConfig {
        endpoint: CardEndpoint::new(&card_origin(), card_path()),
        themes_url: themes_url(),
        control,
        color_mode: persisted_store::load_color_mode(),
    }
}

fn build_override(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn card_origin() -> String {
    if let Some(origin) = build_override(option_env!("MONKEYCARD_CARD_ORIGIN")) {
        return origin.to_string();
    }
    page_origin().unwrap_or_default()
}

fn card_path() -> &'static str {
    build_override(option_env!("MONKEYCARD_CARD_PATH")).unwrap_or(DEFAULT_CARD_PATH)
}

fn themes_url() -> String {
    build_override(option_env!("MONKEYCARD_THEMES_URL"))
        .unwrap_or(THEMES_PATH)
        .to_string()
}

fn page_origin() -> Option<String> {
    let window = web_sys::window()?;
    let origin = window.location().origin().ok()?;
    if origin.trim().is_empty() || origin == "null" {
        return None;
    }
    Some(origin)
}

fn page_search() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    if search.trim().is_empty() {
        return None;
    }
    Some(search)
}
