use std::rc::Rc;

use gloo::net::http::Request;
use wasm_bindgen_futures::spawn_local;

use crate::app_core::AppCore;
use monkeycard_core::{parse_catalog, CatalogError, ConfigAction, ThemeRecord};

pub(crate) async fn fetch_catalog(url: &str) -> Result<Vec<ThemeRecord>, CatalogError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| CatalogError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| CatalogError::Fetch(err.to_string()))?;
    parse_catalog(&body)
}

/// Starts the one catalog fetch of this page; later calls do nothing.
pub(crate) fn load_catalog(core: Rc<AppCore>) {
    if !core.begin_catalog_load() {
        return;
    }
    let url = core.themes_url().to_string();
    gloo::console::log!("theme catalog: load", url.clone());
    spawn_local(async move {
        let result = fetch_catalog(&url).await;
        match &result {
            Ok(records) => gloo::console::log!("theme catalog: loaded", records.len()),
            Err(err) => gloo::console::warn!("theme catalog: unavailable", err.to_string()),
        }
        core.dispatch(ConfigAction::CatalogLoaded { result });
    });
}
