use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, HtmlDocument, HtmlElement, HtmlTextAreaElement};

#[derive(Debug, thiserror::Error)]
pub(crate) enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("copy command failed")]
    CommandFailed,
}

/// Copies `text`, falling back to a hidden textarea and the copy command when
/// the async clipboard API is missing or refuses the write.
pub(crate) async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    match write_with_clipboard_api(text).await {
        Ok(()) => return Ok(()),
        Err(err) => gloo::console::log!("clipboard: using fallback", err.to_string()),
    }
    copy_with_fallback(text)
}

async fn write_with_clipboard_api(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    if !window.is_secure_context() {
        return Err(ClipboardError::Unavailable);
    }
    let navigator = window.navigator();
    let value = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if value.is_undefined() || value.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    let clipboard: Clipboard = value.unchecked_into();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|err| ClipboardError::Rejected(js_err(err)))?;
    Ok(())
}

fn copy_with_fallback(text: &str) -> Result<(), ClipboardError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ClipboardError::Unavailable)?;
    let body = document.body().ok_or(ClipboardError::Unavailable)?;
    let textarea = document
        .create_element("textarea")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlTextAreaElement>().ok())
        .ok_or(ClipboardError::Unavailable)?;
    textarea.set_value(text);
    textarea.set_read_only(true);
    let _ = textarea.set_attribute("aria-hidden", "true");
    let _ = textarea.set_attribute("tabindex", "-1");
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("top", "0");
    let _ = style.set_property("left", "-9999px");
    let _ = style.set_property("opacity", "0");

    let previous_focus = document.active_element();
    body.append_child(&textarea)
        .map_err(|_| ClipboardError::Unavailable)?;
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|html| html.exec_command("copy").ok())
        .unwrap_or(false);
    textarea.remove();
    if let Some(element) = previous_focus.and_then(|element| element.dyn_into::<HtmlElement>().ok()) {
        let _ = element.focus();
    }
    if copied {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed)
    }
}

fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
