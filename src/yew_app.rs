use std::rc::Rc;

use js_sys::{Date, Math};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::app_core::AppCore;
use crate::app_router;
use crate::clipboard;
use crate::persisted_store;
use crate::theme_fetch;
use monkeycard_core::control::selector_options;
use monkeycard_core::grid::entry_dom_id;
use monkeycard_core::{
    ColorMode, ConfigAction, CopyTarget, PreviewState, ThemeEntry, TIME_VALUES, WORD_VALUES,
};

#[derive(Properties)]
struct AppProps {
    core: Rc<AppCore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

fn random_seed() -> u64 {
    let high = (Math::random() * f64::from(u32::MAX)) as u64;
    let low = Date::now().max(0.0) as u64;
    (high << 32) ^ low
}

fn scroll_entry_into_view(id: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(&entry_dom_id(id)) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn on_select_change<F>(app_core: Rc<AppCore>, action: F) -> Callback<Event>
where
    F: Fn(String) -> ConfigAction + 'static,
{
    Callback::from(move |event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        app_core.dispatch(action(select.value()));
    })
}

fn on_copy(app_core: Rc<AppCore>, target: CopyTarget) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        let app_core = app_core.clone();
        let text = app_core.prepare_copy(target);
        spawn_local(async move {
            let ok = match clipboard::copy_text(&text).await {
                Ok(()) => true,
                Err(err) => {
                    gloo::console::warn!("clipboard: copy failed", err.to_string());
                    false
                }
            };
            app_core.dispatch(ConfigAction::CopyFinished { target, ok });
        });
    })
}

fn selector_html(id: &'static str, options: Vec<String>, current: &str, onchange: Callback<Event>) -> Html {
    html! {
        <select id={id} {onchange}>
            { for options.into_iter().map(|value| {
                let selected = value == current;
                html! { <option value={value.clone()} {selected}>{ value }</option> }
            }) }
        </select>
    }
}

fn theme_button(app_core: &Rc<AppCore>, entry: &ThemeEntry) -> Html {
    let onclick = {
        let app_core = app_core.clone();
        let name = entry.id.clone();
        Callback::from(move |_: MouseEvent| {
            app_core.dispatch(ConfigAction::SelectTheme { name: name.clone() });
        })
    };
    let colors = &entry.colors;
    let style = format!(
        "--theme-bg: {}; --theme-sub-alt: {}; --theme-sub: {}; --theme-main: {}; --theme-text: {};",
        colors.bg, colors.sub_alt, colors.sub, colors.main, colors.text
    );
    html! {
        <button
            key={entry.id.clone()}
            id={entry_dom_id(&entry.id)}
            type="button"
            class={classes!("theme-button", entry.is_active.then_some("active"))}
            aria-pressed={entry.is_active.to_string()}
            title={entry.id.clone()}
            {style}
            {onclick}
        >
            <span class="theme-swatch">
                <span class="dot main"></span>
                <span class="dot sub"></span>
                <span class="dot text"></span>
            </span>
            <span class="theme-label">{ entry.label.clone() }</span>
        </button>
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let app_core = props.core.clone();
    let snapshot = use_state(|| app_core.snapshot());

    {
        let app_core = app_core.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let weak = Rc::downgrade(&app_core);
            let subscription = app_core.subscribe(Rc::new(move || {
                if let Some(core) = weak.upgrade() {
                    snapshot.set(core.snapshot());
                }
            }));
            theme_fetch::load_catalog(app_core.clone());
            move || drop(subscription)
        });
    }

    {
        let scroll_request = snapshot.scroll_request.clone();
        use_effect_with(scroll_request, move |request| {
            if let Some(request) = request {
                scroll_entry_into_view(&request.id);
            }
            || ()
        });
    }

    use_effect_with(snapshot.color_mode, move |mode| {
        persisted_store::apply_color_mode(*mode);
        || ()
    });

    let on_username_input = {
        let app_core = app_core.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            app_core.dispatch(ConfigAction::EditUsername { value: input.value() });
        })
    };
    let on_filter_input = {
        let app_core = app_core.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            app_core.dispatch(ConfigAction::SetFilter { text: input.value() });
        })
    };
    let on_word_change =
        on_select_change(app_core.clone(), |value| ConfigAction::SetWordValue { value });
    let on_time_change =
        on_select_change(app_core.clone(), |value| ConfigAction::SetTimeValue { value });
    let on_random = {
        let app_core = app_core.clone();
        Callback::from(move |_: MouseEvent| {
            app_core.dispatch(ConfigAction::RandomTheme { seed: random_seed() });
        })
    };
    let on_refresh = {
        let app_core = app_core.clone();
        Callback::from(move |_: MouseEvent| app_core.dispatch(ConfigAction::Refresh))
    };
    let on_mode_toggle = {
        let app_core = app_core.clone();
        Callback::from(move |_: MouseEvent| app_core.dispatch(ConfigAction::ToggleColorMode))
    };
    let on_copy_url = on_copy(app_core.clone(), CopyTarget::Url);
    let on_copy_markdown = on_copy(app_core.clone(), CopyTarget::Markdown);

    let seq = snapshot.preview_seq;
    let on_image_load = {
        let app_core = app_core.clone();
        Callback::from(move |_: Event| app_core.dispatch(ConfigAction::ImageLoaded { seq }))
    };
    let on_image_error = {
        let app_core = app_core.clone();
        let url = snapshot.url.clone();
        Callback::from(move |_: Event| {
            gloo::console::warn!("preview: image failed", url.clone());
            app_core.dispatch(ConfigAction::ImageFailed { seq });
        })
    };

    let control = &snapshot.control;
    let theme_grid = if snapshot.catalog_loading {
        html! { <p class="theme-grid-status">{ "Loading themes…" }</p> }
    } else if snapshot.entries.is_empty() {
        html! { <p class="theme-grid-status">{ "No themes found" }</p> }
    } else {
        html! {
            <div class="theme-grid" role="listbox">
                { for snapshot.entries.iter().map(|entry| theme_button(&app_core, entry)) }
            </div>
        }
    };
    let theme_hint = if snapshot.theme_resolved || snapshot.catalog_loading {
        html! {}
    } else {
        html! { <span class="theme-hint">{ "not in catalog" }</span> }
    };

    let preview_class = classes!(
        "preview",
        match snapshot.preview_state {
            PreviewState::Idle => "idle",
            PreviewState::Loading => "loading",
            PreviewState::Loaded => "loaded",
            PreviewState::Errored => "errored",
        }
    );
    let preview_image = if snapshot.url.is_empty() {
        html! {}
    } else {
        html! {
            <img
                key={seq.to_string()}
                id="card-preview"
                src={snapshot.url.clone()}
                alt="Monkeytype stats card preview"
                onload={on_image_load}
                onerror={on_image_error}
            />
        }
    };
    let preview_error = match snapshot.error_message {
        Some(message) => html! { <p class="preview-error" role="alert">{ message }</p> },
        None => html! {},
    };
    let toast = match snapshot.toast.as_ref() {
        Some(message) => html! { <div class="toast" role="status">{ message.clone() }</div> },
        None => html! {},
    };
    let mode_label = match snapshot.color_mode {
        ColorMode::Light => "Dark mode",
        ColorMode::Dark => "Light mode",
    };

    html! {
        <main class="builder">
            <header class="builder-header">
                <h1>{ "Monkeytype stats card" }</h1>
                <button id="mode-toggle" type="button" onclick={on_mode_toggle}>{ mode_label }</button>
            </header>
            <section class="controls">
                <label for="username">{ "Username" }</label>
                <input
                    id="username"
                    type="text"
                    autocomplete="off"
                    spellcheck="false"
                    value={control.username.clone()}
                    oninput={on_username_input}
                />
                <label for="wordValue">{ "Words" }</label>
                { selector_html("wordValue", selector_options(WORD_VALUES, &control.word_value), &control.word_value, on_word_change) }
                <label for="timeValue">{ "Time" }</label>
                { selector_html("timeValue", selector_options(TIME_VALUES, &control.time_value), &control.time_value, on_time_change) }
                <div class="theme-current">
                    { "Theme: " }<code>{ control.theme.clone() }</code>{ theme_hint }
                </div>
            </section>
            <section class="themes">
                <div class="theme-toolbar">
                    <input
                        id="theme-search"
                        type="search"
                        placeholder="Search themes"
                        value={snapshot.filter.clone()}
                        oninput={on_filter_input}
                    />
                    <button
                        id="random-theme"
                        type="button"
                        disabled={snapshot.catalog_len == 0}
                        onclick={on_random}
                    >
                        { "Random" }
                    </button>
                </div>
                { theme_grid }
            </section>
            <section class={preview_class}>
                <div class="preview-image">{ preview_image }</div>
                { preview_error }
                <button id="preview-btn" type="button" onclick={on_refresh}>{ "Preview" }</button>
            </section>
            <section class="output">
                <input id="output" type="text" readonly=true value={snapshot.url.clone()} />
                <div class="output-actions">
                    <button id="copy-url" type="button" onclick={on_copy_url}>{ "Copy URL" }</button>
                    <button id="copy-md" type="button" onclick={on_copy_markdown}>{ "Copy Markdown" }</button>
                </div>
            </section>
            { toast }
        </main>
    }
}

pub(crate) fn run() {
    let config = app_router::load_init_config();
    persisted_store::apply_color_mode(config.color_mode);
    let core = AppCore::new(config);
    core.dispatch(ConfigAction::Refresh);
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("app"));
    match root {
        Some(root) => {
            let _app_handle = yew::Renderer::<App>::with_root_and_props(root, AppProps { core }).render();
        }
        None => {
            let _app_handle = yew::Renderer::<App>::with_props(AppProps { core }).render();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::app_router::InitConfig;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use monkeycard_core::{CardEndpoint, ControlState};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(core: Rc<AppCore>) -> web_sys::Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let _app_handle =
            yew::Renderer::<App>::with_root_and_props(root.clone(), AppProps { core }).render();
        root
    }

    fn test_core() -> Rc<AppCore> {
        AppCore::new(InitConfig {
            endpoint: CardEndpoint::with_origin("http://localhost:1"),
            themes_url: "http://localhost:1/api/themes".to_string(),
            control: ControlState::new("alice", "serika_dark", "50", "30"),
            color_mode: ColorMode::Dark,
        })
    }

    #[wasm_bindgen_test(async)]
    async fn output_field_matches_preview_source() {
        set_panic_hook();
        let core = test_core();
        core.dispatch(ConfigAction::Refresh);
        let root = mount(core.clone());
        TimeoutFuture::new(50).await;

        let expected = "http://localhost:1/monkeytype.svg?username=alice&theme=serika_dark&wordValue=50&timeValue=30";
        let output: HtmlInputElement = root
            .query_selector("#output")
            .ok()
            .flatten()
            .expect("output field")
            .dyn_into()
            .expect("input element");
        assert_eq!(output.value(), expected);
        let image = root
            .query_selector("#card-preview")
            .ok()
            .flatten()
            .expect("preview image");
        assert_eq!(image.get_attribute("src").as_deref(), Some(expected));
    }

    #[wasm_bindgen_test(async)]
    async fn unreachable_catalog_leaves_grid_empty_and_random_disabled() {
        set_panic_hook();
        let core = test_core();
        core.dispatch(ConfigAction::Refresh);
        let root = mount(core.clone());
        let start = Date::now();
        while core.snapshot().catalog_loading {
            if Date::now() - start > 5000.0 {
                panic!("catalog load did not settle");
            }
            TimeoutFuture::new(20).await;
        }
        TimeoutFuture::new(20).await;

        assert!(root.query_selector(".theme-button").ok().flatten().is_none());
        let random = root
            .query_selector("#random-theme")
            .ok()
            .flatten()
            .expect("random button");
        assert!(random.has_attribute("disabled"));
        assert_eq!(core.snapshot().control.theme, "serika_dark");
    }
}
