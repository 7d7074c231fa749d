mod app_core;
mod app_router;
mod clipboard;
mod persisted_store;
mod theme_fetch;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    yew_app::run();
}
