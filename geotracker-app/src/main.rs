use leptos::*;
use wasm_bindgen::JsCast;

use geotracker_app::App;

const APP_CONTAINER_ID: &str = "app";

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    let app_container = document()
        .get_element_by_id(APP_CONTAINER_ID)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(app_container) = app_container {
        mount_to(app_container, App);
    } else {
        log::warn!("No #{APP_CONTAINER_ID} element found, mount into body");
        mount_to_body(App);
    }
}
