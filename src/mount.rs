//! Mounting
//!
//! Resolves the host document, config and mount element once at startup and
//! hands them to the component tree.

use leptos::prelude::*;
use log::{error, info};
use task_list::TodoConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::app::App;

/// Id of the optional `<script type="application/json">` holding config overrides
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No browser document available")]
    NoDocument,

    #[error("Mount element #{0} not found")]
    MissingHost(String),
}

/// Load config from the host page and mount the app
pub fn start() -> Result<(), AppError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(AppError::NoDocument)?;

    let config = load_config(&document);
    log::set_max_level(config.level_filter());

    let host = host_element(&document, &config)?;
    info!("[APP] Mounting task list");
    leptos::mount::mount_to(host, move || view! { <App config=config /> }).forget();
    Ok(())
}

/// Config from the host page, or the defaults when absent or invalid
pub fn load_config(document: &Document) -> TodoConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return TodoConfig::default();
    };
    let json = element.text_content().unwrap_or_default();
    match TodoConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            error!("[APP] Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            TodoConfig::default()
        }
    }
}

fn host_element(document: &Document, config: &TodoConfig) -> Result<HtmlElement, AppError> {
    if config.mount_id.is_empty() {
        return document.body().ok_or(AppError::NoDocument);
    }
    document
        .get_element_by_id(&config.mount_id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| AppError::MissingHost(config.mount_id.clone()))
}
