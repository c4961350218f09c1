//! WASM application entry points
//!
//! [`start`] runs when the module is instantiated and mounts the selection
//! into the default container; [`mount`] does the same for an explicit
//! element and hook.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::fetch_master_classes;
use crate::client::WasmClient;
use crate::config::AppConfig;
use crate::container::DomContainer;
use crate::interface::{NoHook, SelectionHook};
use crate::model::ClassRecord;
use crate::selection::SelectionTracker;

/// Fetches the class list from `config.resource_url` and renders it into
/// `element`, calling `hook` whenever a checkbox changes.
pub async fn mount<H>(element: Element, config: &AppConfig, hook: H) -> Vec<ClassRecord>
where
    H: SelectionHook + 'static,
{
    let source = WasmClient::new(config.resource_url.as_str());

    let mut container = match DomContainer::new(element) {
        Ok(container) => container,
        Err(e) => {
            log::error!("Error preparing the master class container: {}", e);
            return fetch_master_classes::<_, DomContainer>(&source, None).await;
        }
    };

    let reader = container.clone();
    let tracker = SelectionTracker::new(hook);
    let on_change: Rc<dyn Fn()> = Rc::new(move || {
        tracker.handle_selection_change(&reader);
    });
    container = container.with_on_change(on_change);

    fetch_master_classes(&source, Some(&mut container)).await
}

/// Runs when the module is instantiated, not on `DOMContentLoaded`: load the
/// module after the container element exists (e.g. as a deferred module
/// script), or call [`mount`] explicitly.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    wasm_bindgen_futures::spawn_local(async {
        let config = AppConfig::default();
        match DomContainer::find(&config.container_id) {
            Some(container) => {
                mount(container.element().clone(), &config, NoHook).await;
            }
            None => {
                log::warn!("No element with id {} to render into", config.container_id);
                let source = WasmClient::new(config.resource_url.as_str());
                fetch_master_classes::<_, DomContainer>(&source, None).await;
            }
        }
    });
}
