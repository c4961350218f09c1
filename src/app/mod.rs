//! Application module - load, render and track the master class selection
//!
//! The functions here are platform independent; the WASM entry points live in
//! [`gloo`] and the native command runners in [`native`].

use crate::config::FETCH_ERROR_MESSAGE;
use crate::interface::{ClassSource, Container};
use crate::model::ClassRecord;
use crate::render::{render_day_sections, RenderNode};
use crate::schedule::group_by_day;

// Platform-specific modules
#[cfg(feature = "no-wasm")]
pub mod native;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::*;

/// Loads the class list and renders it into `container`.
///
/// Any failure, whether fetching or decoding, is logged and replaces the
/// container contents with a single error message. The returned list is
/// empty in that case.
pub async fn fetch_master_classes<S, C>(source: &S, container: Option<&mut C>) -> Vec<ClassRecord>
where
    S: ClassSource,
    C: Container + ?Sized,
{
    match source.fetch_classes().await {
        Ok(classes) => {
            log::debug!("Fetched {} master classes", classes.len());
            display_master_classes(&classes, container);
            classes
        }
        Err(e) => {
            log::error!("Error fetching master classes: {}", e);
            if let Some(container) = container {
                show_error(container);
            }
            Vec::new()
        }
    }
}

/// Replaces the container contents with one section per day.
///
/// Does nothing when there is no container. If rendering fails the error
/// message is shown instead.
pub fn display_master_classes<C>(classes: &[ClassRecord], container: Option<&mut C>)
where
    C: Container + ?Sized,
{
    let Some(container) = container else {
        return;
    };

    let groups = group_by_day(classes);
    let result = render_day_sections(&groups).and_then(|nodes| container.replace_children(&nodes));
    if let Err(e) = result {
        log::error!("Error rendering master classes: {}", e);
        show_error(container);
    }
}

fn show_error<C>(container: &mut C)
where
    C: Container + ?Sized,
{
    let error = RenderNode::Error(FETCH_ERROR_MESSAGE.to_string());
    if let Err(e) = container.replace_children(&[error]) {
        log::error!("Error showing the load failure: {}", e);
    }
}
