//! WASM class source using gloo_net
//!
//! Fetches the class list through the browser's fetch API.

use gloo_net::http::Request;

use crate::error::{ErrorKind, Result};
use crate::interface::ClassSource;
use crate::model::{decode_class_list, ClassRecord};

/// Fetches `master_classes.json` (or any other URL) relative to the page
#[derive(Debug, Clone)]
pub struct WasmClient {
    url: String,
}

impl WasmClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ClassSource for WasmClient {
    async fn fetch_classes(&self) -> Result<Vec<ClassRecord>> {
        let resp = Request::get(&self.url).send().await?;

        log::debug!("Response status: {:?}", resp.status());

        if !resp.ok() {
            return Err(ErrorKind::HttpStatus(resp.status()).into());
        }

        let body = resp.text().await?;
        decode_class_list(&body)
    }
}
