/// Bridge to the extension host: active tab lookup and chrome.storage.local

use crate::bookmark::Bookmark;
use crate::error::{self, PopupError};
use crate::store::KeyValueStore;
use async_trait::async_trait;
use log::warn;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;
}

/// URL of the focused tab, or `None` when the host can't tell us
pub async fn active_tab_url() -> Option<String> {
    match query_active_tab().await {
        Ok(url) => url,
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

async fn query_active_tab() -> error::Result<Option<String>> {
    let url_js = getActiveTabUrl()
        .await
        .map_err(|e| PopupError::TabQuery(format!("{:?}", e)))?;

    Ok(url_js.as_string().filter(|url| !url.is_empty()))
}

/// [`KeyValueStore`] backed by `chrome.storage.local`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeStorage;

#[async_trait(?Send)]
impl KeyValueStore for ChromeStorage {
    async fn get(&self, key: &str) -> error::Result<Option<Vec<Bookmark>>> {
        let value_js = getStorage(key).await.map_err(|e| PopupError::StorageRead {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })?;

        if value_js.is_null() || value_js.is_undefined() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(value_js)
            .map(Some)
            .map_err(|e| PopupError::Decode {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    async fn set(&self, key: &str, bookmarks: &[Bookmark]) -> error::Result<()> {
        let value_js = serde_wasm_bindgen::to_value(bookmarks).map_err(|e| PopupError::Encode {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })?;

        setStorage(key, value_js)
            .await
            .map_err(|e| PopupError::StorageWrite {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
