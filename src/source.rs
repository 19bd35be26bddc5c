use crate::selection::SelectionMode;
use crate::word::WordEntry;

/// A batch fetch the front end should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadRequest {
    /// Increases with every request issued by one controller.
    pub id: u64,
    pub mode: SelectionMode,
    /// Replace the word on screen once the batch arrives. When false the
    /// batch only preloads the queue.
    pub refresh_current: bool,
    pub url: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("could not reach the word server: {message}")]
    Network { message: String },
    #[error("word server answered with status {code}")]
    Status { code: u16 },
    #[error("word server sent an unreadable batch: {message}")]
    Decode { message: String },
    #[error("word server sent no words")]
    EmptyBatch,
}

/// Decodes a JSON array of words. An empty array is an error.
pub fn parse_batch(json: &str) -> Result<Vec<WordEntry>, FetchError> {
    let batch: Vec<WordEntry> =
        serde_json::from_str(json).map_err(|error| FetchError::Decode {
            message: error.to_string(),
        })?;

    if batch.is_empty() {
        return Err(FetchError::EmptyBatch);
    }

    Ok(batch)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_batch(url: &str) -> Result<Vec<WordEntry>, FetchError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|error| FetchError::Network {
            message: error.to_string(),
        })?;

    if !response.ok() {
        return Err(FetchError::Status {
            code: response.status(),
        });
    }

    let body = response.text().await.map_err(|error| FetchError::Network {
        message: error.to_string(),
    })?;

    parse_batch(&body)
}

/// Batch the host page inlined as a global `words` array, if any.
#[cfg(target_arch = "wasm32")]
pub fn inline_batch() -> Option<Vec<WordEntry>> {
    use wasm_bindgen::JsValue;

    let words = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("words")).ok()?;
    if words.is_undefined() || words.is_null() {
        return None;
    }

    let json = js_sys::JSON::stringify(&words).ok()?.as_string()?;
    match parse_batch(&json) {
        Ok(batch) => Some(batch),
        Err(error) => {
            log::warn!("ignoring inlined words: {}", error);
            None
        }
    }
}
