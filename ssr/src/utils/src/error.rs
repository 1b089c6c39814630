use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum AutoplayError {
    #[error("`window` is not available")]
    NoWindow,
    #[error("`document` is not available")]
    NoDocument,
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
}

impl AutoplayError {
    pub fn selector(selector: &str, err: JsValue) -> Self {
        Self::Selector {
            selector: selector.to_string(),
            reason: js_reason(&err),
        }
    }

    pub fn observer(err: JsValue) -> Self {
        Self::Observer(js_reason(&err))
    }
}

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub type Result<T> = std::result::Result<T, AutoplayError>;
