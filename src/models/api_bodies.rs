use serde::Deserialize;
use serde_json::Value;

/// Body of a successful signup/unregister call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MutationReply {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a failed call. FastAPI-style backends put a string in `detail`,
/// but validation failures carry a list there, so keep it loose.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
