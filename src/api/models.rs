use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct RequestBody {
    pub model: String,
    pub messages: Vec<crate::models::Message>,
    pub stream: bool,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Value>>,
}
