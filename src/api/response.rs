use crate::error::{DeskmateError, Result};
use serde_json::Value;

/// The assistant message pulled out of a chat-completions response: final
/// text, one or more tool-call requests, or both.
pub struct AssistantReply {
    pub content: Option<String>,
    pub tool_calls: Option<Vec<Value>>,
}

/// Parse a non-streaming chat-completions body into an [`AssistantReply`].
///
/// Tool-call entries are kept as raw `Value`s so that malformed entries can
/// be reported individually instead of failing the whole reply. An empty
/// `tool_calls` array counts as no tool calls.
pub fn parse_assistant_reply(response_json: &Value) -> Result<AssistantReply> {
    let message = assistant_message(response_json)?;

    let tool_calls = message
        .get("tool_calls")
        .and_then(|tc| tc.as_array())
        .filter(|calls| !calls.is_empty())
        .cloned();

    let content = message
        .get("content")
        .and_then(|c| c.as_str())
        .map(|s| s.to_string());

    Ok(AssistantReply {
        content,
        tool_calls,
    })
}

fn assistant_message(response_json: &Value) -> Result<&Value> {
    let choices = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| DeskmateError::Other("No choices in response".to_string()))?;

    let first_choice = choices
        .first()
        .ok_or_else(|| DeskmateError::Other("Empty choices array".to_string()))?;

    first_choice
        .get("message")
        .ok_or_else(|| DeskmateError::Other("No message in response".to_string()))
}
