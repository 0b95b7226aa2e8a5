use crate::api::{make_api_request, parse_assistant_reply, RequestBody};
use crate::config::Config;
use crate::error::{DeskmateError, Result};
use crate::models::{Message, Session, ToolCall};
use crate::tools::ToolRegistry;
use crate::ui::{display_tool_call, display_tool_error, display_tool_result};
use colored::Colorize;
use serde_json::{json, Value};

/// What one model reply did to the session: produced the turn's final text,
/// or requested tools whose results are now appended and need a follow-up
/// request.
pub enum StepOutcome {
    Final(String),
    ToolRoundComplete,
}

/// Run one full turn: user text in, final assistant text out.
///
/// The first request advertises the registered tool schemas. If the model
/// answers with tool calls, each is dispatched in the order received and its
/// result appended as a `tool` message; the follow-up request then carries
/// no tools, matching the single tool round per turn. Endpoint failures end
/// the turn as errors but leave the history accumulated so far in place.
pub async fn run_turn(
    config: &Config,
    registry: &ToolRegistry,
    session: &mut Session,
    user_text: &str,
) -> Result<String> {
    session.push(Message {
        role: "user".to_string(),
        content: Some(user_text.to_string()),
        tool_calls: None,
        tool_call_id: None,
    });

    let tools = if registry.is_empty() {
        None
    } else {
        Some(registry.descriptors())
    };

    let reply = request_completion(config, session, tools).await?;
    match apply_reply(registry, session, &reply).await? {
        StepOutcome::Final(text) => Ok(text),
        StepOutcome::ToolRoundComplete => {
            let reply = request_completion(config, session, None).await?;
            match apply_reply(registry, session, &reply).await? {
                StepOutcome::Final(text) => Ok(text),
                StepOutcome::ToolRoundComplete => Err(DeskmateError::Other(
                    "model requested tools on the follow-up request".to_string(),
                )),
            }
        }
    }
}

async fn request_completion(
    config: &Config,
    session: &Session,
    tools: Option<Vec<Value>>,
) -> Result<Value> {
    if config.verbose {
        eprintln!(
            "{}",
            format!(
                "[ai] requesting completion ({} messages, tools: {})",
                session.len(),
                if tools.is_some() { "yes" } else { "no" }
            )
            .dimmed()
        );
    }

    let request_body = RequestBody {
        model: config.model.clone(),
        messages: session.messages.clone(),
        stream: false,
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        tools,
    };

    let response = make_api_request(
        &config.api_key,
        &config.api_endpoint,
        config.request_timeout,
        &request_body,
    )
    .await?;

    if config.verbose {
        eprintln!(
            "{}",
            format!("[ai] response status: {}", response.status()).dimmed()
        );
    }

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(DeskmateError::ApiError { status, message });
    }

    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Fold one assistant reply into the session.
///
/// A reply with tool calls appends the assistant message followed by one
/// `tool` message per call, each tagged with the originating call id.
/// Dispatch failures are not fatal: they become `{"error": ...}` tool
/// results so the model can explain them in its final answer.
pub async fn apply_reply(
    registry: &ToolRegistry,
    session: &mut Session,
    response_json: &Value,
) -> Result<StepOutcome> {
    let reply = parse_assistant_reply(response_json)?;

    if let Some(tool_calls) = reply.tool_calls {
        let typed: Vec<ToolCall> = tool_calls
            .iter()
            .filter_map(|tc| serde_json::from_value(tc.clone()).ok())
            .collect();

        session.push(Message {
            role: "assistant".to_string(),
            content: reply.content,
            tool_calls: if typed.is_empty() { None } else { Some(typed) },
            tool_call_id: None,
        });

        for tool_call in &tool_calls {
            let result = execute_tool_call(registry, tool_call).await;
            session.push(result);
        }

        return Ok(StepOutcome::ToolRoundComplete);
    }

    match reply.content {
        Some(content) => {
            session.push(Message {
                role: "assistant".to_string(),
                content: Some(content.clone()),
                tool_calls: None,
                tool_call_id: None,
            });
            Ok(StepOutcome::Final(content))
        }
        None => Err(DeskmateError::Other(
            "assistant reply carried neither content nor tool calls".to_string(),
        )),
    }
}

async fn execute_tool_call(registry: &ToolRegistry, tool_call: &Value) -> Message {
    let id = match tool_call.get("id").and_then(|i| i.as_str()) {
        Some(id) => id.to_string(),
        None => {
            let fallback = format!("invalid_{}", uuid::Uuid::new_v4());
            return tool_error_message(
                fallback,
                "Error: tool call missing required 'id' field".to_string(),
            );
        }
    };

    let function = match tool_call.get("function") {
        Some(function) => function,
        None => {
            return tool_error_message(
                id.clone(),
                format!("Error: tool call {} missing required 'function' field", id),
            )
        }
    };

    let name = match function.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return tool_error_message(
                id.clone(),
                format!("Error: tool call {} missing 'function.name' field", id),
            )
        }
    };

    let raw_arguments = match function.get("arguments").and_then(|a| a.as_str()) {
        Some(arguments) => arguments,
        None => {
            return tool_error_message(
                id.clone(),
                format!("Error: tool call {} missing 'function.arguments' field", id),
            )
        }
    };

    display_tool_call(name);

    match registry.dispatch(name, raw_arguments).await {
        Ok(result) => {
            let content = result.to_string();
            display_tool_result(name, &content);
            Message {
                role: "tool".to_string(),
                content: Some(content),
                tool_calls: None,
                tool_call_id: Some(id),
            }
        }
        Err(e) => {
            display_tool_error(name, &e.to_string());
            tool_error_message(id, json!({ "error": e.to_string() }).to_string())
        }
    }
}

fn tool_error_message(id: String, content: String) -> Message {
    Message {
        role: "tool".to_string(),
        content: Some(content),
        tool_calls: None,
        tool_call_id: Some(id),
    }
}
