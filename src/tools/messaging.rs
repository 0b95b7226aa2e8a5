use crate::config::MessagingConfig;
use crate::tools::Tool;
use serde_json::{json, Value};

pub fn tool(config: MessagingConfig) -> Tool {
    Tool {
        name: "send_message".to_string(),
        description: "Deliver a message to a recipient through the configured messaging webhook."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "recipient": {
                    "type": "string",
                    "description": "Who to deliver the message to"
                },
                "subject": {
                    "type": "string",
                    "description": "Optional subject line"
                },
                "text": {
                    "type": "string",
                    "description": "Message body"
                }
            },
            "required": ["recipient", "text"],
            "additionalProperties": false
        }),
        handler: Box::new(move |args| {
            let config = config.clone();
            Box::pin(async move { send_message(&config, &args).await })
        }),
    }
}

/// Post the message to the configured webhook. Delivery always resolves to a
/// `{"status", "detail"}` record; transport errors become a failure record
/// with a readable cause rather than propagating.
pub async fn send_message(config: &MessagingConfig, args: &Value) -> Value {
    let recipient = args
        .get("recipient")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    let text = args.get("text").and_then(|v| v.as_str()).unwrap_or_default();

    let mut payload = json!({ "recipient": recipient, "text": text });
    if let Some(subject) = args.get("subject").and_then(|v| v.as_str()) {
        payload["subject"] = json!(subject);
    }

    match reqwest::Client::new()
        .post(&config.webhook_url)
        .json(&payload)
        .send()
        .await
    {
        Ok(response) if response.status().is_success() => json!({
            "status": "success",
            "detail": format!("message delivered to {}", recipient),
        }),
        Ok(response) => json!({
            "status": "failure",
            "detail": format!("delivery endpoint returned status {}", response.status().as_u16()),
        }),
        Err(e) => json!({
            "status": "failure",
            "detail": format!("delivery failed: {}", e),
        }),
    }
}
