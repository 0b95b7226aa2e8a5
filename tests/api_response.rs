use deskmate::api::parse_assistant_reply;
use serde_json::json;

#[test]
fn test_reply_with_content() {
    let response = json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": "Hello, world!"
            }
        }]
    });

    let reply = parse_assistant_reply(&response).unwrap();
    assert_eq!(reply.content, Some("Hello, world!".to_string()));
    assert!(reply.tool_calls.is_none());
}

#[test]
fn test_reply_with_tool_calls() {
    let response = json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [
                    {
                        "id": "call_123",
                        "type": "function",
                        "function": {
                            "name": "get_weather",
                            "arguments": "{\"city\": \"Beijing\"}"
                        }
                    }
                ]
            }
        }]
    });

    let reply = parse_assistant_reply(&response).unwrap();
    assert!(reply.content.is_none());
    let calls = reply.tool_calls.unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0]["id"], "call_123");
    assert_eq!(calls[0]["function"]["name"], "get_weather");
}

#[test]
fn test_reply_with_content_and_tool_calls() {
    let response = json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": "Let me check that.",
                "tool_calls": [
                    {
                        "id": "call_1",
                        "type": "function",
                        "function": { "name": "search_news", "arguments": "{}" }
                    }
                ]
            }
        }]
    });

    let reply = parse_assistant_reply(&response).unwrap();
    assert_eq!(reply.content, Some("Let me check that.".to_string()));
    assert!(reply.tool_calls.is_some());
}

#[test]
fn test_reply_with_empty_tool_calls_array() {
    let response = json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": "No tools needed",
                "tool_calls": []
            }
        }]
    });

    let reply = parse_assistant_reply(&response).unwrap();
    assert_eq!(reply.content, Some("No tools needed".to_string()));
    assert!(reply.tool_calls.is_none());
}

#[test]
fn test_reply_without_content_or_tool_calls() {
    let response = json!({
        "choices": [{
            "message": {
                "role": "assistant"
            }
        }]
    });

    let reply = parse_assistant_reply(&response).unwrap();
    assert!(reply.content.is_none());
    assert!(reply.tool_calls.is_none());
}

#[test]
fn test_reply_with_empty_choices() {
    let response = json!({ "choices": [] });
    assert!(parse_assistant_reply(&response).is_err());
}

#[test]
fn test_reply_without_choices() {
    let response = json!({ "error": { "message": "overloaded" } });
    assert!(parse_assistant_reply(&response).is_err());
}

#[test]
fn test_reply_without_message() {
    let response = json!({ "choices": [{ "finish_reason": "stop" }] });
    assert!(parse_assistant_reply(&response).is_err());
}
