use crate::config::WeatherConfig;
use crate::tools::Tool;
use serde_json::{json, Value};

const ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

pub fn tool(config: WeatherConfig) -> Tool {
    Tool {
        name: "get_weather".to_string(),
        description:
            "Get the current weather for a city: temperature, humidity, wind speed and sky condition."
                .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "Name of the city to look up"
                },
                "units": {
                    "type": "string",
                    "enum": ["metric", "imperial"],
                    "description": "Temperature units; metric for Celsius, imperial for Fahrenheit"
                }
            },
            "required": ["city"],
            "additionalProperties": false
        }),
        handler: Box::new(move |args| {
            let config = config.clone();
            Box::pin(async move { current_weather(&config, &args).await })
        }),
    }
}

/// Fetch current conditions from OpenWeather. Every failure comes back as an
/// `{"error": ...}` record; nothing escapes this function as an error.
pub async fn current_weather(config: &WeatherConfig, args: &Value) -> Value {
    let city = args.get("city").and_then(|v| v.as_str()).unwrap_or_default();
    let units = args
        .get("units")
        .and_then(|v| v.as_str())
        .unwrap_or(&config.units);

    let response = match reqwest::Client::new()
        .get(ENDPOINT)
        .query(&[
            ("q", city),
            ("appid", config.api_key.as_str()),
            ("units", units),
        ])
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return json!({ "error": format!("weather request failed: {}", e) }),
    };

    let status = response.status();
    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => return json!({ "error": format!("weather response was not JSON: {}", e) }),
    };

    if !status.is_success() {
        return provider_error(status.as_u16(), &body);
    }

    parse_current_conditions(&body)
}

/// Shape a non-success provider body into an error record carrying the
/// provider's status and message.
pub fn provider_error(status: u16, body: &Value) -> Value {
    let message = body
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("unknown provider error");
    json!({ "error": { "status": status, "message": message } })
}

/// Flatten an HTTP-200 body into the four current-conditions fields.
pub fn parse_current_conditions(body: &Value) -> Value {
    json!({
        "temperature": body["main"]["temp"],
        "humidity": body["main"]["humidity"],
        "wind_speed": body["wind"]["speed"],
        "condition": body["weather"][0]["main"],
    })
}
