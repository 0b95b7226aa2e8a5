use deskmate::config::MessagingConfig;
use deskmate::tools::{messaging, news, stock, weather};
use serde_json::json;

#[test]
fn test_weather_parse_flattens_to_four_fields() {
    // OpenWeather-shaped body for Beijing: 18 degrees, 60% humidity,
    // 5 m/s wind, clear sky.
    let body = json!({
        "name": "Beijing",
        "sys": { "country": "CN" },
        "main": { "temp": 18, "humidity": 60, "pressure": 1012 },
        "wind": { "speed": 5 },
        "weather": [{ "main": "Clear", "description": "clear sky" }]
    });

    let record = weather::parse_current_conditions(&body);

    assert_eq!(
        record,
        json!({
            "temperature": 18,
            "humidity": 60,
            "wind_speed": 5,
            "condition": "Clear"
        })
    );
    assert_eq!(record.as_object().unwrap().len(), 4);
    assert!(record.get("error").is_none());
}

#[test]
fn test_weather_provider_error_keeps_status_and_message() {
    let body = json!({ "cod": "404", "message": "city not found" });

    let record = weather::provider_error(404, &body);

    assert_eq!(record["error"]["status"], 404);
    assert_eq!(record["error"]["message"], "city not found");
}

#[test]
fn test_news_empty_result_set_is_not_an_error() {
    let body = json!({ "status": "ok", "totalResults": 0, "articles": [] });

    let record = news::parse_articles(&body, 5);

    assert_eq!(record["articles"], json!([]));
    assert_eq!(record["total_results"], 0);
    assert!(record.get("error").is_none());
}

#[test]
fn test_news_preserves_provider_order_and_caps_results() {
    let articles: Vec<_> = (0..7)
        .map(|i| {
            json!({
                "title": format!("headline {}", i),
                "description": format!("summary {}", i),
                "url": format!("https://example.com/{}", i)
            })
        })
        .collect();
    let body = json!({ "totalResults": 7, "articles": articles });

    let record = news::parse_articles(&body, 5);

    let parsed = record["articles"].as_array().unwrap();
    assert_eq!(parsed.len(), 5);
    for (i, article) in parsed.iter().enumerate() {
        assert_eq!(article["title"], format!("headline {}", i));
        assert_eq!(article["summary"], format!("summary {}", i));
        assert_eq!(article["link"], format!("https://example.com/{}", i));
    }
    assert_eq!(record["total_results"], 7);
}

#[test]
fn test_stock_analysis_is_deterministic_and_marked_illustrative() {
    let args = json!({ "symbol": "aapl", "period": "6mo" });

    let first = stock::analyze(&args);
    let second = stock::analyze(&args);

    assert_eq!(first, second);
    assert_eq!(first["symbol"], "AAPL");
    assert_eq!(first["period"], "6mo");
    assert!(first["note"]
        .as_str()
        .unwrap()
        .contains("not a live market feed"));

    let change = first["change_percent"].as_f64().unwrap();
    let trend = first["trend"].as_str().unwrap();
    if change >= 0.0 {
        assert_eq!(trend, "up");
    } else {
        assert_eq!(trend, "down");
    }
}

#[test]
fn test_stock_defaults_period() {
    let record = stock::analyze(&json!({ "symbol": "TSLA" }));
    assert_eq!(record["period"], "1mo");
}

#[tokio::test]
async fn test_message_send_transport_failure_becomes_failure_record() {
    // Nothing listens on the discard port, so the POST fails at connect.
    let config = MessagingConfig {
        webhook_url: "http://127.0.0.1:9/hooks/deliver".to_string(),
    };
    let args = json!({ "recipient": "crush", "text": "good night" });

    let record = messaging::send_message(&config, &args).await;

    assert_eq!(record["status"], "failure");
    let detail = record["detail"].as_str().unwrap();
    assert!(!detail.is_empty());
}
