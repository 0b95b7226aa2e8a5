use crate::config::NewsConfig;
use crate::tools::Tool;
use serde_json::{json, Value};

const HEADLINES_ENDPOINT: &str = "https://newsapi.org/v2/top-headlines";
const EVERYTHING_ENDPOINT: &str = "https://newsapi.org/v2/everything";

pub fn tool(config: NewsConfig) -> Tool {
    Tool {
        name: "search_news".to_string(),
        description: "Search recent news articles by keyword, optionally within a category."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Keyword to search for"
                },
                "category": {
                    "type": "string",
                    "enum": [
                        "general", "business", "entertainment", "health",
                        "science", "sports", "technology"
                    ],
                    "description": "Restrict results to one news category"
                }
            },
            "required": ["query"],
            "additionalProperties": false
        }),
        handler: Box::new(move |args| {
            let config = config.clone();
            Box::pin(async move { search_news(&config, &args).await })
        }),
    }
}

/// Search NewsAPI. A category routes the search through the top-headlines
/// endpoint; otherwise the full-archive endpoint is used, newest first.
pub async fn search_news(config: &NewsConfig, args: &Value) -> Value {
    let query = args.get("query").and_then(|v| v.as_str()).unwrap_or_default();
    let category = args.get("category").and_then(|v| v.as_str());
    let page_size = config.page_size.to_string();

    let request = match category {
        Some(category) => reqwest::Client::new()
            .get(HEADLINES_ENDPOINT)
            .query(&[("q", query), ("category", category)]),
        None => reqwest::Client::new()
            .get(EVERYTHING_ENDPOINT)
            .query(&[("q", query), ("sortBy", "publishedAt")]),
    };

    let response = match request
        .query(&[
            ("apiKey", config.api_key.as_str()),
            ("pageSize", page_size.as_str()),
        ])
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return json!({ "error": format!("news request failed: {}", e) }),
    };

    let status = response.status();
    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => return json!({ "error": format!("news response was not JSON: {}", e) }),
    };

    if !status.is_success() {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown provider error");
        return json!({ "error": { "status": status.as_u16(), "message": message } });
    }

    parse_articles(&body, config.page_size as usize)
}

/// Reduce the provider body to an ordered article list, provider order
/// preserved and capped at `cap`. An empty list is a valid result, not an
/// error.
pub fn parse_articles(body: &Value, cap: usize) -> Value {
    let articles: Vec<Value> = body
        .get("articles")
        .and_then(|a| a.as_array())
        .map(|articles| {
            articles
                .iter()
                .take(cap)
                .map(|article| {
                    json!({
                        "title": article["title"],
                        "summary": article["description"],
                        "link": article["url"],
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    json!({
        "articles": articles,
        "total_results": body.get("totalResults").and_then(|t| t.as_u64()).unwrap_or(0),
    })
}
