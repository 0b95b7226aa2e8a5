use crate::tools::Tool;
use serde_json::{json, Value};

pub fn tool() -> Tool {
    Tool {
        name: "analyze_stock".to_string(),
        description:
            "Summarize basic metrics for a stock symbol: price, recent change, market cap, P/E and trend. \
             Figures are illustrative, not a live market feed."
                .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "Ticker symbol, e.g. AAPL or TSLA"
                },
                "period": {
                    "type": "string",
                    "enum": ["1d", "5d", "1mo", "3mo", "6mo", "1y"],
                    "description": "Period the trend figure refers to"
                }
            },
            "required": ["symbol"],
            "additionalProperties": false
        }),
        handler: Box::new(|args| Box::pin(async move { analyze(&args) })),
    }
}

/// No market data feed is wired up. The metrics are derived deterministically
/// from the symbol text so the tool-calling flow can be exercised end to end;
/// the record says so in its `note` field.
pub fn analyze(args: &Value) -> Value {
    let symbol = args
        .get("symbol")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_uppercase();
    let period = args.get("period").and_then(|v| v.as_str()).unwrap_or("1mo");

    let seed = symbol
        .bytes()
        .fold(7u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    let price = 20.0 + (seed % 48_000) as f64 / 100.0;
    let change_percent = ((seed / 13) % 1_200) as f64 / 100.0 - 6.0;
    let shares_millions = ((seed / 7) % 9_000 + 1_000) as f64;
    let market_cap = (price * shares_millions * 1_000_000.0).round();
    let pe_ratio = 8.0 + ((seed / 3) % 3_200) as f64 / 100.0;
    let trend = if change_percent >= 0.0 { "up" } else { "down" };

    json!({
        "symbol": symbol,
        "period": period,
        "price": round2(price),
        "change_percent": round2(change_percent),
        "market_cap": market_cap,
        "pe_ratio": round2(pe_ratio),
        "trend": trend,
        "note": "illustrative figures, not a live market feed",
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
