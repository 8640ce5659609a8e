// src/fetch/payload.rs

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct Element {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    html: Option<String>,
}

/// Parse a response body. A body that is not JSON becomes `Value::Null`,
/// which in turn yields no fragments.
pub fn parse_payload(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| {
        warn!(error = %e, "digitization response is not JSON");
        Value::Null
    })
}

/// Non-blank `elements[].content.html` strings, in element order.
/// Anything shaped differently contributes nothing.
pub fn html_fragments(payload: &Value) -> Vec<String> {
    let Some(elements) = payload.get("elements").and_then(Value::as_array) else {
        warn!("digitization response has no elements array");
        return Vec::new();
    };

    let fragments: Vec<String> = elements
        .iter()
        .filter_map(|e| serde_json::from_value::<Element>(e.clone()).ok())
        .filter_map(|e| e.content?.html)
        .filter(|html| !html.trim().is_empty())
        .collect();
    debug!(
        elements = elements.len(),
        fragments = fragments.len(),
        "collected html fragments"
    );
    fragments
}
