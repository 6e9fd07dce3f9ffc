use serde::{Deserialize, Deserializer};
use serde_json::Value;

/* ---------------- Serde mapping (only what we need) ---------------- */

/// Top-level feed envelope. `data` stays a raw `Value` so that "missing" and
/// "present but not an array" can be told apart from a body-level parse error.
#[derive(Deserialize)]
pub(crate) struct FeedEnvelope {
    pub(crate) data: Option<Value>,
}

/// One record as it appears on the wire. Every field is lenient: a wrong type
/// degrades that field to `None` instead of failing the payload.
#[derive(Default, Deserialize)]
#[serde(default)]
pub(crate) struct RecordNode {
    #[serde(deserialize_with = "de_text_lenient")]
    pub(crate) name: Option<String>,

    #[serde(deserialize_with = "de_text_lenient")]
    pub(crate) code: Option<String>,

    #[serde(rename = "currentPrice", deserialize_with = "de_finite_lenient")]
    pub(crate) current_price: Option<f64>,

    #[serde(deserialize_with = "de_finite_lenient")]
    pub(crate) recommendation: Option<f64>,

    #[serde(
        rename = "reasonsForRecommendation",
        deserialize_with = "de_text_lenient"
    )]
    pub(crate) reasons: Option<String>,
}

impl RecordNode {
    /// Decode one array element. A non-object element yields an all-`None`
    /// record rather than an error.
    pub(crate) fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn de_text_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn de_finite_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()))
}
