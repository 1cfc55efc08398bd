use anyhow::{Result, bail};
use serde_json::Value;

/// Tournament entries of a search response; a null `result` means no matches
pub fn result_items(data: &Value) -> Result<Vec<Value>> {
    match data.get("result") {
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(Value::Null) => Ok(Vec::new()),
        Some(other) => bail!("Unexpected `result` in search response: {}", type_name(other)),
        None => bail!("Search response has no `result` field"),
    }
}

/// Total number of matches the API reports, falling back to `fallback`
pub fn reported_count(data: &Value, fallback: usize) -> usize {
    data.get("count")
        .and_then(Value::as_u64)
        .and_then(|count| usize::try_from(count).ok())
        .unwrap_or(fallback)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_items() {
        let data = json!({ "result": [{ "tournamentNo": "1" }], "count": 7 });

        assert_eq!(result_items(&data).unwrap().len(), 1);
        assert_eq!(reported_count(&data, 1), 7);
    }

    #[test]
    fn test_null_result_is_empty() {
        let data = json!({ "result": null, "count": 0 });
        assert!(result_items(&data).unwrap().is_empty());
    }

    #[test]
    fn test_missing_or_wrong_result_is_an_error() {
        assert!(result_items(&json!({ "count": 0 })).is_err());
        assert!(result_items(&json!({ "result": "oops" })).is_err());
    }

    #[test]
    fn test_count_falls_back() {
        assert_eq!(reported_count(&json!({ "result": [] }), 3), 3);
        assert_eq!(reported_count(&json!({ "count": "12" }), 3), 3);
    }
}
