//! Query parameter encoding.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::Value;

/// Flattens a `Serialize` options struct into query-string pairs.
///
/// `None` fields are skipped, arrays are joined with commas (the encoding the
/// Admin API expects for `ids`-style filters), and scalars are rendered
/// without JSON quoting.
pub(crate) fn serialize_to_query<P>(params: &P) -> Result<Vec<(String, String)>, serde_json::Error>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params)?;
    let Value::Object(map) = value else {
        return Err(serde_json::Error::custom(
            "query parameters must serialize to a JSON object",
        ));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(scalar_string)
                    .collect::<Vec<_>>()
                    .join(",");
                pairs.push((key, joined));
            }
            other => pairs.push((key, scalar_string(&other))),
        }
    }
    Ok(pairs)
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Options {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        ids: Option<Vec<i64>>,
    }

    #[test]
    fn test_skips_none_fields() {
        let pairs = serialize_to_query(&Options {
            limit: Some(10),
            title: None,
            ids: None,
        })
        .unwrap();
        assert_eq!(pairs, vec![("limit".to_string(), "10".to_string())]);
    }

    #[test]
    fn test_joins_arrays_with_commas() {
        let pairs = serialize_to_query(&Options {
            limit: None,
            title: None,
            ids: Some(vec![1, 2, 3]),
        })
        .unwrap();
        assert_eq!(pairs, vec![("ids".to_string(), "1,2,3".to_string())]);
    }

    #[test]
    fn test_strings_are_unquoted() {
        let pairs = serialize_to_query(&Options {
            limit: None,
            title: Some("Widget".to_string()),
            ids: None,
        })
        .unwrap();
        assert_eq!(pairs, vec![("title".to_string(), "Widget".to_string())]);
    }

    #[test]
    fn test_rejects_non_object_params() {
        assert!(serialize_to_query(&42).is_err());
        assert!(serialize_to_query("scalar").is_err());
    }
}
