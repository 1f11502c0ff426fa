//! Shallow merge of command configs

use serde_json::Value;

/// Merge `incoming` into `target` one level deep.
///
/// When both are objects, keys from `incoming` overwrite keys in `target`
/// and keys only in `target` are kept; nested objects are replaced, not
/// merged. Otherwise `incoming` replaces `target`.
pub fn merge_shallow(target: &mut Value, incoming: Value) {
    match incoming {
        Value::Object(incoming) if target.is_object() => {
            if let Some(existing) = target.as_object_mut() {
                existing.extend(incoming);
            }
        }
        incoming => *target = incoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_incoming_keys_win() {
        let mut target = json!({"a": 1, "b": 1});
        merge_shallow(&mut target, json!({"b": 2, "c": 3}));
        assert_eq!(target, json!({"a": 1, "b": 2, "c": 3}));
    }

    #[test]
    fn test_nested_objects_are_replaced() {
        let mut target = json!({"server": {"port": 80, "host": "localhost"}});
        merge_shallow(&mut target, json!({"server": {"port": 8080}}));
        assert_eq!(target, json!({"server": {"port": 8080}}));
    }

    #[test]
    fn test_existing_key_keeps_its_position() {
        let mut target = json!({"first": 1, "second": 2});
        merge_shallow(&mut target, json!({"first": 10, "third": 3}));

        let keys: Vec<_> = target.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["first", "second", "third"]);
    }

    #[test]
    fn test_non_object_target_is_replaced() {
        let mut target = json!("legacy");
        merge_shallow(&mut target, json!({"mode": "dist"}));
        assert_eq!(target, json!({"mode": "dist"}));
    }

    #[test]
    fn test_non_object_incoming_replaces() {
        let mut target = json!({"mode": "dist"});
        merge_shallow(&mut target, json!(true));
        assert_eq!(target, json!(true));
    }
}
