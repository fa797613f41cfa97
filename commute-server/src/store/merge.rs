//! Recursive partial merge of JSON documents.

use serde_json::Value;

/// Merge `patch` into `existing`.
///
/// Keys present in `patch` overwrite the matching keys of `existing`; where
/// both sides hold an object the merge recurses. Keys absent from `patch`
/// are left untouched at every depth. Arrays are replaced, never merged.
/// A non-object `patch` replaces `existing` outright.
pub fn merge(existing: Value, patch: Value) -> Value {
    match (existing, patch) {
        (Value::Object(mut base), Value::Object(patch)) => {
            for (key, value) in patch {
                let merged = match base.remove(&key) {
                    Some(current) => merge(current, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            Value::Object(base)
        }
        (_, patch) => patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_untouched_notification_flags() {
        let existing = json!({
            "commute_method": "Driving",
            "preparation_time": "0",
            "notification_preferences": {
                "morning_alarm": true,
                "event_alarm": true,
                "event_notification": true,
                "traffic_alerts": true,
                "weather_alerts": true,
            },
            "maxMissedBus": "1",
        });
        let patch = json!({
            "commute_method": "Transit",
            "preparation_time": "30",
            "notification_preferences": {
                "event_alarm": false,
                "event_notification": false,
            },
            "maxMissedBus": "5",
        });

        let merged = merge(existing, patch);

        assert_eq!(
            merged,
            json!({
                "commute_method": "Transit",
                "preparation_time": "30",
                "notification_preferences": {
                    "morning_alarm": true,
                    "event_alarm": false,
                    "event_notification": false,
                    "traffic_alerts": true,
                    "weather_alerts": true,
                },
                "maxMissedBus": "5",
            })
        );
    }

    #[test]
    fn recurses_through_several_levels() {
        let existing = json!({ "a": { "b": { "c": 1, "d": 2 }, "e": 3 } });
        let patch = json!({ "a": { "b": { "c": 10 } } });

        assert_eq!(
            merge(existing, patch),
            json!({ "a": { "b": { "c": 10, "d": 2 }, "e": 3 } })
        );
    }

    #[test]
    fn arrays_are_replaced_not_merged() {
        let existing = json!({ "tags": [1, 2, 3], "keep": [4] });
        let patch = json!({ "tags": [9] });

        assert_eq!(merge(existing, patch), json!({ "tags": [9], "keep": [4] }));
    }

    #[test]
    fn new_keys_are_added() {
        let existing = json!({ "a": 1 });
        let patch = json!({ "b": { "c": true } });

        assert_eq!(merge(existing, patch), json!({ "a": 1, "b": { "c": true } }));
    }

    #[test]
    fn object_patch_replaces_scalar() {
        let existing = json!({ "a": "flat" });
        let patch = json!({ "a": { "nested": 1 } });

        assert_eq!(merge(existing, patch), json!({ "a": { "nested": 1 } }));
    }

    #[test]
    fn explicit_null_overwrites() {
        let existing = json!({ "a": 1, "b": 2 });
        let patch = json!({ "a": null });

        assert_eq!(merge(existing, patch), json!({ "a": null, "b": 2 }));
    }

    #[test]
    fn empty_patch_is_identity() {
        let existing = json!({ "a": { "b": [1, 2] } });
        assert_eq!(merge(existing.clone(), json!({})), existing);
    }
}
