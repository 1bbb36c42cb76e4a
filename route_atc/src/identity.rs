//! Resolution of a pilot's SimBrief identifier from their profile.

use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Profile keys that may carry the SimBrief identifier, in priority order.
pub const FLIGHT_PLAN_ID_KEYS: [&str; 3] = ["simbrief_id", "simbrief_username", "simbrief"];

/// What is known about the requesting user.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    /// Explicit identifier supplied with the request.
    #[serde(default)]
    pub simbrief_override: Option<String>,
    /// Direct profile columns.
    #[serde(default)]
    pub profile: BTreeMap<String, String>,
    /// Free-form options blob; only consulted when it is a JSON object.
    #[serde(default)]
    pub options: Option<Value>,
    #[serde(default)]
    pub custom_fields: Vec<CustomFieldValue>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CustomFieldValue {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl UserContext {
    pub fn with_override(id: impl Into<String>) -> Self {
        Self {
            simbrief_override: Some(id.into()),
            ..Self::default()
        }
    }
}

type Strategy = fn(&UserContext) -> Option<String>;

const STRATEGIES: [(&str, Strategy); 4] = [
    ("override", explicit_override),
    ("profile", profile_column),
    ("options", options_entry),
    ("custom_fields", custom_field),
];

/// First non-blank identifier found by the lookup strategies, tried in order.
pub fn resolve_flight_plan_id(user: &UserContext) -> Option<String> {
    STRATEGIES.iter().find_map(|(source, strategy)| {
        let id = strategy(user)?;
        tracing::debug!(name: "identity.resolved", source = source, "resolved SimBrief identifier");
        Some(id)
    })
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn explicit_override(user: &UserContext) -> Option<String> {
    user.simbrief_override.as_deref().and_then(non_blank)
}

fn profile_column(user: &UserContext) -> Option<String> {
    FLIGHT_PLAN_ID_KEYS
        .iter()
        .find_map(|key| user.profile.get(*key).and_then(|v| non_blank(v)))
}

fn options_entry(user: &UserContext) -> Option<String> {
    let options = user.options.as_ref()?.as_object()?;
    FLIGHT_PLAN_ID_KEYS
        .iter()
        .find_map(|key| match options.get(*key)? {
            Value::String(s) => non_blank(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

fn custom_field(user: &UserContext) -> Option<String> {
    let by_slug: HashMap<&str, &str> = user
        .custom_fields
        .iter()
        .filter_map(|f| Some((f.slug.as_deref()?, f.value.as_deref().unwrap_or_default())))
        .collect();
    FLIGHT_PLAN_ID_KEYS
        .iter()
        .find_map(|slug| by_slug.get(slug).and_then(|v| non_blank(v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(slug: &str, value: &str) -> CustomFieldValue {
        CustomFieldValue {
            slug: Some(slug.to_string()),
            value: Some(value.to_string()),
        }
    }

    #[test]
    fn override_wins_over_profile() {
        let mut user = UserContext::with_override(" pilot42 ");
        user.profile.insert("simbrief_id".to_string(), "123".to_string());
        assert_eq!(resolve_flight_plan_id(&user).as_deref(), Some("pilot42"));
    }

    #[test]
    fn profile_columns_checked_in_key_order() {
        let mut user = UserContext::default();
        user.profile.insert("simbrief".to_string(), "late".to_string());
        user.profile.insert("simbrief_username".to_string(), "early".to_string());
        assert_eq!(resolve_flight_plan_id(&user).as_deref(), Some("early"));
    }

    #[test]
    fn blank_values_fall_through_to_options() {
        let mut user = UserContext::with_override("   ");
        user.profile.insert("simbrief_id".to_string(), String::new());
        user.options = Some(json!({ "simbrief_id": 987654 }));
        assert_eq!(resolve_flight_plan_id(&user).as_deref(), Some("987654"));
    }

    #[test]
    fn non_object_options_are_ignored() {
        let user = UserContext {
            options: Some(json!(["simbrief_id", "abc"])),
            custom_fields: vec![field("simbrief", "fromfield")],
            ..UserContext::default()
        };
        assert_eq!(resolve_flight_plan_id(&user).as_deref(), Some("fromfield"));
    }

    #[test]
    fn later_custom_fields_replace_earlier_ones() {
        let user = UserContext {
            custom_fields: vec![
                field("simbrief_username", "first"),
                CustomFieldValue {
                    slug: None,
                    value: Some("orphan".to_string()),
                },
                field("simbrief_username", "second"),
            ],
            ..UserContext::default()
        };
        assert_eq!(resolve_flight_plan_id(&user).as_deref(), Some("second"));
    }

    #[test]
    fn nothing_found() {
        assert_eq!(resolve_flight_plan_id(&UserContext::default()), None);
    }
}
