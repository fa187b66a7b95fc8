use std::collections::BTreeMap;

/// Loosely typed configuration tree handed from the parser to the validator.
///
/// Untrusted input collapses into five shapes: finite numbers, strings,
/// ordered sequences, key-ordered mappings, and `Absent` for everything the
/// input dropped (null, booleans, non-finite numbers, missing keys).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    Number(f64),
    Text(String),
    Sequence(Vec<ConfigValue>),
    Mapping(BTreeMap<String, ConfigValue>),
    Absent,
}

impl ConfigValue {
    /// Looks up `key` in a mapping. Anything else, including a missing key,
    /// reads as [`ConfigValue::Absent`].
    pub fn get(&self, key: &str) -> &ConfigValue {
        match self {
            ConfigValue::Mapping(entries) => entries.get(key).unwrap_or(&ConfigValue::Absent),
            _ => &ConfigValue::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ConfigValue::Absent)
    }

    /// Converts a JSON tree, dropping values the engine has no use for:
    /// null, booleans and non-finite numbers all read as `Absent`, and
    /// absent entries disappear from sequences and mappings.
    pub fn from_json(value: serde_json::Value) -> ConfigValue {
        match value {
            serde_json::Value::Null | serde_json::Value::Bool(_) => ConfigValue::Absent,
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => ConfigValue::Number(f),
                _ => ConfigValue::Absent,
            },
            serde_json::Value::String(s) => ConfigValue::Text(s),
            serde_json::Value::Array(items) => ConfigValue::Sequence(
                items
                    .into_iter()
                    .map(ConfigValue::from_json)
                    .filter(|v| !v.is_absent())
                    .collect(),
            ),
            serde_json::Value::Object(entries) => ConfigValue::Mapping(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, ConfigValue::from_json(v)))
                    .filter(|(_, v)| !v.is_absent())
                    .collect(),
            ),
        }
    }

    /// Converts a YAML tree through the same normalization as JSON. Only
    /// string and numeric keys are kept; tags are looked through.
    pub fn from_yaml(value: serde_yaml::Value) -> ConfigValue {
        match value {
            serde_yaml::Value::Null | serde_yaml::Value::Bool(_) => ConfigValue::Absent,
            serde_yaml::Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => ConfigValue::Number(f),
                _ => ConfigValue::Absent,
            },
            serde_yaml::Value::String(s) => ConfigValue::Text(s),
            serde_yaml::Value::Sequence(items) => ConfigValue::Sequence(
                items
                    .into_iter()
                    .map(ConfigValue::from_yaml)
                    .filter(|v| !v.is_absent())
                    .collect(),
            ),
            serde_yaml::Value::Mapping(entries) => ConfigValue::Mapping(
                entries
                    .into_iter()
                    .filter_map(|(k, v)| {
                        let key = match k {
                            serde_yaml::Value::String(s) => s,
                            serde_yaml::Value::Number(n) => n.to_string(),
                            _ => return None,
                        };
                        Some((key, ConfigValue::from_yaml(v)))
                    })
                    .filter(|(_, v)| !v.is_absent())
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => ConfigValue::from_yaml(tagged.value),
        }
    }
}
