use crate::config::GridConfig;
use crate::validate::validate;
use crate::value::ConfigValue;

/// Parses untrusted configuration text into a validated [`GridConfig`].
///
/// Text whose first non-whitespace character is `{` is read as JSON,
/// anything else as YAML. Never fails: malformed input on either path
/// yields the full default configuration, not a partial merge.
pub fn parse_config(text: &str) -> GridConfig {
    let trimmed = text.trim();

    let tree = if trimmed.starts_with('{') {
        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(value) => ConfigValue::from_json(value),
            Err(err) => {
                tracing::debug!(%err, "config text is not valid JSON, using defaults");
                return GridConfig::default();
            }
        }
    } else {
        match serde_yaml::from_str::<serde_yaml::Value>(trimmed) {
            Ok(value) => ConfigValue::from_yaml(value),
            Err(err) => {
                tracing::debug!(%err, "config text is not valid YAML, using defaults");
                return GridConfig::default();
            }
        }
    };

    validate(&tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_is_detected_by_leading_brace() {
        let config = parse_config("  { \"width\": 640 }  ");
        assert_eq!(config.width, 640);
    }

    #[test]
    fn yaml_mapping_is_the_fallback_format() {
        let config = parse_config("width: 640\nrows: 3\n");
        assert_eq!(config.width, 640);
        assert_eq!(config.rows, 3);
    }

    #[test]
    fn malformed_json_yields_defaults() {
        assert_eq!(parse_config("{ \"width\": "), GridConfig::default());
    }

    #[test]
    fn malformed_yaml_yields_defaults() {
        assert_eq!(parse_config("width: [unclosed"), GridConfig::default());
    }

    #[test]
    fn empty_and_scalar_text_yield_defaults() {
        assert_eq!(parse_config(""), GridConfig::default());
        assert_eq!(parse_config("   \n  "), GridConfig::default());
        assert_eq!(parse_config("just a sentence"), GridConfig::default());
    }
}
