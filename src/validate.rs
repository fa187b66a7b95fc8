//! Per-field validators that turn a loosely typed [`ConfigValue`] tree into
//! a complete [`GridConfig`].
//!
//! Every validator is total: a value that cannot be coerced, or that falls
//! out of range, resolves to the field's own default. Fields never affect
//! each other and there is no cross-field validation.

use crate::config::{GridConfig, OuterMargin, Shadow};
use crate::value::ConfigValue;

const NUMBER_MIN: i64 = -10_000;
const NUMBER_MAX: i64 = 10_000;
const STRING_MAX: usize = 100;
const FILE_NAME_MAX: usize = 255;

/// Integer coercion: finite numbers truncate toward zero, strings parse as
/// integers with a float fallback. Everything else fails to coerce.
fn coerce_int(value: &ConfigValue) -> Option<i64> {
    match value {
        ConfigValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
        ConfigValue::Text(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
        }
        _ => None,
    }
}

/// String coercion: numbers render as text, so a numeric color code or
/// file name behaves exactly like its quoted form.
fn coerce_text(value: &ConfigValue) -> Option<String> {
    match value {
        ConfigValue::Text(s) => Some(s.clone()),
        ConfigValue::Number(n) if n.fract() == 0.0 && n.abs() < 9e15 => {
            Some(format!("{}", *n as i64))
        }
        ConfigValue::Number(n) => Some(format!("{n}")),
        _ => None,
    }
}

pub fn validate_number(value: &ConfigValue, default: i64, min: i64, max: i64) -> i64 {
    match coerce_int(value) {
        Some(n) if n >= min && n <= max => n,
        _ => default,
    }
}

pub fn validate_string(value: &ConfigValue, default: &str, max_len: usize) -> String {
    match coerce_text(value) {
        Some(s) if !s.is_empty() && s.chars().count() <= max_len => s,
        _ => default.to_string(),
    }
}

fn is_bare_hex(s: &str) -> bool {
    matches!(s.len(), 3 | 4 | 6 | 8) && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Bare hex codes of length 3/4/6/8 gain a `#` prefix. Any other string
/// passes through verbatim: named colors and `rgba(...)` forms stay legal,
/// so this validator is deliberately looser than [`validate_string`].
pub fn validate_color_code(value: &ConfigValue, default: &str) -> String {
    match coerce_text(value) {
        Some(s) if is_bare_hex(&s) => format!("#{s}"),
        Some(s) => s,
        None => default.to_string(),
    }
}

/// A bare number applies to all four sides; a mapping validates each side
/// independently against the corresponding default.
pub fn validate_outer_margin(value: &ConfigValue) -> OuterMargin {
    let defaults = OuterMargin::default();

    if let ConfigValue::Number(_) = value {
        let margin = validate_number(value, i64::from(defaults.top), NUMBER_MIN, NUMBER_MAX);
        return OuterMargin::uniform(margin as i32);
    }

    OuterMargin {
        top: validate_number(value.get("top"), i64::from(defaults.top), NUMBER_MIN, NUMBER_MAX)
            as i32,
        bottom: validate_number(
            value.get("bottom"),
            i64::from(defaults.bottom),
            NUMBER_MIN,
            NUMBER_MAX,
        ) as i32,
        left: validate_number(
            value.get("left"),
            i64::from(defaults.left),
            NUMBER_MIN,
            NUMBER_MAX,
        ) as i32,
        right: validate_number(
            value.get("right"),
            i64::from(defaults.right),
            NUMBER_MIN,
            NUMBER_MAX,
        ) as i32,
    }
}

pub fn validate_shadow(value: &ConfigValue) -> Shadow {
    let defaults = Shadow::default();

    Shadow {
        color: validate_string(value.get("color"), &defaults.color, STRING_MAX),
        blur: validate_number(
            value.get("blur"),
            i64::from(defaults.blur),
            NUMBER_MIN,
            NUMBER_MAX,
        ) as i32,
        offset_x: validate_number(
            value.get("offsetX"),
            i64::from(defaults.offset_x),
            NUMBER_MIN,
            NUMBER_MAX,
        ) as i32,
        offset_y: validate_number(
            value.get("offsetY"),
            i64::from(defaults.offset_y),
            NUMBER_MIN,
            NUMBER_MAX,
        ) as i32,
    }
}

/// Resolves a loosely typed tree into a complete configuration. Total:
/// every field falls back to its own default independently, so a bad value
/// never disturbs its siblings.
pub fn validate(tree: &ConfigValue) -> GridConfig {
    let defaults = GridConfig::default();

    GridConfig {
        file_name: validate_string(tree.get("fileName"), &defaults.file_name, FILE_NAME_MAX),
        width: validate_number(tree.get("width"), i64::from(defaults.width), 1, NUMBER_MAX) as u32,
        height: validate_number(tree.get("height"), i64::from(defaults.height), 1, NUMBER_MAX)
            as u32,
        columns: validate_number(tree.get("columns"), i64::from(defaults.columns), 1, NUMBER_MAX)
            as u32,
        rows: validate_number(tree.get("rows"), i64::from(defaults.rows), 1, NUMBER_MAX) as u32,
        outer_margin: validate_outer_margin(tree.get("outerMargin")),
        inner_margin: validate_number(
            tree.get("innerMargin"),
            i64::from(defaults.inner_margin),
            NUMBER_MIN,
            NUMBER_MAX,
        ) as i32,
        background_color_code: validate_color_code(
            tree.get("backgroundColorCode"),
            &defaults.background_color_code,
        ),
        shadow: validate_shadow(tree.get("shadow")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> ConfigValue {
        ConfigValue::Number(n)
    }

    fn text(s: &str) -> ConfigValue {
        ConfigValue::Text(s.to_string())
    }

    #[test]
    fn number_in_range_is_kept_and_truncated() {
        assert_eq!(validate_number(&num(640.0), 1, 1, 10_000), 640);
        assert_eq!(validate_number(&num(12.7), 1, 1, 10_000), 12);
        assert_eq!(validate_number(&text("42"), 1, 1, 10_000), 42);
        assert_eq!(validate_number(&text("3.9"), 1, 1, 10_000), 3);
    }

    #[test]
    fn number_out_of_range_or_uncoercible_defaults() {
        assert_eq!(validate_number(&num(0.0), 7, 1, 10_000), 7);
        assert_eq!(validate_number(&num(10_001.0), 7, 1, 10_000), 7);
        assert_eq!(validate_number(&text("12px"), 7, 1, 10_000), 7);
        assert_eq!(validate_number(&ConfigValue::Absent, 7, 1, 10_000), 7);
        assert_eq!(validate_number(&ConfigValue::Number(f64::NAN), 7, 1, 10_000), 7);
    }

    #[test]
    fn string_length_bounds() {
        assert_eq!(validate_string(&text("grid.png"), "d", 100), "grid.png");
        assert_eq!(validate_string(&text(""), "d", 100), "d");
        assert_eq!(validate_string(&text(&"x".repeat(101)), "d", 100), "d");
        assert_eq!(validate_string(&ConfigValue::Absent, "d", 100), "d");
    }

    #[test]
    fn string_coerces_numbers() {
        assert_eq!(validate_string(&num(12.0), "d", 100), "12");
    }

    #[test]
    fn color_code_prefixes_bare_hex() {
        assert_eq!(validate_color_code(&text("ff0000"), "d"), "#ff0000");
        assert_eq!(validate_color_code(&text("fff"), "d"), "#fff");
        assert_eq!(validate_color_code(&text("FFFFFF00"), "d"), "#FFFFFF00");
    }

    #[test]
    fn color_code_passes_other_strings_through() {
        assert_eq!(
            validate_color_code(&text("rgba(1, 2, 3, 0.5)"), "d"),
            "rgba(1, 2, 3, 0.5)"
        );
        assert_eq!(validate_color_code(&text("#ff0000"), "d"), "#ff0000");
        assert_eq!(validate_color_code(&text("tomato"), "d"), "tomato");
        // Wrong length for a hex code, but still a string: kept verbatim.
        assert_eq!(validate_color_code(&text("12345"), "d"), "12345");
    }

    #[test]
    fn color_code_coerces_numbers_before_matching() {
        // 123 stringifies to "123", which is three hex digits.
        assert_eq!(validate_color_code(&num(123.0), "d"), "#123");
        assert_eq!(validate_color_code(&num(12345.0), "d"), "12345");
        assert_eq!(validate_color_code(&ConfigValue::Absent, "d"), "d");
    }

    #[test]
    fn outer_margin_uniform_from_bare_number() {
        assert_eq!(validate_outer_margin(&num(5.0)), OuterMargin::uniform(5));
    }

    #[test]
    fn outer_margin_sides_validate_independently() {
        let tree = ConfigValue::from_json(serde_json::json!({
            "top": 10, "bottom": "junk", "left": -20000
        }));
        let margin = validate_outer_margin(&tree);
        assert_eq!(margin.top, 10);
        assert_eq!(margin.bottom, 0);
        assert_eq!(margin.left, 0);
        assert_eq!(margin.right, 0);
    }

    #[test]
    fn shadow_fields_default_independently() {
        let tree = ConfigValue::from_json(serde_json::json!({
            "color": "#333", "blur": "no", "offsetX": 4
        }));
        let shadow = validate_shadow(&tree);
        assert_eq!(shadow.color, "#333");
        assert_eq!(shadow.blur, 0);
        assert_eq!(shadow.offset_x, 4);
        assert_eq!(shadow.offset_y, 0);
    }

    #[test]
    fn record_validator_defaults_missing_fields() {
        let tree = ConfigValue::from_json(serde_json::json!({ "width": 900 }));
        let config = validate(&tree);
        assert_eq!(config.width, 900);
        assert_eq!(config.height, 1080);
        assert_eq!(config.columns, 2);
        assert_eq!(config.file_name, "image-grid.png");
    }

    #[test]
    fn record_validator_is_total_on_garbage_roots() {
        assert_eq!(validate(&ConfigValue::Absent), GridConfig::default());
        assert_eq!(validate(&num(5.0)), GridConfig::default());
        assert_eq!(validate(&text("nope")), GridConfig::default());
    }
}
