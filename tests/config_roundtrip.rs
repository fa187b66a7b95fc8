use tessella::{GridConfig, OuterMargin, parse_config};

#[test]
fn unparseable_text_yields_the_default_config() {
    assert_eq!(parse_config("{ not json"), GridConfig::default());
    assert_eq!(parse_config("key: [unclosed"), GridConfig::default());
    assert_eq!(parse_config(""), GridConfig::default());
}

#[test]
fn scalar_text_yields_the_default_config() {
    // Plain prose parses as a YAML scalar, which validates to defaults.
    assert_eq!(parse_config("hello there"), GridConfig::default());
    assert_eq!(parse_config("42"), GridConfig::default());
}

#[test]
fn json_object_overrides_fields() {
    let config = parse_config(r#"{ "width": 900, "height": 600, "columns": 3, "rows": 2 }"#);
    assert_eq!(config.width, 900);
    assert_eq!(config.height, 600);
    assert_eq!(config.columns, 3);
    assert_eq!(config.rows, 2);
    assert_eq!(config.file_name, "image-grid.png");
}

#[test]
fn yaml_mapping_overrides_fields() {
    let config = parse_config("width: 640\nrows: 4\nfileName: out.png\n");
    assert_eq!(config.width, 640);
    assert_eq!(config.rows, 4);
    assert_eq!(config.file_name, "out.png");
}

#[test]
fn out_of_range_values_fall_back_per_field() {
    let config = parse_config(
        r#"{ "width": 0, "height": 20000, "columns": -3, "innerMargin": 10001, "rows": 3 }"#,
    );
    assert_eq!(config.width, 1080);
    assert_eq!(config.height, 1080);
    assert_eq!(config.columns, 2);
    assert_eq!(config.inner_margin, 0);
    // A bad sibling never disturbs a good one.
    assert_eq!(config.rows, 3);
}

#[test]
fn uniform_outer_margin_expands_to_four_sides() {
    let config = parse_config("outerMargin: 5\n");
    assert_eq!(config.outer_margin, OuterMargin::uniform(5));
}

#[test]
fn outer_margin_mapping_validates_each_side() {
    let config = parse_config("outerMargin:\n  top: 12\n  left: -8\n");
    assert_eq!(
        config.outer_margin,
        OuterMargin {
            top: 12,
            bottom: 0,
            left: -8,
            right: 0,
        }
    );
}

#[test]
fn bare_hex_background_gains_a_prefix() {
    let config = parse_config(r#"{ "backgroundColorCode": "ff0000" }"#);
    assert_eq!(config.background_color_code, "#ff0000");
}

#[test]
fn css_color_forms_pass_through_verbatim() {
    let config = parse_config("backgroundColorCode: rgba(1, 2, 3, 0.5)\n");
    assert_eq!(config.background_color_code, "rgba(1, 2, 3, 0.5)");
}

#[test]
fn shadow_mapping_is_validated_field_by_field() {
    let config = parse_config(
        "shadow:\n  color: \"#333333\"\n  blur: 6\n  offsetX: 2\n  offsetY: bogus\n",
    );
    assert_eq!(config.shadow.color, "#333333");
    assert_eq!(config.shadow.blur, 6);
    assert_eq!(config.shadow.offset_x, 2);
    assert_eq!(config.shadow.offset_y, 0);
}

#[test]
fn validate_is_idempotent_through_json() {
    let first = parse_config(
        r#"{ "width": 512, "columns": 4, "backgroundColorCode": "aabbcc", "outerMargin": 16 }"#,
    );
    let json = first.to_json_string().unwrap();
    assert_eq!(parse_config(&json), first);
}

#[test]
fn validate_is_idempotent_through_yaml() {
    let first = parse_config("width: 512\ncolumns: 4\ninnerMargin: 9\n");
    let yaml = first.to_yaml_string().unwrap();
    assert_eq!(parse_config(&yaml), first);
}

#[test]
fn unknown_keys_are_ignored() {
    let config = parse_config(r#"{ "width": 300, "wibble": 12, "frobnicate": "yes" }"#);
    assert_eq!(config.width, 300);
    assert_eq!(config.height, 1080);
}
