use crate::error::{TessellaError, TessellaResult};

/// Space between the canvas edge and the grid's content box, per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OuterMargin {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl OuterMargin {
    pub fn uniform(value: i32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

impl Default for OuterMargin {
    fn default() -> Self {
        Self::uniform(0)
    }
}

/// Drop-shadow styling. Consumed by the renderer, never by geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: String,
    pub blur: i32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: "rgba(0, 0, 0, 0)".to_string(),
            blur: 0,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

/// The validated grid layout configuration.
///
/// Always fully defined and numerically in range past the validator
/// boundary: invalid or missing input resolves to a field default, never to
/// an error. Serialized field names (camelCase) are exactly the keys the
/// textual input format accepts.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub columns: u32,
    pub rows: u32,
    pub outer_margin: OuterMargin,
    pub inner_margin: i32,
    pub background_color_code: String,
    pub shadow: Shadow,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            file_name: "image-grid.png".to_string(),
            width: 1080,
            height: 1080,
            columns: 2,
            rows: 2,
            outer_margin: OuterMargin::default(),
            inner_margin: 0,
            background_color_code: "#FFFFFF00".to_string(),
            shadow: Shadow::default(),
        }
    }
}

impl GridConfig {
    /// Serializes for user editing; parsing the result reproduces `self`.
    pub fn to_json_string(&self) -> TessellaResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TessellaError::serde(e.to_string()))
    }

    pub fn to_yaml_string(&self) -> TessellaResult<String> {
        serde_yaml::to_string(self).map_err(|e| TessellaError::serde(e.to_string()))
    }
}
