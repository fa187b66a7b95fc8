use crate::config::GridConfig;

/// Pixel measurements derived from a [`GridConfig`].
///
/// Recomputed fresh from a configuration each time; it has no lifecycle of
/// its own. Both cell-size formulas are exposed as named quantities:
/// `column_width`/`row_height` divide the content box naively, while
/// `cell_width`/`cell_height` account for the inner margin between cells.
/// With an inner margin of zero the two coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub content_width: f64,
    pub content_height: f64,
    pub content_left_x: f64,
    pub content_top_y: f64,
    pub content_right_x: f64,
    pub content_bottom_y: f64,
    pub column_width: f64,
    pub row_height: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub inner_margin: f64,
}

/// Top-left corner and size of one grid cell, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn from_config(config: &GridConfig) -> Self {
        let width = f64::from(config.width);
        let height = f64::from(config.height);
        let columns = f64::from(config.columns);
        let rows = f64::from(config.rows);
        let margin = config.outer_margin;
        let inner = f64::from(config.inner_margin);

        let content_width = width - f64::from(margin.left) - f64::from(margin.right);
        let content_height = height - f64::from(margin.top) - f64::from(margin.bottom);

        Self {
            content_width,
            content_height,
            content_left_x: f64::from(margin.left),
            content_top_y: f64::from(margin.top),
            content_right_x: width - f64::from(margin.right),
            content_bottom_y: height - f64::from(margin.bottom),
            column_width: content_width / columns,
            row_height: content_height / rows,
            cell_width: (content_width - (columns - 1.0) * inner) / columns,
            cell_height: (content_height - (rows - 1.0) * inner) / rows,
            inner_margin: inner,
        }
    }

    /// Cell `(row, column)` of the margin-aware layout; the inner margin is
    /// part of the stride between adjacent cells, not of the cell itself.
    pub fn cell_rect(&self, row: u32, column: u32) -> CellRect {
        CellRect {
            x: self.content_left_x + f64::from(column) * (self.cell_width + self.inner_margin),
            y: self.content_top_y + f64::from(row) * (self.cell_height + self.inner_margin),
            width: self.cell_width,
            height: self.cell_height,
        }
    }
}
