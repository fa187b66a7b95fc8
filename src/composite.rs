use image::{Rgba, RgbaImage, imageops};

use crate::blur::blur_mask;
use crate::color::parse_color;
use crate::config::GridConfig;
use crate::error::{TessellaError, TessellaResult};
use crate::geometry::Geometry;

/// A finished composite: the output raster plus the geometry derived from
/// the configuration that produced it. The raster is owned by the caller.
#[derive(Clone, Debug)]
pub struct Composite {
    pub geometry: Geometry,
    pub raster: RgbaImage,
}

/// Composites images into a grid that divides the full canvas, ignoring
/// margins, background and shadow. Cells fill row-major, top-to-bottom and
/// left-to-right; the walk stops entirely once the image list runs out.
#[tracing::instrument(skip_all, fields(images = images.len(), columns = config.columns, rows = config.rows))]
pub fn composite_grid(images: &[RgbaImage], config: &GridConfig) -> TessellaResult<Composite> {
    check_grid(config)?;

    let cell_width = f64::from(config.width) / f64::from(config.columns);
    let cell_height = f64::from(config.height) / f64::from(config.rows);

    let mut canvas = RgbaImage::new(config.width, config.height);
    let mut next = images.iter();

    'grid: for row in 0..config.rows {
        for column in 0..config.columns {
            let Some(image) = next.next() else {
                break 'grid;
            };
            let rect = snap(
                f64::from(column) * cell_width,
                f64::from(row) * cell_height,
                cell_width,
                cell_height,
            );
            draw_into_cell(&mut canvas, image, rect);
        }
    }

    Ok(Composite {
        geometry: Geometry::from_config(config),
        raster: canvas,
    })
}

/// Renders the full configuration: background fill, margin-aware cell
/// placement via [`Geometry`], and a drop shadow under each image when the
/// shadow color is visible. Same row-major walk and early stop as
/// [`composite_grid`].
#[tracing::instrument(skip_all, fields(images = images.len(), columns = config.columns, rows = config.rows))]
pub fn render_grid(images: &[RgbaImage], config: &GridConfig) -> TessellaResult<Composite> {
    check_grid(config)?;

    let geometry = Geometry::from_config(config);
    let background = parse_color(&config.background_color_code).unwrap_or(Rgba([0, 0, 0, 0]));
    let mut canvas = RgbaImage::from_pixel(config.width, config.height, background);

    let shadow = ShadowLayer::from_config(config);
    let mut next = images.iter();

    'grid: for row in 0..config.rows {
        for column in 0..config.columns {
            let Some(image) = next.next() else {
                break 'grid;
            };
            let cell = geometry.cell_rect(row, column);
            let rect = snap(cell.x, cell.y, cell.width, cell.height);
            if rect.width == 0 || rect.height == 0 {
                continue;
            }
            if let Some(layer) = &shadow {
                layer.cast(&mut canvas, rect)?;
            }
            draw_into_cell(&mut canvas, image, rect);
        }
    }

    Ok(Composite { geometry, raster: canvas })
}

/// Zero grid or canvas dimensions cannot come out of the validator; seeing
/// one here is a broken contract, so refuse to composite at all rather
/// than divide by zero or emit a degenerate raster.
fn check_grid(config: &GridConfig) -> TessellaResult<()> {
    if config.columns == 0 || config.rows == 0 {
        return Err(TessellaError::compositing(
            "columns and rows must be >= 1 when compositing",
        ));
    }
    if config.width == 0 || config.height == 0 {
        return Err(TessellaError::compositing(
            "canvas width and height must be >= 1 when compositing",
        ));
    }
    Ok(())
}

/// One cell in device pixels. Edges come from rounding the cumulative cell
/// boundaries, so adjacent cells tile without gaps or overlap.
#[derive(Clone, Copy, Debug)]
struct PixelRect {
    x: i64,
    y: i64,
    width: u32,
    height: u32,
}

fn snap(x: f64, y: f64, width: f64, height: f64) -> PixelRect {
    let x0 = x.round() as i64;
    let y0 = y.round() as i64;
    let x1 = (x + width).round() as i64;
    let y1 = (y + height).round() as i64;
    PixelRect {
        x: x0,
        y: y0,
        width: (x1 - x0).max(0) as u32,
        height: (y1 - y0).max(0) as u32,
    }
}

/// Scales `image` to exactly fill the cell and blends it over the canvas.
fn draw_into_cell(canvas: &mut RgbaImage, image: &RgbaImage, rect: PixelRect) {
    if rect.width == 0 || rect.height == 0 || image.width() == 0 || image.height() == 0 {
        return;
    }
    let scaled = imageops::resize(image, rect.width, rect.height, imageops::FilterType::Triangle);
    imageops::overlay(canvas, &scaled, rect.x, rect.y);
}

/// Resolved drop-shadow parameters. `None` when the configured color is
/// unparseable or fully transparent, which skips shadow work entirely.
struct ShadowLayer {
    color: Rgba<u8>,
    radius: u32,
    offset_x: i64,
    offset_y: i64,
}

impl ShadowLayer {
    fn from_config(config: &GridConfig) -> Option<ShadowLayer> {
        let color = parse_color(&config.shadow.color)?;
        if color[3] == 0 {
            return None;
        }
        Some(ShadowLayer {
            color,
            radius: config.shadow.blur.max(0) as u32,
            offset_x: i64::from(config.shadow.offset_x),
            offset_y: i64::from(config.shadow.offset_y),
        })
    }

    /// Blurs a rectangular coverage mask the size of the cell and blends it,
    /// offset, under where the image will land. The mask is padded by the
    /// blur radius so the falloff is not clipped.
    fn cast(&self, canvas: &mut RgbaImage, rect: PixelRect) -> TessellaResult<()> {
        let pad = self.radius;
        let width = rect.width + pad * 2;
        let height = rect.height + pad * 2;

        let mut mask = vec![0u8; width as usize * height as usize];
        for y in pad..pad + rect.height {
            let line = y as usize * width as usize;
            mask[line + pad as usize..line + (pad + rect.width) as usize].fill(255);
        }
        let mask = blur_mask(&mask, width, height, self.radius)?;

        let Rgba([r, g, b, alpha]) = self.color;
        let mut layer = RgbaImage::new(width, height);
        for (pixel, &coverage) in layer.pixels_mut().zip(mask.iter()) {
            if coverage == 0 {
                continue;
            }
            let a = ((u16::from(coverage) * u16::from(alpha) + 127) / 255) as u8;
            *pixel = Rgba([r, g, b, a]);
        }

        imageops::overlay(
            canvas,
            &layer,
            rect.x + self.offset_x - i64::from(pad),
            rect.y + self.offset_y - i64::from(pad),
        );
        Ok(())
    }
}
