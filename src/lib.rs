//! Tessella assembles an ordered set of decoded images into one composite
//! raster laid out as a rectangular grid.
//!
//! The engine is a pure function of (configuration text, image list):
//!
//! 1. **Parse**: untrusted JSON or YAML text -> loosely typed [`ConfigValue`]
//! 2. **Validate**: [`ConfigValue`] -> fully-defaulted [`GridConfig`]
//! 3. **Composite**: [`GridConfig`] + images -> [`Geometry`] + output raster
//!
//! Malformed configuration never surfaces an error: parsing falls back to
//! the default configuration as a whole, and each field defaults
//! independently during validation. File IO, image decoding and display
//! stay outside the crate; callers hand in decoded `RgbaImage` handles and
//! receive an owned raster back.
#![forbid(unsafe_code)]

pub mod blur;
pub mod color;
pub mod composite;
pub mod config;
pub mod error;
pub mod geometry;
pub mod parse;
pub mod validate;
pub mod value;

pub use composite::{Composite, composite_grid, render_grid};
pub use config::{GridConfig, OuterMargin, Shadow};
pub use error::{TessellaError, TessellaResult};
pub use geometry::{CellRect, Geometry};
pub use parse::parse_config;
pub use validate::validate;
pub use value::ConfigValue;
