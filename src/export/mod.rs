//! Scene export to vector file formats.

pub mod svg;

// Re-export commonly used types at module level
pub use svg::{SvgOptions, render_svg, write_svg_file};
