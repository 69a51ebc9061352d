//! SVG serialization of a finished scene.
//!
//! One committed shape becomes one SVG element, in insertion order. The
//! draft and the overlay indicator are working state, not content, and are
//! never exported.

use crate::config::ExportConfig;
use crate::draw::{Color, Scene, Shape};
use anyhow::{Context, Result};
use std::path::Path;

/// Document-level export options.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// `<title>` element content
    pub title: String,
    /// `<desc>` element content
    pub description: String,
    /// Optional background painted as a full-canvas rectangle under all shapes
    pub background: Option<Color>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            title: "SVG Drawing".to_string(),
            description: "Exported drawing".to_string(),
            background: None,
        }
    }
}

impl From<&ExportConfig> for SvgOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            background: config.background.as_ref().map(|spec| spec.to_color()),
        }
    }
}

/// Renders the scene as a complete standalone SVG document.
pub fn render_svg(scene: &Scene, options: &SvgOptions) -> String {
    let (width, height) = scene.size();

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n",
    ));
    svg.push_str(&format!("  <title>{}</title>\n", xml_escape(&options.title)));
    svg.push_str(&format!(
        "  <desc>{}</desc>\n",
        xml_escape(&options.description)
    ));

    if let Some(bg) = options.background {
        svg.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"{}\" stroke=\"none\"/>\n",
            bg.to_hex()
        ));
    }

    for shape in scene.shapes() {
        push_shape(&mut svg, shape);
    }

    svg.push_str("</svg>\n");
    svg
}

/// Renders the scene and writes the document to a file.
pub fn write_svg_file(scene: &Scene, options: &SvgOptions, path: &Path) -> Result<()> {
    let document = render_svg(scene, options);
    std::fs::write(path, document)
        .with_context(|| format!("Failed to write SVG to {}", path.display()))?;

    log::info!(
        "Exported {} shape(s) to {}",
        scene.shapes().len(),
        path.display()
    );
    Ok(())
}

fn push_shape(svg: &mut String, shape: &Shape) {
    match shape {
        Shape::Rect {
            x,
            y,
            w,
            h,
            color,
            fill,
        } => {
            svg.push_str(&format!(
                "  <rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" stroke=\"{}\" fill=\"{}\"/>\n",
                color.to_hex(),
                fill_attr(*fill)
            ));
        }
        Shape::Ellipse {
            cx,
            cy,
            rx,
            ry,
            color,
            fill,
        } => {
            svg.push_str(&format!(
                "  <ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{rx}\" ry=\"{ry}\" stroke=\"{}\" fill=\"{}\"/>\n",
                color.to_hex(),
                fill_attr(*fill)
            ));
        }
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        } => {
            svg.push_str(&format!(
                "  <line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{}\"/>\n",
                color.to_hex()
            ));
        }
        Shape::CubicPath {
            p0,
            p1,
            p2,
            p3,
            color,
        } => {
            svg.push_str(&format!(
                "  <path d=\"M{},{} C{},{} {},{} {},{}\" stroke=\"{}\" fill=\"none\"/>\n",
                p0.x,
                p0.y,
                p1.x,
                p1.y,
                p2.x,
                p2.y,
                p3.x,
                p3.y,
                color.to_hex()
            ));
        }
    }
}

fn fill_attr(fill: Option<Color>) -> String {
    match fill {
        Some(color) => color.to_hex(),
        None => "none".to_string(),
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};
    use crate::util::Point;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new(400.0, 300.0);
        scene.add_shape(Shape::Rect {
            x: 10.0,
            y: 10.0,
            w: 50.0,
            h: 20.0,
            color: BLACK,
            fill: None,
        });
        scene.add_shape(Shape::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 100.0,
            y2: 100.0,
            color: RED,
        });
        scene.add_shape(Shape::CubicPath {
            p0: Point::new(0.0, 0.0),
            p1: Point::new(10.0, 0.0),
            p2: Point::new(10.0, 10.0),
            p3: Point::new(0.0, 10.0),
            color: crate::draw::DARK_GREEN,
        });
        scene
    }

    #[test]
    fn document_has_canvas_sized_viewbox() {
        let svg = render_svg(&sample_scene(), &SvgOptions::default());
        assert!(svg.contains("viewBox=\"0 0 400 300\""));
        assert!(svg.contains("width=\"400\""));
        assert!(svg.contains("<title>SVG Drawing</title>"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn shapes_appear_in_insertion_order() {
        let svg = render_svg(&sample_scene(), &SvgOptions::default());
        let rect = svg.find("<rect").unwrap();
        let line = svg.find("<line").unwrap();
        let path = svg.find("<path").unwrap();
        assert!(rect < line && line < path);
    }

    #[test]
    fn stroke_and_fill_attributes_follow_the_shape() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.add_shape(Shape::Ellipse {
            cx: 50.0,
            cy: 50.0,
            rx: 2.5,
            ry: 2.5,
            color: BLACK,
            fill: Some(BLACK),
        });

        let svg = render_svg(&scene, &SvgOptions::default());
        assert!(svg.contains("stroke=\"#000000\" fill=\"#000000\""));
    }

    #[test]
    fn draft_and_overlay_are_not_exported() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.set_draft(Some(Shape::Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
            color: BLACK,
            fill: None,
        }));
        scene.set_overlay(Point::new(50.0, 50.0));

        let svg = render_svg(&scene, &SvgOptions::default());
        assert!(!svg.contains("<rect x=\"0\""));
    }

    #[test]
    fn background_is_painted_first_when_configured() {
        let options = SvgOptions {
            background: Some(WHITE),
            ..SvgOptions::default()
        };
        let svg = render_svg(&sample_scene(), &options);
        let bg = svg.find("fill=\"#ffffff\"").unwrap();
        let first_shape = svg.find("stroke=\"#000000\"").unwrap();
        assert!(bg < first_shape);
    }

    #[test]
    fn title_is_xml_escaped() {
        let options = SvgOptions {
            title: "a < b & c".to_string(),
            ..SvgOptions::default()
        };
        let svg = render_svg(&Scene::default(), &options);
        assert!(svg.contains("<title>a &lt; b &amp; c</title>"));
    }
}
