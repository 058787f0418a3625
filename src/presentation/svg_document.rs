// Plate diagram compositor: projects catalog objects into the viewBox and
// assembles the layered SVG document.
use crate::domain::stellar_object::StellarObject;
use crate::presentation::plate_geometry;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Write;

/// How far OpenSeadragon may zoom in; 1 is a 1:1 pixel ratio of the image to
/// the screen. Keeps the outer tile source width in a fixed ratio to the
/// svg size, so it is shared with the HTML wrapper.
pub const OSD_MAX_ZOOM_PIXEL_RATIO: f64 = 4.0;

const OBJECT_DETAIL_URL: &str = "https://skyserver.sdss.org/dr17/VisualTools/quickobj?objId=";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DotStyle {
    pub stroke: String,
    pub fill: String,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            stroke: "rgb(255, 255, 255)".to_string(),
            fill: "rgb(255, 255, 255)".to_string(),
        }
    }
}

impl DotStyle {
    fn new(stroke: &str, fill: &str) -> Self {
        Self {
            stroke: stroke.to_string(),
            fill: fill.to_string(),
        }
    }
}

/// Classification-to-style lookup. Unrecognized or empty classes fall back
/// to the explicit default entry (white on white).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    pub default: DotStyle,
    pub classes: HashMap<String, DotStyle>,
}

impl Default for StyleTable {
    fn default() -> Self {
        let mut classes = HashMap::new();
        classes.insert(
            "GALAXY".to_string(),
            DotStyle::new("rgb(255, 0, 132)", "rgb(255, 255, 255)"),
        );
        classes.insert(
            "STAR".to_string(),
            DotStyle::new("rgb(0,181,255)", "rgb(255, 255, 255)"),
        );
        classes.insert(
            "QSO".to_string(),
            DotStyle::new("rgb(102,255,0)", "rgb(255, 255, 255)"),
        );
        Self {
            default: DotStyle::default(),
            classes,
        }
    }
}

impl StyleTable {
    pub fn style_for(&self, object_class: &str) -> &DotStyle {
        self.classes.get(object_class).unwrap_or(&self.default)
    }
}

/// Adjustable rendering constants for one plate diagram.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Multiplied into every dot's coordinates and the viewBox bounds. The
    /// higher the number, the smaller the dots appear relative to the plate.
    pub dot_scaler: f64,
    /// Relative size of the dot area against the plate border; at 1 the dots
    /// would fill the plate border to border. Also the dot radius.
    pub dot_area_scaler: f64,
    /// Stroke width relative to the dot size.
    pub stroke_width_scaler: f64,
    pub styles: StyleTable,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            dot_scaler: 1.0,
            dot_area_scaler: 0.8,
            stroke_width_scaler: 0.5,
            styles: StyleTable::default(),
        }
    }
}

impl RenderSettings {
    fn view_box_max(&self) -> f64 {
        800.0 * self.dot_scaler
    }

    fn stroke_width(&self) -> f64 {
        self.stroke_width_scaler * self.dot_area_scaler
    }

    /// Project a focal-plane coordinate into the viewBox. The catalog frame
    /// is mirrored against the display frame, so both axes are negated
    /// before scaling; the half-viewBox translation then moves every dot
    /// into the positive quadrant.
    pub fn project(&self, focal_x: f64, focal_y: f64) -> (f64, f64) {
        let relative_size_scaler = self.dot_area_scaler * self.dot_scaler;
        let half = self.view_box_max() / 2.0;
        (
            -focal_x * relative_size_scaler + half,
            -focal_y * relative_size_scaler + half,
        )
    }
}

#[derive(Debug, Clone)]
pub struct DotElement {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
    pub href: String,
    pub label: String,
}

/// One layer of the diagram tree, serialized in a single pass so that the
/// element order is exactly the paint order.
#[derive(Debug, Clone)]
pub enum SvgNode {
    Static(&'static str),
    Dot(DotElement),
    Group {
        id: &'static str,
        children: Vec<SvgNode>,
    },
}

fn dot_for(object: &StellarObject, settings: &RenderSettings) -> DotElement {
    let (cx, cy) = settings.project(object.focal_x, object.focal_y);
    let style = settings.styles.style_for(&object.object_class);

    DotElement {
        cx,
        cy,
        radius: settings.dot_area_scaler,
        stroke: style.stroke.clone(),
        stroke_width: settings.stroke_width(),
        fill: style.fill.clone(),
        href: format!("{OBJECT_DETAIL_URL}{}", object.object_id),
        label: format!("{}, plate: {}", object.object_id, object.plate_id),
    }
}

/// Compose the full plate diagram: static plate geometry first, then one dot
/// per object in input order. Later dots paint over earlier ones, which is
/// the intended last-wins semantic. An empty object list still yields the
/// complete static-only diagram.
pub fn compose_plate_svg(objects: &[StellarObject], settings: &RenderSettings) -> String {
    let mut nodes: Vec<SvgNode> = plate_geometry::STATIC_LAYERS
        .into_iter()
        .map(SvgNode::Static)
        .collect();

    nodes.push(SvgNode::Group {
        id: "plateDots",
        children: objects
            .iter()
            .map(|object| SvgNode::Dot(dot_for(object, settings)))
            .collect(),
    });

    serialize_document(&nodes, settings)
}

fn serialize_document(nodes: &[SvgNode], settings: &RenderSettings) -> String {
    let size_px = 1000.0 * OSD_MAX_ZOOM_PIXEL_RATIO;
    let max = settings.view_box_max();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg id='svgImage' width='{size_px}px' height='{size_px}px' viewBox='0 0 {max} {max}' transform-origin='0 0'>"
    );
    for node in nodes {
        write_node(&mut out, node);
    }
    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, node: &SvgNode) {
    match node {
        SvgNode::Static(markup) => {
            out.push_str(markup);
            out.push('\n');
        }
        SvgNode::Group { id, children } => {
            let _ = writeln!(out, "<g id='{id}'>");
            for child in children {
                write_node(out, child);
            }
            out.push_str("</g>\n");
        }
        SvgNode::Dot(dot) => {
            let _ = writeln!(out, "<a href='{}' target='_blank'>", escape_attr(&dot.href));
            let _ = writeln!(
                out,
                "<circle class='plateDot' cx='{}' cy='{}' r='{}' stroke='{}' stroke-width='{}' fill='{}'/>",
                dot.cx, dot.cy, dot.radius, dot.stroke, dot.stroke_width, dot.fill
            );
            let _ = writeln!(out, "{}", escape_text(&dot.label));
            out.push_str("</a>\n");
        }
    }
}

/// Ampersands in an href query string must be the document-escaped form;
/// a bare '&' is an escapement character in svg.
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('\'', "&apos;")
}

fn escape_text(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(x: f64, y: f64, id: &str, class: &str) -> StellarObject {
        StellarObject {
            focal_x: x,
            focal_y: y,
            object_id: id.to_string(),
            plate_id: "2534".to_string(),
            right_ascension: "10".to_string(),
            declination: "20".to_string(),
            object_class: class.to_string(),
        }
    }

    #[test]
    fn test_projection() {
        let settings = RenderSettings::default();
        let (cx, cy) = settings.project(10.0, -20.0);
        assert_eq!(cx, 392.0);
        assert_eq!(cy, 416.0);
    }

    #[test]
    fn test_projection_is_linear_in_the_sign_flip() {
        let settings = RenderSettings::default();
        let center = settings.view_box_max() / 2.0;

        for (x, y) in [(10.0, -20.0), (0.0, 0.0), (-137.5, 42.25)] {
            let (cx, cy) = settings.project(x, y);
            let (fx, fy) = settings.project(-x, -y);
            assert_eq!(fx, 2.0 * center - cx);
            assert_eq!(fy, 2.0 * center - cy);
        }
    }

    #[test]
    fn test_style_lookup_and_fallback() {
        let styles = StyleTable::default();
        assert_eq!(styles.style_for("GALAXY").stroke, "rgb(255, 0, 132)");
        assert_eq!(styles.style_for("STAR").stroke, "rgb(0,181,255)");
        assert_eq!(styles.style_for("QSO").stroke, "rgb(102,255,0)");

        let fallback = styles.style_for("comet");
        assert_eq!(fallback.stroke, "rgb(255, 255, 255)");
        assert_eq!(fallback.fill, "rgb(255, 255, 255)");
        assert_eq!(styles.style_for("").stroke, "rgb(255, 255, 255)");
    }

    #[test]
    fn test_stroke_width() {
        let settings = RenderSettings::default();
        assert_eq!(settings.stroke_width(), 0.4);
    }

    #[test]
    fn test_empty_plate_renders_static_geometry_only() {
        let settings = RenderSettings::default();
        let svg = compose_plate_svg(&[], &settings);

        assert!(svg.contains("id='Plate-Edge-Exterior-Stroke'"));
        assert!(svg.contains("id='Plate-Edge-with-Subtracted-Holes'"));
        assert!(svg.contains("id='_1-8-inch-center-hole'"));
        assert!(svg.contains("id='_1-4-inch-holes'"));
        assert!(svg.contains("id='_1-2-inch-holes--180-degree-spacing-'"));
        assert!(svg.contains("id='_1-2-inch-holes--30-degree-spacing--'"));
        assert!(!svg.contains("class='plateDot'"));

        // Re-rendering with equal inputs is byte-for-byte identical.
        assert_eq!(svg, compose_plate_svg(&[], &settings));
    }

    #[test]
    fn test_dots_follow_static_layers_in_input_order() {
        let settings = RenderSettings::default();
        let objects = vec![
            object(5.0, 5.0, "id1", "STAR"),
            object(5.0, 5.0, "id2", "GALAXY"),
        ];
        let svg = compose_plate_svg(&objects, &settings);

        let last_static = svg.find("30-degree-spacing").unwrap();
        let first = svg.find("objId=id1").unwrap();
        let second = svg.find("objId=id2").unwrap();
        // Same projected position; the later record is the later sibling,
        // so it paints on top.
        assert!(last_static < first);
        assert!(first < second);
    }

    #[test]
    fn test_three_row_scenario() {
        let settings = RenderSettings::default();
        let objects = vec![
            object(5.0, 5.0, "id1", "STAR"),
            object(-10.0, 30.0, "id2", "GALAXY"),
            object(100.0, -100.0, "id3", "QSO"),
        ];
        let svg = compose_plate_svg(&objects, &settings);

        assert_eq!(svg.matches("class='plateDot'").count(), 3);
        assert!(svg.contains("cx='396' cy='396' r='0.8' stroke='rgb(0,181,255)'"));
        assert!(svg.contains("cx='408' cy='376' r='0.8' stroke='rgb(255, 0, 132)'"));
        assert!(svg.contains("cx='320' cy='480' r='0.8' stroke='rgb(102,255,0)'"));
        assert!(svg.contains("stroke-width='0.4'"));
        assert!(svg.contains("id1, plate: 2534"));
        assert!(svg.contains(
            "href='https://skyserver.sdss.org/dr17/VisualTools/quickobj?objId=id1'"
        ));
    }

    #[test]
    fn test_dot_scaler_widens_the_view_box() {
        let settings = RenderSettings {
            dot_scaler: 2.0,
            ..RenderSettings::default()
        };
        let svg = compose_plate_svg(&[], &settings);
        assert!(svg.contains("viewBox='0 0 1600 1600'"));

        // Dot spread scales with the viewBox, so the relative layout holds.
        let (cx, cy) = settings.project(10.0, -20.0);
        assert_eq!(cx, -10.0 * 1.6 + 800.0);
        assert_eq!(cy, 20.0 * 1.6 + 800.0);
    }

    #[test]
    fn test_href_ampersands_are_escaped() {
        let settings = RenderSettings::default();
        let objects = vec![object(0.0, 0.0, "a&b", "STAR")];
        let svg = compose_plate_svg(&objects, &settings);
        assert!(svg.contains("objId=a&amp;b"));
        assert!(!svg.contains("objId=a&b'"));
    }
}
