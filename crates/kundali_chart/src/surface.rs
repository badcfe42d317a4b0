//! Render surfaces: where placed labels end up.
//!
//! A surface exposes house geometry and two drawing operations. Chart
//! rendering always clears every label it drew before, then draws the new
//! set, so labels never accumulate across passes.

use kundali_base::ChartError;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::geometry::{BBox, HouseGeometry, NorthIndianLayout, VIEW_HEIGHT, VIEW_WIDTH};
use crate::layout::LabelRecord;

/// Drawing target for chart labels.
pub trait RenderSurface: HouseGeometry {
    /// Remove every label previously drawn on this surface.
    fn clear_labels(&mut self);
    /// Draw one label.
    fn draw_label(&mut self, label: &LabelRecord);
}

const STYLE: &str = "\
.house { fill: #ffffff; stroke: #808000; stroke-width: 2; }
.planet-label { font-family: Arial, sans-serif; font-size: 13px; font-weight: bold; fill: #1e293b; text-anchor: middle; dominant-baseline: middle; pointer-events: none; }
.planet-label.retrograde { fill: #dc2626; }
.ascendant-label { fill: #16a34a; }
.empty-house-marker { fill: #94a3b8; font-size: 16px; }
";

/// In-memory SVG chart on the North Indian layout.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    layout: NorthIndianLayout,
    labels: Vec<LabelRecord>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels currently on the surface, in draw order.
    pub fn labels(&self) -> &[LabelRecord] {
        &self.labels
    }

    /// Complete SVG document: house polygons followed by the labels.
    ///
    /// Label text is escaped by the XML writer; control characters that XML
    /// cannot carry are dropped.
    pub fn to_svg(&self) -> Result<String, ChartError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");

        let root = BytesStart::new("svg").with_attributes([
            ("xmlns", "http://www.w3.org/2000/svg"),
            ("viewBox", view_box.as_str()),
            ("preserveAspectRatio", "xMidYMid meet"),
        ]);
        writer.write_event(Event::Start(root)).map_err(svg_error)?;

        writer
            .write_event(Event::Start(BytesStart::new("style")))
            .map_err(svg_error)?;
        writer
            .write_event(Event::Text(BytesText::new(STYLE)))
            .map_err(svg_error)?;
        writer
            .write_event(Event::End(BytesEnd::new("style")))
            .map_err(svg_error)?;

        for slot in self.layout.slots() {
            let points = slot.svg_points();
            let id = format!("house{}", slot.number);
            let polygon = BytesStart::new("polygon").with_attributes([
                ("class", "house"),
                ("points", points.as_str()),
                ("id", id.as_str()),
            ]);
            writer.write_event(Event::Empty(polygon)).map_err(svg_error)?;
        }

        for label in &self.labels {
            let x = label.x.to_string();
            let y = label.y.to_string();
            let class = label.css_classes().join(" ");
            let text = BytesStart::new("text").with_attributes([
                ("x", x.as_str()),
                ("y", y.as_str()),
                ("class", class.as_str()),
            ]);
            let content = xml_chars(&label.text);
            writer.write_event(Event::Start(text)).map_err(svg_error)?;
            writer
                .write_event(Event::Text(BytesText::new(&content)))
                .map_err(svg_error)?;
            writer
                .write_event(Event::End(BytesEnd::new("text")))
                .map_err(svg_error)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("svg")))
            .map_err(svg_error)?;

        let mut out = String::from_utf8(writer.into_inner()).map_err(svg_error)?;
        out.push('\n');
        Ok(out)
    }
}

fn svg_error(e: impl std::fmt::Display) -> ChartError {
    ChartError::Svg(e.to_string())
}

/// Text with the characters XML 1.0 forbids removed.
fn xml_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

impl HouseGeometry for SvgSurface {
    fn house_bbox(&self, house: u8) -> Option<BBox> {
        self.layout.house_bbox(house)
    }
}

impl RenderSurface for SvgSurface {
    fn clear_labels(&mut self) {
        self.labels.clear();
    }

    fn draw_label(&mut self, label: &LabelRecord) {
        self.labels.push(label.clone());
    }
}

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Clear,
    Draw(LabelRecord),
}

/// Surface that records calls; houses can be hidden to mimic a surface
/// that is not fully laid out.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    layout: NorthIndianLayout,
    missing: Vec<u8>,
    calls: Vec<SurfaceCall>,
    visible: Vec<LabelRecord>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface on which the given houses report no geometry.
    pub fn with_missing_houses(missing: &[u8]) -> Self {
        Self {
            missing: missing.to_vec(),
            ..Self::default()
        }
    }

    /// Every call in order.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Labels visible now (drawn since the last clear).
    pub fn visible(&self) -> &[LabelRecord] {
        &self.visible
    }
}

impl HouseGeometry for RecordingSurface {
    fn house_bbox(&self, house: u8) -> Option<BBox> {
        if self.missing.contains(&house) {
            return None;
        }
        self.layout.house_bbox(house)
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_labels(&mut self) {
        self.calls.push(SurfaceCall::Clear);
        self.visible.clear();
    }

    fn draw_label(&mut self, label: &LabelRecord) {
        self.calls.push(SurfaceCall::Draw(label.clone()));
        self.visible.push(label.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LabelKind;

    fn label(text: &str) -> LabelRecord {
        LabelRecord {
            house: 1,
            x: 400.0,
            y: 250.0,
            text: text.to_string(),
            kind: LabelKind::Planet,
            retrograde: true,
            ascendant: false,
        }
    }

    #[test]
    fn svg_contains_houses_and_labels() {
        let mut s = SvgSurface::new();
        s.draw_label(&label("Ju 14° (12)"));
        let svg = s.to_svg().unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon").count(), 12);
        assert!(svg.contains(r#"id="house12""#));
        assert!(svg.contains(r#"viewBox="0 0 780 800""#));
        assert!(svg.contains(r#"<text x="400" y="250" class="planet-label retrograde">"#));
        assert!(svg.contains(">Ju 14° (12)</text>"));
    }

    #[test]
    fn label_markup_is_escaped() {
        let mut s = SvgSurface::new();
        s.draw_label(&label("<b>&"));
        let svg = s.to_svg().unwrap();
        assert!(svg.contains("&lt;b&gt;&amp;"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn control_characters_are_dropped() {
        let mut s = SvgSurface::new();
        s.draw_label(&label("X\u{1}\u{1b} 3°"));
        let svg = s.to_svg().unwrap();
        assert!(!svg.contains('\u{1}'));
        assert!(!svg.contains('\u{1b}'));
        assert!(svg.contains(">X 3°</text>"));
    }

    #[test]
    fn clear_removes_labels() {
        let mut s = SvgSurface::new();
        s.draw_label(&label("A"));
        s.clear_labels();
        assert!(s.labels().is_empty());
        assert!(!s.to_svg().unwrap().contains("<text"));
    }

    #[test]
    fn recording_surface_hides_houses() {
        let s = RecordingSurface::with_missing_houses(&[3]);
        assert!(s.house_bbox(3).is_none());
        assert!(s.house_bbox(4).is_some());
    }

    #[test]
    fn recording_surface_tracks_calls() {
        let mut s = RecordingSurface::new();
        s.draw_label(&label("A"));
        s.clear_labels();
        s.draw_label(&label("B"));
        assert_eq!(s.calls().len(), 3);
        assert_eq!(s.calls()[1], SurfaceCall::Clear);
        assert_eq!(s.visible().len(), 1);
        assert_eq!(s.visible()[0].text, "B");
    }
}
