//! Label layout within a single house.
//!
//! Labels in a house share the box's horizontal center and are stacked
//! at a fixed line spacing so that the stack is vertically centered:
//!
//! ```text
//! y_i = center_y - (n - 1) * spacing / 2 + i * spacing
//! ```
//!
//! Label text is `<symbol>[ <deg>°][ (<sign>)]`. Within one house the
//! sign annotation is printed only for the first label of each sign.

use std::fmt::Write as _;

use kundali_base::{PlanetObservation, Rashi};
use serde::{Deserialize, Serialize};

use crate::geometry::BBox;

/// Default vertical distance between stacked labels.
pub const DEFAULT_LINE_SPACING: f64 = 22.0;

/// What an empty house shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyMarker {
    /// The sign held by the house, in parentheses: `(9)`.
    #[default]
    SignNumber,
    /// The house number: `H3`.
    HouseNumber,
}

impl EmptyMarker {
    pub fn text(self, house: u8, sign: Rashi) -> String {
        match self {
            Self::SignNumber => format!("({})", sign.number()),
            Self::HouseNumber => format!("H{house}"),
        }
    }
}

/// Layout and labelling options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutConfig {
    /// Vertical distance between stacked labels.
    pub line_spacing: f64,
    /// Append the rounded degree within sign.
    pub show_degrees: bool,
    /// Append the sign number in parentheses.
    pub show_signs: bool,
    /// Print each sign's annotation only once per house.
    pub suppress_repeated_signs: bool,
    pub empty_marker: EmptyMarker,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::rashi()
    }
}

impl LayoutConfig {
    /// Birth chart: symbol, degree and sign.
    pub const fn rashi() -> Self {
        Self {
            line_spacing: DEFAULT_LINE_SPACING,
            show_degrees: true,
            show_signs: true,
            suppress_repeated_signs: true,
            empty_marker: EmptyMarker::SignNumber,
        }
    }

    /// Navamsha chart: symbol and sign, no degree.
    pub const fn navamsha() -> Self {
        Self {
            show_degrees: false,
            ..Self::rashi()
        }
    }
}

/// Label role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    Planet,
    EmptyHouse,
}

/// A positioned label, ready for a render surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelRecord {
    pub house: u8,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub kind: LabelKind,
    pub retrograde: bool,
    pub ascendant: bool,
}

impl LabelRecord {
    /// Presentation classes, as used by the chart style sheet.
    pub fn css_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["planet-label"];
        match self.kind {
            LabelKind::EmptyHouse => classes.push("empty-house-marker"),
            LabelKind::Planet => {
                if self.ascendant {
                    classes.push("ascendant-label");
                }
                if self.retrograde {
                    classes.push("retrograde");
                }
            }
        }
        classes
    }
}

/// Display text for one observation.
///
/// `shown_signs` holds the signs already annotated in the current house;
/// it is updated when this label prints its sign.
pub fn label_text(obs: &PlanetObservation, config: &LayoutConfig, shown_signs: &mut Vec<Rashi>) -> String {
    let mut text = obs.point.symbol().to_string();
    if config.show_degrees
        && let Some(deg) = obs.degrees_in_rashi
    {
        let _ = write!(text, " {}°", deg.round() as i64);
    }
    if config.show_signs {
        let repeated = config.suppress_repeated_signs && shown_signs.contains(&obs.rashi);
        if !repeated {
            let _ = write!(text, " ({})", obs.rashi.number());
            shown_signs.push(obs.rashi);
        }
    }
    text
}

/// Anchor points for `n` labels stacked in `bbox`.
pub fn stack_positions(bbox: &BBox, n: usize, spacing: f64) -> Vec<(f64, f64)> {
    let (cx, cy) = bbox.center();
    let start_y = cy - (n.saturating_sub(1) as f64) * spacing / 2.0;
    (0..n).map(|i| (cx, start_y + i as f64 * spacing)).collect()
}

/// Lay out one house: its occupants, or a single empty marker.
pub fn layout_house(
    house: u8,
    sign: Rashi,
    bbox: &BBox,
    occupants: &[&PlanetObservation],
    config: &LayoutConfig,
) -> Vec<LabelRecord> {
    if occupants.is_empty() {
        let (x, y) = bbox.center();
        return vec![LabelRecord {
            house,
            x,
            y,
            text: config.empty_marker.text(house, sign),
            kind: LabelKind::EmptyHouse,
            retrograde: false,
            ascendant: false,
        }];
    }

    let mut shown_signs = Vec::with_capacity(occupants.len());
    stack_positions(bbox, occupants.len(), config.line_spacing)
        .into_iter()
        .zip(occupants)
        .map(|((x, y), obs)| LabelRecord {
            house,
            x,
            y,
            text: label_text(obs, config, &mut shown_signs),
            kind: LabelKind::Planet,
            retrograde: obs.is_retrograde,
            ascendant: obs.point.is_ascendant(),
        })
        .collect()
}
