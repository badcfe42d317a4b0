//! Chart pipeline: observations → house groups → label placement.
//!
//! [`plan_chart`] is pure and deterministic. [`render_chart`] computes the
//! whole plan before touching the surface, so a failed pass leaves the
//! surface exactly as it was.

use kundali_base::{ChartError, ObservationSet, Rashi};
use serde::Serialize;

use crate::geometry::HouseGeometry;
use crate::house_map::{group_by_house_number, group_by_sign};
use crate::layout::{LabelKind, LabelRecord, LayoutConfig, layout_house};
use crate::surface::RenderSurface;

/// Which chart is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Birth chart: houses by sign rotation from the Ascendant.
    Rashi,
    /// D9 chart: houses as supplied by the calculation service.
    Navamsha,
}

impl ChartKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rashi => "Rashi",
            Self::Navamsha => "Navamsha",
        }
    }

    /// Layout preset for this chart.
    pub const fn default_config(self) -> LayoutConfig {
        match self {
            Self::Rashi => LayoutConfig::rashi(),
            Self::Navamsha => LayoutConfig::navamsha(),
        }
    }
}

/// Placed labels of one house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousePlacement {
    /// House number, 1-12.
    pub house: u8,
    /// Sign held by the house.
    #[serde(serialize_with = "serialize_rashi")]
    pub sign: Rashi,
    /// Occupant labels in stacking order, or one empty-house marker.
    pub labels: Vec<LabelRecord>,
}

impl HousePlacement {
    /// True when the house holds only an empty-house marker.
    pub fn is_empty_house(&self) -> bool {
        self.labels.iter().all(|l| l.kind == LabelKind::EmptyHouse)
    }
}

fn serialize_rashi<S: serde::Serializer>(rashi: &Rashi, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(rashi.number())
}

/// Full placement plan for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlan {
    pub kind: ChartKind,
    /// Sign of the Ascendant.
    #[serde(serialize_with = "serialize_rashi")]
    pub ascendant: Rashi,
    /// Houses that could be laid out, in house order.
    pub houses: Vec<HousePlacement>,
    /// Houses skipped because their geometry was unavailable.
    pub skipped_houses: Vec<u8>,
}

impl ChartPlan {
    /// Every label of the plan in house order.
    pub fn labels(&self) -> impl Iterator<Item = &LabelRecord> {
        self.houses.iter().flat_map(|h| h.labels.iter())
    }

    pub fn house(&self, house: u8) -> Option<&HousePlacement> {
        self.houses.iter().find(|h| h.house == house)
    }
}

/// Compute the placement plan for `set`.
///
/// Fails only when the observations cannot be anchored (no Ascendant, or a
/// Navamsha observation without a house). Houses without geometry are
/// listed in [`ChartPlan::skipped_houses`].
pub fn plan_chart(
    kind: ChartKind,
    set: &ObservationSet,
    geometry: &impl HouseGeometry,
    config: &LayoutConfig,
) -> Result<ChartPlan, ChartError> {
    let (map, groups) = match kind {
        ChartKind::Rashi => group_by_sign(set)?,
        ChartKind::Navamsha => group_by_house_number(set)?,
    };
    let ascendant = set.require_ascendant()?.rashi;

    let mut houses = Vec::with_capacity(12);
    let mut skipped_houses = Vec::new();
    for (house, occupants) in groups.iter() {
        let Some(bbox) = geometry.house_bbox(house) else {
            log::debug!("{} chart: no geometry for house {house}, skipping", kind.name());
            skipped_houses.push(house);
            continue;
        };
        // house is always 1..=12 here
        let sign = map.sign_of(house).unwrap_or(ascendant);
        houses.push(HousePlacement {
            house,
            sign,
            labels: layout_house(house, sign, &bbox, occupants, config),
        });
    }

    Ok(ChartPlan {
        kind,
        ascendant,
        houses,
        skipped_houses,
    })
}

/// Plan the chart against `surface`'s geometry and redraw it.
///
/// On error nothing is cleared or drawn; labels from an earlier successful
/// pass stay visible.
pub fn render_chart<S: RenderSurface>(
    surface: &mut S,
    kind: ChartKind,
    set: &ObservationSet,
    config: &LayoutConfig,
) -> Result<ChartPlan, ChartError> {
    let plan = plan_chart(kind, set, &*surface, config).inspect_err(|e| {
        log::error!("{} chart not rendered: {e}", kind.name());
    })?;

    surface.clear_labels();
    for label in plan.labels() {
        surface.draw_label(label);
    }
    log::debug!(
        "{} chart rendered: {} labels, {} houses skipped",
        kind.name(),
        plan.labels().count(),
        plan.skipped_houses.len()
    );
    Ok(plan)
}
