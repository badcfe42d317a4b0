//! House mapping and label placement for North Indian kundali charts.
//!
//! This crate provides:
//! - Sign-to-house rotation and grouping of observations by house
//! - The static 12-house diamond layout and its bounding boxes
//! - The label layout engine (stacking, text, sign-annotation suppression)
//! - A render-surface abstraction with SVG and recording implementations
//! - The Rashi and Navamsha chart pipelines

pub mod chart;
pub mod geometry;
pub mod house_map;
pub mod layout;
pub mod surface;

pub use chart::{ChartKind, ChartPlan, HousePlacement, plan_chart, render_chart};
pub use geometry::{
    BBox, HouseGeometry, HouseSlot, NORTH_INDIAN_HOUSES, NorthIndianLayout, VIEW_HEIGHT,
    VIEW_WIDTH,
};
pub use house_map::{
    HouseGroups, SignHouseMap, group_by_house_number, group_by_sign, house_to_sign, sign_to_house,
};
pub use layout::{
    DEFAULT_LINE_SPACING, EmptyMarker, LabelKind, LabelRecord, LayoutConfig, label_text,
    layout_house, stack_positions,
};
pub use surface::{RecordingSurface, RenderSurface, SurfaceCall, SvgSurface};
