//! Chart points, rashis and planet observations for kundali rendering.
//!
//! This crate provides:
//! - The graha / chart-point identifiers and their two-letter chart symbols
//! - Rashi (zodiac sign) numbering and DMS formatting
//! - Validated observation sets, the input to chart construction
//! - The calculation API's JSON payloads and their conversion
//! - Fixed demonstration charts used when live data is unavailable

pub mod demo;
pub mod error;
pub mod graha;
pub mod observation;
pub mod rashi;
pub mod wire;

pub use demo::{demo_navamsha_observations, demo_rashi_observations};
pub use error::ChartError;
pub use graha::{
    ALL_CHART_POINTS, ALL_GRAHAS, ChartPoint, EXCLUDED_OUTER_PLANETS, Graha,
    is_excluded_outer_planet,
};
pub use observation::{ObservationSet, PlanetObservation};
pub use rashi::{ALL_RASHIS, Dms, Rashi, deg_to_dms};
pub use wire::{
    ApiPlanet, NavamsaApiPlanet, NavamsaResponse, PlanetsResponse, RetroFlag,
    navamsa_to_observations, parse_navamsa_response, parse_planets_response,
    planets_to_observations,
};
