//! JSON payloads of the third-party calculation API.
//!
//! Two endpoints feed the charts:
//! - `/planets`: `output` is an array whose second element maps planet
//!   names to positions (sign, degree within sign, retrograde flag).
//! - `/navamsa-chart-info`: `output` maps arbitrary ids to entries that
//!   carry their own `name`, sign and house number.
//!
//! Conversion drops the outer planets and entries without a sign, and
//! keeps document order (serde_json is built with `preserve_order`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ChartError;
use crate::graha::{ChartPoint, is_excluded_outer_planet};
use crate::observation::{ObservationSet, PlanetObservation};
use crate::rashi::Rashi;

/// Retrograde flag. The API sends the strings `"true"`/`"false"`; a JSON
/// boolean is accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RetroFlag {
    Bool(bool),
    Text(String),
}

impl RetroFlag {
    pub fn is_retrograde(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => s == "true",
        }
    }
}

impl Default for RetroFlag {
    fn default() -> Self {
        Self::Bool(false)
    }
}

/// One entry of the `/planets` planet map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlanet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_degree: Option<f64>,
    #[serde(default)]
    pub norm_degree: Option<f64>,
    #[serde(default)]
    pub is_retro: RetroFlag,
    #[serde(rename = "current_sign", default)]
    pub current_sign: Option<i64>,
}

/// One entry of the `/navamsa-chart-info` output map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavamsaApiPlanet {
    pub name: String,
    #[serde(rename = "isRetro", default)]
    pub is_retro: RetroFlag,
    #[serde(default)]
    pub current_sign: Option<i64>,
    #[serde(default)]
    pub house_number: Option<i64>,
}

/// `/planets` response envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetsResponse {
    #[serde(default)]
    pub status_code: Option<u16>,
    pub output: Vec<Value>,
}

/// `/navamsa-chart-info` response envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavamsaResponse {
    #[serde(default)]
    pub status_code: Option<u16>,
    pub output: Map<String, Value>,
}

fn sign_from_wire(sign: i64) -> Result<Rashi, ChartError> {
    u8::try_from(sign)
        .ok()
        .and_then(Rashi::from_number)
        .ok_or(ChartError::InvalidSign(sign))
}

/// Convert a `/planets` name → entry map into birth-chart observations.
pub fn planets_to_observations(planets: &Map<String, Value>) -> Result<ObservationSet, ChartError> {
    let mut observations = Vec::with_capacity(planets.len());
    for (key, value) in planets {
        if is_excluded_outer_planet(key) {
            log::trace!("dropping outer planet {key}");
            continue;
        }
        let planet: ApiPlanet = serde_json::from_value(value.clone())?;
        let sign = match planet.current_sign {
            Some(s) if s != 0 => s,
            _ => {
                log::debug!("dropping {key}: no current_sign");
                continue;
            }
        };
        if planet.norm_degree.is_none() {
            log::debug!("{key}: no normDegree, label shows no degree");
        }
        observations.push(PlanetObservation {
            point: ChartPoint::from_name(key),
            rashi: sign_from_wire(sign)?,
            degrees_in_rashi: planet.norm_degree,
            is_retrograde: planet.is_retro.is_retrograde(),
            house_number: None,
        });
    }
    ObservationSet::new(observations)
}

/// Convert a `/navamsa-chart-info` output map into D9 observations.
pub fn navamsa_to_observations(output: &Map<String, Value>) -> Result<ObservationSet, ChartError> {
    let mut observations = Vec::with_capacity(output.len());
    for value in output.values() {
        let planet: NavamsaApiPlanet = serde_json::from_value(value.clone())?;
        if is_excluded_outer_planet(&planet.name) {
            log::trace!("dropping outer planet {}", planet.name);
            continue;
        }
        let sign = match planet.current_sign {
            Some(s) if s != 0 => s,
            _ => {
                log::debug!("dropping {}: no current_sign", planet.name);
                continue;
            }
        };
        let house = planet.house_number.unwrap_or(0);
        let house = u8::try_from(house)
            .ok()
            .filter(|h| (1..=12).contains(h))
            .ok_or(ChartError::InvalidHouse(house))?;
        observations.push(PlanetObservation::navamsha(
            ChartPoint::from_name(&planet.name),
            sign_from_wire(sign)?,
            house,
            planet.is_retro.is_retrograde(),
        ));
    }
    ObservationSet::new(observations)
}

/// Parse a full `/planets` response body.
pub fn parse_planets_response(body: &str) -> Result<ObservationSet, ChartError> {
    let response: PlanetsResponse = serde_json::from_str(body)?;
    let planets = response
        .output
        .get(1)
        .and_then(Value::as_object)
        .ok_or_else(|| ChartError::Wire("invalid API response format".into()))?;
    planets_to_observations(planets)
}

/// Parse a full `/navamsa-chart-info` response body.
pub fn parse_navamsa_response(body: &str) -> Result<ObservationSet, ChartError> {
    let response: NavamsaResponse = serde_json::from_str(body)?;
    navamsa_to_observations(&response.output)
}
