//! Planet observations: the immutable input to chart construction.
//!
//! An [`ObservationSet`] keeps the order in which observations were
//! supplied. Within a single house, labels are stacked in exactly that
//! order; nothing downstream re-sorts by degree or name.

use crate::error::ChartError;
use crate::graha::ChartPoint;
use crate::rashi::Rashi;

/// One chart point as reported by the calculation service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetObservation {
    pub point: ChartPoint,
    /// Sign currently occupied.
    pub rashi: Rashi,
    /// Degrees within the sign, [0, 30). Present for birth-chart data only.
    pub degrees_in_rashi: Option<f64>,
    pub is_retrograde: bool,
    /// House assigned upstream, 1..=12. Present for Navamsha data only.
    pub house_number: Option<u8>,
}

impl PlanetObservation {
    /// Birth-chart (Rashi) observation: sign plus degree within sign.
    pub fn rashi(point: ChartPoint, rashi: Rashi, degrees_in_rashi: f64, is_retrograde: bool) -> Self {
        Self {
            point,
            rashi,
            degrees_in_rashi: Some(degrees_in_rashi),
            is_retrograde,
            house_number: None,
        }
    }

    /// Navamsha (D9) observation: sign plus upstream house number.
    pub fn navamsha(point: ChartPoint, rashi: Rashi, house_number: u8, is_retrograde: bool) -> Self {
        Self {
            point,
            rashi,
            degrees_in_rashi: None,
            is_retrograde,
            house_number: Some(house_number),
        }
    }

    fn validate(&self) -> Result<(), ChartError> {
        if let Some(h) = self.house_number
            && !(1..=12).contains(&h)
        {
            return Err(ChartError::InvalidHouse(h as i64));
        }
        if let Some(d) = self.degrees_in_rashi
            && (!d.is_finite() || !(0.0..30.0).contains(&d))
        {
            return Err(ChartError::InvalidDegree(d));
        }
        Ok(())
    }
}

/// Validated, ordered set of observations with pairwise-distinct points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservationSet {
    observations: Vec<PlanetObservation>,
}

impl ObservationSet {
    /// Validate and wrap a list of observations, keeping their order.
    ///
    /// The Ascendant is not required here; operations that need it call
    /// [`ObservationSet::require_ascendant`].
    pub fn new(observations: Vec<PlanetObservation>) -> Result<Self, ChartError> {
        for (i, obs) in observations.iter().enumerate() {
            obs.validate()?;
            if observations[..i].iter().any(|o| o.point == obs.point) {
                return Err(ChartError::DuplicatePoint(obs.point.english_name().to_string()));
            }
        }
        Ok(Self { observations })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanetObservation> {
        self.observations.iter()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn get(&self, point: &ChartPoint) -> Option<&PlanetObservation> {
        self.observations.iter().find(|o| &o.point == point)
    }

    pub fn ascendant(&self) -> Option<&PlanetObservation> {
        self.get(&ChartPoint::Lagna)
    }

    /// The Ascendant observation, or [`ChartError::MissingAscendant`].
    pub fn require_ascendant(&self) -> Result<&PlanetObservation, ChartError> {
        self.ascendant().ok_or(ChartError::MissingAscendant)
    }

    /// Copy of this set reordered by the canonical point table.
    ///
    /// Points outside the table keep their relative order and go last.
    pub fn into_canonical_order(self) -> Self {
        let mut observations = self.observations;
        // sort_by_key is stable, which keeps Other(..) entries in input order
        observations.sort_by_key(|o| o.point.canonical_index().unwrap_or(u8::MAX));
        Self { observations }
    }
}

impl<'a> IntoIterator for &'a ObservationSet {
    type Item = &'a PlanetObservation;
    type IntoIter = std::slice::Iter<'a, PlanetObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    fn sun(rashi: Rashi) -> PlanetObservation {
        PlanetObservation::rashi(ChartPoint::Graha(Graha::Surya), rashi, 10.0, false)
    }

    #[test]
    fn keeps_insertion_order() {
        let set = ObservationSet::new(vec![
            sun(Rashi::Karka),
            PlanetObservation::rashi(ChartPoint::Lagna, Rashi::Dhanu, 20.1, false),
        ])
        .unwrap();
        let points: Vec<_> = set.iter().map(|o| o.point.clone()).collect();
        assert_eq!(points, vec![ChartPoint::Graha(Graha::Surya), ChartPoint::Lagna]);
    }

    #[test]
    fn rejects_duplicates() {
        let err = ObservationSet::new(vec![sun(Rashi::Karka), sun(Rashi::Simha)]).unwrap_err();
        assert_eq!(err, ChartError::DuplicatePoint("Sun".into()));
    }

    #[test]
    fn rejects_bad_house() {
        let obs = PlanetObservation::navamsha(ChartPoint::Lagna, Rashi::Mesha, 13, false);
        assert_eq!(ObservationSet::new(vec![obs]).unwrap_err(), ChartError::InvalidHouse(13));
        let obs = PlanetObservation::navamsha(ChartPoint::Lagna, Rashi::Mesha, 0, false);
        assert_eq!(ObservationSet::new(vec![obs]).unwrap_err(), ChartError::InvalidHouse(0));
    }

    #[test]
    fn rejects_bad_degree() {
        let obs = PlanetObservation::rashi(ChartPoint::Lagna, Rashi::Mesha, 30.0, false);
        assert!(matches!(ObservationSet::new(vec![obs]), Err(ChartError::InvalidDegree(_))));
        let obs = PlanetObservation::rashi(ChartPoint::Lagna, Rashi::Mesha, f64::NAN, false);
        assert!(matches!(ObservationSet::new(vec![obs]), Err(ChartError::InvalidDegree(_))));
    }

    #[test]
    fn missing_ascendant_is_reported() {
        let set = ObservationSet::new(vec![sun(Rashi::Karka)]).unwrap();
        assert!(set.ascendant().is_none());
        assert_eq!(set.require_ascendant().unwrap_err(), ChartError::MissingAscendant);
    }

    #[test]
    fn canonical_order_puts_lagna_first_and_unknown_last() {
        let set = ObservationSet::new(vec![
            PlanetObservation::rashi(ChartPoint::Other("Chiron".into()), Rashi::Mesha, 1.0, false),
            PlanetObservation::rashi(ChartPoint::Graha(Graha::Ketu), Rashi::Tula, 1.0, true),
            sun(Rashi::Karka),
            PlanetObservation::rashi(ChartPoint::Lagna, Rashi::Dhanu, 1.0, false),
        ])
        .unwrap()
        .into_canonical_order();
        let names: Vec<_> = set.iter().map(|o| o.point.english_name().to_string()).collect();
        assert_eq!(names, vec!["Ascendant", "Sun", "Ketu", "Chiron"]);
    }
}
