//! Fixed demonstration charts.
//!
//! Served in place of live API data when a fetch fails, so that the
//! charts still have something to draw.

use crate::graha::{ChartPoint, Graha};
use crate::observation::{ObservationSet, PlanetObservation};
use crate::rashi::Rashi;

fn graha(g: Graha) -> ChartPoint {
    ChartPoint::Graha(g)
}

/// Demonstration birth chart: Ascendant in Dhanu (sign 9).
pub fn demo_rashi_observations() -> ObservationSet {
    let rows = [
        (ChartPoint::Lagna, Rashi::Dhanu, 20.152, false),
        (graha(Graha::Surya), Rashi::Karka, 24.608, false),
        (graha(Graha::Chandra), Rashi::Makara, 15.033, false),
        (graha(Graha::Mangal), Rashi::Vrishabha, 0.510, false),
        (graha(Graha::Buddh), Rashi::Simha, 17.236, false),
        (graha(Graha::Guru), Rashi::Meena, 14.252, true),
        (graha(Graha::Shukra), Rashi::Karka, 5.458, false),
        (graha(Graha::Shani), Rashi::Makara, 27.966, true),
        (graha(Graha::Rahu), Rashi::Mesha, 23.585, true),
        (graha(Graha::Ketu), Rashi::Tula, 23.585, true),
    ];
    let observations = rows
        .into_iter()
        .map(|(p, r, d, retro)| PlanetObservation::rashi(p, r, d, retro))
        .collect();
    ObservationSet::new(observations).unwrap_or_default()
}

/// Demonstration Navamsha chart: Ascendant in Vrishabha (sign 2), house 1.
pub fn demo_navamsha_observations() -> ObservationSet {
    let rows = [
        (ChartPoint::Lagna, Rashi::Vrishabha, 1, false),
        (graha(Graha::Surya), Rashi::Simha, 4, false),
        (graha(Graha::Chandra), Rashi::Mithuna, 2, false),
        (graha(Graha::Mangal), Rashi::Makara, 9, false),
        (graha(Graha::Buddh), Rashi::Kumbha, 10, false),
        (graha(Graha::Guru), Rashi::Vrischika, 7, false),
        (graha(Graha::Shukra), Rashi::Simha, 4, false),
        (graha(Graha::Shani), Rashi::Kanya, 5, false),
        (graha(Graha::Rahu), Rashi::Meena, 11, true),
        (graha(Graha::Ketu), Rashi::Kanya, 5, true),
    ];
    let observations = rows
        .into_iter()
        .map(|(p, r, h, retro)| PlanetObservation::navamsha(p, r, h, retro))
        .collect();
    ObservationSet::new(observations).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_rashi_is_complete() {
        let set = demo_rashi_observations();
        assert_eq!(set.len(), 10);
        assert_eq!(set.require_ascendant().unwrap().rashi, Rashi::Dhanu);
    }

    #[test]
    fn demo_navamsha_is_complete() {
        let set = demo_navamsha_observations();
        assert_eq!(set.len(), 10);
        let asc = set.require_ascendant().unwrap();
        assert_eq!(asc.rashi, Rashi::Vrishabha);
        assert_eq!(asc.house_number, Some(1));
    }

    #[test]
    fn demo_navamsha_houses_follow_ascendant() {
        // house = sign counted from the Ascendant's sign
        let set = demo_navamsha_observations();
        let asc = set.require_ascendant().unwrap().rashi;
        for obs in &set {
            let h = obs.house_number.unwrap();
            assert_eq!(asc.nth_from(h), obs.rashi, "{}", obs.point);
        }
    }
}
