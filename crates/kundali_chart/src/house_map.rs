//! Sign-to-house rotation and grouping of observations by house.
//!
//! In the Rashi chart the Ascendant's sign occupies house 1 and each
//! following sign takes the next house:
//!
//! ```text
//! house = ((sign - ascendant_sign + 12) mod 12) + 1
//! ```
//!
//! In the Navamsha chart houses come straight from the upstream house
//! numbers; the sign map is still anchored on the Ascendant so that empty
//! houses can show the sign they hold.
//!
//! Grouping keeps the observation set's order within each house and keeps
//! empty houses as empty buckets.

use kundali_base::{ChartError, ObservationSet, PlanetObservation, Rashi};

/// House (1..=12) occupied by `sign` when `ascendant` rises.
pub fn sign_to_house(ascendant: Rashi, sign: Rashi) -> u8 {
    ((sign.number() + 12 - ascendant.number()) % 12) + 1
}

/// Sign occupying `house` when `ascendant` rises. `None` outside 1..=12.
pub fn house_to_sign(ascendant: Rashi, house: u8) -> Option<Rashi> {
    if !(1..=12).contains(&house) {
        return None;
    }
    Some(ascendant.nth_from(house))
}

/// Both directions of the sign/house bijection for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignHouseMap {
    /// `house_of_sign[rashi.index()]` = house number 1..=12.
    house_of_sign: [u8; 12],
    /// `sign_of_house[house - 1]` = rashi.
    sign_of_house: [Rashi; 12],
}

impl SignHouseMap {
    /// Map with `ascendant` in house 1.
    pub fn new(ascendant: Rashi) -> Self {
        Self::anchored(ascendant, 1)
    }

    /// Map with `rashi` placed in `house` (1..=12, taken modulo 12).
    pub fn anchored(rashi: Rashi, house: u8) -> Self {
        // Sign that would sit in house 1.
        let first = rashi.nth_from(14 - (house.clamp(1, 12)));
        let mut house_of_sign = [0u8; 12];
        let mut sign_of_house = [Rashi::Mesha; 12];
        for h in 1..=12u8 {
            let sign = first.nth_from(h);
            house_of_sign[sign.index() as usize] = h;
            sign_of_house[(h - 1) as usize] = sign;
        }
        Self {
            house_of_sign,
            sign_of_house,
        }
    }

    /// House holding `sign`.
    pub fn house_of(&self, sign: Rashi) -> u8 {
        self.house_of_sign[sign.index() as usize]
    }

    /// Sign held by `house`. `None` outside 1..=12.
    pub fn sign_of(&self, house: u8) -> Option<Rashi> {
        if !(1..=12).contains(&house) {
            return None;
        }
        Some(self.sign_of_house[(house - 1) as usize])
    }
}

/// Observations bucketed by house, 12 buckets, order-preserving.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseGroups<'a> {
    buckets: [Vec<&'a PlanetObservation>; 12],
}

impl<'a> HouseGroups<'a> {
    fn empty() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Vec::new()),
        }
    }

    fn push(&mut self, house: u8, obs: &'a PlanetObservation) {
        self.buckets[(house - 1) as usize].push(obs);
    }

    /// Occupants of `house` (1..=12) in input order. Empty outside range.
    pub fn house(&self, house: u8) -> &[&'a PlanetObservation] {
        match house {
            1..=12 => &self.buckets[(house - 1) as usize],
            _ => &[],
        }
    }

    /// `(house, occupants)` for houses 1..=12, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[&'a PlanetObservation])> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .map(|(i, b)| (i as u8 + 1, b.as_slice()))
    }

    /// Total number of placed observations.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Rashi chart grouping: house by sign rotation from the Ascendant.
pub fn group_by_sign(set: &ObservationSet) -> Result<(SignHouseMap, HouseGroups<'_>), ChartError> {
    let ascendant = set.require_ascendant()?;
    let map = SignHouseMap::new(ascendant.rashi);
    let mut groups = HouseGroups::empty();
    for obs in set {
        groups.push(map.house_of(obs.rashi), obs);
    }
    Ok((map, groups))
}

/// Navamsha chart grouping: house numbers used exactly as supplied.
///
/// The Ascendant is placed like any other point. Every observation must
/// carry a house number.
pub fn group_by_house_number(
    set: &ObservationSet,
) -> Result<(SignHouseMap, HouseGroups<'_>), ChartError> {
    let ascendant = set.require_ascendant()?;
    let asc_house = ascendant.house_number.ok_or(ChartError::InvalidHouse(0))?;
    let map = SignHouseMap::anchored(ascendant.rashi, asc_house);
    let mut groups = HouseGroups::empty();
    for obs in set {
        let house = match obs.house_number {
            Some(h @ 1..=12) => h,
            Some(h) => return Err(ChartError::InvalidHouse(h as i64)),
            None => return Err(ChartError::InvalidHouse(0)),
        };
        groups.push(house, obs);
    }
    Ok((map, groups))
}
