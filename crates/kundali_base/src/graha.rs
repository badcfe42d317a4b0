//! Graha identifiers, chart points and the display symbol table.
//!
//! A chart point is anything that gets a label on the chart: the nine
//! grahas plus the Lagna (Ascendant), which is a calculated point rather
//! than a physical body. The two-letter symbols are the ones printed on
//! the chart face.

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Outer planets dropped by the upstream filter before a chart is built.
pub const EXCLUDED_OUTER_PLANETS: [&str; 3] = ["Uranus", "Neptune", "Pluto"];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha, as used by the calculation API.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Two-letter chart symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Surya => "Su",
            Self::Chandra => "Mo",
            Self::Mangal => "Ma",
            Self::Buddh => "Me",
            Self::Guru => "Ju",
            Self::Shukra => "Ve",
            Self::Shani => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Look up a graha by its English name (case-sensitive, API spelling).
    pub fn from_english_name(name: &str) -> Option<Graha> {
        ALL_GRAHAS.into_iter().find(|g| g.english_name() == name)
    }
}

/// Whether `name` is one of the outer planets excluded from the chart.
pub fn is_excluded_outer_planet(name: &str) -> bool {
    EXCLUDED_OUTER_PLANETS.contains(&name)
}

/// A labelled point on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChartPoint {
    /// The Ascendant.
    Lagna,
    Graha(Graha),
    /// A name outside the permitted set. Displayed verbatim.
    Other(String),
}

/// The 10 permitted chart points in canonical order.
pub const ALL_CHART_POINTS: [ChartPoint; 10] = [
    ChartPoint::Lagna,
    ChartPoint::Graha(Graha::Surya),
    ChartPoint::Graha(Graha::Chandra),
    ChartPoint::Graha(Graha::Mangal),
    ChartPoint::Graha(Graha::Buddh),
    ChartPoint::Graha(Graha::Guru),
    ChartPoint::Graha(Graha::Shukra),
    ChartPoint::Graha(Graha::Shani),
    ChartPoint::Graha(Graha::Rahu),
    ChartPoint::Graha(Graha::Ketu),
];

impl ChartPoint {
    /// Resolve an API name. Unknown names become [`ChartPoint::Other`].
    pub fn from_name(name: &str) -> ChartPoint {
        if name == "Ascendant" {
            return ChartPoint::Lagna;
        }
        match Graha::from_english_name(name) {
            Some(g) => ChartPoint::Graha(g),
            None => ChartPoint::Other(name.to_string()),
        }
    }

    /// English name as used by the calculation API.
    pub fn english_name(&self) -> &str {
        match self {
            Self::Lagna => "Ascendant",
            Self::Graha(g) => g.english_name(),
            Self::Other(name) => name,
        }
    }

    /// Chart symbol, falling back to the raw name for unknown points.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Lagna => "As",
            Self::Graha(g) => g.symbol(),
            Self::Other(name) => name,
        }
    }

    pub fn is_ascendant(&self) -> bool {
        matches!(self, Self::Lagna)
    }

    /// Position in [`ALL_CHART_POINTS`]; `None` for unknown points.
    pub fn canonical_index(&self) -> Option<u8> {
        match self {
            Self::Lagna => Some(0),
            Self::Graha(g) => Some(g.index() + 1),
            Self::Other(_) => None,
        }
    }
}

impl std::fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
    }

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn graha_names_nonempty() {
        for g in ALL_GRAHAS {
            assert!(!g.name().is_empty());
            assert!(!g.english_name().is_empty());
        }
    }

    #[test]
    fn symbols_are_two_letters_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for p in &ALL_CHART_POINTS {
            assert_eq!(p.symbol().chars().count(), 2, "{p}");
            assert!(seen.insert(p.symbol().to_string()), "duplicate symbol {}", p.symbol());
        }
    }

    #[test]
    fn english_name_round_trip() {
        for g in ALL_GRAHAS {
            assert_eq!(Graha::from_english_name(g.english_name()), Some(g));
        }
        assert_eq!(Graha::from_english_name("sun"), None);
    }

    #[test]
    fn ascendant_resolves_to_lagna() {
        let p = ChartPoint::from_name("Ascendant");
        assert_eq!(p, ChartPoint::Lagna);
        assert!(p.is_ascendant());
        assert_eq!(p.symbol(), "As");
    }

    #[test]
    fn known_symbols() {
        assert_eq!(ChartPoint::from_name("Sun").symbol(), "Su");
        assert_eq!(ChartPoint::from_name("Venus").symbol(), "Ve");
        assert_eq!(ChartPoint::from_name("Ketu").symbol(), "Ke");
    }

    #[test]
    fn unknown_name_falls_back_to_raw() {
        let p = ChartPoint::from_name("Chiron");
        assert_eq!(p, ChartPoint::Other("Chiron".to_string()));
        assert_eq!(p.symbol(), "Chiron");
        assert_eq!(p.canonical_index(), None);
        assert!(!p.is_ascendant());
    }

    #[test]
    fn canonical_indices_follow_table() {
        for (i, p) in ALL_CHART_POINTS.iter().enumerate() {
            assert_eq!(p.canonical_index(), Some(i as u8));
        }
    }

    #[test]
    fn outer_planets_excluded() {
        assert!(is_excluded_outer_planet("Uranus"));
        assert!(is_excluded_outer_planet("Neptune"));
        assert!(is_excluded_outer_planet("Pluto"));
        assert!(!is_excluded_outer_planet("Saturn"));
    }
}
