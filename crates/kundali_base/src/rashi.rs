//! Rashi (zodiac sign) identifiers and DMS formatting.
//!
//! The calculation API reports signs as numbers 1..=12 starting from
//! Mesha (Aries). Internally a [`Rashi`] carries both the 0-based index
//! and the 1-based number so that house arithmetic never has to guess
//! which convention a value is in.

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number as printed on the chart (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Rashi for a 1-based sign number. `None` outside 1..=12.
    pub fn from_number(number: u8) -> Option<Rashi> {
        match number {
            1..=12 => Some(ALL_RASHIS[(number - 1) as usize]),
            _ => None,
        }
    }

    /// The n-th rashi counted from this one (1-based offset, wrapping).
    ///
    /// `nth_from(1)` is the same rashi, `nth_from(2)` the next one and
    /// `nth_from(12)` the previous one.
    pub fn nth_from(self, offset: u8) -> Rashi {
        let idx = (self.index() as u16 + offset as u16 + 11) % 12;
        ALL_RASHIS[idx as usize]
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Whole arc-seconds (0..59).
    pub seconds: u8,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{}'{}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Convert decimal degrees to degrees-minutes-seconds, truncating each part.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor();
    let minutes_f = (d - total_degrees) * 60.0;
    let minutes = minutes_f.floor();
    let seconds = ((minutes_f - minutes) * 60.0).floor();
    Dms {
        degrees: total_degrees as u16,
        minutes: minutes as u8,
        seconds: seconds as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rashis_count() {
        assert_eq!(ALL_RASHIS.len(), 12);
    }

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(r.number() as usize, i + 1);
        }
    }

    #[test]
    fn rashi_names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
            assert!(!r.western_name().is_empty());
        }
    }

    #[test]
    fn from_number_bounds() {
        assert_eq!(Rashi::from_number(0), None);
        assert_eq!(Rashi::from_number(1), Some(Rashi::Mesha));
        assert_eq!(Rashi::from_number(9), Some(Rashi::Dhanu));
        assert_eq!(Rashi::from_number(12), Some(Rashi::Meena));
        assert_eq!(Rashi::from_number(13), None);
    }

    #[test]
    fn nth_from_same() {
        assert_eq!(Rashi::Mesha.nth_from(1), Rashi::Mesha);
        assert_eq!(Rashi::Kanya.nth_from(1), Rashi::Kanya);
    }

    #[test]
    fn nth_from_wrap() {
        assert_eq!(Rashi::Meena.nth_from(2), Rashi::Mesha);
        assert_eq!(Rashi::Mesha.nth_from(12), Rashi::Meena);
        // 8th from Mesha is Vrischika
        assert_eq!(Rashi::Mesha.nth_from(8), Rashi::Vrischika);
    }

    #[test]
    fn deg_to_dms_zero() {
        let d = deg_to_dms(0.0);
        assert_eq!((d.degrees, d.minutes, d.seconds), (0, 0, 0));
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8" -> seconds truncated to 10
        let d = deg_to_dms(23.853);
        assert_eq!((d.degrees, d.minutes, d.seconds), (23, 51, 10));
    }

    #[test]
    fn dms_display() {
        assert_eq!(deg_to_dms(10.5).to_string(), "10°30'0\"");
    }
}
