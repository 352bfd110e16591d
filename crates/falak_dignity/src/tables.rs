//! Static essential-dignity tables.
//!
//! Rulerships, exaltations, triplicities, exiles and falls are fixed.
//! Terms and faces come in named variants selected through
//! [`DignityConfig`](falak_config::DignityConfig).

use falak_config::{FaceVariant, TermVariant};
use falak_core::BodyId::{self, Jupiter, Mars, Mercury, Moon, Saturn, Sun, Venus};
use falak_core::{ALL_SIGNS, Sign};

// ---------------------------------------------------------------------------
// Sign dignities
// ---------------------------------------------------------------------------

/// Fixed dignities of one sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignDignities {
    pub ruler: BodyId,
    /// Exalted body and its exaltation degree within the sign.
    pub exalt: Option<(BodyId, f64)>,
    /// Diurnal, nocturnal and participating triplicity rulers.
    pub trip: [BodyId; 3],
    pub exile: BodyId,
    /// Body in fall and its fall degree within the sign.
    pub fall: Option<(BodyId, f64)>,
}

const fn sd(
    ruler: BodyId,
    exalt: Option<(BodyId, f64)>,
    trip: [BodyId; 3],
    exile: BodyId,
    fall: Option<(BodyId, f64)>,
) -> SignDignities {
    SignDignities {
        ruler,
        exalt,
        trip,
        exile,
        fall,
    }
}

/// Indexed by [`Sign::index`].
pub const ESSENTIAL_DIGNITIES: [SignDignities; 12] = [
    sd(Mars, Some((Sun, 19.0)), [Sun, Jupiter, Saturn], Venus, Some((Saturn, 21.0))),
    sd(Venus, Some((Moon, 3.0)), [Venus, Moon, Mars], Mars, None),
    sd(Mercury, None, [Saturn, Mercury, Jupiter], Jupiter, None),
    sd(Moon, Some((Jupiter, 15.0)), [Venus, Mars, Moon], Saturn, Some((Mars, 28.0))),
    sd(Sun, None, [Sun, Jupiter, Saturn], Saturn, None),
    sd(Mercury, Some((Mercury, 15.0)), [Venus, Moon, Mars], Jupiter, Some((Venus, 27.0))),
    sd(Venus, Some((Saturn, 21.0)), [Saturn, Mercury, Jupiter], Mars, Some((Sun, 19.0))),
    sd(Mars, None, [Venus, Mars, Moon], Venus, Some((Moon, 3.0))),
    sd(Jupiter, None, [Sun, Jupiter, Saturn], Mercury, None),
    sd(Saturn, Some((Mars, 28.0)), [Venus, Moon, Mars], Moon, Some((Jupiter, 15.0))),
    sd(Saturn, None, [Saturn, Mercury, Jupiter], Sun, None),
    sd(Jupiter, Some((Venus, 27.0)), [Venus, Mars, Moon], Mercury, Some((Mercury, 15.0))),
];

pub const fn sign_dignities(sign: Sign) -> &'static SignDignities {
    &ESSENTIAL_DIGNITIES[sign.index()]
}

/// Ruler (domicile lord) of a sign.
pub const fn ruler(sign: Sign) -> BodyId {
    sign_dignities(sign).ruler
}

// ---------------------------------------------------------------------------
// Terms
// ---------------------------------------------------------------------------

/// A term: `[start, end)` degrees within the sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub ruler: BodyId,
    pub start: f64,
    pub end: f64,
}

const fn t(ruler: BodyId, start: f64, end: f64) -> Term {
    Term { ruler, start, end }
}

pub type TermTable = [[Term; 5]; 12];

pub const EGYPTIAN_TERMS: TermTable = [
    [t(Jupiter, 0.0, 6.0), t(Venus, 6.0, 12.0), t(Mercury, 12.0, 20.0), t(Mars, 20.0, 25.0), t(Saturn, 25.0, 30.0)],
    [t(Venus, 0.0, 8.0), t(Mercury, 8.0, 14.0), t(Jupiter, 14.0, 22.0), t(Saturn, 22.0, 27.0), t(Mars, 27.0, 30.0)],
    [t(Mercury, 0.0, 6.0), t(Jupiter, 6.0, 12.0), t(Venus, 12.0, 17.0), t(Mars, 17.0, 24.0), t(Saturn, 24.0, 30.0)],
    [t(Mars, 0.0, 7.0), t(Venus, 7.0, 13.0), t(Mercury, 13.0, 19.0), t(Jupiter, 19.0, 26.0), t(Saturn, 26.0, 30.0)],
    [t(Jupiter, 0.0, 6.0), t(Venus, 6.0, 11.0), t(Saturn, 11.0, 18.0), t(Mercury, 18.0, 24.0), t(Mars, 24.0, 30.0)],
    [t(Mercury, 0.0, 7.0), t(Venus, 7.0, 17.0), t(Jupiter, 17.0, 21.0), t(Mars, 21.0, 28.0), t(Saturn, 28.0, 30.0)],
    [t(Saturn, 0.0, 6.0), t(Mercury, 6.0, 14.0), t(Jupiter, 14.0, 21.0), t(Venus, 21.0, 28.0), t(Mars, 28.0, 30.0)],
    [t(Mars, 0.0, 7.0), t(Venus, 7.0, 11.0), t(Mercury, 11.0, 19.0), t(Jupiter, 19.0, 24.0), t(Saturn, 24.0, 30.0)],
    [t(Jupiter, 0.0, 12.0), t(Venus, 12.0, 17.0), t(Mercury, 17.0, 21.0), t(Saturn, 21.0, 26.0), t(Mars, 26.0, 30.0)],
    [t(Mercury, 0.0, 7.0), t(Jupiter, 7.0, 14.0), t(Venus, 14.0, 22.0), t(Saturn, 22.0, 26.0), t(Mars, 26.0, 30.0)],
    [t(Mercury, 0.0, 7.0), t(Venus, 7.0, 13.0), t(Jupiter, 13.0, 20.0), t(Mars, 20.0, 25.0), t(Saturn, 25.0, 30.0)],
    [t(Venus, 0.0, 12.0), t(Jupiter, 12.0, 16.0), t(Mercury, 16.0, 19.0), t(Mars, 19.0, 28.0), t(Saturn, 28.0, 30.0)],
];

/// Ptolemaic terms, Robbins translation.
pub const TETRABIBLOS_TERMS: TermTable = [
    [t(Jupiter, 0.0, 6.0), t(Venus, 6.0, 14.0), t(Mercury, 14.0, 21.0), t(Mars, 21.0, 26.0), t(Saturn, 26.0, 30.0)],
    [t(Venus, 0.0, 8.0), t(Mercury, 8.0, 15.0), t(Jupiter, 15.0, 22.0), t(Saturn, 22.0, 24.0), t(Mars, 24.0, 30.0)],
    [t(Mercury, 0.0, 7.0), t(Jupiter, 7.0, 13.0), t(Venus, 13.0, 20.0), t(Mars, 20.0, 26.0), t(Saturn, 26.0, 30.0)],
    [t(Mars, 0.0, 6.0), t(Jupiter, 6.0, 13.0), t(Mercury, 13.0, 20.0), t(Venus, 20.0, 27.0), t(Saturn, 27.0, 30.0)],
    [t(Jupiter, 0.0, 6.0), t(Mercury, 6.0, 13.0), t(Saturn, 13.0, 19.0), t(Venus, 19.0, 25.0), t(Mars, 25.0, 30.0)],
    [t(Mercury, 0.0, 7.0), t(Venus, 7.0, 13.0), t(Jupiter, 13.0, 18.0), t(Saturn, 18.0, 24.0), t(Mars, 24.0, 30.0)],
    [t(Saturn, 0.0, 6.0), t(Venus, 6.0, 11.0), t(Mercury, 11.0, 16.0), t(Jupiter, 16.0, 24.0), t(Mars, 24.0, 30.0)],
    [t(Mars, 0.0, 6.0), t(Venus, 6.0, 13.0), t(Jupiter, 13.0, 21.0), t(Mercury, 21.0, 27.0), t(Saturn, 27.0, 30.0)],
    [t(Jupiter, 0.0, 8.0), t(Venus, 8.0, 14.0), t(Mercury, 14.0, 19.0), t(Saturn, 19.0, 25.0), t(Mars, 25.0, 30.0)],
    [t(Venus, 0.0, 6.0), t(Mercury, 6.0, 12.0), t(Jupiter, 12.0, 19.0), t(Saturn, 19.0, 25.0), t(Mars, 25.0, 30.0)],
    [t(Saturn, 0.0, 6.0), t(Mercury, 6.0, 12.0), t(Venus, 12.0, 20.0), t(Jupiter, 20.0, 25.0), t(Mars, 25.0, 30.0)],
    [t(Venus, 0.0, 8.0), t(Jupiter, 8.0, 14.0), t(Mercury, 14.0, 20.0), t(Mars, 20.0, 25.0), t(Saturn, 25.0, 30.0)],
];

/// Ptolemaic terms as given in Christian Astrology.
pub const LILLY_TERMS: TermTable = [
    [t(Jupiter, 0.0, 6.0), t(Venus, 6.0, 14.0), t(Mercury, 14.0, 21.0), t(Mars, 21.0, 26.0), t(Saturn, 26.0, 30.0)],
    [t(Venus, 0.0, 8.0), t(Mercury, 8.0, 15.0), t(Jupiter, 15.0, 22.0), t(Saturn, 22.0, 26.0), t(Mars, 26.0, 30.0)],
    [t(Mercury, 0.0, 7.0), t(Jupiter, 7.0, 14.0), t(Venus, 14.0, 21.0), t(Saturn, 21.0, 25.0), t(Mars, 25.0, 30.0)],
    [t(Mars, 0.0, 6.0), t(Jupiter, 6.0, 13.0), t(Mercury, 13.0, 20.0), t(Venus, 20.0, 27.0), t(Saturn, 27.0, 30.0)],
    [t(Saturn, 0.0, 6.0), t(Mercury, 6.0, 13.0), t(Venus, 13.0, 19.0), t(Jupiter, 19.0, 25.0), t(Mars, 25.0, 30.0)],
    [t(Mercury, 0.0, 7.0), t(Venus, 7.0, 13.0), t(Jupiter, 13.0, 18.0), t(Saturn, 18.0, 24.0), t(Mars, 24.0, 30.0)],
    [t(Saturn, 0.0, 6.0), t(Venus, 6.0, 11.0), t(Jupiter, 11.0, 19.0), t(Mercury, 19.0, 24.0), t(Mars, 24.0, 30.0)],
    [t(Mars, 0.0, 6.0), t(Jupiter, 6.0, 14.0), t(Venus, 14.0, 21.0), t(Mercury, 21.0, 27.0), t(Saturn, 27.0, 30.0)],
    [t(Jupiter, 0.0, 8.0), t(Venus, 8.0, 14.0), t(Mercury, 14.0, 19.0), t(Saturn, 19.0, 25.0), t(Mars, 25.0, 30.0)],
    [t(Venus, 0.0, 6.0), t(Mercury, 6.0, 12.0), t(Jupiter, 12.0, 19.0), t(Mars, 19.0, 25.0), t(Saturn, 25.0, 30.0)],
    [t(Saturn, 0.0, 6.0), t(Mercury, 6.0, 12.0), t(Venus, 12.0, 20.0), t(Jupiter, 20.0, 25.0), t(Mars, 25.0, 30.0)],
    [t(Venus, 0.0, 8.0), t(Jupiter, 8.0, 14.0), t(Mercury, 14.0, 20.0), t(Mars, 20.0, 25.0), t(Saturn, 25.0, 30.0)],
];

pub const fn term_table(variant: TermVariant) -> &'static TermTable {
    match variant {
        TermVariant::Egyptian => &EGYPTIAN_TERMS,
        TermVariant::Tetrabiblos => &TETRABIBLOS_TERMS,
        TermVariant::Lilly => &LILLY_TERMS,
    }
}

/// Absolute start longitude of every term, sign by sign.
pub fn term_longitudes(variant: TermVariant) -> Vec<(BodyId, Sign, f64)> {
    let table = term_table(variant);
    ALL_SIGNS
        .iter()
        .flat_map(|sign| {
            table[sign.index()]
                .iter()
                .map(move |term| (term.ruler, *sign, sign.start_lon() + term.start))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Faces
// ---------------------------------------------------------------------------

pub type FaceTable = [[BodyId; 3]; 12];

pub const CHALDEAN_FACES: FaceTable = [
    [Mars, Sun, Venus],
    [Mercury, Moon, Saturn],
    [Jupiter, Mars, Sun],
    [Venus, Mercury, Moon],
    [Saturn, Jupiter, Mars],
    [Sun, Venus, Mercury],
    [Moon, Saturn, Jupiter],
    [Mars, Sun, Venus],
    [Mercury, Moon, Saturn],
    [Jupiter, Mars, Sun],
    [Venus, Mercury, Moon],
    [Saturn, Jupiter, Mars],
];

pub const TRIPLICITY_FACES: FaceTable = [
    [Mars, Sun, Jupiter],
    [Venus, Mercury, Saturn],
    [Mercury, Venus, Saturn],
    [Moon, Mars, Jupiter],
    [Sun, Jupiter, Mars],
    [Mercury, Saturn, Venus],
    [Venus, Saturn, Mercury],
    [Mars, Jupiter, Moon],
    [Jupiter, Mars, Sun],
    [Saturn, Venus, Mercury],
    [Saturn, Mercury, Venus],
    [Jupiter, Moon, Mars],
];

pub const fn face_table(variant: FaceVariant) -> &'static FaceTable {
    match variant {
        FaceVariant::Chaldean => &CHALDEAN_FACES,
        FaceVariant::Triplicity => &TRIPLICITY_FACES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_terms(table: &TermTable) {
        for (i, terms) in table.iter().enumerate() {
            assert_eq!(terms[0].start, 0.0, "sign {i}");
            assert_eq!(terms[4].end, 30.0, "sign {i}");
            for pair in terms.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "sign {i}");
            }
            // Five distinct rulers per sign
            for (j, a) in terms.iter().enumerate() {
                assert!(terms[j + 1..].iter().all(|b| b.ruler != a.ruler), "sign {i}");
            }
        }
    }

    #[test]
    fn term_tables_are_contiguous() {
        check_terms(&EGYPTIAN_TERMS);
        check_terms(&TETRABIBLOS_TERMS);
        check_terms(&LILLY_TERMS);
    }

    #[test]
    fn rulers_match_domiciles() {
        assert_eq!(ruler(Sign::Aries), Mars);
        assert_eq!(ruler(Sign::Leo), Sun);
        assert_eq!(ruler(Sign::Cancer), Moon);
        assert_eq!(ruler(Sign::Aquarius), Saturn);
        assert_eq!(ruler(Sign::Pisces), Jupiter);
    }

    #[test]
    fn exile_opposes_rulership() {
        for sign in ALL_SIGNS {
            let opposite = ALL_SIGNS[(sign.index() + 6) % 12];
            assert_eq!(sign_dignities(sign).exile, ruler(opposite), "{}", sign.name());
        }
    }

    #[test]
    fn term_longitudes_cover_zodiac() {
        let lons = term_longitudes(TermVariant::Egyptian);
        assert_eq!(lons.len(), 60);
        assert_eq!(lons[0], (Jupiter, Sign::Aries, 0.0));
        assert_eq!(lons[5], (Venus, Sign::Taurus, 30.0));
        assert_eq!(lons[59], (Saturn, Sign::Pisces, 358.0));
    }
}
