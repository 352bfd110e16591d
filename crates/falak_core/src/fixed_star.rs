//! Fixed-star catalogue names.

use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FixedStarId {
    Algenib,
    Alpheratz,
    Algol,
    Alcyone,
    Aldebaran,
    Rigel,
    Capella,
    Betelgeuse,
    Sirius,
    Canopus,
    Castor,
    Pollux,
    Procyon,
    AsellusBorealis,
    AsellusAustralis,
    Alphard,
    Regulus,
    Denebola,
    Algorab,
    Spica,
    Arcturus,
    Alphecca,
    ZubenElgenubi,
    ZubenEshamali,
    Unukalhai,
    Agena,
    RigelKentaurus,
    Antares,
    Lesath,
    Vega,
    Altair,
    DenebAlgedi,
    Fomalhaut,
    Deneb,
    Achernar,
}

/// Full catalogue in listing order.
pub const ALL_FIXED_STARS: [FixedStarId; 35] = [
    FixedStarId::Algenib,
    FixedStarId::Alpheratz,
    FixedStarId::Algol,
    FixedStarId::Alcyone,
    FixedStarId::Aldebaran,
    FixedStarId::Rigel,
    FixedStarId::Capella,
    FixedStarId::Betelgeuse,
    FixedStarId::Sirius,
    FixedStarId::Canopus,
    FixedStarId::Castor,
    FixedStarId::Pollux,
    FixedStarId::Procyon,
    FixedStarId::AsellusBorealis,
    FixedStarId::AsellusAustralis,
    FixedStarId::Alphard,
    FixedStarId::Regulus,
    FixedStarId::Denebola,
    FixedStarId::Algorab,
    FixedStarId::Spica,
    FixedStarId::Arcturus,
    FixedStarId::Alphecca,
    FixedStarId::ZubenElgenubi,
    FixedStarId::ZubenEshamali,
    FixedStarId::Unukalhai,
    FixedStarId::Agena,
    FixedStarId::RigelKentaurus,
    FixedStarId::Antares,
    FixedStarId::Lesath,
    FixedStarId::Vega,
    FixedStarId::Altair,
    FixedStarId::DenebAlgedi,
    FixedStarId::Fomalhaut,
    FixedStarId::Deneb,
    FixedStarId::Achernar,
];

impl FixedStarId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Algenib => "Algenib",
            Self::Alpheratz => "Alpheratz",
            Self::Algol => "Algol",
            Self::Alcyone => "Alcyone",
            Self::Aldebaran => "Aldebaran",
            Self::Rigel => "Rigel",
            Self::Capella => "Capella",
            Self::Betelgeuse => "Betelgeuse",
            Self::Sirius => "Sirius",
            Self::Canopus => "Canopus",
            Self::Castor => "Castor",
            Self::Pollux => "Pollux",
            Self::Procyon => "Procyon",
            Self::AsellusBorealis => "Asellus Borealis",
            Self::AsellusAustralis => "Asellus Australis",
            Self::Alphard => "Alphard",
            Self::Regulus => "Regulus",
            Self::Denebola => "Denebola",
            Self::Algorab => "Algorab",
            Self::Spica => "Spica",
            Self::Arcturus => "Arcturus",
            Self::Alphecca => "Alphecca",
            Self::ZubenElgenubi => "Zuben Elgenubi",
            Self::ZubenEshamali => "Zuben Eshamali",
            Self::Unukalhai => "Unukalhai",
            Self::Agena => "Agena",
            Self::RigelKentaurus => "Rigel Kentaurus",
            Self::Antares => "Antares",
            Self::Lesath => "Lesath",
            Self::Vega => "Vega",
            Self::Altair => "Altair",
            Self::DenebAlgedi => "Deneb Algedi",
            Self::Fomalhaut => "Fomalhaut",
            Self::Deneb => "Deneb",
            Self::Achernar => "Achernar",
        }
    }
}

impl FromStr for FixedStarId {
    type Err = CoreError;

    /// `Pleiades` is accepted as an alias of Alcyone.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("Pleiades") {
            return Ok(Self::Alcyone);
        }
        ALL_FIXED_STARS
            .iter()
            .copied()
            .find(|star| star.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownIdentifier(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_alias() {
        assert_eq!("Pleiades".parse::<FixedStarId>().unwrap(), FixedStarId::Alcyone);
        assert_eq!("spica".parse::<FixedStarId>().unwrap(), FixedStarId::Spica);
        assert!("Polaris".parse::<FixedStarId>().is_err());
    }

    #[test]
    fn names_unique() {
        for (i, a) in ALL_FIXED_STARS.iter().enumerate() {
            for b in &ALL_FIXED_STARS[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
