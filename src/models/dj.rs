use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dj {
    TheBrainkiller,
    JoseRodriguez,
    Tortu,
    VAparicio,
    Wardian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceTable {
    pub base: u32,
    pub outside_home_city: u32,
    pub outside_country: u32,
}

// Checked in order; the first alias contained in the message wins.
const ALIASES: &[(&str, Dj)] = &[
    ("brainkiller", Dj::TheBrainkiller),
    ("jose", Dj::JoseRodriguez),
    ("rodriguez", Dj::JoseRodriguez),
    ("tortu", Dj::Tortu),
    ("aparicio", Dj::VAparicio),
    ("wardian", Dj::Wardian),
];

const FALLBACK: Dj = Dj::VAparicio;

impl Dj {
    pub const ALL: [Dj; 5] = [
        Dj::TheBrainkiller,
        Dj::JoseRodriguez,
        Dj::Tortu,
        Dj::VAparicio,
        Dj::Wardian,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dj::TheBrainkiller => "The Brainkiller",
            Dj::JoseRodriguez => "Jose Rodriguez",
            Dj::Tortu => "Tortu",
            Dj::VAparicio => "V. Aparicio",
            Dj::Wardian => "Wardian",
        }
    }

    pub fn prices(&self) -> PriceTable {
        let (base, outside_home_city, outside_country) = match self {
            Dj::TheBrainkiller => (1600, 1800, 2500),
            Dj::JoseRodriguez => (1000, 1200, 1900),
            Dj::Tortu => (1200, 1400, 2100),
            Dj::VAparicio => (600, 800, 1500),
            Dj::Wardian => (600, 800, 1500),
        };
        PriceTable {
            base,
            outside_home_city,
            outside_country,
        }
    }

    pub fn resolve(message: &str) -> Option<Self> {
        let lower = message.to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| lower.contains(alias))
            .map(|(_, dj)| *dj)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|dj| dj.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Dj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl PriceTable {
    /// Price table for a DJ display name. Unknown names get the cheapest
    /// entry's table instead of an error.
    pub fn for_name(name: &str) -> Self {
        Dj::from_name(name).unwrap_or(FALLBACK).prices()
    }
}
