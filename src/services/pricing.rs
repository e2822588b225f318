use serde::Serialize;

use crate::models::PriceTable;

pub const EXTRA_HOUR_PRICE: u32 = 300;

const HOME_CITY_MARKERS: &[&str] = &["málaga", "malaga"];

const FOREIGN_MARKERS: &[&str] = &[
    "francia",
    "portugal",
    "italia",
    "alemania",
    "reino unido",
    "uk",
    "france",
    "germany",
    "italy",
    "fuera de españa",
];

// Matched as whole words so "Hotel Aroma" is not Rome.
const FOREIGN_CITIES: &[&str] = &[
    "paris", "parís", "londres", "london", "lisboa", "roma", "berlin", "berlín",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    HomeCity,
    OutsideHomeCity,
    OutsideCountry,
}

impl Tier {
    pub fn for_location(location: &str) -> Self {
        let lower = location.to_lowercase();
        let mut words = lower.split(|c: char| !c.is_alphanumeric());
        if HOME_CITY_MARKERS.iter().any(|m| lower.contains(m)) {
            Tier::HomeCity
        } else if FOREIGN_MARKERS.iter().any(|m| lower.contains(m))
            || words.any(|w| FOREIGN_CITIES.contains(&w))
        {
            Tier::OutsideCountry
        } else {
            Tier::OutsideHomeCity
        }
    }

    pub fn price(&self, table: &PriceTable) -> u32 {
        match self {
            Tier::HomeCity => table.base,
            Tier::OutsideHomeCity => table.outside_home_city,
            Tier::OutsideCountry => table.outside_country,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub dj_name: String,
    pub tier: Tier,
    pub tier_price: u32,
    pub hours: u32,
    pub extra_hours: u32,
    pub surcharge: u32,
    pub total: u32,
}

/// Only text mentioning "hora" is read; the first run of digits is the hour
/// count, one hour when there is none. Counts past `u32::MAX` saturate.
pub fn parse_hours(duration: &str) -> u32 {
    let lower = duration.to_lowercase();
    if !lower.contains("hora") {
        return 1;
    }

    let digits: String = lower
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return 1;
    }
    // All ASCII digits, so the only possible failure is overflow.
    digits.parse().unwrap_or(u32::MAX)
}

pub fn quote(dj_name: &str, location: &str, duration: &str) -> Quote {
    let table = PriceTable::for_name(dj_name);
    let tier = Tier::for_location(location);
    let tier_price = tier.price(&table);

    let hours = parse_hours(duration);
    let extra_hours = hours.saturating_sub(1);
    let surcharge = extra_hours.saturating_mul(EXTRA_HOUR_PRICE);

    Quote {
        dj_name: dj_name.to_string(),
        tier,
        tier_price,
        hours,
        extra_hours,
        surcharge,
        total: tier_price.saturating_add(surcharge),
    }
}

pub fn price(dj_name: &str, location: &str, duration: &str) -> u32 {
    quote(dj_name, location, duration).total
}
