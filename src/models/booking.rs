use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Dj, EventDetails};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub dj_name: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub location: String,
    pub event_date: String,
    pub duration: String,
    pub total_price: u32,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub fn from_details(dj: Dj, details: &EventDetails, total_price: u32) -> Option<Self> {
        Some(Self {
            id: uuid::Uuid::new_v4().to_string(),
            dj_name: dj.name().to_string(),
            client_name: details.full_name.clone()?,
            client_phone: details.phone.clone()?,
            client_email: details.email.clone()?,
            location: details.location.clone()?,
            event_date: details.date.clone()?,
            duration: details.duration.clone()?,
            total_price,
            status: BookingStatus::Confirmed,
            created_at: chrono::Utc::now().naive_utc(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Confirmed,
        }
    }
}
