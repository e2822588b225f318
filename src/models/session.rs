use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Dj;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Initial,
    SelectingDj,
    CollectingFields,
    Finalized,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Initial => "initial",
            SessionState::SelectingDj => "selecting_dj",
            SessionState::CollectingFields => "collecting_fields",
            SessionState::Finalized => "finalized",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    Location,
    Date,
    Duration,
    FullName,
    Phone,
    Email,
}

impl BookingField {
    pub const ORDER: [BookingField; 6] = [
        BookingField::Location,
        BookingField::Date,
        BookingField::Duration,
        BookingField::FullName,
        BookingField::Phone,
        BookingField::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingField::Location => "Localizacion del evento",
            BookingField::Date => "Fecha del evento",
            BookingField::Duration => "Duracion de la actuacion",
            BookingField::FullName => "Nombre y apellidos",
            BookingField::Phone => "Telefono",
            BookingField::Email => "Correo electronico",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            BookingField::Location => "Localizacion",
            BookingField::Date => "Fecha",
            BookingField::Duration => "Duracion",
            BookingField::FullName => "Nombre",
            BookingField::Phone => "Telefono",
            BookingField::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventDetails {
    pub location: Option<String>,
    pub date: Option<String>,
    pub duration: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl EventDetails {
    pub fn get(&self, field: BookingField) -> Option<&str> {
        match field {
            BookingField::Location => self.location.as_deref(),
            BookingField::Date => self.date.as_deref(),
            BookingField::Duration => self.duration.as_deref(),
            BookingField::FullName => self.full_name.as_deref(),
            BookingField::Phone => self.phone.as_deref(),
            BookingField::Email => self.email.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: BookingField) -> &mut Option<String> {
        match field {
            BookingField::Location => &mut self.location,
            BookingField::Date => &mut self.date,
            BookingField::Duration => &mut self.duration,
            BookingField::FullName => &mut self.full_name,
            BookingField::Phone => &mut self.phone,
            BookingField::Email => &mut self.email,
        }
    }

    pub fn filled(&self) -> usize {
        BookingField::ORDER
            .iter()
            .filter(|f| self.get(**f).is_some())
            .count()
    }

    pub fn next_field(&self) -> Option<BookingField> {
        BookingField::ORDER.get(self.filled()).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.next_field().is_none()
    }

    /// Stores `value` in the next unfilled field and returns that field.
    /// A complete record is left untouched.
    pub fn fill_next(&mut self, value: &str) -> Option<BookingField> {
        let field = self.next_field()?;
        *self.slot_mut(field) = Some(value.to_string());
        Some(field)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub state: SessionState,
    pub selected_dj: Option<Dj>,
    pub details: EventDetails,
    pub created_at: NaiveDateTime,
}

impl Session {
    pub fn new(id: String) -> Self {
        Self {
            id,
            state: SessionState::Initial,
            selected_dj: None,
            details: EventDetails::default(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
