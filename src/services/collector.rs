use crate::models::{BookingField, Dj, EventDetails};

use super::availability;
use super::bookings::BookingStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Accepted {
        field: BookingField,
        next: Option<BookingField>,
    },
    DateUnavailable { date: String },
}

pub fn collect_field(
    details: &mut EventDetails,
    message: &str,
    dj: Dj,
    store: &dyn BookingStore,
) -> anyhow::Result<FieldOutcome> {
    let Some(field) = details.next_field() else {
        anyhow::bail!("all booking fields are already collected");
    };

    if field == BookingField::Date && !availability::is_available(store, dj.name(), message)? {
        tracing::info!(dj = %dj, date = message, "requested date already booked");
        return Ok(FieldOutcome::DateUnavailable {
            date: message.to_string(),
        });
    }

    details.fill_next(message);
    Ok(FieldOutcome::Accepted {
        field,
        next: details.next_field(),
    })
}
