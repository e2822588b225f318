use super::bookings::BookingStore;

/// Whether `dj` is free on `date`. Dates compare as literal text, so
/// "2025-06-01" and "1 junio 2025" are different days here.
pub fn is_available(store: &dyn BookingStore, dj: &str, date: &str) -> anyhow::Result<bool> {
    Ok(!store.is_booked(dj, date)?)
}
