use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::db::queries;
use crate::models::Booking;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{dj} already has a confirmed booking on {date}")]
    SlotTaken { dj: String, date: String },

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub trait BookingStore: Send + Sync {
    fn is_booked(&self, dj: &str, date: &str) -> anyhow::Result<bool>;

    fn record_booking(&self, booking: &Booking) -> Result<(), StoreError>;
}

pub struct SqliteBookingStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteBookingStore {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }

    fn conn(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Connection>> {
        self.db
            .lock()
            .map_err(|_| anyhow::anyhow!("booking database lock poisoned"))
    }
}

impl BookingStore for SqliteBookingStore {
    fn is_booked(&self, dj: &str, date: &str) -> anyhow::Result<bool> {
        let db = self.conn()?;
        Ok(queries::count_confirmed_bookings(&db, dj, date)? > 0)
    }

    fn record_booking(&self, booking: &Booking) -> Result<(), StoreError> {
        let db = self.conn()?;
        queries::create_booking(&db, booking).map_err(|e| {
            if is_constraint_violation(&e) {
                StoreError::SlotTaken {
                    dj: booking.dj_name.clone(),
                    date: booking.event_date.clone(),
                }
            } else {
                StoreError::Storage(e)
            }
        })
    }
}

fn is_constraint_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<rusqlite::Error>(),
        Some(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
