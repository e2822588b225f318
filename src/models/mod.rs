pub mod booking;
pub mod dj;
pub mod intent;
pub mod session;

pub use booking::{Booking, BookingStatus};
pub use dj::{Dj, PriceTable};
pub use intent::{Entities, Intent, IntentAnalysis, ResponseType};
pub use session::{BookingField, EventDetails, Session, SessionState};
