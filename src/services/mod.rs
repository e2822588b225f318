pub mod ai;
pub mod availability;
pub mod bookings;
pub mod collector;
pub mod conversation;
pub mod knowledge;
pub mod pricing;
pub mod replies;
pub mod sessions;
