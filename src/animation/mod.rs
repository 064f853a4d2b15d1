pub mod coast;

pub use coast::{release_acceleration, Coast, DEFAULT_COAST_INTERVAL};
