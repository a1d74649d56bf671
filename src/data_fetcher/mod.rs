pub mod api;
pub mod clock;
pub mod models;
pub mod processors;

pub use api::{ApiClient, Month, aggregate_month};
pub use clock::{Clock, FixedClock, SystemClock};
pub use models::{NormalizedMatch, StadiumMap};
