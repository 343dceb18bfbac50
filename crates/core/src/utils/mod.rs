pub mod clock;
pub mod decimal_serde;
pub mod id_generator;
pub mod time_utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
