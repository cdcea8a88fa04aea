// Database layer module

pub mod clock;
pub mod pool;

pub use clock::{ClockConnection, PgServerClock, ServerClock};
pub use pool::DbPool;
