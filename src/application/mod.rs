mod controller;
mod ticker;

pub use controller::{Command, Controller};
pub use ticker::{DEFAULT_INTERVAL, Ticker};
