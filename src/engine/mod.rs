pub use self::round::{Round, RoundStatus, StartError};

pub mod mechanic;
mod round;

pub type Tick = i64;
