pub use self::agent::Agent;
pub use self::food::Food;
pub use self::point::{HasPoint, Point};

mod agent;
mod food;
mod point;

pub trait Circle: HasPoint {
    fn r(&self) -> f64;
}
