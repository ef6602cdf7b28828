use config::config;
use models::*;

#[derive(Debug, Clone)]
pub struct Food {
    pub point_: Point,
}

impl HasPoint for Food {
    fn point(&self) -> Point {
        self.point_
    }
}

impl Circle for Food {
    fn r(&self) -> f64 {
        config().food_radius
    }
}
