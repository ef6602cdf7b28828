use config::config;
use models::*;

#[derive(Debug, Clone)]
pub struct Agent {
    pub name_: String,
    pub color_: String,
    pub point_: Point,
    pub theta_: f64,
    pub short_axis_: f64,
    pub long_axis_: f64,
    pub flagella_phase_: f64,
    pub alive_: bool,
}

impl HasPoint for Agent {
    fn point(&self) -> Point {
        self.point_
    }
}

impl Circle for Agent {
    fn r(&self) -> f64 {
        self.largest_extent()
    }
}

impl Agent {
    pub fn new(name: &str, color: &str, point: Point, theta: f64, flagella_phase: f64) -> Agent {
        let short_axis = config().min_short_axis;
        Agent {
            name_: name.to_string(),
            color_: color.to_string(),
            point_: point,
            theta_: theta,
            short_axis_: short_axis,
            long_axis_: short_axis * config().axis_ratio,
            flagella_phase_: flagella_phase,
            alive_: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name_
    }

    pub fn color(&self) -> &str {
        &self.color_
    }

    pub fn alive(&self) -> bool {
        self.alive_
    }

    pub fn theta(&self) -> f64 {
        self.theta_
    }

    pub fn set_theta(&mut self, theta: f64) {
        self.theta_ = theta;
    }

    pub fn set_point(&mut self, point: Point) {
        self.point_ = point;
    }

    pub fn largest_extent(&self) -> f64 {
        self.long_axis_.max(self.short_axis_)
    }

    pub fn grow(&mut self, short: f64, long: f64) {
        self.short_axis_ += short;
        self.long_axis_ += long;
    }

    pub fn eliminate(&mut self) {
        self.alive_ = false;
    }

    pub fn advance_flagella(&mut self, delta: f64) {
        self.flagella_phase_ += delta;
    }

    pub fn overlaps<Other: Circle>(&self, other: &Other) -> bool {
        self.point().qdist(other.point()) < (self.r() + other.r()).powi(2)
    }
}
