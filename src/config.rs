use std::sync::{Mutex, MutexGuard};

use lazy_static;
use serde_json;

use models::Point;

pub fn config() -> &'static Config {
    &*SINGLETON
}

lazy_static! {
    static ref INITIALIZER: Mutex<Option<Config>> = Mutex::new(None);
    static ref SINGLETON: Config = {
        lock_initializer().take().expect("config::INITIALIZER is None")
    };
}

pub fn init_config(config: Config) {
    *lock_initializer() = Some(config);
    lazy_static::initialize(&SINGLETON);
}

fn lock_initializer<'mutex>() -> MutexGuard<'mutex, Option<Config>> {
    INITIALIZER.lock().expect(
        "config::INITIALIZER.lock() failed",
    )
}

macro_rules! impl_config {
    ($($name:ident: $type:ty = $value:expr),* $(,)*) => {
        #[derive(Debug)]
        pub struct Config {
            $(
                pub $name: $type
            ),*
        }

        impl Config {
            pub fn from_json(json: serde_json::Value) -> Config {
                Config {
                    $(
                        $name: get_or_default!(json,
                                               stringify!($name).to_string().to_uppercase(),
                                               $value)
                    ),*
                }
            }
        }

        impl Default for Config {
            fn default() -> Config {
                Config {
                    $(
                        $name: $value
                    ),*
                }
            }
        }
    };
}

macro_rules! get_or_default {
    ($json:ident, $key:expr, $default_value:expr) => {
        ValueWrapper($json.get($key).unwrap_or(&json!($default_value))).into()
    };
}

struct ValueWrapper<'a>(&'a serde_json::Value);

macro_rules! impl_into {
    ($type:ty, $method:ident) => {
        impl<'a> Into<$type> for ValueWrapper<'a> {
            fn into(self) -> $type {
                (self.0).$method().expect("conversion failed")
            }
        }
    };
}

impl_into!(i64, as_i64);
impl_into!(f64, as_f64);

impl_config! {
    arena_margin: f64 = 15.0,
    arena_size: i64 = 600,
    axis_ratio: f64 = 1.7,
    base_speed: f64 = 1.2,
    bounce_jitter: f64 = 0.6,
    brownian_strength: f64 = 0.22,
    collision_growth: f64 = 1.0,
    flagella_phase_jitter: f64 = 0.08,
    flagella_phase_step: f64 = 0.16,
    food_interval_ms: i64 = 200,
    food_long_growth: f64 = 2.5,
    food_radius: f64 = 5.0,
    food_short_growth: f64 = 1.3,
    min_short_axis: f64 = 3.5,
    near_size_threshold: f64 = 2.0,
    reflect_jitter: f64 = 0.7,
    spawn_margin: f64 = 10.0,
    speed_scale_min: f64 = 0.8,
    speed_scale_spread: f64 = 0.4,
    tick_period_ms: i64 = 16,
    wall_margin: f64 = 1.0,
}

impl Config {
    pub fn arena_center(&self) -> Point {
        let half = self.arena_size as f64 / 2.0;
        Point::new(half, half)
    }

    pub fn arena_radius(&self) -> f64 {
        self.arena_size as f64 / 2.0 - self.arena_margin
    }
}
