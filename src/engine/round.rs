use std::f64::consts::PI;
use std::fmt;

use rand::Rng;

use config::config;
use engine::mechanic;
use engine::Tick;
use models::*;
use snapshot::{AgentView, FoodView, RankEntry, RenderSnapshot};

const MIN_NAMES: usize = 3;
const WINNER_COUNT: usize = 3;

// Ten display colors; assigned at spawn, never changed.
const PALETTE: [&'static str; 10] = [
    "#2b7a0b",
    "#1890ff",
    "#ff8c00",
    "#e91e63",
    "#673ab7",
    "#009688",
    "#f44336",
    "#ffb300",
    "#607d8b",
    "#43a047",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Idle,
    Running,
    Finished,
}

/// The only reported error in the engine; per-tick computation is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    NotEnoughNames { got: usize },
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            StartError::NotEnoughNames { got } => {
                write!(f, "need at least {} contestant names, got {}", MIN_NAMES, got)
            }
        }
    }
}

/// One elimination round. Externally driven: the caller schedules `tick()` at
/// display cadence; the food spawner runs off a millisecond accumulator fed
/// from the same tick stream, so both timers stay serialized on one thread.
#[derive(Debug)]
pub struct Round<R: Rng> {
    rng: R,
    status: RoundStatus,
    tick: Tick,
    agents: Vec<Agent>,
    foods: Vec<Food>,
    food_clock_ms: i64,
}

impl<R: Rng> Round<R> {
    pub fn new(rng: R) -> Round<R> {
        Round {
            rng,
            status: RoundStatus::Idle,
            tick: 0,
            agents: vec![],
            foods: vec![],
            food_clock_ms: 0,
        }
    }

    /// Begins a fresh round, fully replacing any previous round's state. A
    /// rejected request leaves existing state untouched.
    pub fn start(&mut self, names: &[String]) -> Result<(), StartError> {
        let names: Vec<&str> = names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();
        if names.len() < MIN_NAMES {
            return Err(StartError::NotEnoughNames { got: names.len() });
        }
        let mut agents = Vec::with_capacity(names.len());
        for name in names {
            let agent = self.create_agent(name);
            agents.push(agent);
        }
        self.agents = agents;
        self.foods.clear();
        self.food_clock_ms = 0;
        self.tick = 0;
        self.status = RoundStatus::Running;
        #[cfg(feature = "debug")]
        debug!("round started with {} contestants", self.agents.len());
        Ok(())
    }

    fn create_agent(&mut self, name: &str) -> Agent {
        let color = *self.rng.choose(&PALETTE).expect("PALETTE is empty");
        let theta = self.rng.gen::<f64>() * 2.0 * PI;
        let phase = self.rng.gen::<f64>() * 2.0 * PI;
        let long_axis = config().min_short_axis * config().axis_ratio;
        let point = mechanic::random_pos(&mut self.rng, long_axis);
        Agent::new(name, color, point, theta, phase)
    }

    /// Motion, food spawning and consumption, collision resolution, then the
    /// termination check. Does nothing unless running.
    pub fn tick(&mut self) {
        if self.status != RoundStatus::Running {
            return;
        }
        self.tick += 1;
        for agent in self.agents.iter_mut() {
            if agent.alive() {
                mechanic::move_agent(agent, &mut self.rng);
            }
        }
        self.run_food_clock();
        mechanic::eat_food(&mut self.agents, &mut self.foods);
        mechanic::resolve_collisions(&mut self.agents, &mut self.rng);
        if self.living_count() <= WINNER_COUNT {
            self.finish();
        }
    }

    fn run_food_clock(&mut self) {
        self.food_clock_ms += config().tick_period_ms;
        while self.food_clock_ms >= config().food_interval_ms {
            self.food_clock_ms -= config().food_interval_ms;
            mechanic::spawn_food(&mut self.foods, &mut self.rng);
        }
    }

    pub fn stop(&mut self) {
        if self.status == RoundStatus::Running {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.status = RoundStatus::Finished;
        self.foods.clear();
        #[cfg(feature = "debug")]
        debug!(
            "round finished at tick {} with {} survivors",
            self.tick,
            self.living_count()
        );
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn ticks(&self) -> Tick {
        self.tick
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn living_count(&self) -> usize {
        self.agents.iter().filter(|agent| agent.alive()).count()
    }

    /// Top living agents by largest extent, descending; the stable sort keeps
    /// ties in registry order.
    pub fn leaderboard(&self) -> Vec<RankEntry> {
        let mut living: Vec<&Agent> = self.agents.iter().filter(|agent| agent.alive()).collect();
        living.sort_by(|a, b| {
            b.largest_extent()
                .partial_cmp(&a.largest_extent())
                .expect("incomparable extents")
        });
        living
            .into_iter()
            .take(WINNER_COUNT)
            .map(|agent| {
                RankEntry {
                    name: agent.name().to_string(),
                    size: agent.largest_extent(),
                }
            })
            .collect()
    }

    pub fn winners(&self) -> Option<Vec<RankEntry>> {
        if self.status == RoundStatus::Finished {
            Some(self.leaderboard())
        } else {
            None
        }
    }

    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            tick: self.tick,
            agents: self.agents.iter().map(AgentView::of).collect(),
            foods: self.foods.iter().map(FoodView::of).collect(),
        }
    }
}
