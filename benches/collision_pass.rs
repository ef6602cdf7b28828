#[macro_use]
extern crate criterion;

extern crate petri_lottery;
extern crate rand;

use std::f64::consts::PI;

use criterion::Criterion;
use rand::{SeedableRng, XorShiftRng};

use petri_lottery::config::{config, init_config, Config};
use petri_lottery::engine::mechanic::resolve_collisions;
use petri_lottery::models::{Agent, Point};

fn bench(c: &mut Criterion) {
    init_config(Config::default());
    c.bench_function("resolve_collisions_ring", |b| {
        // A tight ring where every agent overlaps both neighbors, so the
        // pass takes the glancing-bounce path throughout.
        let count = 100;
        let center = config().arena_center();
        let agents: Vec<Agent> = (0..count)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / count as f64;
                Agent::new(
                    &format!("agent-{}", i),
                    "#2b7a0b",
                    center + Point::from_polar(150.0, angle),
                    angle,
                    0.0,
                )
            })
            .collect();
        let mut rng = XorShiftRng::from_seed([1, 2, 3, 4]);
        b.iter(|| {
            let mut agents = agents.clone();
            resolve_collisions(&mut agents, &mut rng);
        })
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
