//! Per-tick simulation primitives: Brownian motion with boundary containment,
//! food spawning/consumption, and single-pass pairwise collision resolution.

use std::f64::consts::PI;

use rand::Rng;

use config::config;
use models::*;

// Uniform in angle and in the radial coordinate, not in area.
pub fn random_pos<R: Rng>(rng: &mut R, radius: f64) -> Point {
    let angle = rng.gen::<f64>() * 2.0 * PI;
    let r = rng.gen::<f64>() * (config().arena_radius() - radius - config().spawn_margin);
    config().arena_center() + Point::from_polar(r, angle)
}

/// One Brownian step. Mutates position, heading, and flagella phase only.
pub fn move_agent<R: Rng>(agent: &mut Agent, rng: &mut R) {
    let d_theta = (rng.gen::<f64>() - 0.5) * config().brownian_strength;
    agent.set_theta(agent.theta() + d_theta);

    let scale = config().speed_scale_min + rng.gen::<f64>() * config().speed_scale_spread;
    let speed = config().base_speed * scale;
    let point = agent.point() + Point::from_polar(speed, agent.theta());
    agent.set_point(point);

    let phase = config().flagella_phase_step + rng.gen::<f64>() * config().flagella_phase_jitter;
    agent.advance_flagella(phase);

    contain(agent, rng);
}

fn contain<R: Rng>(agent: &mut Agent, rng: &mut R) {
    let center = config().arena_center();
    let offset = agent.point() - center;
    let dist = offset.length();
    let max_axis = agent.largest_extent();
    if dist + max_axis <= config().arena_radius() || dist == 0.0 {
        return;
    }
    let normal = offset.unit();
    let jitter = (rng.gen::<f64>() - 0.5) * config().reflect_jitter;
    agent.set_theta(normal.angle() + PI + jitter);
    agent.set_point(center + normal * (config().arena_radius() - max_axis - config().wall_margin));
}

pub fn spawn_food<R: Rng>(foods: &mut Vec<Food>, rng: &mut R) {
    let point = random_pos(rng, config().food_radius);
    foods.push(Food { point_: point });
}

/// Living agents sweep the food list in registry order. Removal is immediate,
/// so an item feeds exactly one agent, and the growth it grants widens the
/// agent's reach for the rest of its own sweep.
pub fn eat_food(agents: &mut [Agent], foods: &mut Vec<Food>) {
    for agent in agents.iter_mut() {
        if !agent.alive() {
            continue;
        }
        let mut i = 0;
        while i < foods.len() {
            if agent.overlaps(&foods[i]) {
                foods.remove(i);
                agent.grow(config().food_short_growth, config().food_long_growth);
            } else {
                i += 1;
            }
        }
    }
}

/// Single pass over unordered pairs in index order. An elimination is visible
/// to every later pair in the same pass.
pub fn resolve_collisions<R: Rng>(agents: &mut [Agent], rng: &mut R) {
    for i in 0..agents.len() {
        for j in (i + 1)..agents.len() {
            if !agents[i].alive() {
                break;
            }
            if !agents[j].alive() {
                continue;
            }
            let (left, right) = agents.split_at_mut(j);
            let a = &mut left[i];
            let b = &mut right[0];
            if !a.overlaps(b) {
                continue;
            }
            let ar = a.largest_extent();
            let br = b.largest_extent();
            if (ar - br).abs() < config().near_size_threshold {
                bounce(a, b, rng);
            } else if ar > br {
                devour(a, b);
            } else {
                devour(b, a);
            }
        }
    }
}

fn bounce<R: Rng>(a: &mut Agent, b: &mut Agent, rng: &mut R) {
    let angle = (b.point() - a.point()).angle();
    a.set_theta(angle + PI + (rng.gen::<f64>() - 0.5) * config().bounce_jitter);
    b.set_theta(angle + (rng.gen::<f64>() - 0.5) * config().bounce_jitter);
}

fn devour(winner: &mut Agent, loser: &mut Agent) {
    winner.grow(config().collision_growth, config().collision_growth);
    loser.eliminate();
    #[cfg(feature = "debug")]
    debug!("{} devours {}", winner.name(), loser.name());
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, XorShiftRng};

    use config::init_config;
    use super::*;

    fn setup() {
        init_config(Default::default());
    }

    fn rng() -> XorShiftRng {
        XorShiftRng::from_seed([7, 11, 13, 17])
    }

    fn agent(name: &str, x: f64, y: f64) -> Agent {
        Agent::new(name, "#2b7a0b", Point::new(x, y), 0.0, 0.0)
    }

    fn food(x: f64, y: f64) -> Food {
        Food { point_: Point::new(x, y) }
    }

    fn initial_short() -> f64 {
        config().min_short_axis
    }

    fn initial_long() -> f64 {
        config().min_short_axis * config().axis_ratio
    }

    #[test]
    fn random_pos_stays_inside_spawn_annulus() {
        setup();
        let mut rng = rng();
        let center = config().arena_center();
        let bound = config().arena_radius() - 5.0 - config().spawn_margin;
        for _ in 0..200 {
            let p = random_pos(&mut rng, 5.0);
            assert!(p.dist(center) < bound + 1e-9);
        }
    }

    #[test]
    fn move_agent_perturbs_heading_and_takes_one_step() {
        setup();
        let mut rng = rng();
        let center = config().arena_center();
        let mut me = agent("A", center.x, center.y);
        move_agent(&mut me, &mut rng);
        assert!(me.theta().abs() <= config().brownian_strength / 2.0);
        let step = me.point().dist(center);
        assert!(step >= config().base_speed * config().speed_scale_min - 1e-9);
        assert!(
            step <=
                config().base_speed *
                    (config().speed_scale_min + config().speed_scale_spread) + 1e-9
        );
        assert!(me.flagella_phase_ >= config().flagella_phase_step);
        assert!(me.alive());
    }

    #[test]
    fn move_agent_reflects_off_the_wall() {
        setup();
        let mut rng = rng();
        let center = config().arena_center();
        let mut me = agent("A", center.x + config().arena_radius(), center.y);
        move_agent(&mut me, &mut rng);
        let dist = me.point().dist(center);
        let expected = config().arena_radius() - me.largest_extent() - config().wall_margin;
        assert!((dist - expected).abs() < 1e-9);
        assert!(dist + me.largest_extent() <= config().arena_radius());
        // Heading was reset to point back toward the center, modulo jitter and
        // the Brownian kick taken earlier in the same step.
        assert!((me.theta() - PI).abs() < 0.5);
    }

    #[test]
    fn eat_food_feeds_each_item_to_at_most_one_agent() {
        setup();
        let mut agents = vec![agent("A", 300.0, 300.0), agent("B", 300.0, 302.0)];
        let mut foods = vec![food(300.0, 301.0)];
        let b_before = agents[1].clone();
        eat_food(&mut agents, &mut foods);
        assert!(foods.is_empty());
        assert_eq!(agents[0].short_axis_, initial_short() + config().food_short_growth);
        assert_eq!(agents[0].long_axis_, initial_long() + config().food_long_growth);
        assert_eq!(agents[1].short_axis_, b_before.short_axis_);
        assert_eq!(agents[1].long_axis_, b_before.long_axis_);
    }

    #[test]
    fn growth_from_one_food_extends_reach_within_the_same_sweep() {
        setup();
        let mut agents = vec![agent("A", 300.0, 300.0)];
        // The second item is out of reach until the first one is eaten.
        let mut foods = vec![food(300.0, 305.0), food(300.0, 312.0)];
        eat_food(&mut agents, &mut foods);
        assert!(foods.is_empty());
        let short_growth = config().food_short_growth;
        let long_growth = config().food_long_growth;
        assert_eq!(agents[0].short_axis_, initial_short() + short_growth + short_growth);
        assert_eq!(agents[0].long_axis_, initial_long() + long_growth + long_growth);
    }

    #[test]
    fn eliminated_agents_do_not_eat() {
        setup();
        let mut agents = vec![agent("A", 300.0, 300.0)];
        agents[0].eliminate();
        let mut foods = vec![food(300.0, 301.0)];
        eat_food(&mut agents, &mut foods);
        assert_eq!(foods.len(), 1);
        assert_eq!(agents[0].short_axis_, initial_short());
    }

    #[test]
    fn near_equal_overlap_bounces_without_growth_or_elimination() {
        setup();
        let mut rng = rng();
        let mut agents = vec![agent("A", 300.0, 300.0), agent("B", 300.0, 305.0)];
        resolve_collisions(&mut agents, &mut rng);
        assert!(agents[0].alive() && agents[1].alive());
        assert_eq!(agents[0].long_axis_, initial_long());
        assert_eq!(agents[1].long_axis_, initial_long());
        // Headings were reassigned away from each other along the center line.
        let half = config().bounce_jitter / 2.0;
        assert!((agents[0].theta() - 1.5 * PI).abs() <= half + 1e-9);
        assert!((agents[1].theta() - 0.5 * PI).abs() <= half + 1e-9);
    }

    #[test]
    fn larger_agent_eliminates_smaller_and_grows_by_one_unit() {
        setup();
        let mut rng = rng();
        let mut agents = vec![
            agent("A", 300.0, 300.0),
            agent("B", 300.0, 302.0),
            agent("C", 150.0, 300.0),
            agent("D", 450.0, 300.0),
        ];
        agents[0].long_axis_ += 3.0;
        resolve_collisions(&mut agents, &mut rng);
        assert!(agents[0].alive());
        assert!(!agents[1].alive());
        assert_eq!(agents[0].long_axis_, initial_long() + 3.0 + config().collision_growth);
        assert_eq!(agents[0].short_axis_, initial_short() + config().collision_growth);
        // The loser keeps its last size for historical display.
        assert_eq!(agents[1].long_axis_, initial_long());
        // Bystanders are untouched.
        assert!(agents[2].alive() && agents[3].alive());
        assert_eq!(agents[2].long_axis_, initial_long());
        assert_eq!(agents[3].long_axis_, initial_long());
    }

    #[test]
    fn elimination_is_visible_to_later_pairs_in_the_same_pass() {
        setup();
        let mut rng = rng();
        let mut agents = vec![
            agent("A", 300.0, 300.0),
            agent("B", 300.0, 302.0),
            agent("C", 300.0, 304.0),
        ];
        agents[0].long_axis_ += 3.0;
        resolve_collisions(&mut agents, &mut rng);
        // A eats B in pair (0, 1), grows, then eats C in pair (0, 2); the dead
        // B is skipped in pair (1, 2).
        assert!(agents[0].alive());
        assert!(!agents[1].alive());
        assert!(!agents[2].alive());
        let growth = config().collision_growth;
        assert_eq!(agents[0].long_axis_, initial_long() + 3.0 + growth + growth);
    }

    #[test]
    fn eliminated_agents_do_not_collide() {
        setup();
        let mut rng = rng();
        let mut agents = vec![agent("A", 300.0, 300.0), agent("B", 300.0, 302.0)];
        agents[0].long_axis_ += 10.0;
        agents[0].eliminate();
        resolve_collisions(&mut agents, &mut rng);
        assert!(agents[1].alive());
        assert_eq!(agents[1].long_axis_, initial_long());
    }
}
