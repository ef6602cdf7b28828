use std::env;
use std::fs;
use std::io;
use std::io::BufRead;

use rand;
use serde_json;

use config::{init_config, Config};
use engine::{Round, RoundStatus};
use snapshot::RankEntry;

/// Names on stdin, one per line; JSON reports on stdout. The driver is the
/// tick scheduler; the engine itself never blocks.
pub fn run() {
    init_config(read_config());
    let names = read_names();
    let mut round = Round::new(rand::weak_rng());
    if let Err(err) = round.start(&names) {
        print_json(&ErrorReport { error: err.to_string() });
        return;
    }
    while round.status() == RoundStatus::Running {
        round.tick();
        print_json(&TickReport {
            tick: round.ticks(),
            living: round.living_count() as i64,
            top: round.leaderboard(),
        });
    }
    print_json(&FinalReport {
        winners: round.winners().expect("round not finished"),
    });
}

fn read_config() -> Config {
    match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path).expect("reading config file failed");
            Config::from_json(serde_json::from_str(&text).expect("config JSON parsing failed"))
        }
        None => Config::default(),
    }
}

fn read_names() -> Vec<String> {
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .map(|line| line.expect("reading stdin failed"))
        .collect()
}

fn print_json<T: ::serde::Serialize>(report: &T) {
    println!(
        "{}",
        serde_json::to_string(report).expect("report serialization failed")
    );
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TickReport {
    tick: i64,
    living: i64,
    top: Vec<RankEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct FinalReport {
    winners: Vec<RankEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorReport {
    error: String,
}
