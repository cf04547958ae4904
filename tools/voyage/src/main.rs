//! voyage: headless fleet simulation driver.
//!
//! Usage:
//!   voyage run --ships 8 --ticks 900 --weather gale --wind-dir 270
//!   voyage run --weather random --seed 7 --tuning tuning.json --every 30

use std::path::PathBuf;
use std::process;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use broadside_core::enums::WeatherCondition;
use broadside_core::state::FleetSnapshot;
use broadside_core::tuning::ShipTuning;
use broadside_sim::engine::{SimConfig, SimulationEngine};
use broadside_sim::weather::{generate_weather, WeatherConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout is reserved for snapshots
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn print_usage() {
    eprintln!(
        "voyage: BROADSIDE headless fleet simulation\n\
         \n\
         Commands:\n\
         \n\
         run       Sail a seeded fleet and print JSON snapshots to stdout\n\
         \n\
           --ships <N>        Number of ships (default: 8)\n\
           --ticks <N>        Ticks to simulate (default: 900)\n\
           --seed <S>         RNG seed (default: 42)\n\
           --weather <W>      calm | breeze | gale | storm | random (default: breeze)\n\
           --wind-dir <DEG>   Wind direction in degrees, negative for none\n\
           --tuning <path>    Ship tuning JSON file\n\
           --every <N>        Print a snapshot every N ticks (default: 30)\n\
         \n\
         Environment:\n\
         \n\
           RUST_LOG           Log filter (default: info)\n\
           LOG_FORMAT=json    Structured logs on stderr\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Parse a flag's value, exiting with a message when it is present but malformed.
fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match flag_value(args, flag) {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("Error: invalid value for {flag}: {raw}");
                process::exit(1);
            }
        },
    }
}

fn weather_config(args: &[String], seed: u64) -> WeatherConfig {
    let mut config = match flag_value(args, "--weather") {
        None => WeatherConfig::default(),
        Some("random") => generate_weather(&mut ChaCha8Rng::seed_from_u64(seed)),
        Some(name) => match WeatherCondition::parse(name) {
            Some(condition) => WeatherConfig {
                condition,
                ..Default::default()
            },
            None => {
                eprintln!("Error: unknown weather: {name}");
                process::exit(1);
            }
        },
    };
    config.direction = parse_flag(args, "--wind-dir", config.direction);
    config
}

fn load_tuning(args: &[String]) -> ShipTuning {
    let Some(path) = flag_value(args, "--tuning").map(PathBuf::from) else {
        return ShipTuning::default();
    };
    match ShipTuning::load(&path) {
        Ok(tuning) => tuning,
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "failed to load ship tuning");
            process::exit(1);
        }
    }
}

fn emit(snapshot: &FleetSnapshot) {
    match serde_json::to_string(snapshot) {
        Ok(line) => println!("{line}"),
        Err(err) => {
            tracing::error!(%err, "failed to serialize snapshot");
            process::exit(1);
        }
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let ships: usize = parse_flag(args, "--ships", 8);
    let ticks: u64 = parse_flag(args, "--ticks", 900);
    let seed: u64 = parse_flag(args, "--seed", 42);
    let every: u64 = parse_flag(args, "--every", 30).max(1);

    let config = SimConfig {
        seed,
        tuning: load_tuning(args),
        weather: weather_config(args, seed),
        ..Default::default()
    };
    tracing::info!(
        ships,
        ticks,
        seed,
        weather = config.weather.condition.as_str(),
        wind_direction = config.weather.direction,
        handling = ?config.tuning.handling,
        "voyage starting"
    );

    let mut engine = SimulationEngine::new(config);
    engine.spawn_fleet(ships);

    let mut last = None;
    for _ in 0..ticks {
        let snapshot = engine.tick();
        let tick = snapshot.time.tick;
        let all_sunk = snapshot.vessels.is_empty();

        if tick % every == 0 {
            emit(&snapshot);
            last = None;
        } else {
            last = Some(snapshot);
        }

        if all_sunk {
            tracing::info!(tick, "every ship has sunk");
            break;
        }
    }
    if let Some(snapshot) = last {
        emit(&snapshot);
    }

    tracing::info!(
        tick = engine.time().tick,
        afloat = engine.vessel_count(),
        "voyage complete"
    );
}
