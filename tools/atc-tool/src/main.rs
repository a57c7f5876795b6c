//! atc-tool: level checker and headless round runner.
//!
//! Usage:
//!   atc-tool check levels/tower.lvl levels/harbor.lvl
//!   atc-tool levels
//!   atc-tool replay --level default --seed 7 --ticks 500 --script orders.txt --json

use std::path::Path;
use std::process;

use atc_command::{CommandInterpreter, CommandOutcome, Token};
use atc_core::events::TickOutcome;
use atc_core::geometry::Geometry;
use atc_level::LevelError;
use atc_sim::{SimConfig, SimulationEngine};
use tracing::{info, warn};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "check" => cmd_check(&args[2..]),
        "levels" => cmd_levels(),
        "replay" => cmd_replay(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "atc-tool: air traffic control level and replay tool\n\
         \n\
         Commands:\n\
         \n\
         check     Parse level files and report problems\n\
         \n\
           <file>...          Level files to check\n\
         \n\
         levels    List the built-in levels\n\
         \n\
         replay    Run a headless round\n\
         \n\
           --level <name|path> Built-in level name or level file\n\
           --seed <N>          RNG seed (default: 42)\n\
           --ticks <N>         Ticks to run (default: 1000)\n\
           --script <path>     Orders, one `<tick> <keys>` per line\n\
           --json              Print the final snapshot as JSON\n\
         \n\
         Examples:\n\
         \n\
           atc-tool check my_level.lvl\n\
           atc-tool replay --level easy --seed 7 --ticks 300 --json\n"
    );
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == name && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number(args: &[String], name: &str, default: u64) -> u64 {
    match flag_value(args, name) {
        Some(text) => match text.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {name} expects a number, got '{text}'");
                process::exit(1);
            }
        },
        None => default,
    }
}

/// Resolve a built-in level name, falling back to a file path.
fn load_level(name_or_path: &str) -> Result<Geometry, String> {
    if atc_level::builtin::source(name_or_path).is_some() {
        return atc_level::builtin::load(name_or_path).map_err(|e| e.to_string());
    }
    let text = std::fs::read_to_string(name_or_path).map_err(|e| format!("{name_or_path}: {e}"))?;
    atc_level::parse_named(&level_name(name_or_path), &text).map_err(|e| e.to_string())
}

fn level_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn describe(geometry: &Geometry) -> String {
    format!(
        "{}x{}, update {}s, new plane every {} ticks, {} exits, {} airports, {} beacons, {} lines",
        geometry.width,
        geometry.height,
        geometry.update_secs,
        geometry.new_plane_time,
        geometry.exits.len(),
        geometry.airports.len(),
        geometry.beacons.len(),
        geometry.lines.len(),
    )
}

// --- Check command ---

fn cmd_check(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: at least one level file is required");
        process::exit(1);
    }

    let mut failed = 0;
    for path in args {
        let result = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| {
                atc_level::parse_named(&level_name(path), &text).map_err(|e: LevelError| e.to_string())
            });
        match result {
            Ok(geometry) => println!("{path}: ok, {}", describe(&geometry)),
            Err(e) => {
                println!("{path}: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!("{failed} of {} level(s) failed", args.len());
        process::exit(1);
    }
}

// --- Levels command ---

fn cmd_levels() {
    for name in atc_level::builtin::names() {
        match atc_level::builtin::load(name) {
            Ok(geometry) => println!("{name:<12} {}", describe(&geometry)),
            Err(e) => println!("{name:<12} {e}"),
        }
    }
}

// --- Replay command ---

/// One scripted order: keys typed, then Enter, before `tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Order {
    tick: u64,
    keys: String,
}

/// Parse `<tick> <keys>` lines. Blank lines and `#` comments are skipped;
/// a tick with no keys submits an empty command.
fn parse_script(text: &str) -> Result<Vec<Order>, String> {
    let mut orders = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (tick, keys) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let tick = tick
            .parse::<u64>()
            .map_err(|_| format!("line {}: bad tick '{tick}'", lineno + 1))?;
        orders.push(Order {
            tick,
            keys: keys.trim().to_string(),
        });
    }
    orders.sort_by_key(|order| order.tick);
    Ok(orders)
}

fn submit(engine: &mut SimulationEngine, order: &Order) {
    let mut interp = CommandInterpreter::new();
    for key in order.keys.chars() {
        interp.process_token(Token::Key(key));
    }
    interp.process_token(Token::Enter);

    match interp.apply_command(engine.geometry(), engine.fleet()) {
        None => warn!(tick = order.tick, keys = %order.keys, "incomplete command"),
        Some(Err(e)) => println!("[{}] {}: {e}", order.tick, order.keys),
        Some(Ok(CommandOutcome::Update(plane))) => {
            if !engine.apply_update(&plane) {
                warn!(tick = order.tick, plane = %plane.name(), "plane left before update");
            }
        }
        Some(Ok(CommandOutcome::Skip)) => {}
    }
}

fn cmd_replay(args: &[String]) {
    let level = match flag_value(args, "--level") {
        Some(name) => name,
        None => atc_level::builtin::DEFAULT_LEVEL,
    };
    let geometry = match load_level(level) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error loading level: {e}");
            process::exit(1);
        }
    };

    let seed = parse_number(args, "--seed", SimConfig::default().seed);
    let ticks = parse_number(args, "--ticks", 1000);
    let json = args.iter().any(|a| a == "--json");

    let orders = match flag_value(args, "--script") {
        Some(path) => match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| parse_script(&text))
        {
            Ok(orders) => orders,
            Err(e) => {
                eprintln!("Error reading script {path}: {e}");
                process::exit(1);
            }
        },
        None => Vec::new(),
    };

    info!(level = level, seed, ticks, orders = orders.len(), "replay starting");
    let mut engine = SimulationEngine::new(geometry, SimConfig { seed });
    let mut pending = orders.iter().peekable();

    let mut outcome = None;
    for _ in 0..ticks {
        while let Some(order) = pending.next_if(|o| o.tick <= engine.clock()) {
            submit(&mut engine, order);
        }
        let result = engine.tick();
        let lost = result.is_loss();
        outcome = Some(result);
        if lost {
            break;
        }
    }

    match &outcome {
        Some(TickOutcome::Loss(loss)) => println!("tick {}: {}", loss.clock, loss.summary()),
        _ => println!(
            "survived {} ticks, {} plane(s) safe",
            engine.clock(),
            engine.safe_planes()
        ),
    }

    if json {
        match serde_json::to_string_pretty(&engine.snapshot()) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    }

    if outcome.as_ref().is_some_and(TickOutcome::is_loss) {
        process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_orders_sorted_by_tick() {
        let orders = parse_script("# opening\n12 aa9\n\n3 btl\n5\n").unwrap();
        assert_eq!(
            orders,
            vec![
                Order { tick: 3, keys: "btl".into() },
                Order { tick: 5, keys: String::new() },
                Order { tick: 12, keys: "aa9".into() },
            ]
        );
    }

    #[test]
    fn test_script_rejects_bad_tick() {
        let err = parse_script("1 aa9\nsoon bm\n").unwrap_err();
        assert_eq!(err, "line 2: bad tick 'soon'");
    }

    #[test]
    fn test_builtin_names_resolve_before_paths() {
        let geometry = load_level("easy").unwrap();
        assert_eq!(geometry.width, 15);
        assert!(load_level("/no/such/level").is_err());
    }
}
