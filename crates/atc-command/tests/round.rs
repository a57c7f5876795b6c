//! Typed commands driving a live round.

use atc_command::{CommandInterpreter, CommandOutcome, Token};
use atc_sim::{SimConfig, SimulationEngine};

fn engine(seed: u64) -> SimulationEngine {
    let level = atc_level::builtin::load("novice").unwrap();
    SimulationEngine::new(level, SimConfig { seed })
}

/// Tick until the first aircraft appears.
fn first_arrival(engine: &mut SimulationEngine) -> char {
    for _ in 0..5_000 {
        if let Some(plane) = engine.fleet().iter().next() {
            return plane.name();
        }
        assert!(!engine.tick().is_loss());
    }
    panic!("no aircraft spawned");
}

fn submit(engine: &mut SimulationEngine, keys: &str) -> Option<CommandOutcome> {
    let mut interp = CommandInterpreter::new();
    for key in keys.chars() {
        interp.process_token(Token::Key(key));
    }
    assert!(interp.process_token(Token::Enter));
    let outcome = interp
        .apply_command(engine.geometry(), engine.fleet())
        .unwrap()
        .ok()?;
    if let CommandOutcome::Update(plane) = &outcome {
        assert!(engine.apply_update(plane));
    }
    Some(outcome)
}

#[test]
fn test_altitude_order_reaches_live_plane() {
    let mut engine = engine(3);
    let name = first_arrival(&mut engine);

    let outcome = submit(&mut engine, &format!("{name}a9"));
    assert!(matches!(outcome, Some(CommandOutcome::Update(_))));

    let plane = engine.fleet().iter().next().unwrap();
    assert_eq!(plane.name(), name);
    assert_eq!(plane.target_altitude, 9);

    // A grounded departure needs one tick to lift off.
    let start = plane.altitude;
    engine.tick();
    engine.tick();
    let plane = engine.fleet().iter().find(|p| p.name() == name).unwrap();
    assert!(plane.altitude > start);
}

#[test]
fn test_empty_command_is_a_skip() {
    let mut engine = engine(3);
    assert_eq!(submit(&mut engine, ""), Some(CommandOutcome::Skip));
}

#[test]
fn test_replay_with_commands_is_deterministic() {
    let run = || {
        let mut engine = engine(99);
        let name = first_arrival(&mut engine);
        submit(&mut engine, &format!("{name}a9"));
        for _ in 0..50 {
            engine.tick();
        }
        serde_json::to_string(&engine.snapshot()).unwrap()
    };
    assert_eq!(run(), run());
}
