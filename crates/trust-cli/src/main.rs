//! Trust Builder terminal host
//!
//! A thin REPL over the simulation core: lists initiatives, plays them,
//! advances rounds, resolves decisions, and prints the event log and persona
//! feedback. All game rules live in `trust-engine`; this binary only reads
//! snapshots and forwards commands.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use trust_engine::{GameEngine, Tuning};
use trust_model::builtin::generic_preset;
use trust_model::Preset;

/// Command line arguments for the simulation host
#[derive(Parser, Debug)]
#[command(name = "trust_sim")]
#[command(about = "Turn-based trust building simulation")]
struct Args {
    /// Preset catalog file (TOML); defaults to the built-in generic scenario
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Tuning overrides file (TOML)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let preset = match &args.preset {
        Some(path) => match Preset::from_file(path) {
            Ok(preset) => preset,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => generic_preset(),
    };

    let tuning = match &args.tuning {
        Some(path) => match Tuning::from_file(path) {
            Ok(tuning) => tuning,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    let session = Uuid::new_v4();
    info!(%session, preset = %preset.id, seed = args.seed, "session started");

    let mut engine = GameEngine::with_tuning(preset, tuning, args.seed);

    println!("Trust Builder - {}", engine.preset().name);
    println!("{}", engine.preset().goal_description);
    println!("Type 'help' for commands.");
    println!();

    let mut printed_log = 0;
    print_new_log(&mut printed_log, &engine);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = stdin.lock().lines().next() else {
            break;
        };
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");

        match command {
            "" => {}
            "help" => print_help(),
            "state" => print_state(&engine),
            "list" => print_initiatives(&engine),
            "play" => {
                match parts.next().and_then(|raw| raw.parse::<u32>().ok()) {
                    Some(id) => {
                        if engine.play_initiative(id) {
                            engine.run_deferred();
                        } else {
                            println!("Could not play initiative {id}.");
                        }
                    }
                    None => println!("Usage: play <id>"),
                }
                after_turn(&mut printed_log, &engine);
            }
            "next" => {
                if engine.has_pending_decision() {
                    println!("Resolve the pending decision first.");
                } else {
                    engine.next_round();
                    engine.run_deferred();
                }
                after_turn(&mut printed_log, &engine);
                if engine.state().game_over {
                    print_game_over(&engine);
                }
            }
            "resolve" => {
                match parts.next().and_then(|raw| raw.parse::<usize>().ok()) {
                    Some(index) => {
                        engine.resolve_decision(index);
                        engine.run_deferred();
                    }
                    None => println!("Usage: resolve <option-number>"),
                }
                after_turn(&mut printed_log, &engine);
            }
            "feedback" => print_feedback(&engine),
            "log" => {
                for line in &engine.state().event_log {
                    println!("{line}");
                }
            }
            "dump" => match serde_json::to_string_pretty(engine.state()) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("error: {err}"),
            },
            "reset" => {
                engine.reset();
                printed_log = 0;
                print_new_log(&mut printed_log, &engine);
            }
            "quit" | "exit" => break,
            other => println!("Unknown command '{other}'. Type 'help'."),
        }
    }

    info!(%session, "session ended");
    ExitCode::SUCCESS
}

/// Prints log lines appended since the last call, then the decision prompt
/// if one is waiting.
fn after_turn(printed_log: &mut usize, engine: &GameEngine) {
    print_new_log(printed_log, engine);
    if let Some(decision) = &engine.state().pending_decision {
        println!();
        println!("DECISION: {}", decision.title);
        println!("{}", decision.description);
        for (index, option) in decision.options.iter().enumerate() {
            println!("  [{index}] {}", option.label);
        }
        println!("Resolve with: resolve <option-number>");
    }
}

fn print_new_log(printed_log: &mut usize, engine: &GameEngine) {
    for line in &engine.state().event_log[*printed_log..] {
        println!("{line}");
    }
    *printed_log = engine.state().event_log.len();
}

fn print_help() {
    println!("Commands:");
    println!("  state            current metrics and dimensions");
    println!("  list             affordable, unplayed initiatives");
    println!("  play <id>        spend resources on an initiative");
    println!("  next             end the round and run upkeep");
    println!("  resolve <n>      answer the pending decision");
    println!("  feedback         recent persona reactions");
    println!("  log              the full event log");
    println!("  dump             state snapshot as JSON");
    println!("  reset            start over");
    println!("  quit             leave");
}

fn print_state(engine: &GameEngine) {
    let state = engine.state();
    let labels = &engine.preset().metrics;
    println!(
        "Round {}/{} | actions left: {}",
        state.round, state.max_rounds, state.actions_left
    );
    println!(
        "{}: {} | {}: {} | {}: {}",
        labels.resources_label,
        state.resources,
        labels.profit_label,
        state.profit,
        labels.customers_label,
        state.customers
    );
    let dims = &state.dimensions;
    println!(
        "Credibility {:.1} | Reliability {:.1} | Intimacy {:.1} | Self-Orientation {:.1}",
        dims.credibility, dims.reliability, dims.intimacy, dims.self_orientation
    );
    println!("Trust: {}%", engine.current_trust());
}

fn print_initiatives(engine: &GameEngine) {
    let available = engine.available_initiatives();
    if available.is_empty() {
        println!("Nothing affordable right now. Try 'next'.");
        return;
    }
    for initiative in available {
        println!(
            "  [{:>2}] ({}) {} - cost {} - {}",
            initiative.id,
            initiative.category,
            initiative.title,
            initiative.cost,
            initiative.description
        );
    }
}

fn print_feedback(engine: &GameEngine) {
    let history = &engine.state().feedback_history;
    if history.is_empty() {
        println!("No reactions yet.");
        return;
    }
    let personas = &engine.preset().personas;
    for entry in history {
        let name = personas
            .iter()
            .find(|persona| persona.id == entry.persona_id)
            .map(|persona| persona.name.as_str())
            .unwrap_or(entry.persona_id.as_str());
        println!("  {} on {}: {}", name, entry.dimension, entry.message);
    }
}

fn print_game_over(engine: &GameEngine) {
    println!();
    println!("Insights:");
    for insight in &engine.preset().insights {
        println!("  - {insight}");
    }
}
