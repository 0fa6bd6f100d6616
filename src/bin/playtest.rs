//! Automated playtester - plays a seeded game and reports on how it went
//!
//! Picks a random action for every action point, advances days, and stands
//! in every election it sees. Useful for checking that a tuning file gives
//! games that neither end on day two nor drag on forever.

use std::path::PathBuf;

use ahash::AHashMap;
use ballot_days::actions::ActionKind;
use ballot_days::core::config::Tuning;
use ballot_days::core::rng::SeededRandom;
use ballot_days::election::ElectionPhase;
use ballot_days::game::{Command, GameSession};
use ballot_days::persistence::MemoryStore;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Headless playtest runner
#[derive(Parser, Debug)]
#[command(name = "playtest")]
#[command(about = "Play a seeded game with a random policy and summarize it")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum days to play
    #[arg(long, default_value_t = 120)]
    days: u32,

    /// Tuning overrides (TOML)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Sit out elections instead of joining them
    #[arg(long)]
    abstain: bool,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Serialize, Default)]
struct Report {
    seed: u64,
    difficulty: String,
    follower_target: u32,
    days_played: u32,
    outcome: String,
    actions: AHashMap<String, u32>,
    elections_won: u32,
    elections_lost: u32,
    rejected_commands: u32,
    followers: u32,
    conservative: f64,
    liberal: f64,
    apathetic: f64,
    comm: f64,
    credibility: f64,
    energy: f64,
    log_entries: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load tuning '{}': {}", path.display(), e);
            eprintln!("Using default tuning");
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut policy = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut session = GameSession::new(tuning, SeededRandom::new(seed), MemoryStore::new());

    let mut report = Report {
        seed,
        difficulty: format!("{:?}", session.tuning().difficulty),
        follower_target: session.tuning().clear.followers,
        ..Report::default()
    };

    while report.days_played < args.days && !session.state().is_terminal() {
        if session.state().election.phase == ElectionPhase::Announced {
            if !args.abstain {
                session.election_join();
            }
            let outcome = session.dispatch(Command::ElectionOpenVotingAndCompute);
            if !outcome.accepted() {
                report.rejected_commands += 1;
            } else if let Some(result) = outcome.state.election.last_result {
                if result.won {
                    report.elections_won += 1;
                } else {
                    report.elections_lost += 1;
                }
            }
        }

        while session.state().action_points > 0 && !session.state().is_terminal() {
            let kind = ActionKind::ALL[policy.gen_range(0..ActionKind::ALL.len())];
            let outcome = session.dispatch(Command::PerformAction(kind));
            if outcome.accepted() {
                *report.actions.entry(format!("{:?}", kind)).or_insert(0) += 1;
            } else {
                report.rejected_commands += 1;
            }
        }

        if session.state().is_terminal() {
            break;
        }
        if !session.dispatch(Command::AdvanceDay).accepted() {
            report.rejected_commands += 1;
        }
        report.days_played += 1;
    }

    let state = session.state();
    report.outcome = if state.flags.is_game_over {
        "game_over".to_string()
    } else if state.flags.is_cleared {
        "cleared".to_string()
    } else {
        "in_progress".to_string()
    };
    report.followers = state.followers.count();
    report.conservative = state.opinion.conservative();
    report.liberal = state.opinion.liberal();
    report.apathetic = state.opinion.apathetic();
    report.comm = state.status.comm();
    report.credibility = state.status.credibility();
    report.energy = state.status.energy();
    report.log_entries = state.events.len();

    if args.format == "json" {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to encode report: {}", e),
        }
        return;
    }

    println!(
        "=== PLAYTEST REPORT (seed {}, {} difficulty) ===\n",
        report.seed, report.difficulty
    );
    println!("## Outcome");
    println!("Result: {} after {} days ({})", report.outcome, report.days_played, state.date_label());
    println!(
        "Elections: {} won, {} lost",
        report.elections_won, report.elections_lost
    );
    println!();

    println!("## Actions");
    let total: u32 = report.actions.values().sum();
    let mut counts: Vec<_> = report.actions.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1));
    for (action, count) in counts {
        let pct = if total > 0 { *count as f64 / total as f64 * 100.0 } else { 0.0 };
        println!("  {}: {} ({:.1}%)", action, count, pct);
    }
    println!("Rejected commands: {}", report.rejected_commands);
    println!();

    println!("## Final scores");
    println!(
        "Opinion: cons {:.1}, lib {:.1}, apa {:.1}",
        report.conservative, report.liberal, report.apathetic
    );
    println!(
        "Status: comm {:.1}, cred {:.1}, energy {:.1}",
        report.comm, report.credibility, report.energy
    );
    println!("Followers: {} (clear at {})", report.followers, report.follower_target);
    println!("Log entries: {}", report.log_entries);
}
