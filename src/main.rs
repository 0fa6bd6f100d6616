//! Ballot Days - Entry Point
//!
//! A plain text front end over the game session: reads one command per
//! line, dispatches it, and prints what changed. The game is saved under
//! `.ballot-days/` in the working directory after every accepted command.

use ballot_days::actions::ActionKind;
use ballot_days::core::config::Tuning;
use ballot_days::core::error::Result;
use ballot_days::core::rng::SeededRandom;
use ballot_days::game::{Command, CommandOutcome, GameSession, GameState};
use ballot_days::persistence::FileStore;
use ballot_days::timeline::{Filter, TimelineEvent};

use std::io::{self, Write};
use std::path::Path;

const SAVE_DIR: &str = ".ballot-days";
const TUNING_FILE: &str = "ballot-days.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("ballot_days=info")
        .init();

    let tuning = if Path::new(TUNING_FILE).exists() {
        Tuning::load(Path::new(TUNING_FILE))?
    } else {
        Tuning::default()
    };

    let mut session = GameSession::resume(tuning, SeededRandom::from_entropy(), FileStore::new(SAVE_DIR));

    println!("\n=== BALLOT DAYS ===");
    println!("Move public opinion, build a following, and stand for election.");
    println!();
    println!("Commands:");
    println!("  vote | talk | post   - Spend an action point");
    println!("  next / n             - Advance to the next day (no action points left)");
    println!("  join | leave         - Join or leave the announced election");
    println!("  elect                - Open voting and count the result");
    println!("  friend <1-3>         - Choose who you talk to next");
    println!("  filter <category>    - all, news, sns, friend, action, system");
    println!("  log [n]              - Show the n most recent entries (default 10)");
    println!("  status / s           - Show scores");
    println!("  save | load | reset");
    println!("  quit / q             - Exit the game");
    println!();

    loop {
        display_status(session.state());

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "status" || input == "s" {
            display_detailed_status(session.state());
            continue;
        }

        if input == "save" {
            session.save();
            println!("Saved.");
            continue;
        }

        if input == "load" {
            match session.load() {
                Some(state) => println!("Loaded game from {}.", state.date_label()),
                None => println!("No saved game to load."),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("log") {
            let n = rest.trim().parse::<usize>().unwrap_or(10);
            let state = session.state();
            for event in state.events.filtered(state.filter).take(n) {
                print_event(event);
            }
            continue;
        }

        let command = match parse_command(input, session.state()) {
            Some(command) => command,
            None => {
                println!("Unknown command.");
                continue;
            }
        };

        let outcome = session.dispatch(command);
        report(&outcome);
    }

    println!(
        "\nGoodbye! Stopped on {} with {} followers.",
        session.state().date_label(),
        session.state().followers.count()
    );
    Ok(())
}

fn parse_command(input: &str, state: &GameState) -> Option<Command> {
    if let Ok(kind) = input.parse::<ActionKind>() {
        return Some(Command::PerformAction(kind));
    }

    if let Some(rest) = input.strip_prefix("friend ") {
        let idx = rest.trim().parse::<usize>().ok()?.checked_sub(1)?;
        let friend = state.friends.iter().nth(idx)?;
        return Some(Command::SelectTalkTarget(friend.id));
    }

    if let Some(rest) = input.strip_prefix("filter ") {
        let filter = match rest.trim() {
            "all" => Filter::All,
            "news" => Filter::News,
            "sns" => Filter::Sns,
            "friend" => Filter::Friend,
            "action" => Filter::Action,
            "system" => Filter::System,
            _ => return None,
        };
        return Some(Command::SetFilter(filter));
    }

    match input {
        "next" | "n" => Some(Command::AdvanceDay),
        "join" => Some(Command::ElectionJoin),
        "leave" => Some(Command::ElectionLeave),
        "elect" => Some(Command::ElectionOpenVotingAndCompute),
        "reset" => Some(Command::Reset),
        _ => None,
    }
}

fn report(outcome: &CommandOutcome) {
    if let Some(rejection) = outcome.rejection {
        println!("Not now: {}.", rejection.reason());
        return;
    }
    // oldest first
    for event in outcome.events.iter().rev() {
        print_event(event);
    }
}

fn print_event(event: &TimelineEvent) {
    println!("  [{}] {:?} {:?}: {}", event.date, event.category, event.impact, event.title);
    if let Some(description) = &event.description {
        println!("      {}", description);
    }
}

fn display_status(state: &GameState) {
    let flag = if state.flags.is_game_over {
        " GAME OVER"
    } else if state.flags.is_cleared {
        " CLEARED"
    } else {
        ""
    };
    println!(
        "\n{} | AP {} | election {:?}{}",
        state.date_label(),
        state.action_points,
        state.election.phase,
        flag
    );
}

fn display_detailed_status(state: &GameState) {
    println!("Opinion:");
    println!("  conservative {:.1}", state.opinion.conservative());
    println!("  liberal      {:.1}", state.opinion.liberal());
    println!("  apathetic    {:.1}", state.opinion.apathetic());
    println!("Status:");
    println!("  comm         {:.1}", state.status.comm());
    println!("  credibility  {:.1}", state.status.credibility());
    println!("  energy       {:.1}", state.status.energy());
    println!("Followers: {}", state.followers.count());
    println!("Friends (first is the talk target):");
    for (i, friend) in state.friends.iter().enumerate() {
        let l = friend.leaning();
        println!(
            "  {}. {} (cons {:.0}, lib {:.0}, apa {:.0})",
            i + 1,
            friend.name,
            l.conservative(),
            l.liberal(),
            l.apathetic()
        );
    }
    if let Some(result) = state.election.last_result {
        println!(
            "Last election: turnout {}%, vote share {}%, {}",
            result.turnout,
            result.vote_share,
            if result.won { "won" } else { "lost" }
        );
    }
}
