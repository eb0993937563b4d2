use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, event};

use baccarat_cli::config::AdvisorConfig;
use baccarat_cli::keypad::{self, Applied};
use baccarat_cli::logging::init_logging;
use baccarat_cli::report::{self, AnalysisView, StatusView};
use baccarat_core::{AdvisorSettings, AppInfo, SessionSnapshot, ShoeTracker};

/// Exact-composition baccarat advisor.
#[derive(Debug, Parser)]
#[command(
    name = "baccarat-advisor",
    author,
    version,
    about = "Exact baccarat odds, EV and Kelly stakes for the remaining shoe"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Session file holding the shoe between invocations.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "baccarat-session.json",
        global = true
    )]
    state: PathBuf,

    /// Emit JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    /// Override the deck count used for a new shoe.
    #[arg(long, value_name = "DECKS", global = true)]
    decks: Option<u8>,

    /// Override the commission rebate percentage.
    #[arg(long, value_name = "PERCENT", global = true)]
    commission: Option<f64>,

    /// Override the bankroll used for Kelly stakes.
    #[arg(long, value_name = "AMOUNT", global = true)]
    capital: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze the saved shoe without changing it.
    Analyze {
        /// Extra cards to remove before analyzing, e.g. "9 k a".
        #[arg(long, value_name = "TOKENS", num_args = 1..)]
        dealt: Vec<String>,
    },
    /// Record dealt cards and print the new analysis.
    Deal {
        #[arg(required = true, value_name = "TOKENS")]
        cards: Vec<String>,
    },
    /// Take back the most recent entries.
    Undo {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Mark the end of a hand.
    Separator,
    /// Refill the shoe and drop the history.
    Clear,
    /// Print remaining counts and history.
    Status,
    /// Interactive keypad loop on stdin.
    Play,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AdvisorConfig::from_path(path)?,
        None => AdvisorConfig::default(),
    };
    if let Some(decks) = cli.decks {
        config.shoe.decks = decks;
    }
    if let Some(rate) = cli.commission {
        config.commission_rate = rate;
    }
    if let Some(capital) = cli.capital {
        config.capital = capital;
    }
    config.validate()?;

    let _logging_guard = init_logging(&config.logging)?;
    event!(
        target: "baccarat_cli",
        Level::INFO,
        app = AppInfo::name(),
        version = AppInfo::version(),
        state = %cli.state.display(),
        "starting"
    );

    let settings = config.settings();
    let mut tracker = load_session(&cli.state, config.shoe.decks)?;

    match cli.command {
        Command::Analyze { dealt } => {
            let mut scratch = tracker.clone();
            for rank in keypad::parse_cards(&dealt)? {
                scratch
                    .deal(rank)
                    .with_context(|| format!("removing {rank} from the shoe"))?;
            }
            print_analysis(&scratch, &settings, cli.json)?;
        }
        Command::Deal { cards } => {
            let ranks = keypad::parse_cards(&cards)?;
            let mut next = tracker.clone();
            for rank in ranks {
                next.deal(rank)
                    .with_context(|| format!("recording {rank}"))?;
            }
            tracker = next;
            save_session(&cli.state, &tracker)?;
            print_analysis(&tracker, &settings, cli.json)?;
        }
        Command::Undo { count } => {
            let mut undone = 0;
            while undone < count && tracker.undo().is_some() {
                undone += 1;
            }
            if undone < count && !cli.json {
                println!("History exhausted after {undone} undo(s).");
            }
            save_session(&cli.state, &tracker)?;
            print_analysis(&tracker, &settings, cli.json)?;
        }
        Command::Separator => {
            tracker.mark_hand_boundary();
            save_session(&cli.state, &tracker)?;
            print_status(&tracker, cli.json)?;
        }
        Command::Clear => {
            tracker.clear();
            save_session(&cli.state, &tracker)?;
            print_analysis(&tracker, &settings, cli.json)?;
        }
        Command::Status => print_status(&tracker, cli.json)?,
        Command::Play => {
            play(&mut tracker, &settings, cli.json)?;
            save_session(&cli.state, &tracker)?;
        }
    }

    Ok(())
}

fn load_session(path: &Path, decks: u8) -> Result<ShoeTracker> {
    if !path.exists() {
        return ShoeTracker::new(decks).context("building a new shoe");
    }
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading session {}", path.display()))?;
    let tracker = SessionSnapshot::from_json(&json)
        .and_then(SessionSnapshot::restore)
        .with_context(|| format!("loading session {}", path.display()))?;
    Ok(tracker)
}

fn save_session(path: &Path, tracker: &ShoeTracker) -> Result<()> {
    let json = SessionSnapshot::to_json(tracker).context("serializing session")?;
    fs::write(path, json).with_context(|| format!("writing session {}", path.display()))
}

fn print_analysis(tracker: &ShoeTracker, settings: &AdvisorSettings, json: bool) -> Result<()> {
    let analysis = tracker.analyze(settings);
    if json {
        println!("{}", report::analysis_json(&analysis)?);
    } else {
        print!("{}", AnalysisView(&analysis));
    }
    Ok(())
}

fn print_status(tracker: &ShoeTracker, json: bool) -> Result<()> {
    if json {
        println!("{}", report::status_json(tracker)?);
    } else {
        println!("{}", StatusView(tracker));
    }
    Ok(())
}

fn play(tracker: &mut ShoeTracker, settings: &AdvisorSettings, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if !json {
        writeln!(
            stdout,
            "Keys: 1-9, 0/t, a, j, q, k to deal; | separator; u undo; c clear; quit to exit."
        )?;
    }

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let keys = match keypad::parse_line(&line) {
            Ok(keys) => keys,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        if keys.is_empty() {
            continue;
        }

        let outcome = match keypad::apply_line(tracker, &keys) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("{err}; line ignored");
                continue;
            }
        };
        if outcome.applied.contains(&Applied::Undone(None)) {
            eprintln!("nothing to undo");
        }
        if outcome.quit {
            break;
        }
        print_analysis(tracker, settings, json)?;
        stdout.flush()?;
    }

    Ok(())
}
