use crate::config::types::{ExerciseSpec, GraderError, SessionStatus, Verdict};
use crate::judge::registry;
use crate::session::controller::Session;
use crate::session::scheduler::SystemClock;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a snippet by predicting its output
    Run {
        /// Programming language tag (python, java, c++, ...)
        #[arg(long)]
        language: String,
        /// Source code as string
        #[arg(long)]
        code: Option<String>,
        /// Read source code from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Expected output to grade against; omit for an ungraded run
        #[arg(long)]
        expected: Option<String>,
        /// Emit a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// List registered language profiles
    Languages {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            language,
            code,
            file,
            expected,
            json,
        } => run_exercise(language, code, file, expected, json),
        Commands::Languages { json } => list_languages(json),
    }
}

fn run_exercise(
    language: String,
    code: Option<String>,
    file: Option<PathBuf>,
    expected: Option<String>,
    json: bool,
) -> Result<()> {
    let source = load_source(code, file)?;
    let spec = ExerciseSpec::new(language, source, expected);
    let completed = Rc::new(Cell::new(false));
    let sink_flag = completed.clone();
    let mut session = Session::new(spec, Box::new(SystemClock::new()))
        .with_completion_sink(move || sink_flag.set(true));

    session.run();
    drive_to_completion(&mut session);

    let verdict = session.verdict();
    if json {
        let report = serde_json::json!({
            "status": "OK",
            "language": session.language(),
            "log": session.log(),
            "verdict": verdict,
            "completed": completed.get(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in session.log() {
            println!("{}", line);
        }
        match verdict {
            Some(verdict) => eprintln!("verdict: {}", verdict),
            None => eprintln!("verdict: none"),
        }
    }

    if verdict == Some(Verdict::Fail) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_source(
    code: Option<String>,
    file: Option<PathBuf>,
) -> crate::config::types::Result<String> {
    match (code, file) {
        (Some(code), None) => Ok(code),
        (None, Some(path)) => Ok(std::fs::read_to_string(&path)?),
        _ => Err(GraderError::Config(
            "provide exactly one of --code or --file".to_string(),
        )),
    }
}

/// Pump the session's timers against the wall clock until the run and
/// any pending completion notification have fired.
fn drive_to_completion(session: &mut Session) {
    while session.status() != SessionStatus::Idle || session.has_pending_tasks() {
        session.tick();
        thread::sleep(Duration::from_millis(10));
    }
}

fn list_languages(json: bool) -> Result<()> {
    let profiles = registry::get_registry().profiles();
    if json {
        let entries: Vec<_> = profiles
            .iter()
            .map(|profile| {
                serde_json::json!({
                    "id": profile.id(),
                    "name": profile.display_name(),
                    "file": profile.source_file(),
                    "ext": profile.file_extension(),
                })
            })
            .collect();
        let report = serde_json::json!({
            "status": "OK",
            "languages": entries,
            "count": profiles.len(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for profile in profiles {
            println!(
                "{:<12} {} ({})",
                profile.id(),
                profile.display_name(),
                profile.source_file()
            );
        }
    }
    Ok(())
}
