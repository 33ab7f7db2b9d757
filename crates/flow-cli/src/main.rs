use std::io::{self, BufRead, Write};

use flow_adapters::providers::{InMemoryProgressRecorder, StaticProgressSource};
use flow_adapters::sample::{demo_content_provider, ASSESSMENT_FLOW_ID};
use flow_adapters::{lesson_path, LearningSession, SessionError};
use flow_core::{Answer, FlowError, FlowPhase, StepContent};
use flow_domain::LessonCatalog;
use log::debug;

const USAGE: &str = "Uso:
  readflow-cli assessment [--json]
  readflow-cli lessons --progress <N> [--themes <A,B,...>] [--json]";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Cargar .env si existe (RUST_LOG, etc.)
    let _ = dotenvy::dotenv();
    let _ = tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                                     .with_writer(io::stderr)
                                     .try_init();

    let args: Vec<String> = std::env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    match args.get(1).map(String::as_str) {
        Some("assessment") => {
            let stdin = io::stdin();
            if let Err(e) = run_assessment(&mut stdin.lock(), json).await {
                eprintln!("[readflow assessment] {e}");
                std::process::exit(exit_code(e.as_ref()));
            }
        }
        Some("lessons") => {
            let mut progress: Option<u32> = None;
            let mut themes: Option<String> = None;
            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--progress" => {
                        i += 1;
                        if i < args.len() { progress = args[i].parse::<u32>().ok(); }
                    }
                    "--themes" => {
                        i += 1;
                        if i < args.len() { themes = Some(args[i].clone()); }
                    }
                    _ => {}
                }
                i += 1;
            }
            let Some(progress) = progress else {
                eprintln!("{USAGE}");
                std::process::exit(2);
            };
            let catalog = match themes {
                Some(t) => LessonCatalog::from_themes(t.split(',')),
                None => Ok(LessonCatalog::default_path()),
            };
            let catalog = match catalog {
                Ok(c) => c,
                Err(e) => { eprintln!("[readflow lessons] {e}"); std::process::exit(4); }
            };
            let source = StaticProgressSource::new();
            source.set("cli", progress);
            match lesson_path(&source, "cli", &catalog).await {
                Ok(statuses) if json => println!("{}", serde_json::to_string_pretty(&statuses).unwrap_or_default()),
                Ok(statuses) => {
                    for (entry, status) in catalog.entries().iter().zip(statuses.iter()) {
                        let mark = if status.completed { "done  " } else { "locked" };
                        println!("{} {:<28} {:<6} needs {}", mark, entry.title, entry.difficulty, entry.lesson.required_progress);
                    }
                    if let Some((next, missing)) = catalog.next_locked(progress) {
                        println!("Complete {} more activities to unlock {}", missing, next.title);
                    }
                }
                Err(e) => { eprintln!("[readflow lessons] {e}"); std::process::exit(5); }
            }
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}

/// Evaluación de lectura interactiva sobre stdin. Comandos en la pregunta:
/// número de opción, `c` continuar, `b` volver.
async fn run_assessment<I: BufRead>(input: &mut I, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let provider = demo_content_provider()?;
    let recorder = InMemoryProgressRecorder::new();
    let mut session = LearningSession::start(&provider, ASSESSMENT_FLOW_ID).await?;

    while session.phase() != FlowPhase::Complete {
        let Some(step) = session.state().current_step().cloned() else { break };
        let StepContent::ReadingQuestion { level, passage, question, options } = &step.content else {
            session.finish_reading()?;
            continue;
        };
        match session.phase() {
            FlowPhase::Reading(_) => {
                println!("\nLevel {level}\n{passage}\n[enter] I've finished reading");
                if read_line(input)?.is_none() { return Ok(()); }
                session.finish_reading()?;
            }
            FlowPhase::Answering(i) => {
                println!("\n{question}");
                for (n, o) in options.iter().enumerate() {
                    let mark = if session.state().answer_for(i) == Some(&Answer::Choice(n)) { "*" } else { " " };
                    println!(" {mark} {}) {o}", n + 1);
                }
                print!("choice / c / b > ");
                io::stdout().flush()?;
                let Some(line) = read_line(input)? else { return Ok(()) };
                let outcome = match line.as_str() {
                    "c" => session.advance().map(|_| ()),
                    "b" => session.go_back().map(|_| ()),
                    n => match n.parse::<usize>() {
                        Ok(n) if n >= 1 => session.submit_answer(i, Answer::Choice(n - 1)).map(|_| ()),
                        _ => { println!("?"); Ok(()) }
                    },
                };
                match outcome {
                    Ok(()) => {}
                    Err(FlowError::AnswerRequired { .. }) => println!("Pick an answer first."),
                    Err(FlowError::AtFirstStep) => println!("This is the first level."),
                    Err(e) => { debug!("transition rejected: {e}"); println!("{e}"); }
                }
            }
            FlowPhase::Complete => break,
        }
    }

    let report = session.finish(&recorder).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\nAssessment complete: {}/{} ({:.0}%) in {}s", report.score, report.step_count, report.percentage, report.time_spent_seconds);
    }
    Ok(())
}

/// 4 si el estado del flujo rechazó la operación, 5 para el resto.
fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    if err.is::<FlowError>() {
        return 4;
    }
    match err.downcast_ref::<SessionError>() {
        Some(SessionError::Flow(_)) => 4,
        _ => 5,
    }
}

fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
