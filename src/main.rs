//! Demo de punta a punta: evaluación de lectura, cuento y ruta de lecciones,
//! todo con colaboradores en memoria.

use readflow::adapters::encoder::{SimpleStepEncoder, StepEncoder};
use readflow::adapters::payloads::{Scene, Story};
use readflow::adapters::providers::{InMemoryProgressRecorder, StaticProgressSource};
use readflow::adapters::sample::{demo_content_provider, ASSESSMENT_FLOW_ID};
use readflow::adapters::{lesson_path, LearningSession};
use readflow::config::{init_logging, AppConfig};
use readflow::domain::LessonCatalog;
use readflow::errors::CoreError;
use readflow::flow::{Answer, FlowPhase};

fn demo_story() -> Story {
    let scene = |n: u32, description: &str, dialogue: &str| Scene { scene_number: n,
                                                                     description: description.to_string(),
                                                                     dialogue: dialogue.to_string(),
                                                                     moral_lesson: "Courage".to_string(),
                                                                     visual_elements: vec!["lion".to_string()] };
    Story { title: "Leo Crosses the River".to_string(),
            animal_character: "lion".to_string(),
            scenes: vec![scene(1, "Leo stands by the river.", "The water is so fast!"),
                         scene(2, "Leo takes a deep breath.", "I can do this."),
                         scene(3, "Leo reaches the other side.", "I was brave!")],
            moral_summary: "Being brave means trying even when you are scared.".to_string(),
            parent_tips: vec!["Ask your child about a time they felt brave.".to_string()] }
}

/// Punto de entrada testeable: carga la configuración con `load` y corre la demo.
async fn start<L>(load: L) -> Result<(), CoreError>
    where L: FnOnce() -> Result<AppConfig, CoreError>
{
    let config = load()?;
    init_logging(&config.log_filter);
    run(&config).await
}

async fn run(config: &AppConfig) -> Result<(), CoreError> {
    log::info!("demo user '{}' with base progress {}", config.user_id, config.progress_value);
    let provider = demo_content_provider()?;
    let recorder = InMemoryProgressRecorder::new();

    println!("--- Evaluación de lectura ---");
    let mut session = LearningSession::start(&provider, ASSESSMENT_FLOW_ID).await?;
    // respuestas simuladas: la primera correcta, la segunda corregida antes de avanzar
    let scripted = [vec![Answer::Choice(0)], vec![Answer::Choice(0), Answer::Choice(1)]];
    for answers in scripted.iter() {
        let index = session.state().current_index();
        session.finish_reading()?;
        for a in answers {
            session.submit_answer(index, a.clone())?;
        }
        session.advance()?;
    }
    let report = session.finish(&recorder).await?;
    println!("score {}/{} ({:.0}%) eventos {:?}",
             report.score,
             report.step_count,
             report.percentage,
             session.engine().event_codes());

    println!("--- Cuento ---");
    let story = demo_story();
    let steps = SimpleStepEncoder.encode_story(&story);
    let mut story_session = LearningSession::from_steps("story-leo", steps, chrono::Utc::now())?;
    while story_session.phase() != FlowPhase::Complete {
        if let Some(step) = story_session.state().current_step() {
            if let readflow::flow::StepContent::DialogueScene { scene_number, dialogue, .. } = &step.content {
                println!("[{}/{}] {}", scene_number, story.scenes.len(), dialogue);
            }
        }
        story_session.finish_reading()?;
    }
    story_session.finish(&recorder).await?;
    println!("Moraleja: {}", story.moral_summary);

    println!("--- Ruta de lecciones ---");
    let source = StaticProgressSource::new();
    let progress = config.progress_value + recorder.completed_count() as u32;
    source.set(config.user_id.clone(), progress);
    let catalog = LessonCatalog::from_themes(&config.themes)?;
    let statuses = lesson_path(&source, &config.user_id, &catalog).await?;
    for (entry, status) in catalog.entries().iter().zip(statuses.iter()) {
        let mark = if status.locked { "🔒" } else { "✅" };
        println!("{} {} ({})", mark, entry.title, entry.difficulty);
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = start(AppConfig::from_env).await {
        eprintln!("[readflow] {e}");
        std::process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_progress_stops_the_demo_with_config_exit_code() {
        let err = start(|| AppConfig::from_lookup(|key| (key == "READFLOW_PROGRESS").then(|| "lots".to_string())))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert_eq!(err.exit_code(), 5);
    }

    #[tokio::test]
    async fn demo_runs_with_default_config() {
        assert!(start(|| Ok(AppConfig::default())).await.is_ok());
    }
}
