//! Encoder payload del backend → `Step`s del core.
//!
//! Reglas clave:
//! - Los índices de los steps son consecutivos desde 0 en el orden del payload.
//! - Las escenas de cuento son de sólo lectura.
//! - Los elementos de juego se despachan por `element_type`; un tipo
//!   desconocido es un error de decodificación, no un step vacío.

use flow_core::{Answer, Step, StepContent};
use serde_json::Value;

use crate::errors::FetchError;
use crate::payloads::{AssessmentLevel, Game, GameElement, Story};

/// Contrato de empaquetado payload → steps.
pub trait StepEncoder {
    fn encode_story(&self, story: &Story) -> Vec<Step>;
    fn encode_game(&self, game: &Game) -> Result<Vec<Step>, FetchError>;
    fn encode_assessment(&self, levels: &[AssessmentLevel]) -> Result<Vec<Step>, FetchError>;
}

#[derive(Clone, Default)]
pub struct SimpleStepEncoder;

impl StepEncoder for SimpleStepEncoder {
    fn encode_story(&self, story: &Story) -> Vec<Step> {
        story.scenes
             .iter()
             .enumerate()
             .map(|(i, s)| {
                 Step::read_only(i,
                                 StepContent::DialogueScene { scene_number: s.scene_number,
                                                              description: s.description.clone(),
                                                              dialogue: s.dialogue.clone(),
                                                              moral_lesson: s.moral_lesson.clone(),
                                                              visual_elements: s.visual_elements.clone() })
             })
             .collect()
    }

    fn encode_game(&self, game: &Game) -> Result<Vec<Step>, FetchError> {
        game.elements
            .iter()
            .enumerate()
            .map(|(i, e)| encode_element(i, e))
            .collect()
    }

    fn encode_assessment(&self, levels: &[AssessmentLevel]) -> Result<Vec<Step>, FetchError> {
        let mut steps = Vec::new();
        for level in levels {
            if level.questions.is_empty() {
                return Err(FetchError::Decode(format!("assessment level {} has no questions", level.level)));
            }
            for q in &level.questions {
                let content = StepContent::ReadingQuestion { level: level.level,
                                                             passage: level.text.clone(),
                                                             question: q.question.clone(),
                                                             options: q.options.clone() };
                steps.push(Step::with_answer(steps.len(), content, Answer::Choice(q.correct)));
            }
        }
        Ok(steps)
    }
}

fn encode_element(index: usize, element: &GameElement) -> Result<Step, FetchError> {
    let text_answer = || {
        as_text(&element.correct_answer).map(Answer::Text)
                                        .ok_or_else(|| bad(index, "answer must be a string"))
    };
    let text_content = || as_text(&element.content).ok_or_else(|| bad(index, "content must be a string"));
    match element.element_type.as_str() {
        "shape" => Ok(Step::with_answer(index,
                                        StepContent::ShapeChoice { shape: text_content()?,
                                                                   options: element.hints.clone() },
                                        text_answer()?)),
        "sound" => Ok(Step::with_answer(index,
                                        StepContent::SoundMatch { sound: text_content()?,
                                                                  options: element.hints.clone() },
                                        text_answer()?)),
        "memory_card" => Ok(Step::with_answer(index,
                                              StepContent::MemoryMatch { card: text_content()?,
                                                                         hints: element.hints.clone() },
                                              text_answer()?)),
        "counting" => {
            let count = counting_content(&element.content)
                            .ok_or_else(|| bad(index, "counting content must start with a non-negative count"))?;
            let correct = element.correct_answer
                                 .as_i64()
                                 .ok_or_else(|| bad(index, "counting answer must be an integer"))?;
            Ok(Step::with_answer(index, StepContent::counting(count), Answer::Number(correct)))
        }
        other => Err(bad(index, &format!("unknown element type '{}'", other))),
    }
}

/// Cantidad a contar: un número, o un texto que empieza por ella ("3 objects").
fn counting_content(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => n.as_u64().and_then(|c| u32::try_from(c).ok()),
        Value::String(s) => s.split_whitespace().next()?.parse().ok(),
        _ => None,
    }
}

fn as_text(v: &Value) -> Option<String> {
    v.as_str().map(str::to_string)
}

fn bad(index: usize, reason: &str) -> FetchError {
    FetchError::Decode(format!("game element {}: {}", index, reason))
}
