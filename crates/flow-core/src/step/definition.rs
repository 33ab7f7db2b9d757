use serde::{Deserialize, Serialize};

use super::answer::{Answer, AnswerKind};
use crate::constants::{DEFAULT_COUNTING_MAX, DEFAULT_COUNTING_MIN};
use crate::errors::FlowError;

/// Contenido de un step. Tipo suma cerrado: cada variante sabe qué forma de
/// respuesta acepta, sin inspección de tags en tiempo de ejecución.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepContent {
    /// Escena de un cuento. Sólo lectura.
    DialogueScene {
        scene_number: u32,
        description: String,
        dialogue: String,
        moral_lesson: String,
        visual_elements: Vec<String>,
    },
    /// Nivel de la evaluación de lectura: un pasaje que, una vez leído,
    /// revela una pregunta de opción múltiple.
    ReadingQuestion {
        level: u32,
        passage: String,
        question: String,
        options: Vec<String>,
    },
    /// Elemento de juego: identificar una forma entre opciones.
    ShapeChoice { shape: String, options: Vec<String> },
    /// Elemento de juego: contar objetos e ingresar el número.
    CountingInput { count: u32, min: i64, max: i64 },
    /// Elemento de juego: escuchar un sonido y elegir el animal.
    SoundMatch { sound: String, options: Vec<String> },
    /// Elemento de juego: carta de memoria que debe emparejarse.
    MemoryMatch { card: String, hints: Vec<String> },
}

impl StepContent {
    /// Conteo con el rango por defecto `0..=20`.
    pub fn counting(count: u32) -> Self {
        StepContent::CountingInput { count,
                                     min: DEFAULT_COUNTING_MIN,
                                     max: DEFAULT_COUNTING_MAX }
    }

    /// Forma de respuesta que acepta el contenido (`None` = sólo lectura).
    pub fn answer_kind(&self) -> Option<AnswerKind> {
        match self {
            StepContent::DialogueScene { .. } => None,
            StepContent::ReadingQuestion { .. } => Some(AnswerKind::Choice),
            StepContent::ShapeChoice { .. } | StepContent::SoundMatch { .. } | StepContent::MemoryMatch { .. } => {
                Some(AnswerKind::Text)
            }
            StepContent::CountingInput { .. } => Some(AnswerKind::Number),
        }
    }

    /// Verifica que `answer` tenga sentido para este contenido.
    pub fn check_answer(&self, answer: &Answer) -> Result<(), String> {
        match (self, answer) {
            (StepContent::ReadingQuestion { options, .. }, Answer::Choice(i)) => {
                if *i < options.len() {
                    Ok(())
                } else {
                    Err(format!("option {} out of range (0..{})", i, options.len()))
                }
            }
            (StepContent::ShapeChoice { options, .. }, Answer::Text(t))
            | (StepContent::SoundMatch { options, .. }, Answer::Text(t)) => {
                if options.is_empty() || options.iter().any(|o| o == t) {
                    Ok(())
                } else {
                    Err(format!("'{}' is not one of the offered options", t))
                }
            }
            (StepContent::MemoryMatch { .. }, Answer::Text(_)) => Ok(()),
            (StepContent::CountingInput { min, max, .. }, Answer::Number(n)) => {
                if (*min..=*max).contains(n) {
                    Ok(())
                } else {
                    Err(format!("{} outside {}..={}", n, min, max))
                }
            }
            (content, answer) => match content.answer_kind() {
                Some(expected) => Err(format!("expected a {} answer, got {}", expected, answer.kind())),
                None => Err("content is read-only".to_string()),
            },
        }
    }

    /// Verifica la respuesta correcta declarada por el step.
    ///
    /// En los juegos de emparejamiento la respuesta correcta es opaca: puede
    /// no figurar entre las opciones ofrecidas y entonces el step nunca
    /// puntúa, pero sigue siendo jugable. Sólo se exige la forma.
    pub fn check_correct_answer(&self, answer: &Answer) -> Result<(), String> {
        match self {
            StepContent::ShapeChoice { .. } | StepContent::SoundMatch { .. } | StepContent::MemoryMatch { .. } => {
                match answer {
                    Answer::Text(_) => Ok(()),
                    other => Err(format!("expected a text answer, got {}", other.kind())),
                }
            }
            _ => self.check_answer(answer),
        }
    }
}

/// Unidad ordenada de contenido dentro de un flujo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Posición 0-based, única dentro del flujo.
    pub index: usize,
    pub content: StepContent,
    pub requires_answer: bool,
    /// Presente sólo si `requires_answer`.
    pub correct_answer: Option<Answer>,
}

impl Step {
    /// Step de sólo lectura.
    pub fn read_only(index: usize, content: StepContent) -> Self {
        Self { index,
               content,
               requires_answer: false,
               correct_answer: None }
    }

    /// Step que exige respuesta antes de avanzar.
    pub fn with_answer(index: usize, content: StepContent, correct: Answer) -> Self {
        Self { index,
               content,
               requires_answer: true,
               correct_answer: Some(correct) }
    }

    pub fn is_correct(&self, answer: &Answer) -> bool {
        self.correct_answer.as_ref() == Some(answer)
    }

    /// Coherencia interna del step: `requires_answer`, `correct_answer` y la
    /// forma del contenido deben coincidir.
    pub fn validate(&self) -> Result<(), FlowError> {
        let malformed = |reason: String| FlowError::MalformedStep { step_index: self.index, reason };
        match (self.requires_answer, &self.correct_answer) {
            (true, None) => return Err(malformed("requires an answer but has no correct answer".into())),
            (false, Some(_)) => return Err(malformed("correct answer on a step that takes no answer".into())),
            _ => {}
        }
        if self.requires_answer != self.content.answer_kind().is_some() {
            return Err(malformed("answer requirement does not match content".into()));
        }
        if let Some(correct) = &self.correct_answer {
            self.content.check_correct_answer(correct).map_err(malformed)?;
        }
        Ok(())
    }
}
