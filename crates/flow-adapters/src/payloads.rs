//! Payloads del backend (cuentos, juegos, evaluación de lectura).
//!
//! Sólo describen la forma JSON que entrega la API externa; el `encoder` los
//! convierte en `Step`s del core.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub scene_number: u32,
    pub description: String,
    pub dialogue: String,
    pub moral_lesson: String,
    #[serde(default)]
    pub visual_elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub animal_character: String,
    pub scenes: Vec<Scene>,
    pub moral_summary: String,
    #[serde(default)]
    pub parent_tips: Vec<String>,
}

/// Elemento de juego tal como llega de la API: `element_type` decide cómo se
/// interpretan `content` y `correct_answer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameElement {
    pub element_type: String,
    pub content: serde_json::Value,
    pub correct_answer: serde_json::Value,
    #[serde(default)]
    pub hints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub puzzle_type: String,
    pub difficulty: String,
    pub title: String,
    pub description: String,
    pub elements: Vec<GameElement>,
    pub instructions: String,
    pub reward_message: String,
    pub learning_outcome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
}

/// Nivel de la evaluación de lectura inicial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentLevel {
    pub level: u32,
    pub text: String,
    pub questions: Vec<AssessmentQuestion>,
}
