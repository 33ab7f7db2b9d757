use serde::{Deserialize, Serialize};
use std::fmt;

/// Respuesta enviada para un step. La igualdad es estructural: una respuesta
/// es correcta si y sólo si es igual a `Step::correct_answer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Índice de opción (preguntas de opción múltiple).
    Choice(usize),
    /// Valor numérico libre (conteo).
    Number(i64),
    /// Texto elegido entre opciones nombradas (formas).
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind { Choice, Number, Text }

impl Answer {
    pub fn kind(&self) -> AnswerKind {
        match self {
            Answer::Choice(_) => AnswerKind::Choice,
            Answer::Number(_) => AnswerKind::Number,
            Answer::Text(_) => AnswerKind::Text,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Choice(i) => write!(f, "option #{}", i),
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnswerKind::Choice => "choice",
            AnswerKind::Number => "number",
            AnswerKind::Text => "text",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_shape_is_tagged() {
        let json = serde_json::to_value(Answer::Number(7)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "number", "value": 7}));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Answer::Text("circle".into()), Answer::Text("circle".into()));
        assert_ne!(Answer::Choice(1), Answer::Number(1));
    }
}
