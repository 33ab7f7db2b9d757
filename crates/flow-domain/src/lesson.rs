// lesson.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::DomainError;

/// Actividades completadas que separan una lección de la siguiente.
pub const PROGRESS_PER_LESSON: u32 = 10;

/// Temas de la ruta por defecto, en orden de desbloqueo.
pub const DEFAULT_THEMES: [&str; 8] = ["Courage", "Friendship", "Sharing", "Patience", "Kindness", "Perseverance", "Honesty", "Responsibility"];

/// Umbral de desbloqueo de una lección.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub required_progress: u32,
}

/// Estado derivado de una lección para un valor de progreso dado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonStatus {
    pub id: String,
    pub locked: bool,
    pub completed: bool,
}

/// Calcula bloqueado/completado para cada lección, en el orden de entrada.
///
/// Se recalcula en cada llamada para no desincronizarse de la fuente de
/// progreso. `completed = required <= progress`, `locked = required > progress`.
pub fn evaluate(lessons: &[Lesson], progress_value: u32) -> Vec<LessonStatus> {
    lessons.iter()
           .map(|l| LessonStatus { id: l.id.clone(),
                                   locked: l.required_progress > progress_value,
                                   completed: l.required_progress <= progress_value })
           .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Banda de dificultad según la posición en la ruta: 0-2 fácil, 3-5 media.
    pub fn for_position(position: usize) -> Self {
        match position {
            0..=2 => Difficulty::Easy,
            3..=5 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// Entrada del catálogo de lecciones construida a partir de un tema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonEntry {
    pub lesson: Lesson,
    pub title: String,
    pub theme: String,
    pub difficulty: Difficulty,
}

/// Ruta ordenada de lecciones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCatalog {
    entries: Vec<LessonEntry>,
}

impl LessonCatalog {
    /// Construye la ruta a partir de una lista ordenada de temas:
    /// `lesson-{n}`, "{tema} Adventure", umbral `posición * 10`.
    ///
    /// # Errores
    /// `DomainError::ValidationError` si hay temas vacíos o repetidos.
    pub fn from_themes<I, S>(themes: I) -> Result<Self, DomainError>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for (position, theme) in themes.into_iter().enumerate() {
            let theme = theme.as_ref().trim();
            if theme.is_empty() {
                return Err(DomainError::ValidationError(format!("tema vacío en la posición {}", position)));
            }
            if !seen.insert(theme.to_lowercase()) {
                return Err(DomainError::ValidationError(format!("tema duplicado: {}", theme)));
            }
            entries.push(LessonEntry { lesson: Lesson { id: format!("lesson-{}", position + 1),
                                                        required_progress: position as u32 * PROGRESS_PER_LESSON },
                                       title: format!("{} Adventure", theme),
                                       theme: theme.to_string(),
                                       difficulty: Difficulty::for_position(position) });
        }
        Ok(Self { entries })
    }

    /// Ruta con los temas por defecto.
    pub fn default_path() -> Self {
        // Los temas por defecto son únicos y no vacíos.
        Self::from_themes(DEFAULT_THEMES).unwrap_or(Self { entries: Vec::new() })
    }

    pub fn entries(&self) -> &[LessonEntry] {
        &self.entries
    }

    pub fn lessons(&self) -> Vec<Lesson> {
        self.entries.iter().map(|e| e.lesson.clone()).collect()
    }

    pub fn statuses(&self, progress_value: u32) -> Vec<LessonStatus> {
        evaluate(&self.lessons(), progress_value)
    }

    /// Lección desbloqueada de mayor umbral: la que conviene jugar ahora.
    pub fn current_lesson(&self, progress_value: u32) -> Option<&LessonEntry> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.lesson.required_progress <= progress_value)
    }

    /// Próxima lección bloqueada y cuántas actividades faltan para abrirla.
    pub fn next_locked(&self, progress_value: u32) -> Option<(&LessonEntry, u32)> {
        self.entries
            .iter()
            .find(|e| e.lesson.required_progress > progress_value)
            .map(|e| (e, e.lesson.required_progress - progress_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_matches_thresholds() {
        let lessons = vec![Lesson { id: "a".into(), required_progress: 0 },
                           Lesson { id: "b".into(), required_progress: 10 },];
        let out = evaluate(&lessons, 5);
        assert_eq!(out,
                   vec![LessonStatus { id: "a".into(), locked: false, completed: true },
                        LessonStatus { id: "b".into(), locked: true, completed: false },]);
    }

    #[test]
    fn zero_progress_locks_positive_thresholds() {
        let lessons = vec![Lesson { id: "x".into(), required_progress: 1 }];
        assert!(evaluate(&lessons, 0)[0].locked);
    }

    #[test]
    fn difficulty_bands() {
        assert_eq!(Difficulty::for_position(0), Difficulty::Easy);
        assert_eq!(Difficulty::for_position(2), Difficulty::Easy);
        assert_eq!(Difficulty::for_position(3), Difficulty::Medium);
        assert_eq!(Difficulty::for_position(5), Difficulty::Medium);
        assert_eq!(Difficulty::for_position(6), Difficulty::Hard);
    }

    #[test]
    fn catalog_serializes_with_lowercase_difficulty() {
        let catalog = LessonCatalog::from_themes(["Kindness"]).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["entries"][0]["difficulty"], "easy");
        assert_eq!(json["entries"][0]["lesson"]["id"], "lesson-1");
    }

    #[test]
    fn catalog_rejects_duplicates_and_blanks() {
        assert!(LessonCatalog::from_themes(["Courage", "courage"]).is_err());
        assert!(LessonCatalog::from_themes(["Courage", " "]).is_err());
    }
}
