//! Controlador secuencial: funciones de transición puras sobre `FlowState`.
//!
//! Cada función toma el estado por referencia y devuelve un estado nuevo; si
//! la transición es rechazada el estado del llamador queda intacto, por lo que
//! los fallos son idempotentes. No hay I/O: el envío de resultados al
//! `ProgressRecorder` es responsabilidad del llamador.

use crate::errors::FlowError;
use crate::model::FlowState;
use crate::step::{Answer, Step};

/// Crea el estado inicial `Reading(0)`.
pub fn initialize(steps: Vec<Step>) -> Result<FlowState, FlowError> {
    if steps.is_empty() {
        return Err(FlowError::EmptyFlow);
    }
    for (position, step) in steps.iter().enumerate() {
        if step.index != position {
            return Err(FlowError::MisnumberedStep { expected: position,
                                                    found: step.index });
        }
        step.validate()?;
    }
    Ok(FlowState::new(steps))
}

/// Registra (o reemplaza) la respuesta del step actual.
///
/// El primer envío correcto de un step suma un punto; reenviar la respuesta
/// correcta, o corregir después de haber acertado, no vuelve a sumar.
pub fn submit_answer(state: &FlowState, step_index: usize, answer: Answer) -> Result<FlowState, FlowError> {
    let step = current_step_checked(state, step_index)?;
    if !step.requires_answer {
        return Err(FlowError::AnswerNotExpected { step_index });
    }
    step.content
        .check_answer(&answer)
        .map_err(|reason| FlowError::IncompatibleAnswer { step_index, reason })?;

    let correct = step.is_correct(&answer);
    let mut next = state.clone();
    if correct && next.credited.insert(step_index) {
        next.score += 1;
    }
    next.answers.insert(step_index, answer);
    next.revealed = true;
    Ok(next)
}

/// Pasa al siguiente step, o a `Complete` si el actual era el último.
pub fn advance(state: &FlowState) -> Result<FlowState, FlowError> {
    let step = current_step_checked(state, state.current_index)?;
    if step.requires_answer && !state.answers.contains_key(&step.index) {
        return Err(FlowError::AnswerRequired { step_index: step.index });
    }
    let mut next = state.clone();
    next.current_index += 1;
    next.revealed = false;
    Ok(next)
}

/// Vuelve al step anterior sin borrar respuestas registradas.
pub fn go_back(state: &FlowState) -> Result<FlowState, FlowError> {
    if state.current_index == 0 {
        return Err(FlowError::AtFirstStep);
    }
    let mut next = state.clone();
    next.current_index -= 1;
    next.revealed = false;
    Ok(next)
}

/// "Terminé de leer": revela la pregunta del step actual, o avanza
/// directamente si el step no requiere respuesta. En `Answering` no cambia nada.
pub fn finish_reading(state: &FlowState) -> Result<FlowState, FlowError> {
    let step = current_step_checked(state, state.current_index)?;
    if !step.requires_answer {
        return advance(state);
    }
    let mut next = state.clone();
    next.revealed = true;
    Ok(next)
}

fn current_step_checked(state: &FlowState, step_index: usize) -> Result<&Step, FlowError> {
    match state.current_step() {
        Some(step) if step_index == state.current_index => Ok(step),
        _ => Err(FlowError::InvalidStep { requested: step_index,
                                          current: state.current_index }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{FlowPhase, StepContent};

    fn scene(index: usize) -> Step {
        Step::read_only(index,
                        StepContent::DialogueScene { scene_number: index as u32 + 1,
                                                     description: "savannah".into(),
                                                     dialogue: "Hello!".into(),
                                                     moral_lesson: "be kind".into(),
                                                     visual_elements: vec!["lion".into()] })
    }

    fn counting(index: usize, count: u32) -> Step {
        Step::with_answer(index, StepContent::counting(count), Answer::Number(i64::from(count)))
    }

    #[test]
    fn initialize_rejects_empty_and_misnumbered() {
        assert_eq!(initialize(vec![]), Err(FlowError::EmptyFlow));
        assert_eq!(initialize(vec![scene(1)]),
                   Err(FlowError::MisnumberedStep { expected: 0, found: 1 }));
    }

    #[test]
    fn initialize_starts_reading_first_step() {
        let state = initialize(vec![scene(0), counting(1, 3)]).unwrap();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.score(), 0);
        assert!(state.answers().is_empty());
        assert_eq!(state.phase(), FlowPhase::Reading(0));
    }

    #[test]
    fn finish_reading_reveals_or_advances() {
        let state = initialize(vec![scene(0), counting(1, 3)]).unwrap();
        let state = finish_reading(&state).unwrap();
        assert_eq!(state.phase(), FlowPhase::Reading(1));
        let state = finish_reading(&state).unwrap();
        assert_eq!(state.phase(), FlowPhase::Answering(1));
        // idempotente en Answering
        let again = finish_reading(&state).unwrap();
        assert_eq!(again, state);
    }

    #[test]
    fn submit_for_other_step_is_invalid() {
        let state = initialize(vec![counting(0, 2), counting(1, 3)]).unwrap();
        let err = submit_answer(&state, 1, Answer::Number(3)).unwrap_err();
        assert_eq!(err, FlowError::InvalidStep { requested: 1, current: 0 });
    }

    #[test]
    fn submit_on_read_only_step_is_rejected() {
        let state = initialize(vec![scene(0)]).unwrap();
        assert_eq!(submit_answer(&state, 0, Answer::Number(1)),
                   Err(FlowError::AnswerNotExpected { step_index: 0 }));
    }

    #[test]
    fn incompatible_answer_leaves_state_untouched() {
        let state = initialize(vec![counting(0, 2)]).unwrap();
        let err = submit_answer(&state, 0, Answer::Text("two".into())).unwrap_err();
        assert!(matches!(err, FlowError::IncompatibleAnswer { step_index: 0, .. }));
        assert!(state.answers().is_empty());
    }

    #[test]
    fn correct_answer_twice_counts_once() {
        let state = initialize(vec![counting(0, 2)]).unwrap();
        let state = submit_answer(&state, 0, Answer::Number(2)).unwrap();
        let state = submit_answer(&state, 0, Answer::Number(2)).unwrap();
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn revising_after_correct_keeps_credit() {
        let state = initialize(vec![counting(0, 2)]).unwrap();
        let state = submit_answer(&state, 0, Answer::Number(2)).unwrap();
        let state = submit_answer(&state, 0, Answer::Number(5)).unwrap();
        assert_eq!(state.answer_for(0), Some(&Answer::Number(5)));
        assert_eq!(state.score(), 1);
        let state = submit_answer(&state, 0, Answer::Number(2)).unwrap();
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn advance_requires_answer_and_fails_idempotently() {
        let state = initialize(vec![counting(0, 2)]).unwrap();
        for _ in 0..2 {
            assert_eq!(advance(&state), Err(FlowError::AnswerRequired { step_index: 0 }));
            assert_eq!(state.current_index(), 0);
        }
        assert!(!state.can_advance());
    }

    #[test]
    fn advance_past_end_is_invalid() {
        let state = initialize(vec![scene(0)]).unwrap();
        let done = advance(&state).unwrap();
        assert!(done.is_complete());
        assert_eq!(done.phase(), FlowPhase::Complete);
        assert_eq!(advance(&done), Err(FlowError::InvalidStep { requested: 1, current: 1 }));
        assert!(finish_reading(&done).is_err());
    }

    #[test]
    fn go_back_is_non_destructive() {
        let state = initialize(vec![counting(0, 2), counting(1, 4)]).unwrap();
        assert_eq!(go_back(&state), Err(FlowError::AtFirstStep));
        let state = submit_answer(&state, 0, Answer::Number(2)).unwrap();
        let state = advance(&state).unwrap();
        let back = go_back(&state).unwrap();
        assert_eq!(back.current_index(), 0);
        assert_eq!(back.phase(), FlowPhase::Answering(0));
        let forward = advance(&back).unwrap();
        assert_eq!(forward.current_index(), 1);
        assert_eq!(forward.answers(), state.answers());
        assert_eq!(forward.score(), 1);
    }

    #[test]
    fn percentage_follows_score() {
        let state = initialize(vec![counting(0, 2), counting(1, 4)]).unwrap();
        let state = submit_answer(&state, 0, Answer::Number(2)).unwrap();
        assert!((state.percentage() - 50.0).abs() < f64::EPSILON);
    }
}
