//! Contenido de ejemplo: la evaluación de lectura inicial del onboarding.

use flow_core::Step;

use crate::encoder::{SimpleStepEncoder, StepEncoder};
use crate::errors::FetchError;
use crate::payloads::{AssessmentLevel, AssessmentQuestion};
use crate::providers::InMemoryContentProvider;

/// Id del flujo de evaluación de lectura.
pub const ASSESSMENT_FLOW_ID: &str = "reading-assessment";

pub fn assessment_levels() -> Vec<AssessmentLevel> {
    vec![AssessmentLevel { level: 1,
                           text: "The big lion walks. He sees a zebra. The zebra runs fast.".into(),
                           questions: vec![AssessmentQuestion { question: "What animal does the lion see?".into(),
                                                                options: vec!["A zebra".into(),
                                                                              "An elephant".into(),
                                                                              "A giraffe".into()],
                                                                correct: 0 }] },
         AssessmentLevel { level: 2,
                           text: "The elephant family lives in the savannah. They drink water at the lake every day. Baby elephants play in the mud.".into(),
                           questions: vec![AssessmentQuestion { question: "Where do the elephants drink water?".into(),
                                                                options: vec!["At the river".into(),
                                                                              "At the lake".into(),
                                                                              "In the mud".into()],
                                                                correct: 1 }] },]
}

pub fn assessment_steps() -> Result<Vec<Step>, FetchError> {
    SimpleStepEncoder.encode_assessment(&assessment_levels())
}

/// Proveedor en memoria con la evaluación de lectura ya registrada.
pub fn demo_content_provider() -> Result<InMemoryContentProvider, FetchError> {
    Ok(InMemoryContentProvider::new().with_flow(ASSESSMENT_FLOW_ID, assessment_steps()?))
}
