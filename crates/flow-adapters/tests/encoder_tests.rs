use flow_adapters::encoder::{SimpleStepEncoder, StepEncoder};
use flow_adapters::payloads::Story;
use flow_adapters::sample::assessment_steps;
use flow_core::engine::controller;
use flow_core::{Answer, StepContent};

#[test]
fn story_scenes_are_read_only_steps() {
    let story: Story = serde_json::from_value(serde_json::json!({
        "title": "Leo the Brave",
        "animal_character": "lion",
        "scenes": [
            {"scene_number": 1, "description": "Leo wakes up", "dialogue": "Roar!", "moral_lesson": "Courage", "visual_elements": ["lion"]},
            {"scene_number": 2, "description": "Leo meets Zara", "dialogue": "Hello!", "moral_lesson": "Friendship"}
        ],
        "moral_summary": "Be brave and kind",
        "parent_tips": ["Ask about courage"]
    })).unwrap();
    let steps = SimpleStepEncoder.encode_story(&story);
    assert_eq!(steps.len(), 2);
    assert!(steps.iter().all(|s| !s.requires_answer));
    assert!(matches!(&steps[1].content, StepContent::DialogueScene { visual_elements, .. } if visual_elements.is_empty()));

    // un cuento se recorre sólo con "terminé de leer"
    let mut state = controller::initialize(steps).unwrap();
    while !state.is_complete() {
        state = controller::finish_reading(&state).unwrap();
    }
    assert_eq!(state.score(), 0);
}

#[test]
fn sample_assessment_matches_built_in_levels() {
    let steps = assessment_steps().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].correct_answer, Some(Answer::Choice(0)));
    assert_eq!(steps[1].correct_answer, Some(Answer::Choice(1)));
    assert!(controller::initialize(steps).is_ok());
}

fn backend_game(puzzle_type: &str, elements: serde_json::Value) -> flow_adapters::payloads::Game {
    serde_json::from_value(serde_json::json!({
        "puzzle_type": puzzle_type,
        "difficulty": "easy",
        "title": "Leo's Game",
        "description": "Play with Leo",
        "elements": elements,
        "instructions": "Tap to play",
        "reward_message": "Great job!",
        "learning_outcome": "Fun"
    })).unwrap()
}

fn element(element_type: &str, content: serde_json::Value, correct: serde_json::Value, hints: [&str; 2]) -> serde_json::Value {
    serde_json::json!({"element_type": element_type, "content": content, "correct_answer": correct, "hints": hints})
}

#[test]
fn every_backend_game_type_becomes_a_playable_flow() {
    let games = vec![backend_game("shape_matching",
                                  (1..=3).map(|i| element("shape", format!("Shape {}", i).into(), format!("Match {}", i).into(), ["Look for similar colors", "Count the sides"]))
                                         .collect()),
                     backend_game("counting",
                                  (1..=3).map(|i| element("counting", format!("{} objects", i).into(), i.into(), ["Count one by one", "Point to each object"]))
                                         .collect()),
                     backend_game("animal_sounds",
                                  (1..=3).map(|i| element("sound", format!("Animal sound {}", i).into(), format!("Animal {}", i).into(), ["Listen carefully", "Think about the animal's size"]))
                                         .collect()),
                     backend_game("memory",
                                  (1..=4).map(|i| element("memory_card", format!("Card {}", i).into(), format!("Card {}", i).into(), ["Remember the position", "Look for matching patterns"]))
                                         .collect()),];

    for game in games {
        let steps = SimpleStepEncoder.encode_game(&game).unwrap();
        assert_eq!(steps.len(), game.elements.len(), "{}", game.puzzle_type);
        let mut state = controller::initialize(steps).unwrap();
        while !state.is_complete() {
            let step = state.current_step().unwrap().clone();
            // se responde con la primera pista cuando la respuesta correcta no es una opción
            let answer = match step.content.check_answer(step.correct_answer.as_ref().unwrap()) {
                Ok(()) => step.correct_answer.clone().unwrap(),
                Err(_) => Answer::Text(game.elements[step.index].hints[0].clone()),
            };
            state = controller::submit_answer(&state, step.index, answer).unwrap();
            state = controller::advance(&state).unwrap();
        }
        let expected_score = match game.puzzle_type.as_str() {
            "shape_matching" | "animal_sounds" => 0,
            _ => game.elements.len() as u32,
        };
        assert_eq!(state.score(), expected_score, "{}", game.puzzle_type);
    }
}

#[test]
fn counting_elements_read_the_leading_count() {
    let game = backend_game("counting", serde_json::json!([element("counting", "10 objects".into(), 10.into(), ["Count one by one", "Point to each object"])]));
    let steps = SimpleStepEncoder.encode_game(&game).unwrap();
    assert_eq!(steps[0].content, StepContent::counting(10));
    assert_eq!(steps[0].correct_answer, Some(Answer::Number(10)));
}
