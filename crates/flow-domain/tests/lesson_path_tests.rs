use flow_domain::{evaluate, Difficulty, Lesson, LessonCatalog, DEFAULT_THEMES};

#[test]
fn default_path_has_one_lesson_per_theme() {
    let catalog = LessonCatalog::default_path();
    assert_eq!(catalog.entries().len(), DEFAULT_THEMES.len());
    let first = &catalog.entries()[0];
    assert_eq!(first.lesson.id, "lesson-1");
    assert_eq!(first.title, "Courage Adventure");
    assert_eq!(first.lesson.required_progress, 0);
    let last = catalog.entries().last().unwrap();
    assert_eq!(last.lesson.required_progress, 70);
    assert_eq!(last.difficulty, Difficulty::Hard);
}

#[test]
fn statuses_follow_progress_without_memory() {
    let catalog = LessonCatalog::from_themes(["Courage", "Friendship", "Sharing"]).unwrap();
    let at_15: Vec<bool> = catalog.statuses(15).iter().map(|s| s.locked).collect();
    assert_eq!(at_15, vec![false, false, true]);
    // bajar el progreso vuelve a bloquear: no hay flags guardados
    let at_0: Vec<bool> = catalog.statuses(0).iter().map(|s| s.locked).collect();
    assert_eq!(at_0, vec![false, true, true]);
}

#[test]
fn locked_and_completed_are_complementary() {
    let lessons: Vec<Lesson> = (0..5).map(|i| Lesson { id: format!("l{}", i), required_progress: i * 7 }).collect();
    for progress in 0..40 {
        for status in evaluate(&lessons, progress) {
            assert_ne!(status.locked, status.completed);
        }
    }
}

#[test]
fn current_and_next_lesson() {
    let catalog = LessonCatalog::default_path();
    assert_eq!(catalog.current_lesson(25).unwrap().theme, "Sharing");
    let (next, missing) = catalog.next_locked(25).unwrap();
    assert_eq!(next.theme, "Patience");
    assert_eq!(missing, 5);
    assert!(catalog.next_locked(1000).is_none());
}
