use anyhow::Context;
use questionnaire::{Direction, Intent, KeyValueStore, QuestionKind, Store};

/// End-of-course feedback: one rating, one multi-select, one required comment.
///
/// Saves the questionnaire as unreleased and returns its catalog position.
pub fn author_course_feedback<S: KeyValueStore>(store: &mut Store<S>) -> anyhow::Result<usize> {
    let intents = vec![
        Intent::BeginNew,
        Intent::OpenTextEditor {
            question: None,
            option: None,
            content: store.draft().title.clone(),
        },
        Intent::CommitTextEdit {
            content: "Course feedback".into(),
        },
        Intent::SetScheduledAt {
            year: 2016,
            month: 6,
            day: 30,
        },
        // Comment box first, moved to the end once the choices exist.
        Intent::AddQuestion {
            kind: QuestionKind::FreeText,
        },
        Intent::SetFreeTextAnswer {
            question: 0,
            content: "Anything else we should know?".into(),
        },
        Intent::ToggleRequired { question: 0 },
        Intent::AddQuestion {
            kind: QuestionKind::SingleChoice,
        },
        Intent::OpenTextEditor {
            question: Some(1),
            option: None,
            content: String::new(),
        },
        Intent::CommitTextEdit {
            content: "Would you recommend this course?".into(),
        },
        Intent::AddQuestion {
            kind: QuestionKind::MultiChoice,
        },
        Intent::OpenTextEditor {
            question: Some(2),
            option: None,
            content: String::new(),
        },
        Intent::CommitTextEdit {
            content: "Which sessions did you attend?".into(),
        },
        Intent::RemoveOption {
            question: 2,
            option: 3,
        },
        Intent::ShiftQuestion {
            index: 0,
            direction: Direction::Down,
        },
        Intent::ShiftQuestion {
            index: 1,
            direction: Direction::Down,
        },
        Intent::Save,
    ];

    for intent in intents {
        let name = format!("{intent:?}");
        store
            .dispatch(intent)
            .with_context(|| format!("authoring course feedback: {name}"))?;
    }

    Ok(store.draft().source_index)
}
