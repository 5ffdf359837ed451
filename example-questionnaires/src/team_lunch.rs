use anyhow::Context;
use questionnaire::{Intent, KeyValueStore, QuestionKind, Store};

const CUISINES: [&str; 3] = ["Noodles", "Pizza", "Salad"];

/// Where should the team go for lunch? A single-choice poll with one option per cuisine.
///
/// Saves the poll as unreleased and returns its catalog position.
pub fn author_team_lunch<S: KeyValueStore>(store: &mut Store<S>) -> anyhow::Result<usize> {
    let mut intents = vec![
        Intent::BeginNew,
        Intent::SetTitle {
            title: "Team lunch".into(),
        },
        Intent::ChooseAudienceType,
        Intent::AddQuestion {
            kind: QuestionKind::SingleChoice,
        },
        Intent::AddOption { question: 0 },
    ];
    for (option, cuisine) in CUISINES.iter().enumerate() {
        intents.push(Intent::StartTextEdit {
            question: Some(0),
            option: Some(option),
            content: format!("Option{}", option + 1),
        });
        intents.push(Intent::CommitTextEdit {
            content: (*cuisine).to_string(),
        });
    }
    intents.push(Intent::Save);

    for intent in intents {
        store.dispatch(intent).context("authoring team lunch poll")?;
    }
    Ok(store.draft().source_index)
}

/// Re-open the poll at `index` and release it.
pub fn release_team_lunch<S: KeyValueStore>(store: &mut Store<S>, index: usize) -> anyhow::Result<()> {
    store
        .dispatch(Intent::BeginEdit { index })
        .with_context(|| format!("opening questionnaire {index}"))?;
    store.dispatch(Intent::Release).context("releasing team lunch poll")?;
    Ok(())
}
