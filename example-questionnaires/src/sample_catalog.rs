use anyhow::Context;
use questionnaire::{
    Catalog, ChoiceQuestion, FreeTextQuestion, Question, Questionnaire, ScheduledAt, Status,
};

/// A catalog with one entry per status and every question kind.
///
/// The closed entry stands in for one closed by an external scheduler; no
/// intent produces `Status::Closed`.
pub fn sample_catalog() -> anyhow::Result<Catalog> {
    let scheduled = |year, month, day| {
        ScheduledAt::local_midnight(year, month, day).unwrap_or(ScheduledAt::UNSET)
    };

    let floors = ChoiceQuestion::new(
        "Which floor do you prefer?",
        vec!["Ground".into(), "Second".into(), "Top".into()],
    )
    .context("building floor question")?;
    let talks = ChoiceQuestion::new(
        "Which talks will you attend?",
        vec!["Keynote".into(), "Workshops".into(), "Lightning talks".into()],
    )
    .context("building talks question")?;

    Ok(Catalog::from(vec![
        Questionnaire::new(
            "Office move",
            scheduled(2016, 5, 2),
            vec![
                Question::SingleChoice(floors),
                Question::FreeText(FreeTextQuestion::new("Accessibility needs", false)),
            ],
        ),
        Questionnaire::new(
            "Conference talks",
            scheduled(2016, 4, 20),
            vec![Question::MultiChoice(talks)],
        )
        .with_status(Status::Released),
        Questionnaire::new(
            "Spring retreat",
            scheduled(2016, 3, 1),
            vec![
                Question::SingleChoice(ChoiceQuestion::with_default_options("Did you enjoy it?", 2)),
                Question::FreeText(FreeTextQuestion::new("What should we change?", true)),
            ],
        )
        .with_status(Status::Closed),
    ]))
}
