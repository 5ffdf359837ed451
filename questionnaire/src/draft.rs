//! The questionnaire currently being authored.
//!
//! A `Draft` is an independent copy of a catalog entry (or a blank template)
//! plus the text-editing cursor. Every operation checks its indices before it
//! touches anything, so a failed operation leaves the draft unchanged.

use questionnaire_types::{
    Question, QuestionKind, Questionnaire, ScheduledAt, StoreError, option_label,
};

use crate::Direction;

/// Which piece of text the editor is pointed at.
///
/// Replaces a `(question, option)` index pair where `-1` meant "none": an
/// option can only be targeted together with its question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cursor {
    /// The questionnaire title.
    #[default]
    Title,

    /// The prompt of a question.
    Prompt { question: usize },

    /// One option of a choice question.
    Option { question: usize, option: usize },
}

impl Cursor {
    /// Build a cursor from an optional question and option index.
    ///
    /// An option index without a question index addresses the title.
    pub fn from_indices(question: Option<usize>, option: Option<usize>) -> Self {
        match (question, option) {
            (None, _) => Self::Title,
            (Some(question), None) => Self::Prompt { question },
            (Some(question), Some(option)) => Self::Option { question, option },
        }
    }

    /// The active question index, if any.
    pub fn active_question(self) -> Option<usize> {
        match self {
            Self::Title => None,
            Self::Prompt { question } | Self::Option { question, .. } => Some(question),
        }
    }

    /// The active option index, if any.
    pub fn active_option(self) -> Option<usize> {
        match self {
            Self::Option { option, .. } => Some(option),
            _ => None,
        }
    }
}

/// State of the modal text editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditor {
    /// Whether the editor is shown.
    pub open: bool,

    /// Text in the editor before it is committed.
    pub pending: String,
}

/// The questionnaire currently being authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Catalog position the draft commits to. Equal to the catalog length for a new questionnaire.
    pub source_index: usize,
    pub title: String,
    pub scheduled_at: ScheduledAt,
    pub questions: Vec<Question>,
    /// Audience classification toggled from the editor header. Not committed to the catalog.
    pub restricted_audience: bool,
    pub cursor: Cursor,
    pub text_editor: TextEditor,
}

impl Draft {
    /// A blank draft that will be appended at `catalog_len`.
    pub fn begin_new(catalog_len: usize, title: impl Into<String>) -> Self {
        tracing::debug!(source_index = catalog_len, "starting new draft");
        Self {
            source_index: catalog_len,
            title: title.into(),
            scheduled_at: ScheduledAt::UNSET,
            questions: Vec::new(),
            restricted_audience: false,
            cursor: Cursor::Title,
            text_editor: TextEditor::default(),
        }
    }

    /// A draft holding an independent copy of `catalog[index]`.
    pub fn begin_edit(catalog: &[Questionnaire], index: usize) -> Result<Self, StoreError> {
        let source = catalog
            .get(index)
            .ok_or_else(|| StoreError::out_of_range("questionnaire", index, catalog.len()))?;

        tracing::debug!(source_index = index, title = %source.title, "editing questionnaire");
        Ok(Self {
            source_index: index,
            title: source.title.clone(),
            scheduled_at: source.scheduled_at,
            questions: source.questions.clone(),
            restricted_audience: false,
            cursor: Cursor::Title,
            text_editor: TextEditor::default(),
        })
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Flip the audience classification.
    pub fn choose_audience_type(&mut self) {
        self.restricted_audience = !self.restricted_audience;
    }

    /// Legacy text-edit entry point.
    ///
    /// With both indices set on a free-text question the content is written
    /// straight into that question; everything else opens the editor.
    pub fn start_text_edit(
        &mut self,
        question: Option<usize>,
        option: Option<usize>,
        content: impl Into<String>,
    ) -> Result<(), StoreError> {
        if let (Some(index), Some(_)) = (question, option)
            && self.question(index)?.is_free_text()
        {
            return self.set_free_text_answer(index, content);
        }
        self.open_text_editor(Cursor::from_indices(question, option), content)
    }

    /// Write `content` into a free-text question in place.
    pub fn set_free_text_answer(
        &mut self,
        question: usize,
        content: impl Into<String>,
    ) -> Result<(), StoreError> {
        let target = self.question_mut(question)?;
        if !target.is_free_text() {
            return Err(StoreError::NotFreeText { question });
        }
        target.set_prompt(content);
        Ok(())
    }

    /// Open the text editor on `cursor` with `content` pre-filled.
    pub fn open_text_editor(
        &mut self,
        cursor: Cursor,
        content: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.check_cursor(cursor)?;
        self.cursor = cursor;
        self.text_editor = TextEditor {
            open: true,
            pending: content.into(),
        };
        Ok(())
    }

    /// Write `content` wherever the cursor points, then close the editor.
    pub fn commit_text_edit(&mut self, content: impl Into<String>) -> Result<(), StoreError> {
        self.check_cursor(self.cursor)?;

        let content = content.into();
        match self.cursor {
            Cursor::Title => self.title = content,
            Cursor::Prompt { question } => self.questions[question].set_prompt(content),
            Cursor::Option { question, option } => {
                if let Some(options) = self.questions[question].options_mut() {
                    options[option] = content;
                }
            }
        }

        self.cursor = Cursor::Title;
        self.text_editor = TextEditor::default();
        Ok(())
    }

    /// Append a question of `kind` with its default content.
    pub fn add_question(&mut self, kind: QuestionKind) {
        tracing::debug!(%kind, position = self.questions.len(), "adding question");
        self.questions.push(Question::new(kind));
    }

    /// Remove the question at `index`. Later questions move up by one.
    ///
    /// The cursor is not adjusted and may point at a different question afterwards.
    pub fn remove_question(&mut self, index: usize) -> Result<Question, StoreError> {
        self.question(index)?;
        tracing::debug!(index, "removing question");
        Ok(self.questions.remove(index))
    }

    /// Swap the question at `index` with its neighbour in `direction`.
    pub fn shift_question(&mut self, index: usize, direction: Direction) -> Result<(), StoreError> {
        self.question(index)?;
        let len = self.questions.len();
        match index.checked_add_signed(direction.offset()) {
            Some(neighbour) if neighbour < len => {
                self.questions.swap(index, neighbour);
                Ok(())
            }
            _ => Err(StoreError::NoNeighbour {
                question: index,
                len,
            }),
        }
    }

    /// Insert an independent copy of the question at `index` right after it.
    pub fn copy_question(&mut self, index: usize) -> Result<(), StoreError> {
        let copy = self.question(index)?.clone();
        self.questions.insert(index + 1, copy);
        Ok(())
    }

    /// Append a default-labelled option to a choice question.
    pub fn add_option(&mut self, question: usize) -> Result<(), StoreError> {
        let options = self.options_mut(question)?;
        options.push(option_label(options.len() + 1));
        Ok(())
    }

    /// Remove one option from a choice question. The last option cannot be removed.
    pub fn remove_option(&mut self, question: usize, option: usize) -> Result<String, StoreError> {
        let options = self.options_mut(question)?;
        if option >= options.len() {
            return Err(StoreError::out_of_range("option", option, options.len()));
        }
        if options.len() == 1 {
            return Err(StoreError::LastOption { question });
        }
        Ok(options.remove(option))
    }

    /// Flip whether a free-text question must be answered.
    pub fn toggle_required(&mut self, question: usize) -> Result<(), StoreError> {
        match self.question_mut(question)? {
            Question::FreeText(text) => {
                text.is_required = !text.is_required;
                Ok(())
            }
            _ => Err(StoreError::NotFreeText { question }),
        }
    }

    /// Schedule the questionnaire for local midnight on the given date. `month` is 1-based.
    pub fn set_scheduled_at(&mut self, year: i32, month: u32, day: u32) -> Result<(), StoreError> {
        self.scheduled_at = ScheduledAt::local_midnight(year, month, day)
            .ok_or(StoreError::InvalidDate { year, month, day })?;
        Ok(())
    }

    /// The question the cursor points at, if any.
    pub fn active_question(&self) -> Option<usize> {
        self.cursor.active_question()
    }

    /// The option the cursor points at, if any.
    pub fn active_option(&self) -> Option<usize> {
        self.cursor.active_option()
    }

    fn question(&self, index: usize) -> Result<&Question, StoreError> {
        self.questions
            .get(index)
            .ok_or_else(|| StoreError::out_of_range("question", index, self.questions.len()))
    }

    fn question_mut(&mut self, index: usize) -> Result<&mut Question, StoreError> {
        let len = self.questions.len();
        self.questions
            .get_mut(index)
            .ok_or_else(|| StoreError::out_of_range("question", index, len))
    }

    fn options_mut(&mut self, question: usize) -> Result<&mut Vec<String>, StoreError> {
        self.question_mut(question)?
            .options_mut()
            .ok_or(StoreError::NotChoiceQuestion { question })
    }

    fn check_cursor(&self, cursor: Cursor) -> Result<(), StoreError> {
        match cursor {
            Cursor::Title => Ok(()),
            Cursor::Prompt { question } => self.question(question).map(|_| ()),
            Cursor::Option { question, option } => {
                let options = self
                    .question(question)?
                    .options()
                    .ok_or(StoreError::NotChoiceQuestion { question })?;
                if option < options.len() {
                    Ok(())
                } else {
                    Err(StoreError::out_of_range("option", option, options.len()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire_types::{ChoiceQuestion, FreeTextQuestion, Status};

    fn draft_with(kinds: &[QuestionKind]) -> Draft {
        let mut draft = Draft::begin_new(0, "Untitled");
        for &kind in kinds {
            draft.add_question(kind);
        }
        draft
    }

    fn prompts(draft: &Draft) -> Vec<&str> {
        draft.questions.iter().map(Question::prompt).collect()
    }

    #[test]
    fn begin_new_is_blank() {
        let draft = Draft::begin_new(3, "Untitled");
        assert_eq!(draft.source_index, 3);
        assert_eq!(draft.title, "Untitled");
        assert!(draft.questions.is_empty());
        assert!(draft.scheduled_at.is_unset());
        assert_eq!(draft.cursor, Cursor::Title);
        assert!(!draft.text_editor.open);
    }

    #[test]
    fn begin_edit_copies_entry() {
        let catalog = vec![
            Questionnaire::new("First", ScheduledAt::from_millis(10), Vec::new()),
            Questionnaire::new(
                "Second",
                ScheduledAt::from_millis(20),
                vec![Question::new(QuestionKind::MultiChoice)],
            )
            .with_status(Status::Released),
        ];

        let draft = Draft::begin_edit(&catalog, 1).unwrap();
        assert_eq!(draft.source_index, 1);
        assert_eq!(draft.title, "Second");
        assert_eq!(draft.scheduled_at, ScheduledAt::from_millis(20));
        assert_eq!(draft.questions, catalog[1].questions);
        assert_eq!(draft.cursor, Cursor::Title);
    }

    #[test]
    fn begin_edit_out_of_range() {
        let err = Draft::begin_edit(&[], 0).unwrap_err();
        assert!(matches!(err, StoreError::OutOfRange { index: 0, len: 0, .. }));
    }

    #[test]
    fn audience_toggle() {
        let mut draft = draft_with(&[]);
        draft.choose_audience_type();
        assert!(draft.restricted_audience);
        draft.choose_audience_type();
        assert!(!draft.restricted_audience);
    }

    #[test]
    fn cursor_from_indices() {
        assert_eq!(Cursor::from_indices(None, None), Cursor::Title);
        assert_eq!(Cursor::from_indices(None, Some(2)), Cursor::Title);
        assert_eq!(
            Cursor::from_indices(Some(1), None),
            Cursor::Prompt { question: 1 }
        );
        let cursor = Cursor::from_indices(Some(1), Some(2));
        assert_eq!(cursor.active_question(), Some(1));
        assert_eq!(cursor.active_option(), Some(2));
    }

    #[test]
    fn start_text_edit_opens_editor() {
        let mut draft = draft_with(&[QuestionKind::SingleChoice]);
        draft.start_text_edit(Some(0), Some(1), "Option2").unwrap();

        assert!(draft.text_editor.open);
        assert_eq!(draft.text_editor.pending, "Option2");
        assert_eq!(draft.active_question(), Some(0));
        assert_eq!(draft.active_option(), Some(1));
    }

    #[test]
    fn start_text_edit_writes_free_text_directly() {
        let mut draft = draft_with(&[QuestionKind::FreeText]);
        draft.start_text_edit(Some(0), Some(0), "Any comments?").unwrap();

        assert!(!draft.text_editor.open);
        assert_eq!(draft.cursor, Cursor::Title);
        assert_eq!(draft.questions[0].prompt(), "Any comments?");
    }

    #[test]
    fn start_text_edit_on_free_text_prompt_opens_editor() {
        let mut draft = draft_with(&[QuestionKind::FreeText]);
        draft.start_text_edit(Some(0), None, "").unwrap();
        assert!(draft.text_editor.open);
        assert_eq!(draft.cursor, Cursor::Prompt { question: 0 });
    }

    #[test]
    fn set_free_text_answer_rejects_choice() {
        let mut draft = draft_with(&[QuestionKind::SingleChoice]);
        let err = draft.set_free_text_answer(0, "x").unwrap_err();
        assert!(matches!(err, StoreError::NotFreeText { question: 0 }));
        assert_eq!(draft.questions[0].prompt(), "Single choice");
    }

    #[test]
    fn open_text_editor_checks_target() {
        let mut draft = draft_with(&[QuestionKind::FreeText]);
        let err = draft
            .open_text_editor(Cursor::Option { question: 0, option: 0 }, "")
            .unwrap_err();
        assert!(matches!(err, StoreError::NotChoiceQuestion { question: 0 }));

        let err = draft
            .open_text_editor(Cursor::Prompt { question: 5 }, "")
            .unwrap_err();
        assert!(matches!(err, StoreError::OutOfRange { index: 5, .. }));
        assert!(!draft.text_editor.open);
    }

    #[test]
    fn commit_text_edit_to_title() {
        let mut draft = draft_with(&[]);
        draft.open_text_editor(Cursor::Title, "Untitled").unwrap();
        draft.commit_text_edit("Lunch survey").unwrap();

        assert_eq!(draft.title, "Lunch survey");
        assert!(!draft.text_editor.open);
        assert!(draft.text_editor.pending.is_empty());
    }

    #[test]
    fn commit_text_edit_to_prompt_and_option() {
        let mut draft = draft_with(&[QuestionKind::SingleChoice]);

        draft
            .open_text_editor(Cursor::Prompt { question: 0 }, "Single choice")
            .unwrap();
        draft.commit_text_edit("Favourite colour?").unwrap();
        assert_eq!(draft.cursor, Cursor::Title);

        draft
            .open_text_editor(Cursor::Option { question: 0, option: 1 }, "Option2")
            .unwrap();
        draft.commit_text_edit("Blue").unwrap();

        assert_eq!(draft.questions[0].prompt(), "Favourite colour?");
        assert_eq!(draft.questions[0].options().unwrap(), &["Option1", "Blue"]);
        assert_eq!(draft.cursor, Cursor::Title);
    }

    #[test]
    fn commit_text_edit_with_stale_cursor() {
        let mut draft = draft_with(&[QuestionKind::SingleChoice, QuestionKind::FreeText]);
        draft
            .open_text_editor(Cursor::Prompt { question: 1 }, "")
            .unwrap();
        draft.remove_question(1).unwrap();

        let err = draft.commit_text_edit("lost").unwrap_err();
        assert!(matches!(err, StoreError::OutOfRange { index: 1, len: 1, .. }));
        assert!(draft.text_editor.open);
    }

    #[test]
    fn remove_question_keeps_order() {
        let mut draft = draft_with(&[
            QuestionKind::SingleChoice,
            QuestionKind::MultiChoice,
            QuestionKind::FreeText,
        ]);
        let removed = draft.remove_question(1).unwrap();

        assert_eq!(removed.kind(), QuestionKind::MultiChoice);
        assert_eq!(prompts(&draft), vec!["Single choice", ""]);
    }

    #[test]
    fn remove_question_out_of_range() {
        let mut draft = draft_with(&[QuestionKind::FreeText]);
        assert!(draft.remove_question(1).is_err());
        assert_eq!(draft.questions.len(), 1);
    }

    #[test]
    fn remove_question_leaves_cursor() {
        let mut draft = draft_with(&[QuestionKind::SingleChoice, QuestionKind::MultiChoice]);
        draft
            .open_text_editor(Cursor::Prompt { question: 1 }, "")
            .unwrap();
        draft.remove_question(0).unwrap();
        assert_eq!(draft.active_question(), Some(1));
    }

    #[test]
    fn shift_question_swaps_neighbours() {
        let mut draft = draft_with(&[
            QuestionKind::SingleChoice,
            QuestionKind::MultiChoice,
            QuestionKind::FreeText,
        ]);

        draft.shift_question(0, Direction::Down).unwrap();
        assert_eq!(
            prompts(&draft),
            vec!["Multiple choice", "Single choice", ""]
        );

        draft.shift_question(2, Direction::Up).unwrap();
        assert_eq!(
            prompts(&draft),
            vec!["Multiple choice", "", "Single choice"]
        );
    }

    #[test]
    fn shift_question_past_ends() {
        let mut draft = draft_with(&[QuestionKind::SingleChoice, QuestionKind::FreeText]);
        let before = draft.clone();

        assert!(matches!(
            draft.shift_question(0, Direction::Up),
            Err(StoreError::NoNeighbour { question: 0, len: 2 })
        ));
        assert!(matches!(
            draft.shift_question(1, Direction::Down),
            Err(StoreError::NoNeighbour { question: 1, len: 2 })
        ));
        assert!(matches!(
            draft.shift_question(2, Direction::Up),
            Err(StoreError::OutOfRange { index: 2, len: 2, .. })
        ));
        assert_eq!(draft, before);
    }

    #[test]
    fn copy_question_is_independent() {
        let mut draft = draft_with(&[QuestionKind::SingleChoice, QuestionKind::FreeText]);
        draft.copy_question(0).unwrap();

        assert_eq!(draft.questions.len(), 3);
        assert_eq!(draft.questions[0], draft.questions[1]);
        assert_eq!(draft.questions[2].kind(), QuestionKind::FreeText);

        draft.add_option(1).unwrap();
        draft
            .open_text_editor(Cursor::Option { question: 1, option: 0 }, "")
            .unwrap();
        draft.commit_text_edit("Changed").unwrap();

        assert_eq!(draft.questions[0].options().unwrap(), &["Option1", "Option2"]);
        assert_eq!(
            draft.questions[1].options().unwrap(),
            &["Changed", "Option2", "Option3"]
        );
    }

    #[test]
    fn add_option_labels_by_position() {
        let mut draft = draft_with(&[QuestionKind::MultiChoice]);
        draft.add_option(0).unwrap();
        assert_eq!(draft.questions[0].options().unwrap()[4], "Option5");
    }

    #[test]
    fn option_operations_require_choice() {
        let mut draft = draft_with(&[QuestionKind::FreeText]);
        assert!(matches!(
            draft.add_option(0),
            Err(StoreError::NotChoiceQuestion { question: 0 })
        ));
        assert!(matches!(
            draft.remove_option(0, 0),
            Err(StoreError::NotChoiceQuestion { question: 0 })
        ));
    }

    #[test]
    fn remove_option_by_position() {
        let mut draft = draft_with(&[QuestionKind::MultiChoice]);
        let removed = draft.remove_option(0, 1).unwrap();
        assert_eq!(removed, "Option2");
        assert_eq!(
            draft.questions[0].options().unwrap(),
            &["Option1", "Option3", "Option4"]
        );
        assert!(matches!(
            draft.remove_option(0, 3),
            Err(StoreError::OutOfRange { index: 3, len: 3, .. })
        ));
    }

    #[test]
    fn remove_last_option_is_refused() {
        let mut draft = Draft::begin_new(0, "Untitled");
        draft
            .questions
            .push(Question::SingleChoice(ChoiceQuestion::new("Only", vec!["Yes".into()]).unwrap()));

        assert!(matches!(
            draft.remove_option(0, 0),
            Err(StoreError::LastOption { question: 0 })
        ));
        assert_eq!(draft.questions[0].options().unwrap(), &["Yes"]);
    }

    #[test]
    fn toggle_required_twice_restores() {
        let mut draft = Draft::begin_new(0, "Untitled");
        draft
            .questions
            .push(Question::FreeText(FreeTextQuestion::new("Why?", true)));

        draft.toggle_required(0).unwrap();
        assert_eq!(draft.questions[0].is_required(), Some(false));
        draft.toggle_required(0).unwrap();
        assert_eq!(draft.questions[0].is_required(), Some(true));
    }

    #[test]
    fn toggle_required_rejects_choice() {
        let mut draft = draft_with(&[QuestionKind::SingleChoice]);
        assert!(matches!(
            draft.toggle_required(0),
            Err(StoreError::NotFreeText { question: 0 })
        ));
    }

    #[test]
    fn set_scheduled_at_local_midnight() {
        let mut draft = draft_with(&[]);
        draft.set_scheduled_at(2016, 4, 18).unwrap();
        assert_eq!(
            draft.scheduled_at,
            ScheduledAt::local_midnight(2016, 4, 18).unwrap()
        );

        let err = draft.set_scheduled_at(2016, 2, 30).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDate { month: 2, day: 30, .. }));
        assert_eq!(
            draft.scheduled_at,
            ScheduledAt::local_midnight(2016, 4, 18).unwrap()
        );
    }
}
