use questionnaire_types::StoreError;

use crate::{Catalog, Cursor, Draft, Intent, StoreConfig};

/// Side effect a transition asks the driver to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the stored catalog with the current one.
    PersistCatalog,
}

/// The whole state of the authoring tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub catalog: Catalog,
    pub draft: Draft,
}

impl AppState {
    /// Start from `catalog` with a blank draft that appends to it.
    pub fn new(catalog: Catalog, config: &StoreConfig) -> Self {
        let draft = Draft::begin_new(catalog.len(), config.default_title.as_str());
        Self { catalog, draft }
    }

    /// Apply one intent.
    ///
    /// Runs to completion without I/O. On error the state is unchanged.
    /// Catalog commits return [`Effect::PersistCatalog`].
    pub fn apply(
        &mut self,
        intent: Intent,
        config: &StoreConfig,
    ) -> Result<Option<Effect>, StoreError> {
        let draft = &mut self.draft;
        match intent {
            Intent::BeginNew => {
                *draft = Draft::begin_new(self.catalog.len(), config.default_title.as_str());
            }
            Intent::BeginEdit { index } => {
                *draft = Draft::begin_edit(self.catalog.as_slice(), index)?;
            }
            Intent::SetTitle { title } => draft.set_title(title),
            Intent::ChooseAudienceType => draft.choose_audience_type(),
            Intent::StartTextEdit {
                question,
                option,
                content,
            } => draft.start_text_edit(question, option, content)?,
            Intent::OpenTextEditor {
                question,
                option,
                content,
            } => draft.open_text_editor(Cursor::from_indices(question, option), content)?,
            Intent::SetFreeTextAnswer { question, content } => {
                draft.set_free_text_answer(question, content)?;
            }
            Intent::CommitTextEdit { content } => draft.commit_text_edit(content)?,
            Intent::AddQuestion { kind } => draft.add_question(kind),
            Intent::RemoveQuestion { index } => {
                draft.remove_question(index)?;
            }
            Intent::ShiftQuestion { index, direction } => draft.shift_question(index, direction)?,
            Intent::CopyQuestion { index } => draft.copy_question(index)?,
            Intent::AddOption { question } => draft.add_option(question)?,
            Intent::RemoveOption { question, option } => {
                draft.remove_option(question, option)?;
            }
            Intent::ToggleRequired { question } => draft.toggle_required(question)?,
            Intent::SetScheduledAt { year, month, day } => {
                draft.set_scheduled_at(year, month, day)?;
            }
            Intent::Save => {
                self.catalog.save(draft)?;
                return Ok(Some(Effect::PersistCatalog));
            }
            Intent::Release => {
                self.catalog.release(draft)?;
                return Ok(Some(Effect::PersistCatalog));
            }
            Intent::Remove { index } => {
                self.catalog.remove(index)?;
                return Ok(Some(Effect::PersistCatalog));
            }
        }
        Ok(None)
    }
}
