//! Presentation of a transform result as a console view model.

use crate::dream::model::{Adult, ChildhoodDream, QUALITY_PERSISTENCE};
use crate::dream::usecase::TransformOutput;
use crate::errors::{AppError, AppResult};

pub const CONSOLE_TITLE: &str = "field-switcher — трансформация мечты";

/// Separator between the counter and the persistence remark in a note.
pub const NOTE_SEPARATOR: &str = " | ";

#[derive(Debug, Clone)]
pub struct ViewModel {
    title: String,
    childhood: ChildhoodDream,
    adult: Adult,
    note: String,
}

impl ViewModel {
    pub fn new(
        title: impl Into<String>,
        childhood: ChildhoodDream,
        adult: Adult,
        note: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            childhood,
            adult,
            note: note.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn childhood(&self) -> &ChildhoodDream {
        &self.childhood
    }

    pub fn adult(&self) -> &Adult {
        &self.adult
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

pub trait Presenter: Send + Sync {
    fn present(&self, output: TransformOutput) -> AppResult<ViewModel>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn present(&self, output: TransformOutput) -> AppResult<ViewModel> {
        if output.adult().role_title().is_empty() {
            return Err(AppError::domain("adult identity has empty role title"));
        }
        if output.child().display_name().is_empty() {
            return Err(AppError::domain("childhood dream has empty display name"));
        }

        let adult = output.adult();
        let mut note = format!("Сохранено качеств: {}", adult.traits().len());
        if adult.has_persistence() {
            note.push_str(NOTE_SEPARATOR);
            note.push_str(QUALITY_PERSISTENCE);
            note.push_str(" — твой главный союзник на новом поле");
        }

        Ok(ViewModel::new(
            CONSOLE_TITLE,
            output.child().clone(),
            adult.clone(),
            note,
        ))
    }
}
