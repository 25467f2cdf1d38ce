//! Console text rendering.
//!
//! # Layout
//! ```text
//! <title>
//!
//! ДЕТСКАЯ МЕЧТА
//! <name, role, field, qualities>
//!
//! ВЗРОСЛАЯ РОЛЬ
//! <role, description, field, stack, kept qualities>
//!
//! <note>
//!
//! Комментарий:
//! <comment>
//! ```
//!
//! # Design Decisions
//! - Colour is optional; plain mode emits the same text without escapes
//! - Persistence is always highlighted, wherever it appears

use std::fmt::Write;

use colored::{Color, Colorize};

use crate::dream::model::{Quality, QUALITY_PERSISTENCE};
use crate::dream::presenter::{ViewModel, NOTE_SEPARATOR};
use crate::errors::{AppError, AppResult, Code};

pub trait Formatter: Send + Sync {
    fn format(&self, vm: &ViewModel) -> AppResult<String>;
}

/// Style of one kind of text.
#[derive(Debug, Clone, Copy)]
struct Paint {
    color: Color,
    bold: bool,
    italic: bool,
}

impl Paint {
    const fn new(color: Color) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
        }
    }

    const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

struct Scheme {
    title: Paint,
    childhood_section: Paint,
    adult_section: Paint,
    label: Paint,
    value: Paint,
    quality: Paint,
    persistence: Paint,
    stack: Paint,
    note: Paint,
    comment: Paint,
    bullet: Paint,
    secondary: Paint,
}

const SCHEME: Scheme = Scheme {
    title: Paint::new(Color::Cyan).bold(),
    childhood_section: Paint::new(Color::Yellow).bold(),
    adult_section: Paint::new(Color::Green).bold(),
    label: Paint::new(Color::White).bold(),
    value: Paint::new(Color::BrightWhite),
    quality: Paint::new(Color::BrightCyan),
    persistence: Paint::new(Color::BrightRed).bold(),
    stack: Paint::new(Color::BrightMagenta),
    note: Paint::new(Color::BrightBlue),
    comment: Paint::new(Color::BrightYellow).italic(),
    bullet: Paint::new(Color::BrightGreen),
    secondary: Paint::new(Color::BrightBlack),
};

#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Formatter that never emits escape sequences.
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, paint: Paint) -> String {
        if !self.colored {
            return text.to_string();
        }
        let mut styled = text.color(paint.color);
        if paint.bold {
            styled = styled.bold();
        }
        if paint.italic {
            styled = styled.italic();
        }
        styled.to_string()
    }

    fn quality_paint(quality: &Quality) -> Paint {
        if quality.is_persistence() {
            SCHEME.persistence
        } else {
            SCHEME.quality
        }
    }

    fn write_title(&self, out: &mut String, vm: &ViewModel) -> std::fmt::Result {
        if !vm.title().is_empty() {
            write!(out, "{}\n\n", self.paint(vm.title(), SCHEME.title))?;
        }
        Ok(())
    }

    fn write_qualities(&self, out: &mut String, label: &str, qualities: &[Quality]) -> std::fmt::Result {
        if qualities.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", self.paint(label, SCHEME.label))?;
        for q in qualities {
            writeln!(
                out,
                "  {} {} {} {}",
                self.paint("•", SCHEME.bullet),
                self.paint(q.name(), Self::quality_paint(q)),
                self.paint("—", SCHEME.secondary),
                self.paint(q.description(), SCHEME.value),
            )?;
        }
        Ok(())
    }

    fn write_labeled(&self, out: &mut String, label: &str, value: &str) -> std::fmt::Result {
        writeln!(
            out,
            "{} {}",
            self.paint(label, SCHEME.label),
            self.paint(value, SCHEME.value)
        )
    }

    fn write_field(&self, out: &mut String, name: &str, environment: &str) -> std::fmt::Result {
        writeln!(
            out,
            "{} {} {}",
            self.paint("Поле:", SCHEME.label),
            self.paint(name, SCHEME.value),
            self.paint(&format!("({})", environment), SCHEME.secondary),
        )
    }

    fn write_childhood(&self, out: &mut String, vm: &ViewModel) -> std::fmt::Result {
        let child = vm.childhood();
        writeln!(out, "{}", self.paint("ДЕТСКАЯ МЕЧТА", SCHEME.childhood_section))?;
        writeln!(out, "{}", self.paint("-----------------", SCHEME.childhood_section))?;
        self.write_labeled(out, "Название:", child.display_name())?;
        self.write_labeled(out, "Роль:", child.desired_role())?;
        self.write_field(out, child.field().name(), child.field().environment())?;
        self.write_qualities(out, "Качества:", child.qualities())
    }

    fn write_adult(&self, out: &mut String, vm: &ViewModel) -> std::fmt::Result {
        let adult = vm.adult();
        writeln!(out, "{}", self.paint("ВЗРОСЛАЯ РОЛЬ", SCHEME.adult_section))?;
        writeln!(out, "{}", self.paint("--------------", SCHEME.adult_section))?;
        self.write_labeled(out, "Роль:", adult.role_title())?;
        if !adult.role_description().is_empty() {
            self.write_labeled(out, "Описание:", adult.role_description())?;
        }
        self.write_field(out, adult.field().name(), adult.field().environment())?;

        if !adult.stack().is_empty() {
            writeln!(out, "{}", self.paint("Стек:", SCHEME.label))?;
            for item in adult.stack() {
                writeln!(
                    out,
                    "  {} {}",
                    self.paint("•", SCHEME.bullet),
                    self.paint(item, SCHEME.stack)
                )?;
            }
        }

        self.write_qualities(out, "Сохранённые качества:", adult.traits())
    }

    fn write_note(&self, out: &mut String, vm: &ViewModel) -> std::fmt::Result {
        let note = vm.note();
        if note.is_empty() {
            return Ok(());
        }
        out.push('\n');
        match note.split_once(NOTE_SEPARATOR) {
            Some((counter, remark)) if note.contains(QUALITY_PERSISTENCE) => {
                out.push_str(&self.paint(counter, SCHEME.note));
                out.push_str(NOTE_SEPARATOR);
                out.push_str(&self.paint(remark, SCHEME.persistence));
            }
            _ => out.push_str(&self.paint(note, SCHEME.note)),
        }
        out.push('\n');
        Ok(())
    }

    fn write_comment(&self, out: &mut String, vm: &ViewModel) -> std::fmt::Result {
        let comment = vm.adult().comment();
        if comment.is_empty() {
            return Ok(());
        }
        out.push('\n');
        writeln!(out, "{}", self.paint("Комментарий:", SCHEME.label))?;
        writeln!(out, "{}", self.paint(comment, SCHEME.comment))
    }

    fn render(&self, vm: &ViewModel) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        self.write_title(&mut out, vm)?;
        self.write_childhood(&mut out, vm)?;
        out.push('\n');
        self.write_adult(&mut out, vm)?;
        self.write_note(&mut out, vm)?;
        self.write_comment(&mut out, vm)?;
        Ok(out)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for TextFormatter {
    fn format(&self, vm: &ViewModel) -> AppResult<String> {
        self.render(vm)
            .map_err(|e| AppError::wrap(e, Code::Internal, "failed to render view model"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dream::model::{ChildhoodDream, Role};
    use crate::dream::presenter::{ConsolePresenter, Presenter};
    use crate::dream::transformer::{RoleTransformer, Transformer};
    use crate::dream::usecase::TransformOutput;

    fn view_model(role: Role) -> ViewModel {
        let child = ChildhoodDream::default_footballer().unwrap();
        let adult = RoleTransformer::new(role).transform(&child).unwrap();
        ConsolePresenter
            .present(TransformOutput::new(child, adult))
            .unwrap()
    }

    #[test]
    fn test_plain_output_sections() {
        let text = TextFormatter::plain().format(&view_model(Role::Developer)).unwrap();

        assert!(text.starts_with("field-switcher — трансформация мечты\n\nДЕТСКАЯ МЕЧТА\n"));
        assert!(text.contains("Название: Футболист\n"));
        assert!(text.contains("Поле: Футбольное поле (Стадион, команда, трибуны)\n"));
        assert!(text.contains("  • Упорство — Не останавливаться"));
        assert!(text.contains("\nВЗРОСЛАЯ РОЛЬ\n--------------\nРоль: Разработчик\n"));
        assert!(text.contains("Стек:\n  • Go\n  • Git\n  • Microservices\n"));
        assert!(text.contains("Сохранённые качества:\n"));
        assert!(text.contains("\nСохранено качеств: 5 | Упорство — твой главный союзник на новом поле\n"));
        assert!(text.ends_with("Твоё упорство осталось с тобой.\n"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_colored_output_emits_escapes() {
        colored::control::set_override(true);
        let text = TextFormatter::new(true).format(&view_model(Role::TeamLead)).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("Тимлид"));
    }
}
