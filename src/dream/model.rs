//! Dream domain value objects.
//!
//! All constructors validate their input and return `VALIDATION` errors;
//! accessors hand out borrowed slices so callers cannot mutate the objects.

use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, AppResult, Code};

pub const QUALITY_PERSISTENCE: &str = "Упорство";
pub const QUALITY_PERSISTENCE_DESC: &str =
    "Не останавливаться перед препятствиями, продолжать путь несмотря ни на что";

pub const QUALITY_TEAM_SPIRIT: &str = "Командный дух";
pub const QUALITY_TEAM_SPIRIT_DESC: &str = "Играть ради общего результата";
pub const QUALITY_PLAY_TO_WHISTLE: &str = "Игра до финального свистка";
pub const QUALITY_PLAY_TO_WHISTLE_DESC: &str = "Не сдаваться до конца";
pub const QUALITY_RESILIENCE: &str = "Умение держать удар";
pub const QUALITY_RESILIENCE_DESC: &str = "Переживать промахи и критику";
pub const QUALITY_GOAL_ORIENTED: &str = "Стремление забивать";
pub const QUALITY_GOAL_ORIENTED_DESC: &str = "Ориентированность на результат";

pub const DEV_FIELD_NAME: &str = "Поле разработки";
pub const DEV_FIELD_ENVIRONMENT: &str = "Команда разработчиков, репозитории, прод-среда";

pub const FOOTBALL_FIELD_NAME: &str = "Футбольное поле";
pub const FOOTBALL_FIELD_ENVIRONMENT: &str = "Стадион, команда, трибуны";
pub const FOOTBALLER_DISPLAY_NAME: &str = "Футболист";
pub const FOOTBALLER_DESIRED_ROLE: &str = "Полевой игрок";

/// Kind of childhood dream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DreamKind {
    Footballer,
}

impl fmt::Display for DreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DreamKind::Footballer => f.write_str("footballer"),
        }
    }
}

/// Adult role a dream is transformed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    TeamLead,
    Developer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::TeamLead => "team_lead",
            Role::Developer => "developer",
        }
    }

    /// Narrative profile of the role.
    pub fn profile(&self) -> RoleProfile {
        match self {
            Role::TeamLead => RoleProfile::new("Тимлид")
                .with_description(
                    "Капитан команды на новом поле: вместо капитанской повязки — \
                     ответственность за команду, вместо тактики на поле — архитектура и процессы. \
                     Твоё упорство превратилось в настойчивость в решении сложных задач и поддержку команды.",
                )
                .with_comment(
                    "Ты не отказался от мечты — ты просто сменил поле и стал капитаном команды. \
                     Твоё упорство привело тебя сюда.",
                )
                .with_stack([
                    "System Design",
                    "Team Leadership",
                    "Agile/Scrum",
                    "Code Review",
                    "CI/CD",
                    "Monitoring & Observability",
                    "Technical Documentation",
                ]),
            Role::Developer => RoleProfile::new("Разработчик")
                .with_description(
                    "Игрок на новом поле: вместо бутс — клавиатура, вместо газона — код. \
                     Твоё упорство помогает преодолевать баги и дедлайны, как когда-то ты преодолевал защиту соперника.",
                )
                .with_comment(
                    "Ты не отказался от мечты — ты просто сменил поле. Ты всё ещё в игре. \
                     Твоё упорство осталось с тобой.",
                )
                .with_stack(["Go", "Git", "Microservices"]),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team_lead" => Ok(Role::TeamLead),
            "developer" => Ok(Role::Developer),
            other => Err(AppError::domain(format!("unsupported role: {}", other))),
        }
    }
}

/// Title, description, closing comment and tech stack of a role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleProfile {
    title: String,
    description: String,
    comment: String,
    stack: Vec<String>,
}

impl RoleProfile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_stack<I, S>(mut self, stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stack = stack.into_iter().map(Into::into).collect();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn stack(&self) -> &[String] {
        &self.stack
    }
}

/// A personal quality carried from childhood into adulthood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quality {
    name: String,
    description: String,
}

impl Quality {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AppError::validation("quality name cannot be empty"));
        }
        Ok(Self {
            name,
            description: description.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_persistence(&self) -> bool {
        self.name == QUALITY_PERSISTENCE
    }
}

/// Where the game is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    environment: String,
}

impl Field {
    pub fn new(name: impl Into<String>, environment: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AppError::validation("field name cannot be empty"));
        }
        Ok(Self {
            name,
            environment: environment.into(),
        })
    }

    pub fn development() -> AppResult<Self> {
        Self::new(DEV_FIELD_NAME, DEV_FIELD_ENVIRONMENT)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildhoodDream {
    kind: DreamKind,
    display_name: String,
    desired_role: String,
    field: Field,
    qualities: Vec<Quality>,
}

impl ChildhoodDream {
    pub fn new(
        kind: DreamKind,
        display_name: impl Into<String>,
        desired_role: impl Into<String>,
        field: Field,
        qualities: Vec<Quality>,
    ) -> AppResult<Self> {
        let display_name = display_name.into();
        let desired_role = desired_role.into();
        if display_name.is_empty() {
            return Err(AppError::validation("display name cannot be empty"));
        }
        if desired_role.is_empty() {
            return Err(AppError::validation("desired role cannot be empty"));
        }
        if qualities.is_empty() {
            return Err(AppError::validation("qualities cannot be empty"));
        }
        Ok(Self {
            kind,
            display_name,
            desired_role,
            field,
            qualities,
        })
    }

    /// The footballer dream rendered by the application.
    pub fn default_footballer() -> AppResult<Self> {
        let field = Field::new(FOOTBALL_FIELD_NAME, FOOTBALL_FIELD_ENVIRONMENT)
            .map_err(|e| AppError::wrap(e, Code::DomainFailure, "failed to create default field"))?;

        let qualities = [
            (QUALITY_TEAM_SPIRIT, QUALITY_TEAM_SPIRIT_DESC),
            (QUALITY_PLAY_TO_WHISTLE, QUALITY_PLAY_TO_WHISTLE_DESC),
            (QUALITY_RESILIENCE, QUALITY_RESILIENCE_DESC),
            (QUALITY_GOAL_ORIENTED, QUALITY_GOAL_ORIENTED_DESC),
            (QUALITY_PERSISTENCE, QUALITY_PERSISTENCE_DESC),
        ]
        .into_iter()
        .map(|(name, desc)| {
            Quality::new(name, desc).map_err(|e| {
                AppError::wrap(
                    e,
                    Code::DomainFailure,
                    format!("failed to create quality: {}", name),
                )
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

        Self::new(
            DreamKind::Footballer,
            FOOTBALLER_DISPLAY_NAME,
            FOOTBALLER_DESIRED_ROLE,
            field,
            qualities,
        )
        .map_err(|e| {
            AppError::wrap(
                e,
                Code::DomainFailure,
                "failed to create default footballer dream",
            )
        })
    }

    pub fn kind(&self) -> DreamKind {
        self.kind
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn desired_role(&self) -> &str {
        &self.desired_role
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn qualities(&self) -> &[Quality] {
        &self.qualities
    }
}

/// Who the dreamer became.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adult {
    role_title: String,
    role_description: String,
    field: Field,
    stack: Vec<String>,
    traits: Vec<Quality>,
    comment: String,
}

impl Adult {
    pub fn new(
        role_title: impl Into<String>,
        role_description: impl Into<String>,
        field: Field,
        stack: Vec<String>,
        traits: Vec<Quality>,
        comment: impl Into<String>,
    ) -> AppResult<Self> {
        let role_title = role_title.into();
        if role_title.is_empty() {
            return Err(AppError::validation("role title cannot be empty"));
        }
        Ok(Self {
            role_title,
            role_description: role_description.into(),
            field,
            stack,
            traits,
            comment: comment.into(),
        })
    }

    pub fn role_title(&self) -> &str {
        &self.role_title
    }

    pub fn role_description(&self) -> &str {
        &self.role_description
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    pub fn traits(&self) -> &[Quality] {
        &self.traits
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn has_persistence(&self) -> bool {
        self.traits.iter().any(Quality::is_persistence)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} — {}. Поле: {} ({}). Качества: {}",
            self.role_title,
            self.role_description,
            self.field.name(),
            self.field.environment(),
            self.traits.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::code_of;

    #[test]
    fn test_empty_names_rejected() {
        let err = Quality::new("", "desc").unwrap_err();
        assert_eq!(err.code(), Code::Validation);

        let err = Field::new("", "env").unwrap_err();
        assert_eq!(err.to_string(), "field name cannot be empty");
    }

    #[test]
    fn test_childhood_dream_requires_qualities() {
        let field = Field::new("Поле", "").unwrap();
        let err = ChildhoodDream::new(DreamKind::Footballer, "Футболист", "Игрок", field, vec![])
            .unwrap_err();
        assert_eq!(err.to_string(), "qualities cannot be empty");
    }

    #[test]
    fn test_childhood_dream_requires_desired_role() {
        let field = Field::new("Поле", "").unwrap();
        let quality = Quality::new("Скорость", "").unwrap();
        let err = ChildhoodDream::new(DreamKind::Footballer, "Футболист", "", field, vec![quality])
            .unwrap_err();
        assert_eq!(code_of(&err), Code::Validation);
    }

    #[test]
    fn test_default_footballer() {
        let dream = ChildhoodDream::default_footballer().unwrap();
        assert_eq!(dream.kind(), DreamKind::Footballer);
        assert_eq!(dream.display_name(), FOOTBALLER_DISPLAY_NAME);
        assert_eq!(dream.field().name(), FOOTBALL_FIELD_NAME);
        assert_eq!(dream.qualities().len(), 5);
        assert!(dream.qualities().iter().any(Quality::is_persistence));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("team_lead".parse::<Role>().unwrap(), Role::TeamLead);
        assert_eq!("developer".parse::<Role>().unwrap(), Role::Developer);

        let err = "captain".parse::<Role>().unwrap_err();
        assert_eq!(err.code(), Code::DomainFailure);
        assert_eq!(err.to_string(), "unsupported role: captain");
    }

    #[test]
    fn test_role_profiles_have_stack() {
        for role in [Role::TeamLead, Role::Developer] {
            let profile = role.profile();
            assert!(!profile.title().is_empty());
            assert!(!profile.stack().is_empty());
        }
        assert_eq!(Role::TeamLead.profile().title(), "Тимлид");
    }

    #[test]
    fn test_adult_requires_title() {
        let field = Field::development().unwrap();
        let err = Adult::new("", "", field, vec![], vec![], "").unwrap_err();
        assert_eq!(err.to_string(), "role title cannot be empty");
    }

    #[test]
    fn test_adult_summary() {
        let field = Field::development().unwrap();
        let traits = vec![Quality::new(QUALITY_PERSISTENCE, "").unwrap()];
        let adult = Adult::new("Тимлид", "Капитан", field, vec![], traits, "").unwrap();

        assert!(adult.has_persistence());
        assert_eq!(
            adult.summary(),
            "Тимлид — Капитан. Поле: Поле разработки (Команда разработчиков, репозитории, прод-среда). Качества: 1"
        );
    }
}
