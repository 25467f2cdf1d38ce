//! Dream transformation.

use crate::dream::model::{Adult, ChildhoodDream, DreamKind, Field, Role};
use crate::errors::{AppError, AppResult, Code};

/// Turns a childhood dream into an adult identity.
pub trait Transformer: Send + Sync {
    fn transform(&self, dream: &ChildhoodDream) -> AppResult<Adult>;
}

/// Maps every supported dream onto one target role on the development field.
#[derive(Debug, Clone, Copy)]
pub struct RoleTransformer {
    target: Role,
}

impl RoleTransformer {
    pub fn new(target: Role) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Role {
        self.target
    }

    fn transform_footballer(&self, dream: &ChildhoodDream) -> AppResult<Adult> {
        let field = Field::development()
            .map_err(|e| AppError::wrap(e, Code::DomainFailure, "failed to create dev field"))?;

        let profile = self.target.profile();
        if profile.stack().is_empty() {
            return Err(AppError::domain("role profile must have a non-empty stack"));
        }

        Adult::new(
            profile.title(),
            profile.description(),
            field,
            profile.stack().to_vec(),
            dream.qualities().to_vec(),
            profile.comment(),
        )
        .map_err(|e| AppError::wrap(e, Code::DomainFailure, "failed to create adult identity"))
    }
}

impl Transformer for RoleTransformer {
    fn transform(&self, dream: &ChildhoodDream) -> AppResult<Adult> {
        match dream.kind() {
            DreamKind::Footballer => self.transform_footballer(dream),
        }
    }
}
