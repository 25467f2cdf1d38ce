//! Transform use case: validate input, transform, package the result.

use std::sync::Arc;

use crate::dream::model::{Adult, ChildhoodDream};
use crate::dream::transformer::Transformer;
use crate::errors::{AppError, AppResult, Code};

#[derive(Debug, Clone)]
pub struct TransformInput {
    child: ChildhoodDream,
}

impl TransformInput {
    pub fn new(child: ChildhoodDream) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &ChildhoodDream {
        &self.child
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.child.display_name().is_empty() {
            return Err(AppError::validation("childhood dream has no display name"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TransformOutput {
    child: ChildhoodDream,
    adult: Adult,
}

impl TransformOutput {
    pub fn new(child: ChildhoodDream, adult: Adult) -> Self {
        Self { child, adult }
    }

    pub fn child(&self) -> &ChildhoodDream {
        &self.child
    }

    pub fn adult(&self) -> &Adult {
        &self.adult
    }
}

pub struct TransformUseCase {
    transformer: Arc<dyn Transformer>,
}

impl TransformUseCase {
    pub fn new(transformer: Arc<dyn Transformer>) -> Self {
        Self { transformer }
    }

    pub fn execute(&self, input: TransformInput) -> AppResult<TransformOutput> {
        input.validate().map_err(|e| {
            AppError::wrap(e, Code::Validation, "invalid input for transform use case")
        })?;

        let adult = self.transformer.transform(input.child()).map_err(|e| {
            AppError::wrap(e, Code::DomainFailure, "transformer failed to process dream")
        })?;

        Ok(TransformOutput::new(input.child, adult))
    }
}
