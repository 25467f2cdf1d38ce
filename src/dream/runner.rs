//! Console runner: use case → presenter → formatter → writer.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::dream::formatter::Formatter;
use crate::dream::model::ChildhoodDream;
use crate::dream::presenter::Presenter;
use crate::dream::usecase::{TransformInput, TransformUseCase};
use crate::errors::{AppError, AppResult, Code};

/// Shared output sink.
pub type Output = Arc<Mutex<Box<dyn Write + Send>>>;

pub struct ConsoleRunner {
    usecase: TransformUseCase,
    presenter: Arc<dyn Presenter>,
    formatter: Arc<dyn Formatter>,
    out: Output,
}

impl ConsoleRunner {
    pub fn new(
        usecase: TransformUseCase,
        presenter: Arc<dyn Presenter>,
        formatter: Arc<dyn Formatter>,
        out: Output,
    ) -> Self {
        Self {
            usecase,
            presenter,
            formatter,
            out,
        }
    }

    /// Render `child` to the output.
    pub fn run(&self, child: ChildhoodDream) -> AppResult<()> {
        let output = self
            .usecase
            .execute(TransformInput::new(child))
            .map_err(|e| AppError::wrap(e, Code::DomainFailure, "use case execution failed"))?;

        let vm = self
            .presenter
            .present(output)
            .map_err(|e| AppError::wrap(e, Code::Internal, "presenter failed"))?;

        let text = self
            .formatter
            .format(&vm)
            .map_err(|e| AppError::wrap(e, Code::Internal, "formatter failed"))?;

        tracing::debug!(bytes = text.len(), "Writing rendered dream");

        let mut out = self
            .out
            .lock()
            .map_err(|_| AppError::new(Code::Io, "output writer lock poisoned"))?;
        out.write_all(text.as_bytes())
            .map_err(|e| AppError::wrap(e, Code::Io, "failed to write formatted output"))
    }

    /// Flush buffered output.
    pub fn flush(&self) -> AppResult<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| AppError::new(Code::Io, "output writer lock poisoned"))?;
        out.flush()
            .map_err(|e| AppError::wrap(e, Code::Io, "failed to flush output"))
    }
}
