//! The field-switcher application as seen by the supervisor.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::config::AppSettings;
use crate::dream::formatter::TextFormatter;
use crate::dream::model::{ChildhoodDream, Role};
use crate::dream::presenter::ConsolePresenter;
use crate::dream::runner::{ConsoleRunner, Output};
use crate::dream::transformer::RoleTransformer;
use crate::dream::usecase::TransformUseCase;
use crate::errors::{AppError, AppResult, BoxError, Code};
use crate::lifecycle::{App, ShutdownContext};

/// Renders the default footballer dream once.
pub struct FieldSwitcher {
    runner: Arc<ConsoleRunner>,
    dream: ChildhoodDream,
}

impl FieldSwitcher {
    /// Build the application writing to stdout.
    pub fn from_settings(settings: &AppSettings) -> AppResult<Self> {
        let stdout: Box<dyn Write + Send> = Box::new(io::stdout());
        Self::with_output(settings, Arc::new(Mutex::new(stdout)))
    }

    pub fn with_output(settings: &AppSettings, out: Output) -> AppResult<Self> {
        let role: Role = settings
            .target_role
            .parse()
            .map_err(|e| AppError::wrap(e, Code::Internal, "create transformer"))?;

        let usecase = TransformUseCase::new(Arc::new(RoleTransformer::new(role)));
        let runner = ConsoleRunner::new(
            usecase,
            Arc::new(ConsolePresenter),
            Arc::new(TextFormatter::new(settings.color)),
            out,
        );

        let dream = ChildhoodDream::default_footballer()
            .map_err(|e| AppError::wrap(e, Code::Internal, "create default footballer dream"))?;

        Ok(Self {
            runner: Arc::new(runner),
            dream,
        })
    }
}

#[async_trait]
impl App for FieldSwitcher {
    async fn run(&self, ctx: CancellationToken) -> Result<(), BoxError> {
        if ctx.is_cancelled() {
            tracing::info!("Run cancelled before rendering");
            return Ok(());
        }
        let runner = self.runner.clone();
        let dream = self.dream.clone();
        tokio::task::spawn_blocking(move || runner.run(dream))
            .await
            .map_err(|e| AppError::wrap(e, Code::Internal, "render task failed"))??;
        Ok(())
    }

    async fn shutdown(&self, _ctx: ShutdownContext) -> Result<(), BoxError> {
        let runner = self.runner.clone();
        tokio::task::spawn_blocking(move || runner.flush())
            .await
            .map_err(|e| AppError::wrap(e, Code::Internal, "flush task failed"))??;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::code_of;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn app(settings: &AppSettings) -> (FieldSwitcher, SharedBuf) {
        let buf = SharedBuf::default();
        let out: Box<dyn Write + Send> = Box::new(buf.clone());
        let app = FieldSwitcher::with_output(settings, Arc::new(Mutex::new(out))).unwrap();
        (app, buf)
    }

    fn plain_settings() -> AppSettings {
        AppSettings {
            target_role: "developer".into(),
            color: false,
        }
    }

    #[tokio::test]
    async fn test_run_renders_once() {
        let (app, buf) = app(&plain_settings());

        app.run(CancellationToken::new()).await.unwrap();
        app.shutdown(ShutdownContext::new(Duration::from_secs(1)))
            .await
            .unwrap();

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("Роль: Разработчик"));
    }

    #[tokio::test]
    async fn test_cancelled_run_renders_nothing() {
        let (app, buf) = app(&plain_settings());
        let token = CancellationToken::new();
        token.cancel();

        app.run(token).await.unwrap();

        assert!(buf.0.lock().unwrap().is_empty());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_render_failure_reaches_caller() {
        let out: Box<dyn Write + Send> = Box::new(ClosedPipe);
        let app = FieldSwitcher::with_output(&plain_settings(), Arc::new(Mutex::new(out))).unwrap();

        let err = app.run(CancellationToken::new()).await.unwrap_err();

        assert_eq!(code_of(err.as_ref()), Code::Io);
        assert_eq!(err.to_string(), "failed to write formatted output: stdout closed");
    }

    #[test]
    fn test_unknown_role_is_internal_error() {
        let settings = AppSettings {
            target_role: "striker".into(),
            color: false,
        };
        let out: Box<dyn Write + Send> = Box::new(SharedBuf::default());

        let err = FieldSwitcher::with_output(&settings, Arc::new(Mutex::new(out)))
            .err()
            .unwrap();

        assert_eq!(code_of(&err), Code::Internal);
        assert_eq!(err.to_string(), "create transformer: unsupported role: striker");
    }
}
