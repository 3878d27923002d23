use std::borrow::Cow;

use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration")]
    Config(#[from] ConfigError),
    #[error("provider error: {context}")]
    Provider {
        context: Cow<'static, str>,
        #[source]
        source: AnyhowError,
    },
    #[error("{failed} of {total} documents failed to update")]
    Documents { failed: usize, total: usize },
}

impl AppError {
    pub fn provider<S, E>(context: S, source: E) -> Self
    where
        S: Into<Cow<'static, str>>,
        E: Into<AnyhowError>,
    {
        Self::Provider {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// Flattens an error and its source chain into one line for operators.
pub fn render_error_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
