//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AggregateError, SinkError, Stage};

/// A diagnostic wrapper for sink errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SinkDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Resolve => "Register a sink with this id or pass a different --target",
        Stage::Write => "Check that the sink is writable",
        Stage::Config => "Check the config file and --sink arguments",
    }
}

impl From<SinkError> for SinkDiagnostic {
    fn from(e: SinkError) -> Self {
        // A missing target is reported but never aborts rendering.
        let severity = if e.is_target_not_found() {
            Severity::Warning
        } else {
            Severity::Error
        };
        SinkDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            help: Some(help_for(e.stage).into()),
            source: Some(e.error),
            severity,
        }
    }
}

impl From<AggregateError> for SinkDiagnostic {
    fn from(agg: AggregateError) -> Self {
        let count = agg.len();
        match agg.errors.into_iter().next() {
            Some(e) => {
                let mut diag = SinkDiagnostic::from(e);
                if count > 1 {
                    diag.message = format!("{} (+{} more)", diag.message, count - 1);
                }
                diag
            }
            None => SinkDiagnostic {
                message: "Unknown sink error".into(),
                source: None,
                help: None,
                severity: Severity::Error,
            },
        }
    }
}

impl From<AggregateError> for miette::Report {
    fn from(agg: AggregateError) -> Self {
        miette::Report::new(SinkDiagnostic::from(agg))
    }
}
