//! Human-readable reporting of sub-command outcomes
//!
//! A report is written to a [`LogSink`] as up to four messages: the summary,
//! then either the failure details or a hint on how to get them, then the
//! optional help message.

use crate::commands::{CommandResult, StepStatus};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

pub mod sink;
mod templates;

pub use sink::{LogSink, MemorySink, TracingSink};

/// Options controlling how much detail is reported
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// Print the error output of failed commands inline
    pub list_errors: bool,

    /// Extra text emitted after everything else
    pub help_message: Option<String>,
}

impl LogOptions {
    /// Sets whether failure details are printed inline
    pub fn with_list_errors(mut self, list_errors: bool) -> Self {
        self.list_errors = list_errors;
        self
    }

    /// Sets the message printed after the report
    pub fn with_help_message(mut self, message: impl Into<String>) -> Self {
        self.help_message = Some(message.into());
        self
    }
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    name: &'a str,
    status: StepStatus,
}

/// A failed command and its error output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureDetail<'a> {
    pub name: &'a str,
    pub error: &'a str,
}

/// Failed results that carry error output, in input order.
///
/// A failure without any error text has nothing to show and is left out.
pub fn failure_details(results: &[CommandResult]) -> Vec<FailureDetail<'_>> {
    results
        .iter()
        .filter(|result| result.is_failure())
        .map(|result| FailureDetail {
            name: result.name(),
            error: result.stderr_text(),
        })
        .filter(|detail| !detail.error.is_empty())
        .collect()
}

pub fn list_errors_hint(display_path: &str) -> String {
    format!("Run `{display_path} --list-errors` to see detailed error messages for failed checks.")
}

/// Renders reports from the built-in templates
pub struct Reporter {
    tera: Tera,
}

impl Reporter {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            (templates::SUMMARY, templates::SUMMARY_TEMPLATE),
            (templates::DETAILS, templates::DETAILS_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// One marked line per result, in input order
    pub fn render_summary(&self, display_path: &str, results: &[CommandResult]) -> Result<String> {
        let rows: Vec<SummaryRow<'_>> = results
            .iter()
            .map(|result| SummaryRow {
                name: result.name(),
                status: result.status,
            })
            .collect();

        let mut context = Context::new();
        context.insert("command_prefix", display_path);
        context.insert("results", &rows);
        Ok(self.tera.render(templates::SUMMARY, &context)?)
    }

    pub fn render_details(
        &self,
        display_path: &str,
        failures: &[FailureDetail<'_>],
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("command_prefix", display_path);
        context.insert("failures", failures);
        Ok(self.tera.render(templates::DETAILS, &context)?)
    }

    /// Writes the full report for `results` to `sink`
    pub fn log_results(
        &self,
        display_path: &str,
        results: &[CommandResult],
        options: &LogOptions,
        sink: &dyn LogSink,
    ) -> Result<()> {
        sink.write(&self.render_summary(display_path, results)?);

        let has_failures = results.iter().any(CommandResult::is_failure);
        if has_failures {
            if options.list_errors {
                let failures = failure_details(results);
                if !failures.is_empty() {
                    sink.write(&self.render_details(display_path, &failures)?);
                }
            } else {
                sink.write(&list_errors_hint(display_path));
            }
        }

        if let Some(help) = options.help_message.as_deref().filter(|m| !m.is_empty()) {
            sink.write(help);
        }

        Ok(())
    }
}

/// Writes the report for `results` to `sink` using the built-in templates
pub fn log_results(
    display_path: &str,
    results: &[CommandResult],
    options: &LogOptions,
    sink: &dyn LogSink,
) -> Result<()> {
    Reporter::new()?.log_results(display_path, results, options, sink)
}
