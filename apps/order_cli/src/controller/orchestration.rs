//! Routes inbound form events to the order form controller.

use std::io::{BufRead, Write};

use anyhow::Context;
use order_core::OrderFormController;
use serde::Serialize;
use shared::protocol::{FormEvent, FormView};

use super::events::FormOutcome;

pub fn dispatch_form_event(form: &mut OrderFormController, event: FormEvent) -> FormOutcome {
    let event_name = match &event {
        FormEvent::Change(_) => "change",
        FormEvent::Submit => "submit",
        FormEvent::Reset => "reset",
    };
    tracing::debug!(event = event_name, "dispatching form event");

    match event {
        FormEvent::Change(change) => match form.apply_raw(&change) {
            Ok(()) => FormOutcome::Updated,
            Err(err) => FormOutcome::Ignored(err),
        },
        FormEvent::Submit => match form.submit() {
            Ok(summary) => FormOutcome::Submitted(summary),
            Err(rejected) => FormOutcome::Rejected(rejected),
        },
        FormEvent::Reset => {
            form.reset();
            FormOutcome::Reset
        }
    }
}

/// One output line of `replay`.
#[derive(Debug, Serialize)]
pub struct ReplayRecord {
    pub line: usize,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub view: FormView,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub malformed: usize,
    pub failed: usize,
    pub submitted: usize,
}

/// Applies JSON-lines form events from `input`, writing one JSON record per
/// event to `output`. Malformed lines are counted and skipped.
pub fn replay_events<R: BufRead, W: Write>(
    form: &mut OrderFormController,
    input: R,
    mut output: W,
) -> anyhow::Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read event line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let event: FormEvent = match serde_json::from_str(trimmed) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(line = line_no, "skipping malformed form event: {err}");
                stats.malformed += 1;
                continue;
            }
        };

        let outcome = dispatch_form_event(form, event);
        stats.events += 1;
        if outcome.is_failure() {
            stats.failed += 1;
        }
        if matches!(outcome, FormOutcome::Submitted(_)) {
            stats.submitted += 1;
        }

        let record = ReplayRecord {
            line: line_no,
            outcome: outcome.label(),
            error: outcome.message(),
            view: form.view(),
        };
        serde_json::to_writer(&mut output, &record).context("failed to encode form view")?;
        writeln!(output).context("failed to write form view")?;
    }

    output.flush().context("failed to flush replay output")?;
    Ok(stats)
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
