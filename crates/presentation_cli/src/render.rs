//! Text rendering of cycle results

use application::{CycleOutcome, CycleReport, Notice, Severity};
use domain::{SummaryText, WeatherObservation};

/// Prefix shown before a failed summary
pub const AI_ERROR_MARKER: &str = "⚠️ AI Error:";

pub fn render_notice(notice: &Notice) -> String {
    match notice.severity() {
        Severity::Warning => format!("⚠️  {}", notice.message()),
        Severity::Error => format!("❌ {}", notice.message()),
    }
}

pub fn render_observation(observation: &WeatherObservation) -> String {
    let mut lines = vec![
        format!("🌍 {}", observation.heading()),
        format!("   {}", observation.condition_line()),
    ];
    lines.extend(
        observation
            .metrics()
            .iter()
            .map(|metric| format!("   {:<12} {}", format!("{}:", metric.label), metric.value)),
    );
    lines.join("\n")
}

/// The text shown in the summary slot of a ready cycle
///
/// A failed summary is shown as an error line in its place.
pub fn summary_slot(report: &CycleReport) -> Option<SummaryText> {
    match &report.outcome {
        CycleOutcome::Ready {
            summary: Ok(summary),
            ..
        } => Some(summary.clone()),
        CycleOutcome::Ready {
            summary: Err(failed),
            ..
        } => Some(SummaryText::new(format!("{AI_ERROR_MARKER} {}", failed.detail))),
        CycleOutcome::Idle | CycleOutcome::Failed(_) => None,
    }
}

/// Render a full cycle: notices, then readout and summary
pub fn render_report(report: &CycleReport) -> String {
    let mut blocks: Vec<String> = report.notices.iter().map(render_notice).collect();

    if let Some(observation) = report.observation() {
        blocks.push(render_observation(observation));
    }
    if let Some(summary) = summary_slot(report) {
        blocks.push(format!("💬 {summary}"));
    }

    blocks.join("\n\n")
}
