//! Terminal presentation of run summaries and configured jobs

use std::fmt::Write as _;

use console::Style;

use crate::config::Config;
use crate::orchestrator::RunSummary;
use crate::pipeline::StageOutcome;

/// Render the per-stage outcome lines and the totals line
pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", Style::new().bold().apply_to("Summary:"));

    for outcome in &summary.outcomes {
        let _ = writeln!(out, "  {}", render_outcome(outcome));
    }

    let totals = format!(
        "{} of {} stages succeeded",
        summary.succeeded().count(),
        summary.total()
    );
    let style = if summary.is_success() {
        Style::new().green().bold()
    } else {
        Style::new().yellow().bold()
    };
    let _ = writeln!(out, "\n{}", style.apply_to(totals));
    out
}

fn render_outcome(outcome: &StageOutcome) -> String {
    match &outcome.result {
        Ok(path) => format!(
            "{} {} {} -> {}",
            Style::new().green().apply_to("ok"),
            outcome.stage,
            Style::new().bold().apply_to(&outcome.name),
            path.display()
        ),
        Err(reason) => format!(
            "{} {} {} [{}] {}",
            Style::new().red().apply_to("FAILED"),
            outcome.stage,
            Style::new().bold().apply_to(&outcome.name),
            reason.kind,
            reason.message
        ),
    }
}

/// Render the configured directories and jobs
pub fn render_jobs(config: &Config) -> String {
    let bold = Style::new().bold();
    let name = Style::new().bold().yellow();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        bold.apply_to("Fetched data:"),
        config.fetched_dir.display()
    );
    let _ = writeln!(
        out,
        "{} {}",
        bold.apply_to("Processed output:"),
        config.processed_dir.display()
    );

    let _ = writeln!(out, "\n{} ({}):", bold.apply_to("Fetch jobs"), config.fetch.len());
    for job in &config.fetch {
        let _ = writeln!(out, "  {} [{}] -> {}", name.apply_to(&job.name), job.kind, job.file);
        let url = if job.url.is_empty() { "(empty)" } else { job.url.as_str() };
        let _ = writeln!(out, "    URL: {url}");
    }

    let _ = writeln!(
        out,
        "\n{} ({}):",
        bold.apply_to("Analysis jobs"),
        config.analyze.len()
    );
    for job in &config.analyze {
        let _ = writeln!(
            out,
            "  {} {} -> {}",
            name.apply_to(&job.name),
            job.input,
            job.output
        );
        let _ = writeln!(out, "    {}", job.analysis.describe());
    }

    out
}
