//! Grade calculator: three scores in, a graded report out

use crate::console::Console;
use crate::error::{ErrorCode, PrimerError, Result};
use crate::grading::GradeReport;
use clap::ValueEnum;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    #[default]
    Text,
    /// The report as a JSON object
    Json,
}

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, format: ReportFormat) -> Result<()> {
    if format == ReportFormat::Text {
        writeln!(console, "=== STUDENT GRADE CALCULATOR ===")?;
    }

    let mut scores = [0.0; 3];
    for (i, (slot, expected)) in scores
        .iter_mut()
        .zip(["score 1", "score 2", "score 3"])
        .enumerate()
    {
        // stdout must hold only the JSON document
        let prompt = match format {
            ReportFormat::Text => format!("Enter score for Test {}: ", i + 1),
            ReportFormat::Json => String::new(),
        };
        *slot = console
            .ask_float(&prompt, expected)
            .or_else(|e| console.report(e))?;
    }

    let report = GradeReport::from_scores(scores);
    debug!(mean = report.mean, letter = %report.letter, "Graded scores");

    match format {
        ReportFormat::Text => write_report(console, &report),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(|e| {
                PrimerError::io(ErrorCode::IO_WRITE_FAILED, "failed to encode report")
                    .with_source(e)
            })?;
            writeln!(console, "{json}")?;
            Ok(())
        }
    }
}

pub fn write_report<W: Write>(out: &mut W, report: &GradeReport) -> Result<()> {
    writeln!(out, "\n=== GRADE REPORT ===")?;
    for (i, score) in report.scores.iter().enumerate() {
        writeln!(out, "Test {} Score: {score:.2}", i + 1)?;
    }
    writeln!(out, "Average Score: {:.2}", report.mean)?;
    writeln!(out, "Letter Grade: {}", report.letter)?;
    writeln!(out, "Status: {}", report.letter.feedback())?;

    match report.points_to_pass() {
        None => {
            writeln!(out, "Result: PASSED ✅")?;
            if report.honor_roll {
                writeln!(out, "Bonus: Eligible for honor roll!")?;
            }
        }
        Some(missing) => {
            writeln!(out, "Result: FAILED ❌")?;
            writeln!(out, "You need {missing:.2} more points to pass.")?;
        }
    }
    Ok(())
}
