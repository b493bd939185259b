use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::simulation::{SeedReport, Summary};

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a Summary,
    seeds: &'a [SeedReport],
}

pub fn write_console_report(
    out: &mut dyn Write,
    reports: &[SeedReport],
    summary: &Summary,
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Draw Simulation Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==========================".cyan())?;
    writeln!(out, "Seeds: {}", summary.seeds)?;
    writeln!(out, "Passed: {}", summary.passed.to_string().green())?;
    writeln!(
        out,
        "Failed: {}",
        (summary.seeds - summary.passed).to_string().red()
    )?;
    writeln!(
        out,
        "Draws: {} revealed, {} refused, {} abandoned",
        summary.completed, summary.rejected, summary.abandoned
    )?;
    writeln!(out, "Distinct cards seen: {}/22", summary.distinct_cards)?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for report in reports {
        let status = if report.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        let mode = if report.vip { " (vip)" } else { "" };
        writeln!(out, "{status} {}{mode}", format!("seed {}", report.seed).bold())?;
        writeln!(
            out,
            "   Days: {}  revealed {}  refused {}  abandoned {}",
            report.days.len(),
            report.completed(),
            report.rejected(),
            report.abandoned()
        )?;
        writeln!(out, "   RNG draws: {}", report.rng_draws)?;
        if !report.violations.is_empty() {
            writeln!(out, "   Violations:")?;
            for violation in &report.violations {
                writeln!(out, "     • {}", violation.red())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_json_report(
    out: &mut dyn Write,
    reports: &[SeedReport],
    summary: &Summary,
) -> Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport {
        summary,
        seeds: reports,
    })?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn write_markdown_report(
    out: &mut dyn Write,
    reports: &[SeedReport],
    summary: &Summary,
) -> Result<()> {
    writeln!(out, "# Daily Tarot Draw Simulation\n")?;
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Seeds**: {}", summary.seeds)?;
    writeln!(out, "- **Passed**: {}", summary.passed)?;
    writeln!(out, "- **Failed**: {}", summary.seeds - summary.passed)?;
    writeln!(out, "- **Revealed**: {}", summary.completed)?;
    writeln!(out, "- **Refused**: {}", summary.rejected)?;
    writeln!(out, "- **Abandoned**: {}\n", summary.abandoned)?;

    writeln!(out, "## Seeds\n")?;
    for report in reports {
        let status = if report.passed { "✅" } else { "❌" };
        writeln!(out, "### {status} seed {}\n", report.seed)?;
        writeln!(out, "| Date | Revealed | Refused | Abandoned | Stored |")?;
        writeln!(out, "|------|---------:|--------:|----------:|-------:|")?;
        for day in &report.days {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                day.date, day.completed, day.rejected, day.abandoned, day.stored_count
            )?;
        }
        if !report.violations.is_empty() {
            writeln!(out, "\n- **Violations**:")?;
            for violation in &report.violations {
                writeln!(out, "  - {violation}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{SimulationConfig, run_all};
    use crate::util::local_morning;

    fn sample() -> (Vec<SeedReport>, Summary) {
        let cfg = SimulationConfig {
            days: 2,
            attempts_per_day: 4,
            vip: false,
            abandon_every: None,
            start: local_morning("2024-05-01").unwrap(),
        };
        let reports = run_all(&[5], &cfg);
        let summary = Summary::from_reports(&reports);
        (reports, summary)
    }

    #[test]
    fn json_report_round_trips_through_serde() {
        let (reports, summary) = sample();
        let mut buf = Vec::new();
        write_json_report(&mut buf, &reports, &summary).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["summary"]["seeds"], 1);
        assert_eq!(value["seeds"][0]["days"][1]["date"], "2024-05-02");
        assert_eq!(value["seeds"][0]["days"][0]["stored_count"], 3);
    }

    #[test]
    fn markdown_report_has_one_row_per_day() {
        let (reports, summary) = sample();
        let mut buf = Vec::new();
        write_markdown_report(&mut buf, &reports, &summary).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("### ✅ seed 5"));
        assert!(text.contains("| 2024-05-01 | 3 | 1 | 0 | 3 |"));
        assert!(text.contains("| 2024-05-02 | 3 | 1 | 0 | 3 |"));
    }
}
