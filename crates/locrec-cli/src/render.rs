//! Text and JSON rendering of per-target outcomes.

use std::fmt::Write;

use colored::Colorize;
use serde_json::{json, Value};

use locrec_sdk::{Applied, BackfillReport, DiffReport, GraftReport, TargetOutcome};

pub fn diff_text(outcome: &TargetOutcome<DiffReport>, list: bool) -> String {
    let mut out = String::new();
    let Ok(report) = &outcome.result else {
        return out;
    };
    let _ = writeln!(out, "{}", header(outcome));
    if report.is_complete() {
        let _ = writeln!(out, "  {} all {} keys present", "✓".green(), report.baseline_keys);
        return out;
    }

    let _ = writeln!(
        out,
        "  {} missing keys ({:.1}% coverage)",
        report.missing_count().to_string().yellow().bold(),
        report.coverage * 100.0
    );
    for (group, count) in &report.groups {
        let _ = writeln!(out, "    {group}: {count}");
        if let Some(drill) = &report.drill_down {
            if drill.collection.split('.').next() == Some(group.as_str()) {
                let _ = writeln!(out, "      {}:", drill.collection.dimmed());
                for (item, count) in &drill.items {
                    let _ = writeln!(out, "        {item}: {count}");
                }
            }
        }
    }
    if list {
        for key in &report.missing {
            let _ = writeln!(out, "    - {key}");
        }
    }
    out
}

pub fn backfill_text(outcome: &TargetOutcome<Applied<BackfillReport>>) -> String {
    let mut out = String::new();
    let Ok(applied) = &outcome.result else {
        return out;
    };
    let _ = writeln!(out, "{}", header(outcome));
    if applied.report.added.is_empty() {
        let _ = writeln!(out, "  {} no missing pages ({} present)", "✓".green(), applied.report.kept.len());
        return out;
    }
    for id in &applied.report.added {
        let _ = writeln!(out, "  {} {id}", "+".green());
    }
    let _ = writeln!(
        out,
        "  {} pages added, {} kept{}",
        applied.report.added.len(),
        applied.report.kept.len(),
        written_suffix(applied.written)
    );
    out
}

pub fn merge_text(outcome: &TargetOutcome<Applied<GraftReport>>) -> String {
    let mut out = String::new();
    let Ok(applied) = &outcome.result else {
        return out;
    };
    let action = match (applied.report.created, applied.report.replaced) {
        (true, _) => "created file and installed",
        (false, true) => "replaced",
        (false, false) => "installed",
    };
    let _ = writeln!(out, "{}", header(outcome));
    let _ = writeln!(out, "  {} {action}{}", "✓".green(), written_suffix(applied.written));
    out
}

/// One-line diagnostic for a failed target.
pub fn failure_text<T>(outcome: &TargetOutcome<T>) -> Option<String> {
    let err = outcome.result.as_ref().err()?;
    Some(format!(
        "{} {} ({}): {err}",
        "✗".red().bold(),
        outcome.locale.bold(),
        outcome.path.display()
    ))
}

/// JSON object for one outcome: `{locale, path, ok, report | error}`.
pub fn outcome_json<T: serde::Serialize>(outcome: &TargetOutcome<T>) -> anyhow::Result<Value> {
    let mut value = json!({
        "locale": outcome.locale,
        "path": outcome.path.display().to_string(),
        "ok": outcome.result.is_ok(),
    });
    match &outcome.result {
        Ok(report) => value["report"] = serde_json::to_value(report)?,
        Err(e) => value["error"] = Value::String(e.to_string()),
    }
    Ok(value)
}

fn header<T>(outcome: &TargetOutcome<T>) -> String {
    format!(
        "{} {}",
        outcome.locale.cyan().bold(),
        format!("({})", outcome.path.display()).dimmed()
    )
}

fn written_suffix(written: bool) -> &'static str {
    if written {
        ""
    } else {
        " (not written)"
    }
}
