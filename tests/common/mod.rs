//! Integration test common infrastructure.
//!
//! Runs a variant binary to completion and keeps its stdout in order, each
//! line classified as a JSON log record or a plain diagnostic line.

use std::process::Command;

use serde_json::Value;

/// One stdout line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Record(Value),
    Diagnostic(String),
}

/// Captured result of one binary run.
pub struct Run {
    pub success: bool,
    /// Stdout lines in the order they were written.
    pub lines: Vec<Line>,
}

impl Run {
    pub fn records(&self) -> Vec<&Value> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Record(record) => Some(record),
                Line::Diagnostic(_) => None,
            })
            .collect()
    }

    pub fn diagnostics(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Diagnostic(text) => Some(text.as_str()),
                Line::Record(_) => None,
            })
            .collect()
    }
}

/// Run the binary at `path` with no arguments and no environment input.
pub fn run(path: &str) -> anyhow::Result<Run> {
    let output = Command::new(path)
        .env_remove("RUST_LOG")
        .env_remove("RUST_BACKTRACE")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    let lines = stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| match serde_json::from_str::<Value>(line) {
            Ok(record) if record.is_object() => Line::Record(record),
            _ => Line::Diagnostic(line.to_string()),
        })
        .collect();

    Ok(Run {
        success: output.status.success(),
        lines,
    })
}
