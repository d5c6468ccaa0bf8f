use std::io::IsTerminal;

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use fluentschema::conformance::{Case, Report};
use serde::Serialize;

const REPORT_SCHEMA_ID: &str =
    "https://schemas.3leaps.dev/fluentschema/cli/v1/conformance-report.schema.json";
const CASE_LIST_SCHEMA_ID: &str =
    "https://schemas.3leaps.dev/fluentschema/cli/v1/case-list.schema.json";

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct CaseOutput<'a> {
    description: &'a str,
    passed: bool,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    schema_id: &'static str,
    total: usize,
    passed: usize,
    failed: usize,
    cases: Vec<CaseOutput<'a>>,
    overall: &'static str,
}

#[derive(Serialize)]
struct CaseListOutput<'a> {
    schema_id: &'static str,
    cases: Vec<&'a str>,
}

pub fn print_report(report: &Report, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ReportOutput {
                schema_id: REPORT_SCHEMA_ID,
                total: report.total(),
                passed: report.passed(),
                failed: report.failed(),
                cases: report
                    .outcomes
                    .iter()
                    .map(|o| CaseOutput {
                        description: o.description,
                        passed: o.passed,
                    })
                    .collect(),
                overall: if report.all_passed() { "pass" } else { "fail" },
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["RESULT", "CASE"]);
            for outcome in &report.outcomes {
                let result = if outcome.passed {
                    Cell::new("PASS").fg(Color::Green)
                } else {
                    Cell::new("FAIL").fg(Color::Red)
                };
                table.add_row(vec![result, Cell::new(outcome.description)]);
            }
            println!("{table}");
            println!(
                "{} passed, {} failed, {} total",
                report.passed(),
                report.failed(),
                report.total()
            );
        }
        OutputFormat::Pretty => {
            println!("{}", "[i] Running conformance cases...".bold());
            for outcome in &report.outcomes {
                let marker = if outcome.passed {
                    "[+]".bold().green()
                } else {
                    "[-]".bold().red()
                };
                println!("{marker} {}", outcome.description);
            }
            println!();
            if report.all_passed() {
                println!("{}", "ALL CASES PASSED!".bold().green());
            } else {
                println!(
                    "{}",
                    format!("{} OF {} CASES FAILED!", report.failed(), report.total())
                        .bold()
                        .red()
                );
            }
        }
        OutputFormat::Raw => {
            for outcome in report.failures() {
                println!("{}", outcome.description);
            }
        }
    }
}

pub fn print_case_list(cases: &[Case], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = CaseListOutput {
                schema_id: CASE_LIST_SCHEMA_ID,
                cases: cases.iter().map(|c| c.description).collect(),
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "CASE"]);
            for (index, case) in cases.iter().enumerate() {
                table.add_row(vec![(index + 1).to_string(), case.description.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for case in cases {
                println!("{}", case.description);
            }
        }
    }
}

fn print_json<T: Serialize>(out: &T) {
    println!(
        "{}",
        serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
    );
}
