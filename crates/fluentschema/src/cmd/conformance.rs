use fluentschema::conformance;

use crate::cmd::ConformanceArgs;
use crate::exit::{CliError, CliResult, FAILURE, SUCCESS};
use crate::output::{print_report, OutputFormat};

pub fn run(args: ConformanceArgs, format: OutputFormat) -> CliResult<i32> {
    let filter = args.filter.as_deref();
    let cases = conformance::select(filter);
    if cases.is_empty() {
        return Err(CliError::usage(format!(
            "no conformance case matches filter: {}",
            filter.unwrap_or_default()
        )));
    }

    tracing::info!(cases = cases.len(), ?filter, "running conformance cases");
    let report = conformance::run_cases(&cases);

    for failure in report.failures() {
        tracing::warn!(case = failure.description, "conformance case failed");
    }
    print_report(&report, format);

    if report.all_passed() {
        Ok(SUCCESS)
    } else {
        Ok(FAILURE)
    }
}
