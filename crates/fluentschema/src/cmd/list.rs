use fluentschema::conformance;

use crate::cmd::ListArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_case_list, OutputFormat};

pub fn run(args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    let cases = conformance::select(args.filter.as_deref());
    tracing::debug!(cases = cases.len(), "listing conformance cases");
    print_case_list(&cases, format);
    Ok(SUCCESS)
}
