//! `statefacts states`: offline dump of the Reference Dataset.

use statefacts_core::api::{dataset, CliError, ContigFilter, StateRecord};

use super::cli::StatesArgs;

pub fn render_states(args: &StatesArgs) -> Result<String, CliError> {
    let filter = ContigFilter::from_query(args.contig.as_deref());
    let records: Vec<&StateRecord> = dataset().filtered(filter);
    let out = if args.pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    };
    out.map_err(|e| CliError::Command(format!("Failed to render states: {e}")))
}

pub fn handle_states(args: StatesArgs) -> Result<(), CliError> {
    println!("{}", render_states(&args)?);
    Ok(())
}
