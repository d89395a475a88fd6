//! JSON rendering of a calculation, for scripting callers.

use serde::Serialize;
use std::error::Error;

use crate::Calculation;

/// What a `--json` caller gets: the summary fields the terminal view shows
/// plus the raw rows.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    network: String,
    network_id: String,
    broadcast: String,
    netmask: String,
    wildcard: String,
    usable_hosts: u64,
    first_host: Option<String>,
    last_host: Option<String>,
    subnets: &'a [crate::processing::SubnetRow],
}

/// Serialize the calculation as pretty-printed JSON.
pub fn to_json(calc: &Calculation) -> Result<String, Box<dyn Error>> {
    let net = &calc.network;
    let report = JsonReport {
        network: net.to_string(),
        network_id: net.addr().to_string(),
        broadcast: net.broadcast().to_string(),
        netmask: net.netmask().to_string(),
        wildcard: net.wildcard_mask().to_string(),
        usable_hosts: net.usable_hosts(),
        first_host: net.first_host().map(|a| a.to_string()),
        last_host: net.last_host().map(|a| a.to_string()),
        subnets: &calc.rows,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Print the calculation as JSON to stdout.
pub fn print_json(calc: &Calculation) -> Result<(), Box<dyn Error>> {
    println!("{}", to_json(calc)?);
    Ok(())
}
