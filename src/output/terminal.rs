//! Terminal rendering for calculation results.
//!
//! Prints the summary block and the aligned subnet table with colors.

use colored::Colorize;

use crate::processing::SubnetRow;
use crate::Calculation;

/// Format a value as a left-aligned field of at least `width` columns.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}

/// Print the network summary followed by the subnet table to stdout.
pub fn print_calculation(calc: &Calculation) {
    log::info!("#Start print_calculation() rows = {}", calc.rows.len());

    print_summary(calc);
    println!();
    print_rows(&calc.rows);
}

fn print_summary(calc: &Calculation) {
    let net = &calc.network;

    println!("{} {}", "Network:".bold(), net.to_string().green().bold());
    println!("  Network ID:   {}", net.addr());
    println!("  Broadcast:    {}", net.broadcast());
    println!("  Netmask:      {}", net.netmask());
    println!("  Wildcard:     {}", net.wildcard_mask());
    println!("  Usable hosts: {}", net.usable_hosts());
    match (net.first_host(), net.last_host()) {
        (Some(first), Some(last)) => println!("  Host range:   {first} - {last}"),
        _ => println!("  Host range:   {}", "N/A".yellow()),
    }
}

fn print_rows(rows: &[SubnetRow]) {
    let headers = ["Subnet", "First host", "Last host", "Broadcast"];
    let widths = column_widths(rows, &headers);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format_field(h, *w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header_line.blue().bold());

    for row in rows {
        println!(
            "{}  {}  {}  {}",
            format_field(&row.cidr, widths[0]),
            format_field(&row.first_host, widths[1]),
            format_field(&row.last_host, widths[2]),
            format_field(&row.broadcast, widths[3]),
        );
    }
}

fn column_widths(rows: &[SubnetRow], headers: &[&str; 4]) -> [usize; 4] {
    let mut widths = [
        headers[0].len(),
        headers[1].len(),
        headers[2].len(),
        headers[3].len(),
    ];
    for row in rows {
        widths[0] = widths[0].max(row.cidr.len());
        widths[1] = widths[1].max(row.first_host.len());
        widths[2] = widths[2].max(row.last_host.len());
        widths[3] = widths[3].max(row.broadcast.len());
    }
    widths
}
