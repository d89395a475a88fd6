use clap::{Parser, Subcommand};
use colored::Colorize;

use subnet_calculator::models::SubnetRequest;
use subnet_calculator::{output, run_calculation};

/// IPv4 subnetting calculator: prefix derivation, key addresses, and a
/// listing of consecutive same-size subnets.
#[derive(Parser)]
#[command(name = "subnet-calculator", version, about)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// How many consecutive subnets to list (defaults to 8, or to COUNT
    /// in `subnets` mode)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..=100))]
    list: Option<u64>,

    /// Emit the result as JSON instead of the terminal view
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Use an explicit prefix length (CIDR)
    Prefix {
        /// Base IPv4 address, e.g. 192.168.1.0
        address: String,
        /// Prefix length, 1-32
        #[arg(value_parser = clap::value_parser!(u8).range(1..=32))]
        prefix: u8,
    },
    /// Size the block for a required number of hosts
    Hosts {
        /// Base IPv4 address
        address: String,
        /// How many usable hosts the block must hold
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        hosts: u64,
    },
    /// Split an origin block into a number of equal subnets
    Subnets {
        /// Base IPv4 address
        address: String,
        /// How many subnets to create
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        count: u64,
        /// Prefix length of the block being split, 1-31
        #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u8).range(1..=31))]
        origin: u8,
    },
}

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).ok();
    log::info!("#Start main()");

    let cli = Cli::parse();

    let (address, request, default_list) = match &cli.mode {
        Mode::Prefix { address, prefix } => {
            (address, SubnetRequest::ExplicitPrefix(*prefix), 8)
        }
        Mode::Hosts { address, hosts } => (address, SubnetRequest::ByHostCount(*hosts), 8),
        // The listing defaults to the requested subnet count, even when
        // the borrowed bits allocate more (e.g. 5 requested of 8 possible).
        Mode::Subnets {
            address,
            count,
            origin,
        } => (
            address,
            SubnetRequest::BySubnetCount {
                origin_prefix: *origin,
                count: *count,
            },
            *count,
        ),
    };
    // Listing is bounded at 100 rows per invocation.
    let list_count = cli.list.unwrap_or(default_list).min(100) as usize;

    match run_calculation(address, request, list_count) {
        Ok(calc) => {
            if cli.json {
                if let Err(e) = output::print_json(&calc) {
                    log::error!("JSON output failed: {e}");
                    eprintln!("{}", format!("Error: {e}").red());
                    std::process::exit(1);
                }
            } else {
                output::print_calculation(&calc);
            }
        }
        Err(e) => {
            log::error!("calculation failed: {e}");
            eprintln!("{}", format!("Error: {e}").red());
            std::process::exit(1);
        }
    }
}
