use bist_rs::prelude::*;
use bist_rs::tester::{DEFAULT_LENGTH, DEFAULT_POLYNOMIAL};
use bist_rs::util::bits::to_bit_string;
use clap::Parser;
use log::{error, info};
use std::process;

#[derive(Parser, Debug)]
struct Args {
    /// Length of the random reference vector.
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,
    /// Seed the reference vector for a reproducible session.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn print_report(report: &AliasReport) {
    println!("{}:", report.mode);
    for alias in &report.aliases {
        println!("{}", to_bit_string(alias));
    }
    println!("count: {}", report.aliases.len());
}

/// Generates one random reference vector, then counts how many corruptions
/// of its tail each signature analyzer fails to catch for one to four bit
/// errors.
fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = TesterConfig {
        polynomial: DEFAULT_POLYNOMIAL.to_vec(),
        length: args.length,
        seed: args.seed,
    };

    let result = AliasTester::from_config(&config).and_then(|tester| {
        info!("Polynomial: {}", tester.polynomial());
        println!("test:");
        println!("{}", to_bit_string(tester.reference()));
        println!();
        let reports = tester.sweep()?;
        for pair in reports.chunks(2) {
            println!("errors: {}", pair[0].errors);
            for report in pair {
                print_report(report);
            }
            println!("{}", "-".repeat(80));
        }
        Ok(())
    });

    if let Err(e) = result {
        error!("Aliasing session failed: {}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
