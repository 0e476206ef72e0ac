use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use densemat::DensematConfig;
use densemat_cli::commands::{load_config, run_multiply, run_random, run_solve};
use densemat_cli::io::write_matrix_file;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSEMAT_LOG", "error,densemat=info"))
        .init();

    let matches = Command::new("densemat")
        .version(clap::crate_version!())
        .about("Dense matrix arithmetic and linear solves from the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON configuration file (print and solve options)")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("solve")
                .about("Solve A x = b by Gaussian elimination with partial pivoting")
                .arg(
                    Arg::new("matrix")
                        .help("Coefficient matrix A (*.csv or *.tsv, one row per line)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("rhs")
                        .help("Right-hand side column b (*.csv or *.tsv)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Write the solution to this file instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("multiply")
                .about("Print the matrix product A B")
                .arg(
                    Arg::new("lhs")
                        .help("Left operand (*.csv or *.tsv)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("rhs")
                        .help("Right operand (*.csv or *.tsv)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Print a matrix filled with uniform [0, 1) samples")
                .arg(
                    Arg::new("rows")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .help("Seed for a reproducible matrix")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[densemat] Using config: {:?}", path);
            load_config(path)?
        }
        None => DensematConfig::default(),
    };
    log::debug!(
        "[densemat] Effective config:\n{}",
        serde_json::to_string_pretty(&config).unwrap_or_default()
    );

    match matches.subcommand() {
        Some(("solve", sub_m)) => handle_solve(sub_m, &config),
        Some(("multiply", sub_m)) => handle_multiply(sub_m, &config),
        Some(("random", sub_m)) => handle_random(sub_m, &config),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_solve(matches: &ArgMatches, config: &DensematConfig) -> Result<()> {
    let a_path: &PathBuf = matches.get_one("matrix").expect("required argument");
    let b_path: &PathBuf = matches.get_one("rhs").expect("required argument");

    match run_solve(a_path, b_path, config) {
        Ok(result) => {
            match matches.get_one::<PathBuf>("output_file") {
                Some(out) => {
                    write_matrix_file(out, &result.x)?;
                    log::info!("[densemat::solve] Wrote solution to {:?}", out);
                }
                None => print!("{}", result.x.display_with(config.print)),
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Solve failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_multiply(matches: &ArgMatches, config: &DensematConfig) -> Result<()> {
    let lhs: &PathBuf = matches.get_one("lhs").expect("required argument");
    let rhs: &PathBuf = matches.get_one("rhs").expect("required argument");

    match run_multiply(lhs, rhs) {
        Ok(product) => {
            print!("{}", product.display_with(config.print));
            Ok(())
        }
        Err(e) => {
            log::error!("Multiply failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_random(matches: &ArgMatches, config: &DensematConfig) -> Result<()> {
    let rows = *matches.get_one::<usize>("rows").expect("required argument");
    let cols = *matches.get_one::<usize>("cols").expect("required argument");
    let seed = matches.get_one::<u64>("seed").copied();

    match run_random(rows, cols, seed) {
        Ok(m) => {
            print!("{}", m.display_with(config.print));
            Ok(())
        }
        Err(e) => {
            log::error!("Random fill failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
