use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use rand::rngs::StdRng;
use std::path::PathBuf;

use matrices::config::{load_config, RandomConfig};
use matrices::{ops, Matrix, Shape};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATRICES_LOG", "error,matrices=info"))
        .init();

    let matches = cli().get_matches();

    let (name, sub_matches) = match matches.subcommand() {
        Some(subcommand) => subcommand,
        None => unreachable!(),
    };

    let config = resolve_config(sub_matches)?;
    match run(name, sub_matches, &config) {
        Ok(result) => {
            match config.precision {
                Some(precision) => println!("{:.*}", precision, result),
                None => println!("{}", result),
            }
            Ok(())
        }
        Err(e) => {
            log::error!("[matrices::{}] {:#}", name, e);
            std::process::exit(1)
        }
    }
}

fn cli() -> Command {
    Command::new("matrices")
        .version(clap::crate_version!())
        .about("Build randomized dense matrices and print the results of matrix operations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(with_common_args(
            Command::new("random")
                .about("Print a matrix with entries drawn uniformly from [-1, 1)")
                .arg(shape_arg("shape", "Shape of the matrix, as COLUMNSxROWS")),
        ))
        .subcommand(with_common_args(
            Command::new("transpose")
                .about("Randomize a matrix and print its transpose")
                .arg(shape_arg("shape", "Shape of the matrix before transposing, as COLUMNSxROWS")),
        ))
        .subcommand(with_common_args(
            Command::new("product")
                .about("Randomize two matrices and print their cross product")
                .arg(shape_arg("left", "Shape of the left operand, as COLUMNSxROWS"))
                .arg(shape_arg("right", "Shape of the right operand, as COLUMNSxROWS")),
        ))
        .subcommand(with_common_args(
            Command::new("elementwise")
                .about("Randomize two matrices of the same shape and combine them entry by entry")
                .arg(
                    Arg::new("operation")
                        .help("Entrywise operation to apply")
                        .required(true)
                        .value_parser(["add", "subtract", "hadamard"]),
                )
                .arg(shape_arg("shape", "Shape of both operands, as COLUMNSxROWS")),
        ))
}

fn shape_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(Shape))
}

fn with_common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for the random source. Overrides the seed in the configuration file.")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Decimals printed per entry. Overrides the precision in the configuration file.")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
}

fn resolve_config(matches: &ArgMatches) -> Result<RandomConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[matrices] Using config: {:?}", config_path);
            load_config(config_path)?
        }
        None => RandomConfig::default(),
    };

    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }
    if let Some(precision) = matches.get_one::<usize>("precision") {
        config.precision = Some(*precision);
    }

    Ok(config)
}

fn random_matrix(shape: Shape, rng: &mut StdRng) -> Result<Matrix> {
    let mut matrix = Matrix::new(shape.columns, shape.rows)?;
    matrix.randomize(rng);
    Ok(matrix)
}

fn run(name: &str, matches: &ArgMatches, config: &RandomConfig) -> Result<Matrix> {
    let mut rng = config.rng();

    match name {
        "random" => {
            let shape: Shape = *matches.get_one("shape").unwrap();
            random_matrix(shape, &mut rng)
        }
        "transpose" => {
            let shape: Shape = *matches.get_one("shape").unwrap();
            let matrix = random_matrix(shape, &mut rng)?;
            log::info!("[matrices::transpose] Transposing a {} matrix", shape);
            Ok(ops::transpose(&matrix))
        }
        "product" => {
            let left: Shape = *matches.get_one("left").unwrap();
            let right: Shape = *matches.get_one("right").unwrap();
            let a = random_matrix(left, &mut rng)?;
            let b = random_matrix(right, &mut rng)?;
            log::info!("[matrices::product] Multiplying {} by {}", left, right);
            Ok(ops::cross(&a, &b)?)
        }
        "elementwise" => {
            let operation: &String = matches.get_one("operation").unwrap();
            let shape: Shape = *matches.get_one("shape").unwrap();
            let a = random_matrix(shape, &mut rng)?;
            let b = random_matrix(shape, &mut rng)?;
            let result = match operation.as_str() {
                "add" => ops::add(&a, &b)?,
                "subtract" => ops::subtract(&a, &b)?,
                "hadamard" => ops::hadamard(&a, &b)?,
                _ => unreachable!(),
            };
            Ok(result)
        }
        _ => unreachable!(),
    }
}
