use crate::parallel::WorkerPool;
use crate::simulation::{
    run_simulation, ExecutionMode, SimulationConfig, SimulationError, Strategy, START_BANNER,
};

pub const USAGE: &str = "usage: prisoners [naive|efficient] [--sequential|--parallel] \
[--iterations N] [--seed N] [--workers N] [--json]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub config: SimulationConfig,
    pub json: bool,
    pub help: bool,
}

/// Parse everything after the program name. No arguments gives the default configuration.
/// Unknown strategies, modes and flags are rejected here, before any trial runs.
pub fn parse_options(args: &[String]) -> Result<CliOptions, SimulationError> {
    let mut config = SimulationConfig::default();
    let mut json = false;
    let mut help = false;
    let mut strategy_seen = false;

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => help = true,
            "--sequential" => config.execution = ExecutionMode::Sequential,
            "--parallel" => config.execution = ExecutionMode::Parallel,
            "--mode" => config.execution = next_value(&mut rest, "--mode")?.parse()?,
            "--strategy" => {
                config.strategy = next_value(&mut rest, "--strategy")?.parse()?;
                strategy_seen = true;
            }
            "--iterations" => {
                config.iterations = parse_number(next_value(&mut rest, "--iterations")?, "iterations")?
            }
            "--seed" => config.seed = Some(parse_number(next_value(&mut rest, "--seed")?, "seed")?),
            "--workers" => {
                config.workers = parse_number(next_value(&mut rest, "--workers")?, "workers")?
            }
            flag if flag.starts_with('-') => {
                return Err(SimulationError::UnknownFlag(flag.to_string()))
            }
            name if !strategy_seen => {
                config.strategy = name.parse::<Strategy>()?;
                strategy_seen = true;
            }
            extra => {
                return Err(SimulationError::InvalidArgument {
                    name: "argument",
                    value: extra.to_string(),
                })
            }
        }
    }

    Ok(CliOptions { config, json, help })
}

fn next_value<'a>(
    rest: &mut impl Iterator<Item = &'a String>,
    flag: &'static str,
) -> Result<&'a str, SimulationError> {
    rest.next()
        .map(String::as_str)
        .ok_or(SimulationError::MissingValue(flag))
}

fn parse_number<T: std::str::FromStr>(raw: &str, name: &'static str) -> Result<T, SimulationError> {
    raw.parse::<T>().map_err(|_| SimulationError::InvalidArgument {
        name,
        value: raw.to_string(),
    })
}

pub fn run_with_args(args: &[String]) -> i32 {
    let options = match parse_options(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            return err.exit_code();
        }
    };

    if options.help {
        println!("{USAGE}");
        return 0;
    }

    if options.json {
        handle_json(&options.config)
    } else {
        handle_text(&options.config)
    }
}

fn handle_text(config: &SimulationConfig) -> i32 {
    println!("{START_BANNER}");
    if config.execution == ExecutionMode::Parallel {
        let workers = WorkerPool::with_workers(config.workers).available_workers();
        println!("Number of CPUs: {workers}");
    }

    match run_simulation(config) {
        Ok(report) => {
            print!("{}", report.summary_text());
            0
        }
        Err(err) => {
            eprintln!("simulation failed: {err}");
            err.exit_code()
        }
    }
}

fn handle_json(config: &SimulationConfig) -> i32 {
    let report = match run_simulation(config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            return err.exit_code();
        }
    };

    match report.to_json() {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize simulation report: {err}");
            1
        }
    }
}
