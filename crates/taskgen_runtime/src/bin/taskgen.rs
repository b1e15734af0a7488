//! taskgen CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use taskgen_engine::{GeneratorConfig, TaskGenerator};
use taskgen_foundation::Tier;
use taskgen_runtime::{FsLoader, Repl, Session, init_logging};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    batch_mode: bool,
    count: Option<usize>,
    seed: Option<u64>,
    tier: Option<Tier>,
    grammars: Option<PathBuf>,
    metadata: bool,
    trace: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--metadata" => config.metadata = true,
            "--trace" => config.trace = true,
            "--count" => {
                i += 1;
                let raw = value(args, i, "--count")?;
                config.count = Some(raw.parse().map_err(|_| format!("invalid --count value: {raw}"))?);
            }
            "--seed" => {
                i += 1;
                let raw = value(args, i, "--seed")?;
                config.seed = Some(raw.parse().map_err(|_| format!("invalid --seed value: {raw}"))?);
            }
            "--tier" => {
                i += 1;
                config.tier = Some(value(args, i, "--tier")?.parse::<Tier>()?);
            }
            "--grammars" => {
                i += 1;
                config.grammars = Some(PathBuf::from(value(args, i, "--grammars")?));
            }
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("taskgen {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.trace);

    let grammars = match &config.grammars {
        Some(dir) => FsLoader::new(dir).load_all()?,
        None => taskgen_stdlib::grammars()?,
    };
    let seed = config.seed.unwrap_or_else(clock_seed);
    let tier = config.tier.unwrap_or(Tier::Expert);
    let generator_config = GeneratorConfig::new().with_seed(seed).with_tier(tier);
    let generator = TaskGenerator::new(grammars, taskgen_stdlib::household()?, generator_config);
    let mut session = Session::new(generator).with_metadata(config.metadata);

    if config.batch_mode || config.count.is_some() {
        let count = config.count.unwrap_or(1);
        let mut failures = 0;
        for _ in 0..count {
            match session.generate(tier) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    failures += 1;
                    eprintln!("\x1b[31mError: {e}\x1b[0m");
                }
            }
        }
        if failures > 0 {
            return Err(format!("{failures} of {count} tasks failed").into());
        }
        return Ok(());
    }

    Repl::new(session)?.run()?;
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

fn print_help() {
    println!(
        "\x1b[1mtaskgen\x1b[0m - Randomized task sentences from wildcard grammars

\x1b[1mUSAGE:\x1b[0m
    taskgen [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Print tasks and exit (no REPL)
    --count N          Number of tasks to print (implies --batch)
    --seed N           Seed for the random source (default: clock)
    --tier T           Highest tier to draw from: easy, moderate, high, expert
    --grammars DIR     Load grammars from DIR instead of the built-in set
    --metadata         Print token metadata under each task
    --trace            Log debug output to stderr (overrides RUST_LOG)

\x1b[1mEXAMPLES:\x1b[0m
    taskgen                          Start interactive session
    taskgen --count 10 --seed 7      Print ten reproducible tasks
    taskgen -b --tier easy           Print one easy task
    taskgen --grammars ./gpsr        Use grammars from ./gpsr

\x1b[1mSESSION COMMANDS:\x1b[0m
    1-4                  Generate a task (easy, moderate, high, expert)
    m                    Toggle metadata display
    seed N               Reseed the generator
    q                    Quit
    Ctrl+D               Quit"
    );
}
