use std::env;
use std::time::Instant;

use knapsack_lab::solvers::linear;
use knapsack_lab::{Error, Instance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Knapsack Scaling Probe: Linear-Space Solver Under Growth");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Each round draws a random instance, solves it with the O(capacity)-space");
    eprintln!("exact solver, and grows both n and the capacity by 1.5x. The probe stops");
    eprintln!("when a solve exceeds the time budget ({:.1}s) or the dp storage can no", options.time_limit_s);
    eprintln!("longer be allocated, and reports the largest instance solved in budget.");
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • wall_s: wall-clock seconds for the solve call");
    eprintln!("  • rss_delta_kib: resident-set delta across the call, in KiB");
    eprintln!("  • status: 'solved', 'over_budget', or 'exhausted'");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut n = options.initial_n;
    let mut capacity = options.initial_capacity;

    let mut rounds: Vec<Round> = Vec::new();
    let mut last_in_budget: Option<(usize, u64, f64)> = None;

    loop {
        eprint!("round: n={n}, L={capacity}... ");
        let instance = generate(&mut rng, n, capacity);

        let before = rss_kib(&mut sys);
        let start = Instant::now();
        let outcome = linear::solve(&instance);
        let wall_s = start.elapsed().as_secs_f64();
        let after = rss_kib(&mut sys);
        let rss_delta_kib = after.saturating_sub(before);

        match outcome {
            Ok(value) => {
                if wall_s > options.time_limit_s {
                    eprintln!("value={value}, time={wall_s:.4}s -> over time budget, stopping");
                    rounds.push(Round {
                        n,
                        capacity,
                        wall_s,
                        rss_delta_kib,
                        status: RoundStatus::OverBudget,
                    });
                    break;
                }
                eprintln!("value={value}, time={wall_s:.4}s");
                rounds.push(Round {
                    n,
                    capacity,
                    wall_s,
                    rss_delta_kib,
                    status: RoundStatus::Solved,
                });
                last_in_budget = Some((n, capacity, wall_s));
                n = grow(n);
                capacity = grow_u64(capacity);
            }
            Err(err @ (Error::AllocationFailed { .. } | Error::TableTooLarge { .. })) => {
                eprintln!("-> {err}, stopping");
                rounds.push(Round {
                    n,
                    capacity,
                    wall_s,
                    rss_delta_kib,
                    status: RoundStatus::Exhausted,
                });
                break;
            }
            Err(err) => {
                eprintln!("-> unexpected error: {err}");
                std::process::exit(1);
            }
        }
    }

    print_summary(&rounds, last_in_budget, &options);

    if let Err(err) = options.format.write(&rounds) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

/// Random instance in the stress regime: weights in [1, max(2, L/10)),
/// utilities in [1, 1000).
fn generate(rng: &mut StdRng, n: usize, capacity: u64) -> Instance {
    let weight_bound = (capacity / 10).max(2);
    let weights = (0..n).map(|_| rng.gen_range(1..weight_bound)).collect();
    let utilities = (0..n).map(|_| rng.gen_range(1..1_000)).collect();
    Instance::new(weights, utilities, capacity).expect("generated instances are well-formed")
}

fn grow(n: usize) -> usize {
    n.saturating_mul(3) / 2
}

fn grow_u64(v: u64) -> u64 {
    v.saturating_mul(3) / 2
}

struct Options {
    format: OutputFormat,
    time_limit_s: f64,
    initial_n: usize,
    initial_capacity: u64,
    seed: u64,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut time_limit_s = 30.0f64;
        let mut initial_n = 1_000usize;
        let mut initial_capacity = 10_000u64;
        let mut seed = 42u64;

        fn value_of<I, T>(args: &mut I, flag: &str) -> Result<String, String>
        where
            I: Iterator<Item = T>,
            T: Into<String>,
        {
            args.next()
                .map(Into::into)
                .ok_or_else(|| format!("missing value after {flag}"))
        }

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                format = OutputFormat::from_str(&value_of(&mut args, "--format")?)?;
            } else if let Some(value) = arg.strip_prefix("--time-limit=") {
                time_limit_s = parse_limit(value)?;
            } else if arg == "--time-limit" {
                time_limit_s = parse_limit(&value_of(&mut args, "--time-limit")?)?;
            } else if let Some(value) = arg.strip_prefix("--initial-n=") {
                initial_n = parse_num(value, "initial n")?;
            } else if arg == "--initial-n" {
                initial_n = parse_num(&value_of(&mut args, "--initial-n")?, "initial n")?;
            } else if let Some(value) = arg.strip_prefix("--initial-capacity=") {
                initial_capacity = parse_num(value, "initial capacity")?;
            } else if arg == "--initial-capacity" {
                initial_capacity =
                    parse_num(&value_of(&mut args, "--initial-capacity")?, "initial capacity")?;
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = parse_num(value, "seed")?;
            } else if arg == "--seed" {
                seed = parse_num(&value_of(&mut args, "--seed")?, "seed")?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        if initial_n == 0 {
            return Err("initial n must be positive".to_string());
        }

        Ok(Self {
            format,
            time_limit_s,
            initial_n,
            initial_capacity,
            seed,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --time-limit <seconds>        Per-solve wall-clock budget (default: 30)
  --initial-n <N>               Item count for the first round (default: 1000)
  --initial-capacity <L>        Capacity for the first round (default: 10000)
  --seed <S>                    RNG seed for instance generation (default: 42)
  -h, --help                    Print this help message

Examples:
  cargo run --bin scale_probe
  cargo run --bin scale_probe -- --format table --time-limit 5
"
        );
    }
}

fn parse_limit(value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| *v > 0.0)
        .ok_or_else(|| "time limit must be a positive number of seconds".to_string())
}

fn parse_num<N: std::str::FromStr>(value: &str, what: &str) -> Result<N, String> {
    value
        .parse::<N>()
        .map_err(|_| format!("{what} must be a non-negative integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, rounds: &[Round]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(rounds),
            OutputFormat::Table => write_table(rounds),
            OutputFormat::Json => write_json(rounds),
        }
    }
}

#[derive(Clone)]
struct Round {
    n: usize,
    capacity: u64,
    wall_s: f64,
    rss_delta_kib: u64,
    status: RoundStatus,
}

#[derive(Clone, Copy)]
enum RoundStatus {
    Solved,
    OverBudget,
    Exhausted,
}

impl RoundStatus {
    fn label(&self) -> &'static str {
        match self {
            RoundStatus::Solved => "solved",
            RoundStatus::OverBudget => "over_budget",
            RoundStatus::Exhausted => "exhausted",
        }
    }
}

fn print_summary(rounds: &[Round], last_in_budget: Option<(usize, u64, f64)>, options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Probe Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Rounds run: {}", rounds.len());

    match last_in_budget {
        Some((n, capacity, wall_s)) => {
            eprintln!("Largest instance solved within budget: n={n}, L={capacity}");
            eprintln!("Time of that solve: {wall_s:.4}s");
            eprintln!();
            eprintln!("--- Estimates for a 10x larger input (work is O(n * L)) ---");
            eprintln!(
                "n and L both 10x (100x the work): {:.2}s (~{:.2} minutes)",
                wall_s * 100.0,
                wall_s * 100.0 / 60.0
            );
            eprintln!("only n 10x (10x the work): {:.2}s", wall_s * 10.0);
        }
        None => {
            eprintln!(
                "No round finished within the {:.1}s budget; try a smaller starting size.",
                options.time_limit_s
            );
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(rounds: &[Round]) -> Result<(), String> {
    println!("n,capacity,wall_s,rss_delta_kib,status");
    for r in rounds {
        println!(
            "{},{},{:.4},{},{}",
            r.n,
            r.capacity,
            r.wall_s,
            r.rss_delta_kib,
            r.status.label()
        );
    }
    Ok(())
}

fn write_table(rounds: &[Round]) -> Result<(), String> {
    println!(
        "{:>10}  {:>14}  {:>10}  {:>14}  {:>12}",
        "n", "capacity", "wall_s", "rss_delta_kib", "status"
    );
    println!(
        "{:->10}  {:->14}  {:->10}  {:->14}  {:->12}",
        "", "", "", "", ""
    );
    for r in rounds {
        println!(
            "{:>10}  {:>14}  {:>10.4}  {:>14}  {:>12}",
            r.n,
            r.capacity,
            r.wall_s,
            r.rss_delta_kib,
            r.status.label()
        );
    }
    Ok(())
}

fn write_json(rounds: &[Round]) -> Result<(), String> {
    println!("[");
    for (idx, r) in rounds.iter().enumerate() {
        println!(
            "  {{\"n\":{},\"capacity\":{},\"wall_s\":{:.4},\"rss_delta_kib\":{},\"status\":\"{}\"}}{}",
            r.n,
            r.capacity,
            r.wall_s,
            r.rss_delta_kib,
            r.status.label(),
            if idx + 1 == rounds.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
