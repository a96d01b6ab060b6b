use std::ffi::OsString;
use std::io::{self, Write};
use std::num::NonZeroU32;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, info};
use recur_core::{
    closed_form_power_of_two, evaluate, growth_ratio, powers_of_two, report, report_all, sweep,
    Recurrence, MAX_POWER_EXPONENT,
};
use recur_support::{cli_error, cli_target_error};

const RUN_AFTER_HELP: &str = "\
Subcommands:
  recur sweep --from A --to B   Report every n in a range.
  recur sweep --powers K        Report n = 1, 2, 4, ..., 2^K.
  recur growth                  Compare T(n) with n^2 along powers of two.
  recur classify A B D          Apply the Master Theorem to T(n) = A·T(n/B) + n^D.

See `recur <subcommand> --help` for command-specific options.";

#[derive(Parser)]
#[command(
    name = "recur",
    version,
    about = "Evaluate T(n) = 4·T(n/2) + n.",
    long_about = "Print ` n T(n)` for each argument. Use subcommands for sweeps and growth analysis.",
    after_help = RUN_AFTER_HELP
)]
struct RunCli {
    /// Values of n to report, in order.
    #[arg(value_name = "N", required = true, allow_negative_numbers = true)]
    ns: Vec<i32>,

    /// Increase log output on stderr (repeat for more).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Parser)]
#[command(name = "recur sweep", version, about = "Report T(n) over a range of n.")]
struct SweepCli {
    /// First n of the range.
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    from: i32,

    /// Last n of the range (inclusive).
    #[arg(
        long,
        value_name = "N",
        required_unless_present = "powers",
        allow_negative_numbers = true
    )]
    to: Option<i32>,

    /// Distance between consecutive n.
    #[arg(long, value_name = "STEP", default_value = "1")]
    step: NonZeroU32,

    /// Report powers of two up to 2^K instead of a range.
    #[arg(long, value_name = "K", conflicts_with_all = ["to", "from", "step"])]
    powers: Option<u32>,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Parser)]
#[command(
    name = "recur growth",
    version,
    about = "Tabulate T(2^k), its closed form, and T(n)/n^2."
)]
struct GrowthCli {
    /// Largest exponent k to tabulate.
    #[arg(long, value_name = "K", default_value_t = 16)]
    max_exponent: u32,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Parser)]
#[command(
    name = "recur classify",
    version,
    about = "Classify T(n) = a·T(n/b) + n^d by the Master Theorem."
)]
struct ClassifyCli {
    /// Number of subproblems.
    a: u32,
    /// Shrink factor of each subproblem.
    b: u32,
    /// Exponent of the non-recursive work.
    d: u32,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let raw: Vec<OsString> = std::env::args_os().collect();
    let Some(position) = subcommand_position(&raw) else {
        return handle_run(raw);
    };
    let name = raw[position].clone();
    let args = strip_subcommand(raw, position);
    if name == "sweep" {
        return handle_sweep(args);
    }
    if name == "growth" {
        return handle_growth(args);
    }
    if name == "classify" {
        return handle_classify(args);
    }
    handle_run(args)
}

/// Index of the first argument that is not a flag, when it names a
/// subcommand. Flags ahead of it (only `-v`/`--verbose`) take no value.
fn subcommand_position(raw: &[OsString]) -> Option<usize> {
    let (position, arg) = raw
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, arg)| !arg.to_string_lossy().starts_with('-'))?;
    ["sweep", "growth", "classify", "run"]
        .iter()
        .any(|name| arg == name)
        .then_some(position)
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn strip_subcommand(mut raw: Vec<OsString>, position: usize) -> Vec<OsString> {
    raw.remove(position);
    raw
}

fn handle_run(args: Vec<OsString>) -> Result<()> {
    let cli = RunCli::parse_from(args);
    init_logging(cli.verbose);
    run_report(&cli)
}

fn handle_sweep(args: Vec<OsString>) -> Result<()> {
    let cli = SweepCli::parse_from(args);
    init_logging(cli.verbose);
    run_sweep(&cli)
}

fn handle_growth(args: Vec<OsString>) -> Result<()> {
    let cli = GrowthCli::parse_from(args);
    init_logging(cli.verbose);
    run_growth(&cli)
}

fn handle_classify(args: Vec<OsString>) -> Result<()> {
    let cli = ClassifyCli::parse_from(args);
    init_logging(cli.verbose);
    run_classify(&cli)
}

fn run_report(cli: &RunCli) -> Result<()> {
    info!("reporting {} value(s)", cli.ns.len());
    for &n in &cli.ns {
        report(n).with_context(|| cli_target_error("run", &n.to_string(), "cannot report"))?;
    }
    Ok(())
}

fn run_sweep(cli: &SweepCli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(max_exponent) = cli.powers {
        if max_exponent > MAX_POWER_EXPONENT {
            info!("capping --powers {max_exponent} at {MAX_POWER_EXPONENT}");
        }
        let written = report_all(&mut out, powers_of_two(max_exponent))
            .with_context(|| cli_error("sweep", "cannot report powers of two"))?;
        debug!("wrote {written} line(s)");
        return Ok(());
    }

    let Some(to) = cli.to else {
        bail!(cli_error("sweep", "either --to or --powers is required"));
    };
    if cli.from > to {
        bail!(cli_error(
            "sweep",
            format!("--from {} is greater than --to {to}", cli.from)
        ));
    }

    info!("sweeping {}..={to} step {}", cli.from, cli.step);
    for sample in sweep(cli.from..=to, cli.step) {
        let sample = sample.with_context(|| cli_error("sweep", "cannot evaluate range"))?;
        writeln!(out, "{sample}").context("failed to write to stdout")?;
    }
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn run_growth(cli: &GrowthCli) -> Result<()> {
    let recurrence = Recurrence::COURSEWORK;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "{recurrence}: {}, {}",
        recurrence.classify(),
        recurrence.bound()
    )?;
    writeln!(
        out,
        "{:>2} {:>10} {:>20} {:>20} {:>9}",
        "k", "n", "T(n)", "2·4^k - 2^k", "T(n)/n^2"
    )?;

    for (k, n) in powers_of_two(cli.max_exponent).into_iter().enumerate() {
        let value = evaluate(n)?;
        let closed = closed_form_power_of_two(k as u32)
            .map(|closed| closed.to_string())
            .unwrap_or_else(|| "-".to_string());
        let ratio = growth_ratio(n)?;
        writeln!(out, "{k:>2} {n:>10} {value:>20} {closed:>20} {ratio:>9.6}")?;
    }
    out.flush()?;
    Ok(())
}

fn run_classify(cli: &ClassifyCli) -> Result<()> {
    let recurrence = Recurrence::new(cli.a, cli.b, cli.d)
        .with_context(|| cli_error("classify", "invalid recurrence"))?;
    println!(
        "{recurrence}: {}, {}",
        recurrence.classify(),
        recurrence.bound()
    );
    Ok(())
}
