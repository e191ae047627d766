use clap::{Args, Parser, Subcommand, ValueEnum};
use hz_flux::{
    Boundary, HabitableZone, HabitableZoneCalculator, HzError, OrbitAssessment, StellarInput,
    SweepReport, TemperatureSweep, ValidityPolicy, run_sweep,
};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "hz-cli")]
#[command(
    about = "Habitable zone boundaries from stellar effective temperature and luminosity",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    star: StarArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tabulate boundaries over a range of effective temperatures
    Sweep {
        /// First effective temperature in K
        #[arg(allow_negative_numbers = true)]
        start_k: f64,
        /// Last effective temperature in K
        #[arg(allow_negative_numbers = true)]
        end_k: f64,
        /// Stellar luminosity in solar units
        #[arg(allow_negative_numbers = true)]
        luminosity_lsun: f64,
        /// Number of temperatures
        #[arg(long, default_value_t = 10)]
        points: usize,
        #[command(flatten)]
        policy: PolicyArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args, Debug)]
struct StarArgs {
    /// Stellar effective temperature in K
    #[arg(allow_negative_numbers = true)]
    temperature_k: Option<f64>,
    /// Stellar luminosity in solar units
    #[arg(allow_negative_numbers = true)]
    luminosity_lsun: Option<f64>,
    /// Also place a planet orbiting at this distance (AU)
    #[arg(long)]
    orbit: Option<f64>,
    #[command(flatten)]
    policy: PolicyArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug, Clone, Copy)]
struct PolicyArgs {
    /// Fail when the temperature is outside the 2600-7200 K calibration range
    #[arg(long, conflicts_with = "no_range_warning")]
    strict: bool,
    /// Extrapolate outside the calibration range without a warning
    #[arg(long)]
    no_range_warning: bool,
}

impl PolicyArgs {
    fn policy(self) -> ValidityPolicy {
        if self.strict {
            ValidityPolicy::Reject
        } else if self.no_range_warning {
            ValidityPolicy::Extrapolate
        } else {
            ValidityPolicy::Warn
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Calculation error: {0}")]
    Calculation(#[from] HzError),

    #[error("Usage: hz-cli <TEMPERATURE_K> <LUMINOSITY_LSUN> (missing {0})")]
    Usage(&'static str),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let stdout = io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> CliResult<()> {
    match cli.command {
        Some(Commands::Sweep {
            start_k,
            end_k,
            luminosity_lsun,
            points,
            policy,
            format,
        }) => cmd_sweep(start_k, end_k, luminosity_lsun, points, policy, format, out),
        None => cmd_compute(&cli.star, out),
    }
}

#[derive(Serialize)]
struct ComputeReport {
    effective_temperature_k: f64,
    luminosity_lsun: f64,
    zone: HabitableZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    orbit: Option<OrbitAssessment>,
}

fn cmd_compute(args: &StarArgs, out: &mut impl Write) -> CliResult<()> {
    let teff = args.temperature_k.ok_or(CliError::Usage("temperature"))?;
    let lum = args.luminosity_lsun.ok_or(CliError::Usage("luminosity"))?;

    let input = StellarInput::new(teff, lum)?;
    let calculator = HabitableZoneCalculator::with_policy(args.policy.policy());
    let zone = calculator.compute_input(&input)?;
    let orbit = args
        .orbit
        .map(|d| OrbitAssessment::new(&zone, lum, d))
        .transpose()?;

    match args.format {
        OutputFormat::Json => {
            let report = ComputeReport {
                effective_temperature_k: teff,
                luminosity_lsun: lum,
                zone,
                orbit,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            render_zone(out, teff, lum, &zone)?;
            if let Some(orbit) = orbit {
                writeln!(
                    out,
                    "Planet at {:.4} AU receives S = {:.4} S_earth: {}",
                    orbit.orbit_au, orbit.insolation, orbit.placement
                )?;
            }
        }
    }
    Ok(())
}

fn render_zone(out: &mut impl Write, teff: f64, lum: f64, zone: &HabitableZone) -> io::Result<()> {
    writeln!(
        out,
        "Habitable Zone Boundaries for star with Teff = {teff:?} K, L = {lum:?} L_sun"
    )?;
    writeln!(out, "{}", "=".repeat(60))?;
    for b in zone.boundaries() {
        writeln!(out, "{}: {:.4} AU", b.boundary.label(), b.distance_au)?;
    }
    writeln!(out)?;
    writeln!(out, "Note: Distances are in Astronomical Units (AU).")
}

#[derive(Serialize)]
struct SweepRowJson {
    teff_k: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    zone: Option<HabitableZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn cmd_sweep(
    start_k: f64,
    end_k: f64,
    luminosity_lsun: f64,
    points: usize,
    policy: PolicyArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    let sweep = TemperatureSweep::new(start_k, end_k, points)?;
    let calculator = HabitableZoneCalculator::with_policy(policy.policy());
    let report = run_sweep(&calculator, luminosity_lsun, &sweep)?;

    match format {
        OutputFormat::Json => {
            let rows: Vec<SweepRowJson> = report
                .rows
                .iter()
                .map(|row| SweepRowJson {
                    teff_k: row.teff_k,
                    zone: row.result.as_ref().ok().copied(),
                    error: row.result.as_ref().err().map(|e| e.to_string()),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Text => render_sweep(out, &sweep, &report)?,
    }
    Ok(())
}

fn render_sweep(
    out: &mut impl Write,
    sweep: &TemperatureSweep,
    report: &SweepReport,
) -> io::Result<()> {
    writeln!(out, "{sweep}, L = {:?} L_sun", report.luminosity_lsun)?;
    write!(out, "{:>10}", "Teff [K]")?;
    for b in Boundary::ALL {
        write!(out, " {:>20}", b.name())?;
    }
    writeln!(out)?;

    for row in &report.rows {
        write!(out, "{:>10.1}", row.teff_k)?;
        match &row.result {
            Ok(zone) => {
                for b in Boundary::ALL {
                    write!(out, " {:>20.4}", zone.distance_au(b))?;
                }
                writeln!(out)?;
            }
            Err(err) => writeln!(out, " {err}")?,
        }
    }
    writeln!(
        out,
        "{} succeeded, {} failed",
        report.num_successful, report.num_failed
    )
}
