use clap::{Parser, Subcommand};
use cnpj_alfanumerico::application::engine::{CaseMode, CheckEngine};
use cnpj_alfanumerico::interfaces::report::{OutputFormat, ReportWriter};
use miette::{IntoDiagnostic, Result};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cnpj",
    author,
    version,
    about = "Validate alphanumeric CNPJs and compute their check digits",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not uppercase inputs; lowercase letters are then rejected
    #[arg(long, global = true)]
    strict_case: bool,

    /// Enable debug logging to stderr (otherwise RUST_LOG applies)
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate complete CNPJs (12 alphanumerics + 2 check digits, mask optional)
    #[command(short_flag = 'v', visible_alias = "validar")]
    Validate {
        #[arg(required = true)]
        cnpjs: Vec<String>,
    },
    /// Compute the check digits of 12-character CNPJ bases
    #[command(short_flag = 'd', name = "dv", visible_alias = "calcular")]
    Dv {
        #[arg(required = true)]
        bases: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init in the same process fails; ignoring it keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log);

    let case_mode = if cli.strict_case {
        CaseMode::Strict
    } else {
        CaseMode::Upper
    };
    let engine = CheckEngine::new(case_mode);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut writer = ReportWriter::new(cli.format, stdout.lock(), stderr.lock());

    match &cli.command {
        Commands::Validate { cnpjs } => {
            let records = engine.validate_all(cnpjs.as_slice());
            writer.write_validations(&records).into_diagnostic()?;
        }
        Commands::Dv { bases } => {
            let records = engine.compute_all(bases.as_slice());
            writer.write_check_digits(&records).into_diagnostic()?;
        }
    }

    Ok(())
}
