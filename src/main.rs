use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use nestegg::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ClassArg {
    Stock,
    Bond,
}

impl From<ClassArg> for nestegg::core::asset::AssetClass {
    fn from(class: ClassArg) -> Self {
        match class {
            ClassArg::Stock => Self::Stock,
            ClassArg::Bond => Self::Bond,
        }
    }
}

impl From<Commands> for nestegg::AppCommand {
    fn from(cmd: Commands) -> nestegg::AppCommand {
        match cmd {
            Commands::Project {
                contribution,
                rate,
                years,
                class,
            } => nestegg::AppCommand::Project {
                contribution,
                rate,
                years,
                class: class.into(),
            },
            Commands::Portfolio => nestegg::AppCommand::Portfolio,
            Commands::Risk { symbol } => nestegg::AppCommand::Risk { symbol },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Project savings growth year by year
    Project {
        /// Annual contribution amount
        #[arg(long, default_value_t = 1000.0)]
        contribution: f64,

        /// Nominal annual rate in percent
        #[arg(long, default_value_t = 5.0)]
        rate: f64,

        /// Number of years to project
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        years: u32,

        /// Asset class the savings are invested in
        #[arg(long, value_enum, default_value = "stock")]
        class: ClassArg,
    },
    /// Display priced holdings with totals and weights
    Portfolio,
    /// Display volatility and value at risk for a symbol
    Risk {
        /// Ticker symbol, e.g. AAPL
        symbol: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => nestegg::cli::setup::setup(),
        Some(cmd) => nestegg::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
