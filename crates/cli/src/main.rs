use appdir::commands::Commands;
use appdir_utils::logging;
use clap::Parser;

#[derive(Parser)]
#[command(name = "appdir")]
#[command(about = "Work with app configuration directories", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(logging::directive_for_verbosity(cli.verbose))
        .map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;

    cli.command.execute()?;
    Ok(())
}
