use clap::Parser;
use tracing_subscriber::EnvFilter;

use stability_cli::{start_validation, Config, Outcome};

#[derive(Debug, Parser)]
#[clap(name = "stability-cli", version)]
struct CliOpts {
    #[clap(subcommand)]
    pub cmd: Option<SubCommand>,
}

#[derive(Debug, Parser)]
enum SubCommand {
    /// Register fresh session keys for an approved account and add it back to the
    /// active validator set.
    ///
    /// Example: start-validation --seed="//Alice" --ws="ws://127.0.0.1:9944"
    StartValidation(StartValidationOpts),
}

#[derive(Debug, Parser)]
struct StartValidationOpts {
    /// The seed of the account that is going to validate.
    #[clap(long, env = "STABILITY_SEED", hide_env_values = true)]
    pub seed: String,
    /// Websocket endpoint of the node to connect to.
    #[clap(long, env = "STABILITY_WS", default_value = "ws://127.0.0.1:9944")]
    pub ws: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init();

    let opts = CliOpts::parse();

    let outcome = match opts.cmd {
        Some(SubCommand::StartValidation(opts)) => {
            start_validation(&opts.seed, &opts.ws, &Config::default()).await?
        }
        None => {
            eprintln!("No command specified");
            return Ok(())
        }
    };

    match outcome {
        Outcome::Success(message) => println!("{message}"),
        Outcome::Failure(error) => {
            eprintln!("An error occurred: {error}");
            std::process::exit(1);
        }
    }

    Ok(())
}
