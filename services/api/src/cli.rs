use crate::demo::{run_demo, run_evaluate, DemoArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Card Decision Engine",
    about = "Score credit card applications and explain rejections",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single application from command-line fields
    Evaluate(EvaluateArgs),
    /// Walk through reference applicants and print their decisions
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["credit-decision-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_evaluate_fields_as_raw_text() {
        let cli = Cli::try_parse_from([
            "credit-decision-api",
            "evaluate",
            "--credit-score",
            "720",
            "--employment-status",
            "Self-Employed",
            "--advice",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.credit_score.as_deref(), Some("720"));
                assert_eq!(args.employment_status.as_deref(), Some("Self-Employed"));
                assert!(args.advice);
                assert!(!args.json);
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }
}
