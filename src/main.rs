use clap::Parser;

use freebet::cli::{self, Cli, Commands, ConfigCommand};
use freebet::error::Result;

fn main() {
    let _ = dotenvy::dotenv();

    let app = Cli::parse();

    if let Err(e) = dispatch(&app) {
        cli::diagnostic::report(&e);
        std::process::exit(1);
    }
}

fn dispatch(app: &Cli) -> Result<()> {
    match &app.command {
        Commands::Run(args) => cli::run::execute(args),
        Commands::Calc(args) => cli::calc::execute(args),
        Commands::Config(cmd) => match cmd {
            ConfigCommand::Init(args) => cli::config::execute_init(&args.path, args.force),
            ConfigCommand::Show(args) => cli::config::execute_show(args.config.as_deref()),
            ConfigCommand::Validate(args) => cli::config::execute_validate(args.config.as_deref()),
        },
    }
}
