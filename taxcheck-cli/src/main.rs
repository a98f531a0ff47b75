use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use taxcheck_cli::{
    app,
    cli::{Cli, Command},
    console::Console,
    logging,
};
use taxcheck_core::DeclarationInput;
use tracing::debug;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level, cli.log_file.as_deref())?;

    let fixtures = app::load_fixtures(cli.fixtures.as_deref())?;
    let command = cli.command.unwrap_or(Command::Interactive);
    debug!(?command, "starting");

    match command {
        Command::Interactive => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout().lock());
            app::run_menu(&mut console, &fixtures)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => {
            let input = DeclarationInput::new(args.income, args.tax_paid, args.category, args.benefits)
                .context("Invalid declaration")?;
            let status = app::run_check(&mut io::stdout().lock(), &input)?;
            Ok(status.into())
        }
        Command::SelfTest => {
            let status = app::run_self_test(&mut io::stdout().lock(), &fixtures)?;
            Ok(status.into())
        }
    }
}
