//! Command-line interface.

mod command;
mod config;
pub mod output;
mod prorata;
mod quittance;
mod rappel;
mod revision;

pub use command::{Cli, Commands, ConfigCommand, QuittanceCommand, RappelCommand};

use crate::app::App;
use crate::config::Config;
use crate::error::Result;

/// Run the parsed CLI command.
pub async fn executer(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let mut configuration = Config::load_or_default(cli.config.as_deref())?;
    // -v flags take precedence over the configured log level.
    match cli.verbose {
        0 => {}
        1 => configuration.logging.level = "info".into(),
        2 => configuration.logging.level = "debug".into(),
        _ => configuration.logging.level = "trace".into(),
    }
    configuration.logging.init();

    let app = App::new(configuration);

    match cli.command {
        Commands::Revision(args) => revision::executer(args, &app).await,
        Commands::Prorata(args) => prorata::executer(args),
        Commands::Quittance(QuittanceCommand::Generer(args)) => quittance::generer(args, &app),
        Commands::Quittance(QuittanceCommand::Envoyer(args)) => {
            quittance::envoyer(args, &app).await
        }
        Commands::Rappel(RappelCommand::Lister { tous }) => rappel::lister(tous, &app).await,
        Commands::Rappel(RappelCommand::Annuler { id }) => rappel::annuler(id, &app).await,
        Commands::Config(ConfigCommand::Valider) => config::valider(&app),
    }
}
