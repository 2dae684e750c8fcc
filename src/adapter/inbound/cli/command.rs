//! Command-line interface definitions.
//!
//! Defines the CLI structure using `clap`. The CLI exposes the two
//! calculators, receipt generation and sending, reminder management and
//! config validation.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Rent receipts and IRL rent revision for French landlords
#[derive(Parser, Debug)]
#[command(name = "quittance")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to ~/.quittance/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output and log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute an IRL rent revision
    Revision(RevisionArgs),

    /// Compute a partial-month (prorata) rent
    Prorata(ProrataArgs),

    /// Generate or send rent receipts
    #[command(subcommand)]
    Quittance(QuittanceCommand),

    /// Manage revision reminders
    #[command(subcommand)]
    Rappel(RappelCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `quittance revision`.
#[derive(Parser, Debug)]
#[command(group = ArgGroup::new("reference").required(true).args(["trimestre", "mois"]))]
pub struct RevisionArgs {
    /// Current monthly rent, excluding charges
    #[arg(long)]
    pub loyer: Decimal,

    /// Reference year
    #[arg(long)]
    pub annee: i32,

    /// Reference IRL quarter (1-4)
    #[arg(long)]
    pub trimestre: Option<u8>,

    /// Lease signature month (1-12); the quarter is derived from it
    #[arg(long)]
    pub mois: Option<u32>,

    /// Write the formal revision letter to this file
    #[arg(long)]
    pub lettre: Option<PathBuf>,

    /// Tenant name, used in the letter
    #[arg(long)]
    pub locataire: Option<String>,

    /// Rental property address, used in the letter
    #[arg(long)]
    pub adresse: Option<String>,

    /// Persist a reminder for the next revision date
    #[arg(long)]
    pub rappel: bool,
}

/// Arguments for `quittance prorata`.
#[derive(Parser, Debug)]
#[command(group = ArgGroup::new("occupation").required(true).multiple(true).args(["entree", "sortie"]))]
pub struct ProrataArgs {
    /// Monthly rent, excluding charges
    #[arg(long)]
    pub loyer: Decimal,

    /// Monthly charges
    #[arg(long, default_value = "0")]
    pub charges: Decimal,

    /// Entry date (YYYY-MM-DD)
    #[arg(long)]
    pub entree: Option<NaiveDate>,

    /// Exit date (YYYY-MM-DD)
    #[arg(long)]
    pub sortie: Option<NaiveDate>,
}

/// Subcommands for `quittance quittance`.
#[derive(Subcommand, Debug)]
pub enum QuittanceCommand {
    /// Render a receipt PDF to a file
    Generer(GenererArgs),

    /// Send a receipt by email from a JSON payload
    Envoyer(EnvoyerArgs),
}

/// Arguments for `quittance quittance generer`.
#[derive(Parser, Debug)]
pub struct GenererArgs {
    /// Tenant name
    #[arg(long)]
    pub locataire: String,

    /// Rental property address
    #[arg(long)]
    pub adresse: String,

    /// Receipt month (1-12)
    #[arg(long)]
    pub mois: u32,

    /// Receipt year
    #[arg(long)]
    pub annee: i32,

    /// Monthly rent, excluding charges
    #[arg(long)]
    pub loyer: Decimal,

    /// Monthly charges
    #[arg(long, default_value = "0")]
    pub charges: Decimal,

    /// Output PDF path
    #[arg(short = 'o', long)]
    pub sortie: PathBuf,

    /// Landlord name (defaults to [bailleur] in the config)
    #[arg(long)]
    pub bailleur: Option<String>,

    /// Landlord address (defaults to [bailleur] in the config)
    #[arg(long)]
    pub bailleur_adresse: Option<String>,

    /// Place of issue
    #[arg(long)]
    pub lieu: Option<String>,

    /// Issue date (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for `quittance quittance envoyer`.
#[derive(Parser, Debug)]
pub struct EnvoyerArgs {
    /// JSON payload file with landlord/tenant/period/amount fields
    #[arg(long)]
    pub payload: PathBuf,
}

/// Subcommands for `quittance rappel`.
#[derive(Subcommand, Debug)]
pub enum RappelCommand {
    /// List reminders
    Lister {
        /// Include cancelled reminders
        #[arg(long)]
        tous: bool,
    },

    /// Cancel a reminder (soft delete)
    Annuler {
        /// Reminder id
        id: Uuid,
    },
}

/// Subcommands for `quittance config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Load the config file and report problems
    Valider,
}
