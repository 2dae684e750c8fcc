//! Config loading against real files on disk.

use std::io::Write;

use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

use quittance::config::Config;
use quittance::domain::calendar::Trimestre;
use quittance::error::{ConfigError, Error};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn charge_une_configuration_complete() {
    let file = write_config(
        r#"
[database]
url = "/tmp/quittance-test.db"

[logging]
level = "debug"
format = "json"

[bailleur]
nom = "Jean Dupont"
adresse = "4 rue des Lilas, 75011 Paris"
lieu = "Paris"

[smtp]
host = "smtp.exemple.fr"
port = 465
utilisateur = "jean@exemple.fr"
expediteur = "Jean Dupont <jean@exemple.fr>"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.database.url, "/tmp/quittance-test.db");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.bailleur.unwrap().lieu.as_deref(), Some("Paris"));
    let smtp = config.smtp.unwrap();
    assert_eq!(smtp.port, 465);
    assert_eq!(smtp.mot_de_passe_env, "QUITTANCE_SMTP_PASSWORD");
}

#[test]
fn fichier_minimal_prend_les_defauts() {
    let file = write_config("");
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.logging.level, "warn");
    assert!(config.smtp.is_none());
}

#[test]
fn url_de_base_vide_est_rejete() {
    let file = write_config("[database]\nurl = \"\"\n");
    let err = Config::load(file.path()).unwrap_err();
    match err {
        Error::Config(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "database.url");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn smtp_sans_expediteur_est_rejete() {
    let file = write_config(
        r#"
[smtp]
host = "smtp.exemple.fr"
utilisateur = "jean@exemple.fr"
expediteur = ""
"#,
    );
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingField {
            field: "smtp.expediteur"
        })
    ));
}

#[test]
fn toml_invalide_est_une_erreur_de_parse() {
    let file = write_config("ceci n'est pas du toml");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}

#[test]
fn fichier_absent_est_une_erreur_de_lecture() {
    let err = Config::load("/nonexistent/quittance/config.toml").unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn fichier_irl_surcharge_la_table_integree() {
    let irl = write_config(
        r#"
[[indice]]
annee = 2026
trimestre = 1
valeur = 146.82

[[indice]]
annee = 2023
trimestre = 3
valeur = 999.99
"#,
    );
    let file = write_config(&format!(
        "[irl]\nfichier = \"{}\"\n",
        irl.path().display()
    ));

    let config = Config::load(file.path()).unwrap();
    let table = config.table_irl().unwrap();
    assert_eq!(table.indice(2026, Trimestre::T1), Some(dec!(146.82)));
    // File entries win over built-in publications.
    assert_eq!(table.indice(2023, Trimestre::T3), Some(dec!(999.99)));
}
