use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(suffix: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!("quittance-cli-test-{nanos}{suffix}"));
    path
}

fn write_temp_config(contents: &str) -> PathBuf {
    let path = temp_path(".toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

fn quittance() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quittance"))
}

#[test]
fn cli_prorata_calcule_une_entree() {
    let output = quittance()
        .args([
            "prorata",
            "--loyer",
            "800",
            "--charges",
            "100",
            "--entree",
            "2025-09-15",
        ])
        .output()
        .expect("run quittance");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("480,00"), "stdout: {stdout}");
    assert!(stdout.contains("16"), "stdout: {stdout}");
}

#[test]
fn cli_verbose_ajoute_le_taux_journalier() {
    let output = quittance()
        .args([
            "-v",
            "prorata",
            "--loyer",
            "800",
            "--charges",
            "100",
            "--entree",
            "2025-09-15",
        ])
        .output()
        .expect("run quittance");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Taux journalier"), "stdout: {stdout}");
    assert!(stdout.contains("30,00"), "stdout: {stdout}");
}

#[test]
fn cli_prorata_json_emet_une_ligne_structuree() {
    let output = quittance()
        .args([
            "--json",
            "prorata",
            "--loyer",
            "800",
            "--charges",
            "100",
            "--entree",
            "2025-09-15",
        ])
        .output()
        .expect("run quittance");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let ligne = stdout.lines().next().expect("one JSON line");
    let valeur: serde_json::Value = serde_json::from_str(ligne).expect("valid JSON");
    assert_eq!(valeur["type"], "prorata");
    assert_eq!(valeur["payload"]["jours_occupes"], 16);
    assert_eq!(valeur["payload"]["total"], "480.00");
}

#[test]
fn cli_revision_echoue_sur_un_indice_inconnu() {
    let output = quittance()
        .args([
            "revision",
            "--loyer",
            "800",
            "--annee",
            "1990",
            "--trimestre",
            "3",
        ])
        .output()
        .expect("run quittance");

    assert!(!output.status.success(), "Expected nonzero exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1990"), "stderr: {stderr}");
}

#[test]
fn cli_quittance_generer_ecrit_un_pdf() {
    let sortie = temp_path(".pdf");
    let output = quittance()
        .args([
            "quittance",
            "generer",
            "--bailleur",
            "Jean Dupont",
            "--bailleur-adresse",
            "1 rue de la Paix, 75002 Paris",
            "--locataire",
            "Marie Martin",
            "--adresse",
            "12 avenue des Lilas, 69003 Lyon",
            "--mois",
            "3",
            "--annee",
            "2025",
            "--loyer",
            "813.37",
            "--charges",
            "94.20",
            "--lieu",
            "Paris",
            "--sortie",
        ])
        .arg(&sortie)
        .output()
        .expect("run quittance");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stdout: {stdout}\nstderr: {stderr}");

    let contenu = fs::read(&sortie).expect("read generated pdf");
    let _ = fs::remove_file(&sortie);
    assert!(contenu.starts_with(b"%PDF"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let toml = concat!("[database]\n", "url = \"\"\n");

    let path = write_temp_config(toml);
    let output = quittance()
        .args(["--config"])
        .arg(&path)
        .args(["config", "valider"])
        .output()
        .expect("run quittance");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success(), "Expected nonzero exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{stdout}{stderr}");
    assert!(
        combined.contains("database.url"),
        "Expected error message about invalid config.\nstdout: {stdout}\nstderr: {stderr}"
    );
}

#[test]
fn cli_config_valider_accepte_un_fichier_valide() {
    let toml = concat!(
        "[database]\n",
        "url = \"/tmp/quittance-cli.db\"\n",
        "\n",
        "[bailleur]\n",
        "nom = \"Jean Dupont\"\n",
        "adresse = \"1 rue de la Paix, 75002 Paris\"\n",
    );

    let path = write_temp_config(toml);
    let output = quittance()
        .args(["--config"])
        .arg(&path)
        .args(["config", "valider"])
        .output()
        .expect("run quittance");
    let _ = fs::remove_file(&path);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stdout: {stdout}\nstderr: {stderr}");
    assert!(stdout.contains("Jean Dupont"), "stdout: {stdout}");
}
