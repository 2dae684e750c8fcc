//! SQLite store round trips against a real on-disk database.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;
use tempfile::TempDir;

use quittance::adapter::outbound::sqlite::{
    create_pool, run_migrations, DbPool, SqliteQuittanceStore, SqliteRappelStore,
};
use quittance::domain::{
    Partie, Periode, Quittance, QuittanceId, Rappel, RappelId, StatutQuittance, StatutRappel,
};
use quittance::port::outbound::{QuittanceStore, RappelStore};

fn pool_de_test(dir: &TempDir) -> DbPool {
    let url = dir.path().join("quittance.db");
    let pool = create_pool(url.to_str().unwrap()).unwrap();
    run_migrations(&pool).unwrap();
    pool
}

fn rappel_de_test(echeance: NaiveDate) -> Rappel {
    Rappel::planifier(echeance, json!({ "nouveau_loyer": "929.40" }))
}

fn quittance_de_test() -> Quittance {
    Quittance {
        id: QuittanceId::new(),
        bailleur: Partie {
            nom: "Jean Dupont".into(),
            adresse: "1 rue de la Paix, 75002 Paris".into(),
        },
        locataire: "Marie Martin".into(),
        adresse_location: "12 avenue des Lilas, 69003 Lyon".into(),
        periode: Periode {
            mois: 3,
            annee: 2025,
        },
        loyer: dec!(813.37),
        charges: dec!(94.20),
        lieu: "Paris".into(),
        date_emission: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
        statut: StatutQuittance::EnAttente,
    }
}

#[tokio::test]
async fn rappel_aller_retour() {
    let dir = TempDir::new().unwrap();
    let store = SqliteRappelStore::new(pool_de_test(&dir));

    let rappel = rappel_de_test(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
    store.save(&rappel).await.unwrap();

    let relu = store.get(&rappel.id).await.unwrap().unwrap();
    assert_eq!(relu, rappel);
}

#[tokio::test]
async fn rappel_inconnu_est_none() {
    let dir = TempDir::new().unwrap();
    let store = SqliteRappelStore::new(pool_de_test(&dir));

    assert_eq!(store.get(&RappelId::new()).await.unwrap(), None);
    assert!(!store.cancel(&RappelId::new()).await.unwrap());
}

#[tokio::test]
async fn annulation_est_un_soft_delete() {
    let dir = TempDir::new().unwrap();
    let store = SqliteRappelStore::new(pool_de_test(&dir));

    let rappel = rappel_de_test(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
    store.save(&rappel).await.unwrap();
    assert!(store.cancel(&rappel.id).await.unwrap());

    // Hidden from the default listing, but the row is still there.
    assert!(store.list(false).await.unwrap().is_empty());
    let tous = store.list(true).await.unwrap();
    assert_eq!(tous.len(), 1);
    assert_eq!(tous[0].statut, StatutRappel::Annule);
    assert_eq!(tous[0].donnees["nouveau_loyer"], "929.40");
}

#[tokio::test]
async fn liste_triee_par_echeance_decroissante() {
    let dir = TempDir::new().unwrap();
    let store = SqliteRappelStore::new(pool_de_test(&dir));

    let proche = rappel_de_test(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    let lointain = rappel_de_test(NaiveDate::from_ymd_opt(2027, 2, 1).unwrap());
    store.save(&proche).await.unwrap();
    store.save(&lointain).await.unwrap();

    let liste = store.list(false).await.unwrap();
    assert_eq!(liste[0].id, lointain.id);
    assert_eq!(liste[1].id, proche.id);
}

#[tokio::test]
async fn save_du_meme_id_met_a_jour() {
    let dir = TempDir::new().unwrap();
    let store = SqliteRappelStore::new(pool_de_test(&dir));

    let mut rappel = rappel_de_test(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
    store.save(&rappel).await.unwrap();
    rappel.statut = StatutRappel::Envoye;
    store.save(&rappel).await.unwrap();

    let relu = store.get(&rappel.id).await.unwrap().unwrap();
    assert_eq!(relu.statut, StatutRappel::Envoye);
    assert_eq!(store.list(true).await.unwrap().len(), 1);
}

#[tokio::test]
async fn quittance_aller_retour_et_mark_sent() {
    let dir = TempDir::new().unwrap();
    let store = SqliteQuittanceStore::new(pool_de_test(&dir));

    let quittance = quittance_de_test();
    store.save(&quittance).await.unwrap();

    let liste = store.list().await.unwrap();
    assert_eq!(liste.len(), 1);
    assert_eq!(liste[0], quittance);
    assert_eq!(liste[0].loyer, dec!(813.37));

    assert!(store.mark_sent(&quittance.id).await.unwrap());
    let liste = store.list().await.unwrap();
    assert_eq!(liste[0].statut, StatutQuittance::Envoyee);

    assert!(!store.mark_sent(&QuittanceId::new()).await.unwrap());
}

#[tokio::test]
async fn quittances_triees_par_periode_decroissante() {
    let dir = TempDir::new().unwrap();
    let store = SqliteQuittanceStore::new(pool_de_test(&dir));

    let mut fevrier = quittance_de_test();
    fevrier.id = QuittanceId::new();
    fevrier.periode = Periode {
        mois: 2,
        annee: 2025,
    };
    let mut decembre = quittance_de_test();
    decembre.id = QuittanceId::new();
    decembre.periode = Periode {
        mois: 12,
        annee: 2024,
    };
    let mars = quittance_de_test();

    store.save(&fevrier).await.unwrap();
    store.save(&decembre).await.unwrap();
    store.save(&mars).await.unwrap();

    let liste = store.list().await.unwrap();
    let periodes: Vec<(i32, u32)> = liste
        .iter()
        .map(|q| (q.periode.annee, q.periode.mois))
        .collect();
    assert_eq!(periodes, vec![(2025, 3), (2025, 2), (2024, 12)]);
}
