//! Integration tests for the Postgres toy store.
//!
//! These need a live database (`DATABASE_URL`); run with
//! `cargo test -p brinquedos-db -- --ignored`.

use assert_matches::assert_matches;
use brinquedos_db::models::toy::ToyFields;
use brinquedos_db::repositories::ToyRepo;
use brinquedos_db::store::ToyStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn carrinho() -> ToyFields {
    ToyFields {
        name: Some("Carrinho".to_string()),
        toy_type: Some("Veiculo".to_string()),
        classification: Some("3+".to_string()),
        size: Some("P".to_string()),
        price: Some(20.0),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn insert_assigns_id_and_round_trips(pool: PgPool) {
    let repo = ToyRepo::new(pool);

    let saved = repo.save(None, &carrinho()).await.unwrap();
    assert!(saved.id > 0);
    assert_eq!(saved.fields, carrinho());

    let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(found, saved);
    assert!(repo.exists_by_id(saved.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn overwrite_nulls_absent_fields(pool: PgPool) {
    let repo = ToyRepo::new(pool);
    let saved = repo.save(None, &carrinho()).await.unwrap();

    let replacement = ToyFields {
        name: Some("Bola".to_string()),
        ..Default::default()
    };
    let updated = repo.save(Some(saved.id), &replacement).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.fields, replacement);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn overwrite_missing_row_is_row_not_found(pool: PgPool) {
    let repo = ToyRepo::new(pool);
    let err = repo.save(Some(999_999), &carrinho()).await.unwrap_err();

    assert_matches!(err, sqlx::Error::RowNotFound);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn find_all_orders_by_id(pool: PgPool) {
    let repo = ToyRepo::new(pool);
    let a = repo.save(None, &carrinho()).await.unwrap();
    let b = repo.save(None, &carrinho()).await.unwrap();

    let ids: Vec<_> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_removes_row_once(pool: PgPool) {
    let repo = ToyRepo::new(pool);
    let saved = repo.save(None, &carrinho()).await.unwrap();

    assert!(repo.delete_by_id(saved.id).await.unwrap());
    assert!(!repo.delete_by_id(saved.id).await.unwrap());
    assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    assert!(!repo.exists_by_id(saved.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn ping_succeeds_on_live_pool(pool: PgPool) {
    let repo = ToyRepo::new(pool);
    repo.ping().await.unwrap();
}
