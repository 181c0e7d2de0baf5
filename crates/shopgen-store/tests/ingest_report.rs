use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::types::Value;
use shopgen_core::{DEFAULT_DATABASE_FILE, EntityKind, Money, format_timestamp};
use shopgen_generate::{GenerateOptions, GenerationEngine, GenerationResult};
use shopgen_store::{SqliteStore, StoreError, ingest_dir, top_spenders};

fn generated_dir(label: &str) -> (PathBuf, GenerationResult) {
    let dir = temp_dir(label);
    let result = GenerationEngine::new(GenerateOptions::default())
        .run(&dir)
        .expect("run generation");
    (dir, result)
}

fn snapshot(db: &Path) -> Vec<(String, Vec<Vec<Value>>)> {
    let store = SqliteStore::open_read_only(db).expect("open store");
    store
        .table_names()
        .expect("table names")
        .into_iter()
        .map(|name| {
            let rows = store.dump_table(&name).expect("dump table");
            (name, rows)
        })
        .collect()
}

#[test]
fn ingest_creates_one_table_per_entity() {
    let (dir, _) = generated_dir("tables");
    let db = dir.join(DEFAULT_DATABASE_FILE);
    let summary = ingest_dir(&dir, &db).expect("ingest");

    let store = SqliteStore::open_read_only(&db).expect("open store");
    assert_eq!(
        store.table_names().expect("table names"),
        vec!["order_items", "orders", "products", "reviews", "users"]
    );
    for kind in EntityKind::ALL {
        assert_eq!(summary.rows(kind), Some(50));
        assert_eq!(store.row_count(kind.table_name()).expect("count"), 50);
    }

    let columns = store.columns("products").expect("columns");
    assert_eq!(
        columns,
        vec![
            ("product_id".to_string(), "INTEGER".to_string()),
            ("name".to_string(), "TEXT".to_string()),
            ("category".to_string(), "TEXT".to_string()),
            ("price".to_string(), "REAL".to_string()),
            ("stock".to_string(), "INTEGER".to_string()),
            ("created_at".to_string(), "TEXT".to_string()),
        ]
    );
}

#[test]
fn ingest_twice_matches_single_run() {
    let (dir, _) = generated_dir("idempotent");
    let db = dir.join(DEFAULT_DATABASE_FILE);

    ingest_dir(&dir, &db).expect("first ingest");
    let once = snapshot(&db);
    ingest_dir(&dir, &db).expect("second ingest");
    let twice = snapshot(&db);

    assert_eq!(once, twice);
    assert_eq!(once.len(), 5);
}

#[test]
fn round_trip_preserves_field_values() {
    let (dir, result) = generated_dir("round_trip");
    let db = dir.join(DEFAULT_DATABASE_FILE);
    ingest_dir(&dir, &db).expect("ingest");
    let store = SqliteStore::open_read_only(&db).expect("open store");

    let users = store.dump_table("users").expect("users");
    assert_eq!(users.len(), result.dataset.users.len());
    for (row, user) in users.iter().zip(&result.dataset.users) {
        assert_eq!(row[0], Value::Integer(i64::from(user.user_id)));
        assert_eq!(row[3], Value::Text(user.email.clone()));
        assert_eq!(row[8], Value::Text(format_timestamp(&user.created_at)));
    }

    let items = store.dump_table("order_items").expect("order_items");
    for (row, item) in items.iter().zip(&result.dataset.order_items) {
        assert_eq!(row[1], Value::Integer(i64::from(item.order_id)));
        assert_eq!(row[3], Value::Integer(i64::from(item.quantity)));
        assert_eq!(money(&row[4]), item.unit_price);
        assert_eq!(money(&row[5]), item.subtotal);
    }

    let orders = store.dump_table("orders").expect("orders");
    for (row, order) in orders.iter().zip(&result.dataset.orders) {
        assert_eq!(row[3], Value::Text(order.status.as_str().to_string()));
        assert_eq!(money(&row[5]), order.total_amount);
    }
}

#[test]
fn missing_file_is_not_found_and_loads_nothing() {
    let (dir, _) = generated_dir("missing");
    let missing = dir.join("orders.csv");
    fs::remove_file(&missing).expect("remove orders.csv");
    let db = dir.join(DEFAULT_DATABASE_FILE);

    let err = ingest_dir(&dir, &db).expect_err("ingest must fail");
    match err {
        StoreError::NotFound { path } => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(!db.exists(), "no store should be created");
}

#[test]
fn missing_file_keeps_previous_tables() {
    let (dir, _) = generated_dir("missing_keep");
    let db = dir.join(DEFAULT_DATABASE_FILE);
    ingest_dir(&dir, &db).expect("ingest");
    let before = snapshot(&db);

    fs::remove_file(dir.join("reviews.csv")).expect("remove reviews.csv");
    assert!(matches!(
        ingest_dir(&dir, &db),
        Err(StoreError::NotFound { .. })
    ));
    assert_eq!(snapshot(&db), before);
}

#[test]
fn report_returns_top_five_descending() {
    let (dir, result) = generated_dir("report");
    let db = dir.join(DEFAULT_DATABASE_FILE);
    ingest_dir(&dir, &db).expect("ingest");

    let spenders = top_spenders(&db, 5).expect("report");
    assert_eq!(spenders.len(), 5);
    for pair in spenders.windows(2) {
        assert!(pair[0].total_spent >= pair[1].total_spent);
    }

    let mut expected: Vec<(u32, Money)> = result
        .dataset
        .users
        .iter()
        .filter_map(|user| {
            let spent: Money = result
                .dataset
                .orders
                .iter()
                .filter(|order| order.user_id == user.user_id)
                .map(|order| order.total_amount)
                .sum();
            let has_orders = result
                .dataset
                .orders
                .iter()
                .any(|order| order.user_id == user.user_id);
            has_orders.then_some((user.user_id, spent))
        })
        .collect();
    expected.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let top = &result.dataset.users[expected[0].0 as usize - 1];
    assert_eq!(spenders[0].name, top.full_name());
    assert_eq!(spenders[0].total_spent, expected[0].1);

    for spender in &spenders {
        let line = spender.to_string();
        let (name, amount) = line.split_once(": $").expect("formatted line");
        assert!(name.split(' ').count() >= 2, "{line}");
        let decimals = amount.split_once('.').map(|(_, d)| d.len());
        assert_eq!(decimals, Some(2), "{line}");
    }
}

#[test]
fn report_without_store_is_not_found() {
    let dir = temp_dir("no_store");
    let db = dir.join(DEFAULT_DATABASE_FILE);

    let err = top_spenders(&db, 5).expect_err("report must fail");
    assert!(matches!(err, StoreError::NotFound { ref path } if *path == db));
    assert!(!db.exists(), "report must not create the store");
}

fn money(value: &Value) -> Money {
    match value {
        Value::Real(v) => Money::from_f64(*v).expect("finite amount"),
        Value::Integer(v) => Money::from_cents(v * 100),
        other => panic!("expected numeric value, got {other:?}"),
    }
}

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("shopgen_store_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}
