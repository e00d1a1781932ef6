use std::num::NonZeroU32;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use catalog::{CatalogStore, DateMode, Filter, RatingMode};
use mindfood_sql::{SQLStore, SqliteStore, Value};

const PRODUCTS: i64 = 10_000;

fn seeded_store() -> CatalogStore {
    let db: Arc<dyn SQLStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
    let store = CatalogStore::new(Arc::clone(&db)).unwrap();

    for id in 1..=4 {
        for table in ["universe", "category", "brand"] {
            db.exec(
                &format!("INSERT INTO {table} (id, title) VALUES (?1, ?2)"),
                &[Value::Integer(id), Value::Text(format!("{table}-{id}"))],
            )
            .unwrap();
        }
    }

    for i in 0..PRODUCTS {
        let day = i % 28 + 1;
        let month = i % 12 + 1;
        db.exec(
            "INSERT INTO product (title, maker, price, stock, rating, rating_num, \
             created_on, modified_on, universe_id, category_id, brand_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            &[
                Value::Text(format!("product-{i}")),
                Value::Text("bench".to_string()),
                Value::Real(i as f64 * 0.5),
                Value::Integer(i % 50),
                Value::Real((i % 50) as f64 / 10.0),
                Value::Integer(i % 300),
                Value::Text(format!("2023-{month:02}-{day:02} 09:00:00")),
                Value::Text(format!("2023-{month:02}-{day:02} 10:00:00")),
                Value::Integer(i % 4 + 1),
                Value::Integer(i % 3 + 1),
                Value::Integer(i % 2 + 1),
            ],
        )
        .unwrap();
    }

    store
}

fn bench_by_date(c: &mut Criterion) {
    let store = seeded_store();
    let nb = NonZeroU32::new(4).unwrap();
    let filter = Filter::default().universe(1);

    c.bench_function("catalog_by_date_universe", |b| {
        b.iter(|| {
            let products = store
                .products_by_date(black_box(&filter), DateMode::Created, nb)
                .unwrap();
            assert_eq!(products.len(), 4);
        });
    });
}

fn bench_by_rating(c: &mut Criterion) {
    let store = seeded_store();
    let nb = NonZeroU32::new(6).unwrap();
    let filter = Filter::default().category(2).brand(1);

    c.bench_function("catalog_by_rating_category_brand", |b| {
        b.iter(|| {
            let products = store
                .products_by_rating(black_box(&filter), RatingMode::Best, nb)
                .unwrap();
            assert_eq!(products.len(), 6);
        });
    });
}

criterion_group!(benches, bench_by_date, bench_by_rating);
criterion_main!(benches);
