//! Shared catalog fixture for unit tests.

use std::num::NonZeroU32;
use std::sync::Arc;

use mindfood_sql::{SQLStore, SqliteStore};

use crate::schema;

const SEED: &str = "
INSERT INTO universe (id, title, image) VALUES
    (1, 'Livres', 'book.svg'), (2, 'CD', 'cd.svg'), (3, 'DVD', NULL), (4, 'Jeux', NULL);
INSERT INTO category (id, title, image) VALUES
    (1, 'Roman', 'roman.svg'), (2, 'Science-fiction', NULL), (3, 'Rock', 'rock.svg'), (4, 'Aventure', NULL);
INSERT INTO brand (id, title, image) VALUES
    (1, 'Gallimard', 'gallimard.png'), (2, 'Folio', NULL), (3, 'Apple Records', NULL), (4, 'Ubisoft', NULL);
INSERT INTO product
    (id, title, maker, price, stock, image, rating, rating_num, created_on, modified_on, universe_id, category_id, brand_id)
VALUES
    (1, 'Dune', 'Frank Herbert', 9.9, 12, 'dune.jpg', 4.5, 120, '2023-01-10 09:00:00', '2023-06-01 10:00:00', 1, 2, 1),
    (2, 'Fondation', 'Isaac Asimov', 8.5, 3, NULL, 4.2, 80, '2023-03-05 09:00:00', '2023-03-06 10:00:00', 1, 2, 2),
    (3, 'L''Etranger', 'Albert Camus', 6.2, 40, 'etranger.jpg', 3.9, 200, '2022-11-20 09:00:00', '2023-08-15 10:00:00', 1, 1, 1),
    (4, 'Germinal', 'Emile Zola', 7.0, 1, '', 3.1, 15, '2023-05-18 09:00:00', '2023-05-18 10:00:00', 1, 1, 2),
    (5, 'Hyperion', 'Dan Simmons', 10.5, 7, NULL, 4.8, 40, '2023-07-01 09:00:00', '2023-07-02 10:00:00', 1, 2, 2),
    (6, 'Abbey Road', 'The Beatles', 15.0, 9, 'abbey.jpg', 4.9, 300, '2023-02-14 09:00:00', '2023-09-01 10:00:00', 2, 3, 3),
    (7, 'Let It Be', 'The Beatles', 12.0, 0, NULL, 4.1, 10, '2023-04-22 09:00:00', '2023-04-23 10:00:00', 2, 3, 3),
    (8, 'Le Horla', 'Guy de Maupassant', 4.5, 20, NULL, 3.1, 5, '2023-06-30 09:00:00', '2023-06-30 10:00:00', 1, 1, 1),
    (9, 'Inedit', 'Studio', 59.9, 2, NULL, NULL, 0, '2023-08-01 09:00:00', '2023-08-01 10:00:00', 4, 4, 4);
";

/// In-memory catalog with four universes and nine products.
pub(crate) fn seeded_db() -> Arc<dyn SQLStore> {
    let db = SqliteStore::open_in_memory().unwrap();
    schema::init_schema(&db).unwrap();
    db.exec(SEED, &[]).unwrap();
    Arc::new(db)
}

pub(crate) fn nb(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}
