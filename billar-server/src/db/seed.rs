//! Demo data for a fresh database
//!
//! Two branches with ten tables each, the standard hall rate and the bar
//! catalog. Runs only when no branch exists yet.

use shared::models::RateConfig;
use sqlx::SqlitePool;

use super::repository::{branches, products, rates, tables};
use crate::BoxError;

const BRANCHES: [&str; 2] = ["BILLAR JADE", "BILLAR JADE ANEXO"];
const TABLES_PER_BRANCH: usize = 10;

const PRICE_PER_HOUR: f64 = 15.0;
const FRACTION_MINUTES: i64 = 5;
const MINIMUM_MINUTES: i64 = 30;

/// (name, price, category)
const PRODUCTS: [(&str, f64, &str); 10] = [
    ("Cerveza Paceña 1 Lts", 25.00, "Bebidas"),
    ("Cerveza Golden Lata", 12.00, "Bebidas"),
    ("Papas Picantes", 3.50, "Snacks"),
    ("Papas Churrasco", 3.50, "Snacks"),
    ("Cigarro Hills", 0.67, "Cigarrillos"),
    ("Cigarro Bohem", 0.70, "Cigarrillos"),
    ("Soda Mini", 2.50, "Bebidas"),
    ("Soda Popular", 6.00, "Bebidas"),
    ("Soda 1 1/2", 10.00, "Bebidas"),
    ("Coca Machucada", 20.00, "Bebidas"),
];

/// Seed demo data if the database has no branches. Returns whether it seeded.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, BoxError> {
    if branches::count(pool).await? > 0 {
        tracing::debug!("Database already has branches, skipping seed");
        return Ok(false);
    }

    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    for branch_name in BRANCHES {
        let branch_id = branches::insert(&mut *tx, branch_name, None).await?;

        for n in 1..=TABLES_PER_BRANCH {
            tables::insert(&mut *tx, branch_id, &format!("Mesa {n}")).await?;
        }

        let rate = RateConfig {
            branch_id,
            price_per_hour: PRICE_PER_HOUR,
            fraction_minutes: FRACTION_MINUTES,
            minimum_minutes: MINIMUM_MINUTES,
            updated_at: now,
        };
        rates::upsert(&mut *tx, &rate).await?;

        for (name, price, category) in PRODUCTS {
            products::insert(&mut *tx, branch_id, name, price, Some(category)).await?;
        }
    }

    tx.commit().await?;

    tracing::info!(
        branches = BRANCHES.len(),
        tables_per_branch = TABLES_PER_BRANCH,
        products = PRODUCTS.len(),
        "Seeded demo data"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    #[tokio::test]
    async fn test_seed_populates_both_branches() {
        let pool = connect_in_memory().await.unwrap();
        assert!(seed_if_empty(&pool).await.unwrap());

        for branch_id in [1, 2] {
            let mesas = tables::list_by_branch(&pool, branch_id).await.unwrap();
            assert_eq!(mesas.len(), TABLES_PER_BRANCH);
            assert_eq!(mesas[0].name, "Mesa 1");
            assert!(mesas.iter().all(|m| !m.is_occupied()));

            let rate = rates::find_by_branch(&pool, branch_id).await.unwrap().unwrap();
            assert_eq!(rate.price_per_hour, 15.0);
            assert_eq!(rate.fraction_minutes, 5);
            assert_eq!(rate.minimum_minutes, 30);

            let catalog = products::list_by_branch(&pool, branch_id).await.unwrap();
            assert_eq!(catalog.len(), PRODUCTS.len());
        }
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let pool = connect_in_memory().await.unwrap();
        assert!(seed_if_empty(&pool).await.unwrap());
        assert!(!seed_if_empty(&pool).await.unwrap());
        assert_eq!(branches::count(&pool).await.unwrap(), 2);
    }
}
