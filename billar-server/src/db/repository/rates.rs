//! Rate (tarifa) Repository

use super::RepoResult;
use shared::models::RateConfig;
use sqlx::SqliteExecutor;

pub async fn find_by_branch(
    executor: impl SqliteExecutor<'_>,
    branch_id: i64,
) -> RepoResult<Option<RateConfig>> {
    let row = sqlx::query_as::<_, RateConfig>(
        "SELECT sucursal_id AS branch_id, precio_hora AS price_per_hour, fraccion_minutos AS fraction_minutes, minimo_minutos AS minimum_minutes, updated_at FROM tarifas_sucursal WHERE sucursal_id = ?",
    )
    .bind(branch_id)
    .fetch_optional(executor)
    .await?;
    Ok(row)
}

/// Insert or replace the branch's rate configuration
pub async fn upsert(executor: impl SqliteExecutor<'_>, rate: &RateConfig) -> RepoResult<()> {
    sqlx::query(
        r#"
        INSERT INTO tarifas_sucursal (sucursal_id, precio_hora, fraccion_minutos, minimo_minutos, updated_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT (sucursal_id) DO UPDATE SET
            precio_hora = excluded.precio_hora,
            fraccion_minutos = excluded.fraccion_minutos,
            minimo_minutos = excluded.minimo_minutos,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(rate.branch_id)
    .bind(rate.price_per_hour)
    .bind(rate.fraction_minutes)
    .bind(rate.minimum_minutes)
    .bind(rate.updated_at)
    .execute(executor)
    .await?;
    Ok(())
}
