use sqlx::PgPool;

pub type Db = PgPool;

/// Inexpensive round-trip used by health probes.
pub async fn ping(db: &Db) -> sqlx::Result<()> {
    let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(db).await?;
    Ok(())
}
