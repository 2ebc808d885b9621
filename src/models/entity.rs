use sqlx::PgExecutor;

/// One `entity_properties` row joined to its owning entity.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PropertyRow {
    pub entity_id: i64,
    pub key: String,
    pub value: String,
}

/// Ids of all entities of a given type, oldest first.
pub async fn find_ids_by_type<'e, E: PgExecutor<'e>>(
    exec: E,
    entity_type: &str,
) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM entities WHERE entity_type = $1 ORDER BY id")
        .bind(entity_type)
        .fetch_all(exec)
        .await
}

/// Whether an entity with this id exists with the given type.
pub async fn exists<'e, E: PgExecutor<'e>>(
    exec: E,
    entity_type: &str,
    id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) > 0 FROM entities WHERE entity_type = $1 AND id = $2")
        .bind(entity_type)
        .bind(id)
        .fetch_one(exec)
        .await
}

/// Create a new entity, returning its id.
pub async fn create<'e, E: PgExecutor<'e>>(exec: E, entity_type: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO entities (entity_type) VALUES ($1) RETURNING id")
        .bind(entity_type)
        .fetch_one(exec)
        .await
}

/// Bump `updated_at`.
pub async fn touch<'e, E: PgExecutor<'e>>(exec: E, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE entities SET updated_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(exec)
        .await?;
    Ok(())
}

/// Delete an entity (cascades to properties). Returns whether a row was removed.
pub async fn delete<'e, E: PgExecutor<'e>>(
    exec: E,
    entity_type: &str,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM entities WHERE entity_type = $1 AND id = $2")
        .bind(entity_type)
        .bind(id)
        .execute(exec)
        .await?;
    Ok(res.rows_affected() > 0)
}

/// Count entities of a given type.
pub async fn count_by_type<'e, E: PgExecutor<'e>>(
    exec: E,
    entity_type: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM entities WHERE entity_type = $1")
        .bind(entity_type)
        .fetch_one(exec)
        .await
}

// --- Property helpers ---

/// All properties of one entity.
pub async fn get_properties<'e, E: PgExecutor<'e>>(
    exec: E,
    entity_id: i64,
) -> Result<Vec<PropertyRow>, sqlx::Error> {
    sqlx::query_as::<_, PropertyRow>(
        "SELECT entity_id, key, value FROM entity_properties WHERE entity_id = $1 ORDER BY key",
    )
    .bind(entity_id)
    .fetch_all(exec)
    .await
}

/// All properties of every entity of a type, in one round trip.
pub async fn get_properties_by_type<'e, E: PgExecutor<'e>>(
    exec: E,
    entity_type: &str,
) -> Result<Vec<PropertyRow>, sqlx::Error> {
    sqlx::query_as::<_, PropertyRow>(
        "SELECT p.entity_id, p.key, p.value \
         FROM entity_properties p \
         JOIN entities e ON e.id = p.entity_id \
         WHERE e.entity_type = $1 \
         ORDER BY p.entity_id, p.key",
    )
    .bind(entity_type)
    .fetch_all(exec)
    .await
}

/// Set a property (upsert).
pub async fn set_property<'e, E: PgExecutor<'e>>(
    exec: E,
    entity_id: i64,
    key: &str,
    value: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO entity_properties (entity_id, key, value) VALUES ($1, $2, $3) \
         ON CONFLICT (entity_id, key) DO UPDATE SET value = EXCLUDED.value",
    )
    .bind(entity_id)
    .bind(key)
    .bind(value)
    .execute(exec)
    .await?;
    Ok(())
}

/// Delete a property.
pub async fn delete_property<'e, E: PgExecutor<'e>>(
    exec: E,
    entity_id: i64,
    key: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM entity_properties WHERE entity_id = $1 AND key = $2")
        .bind(entity_id)
        .bind(key)
        .execute(exec)
        .await?;
    Ok(())
}
