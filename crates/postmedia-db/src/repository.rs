use async_trait::async_trait;
use postmedia_core::{AppError, Resource};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Metadata repository for resource records.
///
/// The repository owns id assignment: a resource passed to `save` without an
/// id gets one from the store and the persisted row is returned.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, AppError>;

    /// Insert the record on first save (assigning its id), update it on
    /// subsequent saves. Returns the persisted row.
    async fn save(&self, resource: &Resource) -> Result<Resource, AppError>;

    async fn delete(&self, resource: &Resource) -> Result<(), AppError>;
}

/// Postgres-backed resource repository
#[derive(Clone)]
pub struct PgResourceRepository {
    pool: PgPool,
}

impl PgResourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    #[tracing::instrument(skip(self), fields(db.table = "resources", db.operation = "select"))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, AppError> {
        let row: Option<Resource> = sqlx::query_as::<Postgres, Resource>(
            r#"
            SELECT id, key, name, size, resource_type, post_id, created_at
            FROM resources
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(
        skip(self, resource),
        fields(db.table = "resources", db.operation = "insert", key = %resource.key)
    )]
    async fn save(&self, resource: &Resource) -> Result<Resource, AppError> {
        let row: Resource = match resource.id {
            None => {
                sqlx::query_as::<Postgres, Resource>(
                    r#"
                    INSERT INTO resources (key, name, size, resource_type, post_id, created_at)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id, key, name, size, resource_type, post_id, created_at
                    "#,
                )
                .bind(&resource.key)
                .bind(&resource.name)
                .bind(resource.size)
                .bind(resource.resource_type)
                .bind(resource.post_id)
                .bind(resource.created_at)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<Postgres, Resource>(
                    r#"
                    UPDATE resources
                    SET key = $2, name = $3, size = $4, resource_type = $5, post_id = $6
                    WHERE id = $1
                    RETURNING id, key, name, size, resource_type, post_id, created_at
                    "#,
                )
                .bind(id)
                .bind(&resource.key)
                .bind(&resource.name)
                .bind(resource.size)
                .bind(resource.resource_type)
                .bind(resource.post_id)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row)
    }

    #[tracing::instrument(
        skip(self, resource),
        fields(db.table = "resources", db.operation = "delete", key = %resource.key)
    )]
    async fn delete(&self, resource: &Resource) -> Result<(), AppError> {
        let id = resource
            .id
            .ok_or_else(|| AppError::Internal("cannot delete an unpersisted resource".to_string()))?;

        sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
