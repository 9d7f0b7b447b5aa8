//! PostgreSQL-backed `AssetRepository` implementation using Diesel ORM.
//!
//! Identifiers are generated here; `created_at` comes from the column default
//! and is read back with `RETURNING`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{AssetRepository, AssetRepositoryError};
use crate::domain::{Asset, AssetDescription, AssetId, ImageUrl, NewAsset};

use super::models::{AssetRow, NewAssetRow};
use super::pool::{DbPool, PoolError};
use super::schema::assets;

/// Diesel-backed implementation of the asset repository port.
#[derive(Clone)]
pub struct DieselAssetRepository {
    pool: DbPool,
}

impl DieselAssetRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AssetRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    AssetRepositoryError::connection(message)
}

fn map_diesel_error(error: DieselError) -> AssetRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AssetRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            AssetRepositoryError::query("asset violates table constraints")
        }
        DieselError::NotFound => AssetRepositoryError::query("record not found"),
        _ => AssetRepositoryError::query("database error"),
    }
}

/// Convert a database row into a validated domain asset.
fn row_to_asset(row: AssetRow) -> Result<Asset, AssetRepositoryError> {
    let AssetRow {
        id,
        description,
        image_url,
        created_at,
    } = row;

    let description = AssetDescription::new(description)
        .map_err(|err| AssetRepositoryError::query(format!("asset {id}: {err}")))?;
    let image_url = ImageUrl::new(image_url)
        .map_err(|err| AssetRepositoryError::query(format!("asset {id}: {err}")))?;

    Ok(Asset::new(
        AssetId::from_uuid(id),
        description,
        image_url,
        created_at,
    ))
}

#[async_trait]
impl AssetRepository for DieselAssetRepository {
    async fn create(&self, asset: &NewAsset) -> Result<Asset, AssetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAssetRow {
            id: *AssetId::random().as_uuid(),
            description: asset.description.as_str(),
            image_url: asset.image_url.as_str(),
        };

        let row = diesel::insert_into(assets::table)
            .values(&new_row)
            .returning(AssetRow::as_returning())
            .get_result::<AssetRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_asset(row)
    }

    async fn list_all(&self) -> Result<Vec<Asset>, AssetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AssetRow> = assets::table
            .order((assets::created_at.desc(), assets::id.desc()))
            .select(AssetRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_asset).collect()
    }

    async fn find_by_id(&self, id: &AssetId) -> Result<Option<Asset>, AssetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = assets::table
            .filter(assets::id.eq(id.as_uuid()))
            .select(AssetRow::as_select())
            .first::<AssetRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_asset).transpose()
    }

    async fn delete_by_id(&self, id: &AssetId) -> Result<bool, AssetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(assets::table.filter(assets::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use chrono::Utc;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    use super::*;

    #[fixture]
    fn valid_row() -> AssetRow {
        AssetRow {
            id: Uuid::new_v4(),
            description: "a lighthouse sticker".to_owned(),
            image_url: "https://img.example/lighthouse.png".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(repo_err, AssetRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(DieselError::NotFound);
        assert!(matches!(repo_err, AssetRepositoryError::Query { .. }));
    }

    #[rstest]
    fn row_converts_into_domain_asset(valid_row: AssetRow) {
        let expected_id = valid_row.id;
        let asset = row_to_asset(valid_row).expect("valid row converts");

        assert_eq!(asset.id().as_uuid(), &expected_id);
        assert_eq!(asset.description().as_str(), "a lighthouse sticker");
    }

    #[rstest]
    fn row_with_empty_image_url_is_rejected(mut valid_row: AssetRow) {
        valid_row.image_url = String::new();
        let error = row_to_asset(valid_row).expect_err("empty url rejected");
        assert!(matches!(error, AssetRepositoryError::Query { .. }));
    }
}
