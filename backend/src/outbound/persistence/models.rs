//! Diesel row structs for the `assets` table.
//!
//! Internal to the persistence adapter; converted to domain types before they
//! leave this module.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::assets;

/// Row struct for reading from the assets table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = assets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AssetRow {
    pub id: Uuid,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct; `created_at` is left to the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = assets)]
pub(crate) struct NewAssetRow<'a> {
    pub id: Uuid,
    pub description: &'a str,
    pub image_url: &'a str,
}
