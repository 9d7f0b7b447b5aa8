//! Diesel table definitions. Must match `backend/migrations` exactly.

diesel::table! {
    /// Generated assets, newest first by `created_at`.
    assets (id) {
        id -> Uuid,
        description -> Text,
        image_url -> Text,
        /// Assigned by the database (`DEFAULT now()`).
        created_at -> Timestamptz,
    }
}
