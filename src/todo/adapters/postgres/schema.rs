//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records; rows with a `deleted_at` value are soft-deleted.
    todos (id) {
        /// Todo identifier.
        id -> Uuid,
        /// Title.
        #[max_length = 100]
        title -> Varchar,
        /// Description.
        description -> Text,
        /// Priority level.
        #[max_length = 16]
        priority -> Varchar,
        /// Lifecycle state.
        #[max_length = 16]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Soft-delete marker.
        deleted_at -> Nullable<Timestamptz>,
    }
}
