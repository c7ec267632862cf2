//! Diesel schema for the persisted task mirror.

diesel::table! {
    /// Task records mirrored from the remote issue tracker.
    tasks (id) {
        /// Remote issue identifier, the primary key.
        id -> Int8,
        /// Mirrored issue title.
        title -> Text,
        /// Mirrored issue body, empty string when the remote body is absent.
        body -> Text,
        /// Mirrored API URL.
        url -> Text,
        /// Mirrored browser-facing URL.
        html_url -> Text,
        /// Repository-scoped issue number.
        number -> Int8,
        /// Remote lifecycle state.
        #[max_length = 20]
        state -> Varchar,
        /// Remote creation timestamp.
        remote_created_at -> Timestamptz,
        /// Schedule start date.
        start_date -> Date,
        /// Schedule end date, absent without a parsed due-date keyword.
        end_date -> Nullable<Date>,
        /// Schedule duration in days.
        duration -> Int4,
        /// Matched label name.
        #[max_length = 255]
        label -> Nullable<Varchar>,
        /// Display colour for the matched label.
        #[max_length = 16]
        color -> Nullable<Varchar>,
        /// Completion fraction.
        progress -> Nullable<Float8>,
        /// Tombstone marker.
        is_deleted -> Bool,
        /// Task kind, reserved for project/milestone task types.
        #[max_length = 50]
        kind -> Nullable<Varchar>,
        /// Parent task, reserved for hierarchical task types.
        parent -> Nullable<Int8>,
        /// Nesting level, reserved for hierarchical task types.
        level -> Nullable<Int4>,
        /// Expanded-in-tree flag, reserved for hierarchical task types.
        open -> Nullable<Bool>,
    }
}
