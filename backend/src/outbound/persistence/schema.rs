//! Diesel table definitions for the catalogue schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate them
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Event categories such as concerts or sports.
    categories (id) {
        id -> Int4,
        name -> Varchar,
        /// Optional URL slug, unique when present.
        slug -> Nullable<Varchar>,
    }
}

diesel::table! {
    cities (id) {
        id -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    venues (id) {
        id -> Int4,
        name -> Varchar,
        address -> Nullable<Text>,
        city_id -> Int4,
    }
}

diesel::table! {
    /// Scheduled events. `metadata` holds a free-form JSON object.
    events (id) {
        id -> Int4,
        title -> Varchar,
        start_time -> Timestamptz,
        end_time -> Nullable<Timestamptz>,
        city_id -> Int4,
        venue_id -> Int4,
        category_id -> Int4,
        metadata -> Nullable<Jsonb>,
    }
}

diesel::table! {
    price_tiers (id) {
        id -> Int4,
        event_id -> Int4,
        tier_name -> Varchar,
        /// NUMERIC(12, 2).
        price -> Numeric,
        /// ISO 4217 code, `CAD` by default.
        currency -> Varchar,
    }
}

diesel::table! {
    /// Tags; names are unique case-insensitively via `tags_name_lower_key`.
    tags (id) {
        id -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    /// Many-to-many association between events and tags.
    event_tags (event_id, tag_id) {
        event_id -> Int4,
        tag_id -> Int4,
    }
}

diesel::joinable!(venues -> cities (city_id));
diesel::joinable!(events -> categories (category_id));
diesel::joinable!(price_tiers -> events (event_id));
diesel::joinable!(event_tags -> events (event_id));
diesel::joinable!(event_tags -> tags (tag_id));

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    cities,
    venues,
    events,
    price_tiers,
    tags,
    event_tags,
);
