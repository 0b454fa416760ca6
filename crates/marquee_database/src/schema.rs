// Hand-maintained alongside the migrations in ./migrations.

diesel::table! {
    artists (id) {
        id -> Int4,
        name -> Text,
        city -> Text,
        state -> Text,
        phone -> Text,
        image_link -> Nullable<Text>,
        facebook_link -> Nullable<Text>,
        website_link -> Nullable<Text>,
        genres -> Array<Text>,
        currently_seeking -> Bool,
        seeking_content -> Nullable<Text>,
    }
}

diesel::table! {
    shows (id) {
        id -> Int4,
        venue_id -> Int4,
        artist_id -> Int4,
        time -> Timestamptz,
    }
}

diesel::table! {
    venues (id) {
        id -> Int4,
        name -> Text,
        city -> Text,
        state -> Text,
        address -> Text,
        phone -> Text,
        image_link -> Nullable<Text>,
        facebook_link -> Nullable<Text>,
        website_link -> Nullable<Text>,
        genres -> Array<Text>,
        currently_seeking -> Bool,
        seeking_content -> Nullable<Text>,
    }
}

diesel::joinable!(shows -> artists (artist_id));
diesel::joinable!(shows -> venues (venue_id));

diesel::allow_tables_to_appear_in_same_query!(artists, shows, venues);
