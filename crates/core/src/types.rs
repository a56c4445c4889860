/// Primary keys are short opaque strings (see [`crate::ids::generate_short_id`]).
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
