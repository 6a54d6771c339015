/// All primary keys are text (UUID v4 strings generated on insert).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (task due dates, log dates, finance record dates).
pub type Date = chrono::NaiveDate;
