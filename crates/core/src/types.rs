use chrono::SubsecRound;

/// All primary keys are random UUIDs, rendered as hyphenated strings.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Textual form of every serialized timestamp, e.g. `2017-09-28T21:05:54.119427`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Allocate a fresh primary key.
pub fn new_id() -> DbId {
    uuid::Uuid::new_v4()
}

/// Parse a client-supplied id. Malformed input yields `None`, which callers
/// treat the same as an id with no stored record.
pub fn parse_id(raw: &str) -> Option<DbId> {
    uuid::Uuid::parse_str(raw).ok()
}

/// Current time truncated to the microsecond precision PostgreSQL stores.
pub fn now() -> Timestamp {
    chrono::Utc::now().trunc_subsecs(6)
}

/// Serde adapter rendering a [`Timestamp`] with [`TIMESTAMP_FORMAT`].
pub mod timestamp_format {
    use serde::Serializer;

    use super::{Timestamp, TIMESTAMP_FORMAT};

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn timestamp_renders_with_microseconds() {
        let ts = chrono::Utc
            .with_ymd_and_hms(2017, 9, 28, 21, 5, 54)
            .unwrap()
            .checked_add_signed(chrono::Duration::microseconds(119_427))
            .unwrap();
        assert_eq!(
            ts.format(TIMESTAMP_FORMAT).to_string(),
            "2017-09-28T21:05:54.119427"
        );
    }

    #[test]
    fn now_has_no_sub_microsecond_component() {
        let ts = now();
        assert_eq!(ts.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn parse_id_accepts_hyphenated_uuid() {
        let id = new_id();
        assert_eq!(parse_id(&id.to_string()), Some(id));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert_eq!(parse_id("not-a-uuid"), None);
        assert_eq!(parse_id(""), None);
    }
}
