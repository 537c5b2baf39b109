//! Property tests for the timestamped commit message.

use chrono::{FixedOffset, NaiveDateTime, TimeZone};
use proptest::prelude::*;

use pagepush::domain::entities::{CommitRequest, TIMESTAMP_FORMAT};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The message is `<prefix> - <timestamp>` and the timestamp
    /// parses back to the instant it was built from.
    #[test]
    fn property_message_embeds_parseable_timestamp(
        prefix in "[A-Za-z][A-Za-z ]{0,30}",
        year in 1970i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        let at = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .unwrap();

        let request = CommitRequest::at(&prefix, &at);

        let (head, stamp) = request.message.rsplit_once(" - ").unwrap();
        prop_assert_eq!(head, prefix.trim());
        let parsed = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).unwrap();
        prop_assert_eq!(parsed, at.naive_local());
    }

    /// PROPERTY: The timestamp is always 19 characters, zero padded.
    #[test]
    fn property_timestamp_is_fixed_width(
        year in 1000i32..10000,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
    ) {
        let at = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(year, month, day, hour, 0, 0)
            .unwrap();

        let request = CommitRequest::at("", &at);
        prop_assert_eq!(request.message.len(), 19);
    }
}
