use chrono::{TimeZone, Utc};
use string_to::error::INVALID_DATE_VALUE;
use string_to::parser::date;
use string_to::{ConvertError, Input, Parser};

const VALID_DATES: &[&str] = &[
    "Wednesday, Nov 14, 2018",
    "11/14/2018",
    "11-14-2018 08:36",
    "Nov 14, 8:36 AM",
    "November 2018",
    "Nov 14, 2018",
    "Wed, 14 Nov 2018 08:36:04 +0000",
    "2018-11-14T08:36:04+0000",
    "2018-11-14T08:36:04.123Z",
    "2018-11-14",
    "14 November 2018",
    "November 14, 2018",
    "Nov 14",
];

const INVALID_DATES: &[&str] = &[
    "",
    " ",
    "null",
    "invalid-date",
    "123i",
    ".",
    "yes",
    "John Doe",
    "May",
    "Jan",
    "Sunday 2018",
];

#[test]
fn test_accepts_common_forms() {
    for text in VALID_DATES {
        assert!(date::PARSER.validate_sync(Input::from(*text), None), "{text}");
        assert!(date::PARSER.parse_sync(Input::from(*text), None).is_ok(), "{text}");
    }
}

#[test]
fn test_rejects_non_dates() {
    for text in INVALID_DATES {
        assert!(!date::PARSER.validate_sync(Input::from(*text), None), "{text:?}");
    }
    assert!(!date::PARSER.validate_sync(Input::Missing, None));
    assert!(!date::PARSER.validate_sync(Input::Null, None));
}

#[test]
fn test_parsed_instants() {
    let cases = [
        ("Nov 14, 2018", Utc.with_ymd_and_hms(2018, 11, 14, 0, 0, 0).unwrap()),
        ("November 2018", Utc.with_ymd_and_hms(2018, 11, 1, 0, 0, 0).unwrap()),
        ("Nov 2018", Utc.with_ymd_and_hms(2018, 11, 1, 0, 0, 0).unwrap()),
        ("14 November 2018", Utc.with_ymd_and_hms(2018, 11, 14, 0, 0, 0).unwrap()),
        ("November 14, 2018", Utc.with_ymd_and_hms(2018, 11, 14, 0, 0, 0).unwrap()),
        ("Nov 14", Utc.with_ymd_and_hms(2001, 11, 14, 0, 0, 0).unwrap()),
        ("11-14-2018 08:36", Utc.with_ymd_and_hms(2018, 11, 14, 8, 36, 0).unwrap()),
        (
            "Wed, 14 Nov 2018 08:36:04 +0000",
            Utc.with_ymd_and_hms(2018, 11, 14, 8, 36, 4).unwrap(),
        ),
        (
            "2018-11-14T10:36:04+0200",
            Utc.with_ymd_and_hms(2018, 11, 14, 8, 36, 4).unwrap(),
        ),
    ];
    for (text, expected) in cases {
        assert_eq!(date::PARSER.parse_sync(Input::from(text), None).unwrap(), expected, "{text}");
    }
}

#[test]
fn test_invalid_date_error() {
    let err = date::PARSER.parse_sync(Input::from("invalid-date"), None).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidDate { .. }));
    assert_eq!(err.error_code(), INVALID_DATE_VALUE);
    assert_eq!(err.to_string(), "Value 'invalid-date' is not parsable to a date");

    let err = date::PARSER.parse_sync(Input::Missing, None).unwrap_err();
    assert_eq!(err.to_string(), "Value 'undefined' is not parsable to a date");
}

#[test]
fn test_validate_and_parse_default() {
    let fallback = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        date::PARSER.validate_and_parse_sync(Input::from("John Doe"), Some(fallback), None),
        Some(fallback)
    );
    assert_eq!(date::PARSER.validate_and_parse_sync(Input::Null, None, None), None);
}

#[test]
fn test_parse_of_rendered_date_is_stable() {
    for text in VALID_DATES {
        let once = date::PARSER.parse_sync(Input::from(*text), None).unwrap();
        let twice = date::PARSER.parse_sync(Input::from(&once.to_rfc3339()), None).unwrap();
        assert_eq!(once, twice, "{text}");
    }
}

#[tokio::test]
async fn test_non_blocking_parse() {
    let parsed = date::PARSER.parse(Input::from("2018-11-14"), None).await.unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2018, 11, 14, 0, 0, 0).unwrap());
    assert!(!date::PARSER.validate(Input::from("yes"), None).await);
}
