use string_to::error::{INVALID_BOOLEAN_VALUE, INVALID_DATE_VALUE};
use string_to::parser::boolean::{self, BoolParserOptions};
use string_to::{ConvertError, Input, ParseSettings, Parser};

#[test]
fn test_default_word_sets() {
    for text in ["true", "yes", "1", "t", "y", "TRUE", "Yes", "T"] {
        assert!(boolean::PARSER.validate_sync(Input::from(text), None), "{text}");
        assert!(boolean::PARSER.parse_sync(Input::from(text), None).unwrap(), "{text}");
    }
    for text in ["false", "no", "0", "f", "n", "FALSE", "No", "N"] {
        assert!(boolean::PARSER.validate_sync(Input::from(text), None), "{text}");
        assert!(!boolean::PARSER.parse_sync(Input::from(text), None).unwrap(), "{text}");
    }
}

#[test]
fn test_rejects_other_values() {
    for input in [
        Input::Missing,
        Input::Null,
        Input::from(""),
        Input::from("maybe"),
        Input::from("2"),
        Input::from(" yes"),
    ] {
        assert!(!boolean::PARSER.validate_sync(input, None), "{input}");
        assert!(boolean::PARSER.parse_sync(input, None).is_err(), "{input}");
    }
}

#[test]
fn test_case_sensitive_option() {
    let options = BoolParserOptions {
        case_sensitive: true,
        ..Default::default()
    };
    assert!(boolean::PARSER.validate_sync(Input::from("yes"), Some(&options)));
    assert!(!boolean::PARSER.validate_sync(Input::from("YES"), Some(&options)));
    assert!(boolean::PARSER.parse_sync(Input::from("YES"), Some(&options)).is_err());
}

#[test]
fn test_custom_word_sets() {
    let options = BoolParserOptions {
        true_values: vec!["on".to_string(), "enabled".to_string()],
        false_values: vec!["off".to_string()],
        ..Default::default()
    };
    assert!(boolean::PARSER.parse_sync(Input::from("ON"), Some(&options)).unwrap());
    assert!(!boolean::PARSER.parse_sync(Input::from("off"), Some(&options)).unwrap());
    assert!(!boolean::PARSER.validate_sync(Input::from("yes"), Some(&options)));

    let settings = ParseSettings::default()
        .with_validator(options.clone())
        .with_parser(options);
    assert_eq!(
        boolean::PARSER.validate_and_parse_sync(Input::from("enabled"), None, Some(&settings)),
        Some(true)
    );
    assert_eq!(
        boolean::PARSER.validate_and_parse_sync(Input::from("yes"), Some(false), Some(&settings)),
        Some(false)
    );
}

#[test]
fn test_true_values_win_when_a_word_is_in_both_sets() {
    let options = BoolParserOptions {
        true_values: vec!["x".to_string()],
        false_values: vec!["x".to_string()],
        ..Default::default()
    };
    assert!(boolean::PARSER.parse_sync(Input::from("x"), Some(&options)).unwrap());
}

#[test]
fn test_invalid_boolean_error() {
    let err = boolean::PARSER.parse_sync(Input::from("maybe"), None).unwrap_err();
    assert_eq!(err.error_code(), INVALID_BOOLEAN_VALUE);
    assert_eq!(err.value(), "maybe");
    assert!(matches!(err, ConvertError::InvalidBoolean { .. }));
    assert_eq!(
        err.to_string(),
        "Value 'maybe' is neither in true_values nor false_values"
    );
    assert_ne!(err.error_code(), INVALID_DATE_VALUE);
}

#[test]
fn test_missing_and_null_render_in_the_message() {
    let err = boolean::PARSER.parse_sync(Input::Missing, None).unwrap_err();
    assert_eq!(err.value(), "undefined");
    let err = boolean::PARSER.parse_sync(Input::Null, None).unwrap_err();
    assert_eq!(err.value(), "null");
}

#[test]
fn test_validate_and_parse_never_fails() {
    assert_eq!(boolean::PARSER.validate_and_parse_sync(Input::Null, None, None), None);
    assert_eq!(
        boolean::PARSER.validate_and_parse_sync(Input::from("nope"), Some(true), None),
        Some(true)
    );
    assert_eq!(
        boolean::PARSER.validate_and_parse_sync(Input::from("n"), Some(true), None),
        Some(false)
    );
}

#[test]
fn test_parse_of_rendered_boolean_is_stable() {
    for text in ["true", "yes", "1", "T", "y", "false", "NO", "0", "f", "n"] {
        let once = boolean::PARSER.parse_sync(Input::from(text), None).unwrap();
        let twice = boolean::PARSER
            .parse_sync(Input::from(&once.to_string()), None)
            .unwrap();
        assert_eq!(once, twice, "{text}");
    }
}

#[tokio::test]
async fn test_non_blocking_parse() {
    assert!(boolean::PARSER.validate(Input::from("y"), None).await);
    assert!(boolean::PARSER.parse(Input::from("y"), None).await.unwrap());
    let err = boolean::PARSER.parse(Input::from("?"), None).await.unwrap_err();
    assert_eq!(err.error_code(), INVALID_BOOLEAN_VALUE);
}
