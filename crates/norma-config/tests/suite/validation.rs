use norma_config::{ConfigError, NormaConfig};
use norma_core::HumanNumber;

fn invalid_field(text: &str) -> &'static str {
    match NormaConfig::load_from_str(text) {
        Err(ConfigError::Invalid { field, .. }) => field,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn empty_delimiter_is_invalid() {
    assert_eq!(invalid_field("[text]\ndelimiter = \"\"\n"), "text.delimiter");
}

#[test]
fn empty_whitespace_set_is_invalid() {
    assert_eq!(invalid_field("[text]\nwhitespace = \"\"\n"), "text.whitespace");
}

#[test]
fn fractional_or_negative_output_limit_is_invalid() {
    assert_eq!(
        invalid_field("[process]\nmax_output_bytes = \"1.5\"\n"),
        "process.max_output_bytes"
    );
    assert_eq!(
        invalid_field("[process]\nmax_output_bytes = -1\n"),
        "process.max_output_bytes"
    );
}

#[test]
fn validate_checks_programmatic_configs() {
    let mut config = NormaConfig::default();
    assert!(config.validate().is_ok());

    config.process.max_output_bytes = HumanNumber(f64::NAN);
    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for `process.max_output_bytes`: expected a non-negative whole number of bytes, got NaN"
    );
}
