use norma_core::{
    format_with_thousands_separators, parse_strict_decimal, parse_unit_number, NumberError,
};

#[test]
fn unit_numbers_from_command_lines() {
    assert_eq!(parse_unit_number("1,500k"), Ok(1_500_000.0));
    assert_eq!(parse_unit_number("10G"), Ok(1e10));
    assert_eq!(parse_unit_number("0.5M"), Ok(500_000.0));
    assert_eq!(parse_unit_number("12,000"), Ok(12_000.0));
}

#[test]
fn errors_are_recoverable_and_descriptive() {
    let err = parse_unit_number("20X").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid or unsupported unit suffix 'X' in \"20X\""
    );

    let err = parse_strict_decimal("3.14x").unwrap_err();
    assert_eq!(
        err,
        NumberError::Malformed {
            input: "3.14x".into()
        }
    );
    assert_eq!(err.to_string(), "malformed number: \"3.14x\"");
}

#[test]
fn formatted_counts_parse_back() {
    for n in [0u64, 7, 999, 1_000, 65_536, 1_234_567, 9_007_199_254_740_992] {
        let text = format_with_thousands_separators(n);
        assert_eq!(parse_unit_number(&text), Ok(n as f64), "{text}");
    }
}
