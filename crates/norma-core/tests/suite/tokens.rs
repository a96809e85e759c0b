use norma_core::{
    begins_with, ends_with, join, split, split_any, trim, trim_in_place, DEFAULT_DELIMITER,
    DEFAULT_WHITESPACE,
};

#[test]
fn tokenizes_a_config_line() {
    let mut line = String::from("  --devices 0 1  2 3\n");
    trim_in_place(&mut line);
    let tokens = split(&line, DEFAULT_DELIMITER, false);
    assert_eq!(tokens, vec!["--devices", "0", "1", "2", "3"]);
    assert!(begins_with(tokens[0], "--"));
    assert_eq!(join(&tokens[1..], ","), "0,1,2,3");
}

#[test]
fn tab_separated_fields_keep_empty_columns() {
    let row = "src\t\ttgt\t";
    let fields = split(row, "\t", true);
    assert_eq!(fields, vec!["src", "", "tgt", ""]);
    assert_eq!(join(&fields, "\t"), row);
}

#[test]
fn split_any_over_mixed_whitespace() {
    let tokens = split_any(trim(" a b\tc\n"), DEFAULT_WHITESPACE, false);
    assert_eq!(tokens, vec!["a", "b", "c"]);
}

#[test]
fn suffix_check_for_file_names() {
    assert!(ends_with("model.npz", ".npz"));
    assert!(!ends_with("npz", "model.npz"));
    assert!(begins_with("model.npz", "model"));
}
