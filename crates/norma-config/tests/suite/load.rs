use std::time::Duration;

use norma_config::{ConfigError, LoggingConfig, NormaConfig, ProcessConfig, TextConfig};
use norma_core::HumanNumber;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn parses_every_section() {
    let text = r#"
[text]
whitespace = " \t\n\r"
delimiter = ","
keep_empty = true

[process]
timeout_ms = 30000
max_output_bytes = "1,500k"

[logging]
level = "warn,norma_core=debug"
json = true
stderr = false
"#;

    let config = NormaConfig::load_from_str(text).unwrap();
    assert_eq!(
        config,
        NormaConfig {
            text: TextConfig {
                whitespace: " \t\n\r".to_owned(),
                delimiter: ",".to_owned(),
                keep_empty: true,
            },
            process: ProcessConfig {
                timeout_ms: Some(30_000),
                max_output_bytes: HumanNumber(1_500_000.0),
            },
            logging: LoggingConfig {
                level: "warn,norma_core=debug".to_owned(),
                json: true,
                stderr: false,
                ..LoggingConfig::default()
            },
        }
    );

    let opts = config.process.run_options();
    assert_eq!(opts.timeout, Some(Duration::from_secs(30)));
    assert_eq!(opts.max_bytes, 1_500_000);
}

#[test]
fn max_output_bytes_accepts_plain_integers_and_suffixes() {
    let config = NormaConfig::load_from_str("[process]\nmax_output_bytes = 4096\n").unwrap();
    assert_eq!(config.process.run_options().max_bytes, 4096);

    let config = NormaConfig::load_from_str("[process]\nmax_output_bytes = \"2M\"\n").unwrap();
    assert_eq!(config.process.run_options().max_bytes, 2_000_000);
}

#[test]
fn text_section_drives_trim_and_split() {
    let config = NormaConfig::load_from_str(
        r#"
[text]
whitespace = " *"
delimiter = ";"
keep_empty = true
"#,
    )
    .unwrap();

    let line = config.text.trim("** a;;b; *");
    assert_eq!(line, "a;;b;");
    assert_eq!(config.text.split(line), vec!["a", "", "b", ""]);

    let defaults = TextConfig::default();
    assert_eq!(defaults.split("  a b  "), vec!["a", "b"]);
    assert_eq!(defaults.trim("\t x \n"), "x");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = NormaConfig::load_from_str("[text]\ndelimeter = \",\"\n").unwrap_err();
    let ConfigError::Toml(message) = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert!(message.contains("unknown field"), "{message}");

    assert!(matches!(
        NormaConfig::load_from_str("[output]\ncolor = true\n"),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn logging_section_has_only_filter_and_output_keys() {
    let config =
        NormaConfig::load_from_str("[logging]\nlevel = \"Warning\"\nstderr = false\n").unwrap();
    assert_eq!(
        config.logging,
        LoggingConfig {
            level: "Warning".to_owned(),
            json: false,
            stderr: false,
        }
    );

    let err = NormaConfig::load_from_str("[logging]\nbuffer_lines = 10\n").unwrap_err();
    assert!(err.to_string().contains("unknown field"), "{err}");
}

#[test]
fn bad_unit_suffix_is_a_parse_error() {
    let err = NormaConfig::load_from_str("[process]\nmax_output_bytes = \"16Q\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err:?}");
    assert!(err.to_string().contains("unit suffix"), "{err}");
}

#[test]
fn loads_from_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("norma.toml");
    std::fs::write(&path, "[text]\ndelimiter = \"\\t\"\n").unwrap();

    let config = NormaConfig::load_from_path(&path).unwrap();
    assert_eq!(config.text.delimiter, "\t");
    assert_eq!(config.process, ProcessConfig::default());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = NormaConfig::load_from_path(&path).unwrap_err();
    let ConfigError::Io { path: reported, source } = &err else {
        panic!("expected an io error, got {err:?}");
    };
    assert_eq!(reported, &path.display().to_string());
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
}
