//! Loading options from TOML files and quoting with them

mod common;

use std::fs;

use common::{binary_construction, interpolated, var};
use elixir_quote::{quote_source_with_options, CharlistConversion, ConfigError, QuoteOptions, Term};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_options(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("quote.toml");
    fs::write(&path, text).expect("write options file");
    path
}

#[test]
fn test_load_full_document() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_options(
        &dir,
        r#"
columns = true

[charlist_conversion]
module = "Elixir.List"
function = "to_charlist"
"#,
    );

    let options = QuoteOptions::load(&path).expect("valid options");
    assert!(options.columns);
    assert_eq!(
        options.charlist_conversion,
        CharlistConversion {
            module: "Elixir.List".to_string(),
            function: "to_charlist".to_string(),
        }
    );
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let err = QuoteOptions::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err:?}");
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_load_invalid_document() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_options(&dir, "columns = \"yes\"");
    let err = QuoteOptions::load(&path).unwrap_err();
    match err {
        ConfigError::Invalid { path: Some(reported), .. } => assert_eq!(reported, path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_loaded_options_drive_quoting() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_options(
        &dir,
        "[charlist_conversion]\nmodule = \"Elixir.List\"\nfunction = \"to_charlist\"\n",
    );
    let options = QuoteOptions::load(&path).expect("valid options");

    let quoted = quote_source_with_options("'#{a}'", &options).expect("quote");
    assert_eq!(
        quoted,
        Term::remote_call(
            Term::atom("Elixir.List"),
            "to_charlist",
            common::meta(1),
            vec![binary_construction(vec![interpolated(var("a", 1), 1)], 1)],
        )
    );
}

#[test]
fn test_columns_in_metadata() {
    let options = QuoteOptions::from_toml_str("columns = true").expect("valid options");
    let quoted = quote_source_with_options("a  + b", &options).expect("quote");
    let at = |column: i64| {
        Term::keyword([("line", Term::integer(1)), ("column", Term::integer(column))])
    };
    assert_eq!(
        quoted,
        Term::call(
            Term::atom("+"),
            at(4),
            vec![
                Term::call(Term::atom("a"), at(1), vec![]),
                Term::call(Term::atom("b"), at(6), vec![]),
            ],
        )
    );
}
