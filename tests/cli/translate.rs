use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use std::process::Command;

use crate::CliTest;

fn catalogs() -> Result<CliTest> {
    let test = CliTest::with_file(
        "lang/app-de.tr",
        r#"{"Messages":[
            {"Source":"Hello","Translation":"Hallo"},
            {"Source":"Exit","Context":["menu"],"Translation":"Beenden"},
            {"Source":"Save","Translation":""}
        ]}"#,
    )?;
    test.write_file(
        "lang/nested/app-de_AT.tr",
        r#"{"Messages":[{"Source":"Hello","Translation":"Servus"}]}"#,
    )?;
    Ok(test)
}

fn translate(test: &CliTest, locale: &str, args: &[&str]) -> Command {
    let mut cmd = test.translate_command();
    cmd.args(["--dir", "lang", "--locale", locale]).args(args);
    cmd
}

#[test]
fn test_translate_with_fallback() -> Result<()> {
    let test = catalogs()?;

    assert_cmd_snapshot!(translate(&test, "de_AT", &["Hello"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Servus

    ----- stderr -----
    ");

    assert_cmd_snapshot!(translate(&test, "de_AT", &["Exit", "-c", "menu"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Beenden

    ----- stderr -----
    ");

    assert_cmd_snapshot!(translate(&test, "de", &["Hello"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hallo

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_returns_source_when_missing() -> Result<()> {
    let test = catalogs()?;

    assert_cmd_snapshot!(translate(&test, "de", &["Exit"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Exit

    ----- stderr -----
    ");

    assert_cmd_snapshot!(translate(&test, "de", &["Save"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Save

    ----- stderr -----
    ");

    assert_cmd_snapshot!(translate(&test, "fr", &["Hello"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_invalid_locale() -> Result<()> {
    let test = catalogs()?;

    assert_cmd_snapshot!(translate(&test, "de-AT", &["Hello"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to load translations for 'de-AT' from lang: invalid locale: "de-AT"
    "#);

    Ok(())
}

#[test]
fn test_translate_rejects_array_catalog() -> Result<()> {
    let test = catalogs()?;
    test.write_file("lang/broken-de.tr", "[]")?;

    assert_cmd_snapshot!(translate(&test, "de", &["Hello"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to load translations for 'de' from lang: failed to decode catalog file lang/broken-de.tr: expected catalog document to be a JSON object
    ");

    Ok(())
}

#[test]
fn test_translate_dir_must_be_a_directory() -> Result<()> {
    let test = catalogs()?;

    let mut cmd = test.translate_command();
    cmd.args(["--dir", "lang/app-de.tr", "--locale", "de", "Hello"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to load translations for 'de' from lang/app-de.tr: failed to access lang/app-de.tr: not a directory
    ");

    Ok(())
}
