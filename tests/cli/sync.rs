use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

const APP_SOURCE: &str = r#"const a = tr("Hello");
const b = tr("Exit", "menu");
"#;

fn messages(content: &str) -> Result<Vec<Value>> {
    let parsed: Value = serde_json::from_str(content)?;
    Ok(parsed["Messages"].as_array().cloned().unwrap_or_default())
}

#[test]
fn test_sync_creates_catalogs() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", APP_SOURCE)?;

    let mut cmd = test.sync_command();
    cmd.args(["--dir", "src", "--name", "i18n/app", "--locales", "de,fr_FR"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Scanned 1 source file: 2 messages from 2 calls
    ✓ [de] i18n/app-de.tr: updated (2 messages, 0 translated, 2 new)
    ✓ [fr_FR] i18n/app-fr_FR.tr: updated (2 messages, 0 translated, 2 new)

    ----- stderr -----
    ");

    let catalog = messages(&test.read_file("i18n/app-de.tr")?)?;
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0]["Source"], "Exit");
    assert_eq!(catalog[0]["Context"][0], "menu");
    assert_eq!(catalog[0]["Locations"][0]["File"], "app.ts");
    assert_eq!(catalog[0]["Locations"][0]["Line"], "2");
    assert_eq!(catalog[1]["Source"], "Hello");
    assert!(catalog[1].get("Context").is_none());
    assert_eq!(catalog[1]["Translation"], "");
    assert!(test.root().join("i18n/app-fr_FR.tr").exists());

    Ok(())
}

#[test]
fn test_sync_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("web/app.tsx", "export const T = () => <p>{tr(`Hi`)}</p>;\n")?;
    test.write_file(
        ".polyglotrc.json",
        r#"{ "baseName": "lang/web", "sourceRoot": "web", "locales": ["es"] }"#,
    )?;

    assert_cmd_snapshot!(test.sync_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Scanned 1 source file: 1 message from 1 call
    ✓ [es] lang/web-es.tr: updated (1 message, 0 translated, 1 new)

    ----- stderr -----
    ");

    let catalog = messages(&test.read_file("lang/web-es.tr")?)?;
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0]["Source"], "Hi");

    Ok(())
}

#[test]
fn test_sync_locales_flag_overrides_invalid_config() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "tr(\"Hi\");\n")?;
    test.write_file(
        ".polyglotrc.json",
        r#"{ "baseName": "app", "sourceRoot": "src", "locales": ["EN"] }"#,
    )?;

    let mut cmd = test.sync_command();
    cmd.args(["--locales", "en"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Scanned 1 source file: 1 message from 1 call
    ✓ [en] app-en.tr: updated (1 message, 0 translated, 1 new)

    ----- stderr -----
    ");

    assert!(test.root().join("app-en.tr").exists());

    Ok(())
}

#[test]
fn test_sync_keeps_translations_and_drops_orphans() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", APP_SOURCE)?;
    test.write_file(
        "i18n/app-de.tr",
        r#"{"Messages":[
            {"Locations":[{"File":"old.ts","Line":"9"}],"Source":"Hello","Translation":"Hallo"},
            {"Locations":[],"Source":"Gone","Context":null,"Translation":"Weg"}
        ]}"#,
    )?;

    let mut cmd = test.sync_command();
    cmd.args(["--dir", "src", "--name", "i18n/app", "--locales", "de"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Scanned 1 source file: 2 messages from 2 calls
    ✓ [de] i18n/app-de.tr: updated (2 messages, 1 translated, 1 carried, 1 new, 1 dropped)

    ----- stderr -----
    warning: translation of "Gone" dropped (no longer used in source)
      --> i18n/app-de.tr
      = translation: "Weg"
    "#);

    let content = test.read_file("i18n/app-de.tr")?;
    let catalog = messages(&content)?;
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[1]["Source"], "Hello");
    assert_eq!(catalog[1]["Translation"], "Hallo");
    assert_eq!(catalog[1]["Locations"][0]["File"], "app.ts");
    assert!(!content.contains("Gone"));

    Ok(())
}

#[test]
fn test_sync_twice_is_stable() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", APP_SOURCE)?;
    let args = ["--dir", "src", "--name", "app", "--locales", "it"];

    assert!(test.sync_command().args(args).status()?.success());
    let first = test.read_file("app-it.tr")?;

    let mut cmd = test.sync_command();
    cmd.args(args);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Scanned 1 source file: 2 messages from 2 calls
    ✓ [it] app-it.tr: up to date (2 messages, 0 translated, 2 carried)

    ----- stderr -----
    ");

    assert_eq!(test.read_file("app-it.tr")?, first);

    Ok(())
}

#[test]
fn test_sync_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", APP_SOURCE)?;

    let mut cmd = test.sync_command();
    cmd.args(["--dir", "src", "--name", "app", "--locales", "de", "--dry-run"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Scanned 1 source file: 2 messages from 2 calls
    ✓ [de] app-de.tr: would be updated (2 messages, 0 translated, 2 new)

    ----- stderr -----
    ");

    assert!(!test.root().join("app-de.tr").exists());

    Ok(())
}

#[test]
fn test_sync_check_reports_out_of_date() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", APP_SOURCE)?;
    let args = ["--dir", "src", "--name", "app", "--locales", "de"];

    let mut cmd = test.sync_command();
    cmd.args(args).arg("--check");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ Scanned 1 source file: 2 messages from 2 calls
    ✘ [de] app-de.tr: out of date (2 messages, 0 translated, 2 new)

    ----- stderr -----
    ");

    assert!(!test.root().join("app-de.tr").exists());

    assert!(test.sync_command().args(args).status()?.success());

    let mut cmd = test.sync_command();
    cmd.args(args).arg("--check");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Scanned 1 source file: 2 messages from 2 calls
    ✓ [de] app-de.tr: up to date (2 messages, 0 translated, 2 carried)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_sync_invalid_locale() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", APP_SOURCE)?;

    let mut cmd = test.sync_command();
    cmd.args(["--dir", "src", "--name", "app", "--locales", "de,EN"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid entry in 'locales': invalid locale: "EN"
    "#);

    assert!(!test.root().join("app-de.tr").exists());

    Ok(())
}

#[test]
fn test_sync_requires_name_and_locales() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", APP_SOURCE)?;

    let mut cmd = test.sync_command();
    cmd.args(["--dir", "src", "--locales", "de"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Missing catalog base name: pass --name or set 'baseName' in the config file
    ");

    let mut cmd = test.sync_command();
    cmd.args(["--dir", "src", "--name", "app"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: No target locales: pass --locales or set 'locales' in the config file
    ");

    Ok(())
}

#[test]
fn test_sync_source_root_must_be_a_directory() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", APP_SOURCE)?;

    let mut cmd = test.sync_command();
    cmd.args(["--dir", "src/app.ts", "--name", "app", "--locales", "de"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to synchronize catalogs for src/app.ts: failed to access src/app.ts: not a directory
    ");

    assert!(!test.root().join("app-de.tr").exists());

    Ok(())
}

#[test]
fn test_sync_parse_error_fails_without_writing() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "const = tr(\"Hello\"\n")?;

    let mut cmd = test.sync_command();
    cmd.args(["--dir", "src", "--name", "app", "--locales", "de"]);

    insta::with_settings!({filters => vec![
        (r"(failed to parse source file src/broken\.ts): .*", "$1: [PARSE ERROR]"),
    ]}, {
        assert_cmd_snapshot!(cmd, @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to synchronize catalogs for src: failed to parse source file src/broken.ts: [PARSE ERROR]
        ");
    });

    assert!(!test.root().join("app-de.tr").exists());

    Ok(())
}

#[test]
fn test_sync_skips_ignored_directories() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "tr(\"Mine\");\n")?;
    test.write_file("src/node_modules/lib/index.js", "tr(\"Theirs\");\n")?;

    let mut cmd = test.sync_command();
    cmd.args(["--dir", "src", "--name", "app", "--locales", "de"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Scanned 1 source file: 1 message from 1 call
    ✓ [de] app-de.tr: updated (1 message, 0 translated, 1 new)

    ----- stderr -----
    ");

    let content = test.read_file("app-de.tr")?;
    assert!(content.contains("Mine"));
    assert!(!content.contains("Theirs"));

    Ok(())
}
