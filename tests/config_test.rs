//! Integration tests for TOML configuration.

mod common;
use common::*;

use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use textguard::config::ReplacerKind;
use textguard::validation::NameRule;
use textguard::{Config, ContentReplacementModel, StringModel, TextGuardError, TextModel};

const FULL_CONFIG: &str = r#"
escape = false
max_digits = 10

[[replacer]]
kind = "email"
domains = ["gmail", "yahoo"]
href = "/contact"
text = "email link"

[[replacer]]
kind = "number_sequence"
min_numbers = 7
replacement = "[number]"

[[replacer]]
kind = "custom"
pattern = "telegram\\s*@\\w+"
replacement = "[telegram]"

[name]
denylist = ["test user"]
illegal_chars = "!?"
titles = ["mr", "sir"]

[email_rules]
"gmail.com" = { min = 6, max = 30 }
yahoo = { min = 4 }
"#;

#[test]
fn test_load_full_config() -> Result<()> {
    setup_logger();
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("textguard.toml");
    fs::write(&path, FULL_CONFIG)?;

    let config = Config::load(&path)?;
    assert!(!config.escape());
    assert_eq!(config.max_digits(), Some(10));
    let kinds: Vec<ReplacerKind> = config.replacers().iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        [ReplacerKind::Email, ReplacerKind::NumberSequence, ReplacerKind::Custom]
    );

    let chain = config.build_chain()?;
    assert_eq!(
        chain.apply("joe at gmail dot com, 555 123 4567 or Telegram @joe"),
        "<a href=\"/contact\">email link</a>, [number] or [telegram]"
    );
    Ok(())
}

#[test]
fn test_validators_from_config() -> Result<()> {
    let config = Config::from_toml_str(FULL_CONFIG)?;

    let names = config.build_name_validator()?;
    assert_eq!(
        names.validate("Sir Lancelot", "Lake").unwrap_err().rule,
        NameRule::Title
    );
    // "dr" is no longer a title once the list is configured
    assert!(names.validate("Drake", "Lake").is_ok());
    assert_eq!(
        names.validate("Test", "User").map_err(|v| v.rule),
        Ok(())
    );
    assert_eq!(
        names.validate("Test User", "Smith").unwrap_err().rule,
        NameRule::Denylisted
    );
    assert_eq!(
        names.validate("Ann!", "Smith").unwrap_err().rule,
        NameRule::IllegalCharacters
    );

    let emails = config.build_email_length_validator();
    assert!(emails.validate("abc@gmail.com").is_err());
    assert!(emails.validate("abc@yahoo.fr").is_err());
    assert!(emails.validate("abcd@yahoo.fr").is_ok());

    let digits = config.build_max_digits_validator()?.expect("max_digits is set");
    assert!(digits.validate("12345678901").is_err());
    Ok(())
}

#[test]
fn test_default_config_masks_contact_details() -> Result<()> {
    let config = Config::default();
    let model = ContentReplacementModel::new(
        StringModel::new(
            "<p>user at hotmail . com / 555-123-4567 / www.example.com / wechat: me_1</p>",
        ),
        std::sync::Arc::new(config.build_chain()?),
    )
    .with_escape_model_string(config.escape());
    assert_eq!(
        model.get().as_deref(),
        Some("&lt;p&gt;[email] / [number] / [link] / [wechat]&lt;/p&gt;")
    );
    Ok(())
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(&temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, TextGuardError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_malformed_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bad.toml");
    fs::write(&path, "[[replacer]]\nkind = \"carrier_pigeon\"\n")?;

    let err = Config::load(&path).unwrap_err();
    match err {
        TextGuardError::Config { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected a configuration error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_invalid_entries_fail_to_build() {
    let cases = [
        "[[replacer]]\nkind = \"number_sequence\"\nreplacement = \"x\"\n",
        "[[replacer]]\nkind = \"number_sequence\"\nmin_numbers = 0\nreplacement = \"x\"\n",
        "[[replacer]]\nkind = \"email\"\ndomains = []\nreplacement = \"x\"\n",
        "[[replacer]]\nkind = \"custom\"\nreplacement = \"x\"\n",
        "[[replacer]]\nkind = \"custom\"\npattern = \"(\"\nreplacement = \"x\"\n",
        "[[replacer]]\nkind = \"web_link\"\nhref = \"/x\"\n",
        "[[replacer]]\nkind = \"wechat\"\n",
    ];
    for case in cases {
        let config = Config::from_toml_str(case).unwrap();
        assert!(config.build_chain().is_err(), "should not build: {}", case);
    }
}

#[test]
fn test_empty_chain() -> Result<()> {
    let config = Config::from_toml_str("replacer = []")?;
    let chain = config.build_chain()?;
    assert!(chain.is_empty());
    assert_eq!(chain.apply("joe@gmail.com"), "joe@gmail.com");
    Ok(())
}
