//! Property-based tests for patterns, chains and validators.
//!
//! Inputs come from a small deterministic generator so failures are
//! reproducible; each property is checked over a few thousand strings plus
//! a fixed set of adversarial inputs.

mod common;
use common::*;

use regex::NoExpand;
use std::collections::HashMap;
use std::sync::Arc;
use textguard::obfuscate::to_character_entities;
use textguard::validation::digits::is_valid;
use textguard::validation::{DomainRule, EmailUserNameLengthValidator, RealFullNameValidator};
use textguard::{escape_markup, Config, ContentReplacementModel, StringModel, TextModel};

/// Linear congruential generator; good enough to spread test inputs.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn string_from(&mut self, alphabet: &[char], max_len: usize) -> String {
        let len = (self.next() as usize) % (max_len + 1);
        (0..len)
            .map(|_| alphabet[(self.next() as usize) % alphabet.len()])
            .collect()
    }
}

fn adversarial_inputs() -> Vec<String> {
    vec![
        String::new(),
        " ".repeat(1000),
        "\n\r\t".to_string(),
        "@".repeat(500),
        "(at)".repeat(200),
        " dot ".repeat(200),
        "5".repeat(2000),
        "five ".repeat(300),
        "www.".repeat(200),
        "http://".repeat(100),
        "微信".repeat(100),
        "((((((((((".to_string(),
        "🔢📱☎️✉️".to_string(),
        "ａｂｃ＠ｄｅｆ．ｃｏｍ".to_string(),
        repeated("user at gmail dot com ", 100),
        repeated("a.", 500),
    ]
}

mod chain_properties {
    use super::*;

    /// None of the default patterns can match text built from these
    /// characters: no at sign, no "a", no digit words, no "www" or "http".
    const INERT: &[char] = &[
        'b', 'c', 'd', 'f', 'g', 'i', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v',
        'y', 'z', ' ', '.', ',', '!', '?', '-', '(', ')', '\n',
    ];

    #[test]
    fn test_apply_never_panics() {
        let chain = Config::default().build_chain().unwrap();
        for input in adversarial_inputs() {
            let _ = chain.apply(&input);
        }
    }

    #[test]
    fn test_inert_text_is_unchanged() {
        let chain = Config::default().build_chain().unwrap();
        let mut rng = Lcg(7);
        for _ in 0..2000 {
            let input = rng.string_from(INERT, 60);
            assert_eq!(chain.apply(&input), input);
        }
    }

    #[test]
    fn test_chain_equals_replacers_in_sequence() {
        let chain = Config::default().build_chain().unwrap();
        let alphabet: Vec<char> = "ab05@. wxtohe:(/)信微".chars().collect();
        let mut rng = Lcg(11);
        for _ in 0..2000 {
            let input = rng.string_from(&alphabet, 40);
            let stepwise = chain.iter().fold(input.clone(), |text, replacer| {
                replacer
                    .pattern()
                    .replace_all(&text, NoExpand(replacer.replacement()))
                    .into_owned()
            });
            assert_eq!(chain.apply(&input), stepwise, "input: {:?}", input);
        }
    }

    #[test]
    fn test_escaped_output_contains_no_user_markup() {
        let chain = Arc::new(Config::default().build_chain().unwrap());
        let alphabet: Vec<char> = "<>&\"'ab1@ /".chars().collect();
        let mut rng = Lcg(13);
        for _ in 0..2000 {
            let input = rng.string_from(&alphabet, 40);
            let model = ContentReplacementModel::new(StringModel::new(input.clone()), chain.clone())
                .with_escape_model_string(true);
            let output = model.get().unwrap();
            assert!(
                !output.contains(['<', '>', '"', '\'']),
                "input {:?} produced {:?}",
                input,
                output
            );
        }
    }
}

mod escape_properties {
    use super::*;

    #[test]
    fn test_escape_only_grows_special_characters() {
        let alphabet: Vec<char> = "<>&\"'abc 清".chars().collect();
        let mut rng = Lcg(17);
        for _ in 0..1000 {
            let input = rng.string_from(&alphabet, 30);
            let escaped = escape_markup(&input);
            let plain: String = input
                .chars()
                .filter(|c| !matches!(c, '<' | '>' | '&' | '"' | '\''))
                .collect();
            assert!(escaped.len() >= input.len());
            assert!(!escaped.contains(['<', '>', '"', '\'']));
            // text between entities is untouched
            assert_eq!(strip_entities(&escaped), plain, "input: {:?}", input);
        }
    }

    fn strip_entities(escaped: &str) -> String {
        ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"]
            .iter()
            .fold(escaped.to_string(), |text, entity| text.replace(entity, ""))
    }

    #[test]
    fn test_character_entities_cover_every_char() {
        let alphabet: Vec<char> = "a@.清é 😀".chars().collect();
        let mut rng = Lcg(19);
        for _ in 0..500 {
            let input = rng.string_from(&alphabet, 20);
            let encoded = to_character_entities(&input);
            assert_eq!(encoded.matches("&#").count(), input.chars().count());
            assert!(!encoded.contains(';'));
        }
    }
}

mod validator_properties {
    use super::*;

    #[test]
    fn test_max_digits_counts_ascii_digits() {
        let alphabet: Vec<char> = "0123456789abc -１".chars().collect();
        let mut rng = Lcg(23);
        for _ in 0..2000 {
            let input = rng.string_from(&alphabet, 30);
            let digits = input.chars().filter(char::is_ascii_digit).count();
            for max in 1..8 {
                assert_eq!(is_valid(&input, max), digits <= max, "input: {:?}", input);
            }
        }
    }

    #[test]
    fn test_email_length_matches_rule() {
        let validator = EmailUserNameLengthValidator::new(HashMap::from([(
            "example".to_string(),
            DomainRule::for_min_max_length(3, 8),
        )]));
        let alphabet: Vec<char> = "ab.é_".chars().collect();
        let mut rng = Lcg(29);
        for _ in 0..1000 {
            let user = rng.string_from(&alphabet, 12);
            let length = user.chars().count();
            let email = format!("{}@example.co.uk", user);
            assert_eq!(
                validator.validate(&email).is_ok(),
                (3..=8).contains(&length),
                "email: {:?}",
                email
            );
        }
    }

    #[test]
    fn test_name_validator_never_panics() {
        let validator = RealFullNameValidator::builder().build().unwrap();
        for first in adversarial_inputs() {
            for family in ["", "Smith", "清", "-", "a.b"] {
                let _ = validator.validate(&first, family);
            }
        }
    }
}
