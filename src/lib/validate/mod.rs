//! Pure validation rules for project names, licenses and languages.
//!
//! The allow-lists are immutable data handed to the [`Validator`] at
//! construction time, so tests can run against alternate sets without
//! touching process-wide state.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

use crate::config::UserConfig;

/// The language/framework tokens hydra can scaffold
pub const SUPPORTED_LANGUAGES: [&str; 7] = ["go", "python", "web", "flask", "ruby", "c", "c++"];

/// License code → full display name
pub const SUPPORTED_LICENSES: [(&str, &str); 7] = [
    ("APACHE", "Apache License"),
    ("BSD", "Berkeley Software Distribution 3-Clause"),
    ("EPL", "Eclipse Public License"),
    ("GPL", "GNU General Public License v3"),
    ("MIT", "Massachusetts Institute of Technology License"),
    ("MPL", "Mozilla Public License"),
    ("UNI", "The Unilicense"),
];

// Exactly the documented filesystem-unsafe set. Notably `/` is not part
// of it, and the empty name is not rejected here either.
const FORBIDDEN_NAME_CHARS: &str = r#"[.?*:,'"|<>]"#;

fn forbidden_name_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(FORBIDDEN_NAME_CHARS).expect("invalid forbidden-name character class")
    })
}

pub struct Validator {
    languages: Vec<String>,
    licenses: IndexMap<String, String>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(
            SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()),
            SUPPORTED_LICENSES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string())),
        )
    }
}

impl Validator {
    pub fn new(
        languages: impl IntoIterator<Item = String>,
        licenses: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            languages: languages.into_iter().collect(),
            licenses: licenses.into_iter().collect(),
        }
    }

    /// A project name is acceptable iff it contains none of the
    /// filesystem-unsafe characters `. ? * : , ' " | < >`
    pub fn is_valid_project_name(&self, name: &str) -> bool {
        !forbidden_name_chars().is_match(name)
    }

    /// Membership in the license set, after uppercasing `code`
    pub fn is_valid_license(&self, code: &str) -> bool {
        self.licenses.contains_key(&code.to_uppercase())
    }

    /// Membership in the language set, after lowercasing `code`
    pub fn is_valid_language(&self, code: &str) -> bool {
        let code = code.to_lowercase();
        self.languages.iter().any(|l| *l == code)
    }

    /// `init` may only proceed for users that set both their full name
    /// and their GitHub username
    pub fn is_configured(&self, cfg: &UserConfig) -> bool {
        !cfg.full_name.is_empty() && !cfg.github_username.is_empty()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }

    /// License (code, full name) pairs, in declaration order
    pub fn licenses(&self) -> impl Iterator<Item = (&str, &str)> {
        self.licenses
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    pub fn license_name(&self, code: &str) -> Option<&str> {
        self.licenses.get(&code.to_uppercase()).map(String::as_str)
    }
}
