//! The static boilerplate text assets embedded into the binary

pub const README: &str = include_str!("readme.md");

pub const GO_MAIN: &str = include_str!("main.go");
pub const GO_MOD: &str = include_str!("go.mod");
pub const GO_GITIGNORE: &str = include_str!("go.gitignore");

pub const PYTHON_MAIN: &str = include_str!("main.py");
pub const PYTHON_REQUIREMENTS: &str = include_str!("requirements.txt");
pub const PYTHON_GITIGNORE: &str = include_str!("python.gitignore");

pub const WEB_INDEX: &str = include_str!("index.html");
pub const WEB_STYLESHEET: &str = include_str!("style.css");
pub const WEB_SCRIPT: &str = include_str!("script.js");
pub const WEB_GITIGNORE: &str = include_str!("web.gitignore");

pub const FLASK_APP: &str = include_str!("app.py");
pub const FLASK_REQUIREMENTS: &str = include_str!("flask_requirements.txt");
pub const FLASK_INDEX: &str = include_str!("flask_index.html");

pub const RUBY_MAIN: &str = include_str!("main.rb");
pub const RUBY_GEMFILE: &str = include_str!("Gemfile");
pub const RUBY_GITIGNORE: &str = include_str!("ruby.gitignore");

pub const C_MAIN: &str = include_str!("main.c");
pub const C_MAKEFILE: &str = include_str!("c.Makefile");
pub const C_GITIGNORE: &str = include_str!("c.gitignore");

pub const CPP_MAIN: &str = include_str!("main.cpp");
pub const CPP_MAKEFILE: &str = include_str!("cpp.Makefile");

pub mod licenses {
    pub const APACHE: &str = include_str!("licenses/apache.txt");
    pub const BSD: &str = include_str!("licenses/bsd.txt");
    pub const EPL: &str = include_str!("licenses/epl.txt");
    pub const GPL: &str = include_str!("licenses/gpl.txt");
    pub const MIT: &str = include_str!("licenses/mit.txt");
    pub const MPL: &str = include_str!("licenses/mpl.txt");
    pub const UNI: &str = include_str!("licenses/uni.txt");
}

/// The license body text for an (already uppercased) license code
pub fn license_body(code: &str) -> Option<&'static str> {
    match code {
        "APACHE" => Some(licenses::APACHE),
        "BSD" => Some(licenses::BSD),
        "EPL" => Some(licenses::EPL),
        "GPL" => Some(licenses::GPL),
        "MIT" => Some(licenses::MIT),
        "MPL" => Some(licenses::MPL),
        "UNI" => Some(licenses::UNI),
        _ => None,
    }
}
