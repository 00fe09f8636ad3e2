//! Project scaffolding: the per-language boilerplate layouts and the
//! machinery that materializes one of them on disk.
//!
//! The language dispatch is a data-driven registry instead of a closed
//! match, so adding a language means adding one registry entry plus its
//! text assets under [`resources`].

pub mod resources;

use std::fs;
use std::path::Path;

use chrono::{Datelike, Local};
use color_eyre::eyre::{bail, Context};
use color_eyre::Result;
use indexmap::IndexMap;

use crate::config::UserConfig;
use crate::error::HydraError;
use crate::utils::{self, constants::file_names};
use crate::validate::Validator;

/// A fully resolved and validated `init` request. Transient, built per
/// invocation and discarded once scaffolding ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest<'a> {
    pub project_name: &'a str,
    /// Lowercased language token
    pub language: &'a str,
    /// Uppercased license code
    pub license: &'a str,
}

/// One boilerplate file of a scaffold, relative to the project root
pub struct TemplateFile {
    pub rel_path: &'static str,
    pub contents: &'static str,
}

/// Everything one language scaffold creates besides the common
/// README/LICENSE pair
pub struct LanguageScaffold {
    /// Subdirectories to create below the project root
    pub dirs: &'static [&'static str],
    pub files: &'static [TemplateFile],
}

const GO_SCAFFOLD: LanguageScaffold = LanguageScaffold {
    dirs: &[],
    files: &[
        TemplateFile { rel_path: "main.go", contents: resources::GO_MAIN },
        TemplateFile { rel_path: "go.mod", contents: resources::GO_MOD },
        TemplateFile { rel_path: file_names::GITIGNORE, contents: resources::GO_GITIGNORE },
    ],
};

const PYTHON_SCAFFOLD: LanguageScaffold = LanguageScaffold {
    dirs: &[],
    files: &[
        TemplateFile { rel_path: "main.py", contents: resources::PYTHON_MAIN },
        TemplateFile { rel_path: "requirements.txt", contents: resources::PYTHON_REQUIREMENTS },
        TemplateFile { rel_path: file_names::GITIGNORE, contents: resources::PYTHON_GITIGNORE },
    ],
};

const WEB_SCAFFOLD: LanguageScaffold = LanguageScaffold {
    dirs: &["css", "js"],
    files: &[
        TemplateFile { rel_path: "index.html", contents: resources::WEB_INDEX },
        TemplateFile { rel_path: "css/style.css", contents: resources::WEB_STYLESHEET },
        TemplateFile { rel_path: "js/script.js", contents: resources::WEB_SCRIPT },
        TemplateFile { rel_path: file_names::GITIGNORE, contents: resources::WEB_GITIGNORE },
    ],
};

const FLASK_SCAFFOLD: LanguageScaffold = LanguageScaffold {
    dirs: &["templates", "static/css"],
    files: &[
        TemplateFile { rel_path: "app.py", contents: resources::FLASK_APP },
        TemplateFile { rel_path: "requirements.txt", contents: resources::FLASK_REQUIREMENTS },
        TemplateFile { rel_path: "templates/index.html", contents: resources::FLASK_INDEX },
        TemplateFile { rel_path: "static/css/style.css", contents: resources::WEB_STYLESHEET },
        TemplateFile { rel_path: file_names::GITIGNORE, contents: resources::PYTHON_GITIGNORE },
    ],
};

const RUBY_SCAFFOLD: LanguageScaffold = LanguageScaffold {
    dirs: &[],
    files: &[
        TemplateFile { rel_path: "main.rb", contents: resources::RUBY_MAIN },
        TemplateFile { rel_path: "Gemfile", contents: resources::RUBY_GEMFILE },
        TemplateFile { rel_path: file_names::GITIGNORE, contents: resources::RUBY_GITIGNORE },
    ],
};

const C_SCAFFOLD: LanguageScaffold = LanguageScaffold {
    dirs: &[],
    files: &[
        TemplateFile { rel_path: "main.c", contents: resources::C_MAIN },
        TemplateFile { rel_path: "Makefile", contents: resources::C_MAKEFILE },
        TemplateFile { rel_path: file_names::GITIGNORE, contents: resources::C_GITIGNORE },
    ],
};

const CPP_SCAFFOLD: LanguageScaffold = LanguageScaffold {
    dirs: &[],
    files: &[
        TemplateFile { rel_path: "main.cpp", contents: resources::CPP_MAIN },
        TemplateFile { rel_path: "Makefile", contents: resources::CPP_MAKEFILE },
        TemplateFile { rel_path: file_names::GITIGNORE, contents: resources::C_GITIGNORE },
    ],
};

/// Language token → scaffold layout, in `hydra list langs` order
pub fn registry() -> IndexMap<&'static str, LanguageScaffold> {
    IndexMap::from([
        ("go", GO_SCAFFOLD),
        ("python", PYTHON_SCAFFOLD),
        ("web", WEB_SCAFFOLD),
        ("flask", FLASK_SCAFFOLD),
        ("ruby", RUBY_SCAFFOLD),
        ("c", C_SCAFFOLD),
        ("c++", CPP_SCAFFOLD),
    ])
}

/// Creates the project directory for `request` under `base_path` and
/// populates it with the boilerplate file set of the requested language.
///
/// All-or-nothing: if anything fails after the project directory was
/// created, the half-created directory is removed before the error is
/// reported.
pub fn create_scaffolded_project(
    base_path: &Path,
    request: &ProjectRequest<'_>,
    author: &UserConfig,
    validator: &Validator,
) -> Result<()> {
    let registry = registry();
    let Some(scaffold) = registry.get(request.language) else {
        return Err(HydraError::UnsupportedLanguage(request.language.to_owned()).into());
    };
    let Some(license_body) = resources::license_body(request.license) else {
        return Err(HydraError::InvalidLicense(request.license.to_owned()).into());
    };
    let license_name = validator
        .license_name(request.license)
        .unwrap_or(request.license);

    let project_root = base_path.join(request.project_name);
    if project_root.exists() {
        bail!("Directory {project_root:?} already exists");
    }

    let renderer = TemplateRenderer::new(request, author, license_name);

    log::debug!(
        "Scaffolding a {} project at {project_root:?}",
        request.language
    );
    scaffold_with_rollback(&project_root, scaffold, license_body, &renderer)
}

/// Creates and populates `project_root`; if anything fails after the
/// directory came into existence, the whole directory is removed again
fn scaffold_with_rollback(
    project_root: &Path,
    scaffold: &LanguageScaffold,
    license_body: &str,
    renderer: &TemplateRenderer<'_>,
) -> Result<()> {
    utils::fs::create_directory(project_root)?;

    if let Err(e) = populate_project(project_root, scaffold, license_body, renderer) {
        let _ = fs::remove_dir_all(project_root);
        return Err(e);
    }

    Ok(())
}

fn populate_project(
    project_root: &Path,
    scaffold: &LanguageScaffold,
    license_body: &str,
    renderer: &TemplateRenderer<'_>,
) -> Result<()> {
    for dir in scaffold.dirs {
        utils::fs::create_directory(&project_root.join(dir))?;
    }

    for file in scaffold.files {
        write_rendered(project_root, file.rel_path, file.contents, renderer)?;
    }

    write_rendered(project_root, file_names::README, resources::README, renderer)?;
    write_rendered(project_root, file_names::LICENSE, license_body, renderer)
}

fn write_rendered(
    project_root: &Path,
    rel_path: &str,
    template: &str,
    renderer: &TemplateRenderer<'_>,
) -> Result<()> {
    let rendered = renderer.render(template);
    match rel_path.rsplit_once('/') {
        Some((parent, filename)) => {
            utils::fs::create_file(&project_root.join(parent), filename, rendered.as_bytes())
        }
        None => utils::fs::create_file(project_root, rel_path, rendered.as_bytes()),
    }
    .with_context(|| format!("Could not populate {rel_path}"))
}

/// Substitutes the `{placeholder}` tokens the text assets may carry
struct TemplateRenderer<'a> {
    project_name: &'a str,
    language: &'a str,
    license_name: &'a str,
    full_name: &'a str,
    github_username: &'a str,
    year: i32,
}

impl<'a> TemplateRenderer<'a> {
    fn new(request: &ProjectRequest<'a>, author: &'a UserConfig, license_name: &'a str) -> Self {
        Self {
            project_name: request.project_name,
            language: request.language,
            license_name,
            full_name: &author.full_name,
            github_username: &author.github_username,
            year: Local::now().year(),
        }
    }

    fn render(&self, template: &str) -> String {
        template
            .replace("{project_name}", self.project_name)
            .replace("{language}", self.language)
            .replace("{license_name}", self.license_name)
            .replace("{full_name}", self.full_name)
            .replace("{github_username}", self.github_username)
            .replace("{year}", &self.year.to_string())
    }
}
