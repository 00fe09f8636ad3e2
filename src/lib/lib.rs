pub mod cli;
pub mod config;
pub mod error;
pub mod scaffold;
pub mod utils;
pub mod validate;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::Path;

    use color_eyre::{eyre::Context, Result};

    use crate::cli::input::{CliArgs, Command, ListItem};
    use crate::config::{ConfigStore, UserConfig};
    use crate::error::HydraError;
    use crate::scaffold::{self, ProjectRequest};
    use crate::utils::constants;
    use crate::validate::Validator;

    /// The main work of the program. Runs the command inputted in the
    /// CLI against `base_path` (where `init` creates projects) and the
    /// configuration file at `config_file`.
    pub fn run_hydra(cli_args: &CliArgs, base_path: &Path, config_file: &Path) -> Result<()> {
        let store = ConfigStore::new(config_file);
        let validator = Validator::default();

        match &cli_args.command {
            Command::Config {
                name,
                github_username,
                default_lang,
                default_license,
            } => run_config(&store, name, github_username, default_lang, default_license),
            Command::Init {
                name,
                lang,
                license,
            } => run_init(&store, &validator, base_path, name, lang, license),
            Command::List { item } => run_list(&store, &validator, *item),
        }
    }

    /// Fully replaces the stored configuration record with the given
    /// flag values, uppercasing the license code before persisting it
    fn run_config(
        store: &ConfigStore,
        name: &str,
        github_username: &str,
        default_lang: &str,
        default_license: &str,
    ) -> Result<()> {
        // The pre-load initializes an absent file. A corrupt one must
        // not abort here: the save below fully replaces the record
        // anyway, so `config` doubles as the reset path
        if let Err(report) = store.load() {
            match report.downcast_ref::<HydraError>() {
                Some(HydraError::CorruptConfig { .. }) => {
                    log::warn!("{report}");
                    log::warn!("Resetting the corrupt configuration file");
                }
                _ => return Err(report),
            }
        }

        let update = UserConfig {
            full_name: name.to_owned(),
            github_username: github_username.to_owned(),
            default_lang: default_lang.to_owned(),
            default_license: default_license.to_uppercase(),
        };
        store.save(&update)?;
        log::info!("Configuration saved to {:?}", store.path());

        Ok(())
    }

    /// The `init` state machine. Five strictly sequential steps; the
    /// first failing one terminates the run with its own error kind and
    /// no further filesystem action.
    fn run_init(
        store: &ConfigStore,
        validator: &Validator,
        base_path: &Path,
        name: &str,
        lang: &str,
        license: &str,
    ) -> Result<()> {
        // 1. The user must have set their full name and GitHub username
        let cfg = store.load()?;
        if !validator.is_configured(&cfg) {
            return Err(HydraError::NotConfigured.into());
        }

        // 2. Resolve the license, substituting the stored default for
        // the sentinel, then normalize and validate
        let mut license = license.to_owned();
        if license.eq_ignore_ascii_case(constants::DEFAULT_SENTINEL) {
            license = cfg.default_license.clone();
        }
        let license = license.to_uppercase();
        if !validator.is_valid_license(&license) {
            return Err(HydraError::InvalidLicense(license).into());
        }

        // 3. Resolve the language the same way. Unlike the historical
        // behaviour, membership is checked here explicitly instead of
        // relying on a dispatch miss
        let mut lang = lang.to_lowercase();
        if lang == constants::DEFAULT_SENTINEL {
            lang = cfg.default_lang.to_lowercase();
        }
        if !validator.is_valid_language(&lang) {
            return Err(HydraError::UnsupportedLanguage(lang).into());
        }

        // 4. The project name must be filesystem-safe
        if !validator.is_valid_project_name(name) {
            return Err(HydraError::InvalidProjectName(name.to_owned()).into());
        }

        // 5. Dispatch to the language scaffold
        let request = ProjectRequest {
            project_name: name,
            language: &lang,
            license: &license,
        };
        scaffold::create_scaffolded_project(base_path, &request, &cfg, validator)
            .with_context(|| constants::error_messages::FAILURE_SCAFFOLDING)?;

        log::info!("Successfully created the {lang} project '{name}'");
        Ok(())
    }

    /// Read-only reports over the static allow-lists and the current
    /// user configuration
    fn run_list(store: &ConfigStore, validator: &Validator, item: ListItem) -> Result<()> {
        match item {
            ListItem::Langs => {
                println!("Supported languages:");
                for lang in validator.languages() {
                    println!("  {lang}");
                }
            }
            ListItem::Licenses => {
                println!("Supported licenses:");
                for (code, full_name) in validator.licenses() {
                    println!("  {code:<8} {full_name}");
                }
            }
            ListItem::Configs => {
                let cfg = store.load()?;
                println!("Full name:       {}", cfg.full_name);
                println!("GitHub username: {}", cfg.github_username);
                println!("Default lang:    {}", cfg.default_lang);
                println!("Default license: {}", cfg.default_license);
            }
        }

        Ok(())
    }
}
