use clap::Parser;
use color_eyre::Result;
use tempfile::tempdir;

use hydra::cli::input::CliArgs;
use hydra::config::{ConfigStore, UserConfig};
use hydra::error::HydraError;
use hydra::worker::run_hydra;

const CONFIG_FILE: &str = "hydra_config.json";

#[test]
fn test_full_program_config_then_init() -> Result<()> {
    let temp = tempdir()?;
    let config_file = temp.path().join(CONFIG_FILE);

    run_hydra(
        &CliArgs::parse_from([
            "",
            "config",
            "--name",
            "Ada Lovelace",
            "--github-username",
            "ada",
            "--default-lang",
            "python",
            "--default-license",
            "mit",
        ]),
        temp.path(),
        &config_file,
    )?;

    // The license flag was given lowercase; `config` uppercases it
    // before saving
    let stored = ConfigStore::new(&config_file).load()?;
    assert_eq!(
        stored,
        UserConfig {
            full_name: "Ada Lovelace".into(),
            github_username: "ada".into(),
            default_lang: "python".into(),
            default_license: "MIT".into(),
        }
    );

    // Explicit language, sentinel license resolved from the stored default
    run_hydra(
        &CliArgs::parse_from(["", "init", "gopher", "go"]),
        temp.path(),
        &config_file,
    )?;
    let project = temp.path().join("gopher");
    assert!(project.join("main.go").exists());
    assert!(project.join("go.mod").exists());
    assert!(project.join("README.md").exists());
    assert!(project.join("LICENSE").exists());
    assert!(project.join(".gitignore").exists());

    // Sentinel language resolved from the stored default
    run_hydra(
        &CliArgs::parse_from(["", "init", "snake"]),
        temp.path(),
        &config_file,
    )?;
    assert!(temp.path().join("snake").join("main.py").exists());

    // The list reports run cleanly against the same configuration
    for item in ["langs", "licenses", "configs"] {
        run_hydra(
            &CliArgs::parse_from(["", "list", item]),
            temp.path(),
            &config_file,
        )?;
    }

    Ok(temp.close()?)
}

#[test]
fn test_init_is_gated_on_the_user_configuration() -> Result<()> {
    let temp = tempdir()?;
    let config_file = temp.path().join(CONFIG_FILE);

    let err = run_hydra(
        &CliArgs::parse_from(["", "init", "my-app", "go"]),
        temp.path(),
        &config_file,
    )
    .expect_err("init must abort for an unconfigured user");

    assert_eq!(
        err.downcast_ref::<HydraError>(),
        Some(&HydraError::NotConfigured)
    );
    assert!(
        !temp.path().join("my-app").exists(),
        "a gated init must not touch the filesystem"
    );
    // The gate check itself initialized the config file with the defaults
    assert!(config_file.exists());

    Ok(temp.close()?)
}

#[test]
fn test_init_rejects_an_unsupported_language() -> Result<()> {
    let temp = tempdir()?;
    let config_file = temp.path().join(CONFIG_FILE);
    configure_user(temp.path(), &config_file)?;

    let err = run_hydra(
        &CliArgs::parse_from(["", "init", "my-app", "rust"]),
        temp.path(),
        &config_file,
    )
    .expect_err("rust is not in the supported language set");

    assert_eq!(
        err.downcast_ref::<HydraError>(),
        Some(&HydraError::UnsupportedLanguage("rust".into()))
    );
    assert!(!temp.path().join("my-app").exists());

    Ok(temp.close()?)
}

#[test]
fn test_init_rejects_an_invalid_license() -> Result<()> {
    let temp = tempdir()?;
    let config_file = temp.path().join(CONFIG_FILE);
    configure_user(temp.path(), &config_file)?;

    let err = run_hydra(
        &CliArgs::parse_from(["", "init", "my-app", "go", "--license", "wtfpl"]),
        temp.path(),
        &config_file,
    )
    .expect_err("WTFPL is not in the supported license set");

    assert_eq!(
        err.downcast_ref::<HydraError>(),
        Some(&HydraError::InvalidLicense("WTFPL".into()))
    );
    assert!(!temp.path().join("my-app").exists());

    Ok(temp.close()?)
}

#[test]
fn test_init_rejects_filesystem_unsafe_project_names() -> Result<()> {
    let temp = tempdir()?;
    let config_file = temp.path().join(CONFIG_FILE);
    configure_user(temp.path(), &config_file)?;

    let err = run_hydra(
        &CliArgs::parse_from(["", "init", "my:app", "go"]),
        temp.path(),
        &config_file,
    )
    .expect_err("colons are not allowed in project names");

    assert_eq!(
        err.downcast_ref::<HydraError>(),
        Some(&HydraError::InvalidProjectName("my:app".into()))
    );
    assert!(!temp.path().join("my:app").exists());

    Ok(temp.close()?)
}

#[test]
fn test_config_fully_replaces_the_stored_record() -> Result<()> {
    let temp = tempdir()?;
    let config_file = temp.path().join(CONFIG_FILE);
    configure_user(temp.path(), &config_file)?;

    // A second `config` invocation replaces all four fields, including
    // the ones whose flags were omitted this time
    run_hydra(
        &CliArgs::parse_from(["", "config", "--name", "Grace Hopper"]),
        temp.path(),
        &config_file,
    )?;

    let stored = ConfigStore::new(&config_file).load()?;
    assert_eq!(stored.full_name, "Grace Hopper");
    assert_eq!(stored.github_username, "");
    assert_eq!(stored.default_lang, "");
    assert_eq!(stored.default_license, "MIT");

    Ok(temp.close()?)
}

#[test]
fn test_config_resets_a_corrupt_configuration_file() -> Result<()> {
    let temp = tempdir()?;
    let config_file = temp.path().join(CONFIG_FILE);
    std::fs::write(&config_file, "{ not json at all")?;

    // A corrupt file aborts `init` with the dedicated error kind...
    let err = run_hydra(
        &CliArgs::parse_from(["", "init", "my-app", "go"]),
        temp.path(),
        &config_file,
    )
    .expect_err("init must not run over a corrupt configuration");
    assert!(matches!(
        err.downcast_ref::<HydraError>(),
        Some(&HydraError::CorruptConfig { .. })
    ));

    // ...but `config` is the reset path: it fully replaces the record
    // instead of failing on the unreadable one
    configure_user(temp.path(), &config_file)?;

    let stored = ConfigStore::new(&config_file).load()?;
    assert_eq!(stored.full_name, "Ada Lovelace");
    assert_eq!(stored.default_license, "MIT");

    // The reset file is usable again end to end
    run_hydra(
        &CliArgs::parse_from(["", "init", "my-app", "go"]),
        temp.path(),
        &config_file,
    )?;
    assert!(temp.path().join("my-app").join("main.go").exists());

    Ok(temp.close()?)
}

fn configure_user(base_path: &std::path::Path, config_file: &std::path::Path) -> Result<()> {
    run_hydra(
        &CliArgs::parse_from([
            "",
            "config",
            "--name",
            "Ada Lovelace",
            "--github-username",
            "ada",
            "--default-lang",
            "go",
            "--default-license",
            "MIT",
        ]),
        base_path,
        config_file,
    )
}
