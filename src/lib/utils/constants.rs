//! Constant value definitions to use across the whole program

pub const HYDRA: &str = "hydra";

pub const CONFIG_FILE_NAME: &str = "hydra_config.json";

/// Suffix appended to the config file name while a `save` is in flight,
/// before the temp file is renamed over the real one
pub const CONFIG_TMP_SUFFIX: &str = ".tmp";

/// The literal CLI token that means "take this value from the stored
/// user configuration"
pub const DEFAULT_SENTINEL: &str = "default";

/// The license assumed for users that never ran `hydra config`
pub const DEFAULT_LICENSE: &str = "MIT";

/// The names of the files every scaffolded project receives,
/// whatever the language
pub mod file_names {
    pub const README: &str = "README.md";
    pub const LICENSE: &str = "LICENSE";
    pub const GITIGNORE: &str = ".gitignore";
}

pub mod error_messages {
    pub const READ_CONFIG_FILE: &str = "Could not read the configuration file";
    pub const WRITE_CONFIG_FILE: &str = "Could not write the configuration file";
    pub const HOME_DIR_NOT_FOUND: &str =
        "Could not determine the current user's home directory";
    pub const FAILURE_SCAFFOLDING: &str = "Failed to generate the project structure";
    pub const NOT_CONFIGURED_HINT: &str =
        "To set the configuration, execute `hydra config --name \"YOUR NAME\" --github-username \"YOUR GITHUB USERNAME\"`.\nFor further assistance regarding the hydra configuration, type in `hydra config -h`.";
    pub const WRONG_LICENSE_HINT: &str =
        "You've either provided an invalid license flag in the init command, or you've set a wrong license in your hydra configuration.\nTo see your hydra configuration, execute `hydra list configs`.";
    pub const WRONG_LANG_HINT: &str =
        "Hint: you've either a typo at the language name, or the hydra default language configuration is wrong.";
}
