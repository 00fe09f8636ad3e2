use clap::{Parser, Subcommand, ValueEnum};

use crate::utils::constants;

/// [`CliArgs`] is the command line arguments parser
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = constants::HYDRA)]
#[command(version)]
#[command(
    about = "hydra is a command line utility used to generate language-specific project structures",
    long_about = "hydra is a command line utility used to generate language-specific project structures.\nFor more detailed information and documentation, visit https://github.com/shravanasati/hydra"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, help = "hydra maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,
}

/// [`Command`] - The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Alter or set the hydra user configuration
    Config {
        /// The user's full name
        #[arg(long, default_value = "")]
        name: String,
        /// The user's GitHub username
        #[arg(long, default_value = "")]
        github_username: String,
        /// The user's default language for project initialisation
        #[arg(long, default_value = "")]
        default_lang: String,
        /// The user's default license for project initialisation
        #[arg(long, default_value = constants::DEFAULT_LICENSE)]
        default_license: String,
    },
    /// Initialises the project structure
    Init {
        /// Name of the project
        name: String,
        /// Language/framework of the project. Execute `hydra list langs`
        /// to view the valid options for this parameter
        #[arg(default_value = constants::DEFAULT_SENTINEL)]
        lang: String,
        /// The license to initialise the project with
        #[arg(long, default_value = constants::DEFAULT_SENTINEL)]
        license: String,
    },
    /// Lists supported languages, licenses and user configurations
    List {
        /// The item to list
        #[arg(value_enum)]
        item: ListItem,
    },
}

/// The reports available through the `list` command
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListItem {
    Langs,
    Licenses,
    Configs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn init_defaults_to_the_sentinel_language_and_license() {
        let parser = CliArgs::parse_from(["", "init", "my-app"]);
        assert_eq!(
            parser.command,
            Command::Init {
                name: "my-app".into(),
                lang: "default".into(),
                license: "default".into(),
            }
        );
    }

    #[test]
    fn init_accepts_explicit_language_and_license() {
        let parser = CliArgs::parse_from(["", "init", "my-app", "go", "--license", "gpl"]);
        assert_eq!(
            parser.command,
            Command::Init {
                name: "my-app".into(),
                lang: "go".into(),
                license: "gpl".into(),
            }
        );
    }

    #[test]
    fn config_flags_map_to_the_four_stored_fields() {
        let parser = CliArgs::parse_from([
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
        ]);
        assert_eq!(
            parser.command,
            Command::Config {
                name: "Ada Lovelace".into(),
                github_username: "ada".into(),
                default_lang: "python".into(),
                default_license: "mit".into(),
            }
        );
    }

    #[test]
    fn list_items_parse_as_value_enums() {
        for (token, item) in [
            ("langs", ListItem::Langs),
            ("licenses", ListItem::Licenses),
            ("configs", ListItem::Configs),
        ] {
            let parser = CliArgs::parse_from(["", "list", token]);
            assert_eq!(parser.command, Command::List { item });
        }
    }

    #[test]
    fn verbosity_flag_is_counted() {
        let parser = CliArgs::parse_from(["", "-v", "list", "langs"]);
        assert_eq!(1, parser.verbose);
    }
}
