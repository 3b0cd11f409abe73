//! [`Args`] definitions.

use clap::Parser;

use crate::cli;

/// Command line front of the property rental data access layer.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: String,

    /// Operation to execute.
    #[command(subcommand)]
    pub command: cli::Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use service::domain::{property::City, user};

    use crate::cli::{self, property};

    use super::Args;

    #[test]
    fn defaults_config_path() {
        let args =
            Args::try_parse_from(["application", "user-by-email", "a@b.c"])
                .unwrap();

        assert_eq!(args.config, "config.toml");
        assert!(matches!(
            args.command,
            cli::Command::UserByEmail(cli::user::ByEmail { ref email })
                if *email == user::Email::from("a@b.c"),
        ));
    }

    #[test]
    fn parses_search_filters() {
        let args = Args::try_parse_from([
            "application",
            "properties",
            "--city",
            "van",
            "--min-rating",
            "4",
            "-c",
            "local.toml",
        ])
        .unwrap();

        assert_eq!(args.config, "local.toml");
        let cli::Command::Properties(property::Search {
            city,
            owner_id,
            min_cost,
            max_cost,
            min_rating,
            limit,
        }) = args.command
        else {
            panic!("expected `properties` command");
        };
        assert_eq!(city, Some(City::from("van")));
        assert_eq!(owner_id, None);
        assert_eq!(min_cost, None);
        assert_eq!(max_cost, None);
        assert_eq!(min_rating.map(|r| r.to_string()).as_deref(), Some("4"));
        assert_eq!(limit, None);
    }

    #[test]
    fn rejects_malformed_id() {
        assert!(
            Args::try_parse_from(["application", "user-by-id", "42"]).is_err()
        );
    }
}
