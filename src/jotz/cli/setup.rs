use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.1.0"
/// Format for dev builds: "v0.1.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "jotz",
    bin_name = "jotz",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Data lives in $JOTZ_HOME when set. Log filter: $JOTZ_LOG (e.g. JOTZ_LOG=debug)."
)]
#[command(about = "A plain-text journal: append dated entries, find them by keyword or day", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append an entry dated today
    #[command(alias = "n", display_order = 1)]
    Add {
        /// Entry text (joined with spaces). Reads stdin when omitted.
        #[arg(trailing_var_arg = true)]
        words: Vec<String>,
    },

    /// Find entries containing every keyword
    #[command(alias = "s", display_order = 2)]
    Search {
        /// Keywords (case-insensitive, all must match)
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show today's entries
    #[command(display_order = 3)]
    Today {
        #[arg(long)]
        json: bool,
    },

    /// Show yesterday's entries
    #[command(display_order = 4)]
    Yesterday {
        #[arg(long)]
        json: bool,
    },

    /// Show the entries of one day (YYYY-MM-DD)
    #[command(display_order = 5)]
    On {
        date: String,

        #[arg(long)]
        json: bool,
    },

    /// List the whole journal, newest first
    #[command(alias = "ls", display_order = 6)]
    List {
        /// Print full entries instead of one-line previews
        #[arg(long)]
        full: bool,

        #[arg(long)]
        json: bool,
    },

    /// Show or replace the saved keyword list
    #[command(display_order = 10)]
    Keywords {
        /// Replace the list with these keywords
        #[arg(long, num_args = 1.., value_name = "KEYWORD", conflicts_with = "clear")]
        set: Option<Vec<String>>,

        /// Remove every saved keyword
        #[arg(long)]
        clear: bool,
    },

    /// Search by a saved keyword (number from `jotz keywords`, or its name)
    #[command(display_order = 11)]
    Fav {
        selector: String,

        #[arg(long)]
        json: bool,
    },

    /// Remove duplicate entries from the journal
    #[command(display_order = 20)]
    Dedup,

    /// Copy the raw journal to a file, or print it
    #[command(display_order = 21)]
    Export {
        /// Destination file (prints to stdout when omitted)
        path: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., utc-offset)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_collects_all_words() {
        let cli = Cli::try_parse_from(["jotz", "n", "bought", "apples", "today!"]).unwrap();
        match cli.command {
            Some(Commands::Add { words }) => assert_eq!(words, ["bought", "apples", "today!"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn search_requires_words() {
        assert!(Cli::try_parse_from(["jotz", "search"]).is_err());
        let cli = Cli::try_parse_from(["jotz", "s", "apple", "pie", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Search { ref words, json: true }) if words == &["apple", "pie"]
        ));
    }

    #[test]
    fn keywords_set_takes_many() {
        let cli = Cli::try_parse_from(["jotz", "keywords", "--set", "gym", "work"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Keywords { set: Some(ref k), clear: false }) if k == &["gym", "work"]
        ));
    }

    #[test]
    fn keywords_clear_excludes_set() {
        let cli = Cli::try_parse_from(["jotz", "keywords", "--clear"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Keywords { set: None, clear: true })
        ));
        assert!(Cli::try_parse_from(["jotz", "keywords", "--clear", "--set", "gym"]).is_err());
    }

    #[test]
    fn config_value_may_start_with_a_hyphen() {
        let cli = Cli::try_parse_from(["jotz", "config", "utc-offset", "-06:00"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { value: Some(ref v), .. }) if v == "-06:00"
        ));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["jotz", "list", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
