use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "marina", bin_name = "marina", version)]
#[command(about = "Search a boat-rental catalog and build shareable search links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog JSON file (overrides config and MARINA_CATALOG)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to marina.toml in the user config directory)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search boats, optionally starting from a shared link
    Search {
        /// Start from this link instead of the plain search page
        #[arg(long)]
        url: Option<String>,

        /// Location id or name, or "all"
        #[arg(short, long)]
        location: Option<String>,

        /// Boat type id or name, or "all"
        #[arg(short = 't', long = "type")]
        boat_type: Option<String>,

        /// Departure date (YYYY-MM-DD), or "all"
        #[arg(short, long)]
        date: Option<String>,

        /// Number of guests
        #[arg(short, long, allow_hyphen_values = true)]
        people: Option<i32>,

        /// Text to look for in boat names and titles
        #[arg(short = 'q', long)]
        term: Option<String>,

        /// Clear everything the link set before applying the other options
        #[arg(long)]
        reset: bool,
    },

    /// Open a shared search link and list what it shows
    Open {
        /// Absolute URL or path, e.g. /search/bodrum?people=4
        url: String,
    },

    /// Show one boat
    Show {
        /// Product id
        id: u32,
    },

    /// List locations
    Locations,

    /// List boat types
    Types,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_options() {
        let cli = Cli::parse_from([
            "marina", "search", "-l", "bodrum", "--type", "2", "-p", "4", "-q", "mavi",
        ]);
        match cli.command {
            Some(Commands::Search {
                location,
                boat_type,
                people,
                term,
                reset,
                ..
            }) => {
                assert_eq!(location.as_deref(), Some("bodrum"));
                assert_eq!(boat_type.as_deref(), Some("2"));
                assert_eq!(people, Some(4));
                assert_eq!(term.as_deref(), Some("mavi"));
                assert!(!reset);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_people() {
        let cli = Cli::parse_from(["marina", "search", "--people", "-2"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Search {
                people: Some(-2),
                ..
            })
        ));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from(["marina", "locations", "--catalog", "boats.json", "-v"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("boats.json")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Locations)));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["marina"]);
        assert!(cli.command.is_none());
    }
}
