use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "homefeed")]
#[command(about = "Merges, annotates and ranks posts from multiple feeds for a homepage")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all configured feeds and print the ranked posts
    Fetch {
        /// Read the feed list from an OPML file instead of the configuration
        #[arg(long)]
        opml: Option<String>,

        /// Maximum number of posts to show (defaults to HOMEFEED_DISPLAY_COUNT)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Rank posts from JSON files, one collection per file, without fetching
    Polish {
        /// JSON files, each holding an array of feed items
        files: Vec<String>,

        /// Maximum number of posts to show (defaults to HOMEFEED_DISPLAY_COUNT)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report posts whose publication date cannot be parsed
    Check {
        /// JSON files, each holding an array of feed items
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// List configured feeds and how their posts are presented
    Feeds,

    /// Export configured feeds to OPML format
    Export {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}
