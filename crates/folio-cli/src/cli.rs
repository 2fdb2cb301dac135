//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse albums and blog posts from the JSONPlaceholder demo API
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Base URL of the REST API (overrides FOLIO_API_BASE_URL)
    #[arg(long = "api-url")]
    pub api_url: Option<String>,

    /// SQLite file used to remember liked posts (overrides FOLIO_DB_PATH)
    #[arg(long = "db-path")]
    pub db_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Paging and filtering shared by the list views
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// 1-based page number; clamped to the available pages
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Only show posts by this author ("all" for everyone)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Open the photo preview of this album
    #[arg(long)]
    pub album: Option<u32>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the view behind a path such as `/blogs/3`
    Open {
        path: String,

        #[command(flatten)]
        list_args: ListArgs,
    },

    /// Album gallery
    Albums {
        /// 1-based page number; clamped to the available pages
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Open the photo preview of this album
        #[arg(long)]
        album: Option<u32>,
    },

    /// Paginated blog list with author filter
    Blogs {
        /// 1-based page number; clamped to the available pages
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Only show posts by this author ("all" for everyone)
        #[arg(short, long)]
        author: Option<String>,
    },

    /// A single post with its comments
    Blog { id: u32 },

    /// Like or unlike a post
    Like { id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_with_list_args() {
        let cli = Cli::parse_from(["folio", "open", "/blogs", "--page", "2", "--author", "Ann"]);
        match cli.command {
            Commands::Open { path, list_args } => {
                assert_eq!(path, "/blogs");
                assert_eq!(list_args.page, 2);
                assert_eq!(list_args.author.as_deref(), Some("Ann"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_global_overrides() {
        let cli = Cli::parse_from([
            "folio",
            "--api-url",
            "http://localhost:3000",
            "--db-path",
            "/tmp/f.db",
            "like",
            "5",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:3000"));
        assert!(matches!(cli.command, Commands::Like { id: 5 }));
    }

    #[test]
    fn page_defaults_to_one() {
        let cli = Cli::parse_from(["folio", "albums"]);
        assert!(matches!(
            cli.command,
            Commands::Albums {
                page: 1,
                album: None
            }
        ));
    }
}
