//! # folio
//!
//! Terminal viewer for the JSONPlaceholder demo API.
//!
//! Views:
//! - **Albums**: paginated gallery with a photo preview per album
//! - **Blogs**: paginated post list with an author selector and likes
//! - **Blog detail**: one post with its comments
//!
//! Likes are remembered in a local SQLite file between runs.

mod app;
mod cli;
mod config;
mod views;

use anyhow::Context;
use clap::Parser;
use folio_net::{ApiClient, Liveness};
use folio_shared::view::BlogDetailView;
use folio_shared::{AuthorFilter, Route};
use folio_store::Database;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::{Cli, Commands, ListArgs};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var). Logs go to stderr so
    //    rendered views on stdout stay clean.
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("folio=info,folio_net=info,folio_store=info,warn")
        }))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // -----------------------------------------------------------------------
    // 2. Load configuration, command-line flags win over the environment
    // -----------------------------------------------------------------------
    let mut config = AppConfig::from_env();
    if let Some(url) = cli.api_url.clone() {
        config.api_base_url = url;
    }
    if let Some(path) = cli.db_path.clone() {
        config.db_path = Some(path);
    }
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Open the like store and the API client
    // -----------------------------------------------------------------------
    let db = match &config.db_path {
        Some(path) => Database::open_at(path),
        None => Database::new(),
    }
    .context("failed to open the local store")?;

    let client = ApiClient::new(config.api_base_url.clone(), config.http_timeout)
        .context("failed to create the API client")?;

    let app = App::new(config, client, db);

    // -----------------------------------------------------------------------
    // 4. Render the requested view; Ctrl+C abandons the load
    // -----------------------------------------------------------------------
    let liveness = Liveness::new();
    tokio::select! {
        rendered = run(&app, cli.command, &liveness) => {
            print!("{}", rendered?);
        }
        _ = tokio::signal::ctrl_c() => {
            liveness.revoke();
            info!("Received Ctrl+C, discarding the pending view");
        }
    }

    Ok(())
}

async fn run(app: &App<ApiClient>, command: Commands, liveness: &Liveness) -> anyhow::Result<String> {
    let (route, args) = match command {
        Commands::Open { path, list_args } => {
            let route = Route::parse(&path);
            if route == Route::NotFound {
                let mut out = String::new();
                views::render_not_found(&mut out, &path)?;
                return Ok(out);
            }
            (route, list_args)
        }
        Commands::Albums { page, album } => (
            Route::Albums,
            ListArgs {
                page,
                album,
                ..ListArgs::default()
            },
        ),
        Commands::Blogs { page, author } => (
            Route::Blogs,
            ListArgs {
                page,
                author,
                ..ListArgs::default()
            },
        ),
        Commands::Blog { id } => (Route::BlogDetail(Some(id)), ListArgs::default()),
        Commands::Like { id } => {
            let likes = app.toggle_like(id)?;
            let state = if likes.is_liked(id) { "Liked" } else { "Unliked" };
            return Ok(format!("{state} post #{id}\n"));
        }
    };

    render_route(app, route, args, liveness).await
}

async fn render_route(
    app: &App<ApiClient>,
    route: Route,
    args: ListArgs,
    liveness: &Liveness,
) -> anyhow::Result<String> {
    let mut out = String::new();

    match route {
        Route::Home => views::render_home(&mut out)?,
        Route::Albums => {
            let view = app.albums_view(args.page, args.album, liveness).await;
            views::render_albums(&mut out, &view)?;
        }
        Route::Blogs => {
            let author = args
                .author
                .as_deref()
                .map(AuthorFilter::from)
                .unwrap_or_default();
            let view = app.blogs_view(args.page, author, liveness).await?;
            views::render_blogs(&mut out, &view)?;
        }
        Route::BlogDetail(id) => {
            let view = match id {
                Some(id) => app.blog_detail_view(id, liveness).await,
                None => BlogDetailView::unresolved(),
            };
            views::render_detail(&mut out, &view)?;
        }
        Route::NotFound => views::render_not_found(&mut out, &route.to_string())?,
    }

    Ok(out)
}
