//! CLI entry point for postshelf

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postshelf")]
#[command(version)]
#[command(about = "Browse, search and read a personal blog from its post manifest", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site with a sample post
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List posts, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Free-text search over title, excerpt, description and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Only posts with this tag (repeat to match any of several)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Print the HTML post list instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// List all tags
    Tags {
        /// Show how many posts carry each tag
        #[arg(long)]
        count: bool,
    },

    /// Show a single post
    Show {
        /// Post file, as listed in the manifest
        file: String,

        /// Print the rendered HTML page instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Show or change the theme preference
    Theme {
        /// `toggle`, `light` or `dark`
        action: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postshelf=debug,info"
    } else {
        "postshelf=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            postshelf::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::List { query, tags, html } => {
            let blog = postshelf::Blog::new(&base_dir)?;
            postshelf::commands::list::run(&blog, query.as_deref(), &tags, html).await?;
        }

        Commands::Tags { count } => {
            let blog = postshelf::Blog::new(&base_dir)?;
            postshelf::commands::tags::run(&blog, count).await?;
        }

        Commands::Show { file, html } => {
            let blog = postshelf::Blog::new(&base_dir)?;
            postshelf::commands::show::run(&blog, &file, html).await?;
        }

        Commands::Theme { action } => {
            let blog = postshelf::Blog::new(&base_dir)?;
            postshelf::commands::theme::run(&blog, action.as_deref())?;
        }

        Commands::Version => {
            println!("postshelf version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
