use clap::{Parser, Subcommand};
use portfolio_common::contact::{Budget, Interest, Timeline, DEFAULT_INQUIRY_TYPE};
use portfolio_common::{Category, Filter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio site catalog, export and contact tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects, optionally by category
    Projects {
        /// Category label ("ML & AI", "Research", ...) or "All"
        #[arg(short, long, default_value = "All")]
        category: Filter<Category>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Alternative catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show one project
    Show {
        /// Project id (slug)
        #[arg(required = true)]
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Alternative catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Categories present in the catalog with project counts
    Categories {
        /// Alternative catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Write projects.json, sitemap.xml and routes.txt
    Export {
        /// Output directory
        #[arg(short, long, default_value = "site-export")]
        output: PathBuf,

        /// Public origin for sitemap URLs (defaults to config)
        #[arg(long)]
        base_url: Option<String>,

        /// Alternative catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Send a message through the contact form endpoint
    Contact {
        /// Asked for interactively when omitted
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, default_value = "")]
        organization: String,

        /// Repeatable: "Product Analytics", "ML/AI Solutions", ...
        #[arg(long = "interest")]
        interests: Vec<Interest>,

        #[arg(short, long)]
        message: Option<String>,

        #[arg(long, default_value = "Urgent")]
        timeline: Timeline,

        #[arg(long, default_value = "<£5k")]
        budget: Budget,

        /// Value of the `type` field
        #[arg(long = "type", default_value = DEFAULT_INQUIRY_TYPE)]
        inquiry_type: String,

        /// Endpoint override for this call
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Show or edit settings
    Config {
        /// Contact endpoint URL
        #[arg(long)]
        set_endpoint: Option<String>,

        /// Public site origin
        #[arg(long)]
        set_base_url: Option<String>,

        /// Print settings
        #[arg(long)]
        show: bool,
    },
}
