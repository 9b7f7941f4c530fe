use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
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

pub const CATEGORY_CHOICES: [&str; 4] = ["web", "mobile", "design", "other"];

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    bin_name = "folio",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Keep a portfolio of your projects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the catalog data (overrides configuration)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Do not add sample projects to an empty catalog
    #[arg(long, global = true, help_heading = "Options")]
    pub no_samples: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects
    #[command(alias = "ls")]
    List {
        /// Only show one category (web, mobile, design, other, or all)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive search in titles, descriptions and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Print the listed projects as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one project in full
    #[command(alias = "v")]
    View {
        /// Project id (or a unique prefix of it)
        id: String,
    },

    /// Add a new project
    #[command(alias = "n")]
    Add(AddArgs),

    /// Change fields of an existing project
    #[command(alias = "e")]
    Edit {
        /// Project id (or a unique prefix of it)
        id: String,

        #[command(flatten)]
        fields: EditArgs,
    },

    /// Delete a project
    #[command(alias = "rm")]
    Delete {
        /// Project id (or a unique prefix of it)
        id: String,
    },

    /// Export every project to a JSON file
    Export {
        /// Output file (defaults to projects.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the JSON to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Replace all projects with the contents of a JSON file
    Import {
        /// File produced by `folio export`
        file: PathBuf,
    },

    /// Show the resolved configuration
    Config {
        /// Print a sample folio.toml instead
        #[arg(long)]
        template: bool,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project title
    pub title: String,

    /// Free text description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Category
    #[arg(short, long, default_value = "other", value_parser = CATEGORY_CHOICES)]
    pub category: String,

    /// Image URL (defaults to a picture for the category)
    #[arg(long, default_value = "")]
    pub image: String,

    /// Link to the live project
    #[arg(short, long, default_value = "")]
    pub url: String,

    /// Comma-separated tags, e.g. "Rust, CLI"
    #[arg(short, long, default_value = "")]
    pub tags: String,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New category
    #[arg(short, long, value_parser = CATEGORY_CHOICES)]
    pub category: Option<String>,

    /// New image URL
    #[arg(long)]
    pub image: Option<String>,

    /// New link (pass "" to remove it)
    #[arg(short, long)]
    pub url: Option<String>,

    /// New comma-separated tags (replaces all tags)
    #[arg(short, long)]
    pub tags: Option<String>,
}
