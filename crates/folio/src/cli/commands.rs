//! # Dispatch
//!
//! `run()` parses arguments, sets up logging and the API context, then hands the
//! command to a `handle_*` function. Handlers call exactly one API method (plus
//! rendering) and never touch the catalog directly.

use super::render::{print_full_project, print_json, print_messages, print_projects};
use super::setup::{AddArgs, Cli, Commands, EditArgs};
use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use folioapp::api::{FolioApi, DEFAULT_EXPORT_FILE};
use folioapp::config::{default_config_dir, FolioConfig, CONFIG_FILE};
use folioapp::model::{parse_tags, Category, CategoryFilter, ProjectInput, ProjectPatch};
use folioapp::store::fs::FileStore;
use folioapp::store::fs_backend::FsBackend;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct AppContext {
    api: FolioApi<FsBackend>,
    config: FolioConfig,
    config_dir: Option<PathBuf>,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    if ctx.config.seed_samples && !cli.no_samples {
        let seeded = ctx.api.seed_samples();
        if !wants_machine_output(&cli.command) {
            print_messages(&seeded.messages);
        }
    }

    match cli.command {
        Some(Commands::List {
            category,
            search,
            json,
        }) => handle_list(&mut ctx, category, search, json),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Add(args)) => handle_add(&mut ctx, args),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, &id, fields),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Export { output, stdout }) => handle_export(&mut ctx, output, stdout),
        Some(Commands::Import { file }) => handle_import(&mut ctx, &file),
        Some(Commands::Config { template }) => handle_config(&ctx, template),
        None => handle_list(&mut ctx, None, None, false),
    }
}

/// Logs go to stderr so they never mix with listings or exported JSON.
/// `RUST_LOG` wins over the `--verbose` default.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "folioapp=debug,folio=debug"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = default_config_dir();
    let config = match &config_dir {
        Some(dir) => FolioConfig::load(dir)?,
        None => FolioConfig::default(),
    };

    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.resolve_data_dir()?,
    };
    tracing::debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening catalog");

    let store = FileStore::open(data_dir.clone(), &config.storage_key);
    Ok(AppContext {
        api: FolioApi::open(store),
        config,
        config_dir,
        data_dir,
    })
}

/// Commands whose stdout is meant for other programs get no chatter.
fn wants_machine_output(command: &Option<Commands>) -> bool {
    matches!(
        command,
        Some(Commands::List { json: true, .. }) | Some(Commands::Export { stdout: true, .. })
    )
}

fn handle_list(
    ctx: &mut AppContext,
    category: Option<String>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let filter = category.as_deref().map(parse_category_filter);
    let result = ctx
        .api
        .list_projects(filter, search.as_deref().unwrap_or(""))?;

    if json {
        return print_json(&result.listed);
    }
    print_projects(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

/// Known names (and `all`) match case-insensitively. Anything else is an unknown
/// category and must match the stored string exactly.
fn parse_category_filter(raw: &str) -> CategoryFilter {
    let raw = raw.trim();
    let lower = raw.to_lowercase();
    let is_known = lower == "all" || Category::KNOWN.iter().any(|c| c.as_str() == lower);
    let name = if is_known { lower.as_str() } else { raw };
    name.parse().unwrap_or_default()
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get_project(id)?;
    for record in &result.listed {
        print_full_project(record);
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let input = ProjectInput::new(args.title)
        .with_description(args.description)
        .with_category(args.category)
        .with_image(args.image)
        .with_url(args.url)
        .with_tags(args.tags);

    let result = ctx.api.create_project(input)?;
    print_messages(&result.messages);
    print_projects(&result.affected);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, fields: EditArgs) -> Result<()> {
    let patch = ProjectPatch {
        title: fields.title,
        description: fields.description,
        category: fields.category.map(Category::from),
        image: fields.image,
        url: fields.url,
        tags: fields.tags.as_deref().map(parse_tags),
        date: None,
    };
    if patch.is_empty() {
        bail!("Nothing to change. Pass at least one field, e.g. --title or --tags");
    }

    let result = ctx.api.update_project(id, patch)?;
    print_messages(&result.messages);
    print_projects(&result.affected);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_project(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, output: Option<PathBuf>, stdout: bool) -> Result<()> {
    if stdout {
        let result = ctx.api.export_projects()?;
        if let Some(payload) = result.payload {
            println!("{}", payload);
        }
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
    let result = ctx
        .api
        .export_to_file(&path)
        .with_context(|| format!("Could not export to {}", path.display()))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: &Path) -> Result<()> {
    let result = ctx
        .api
        .import_from_file(file)
        .with_context(|| format!("Could not import {}", file.display()))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, template: bool) -> Result<()> {
    if template {
        print!("{}", FolioConfig::template());
        return Ok(());
    }

    let config_file = ctx
        .config_dir
        .as_ref()
        .map(|dir| dir.join(CONFIG_FILE).display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    let data_file = ctx
        .api
        .catalog()
        .store()
        .data_file()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(invalid storage key)".to_string());

    print_setting("config file", config_file);
    print_setting("data dir", ctx.data_dir.display());
    print_setting("data file", data_file);
    print_setting("storage_key", &ctx.config.storage_key);
    print_setting("seed_samples", ctx.config.seed_samples);
    Ok(())
}

fn print_setting(label: &str, value: impl std::fmt::Display) {
    println!("{}{}", format!("{:<14}", label).dimmed(), value);
}
