use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use checkmate::config::Config;
use checkmate::logging::init_tracing;
use checkmate::model::ItemCategory;
use checkmate::services::{CatalogLookup, FileCamera, InMemoryItemRepository};
use checkmate::ui::items::create::{CreateItemEffect, CreateItemIntent, DispatchOutcome, FormField};
use checkmate::ui::navigation::{run_navigation, BackStack, Route};
use checkmate::ui::{AppEvent, Runtime};

/// Submissions attempted before giving up on a failing repository.
const MAX_ATTEMPTS: u32 = 2;

#[derive(Parser)]
#[command(name = "checkmate")]
#[command(
    about = "Item checklist: create items from typed fields, product codes and photos",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (default: platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every category with its label
    Categories,
    /// Run the item creation flow once
    Add(AddArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Item name
    #[arg(short, long)]
    name: Option<String>,

    /// Free-text description
    #[arg(short, long)]
    description: Option<String>,

    /// Category key (study, daily, clothing, food, ...)
    #[arg(short = 't', long)]
    category: Option<ItemCategory>,

    /// Product code to prefill the form from the catalogue
    #[arg(long)]
    code: Option<String>,

    /// Photo to attach
    #[arg(long)]
    image: Option<PathBuf>,

    /// Make the first write fail to exercise the retry path
    #[arg(long)]
    fail: bool,

    /// Print the created item as JSON
    #[arg(long)]
    json: bool,
}

impl AddArgs {
    /// Typed values, applied after any lookup hint so they take precedence.
    fn edits(&self) -> Vec<CreateItemIntent> {
        let mut intents = Vec::new();
        if let Some(name) = &self.name {
            intents.push(CreateItemIntent::FieldEdited {
                field: FormField::Name,
                value: name.clone(),
            });
        }
        if let Some(description) = &self.description {
            intents.push(CreateItemIntent::FieldEdited {
                field: FormField::Description,
                value: description.clone(),
            });
        }
        if let Some(category) = self.category {
            intents.push(CreateItemIntent::CategoryPickerToggled);
            intents.push(CreateItemIntent::CategorySelected(category));
        }
        intents
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    match cli.command {
        Commands::Categories => {
            for category in ItemCategory::ALL {
                println!("{:<10} {}", category.key(), category.label());
            }
            Ok(())
        }
        Commands::Add(args) => add(config, args).await,
    }
}

async fn add(config: Config, args: AddArgs) -> anyhow::Result<()> {
    let repository = Arc::new(InMemoryItemRepository::new());
    if args.fail {
        repository.fail_next(1);
    }
    let lookup = Arc::new(CatalogLookup::new(&config.catalog));
    let camera = Arc::new(FileCamera::new(args.image.clone()));

    let (runtime, handle) = Runtime::new(
        &config.defaults,
        Arc::clone(&repository),
        lookup,
        camera,
    );
    let navigation = handle.navigation().attach();
    let mut sheet = handle.create_effects().attach();
    let mut states = handle.subscribe_state();
    let runtime_task = tokio::spawn(runtime.run());

    handle.send(AppEvent::OpenCreateSurface).await?;
    if let Some(code) = &args.code {
        handle.lookup(code.clone()).await?;
    }
    if args.image.is_some() {
        handle.capture().await?;
    }
    for intent in args.edits() {
        handle.dispatch(intent).await?;
    }

    let mut attempts = 0;
    let created = loop {
        attempts += 1;
        match handle.dispatch(CreateItemIntent::SubmitRequested).await? {
            DispatchOutcome::Submit(_) => {}
            _ => bail!("an item needs a name and a category (use --name/--category or --code)"),
        }
        states
            .wait_for(|state| state.as_ref().map_or(true, |s| !s.is_submitting))
            .await?;
        if sheet.try_recv() == Some(CreateItemEffect::Dismiss) {
            break true;
        }
        if attempts >= MAX_ATTEMPTS {
            break false;
        }
        tracing::info!(attempt = attempts, "submission failed, retrying with the same draft");
    };

    if created {
        handle.send(AppEvent::DismissCreateSurface).await?;
    }
    handle.navigation().detach();
    handle.send(AppEvent::Shutdown).await?;
    runtime_task.await?;

    let mut screens = BackStack::new(Route::new("home"));
    run_navigation(navigation, &mut screens).await;

    if !created {
        bail!("item was not created after {} attempts", attempts);
    }
    let item = repository
        .items()
        .pop()
        .context("repository reported success but holds no item")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("Created '{}' [{}] ({})", item.name, item.category.label(), item.id);
        if !item.description.is_empty() {
            println!("  description: {}", item.description);
        }
        if let Some(image) = &item.image {
            println!("  image: {}", image.uri());
        }
    }
    if let Some(route) = screens.current() {
        println!("Navigated to: {}", route);
    }
    Ok(())
}
