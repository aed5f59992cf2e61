use super::print::{
    print_boat_types, print_criteria, print_link, print_locations, print_messages,
    print_product_detail, print_products,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use marina::api::{MarinaApi, SearchInput};
use marina::config::MarinaConfig;
use marina::error::{MarinaError, Result};
use marina::store::fs::FileCatalog;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: MarinaApi<FileCatalog>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Search {
            url,
            location,
            boat_type,
            date,
            people,
            term,
            reset,
        }) => {
            let input = SearchInput {
                location,
                boat_type,
                date,
                people,
                term,
                reset,
            };
            handle_search(&mut ctx, url, input)
        }
        Some(Commands::Open { url }) => handle_open(&mut ctx, url),
        Some(Commands::Show { id }) => handle_show(&mut ctx, id),
        Some(Commands::Locations) => handle_locations(&mut ctx),
        Some(Commands::Types) => handle_types(&mut ctx),
        None => handle_search(&mut ctx, None, SearchInput::default()),
    }
}

/// Logs go to stderr so stdout stays clean for results.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = MarinaConfig::load(cli.config.as_deref())?;
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .ok_or_else(|| {
            MarinaError::Api("No catalog configured: pass --catalog or set MARINA_CATALOG".into())
        })?;

    Ok(AppContext {
        api: MarinaApi::new(FileCatalog::new(catalog_path), config),
    })
}

fn handle_search(ctx: &mut AppContext, url: Option<String>, input: SearchInput) -> Result<()> {
    let result = ctx.api.search(url.as_deref(), input)?;
    if let Some(criteria) = &result.criteria {
        print_criteria(criteria);
    }
    print_products(&result.listed_products);
    print_messages(&result.messages);
    if let Some(link) = &result.link {
        print_link(link);
    }
    Ok(())
}

fn handle_open(ctx: &mut AppContext, url: String) -> Result<()> {
    let result = ctx.api.open(&url)?;
    if let Some(criteria) = &result.criteria {
        print_criteria(criteria);
    }
    print_products(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.show_product(id)?;
    for view in &result.listed_products {
        print_product_detail(view);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_locations(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.locations()?;
    print_locations(&result.locations);
    print_messages(&result.messages);
    Ok(())
}

fn handle_types(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.boat_types()?;
    print_boat_types(&result.boat_types);
    print_messages(&result.messages);
    Ok(())
}
