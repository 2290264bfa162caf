mod browse;
mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vitrine_catalog::{CatalogClient, LoadState};
use vitrine_core::{AppConfig, CategoryFilter, FilterState, SortMode};
use vitrine_ui::{
    build_page, terminal_prefers_dark, FileThemeStore, GridView, PageContext, PageMode,
    QuoteComposer, ThemeState,
};

#[derive(Debug, Parser)]
#[command(name = "vitrine")]
#[command(about = "Storefront catalog browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog products with filters and sort applied
    List {
        /// Case-insensitive search over name, description, and category
        #[arg(long)]
        busca: Option<String>,

        /// Category tag, or `all`
        #[arg(long, default_value = "all")]
        categoria: String,

        /// Only products on promotion
        #[arg(long)]
        promo: bool,

        /// Sort mode: default, price-asc, price-desc, name-asc, name-desc
        #[arg(long, default_value = "default")]
        ordem: SortMode,

        /// Print card view models as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the WhatsApp quote link for a product
    Quote {
        id: u64,

        /// Quantity, used verbatim
        #[arg(long, default_value = "1")]
        quantidade: String,
    },
    /// Print a campaign page
    Campaign {
        /// Campaign id; `default` when omitted
        id: Option<String>,
    },
    /// Show or toggle the persisted light/dark theme
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Interactive catalog session on stdin
    Browse {
        /// Browse a campaign page instead of the catalog
        #[arg(long)]
        campanha: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = vitrine_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List {
            busca,
            categoria,
            promo,
            ordem,
            json,
        } => {
            let filters = FilterState::default()
                .with_search(busca.unwrap_or_default())
                .with_category(CategoryFilter::from_option(&categoria))
                .with_promo_only(promo)
                .with_sort(ordem);
            run_list(&config, &filters, json).await
        }
        Commands::Quote { id, quantidade } => run_quote(&config, id, &quantidade).await,
        Commands::Campaign { id } => run_campaign(&config, id.as_deref()).await,
        Commands::Theme { toggle } => {
            run_theme(&config, toggle);
            Ok(())
        }
        Commands::Browse { campanha } => browse::run_browse(&config, campanha).await,
    }
}

fn catalog_client(config: &AppConfig) -> anyhow::Result<CatalogClient> {
    CatalogClient::from_config(config).context("failed to build catalog client")
}

fn theme_state(config: &AppConfig) -> ThemeState<FileThemeStore> {
    let prefers_dark = terminal_prefers_dark(std::env::var("COLORFGBG").ok().as_deref());
    ThemeState::initialize(FileThemeStore::new(&config.theme_path), prefers_dark)
}

async fn run_list(config: &AppConfig, filters: &FilterState, json: bool) -> anyhow::Result<()> {
    let client = catalog_client(config)?;
    let load = client.load_products().await;
    let grid = GridView::build(&load, &PageMode::Catalog, filters);

    if let GridView::Failed { message } = &grid {
        anyhow::bail!("{message}");
    }
    if json {
        println!("{}", serde_json::to_string_pretty(grid.cards())?);
    } else {
        print!("{}", render::grid(&grid));
    }
    Ok(())
}

async fn run_quote(config: &AppConfig, id: u64, quantity: &str) -> anyhow::Result<()> {
    let client = catalog_client(config)?;
    let products = match client.load_products().await {
        LoadState::LoadFailed(reason) => {
            anyhow::bail!("Erro ao carregar produtos: {reason}")
        }
        load => load,
    };
    let product = products
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("produto {id} não encontrado"))?;

    let quote = QuoteComposer::new(config.whatsapp_number.clone()).compose(product, quantity);
    println!("{}\n\n{}", quote.message, quote.url);
    Ok(())
}

async fn run_campaign(config: &AppConfig, id: Option<&str>) -> anyhow::Result<()> {
    let theme = theme_state(config);
    let client = catalog_client(config)?;
    let campaigns = client.load_campaigns().await;
    let mode = PageMode::campaign(id, &campaigns);
    let load = client.load_products().await;

    let page = build_page(
        PageContext {
            mode: &mode,
            store_name: &config.store_name,
            theme: theme.current(),
        },
        &load,
        &FilterState::default(),
        None,
    );
    print!("{}", render::page(&page));
    Ok(())
}

fn run_theme(config: &AppConfig, toggle: bool) {
    let mut theme = theme_state(config);
    if toggle {
        theme.toggle();
    }
    println!("{}", theme.current());
}
