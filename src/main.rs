use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use listing_browser::detail::PropertyDetail;
use listing_browser::format::{format_area, format_price};
use listing_browser::sources::{JsonFileSource, ListingSource, StaticSource};
use listing_browser::view::{PageMarker, PageView, SortKey};
use listing_browser::{ListingScreen, ScreenConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Price,
    Date,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Price => SortKey::Price,
            SortArg::Date => SortKey::Date,
        }
    }
}

/// Browse the property listings from the terminal
#[derive(Debug, Parser)]
#[command(name = "listing-browser", version)]
struct Cli {
    /// JSON file with listings (defaults to the bundled dataset)
    #[arg(long)]
    data: Option<PathBuf>,

    /// TOML file with screen settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search box text
    #[arg(short, long)]
    query: Option<String>,

    /// Sort header clicks, applied in order (repeat to cycle a column)
    #[arg(short, long, value_enum)]
    sort: Vec<SortArg>,

    /// Page to show
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Listing id to open in the detail view
    #[arg(long)]
    select: Option<String>,
}

fn print_page(view: &PageView<'_>) {
    if view.is_empty() {
        println!("No hay propiedades disponibles");
        println!("Intenta ajustar los filtros de búsqueda");
        return;
    }

    for property in &view.items {
        println!(
            "{} | {} | {} | {}",
            property.id, property.office, property.kind, property.location
        );
        println!(
            "   {} · {} hab · {} · {}",
            format_price(property.price, &property.currency),
            property.bedrooms.map_or("-".to_string(), |n| n.to_string()),
            format_area(property.area),
            property.date
        );
    }

    if view.show_pager() {
        let pages: Vec<String> = view
            .window
            .iter()
            .map(|marker| match marker {
                PageMarker::Page(n) if *n == view.current_page => format!("[{}]", n),
                PageMarker::Page(n) => n.to_string(),
                PageMarker::Gap => "...".to_string(),
            })
            .collect();
        println!();
        println!("{}", pages.join(" "));
    }
}

fn print_detail(detail: &PropertyDetail) {
    println!();
    println!("{} ({})", detail.title, detail.id);
    println!("   {} · {}", detail.price, detail.location);
    println!("   Superficie: {}", detail.area);
    if let Some(bedrooms) = detail.bedrooms {
        println!("   Habitaciones: {}", bedrooms);
    }
    if let Some(bathrooms) = detail.bathrooms {
        println!("   Baños: {}", bathrooms);
    }
    println!("   Tipo: {} · Estado: {}", detail.kind, detail.status);
    println!("   Oficina: {} · Publicado: {}", detail.office, detail.date);
    if !detail.features.is_empty() {
        println!("   Características: {}", detail.features.join(", "));
    }
    if !detail.preview_images.is_empty() {
        let more = if detail.hidden_images > 0 {
            format!(" (+{})", detail.hidden_images)
        } else {
            String::new()
        };
        println!("   Imágenes: {}{}", detail.preview_images.join(", "), more);
    }
    if let Some(description) = &detail.description {
        println!("   {}", description);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScreenConfig::load(path)?,
        None => ScreenConfig::default(),
    };

    let source: Box<dyn ListingSource> = match &cli.data {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(StaticSource::bundled()?),
    };
    info!("🏠 Loading listings from {} source", source.source_name());
    let properties = source.load().await.context("Failed to load listings")?;

    let mut screen = ListingScreen::new(properties, &config);

    if let Some(query) = &cli.query {
        screen.handle_search_change(query);
        if screen.is_searching() {
            screen.tick().await;
        }
        info!("{} listings match {:?}", screen.total_results(), query);
    }

    for key in &cli.sort {
        screen.handle_sort((*key).into());
    }

    if cli.page != 1 && !screen.handle_page_change(cli.page) {
        anyhow::bail!(
            "Page {} is out of range ({} pages)",
            cli.page,
            screen.view().total_pages
        );
    }

    print_page(&screen.view());

    if let Some(id) = &cli.select {
        if screen.select(id).is_none() {
            anyhow::bail!("No listing with id {}", id);
        }
        if let Some(detail) = screen.detail() {
            print_detail(&detail);
        }
    }

    Ok(())
}
