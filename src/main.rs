use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pagekit_core::{read_page_file, PageConfig, PageRecord, PageType, Placement};

/// Directives added on top of `RUST_LOG`.
const DEFAULT_LOG_DIRECTIVES: &str = "pagekit=info,notion=warn";

#[derive(Parser)]
#[command(name = "pagekit")]
#[command(about = "Inspect Notion page properties as plain values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PageSource {
    /// Page JSON file saved from the API
    file: PathBuf,
    /// Layout context label
    #[arg(long, default_value = "")]
    context: String,
    /// Position among sibling pages
    #[arg(long, default_value_t = 0)]
    order: i64,
    /// Mark the page as found directly in the outline
    #[arg(long)]
    direct: bool,
    /// Page id to use instead of the object's `id`
    #[arg(long)]
    page_id: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show identity, derived values and every property of a page
    Show {
        #[command(flatten)]
        source: PageSource,
    },
    /// Resolve one property to a plain value
    Get {
        #[command(flatten)]
        source: PageSource,
        /// Property name (exact, case-sensitive)
        name: String,
        /// Accessor to use
        #[arg(long = "as", value_enum, default_value_t = Accessor::Text)]
        accessor: Accessor,
        /// Read the end of a date range instead of its start
        #[arg(long)]
        end: bool,
        /// Value printed when the property is absent or of another kind
        #[arg(long)]
        default: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Accessor {
    Text,
    Number,
    Checkbox,
    Date,
}

/// Entry point for the pagekit CLI.
///
/// # Environment Variables
/// - `PAGEKIT_TITLE_PROPERTIES`: comma-separated title property names (default: "title,Name")
/// - `PAGEKIT_SLUG_PROPERTY`: slug property name (default: "Slug")
/// - `PAGEKIT_KEYWORDS_PROPERTY`: keywords property name (default: "Keywords")
/// - `RUST_LOG`: log filter, extended with [`DEFAULT_LOG_DIRECTIVES`]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter()?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PageConfig::from_env_values(
        std::env::var("PAGEKIT_TITLE_PROPERTIES").ok(),
        std::env::var("PAGEKIT_SLUG_PROPERTY").ok(),
        std::env::var("PAGEKIT_KEYWORDS_PROPERTY").ok(),
    )?;

    match cli.command {
        Commands::Show { source } => {
            let page = load(source)?;
            show(&page, &config);
        }
        Commands::Get {
            source,
            name,
            accessor,
            end,
            default,
        } => {
            let page = load(source)?;
            println!("{}", resolve(&page, &name, accessor, end, default)?);
        }
    }

    Ok(())
}

fn log_filter() -> anyhow::Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env();
    for directive in DEFAULT_LOG_DIRECTIVES.split(',') {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

fn load(source: PageSource) -> anyhow::Result<PageRecord> {
    let placement = Placement {
        layout_context: source.context,
        order: source.order,
        found_directly_in_outline: source.direct,
        page_id: source.page_id,
    };
    Ok(read_page_file(&source.file, placement)?)
}

fn show(page: &PageRecord, config: &PageConfig) {
    let page_type = match page.page_type() {
        PageType::Simple => "simple",
        PageType::DatabasePage => "database page",
    };

    println!("ID: {}", page.page_id());
    println!("Type: {}", page_type);
    println!("Context: {}", page.layout_context());
    println!("Order: {}", page.order());
    println!("Found directly in outline: {}", page.found_directly_in_outline());
    println!("Title: {}", page.title(config));
    println!("Slug: {}", page.slug(config));
    println!(
        "Keywords: {}",
        page.keywords(config).unwrap_or_else(|| "-".into())
    );

    let names = page.property_names();
    if names.is_empty() {
        println!("No properties found.");
        return;
    }

    println!("Properties:");
    for name in names {
        if let Some(value) = page.property(name) {
            println!("  {} ({})", name, value.kind_name());
        }
    }
}

fn resolve(
    page: &PageRecord,
    name: &str,
    accessor: Accessor,
    end: bool,
    default: Option<String>,
) -> anyhow::Result<String> {
    let resolved = match accessor {
        Accessor::Text => page.plain_text_property(name, default.as_deref().unwrap_or("")),
        Accessor::Date => page.date_property(name, default.as_deref().unwrap_or(""), !end),
        Accessor::Number => {
            let default = match default {
                Some(raw) => raw
                    .parse::<f64>()
                    .map_err(|e| anyhow::anyhow!("--default must be a number: {e}"))?,
                None => 0.0,
            };
            page.number_property(name, default).to_string()
        }
        Accessor::Checkbox => {
            let default = match default {
                Some(raw) => raw
                    .parse::<bool>()
                    .map_err(|e| anyhow::anyhow!("--default must be true or false: {e}"))?,
                None => false,
            };
            page.checkbox_property(name, default).to_string()
        }
    };

    Ok(resolved)
}
