use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use metascan_browse::Browser;
use metascan_catalog::JsonCatalog;
use metascan_core::{Category, Item, RenderedAccessReport};

#[derive(Parser, Debug)]
#[command(name = "metactl", version, about = "Metascan CLI")]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, global = true, default_value_t = Output::Human)]
    output: Output,

    /// Path to the catalog document
    #[arg(long = "catalog", global = true, env = "METASCAN_CATALOG", default_value = "fixtures/demo.json")]
    catalog: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Output {
    Human,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the browsable categories
    Categories,
    /// List items in a category, with optional search and page
    Ls {
        /// Category tag, e.g. "ApexClass" or "CustomObject"
        category: String,
        /// Case-insensitive substring filter on the developer name
        #[arg(long = "search")]
        search: Option<String>,
        /// 1-based page to show
        #[arg(long = "page", default_value_t = 1)]
        page: usize,
    },
    /// Show what depends on an item
    Deps {
        /// Category tag the item belongs to
        category: String,
        /// Item id
        item_id: String,
    },
    /// Show the access matrix for an item
    Access {
        /// Category tag the item belongs to
        category: String,
        /// Item id
        item_id: String,
    },
}

fn init_tracing() {
    let env = std::env::var("METASCAN_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn init_metrics() {
    if let Ok(addr) = std::env::var("METASCAN_METRICS_ADDR") {
        if let Ok(sock) = addr.parse::<std::net::SocketAddr>() {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            match builder.with_http_listener(sock).install() {
                Ok(_) => tracing::info!(addr = %addr, "Prometheus metrics exporter listening"),
                Err(e) => tracing::warn!(error = %e, "failed to install metrics exporter"),
            }
        } else {
            tracing::warn!(addr = %addr, "invalid METASCAN_METRICS_ADDR; expected host:port");
        }
    }
}

fn parse_category(tag: &str) -> Result<Category> {
    tag.parse::<Category>().map_err(|e| anyhow::anyhow!(e))
}

async fn browser_for(catalog_path: &str, category: Category) -> Result<Browser> {
    let catalog = JsonCatalog::from_path(catalog_path)?;
    let mut browser = Browser::new(Arc::new(catalog));
    browser.select_category(category);
    browser.settle().await;
    Ok(browser)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    init_metrics();
    let cli = Cli::parse();

    match cli.command {
        Commands::Categories => {
            #[derive(serde::Serialize)]
            #[serde(rename_all = "camelCase")]
            struct Row {
                label: &'static str,
                value: &'static str,
                icon: &'static str,
                access: bool,
            }
            let rows: Vec<Row> = Category::ALL
                .into_iter()
                .map(|c| Row {
                    label: c.label(),
                    value: c.as_str(),
                    icon: c.icon(),
                    access: c.supports_access_report(),
                })
                .collect();
            match cli.output {
                Output::Human => {
                    for r in rows {
                        let access = if r.access { "access" } else { "-" };
                        println!("{:<14} {:<26} {:<36} {}", r.label, r.value, r.icon, access);
                    }
                }
                Output::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            }
        }
        Commands::Ls {
            category,
            search,
            page,
        } => {
            let category = parse_category(&category)?;
            info!(category = %category, search = ?search, page, "ls invoked");
            let mut browser = browser_for(&cli.catalog, category).await?;
            if let Some(term) = &search {
                browser.set_search_term(term);
            }
            for _ in 1..page {
                browser.next_page();
            }
            let results = browser.results();
            match cli.output {
                Output::Human => {
                    if results.show_no_data() {
                        println!("(no data)");
                    } else if results.show_no_results() {
                        println!("(no results for '{}')", results.search_term());
                    } else {
                        println!("{:<20} NAME", "ID");
                        for it in results.visible_page() {
                            let name = it.developer_name.as_deref().unwrap_or("-");
                            println!("{:<20} {}", it.id, name);
                        }
                        if results.show_pagination() {
                            println!(
                                "page {}/{} ({} matching)",
                                results.page(),
                                results.total_pages(),
                                results.filtered_count()
                            );
                        }
                    }
                }
                Output::Json => {
                    #[derive(serde::Serialize)]
                    #[serde(rename_all = "camelCase")]
                    struct Page<'a> {
                        items: Vec<&'a Item>,
                        page: usize,
                        total_pages: usize,
                        filtered_count: usize,
                    }
                    let out = Page {
                        items: results.visible_page(),
                        page: results.page(),
                        total_pages: results.total_pages(),
                        filtered_count: results.filtered_count(),
                    };
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
            }
        }
        Commands::Deps { category, item_id } => {
            let category = parse_category(&category)?;
            info!(category = %category, item = %item_id, "deps invoked");
            let mut browser = browser_for(&cli.catalog, category).await?;
            browser.open_item(&item_id);
            browser.settle().await;
            let edges = browser.dependencies().data().cloned().unwrap_or_default();
            match cli.output {
                Output::Human => {
                    if browser.has_no_dependencies() {
                        println!("(no dependencies)");
                    } else {
                        println!("{:<28} {:<26} ID", "DEPENDENT", "TYPE");
                        for e in &edges {
                            let kind = e.dependent_type.as_deref().unwrap_or("-");
                            println!("{:<28} {:<26} {}", e.dependent_name, kind, e.dependent_id);
                        }
                    }
                }
                Output::Json => println!("{}", serde_json::to_string_pretty(&edges)?),
            }
        }
        Commands::Access { category, item_id } => {
            let category = parse_category(&category)?;
            info!(category = %category, item = %item_id, "access invoked");
            let mut browser = browser_for(&cli.catalog, category).await?;
            if !browser.show_access_button() {
                eprintln!("access view is not offered for {category}");
                return Ok(());
            }
            browser.show_access(&item_id);
            browser.settle().await;
            match browser.access().data() {
                Some(report) if !report.is_empty() => match cli.output {
                    Output::Human => print_access(report),
                    Output::Json => println!("{}", serde_json::to_string_pretty(report)?),
                },
                _ => println!("(no access data)"),
            }
        }
    }

    Ok(())
}

fn print_access(report: &RenderedAccessReport) {
    match report {
        RenderedAccessReport::Simple { records } => {
            println!("{:<28} ACCESS", "NAME");
            for r in records {
                println!("{:<28} {}", r.record.name, r.access_symbol);
            }
        }
        RenderedAccessReport::Crud { records } => {
            println!("{:<28} READ  CREATE  EDIT  DELETE", "NAME");
            for r in records {
                println!(
                    "{:<28} {:<5} {:<7} {:<5} {}",
                    r.record.name, r.read_symbol, r.create_symbol, r.edit_symbol, r.delete_symbol
                );
            }
        }
    }
}
