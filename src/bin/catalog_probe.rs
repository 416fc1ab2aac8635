// catalog_probe - check the catalog backend from the command line
//
// Usage: catalog_probe [FILTER] [SEARCH]
//
// Runs the same load pipeline as the explore page against BOOKWISE_API_URL
// and prints what the page would show.

use anyhow::{Context, Result};
use bookwise_explore::web_app::catalog::{load_books, rating_label};
use bookwise_explore::web_app::config::CatalogConfig;
use bookwise_explore::web_app::model::ExploreQuery;
use bookwise_explore::web_app::source::HttpBookSource;

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let query = ExploreQuery::new(args.next().unwrap_or_default(), args.next().unwrap_or_default());

    let config = CatalogConfig::from_env()?;
    let source = HttpBookSource::from_config(&config)?
        .context("BOOKWISE_API_URL environment variable must be set")?;

    println!("Probing {} ...", source.books_url());
    println!("  filter: {:?}", query.filter);
    println!("  search: {:?}", query.search);

    let books = load_books(&source, &query).await?;

    println!("✓ {} books\n", books.len());
    for book in books {
        println!(
            "  - {} by {} [{}]",
            book.book.name,
            book.book.author,
            rating_label(book.average)
        );
    }

    Ok(())
}
