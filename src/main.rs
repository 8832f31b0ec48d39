use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use gallery_batcher::{BatchCursor, Batcher, BatcherConfig, Item, format_label, load_items};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gallery-batcher", version, about = "Page featured gallery images by category")]
struct Cli {
    /// Taxonomy/page-size JSON config (defaults to the built-in studio categories)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the shuffle rng; random when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List categories with how many items each one holds
    Categories {
        /// JSON array of classified items
        #[arg(long)]
        items: PathBuf,
    },
    /// Simulate the initial load plus repeated "load more" presses
    Pages {
        #[arg(long)]
        items: PathBuf,
        /// Category key to page through
        #[arg(long)]
        category: String,
        /// Number of loads, including the first
        #[arg(long, default_value_t = 3)]
        loads: usize,
        /// Override the configured page size
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Print display labels for raw classifications
    Label {
        #[arg(required = true)]
        raw: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BatcherConfig::from_file(path)?,
        None => BatcherConfig::default(),
    };

    match cli.command {
        Command::Categories { items } => {
            let items = load_items(&items)?;
            print_categories(&config, &items);
        }
        Command::Pages {
            items,
            category,
            loads,
            page_size,
        } => {
            let items = load_items(&items)?;
            let seed = cli.seed.unwrap_or_else(rand::random);
            info!(seed, "shuffle rng seeded");
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let batcher = Batcher::try_new(page_size.unwrap_or(config.page_size))
                .context("Invalid page size")?;
            simulate_pages(&config, &batcher, &items, &category, loads, &mut rng)?;
        }
        Command::Label { raw } => {
            for r in raw {
                println!("{} -> {}", r, format_label(&r));
            }
        }
    }

    Ok(())
}

fn print_categories(config: &BatcherConfig, items: &[Item]) {
    // Overlapping classifications count once, under their first category
    let (counts, unassigned) = config.categories.assigned_counts(items);
    for (category, (_key, count)) in config.categories.categories().iter().zip(counts) {
        println!(
            "{:<14} {:<28} {:>5} items",
            category.key,
            category.display_label(),
            count
        );
    }

    if unassigned > 0 {
        println!("{:<14} {:<28} {:>5} items", "-", "(no category)", unassigned);
    }
}

fn simulate_pages(
    config: &BatcherConfig,
    batcher: &Batcher,
    items: &[Item],
    category: &str,
    loads: usize,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    if config.categories.get(category).is_none() {
        let known: Vec<&str> = config.categories.keys().collect();
        bail!("Unknown category {:?} (known: {})", category, known.join(", "));
    }

    let members = config.categories.items_by_category(category, items);
    println!(
        "{}: {} items, {} per page\n",
        category,
        members.len(),
        batcher.target_count()
    );

    let mut cursor = BatchCursor::new();
    for load in 1..=loads {
        let page = cursor.current_page();
        let (batch, next) = batcher.advance(cursor, &members, rng);
        cursor = next;

        println!(
            "Load {} [{}] page {} -> {}, has_more={}",
            load,
            batch.mode.as_str(),
            page,
            batch.next_page,
            batch.has_more
        );
        for item in &batch.items {
            println!("  {:<12} {}", item.id, format_label(&item.classification));
        }

        if !batch.has_more {
            println!("\n(whole category shown, nothing more to load)");
            break;
        }
    }

    Ok(())
}
