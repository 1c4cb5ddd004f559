use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use glowrec_catalog::{CatalogSnapshot, CatalogStore, ProductRow};
use glowrec_engine::{Recommendation, Recommender, Request, ScoreWeights, ScoringParams};

/// Command-line front end for the recommendation engine
#[derive(Parser, Debug)]
#[command(name = "glowrec")]
#[command(about = "Skincare product recommendations from the command line", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a catalog snapshot from a raw product table (JSON array)
    Build {
        /// Path to the raw product table
        #[arg(short, long)]
        products: PathBuf,

        /// Output snapshot path
        #[arg(short, long, default_value = "./catalog.snapshot")]
        out: PathBuf,
    },
    /// Rank catalog products for a single query
    Recommend {
        /// Path to a snapshot produced by `glowrec build`
        #[arg(short, long, default_value = "./catalog.snapshot")]
        snapshot: PathBuf,

        /// Skin type (combination, dry, normal, oily, sensitive)
        #[arg(long)]
        skin_type: String,

        /// Product category (cleanser, moisturizer, serum, sunscreen, toner)
        #[arg(long)]
        category: String,

        /// Budget in catalog price units
        #[arg(long)]
        budget: f32,

        /// Free-text skin concern, e.g. "hydration" or "acne"
        #[arg(long, default_value = "")]
        concern: String,

        /// Maximum number of rows returned
        #[arg(long, default_value_t = 5)]
        top_n: usize,

        /// Sharpness of the price-proximity falloff
        #[arg(long, default_value_t = 100.0)]
        price_sigma: f32,

        /// Score weights as similarity,rating,price
        #[arg(long, value_delimiter = ',', num_args = 3)]
        weights: Option<Vec<f32>>,
    },
    /// Print a skincare tip
    Tip {
        /// Tip index; wraps around the tip list
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
}

const SKINCARE_TIPS: [&str; 20] = [
    "Sunscreen is a must, even on cloudy days!",
    "Hydration is the foundation of healthy skin.",
    "Vitamin C helps brighten skin and fight dullness.",
    "Patch-testing a product can save you from irritation.",
    "Exfoliate gently - your skin will thank you!",
    "Double cleansing removes dirt and sunscreen effectively.",
    "Niacinamide helps regulate oil and improve skin texture.",
    "Always moisturize after washing your face to lock in hydration.",
    "Retinol works best at night but remember to use sunscreen during the day!",
    "Use lukewarm water, not hot, to prevent skin dryness.",
    "Don't skip your neck - it needs skincare too!",
    "Overwashing can strip your skin's natural oils. Keep it to twice a day.",
    "Layer products from thinnest to thickest for maximum absorption.",
    "Avoid harsh scrubs; use chemical exfoliants for a gentler approach.",
    "Drink plenty of water for that inside-out glow.",
    "A consistent routine is key - don't expect overnight results.",
    "Store vitamin C serums in a cool, dark place to prevent oxidation.",
    "SPF should be reapplied every 2 hours when outdoors.",
    "Silk pillowcases can reduce skin irritation and improve hydration.",
    "Diet impacts skin - eat plenty of fruits and veggies for a natural glow.",
];

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Build { products, out } => {
            let file = std::fs::File::open(&products)?;
            let rows: Vec<ProductRow> = serde_json::from_reader(std::io::BufReader::new(file))?;
            info!("Read {} products from {:?}", rows.len(), products);

            let snapshot = CatalogSnapshot::build(rows);
            info!(
                "Fitted concern vocabulary: {} terms",
                snapshot.vectorizer.vocab_len()
            );

            snapshot.save(&out)?;
            info!("Snapshot written to {:?}", out);
        }
        Command::Recommend {
            snapshot,
            skin_type,
            category,
            budget,
            concern,
            top_n,
            price_sigma,
            weights,
        } => {
            let store = Arc::new(CatalogStore::open(&snapshot)?);
            info!("Catalog loaded: {} products", store.len());

            let mut params = ScoringParams {
                top_n,
                price_sigma,
                ..Default::default()
            };
            if let Some(w) = weights {
                params.weights = ScoreWeights {
                    similarity: w[0],
                    rating: w[1],
                    price: w[2],
                };
            }

            let recommender = Recommender::new(store);
            let request = Request::new(skin_type, category, budget, concern);

            match recommender.recommend(&request, &params) {
                Recommendation::Ranked(rows) => {
                    println!(
                        "{:<20} {:<32} {:>8} {:>7} {:>7}",
                        "BRAND", "NAME", "PRICE", "RATING", "SCORE"
                    );
                    for row in rows {
                        println!(
                            "{:<20} {:<32} {:>8.2} {:>7.2} {:>7.3}",
                            row.brand, row.name, row.price, row.rating, row.score
                        );
                    }
                }
                Recommendation::Diagnostic(diagnostic) => println!("{}", diagnostic),
            }
        }
        Command::Tip { index } => {
            println!("Tip: {}", SKINCARE_TIPS[index % SKINCARE_TIPS.len()]);
        }
    }

    Ok(())
}
