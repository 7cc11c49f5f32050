use anyhow::{anyhow, Context, Result};
use catalog::parser::{parse_profile, parse_profiles};
use catalog::{seed, BudgetTier, Catalog, Category, UserProfile, Venture};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use engine::{RecommendationEngine, RecommenderConfig, VenueFeed};
use pipeline::filters::*;
use pipeline::FilterPipeline;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scoring::ScoredVenture;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Venture Recs - travel experience recommender
#[derive(Parser)]
#[command(name = "venture-recs")]
#[command(about = "Personalised travel venture recommendations", long_about = None)]
struct Cli {
    /// Venture catalog JSON file (default: built-in venture packs)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Use the Kenya venue feed instead of the venture packs
    #[arg(long, global = true, conflicts_with = "catalog")]
    venues: bool,

    /// Recommender config JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible shuffles
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get venture recommendations for a traveller
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Number of recommendations to return (default from config: 10)
        #[arg(long)]
        limit: Option<usize>,

        /// Spread results across categories and locations
        #[arg(long)]
        diversify: bool,

        /// Show the score breakdown for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Show what's trending
    Trending {
        /// Recently booked venture ids (repeat ids to count several bookings)
        #[arg(long, num_args = 1..)]
        recent: Vec<String>,

        /// Number of trending ventures to show (default from config: 6)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Search ventures by keyword
    Search {
        /// Matched against title, description, and activities (case-insensitive)
        #[arg(long)]
        query: String,
    },

    /// Browse the catalog
    Venues {
        #[arg(long)]
        category: Option<Category>,

        /// Location substring, e.g. "Nairobi"
        #[arg(long)]
        region: Option<String>,

        #[arg(long)]
        max_price: Option<f64>,

        /// romantic, adventure, family, honeymoon, or anniversary
        #[arg(long)]
        occasion: Option<String>,

        /// Only the N highest rated
        #[arg(long)]
        top: Option<usize>,
    },

    /// Explain how one venture scores for a traveller
    Explain {
        /// Venture id
        #[arg(long)]
        id: String,

        #[command(flatten)]
        profile: ProfileArgs,
    },
}

/// Who the recommendations are for.
///
/// With neither a profile file nor any preference flag, the built-in demo
/// traveller and their neighbors are used.
#[derive(Args)]
struct ProfileArgs {
    /// Traveller profile JSON file
    #[arg(long, conflicts_with_all = ["vibe", "location", "budget", "occasion"])]
    profile: Option<PathBuf>,

    /// Preferred vibe, matched against venture tags (repeatable)
    #[arg(long)]
    vibe: Vec<String>,

    /// Preferred location, matched exactly (repeatable)
    #[arg(long)]
    location: Vec<String>,

    /// budget, mid-range, luxury, or ultra-luxury
    #[arg(long, value_parser = parse_budget)]
    budget: Option<BudgetTier>,

    /// Trip occasion (repeatable)
    #[arg(long)]
    occasion: Vec<String>,

    /// Neighbor profiles JSON file for collaborative boosts
    #[arg(long)]
    neighbors: Option<PathBuf>,
}

#[derive(Args)]
struct FilterArgs {
    /// Skip ventures the traveller has already booked
    #[arg(long)]
    exclude_booked: bool,

    /// Only ventures in this category (repeatable)
    #[arg(long = "only-category")]
    categories: Vec<Category>,

    /// Only ventures whose location contains this region
    #[arg(long)]
    region: Option<String>,

    #[arg(long)]
    max_price: Option<f64>,

    /// Only ventures mentioning this keyword
    #[arg(long)]
    keyword: Option<String>,

    /// Only ventures suited to the traveller's occasions
    #[arg(long)]
    match_occasion: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RecommenderConfig::from_path(path)?,
        None => RecommenderConfig::default(),
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let start = Instant::now();
    let catalog = load_catalog(&cli, &config, &mut rng).await?;
    println!(
        "{} Loaded {} ventures in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            profile,
            filters,
            limit,
            diversify,
            explain,
        } => {
            let limit = limit.unwrap_or(config.default_count);
            handle_recommend(
                config, &catalog, &profile, &filters, limit, diversify, explain, &mut rng,
            )?
        }
        Commands::Trending { recent, limit } => handle_trending(config, &catalog, &recent, limit)?,
        Commands::Search { query } => handle_search(&catalog, &query),
        Commands::Venues {
            category,
            region,
            max_price,
            occasion,
            top,
        } => handle_venues(&catalog, category, region, max_price, occasion, top)?,
        Commands::Explain { id, profile } => handle_explain(config, &catalog, &id, &profile)?,
    }

    Ok(())
}

async fn load_catalog(cli: &Cli, config: &RecommenderConfig, rng: &mut StdRng) -> Result<Catalog> {
    if let Some(path) = &cli.catalog {
        info!("Loading catalog from {}", path.display());
        return Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()));
    }
    if cli.venues {
        return VenueFeed::from_config(config).refresh(rng).await;
    }
    seed::venture_packs().context("Failed to load built-in venture packs")
}

impl ProfileArgs {
    fn uses_flags(&self) -> bool {
        !self.vibe.is_empty()
            || !self.location.is_empty()
            || self.budget.is_some()
            || !self.occasion.is_empty()
    }

    /// The traveller and their neighbor profiles.
    fn load(&self) -> Result<(UserProfile, Vec<UserProfile>)> {
        let mut demo = false;
        let profile = if let Some(path) = &self.profile {
            parse_profile(path)
                .with_context(|| format!("Failed to load profile {}", path.display()))?
        } else if self.uses_flags() {
            let mut profile = UserProfile::new()
                .with_vibes(self.vibe.iter().cloned())
                .with_locations(self.location.iter().cloned())
                .with_occasions(self.occasion.iter().cloned());
            if let Some(tier) = self.budget {
                profile = profile.with_budget_tier(tier);
            }
            profile
        } else {
            demo = true;
            seed::sample_profile().context("Failed to load demo profile")?
        };

        let neighbors = match &self.neighbors {
            Some(path) => parse_profiles(path)
                .with_context(|| format!("Failed to load neighbors {}", path.display()))?,
            None if demo => seed::sample_neighbors().context("Failed to load demo neighbors")?,
            None => Vec::new(),
        };

        if demo {
            println!("{}", "No profile given, using the demo traveller".dimmed());
        }
        Ok((profile, neighbors))
    }
}

impl FilterArgs {
    fn pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if self.exclude_booked {
            pipeline = pipeline.add_filter(AlreadyBookedFilter);
        }
        if !self.categories.is_empty() {
            pipeline = pipeline.add_filter(CategoryFilter::new(self.categories.iter().copied()));
        }
        if let Some(region) = &self.region {
            pipeline = pipeline.add_filter(RegionFilter::new(region.clone()));
        }
        if let Some(max_price) = self.max_price {
            pipeline = pipeline.add_filter(MaxPriceFilter::new(max_price));
        }
        if let Some(keyword) = &self.keyword {
            pipeline = pipeline.add_filter(KeywordFilter::new(keyword.clone()));
        }
        if self.match_occasion {
            pipeline = pipeline.add_filter(OccasionFilter);
        }
        pipeline
    }
}

fn parse_budget(label: &str) -> std::result::Result<BudgetTier, String> {
    BudgetTier::from_label(label).ok_or_else(|| {
        format!(
            "unknown budget tier '{}' (expected budget, mid-range, luxury, or ultra-luxury)",
            label
        )
    })
}

/// Handle the 'recommend' command
#[allow(clippy::too_many_arguments)]
fn handle_recommend(
    config: RecommenderConfig,
    catalog: &Catalog,
    profile_args: &ProfileArgs,
    filters: &FilterArgs,
    limit: usize,
    diversify: bool,
    explain: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let (profile, neighbors) = profile_args.load()?;
    let engine = RecommendationEngine::from_config(config)?.with_filters(filters.pipeline());

    // Diversify re-picks from a wider shuffled set than it returns
    let count = if diversify {
        limit.saturating_mul(engine.config().pool_multiplier)
    } else {
        limit
    };

    let mut recommendations =
        engine.recommend(catalog.ventures(), &profile, &neighbors, count, rng)?;
    if diversify {
        recommendations = engine.diversify_recommendations(&recommendations);
        recommendations.truncate(limit);
    }

    print_recommendations(&recommendations, explain);
    Ok(())
}

/// Handle the 'trending' command
fn handle_trending(
    mut config: RecommenderConfig,
    catalog: &Catalog,
    recent: &[String],
    limit: Option<usize>,
) -> Result<()> {
    if let Some(limit) = limit {
        config.trending_limit = limit;
    }
    let engine = RecommendationEngine::from_config(config)?;

    println!("{}", "Trending Ventures:".bold().blue());
    let trending = engine.trending_scores(catalog.ventures(), recent);
    for (rank, (venture, score)) in trending.iter().enumerate() {
        print_venture(rank + 1, venture);
        println!("   Trending score: {:.1}", score);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, query: &str) {
    let matches = catalog.search(query);

    println!("{}", format!("Search results for '{}':", query).bold().blue());
    if matches.is_empty() {
        println!("  {}", "No ventures found".yellow());
    }
    for (rank, venture) in matches.iter().enumerate() {
        print_venture(rank + 1, venture);
    }
}

/// Handle the 'venues' command
fn handle_venues(
    catalog: &Catalog,
    category: Option<Category>,
    region: Option<String>,
    max_price: Option<f64>,
    occasion: Option<String>,
    top: Option<usize>,
) -> Result<()> {
    let mut ventures: Vec<&Venture> = match &occasion {
        Some(label) => {
            if catalog::Occasion::from_label(label).is_none() {
                return Err(anyhow!("Unknown occasion '{}'", label));
            }
            catalog.for_occasion_label(label)
        }
        None => match category {
            Some(category) => catalog.by_category(category),
            None => catalog.iter().collect(),
        },
    };

    if occasion.is_some() {
        if let Some(category) = category {
            ventures.retain(|v| v.category == category);
        }
    }
    if let Some(region) = &region {
        ventures.retain(|v| v.in_region(region));
    }
    if let Some(max_price) = max_price {
        ventures.retain(|v| v.price <= max_price);
    }
    if let Some(top) = top {
        ventures.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ventures.truncate(top);
    }

    println!("{}", format!("{} ventures:", ventures.len()).bold().blue());
    for (rank, venture) in ventures.iter().enumerate() {
        print_venture(rank + 1, venture);
    }
    Ok(())
}

/// Handle the 'explain' command
fn handle_explain(
    config: RecommenderConfig,
    catalog: &Catalog,
    id: &str,
    profile_args: &ProfileArgs,
) -> Result<()> {
    let (profile, neighbors) = profile_args.load()?;
    let engine = RecommendationEngine::from_config(config)?;

    let scored = engine
        .explain(catalog.ventures(), &profile, &neighbors, id)
        .ok_or_else(|| anyhow!("Venture {} not found", id))?;

    print_venture(1, &scored.venture);
    print_breakdown(&scored);
    println!("   {} {:.1}", "Total:".bold(), scored.score());
    Ok(())
}

fn format_price(price: f64) -> String {
    if price <= 0.0 {
        "Free".to_string()
    } else {
        format!("${:.0}", price)
    }
}

fn print_venture(rank: usize, venture: &Venture) {
    println!(
        "{}. {} [{}] {} - {} - rated {:.1}",
        rank.to_string().green(),
        venture.title.bold(),
        venture.category,
        venture.location,
        format_price(venture.price),
        venture.rating
    );
}

fn print_breakdown(scored: &ScoredVenture) {
    let b = &scored.breakdown;
    println!(
        "   tags {:.1} | location {:.1} | budget {:.1} | rating {:.1} | popularity {:.1} | neighbors +{:.1}",
        b.tag_match,
        b.location_match,
        b.budget_fit,
        b.rating,
        b.popularity,
        scored.collaborative_boost
    );
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[ScoredVenture], explain: bool) {
    println!("{}", "Venture Recommendations:".bold().blue());
    if recommendations.is_empty() {
        println!("  {}", "Nothing matched".yellow());
    }
    for (rank, scored) in recommendations.iter().enumerate() {
        print_venture(rank + 1, &scored.venture);
        println!("   Score: {:.2}", scored.score());
        if explain {
            print_breakdown(scored);
        }
    }
}
