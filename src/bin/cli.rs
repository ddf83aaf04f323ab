use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use indie_game_proxy::{DiscoveryEngine, Filter, GameDetail, GamePage, ProxyConfig};

#[derive(Parser)]
#[command(name = "indie-proxy-cli")]
#[command(about = "Indie game discovery from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RAWG API key (defaults to $RAWG_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Print raw JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List games matching a filter
    Games(FilterArgs),

    /// Pick a random game matching a filter
    Random(FilterArgs),

    /// Show one game
    Game {
        /// Game id or slug
        id: String,
    },

    /// Show games similar to one game
    Similar {
        /// Game id or slug
        id: String,
    },

    /// List available genres
    Genres,

    /// List parent platforms
    Platforms,
}

#[derive(Args)]
struct FilterArgs {
    /// Genre slug (repeatable)
    #[arg(short, long = "genre")]
    genres: Vec<String>,

    /// Minimum critic score (0-100)
    #[arg(long)]
    min_rating: Option<u32>,

    /// Minimum review count
    #[arg(long)]
    min_reviews: Option<u32>,

    #[arg(long)]
    year_start: Option<u32>,

    #[arg(long)]
    year_end: Option<u32>,

    /// Parent platform id (repeatable)
    #[arg(short, long = "platform")]
    platforms: Vec<u32>,

    #[arg(long)]
    ordering: Option<String>,

    #[arg(short, long)]
    search: Option<String>,

    #[arg(long, default_value = "1")]
    page: u32,

    #[arg(long, default_value = "20")]
    page_size: u32,
}

impl FilterArgs {
    fn into_filter(self) -> indie_game_proxy::Result<Filter> {
        let filter = Filter {
            genres: (!self.genres.is_empty()).then_some(self.genres),
            min_rating: self.min_rating,
            min_reviews: self.min_reviews,
            year_start: self.year_start,
            year_end: self.year_end,
            platforms: (!self.platforms.is_empty()).then_some(self.platforms),
            ordering: self.ordering,
            search: self.search,
            page: self.page,
            page_size: self.page_size,
        };
        filter.validate()?;
        Ok(filter)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut vars: std::collections::HashMap<String, String> = std::env::vars().collect();
    if let Some(key) = cli.api_key {
        vars.insert("RAWG_API_KEY".to_string(), key);
    }
    let config = ProxyConfig::from_vars(&vars)?;
    let engine = DiscoveryEngine::new(&config)?;

    let json = cli.json;

    match cli.command {
        Commands::Games(args) => {
            let filter = args.into_filter()?;
            println!("🔍 Searching page {}...", filter.page);

            let data = engine.list_games(&filter).await?;
            if json {
                print_json(&data)?;
            } else {
                print_page(&data)?;
            }
        }

        Commands::Random(args) => {
            let filter = args.into_filter()?;
            println!("🎲 Picking a random game...");

            let data = engine.random_game(&filter).await?;
            if json {
                print_json(&data)?;
            } else {
                print_detail(&data)?;
            }
        }

        Commands::Game { id } => {
            let data = engine.game_detail(&id).await?;
            if json {
                print_json(&data)?;
            } else {
                print_detail(&data)?;
            }
        }

        Commands::Similar { id } => {
            let data = engine.similar_games(&id).await?;
            if json {
                print_json(&data)?;
            } else {
                println!("📋 Similar to {}:", id);
                print_page(&data)?;
            }
        }

        Commands::Genres => print_json(&engine.genres().await?)?,

        Commands::Platforms => print_json(&engine.platforms().await?)?,
    }

    Ok(())
}

fn print_json(data: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn print_page(data: &Value) -> anyhow::Result<()> {
    let page: GamePage = serde_json::from_value(data.clone())?;

    if page.is_empty() {
        println!("   No games found.");
        return Ok(());
    }

    println!("   {} total", page.count);
    for (i, game) in page.results.iter().enumerate() {
        let score = game
            .metacritic
            .map(|m| m.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        println!("   {}. {} [{}] ({} reviews)", i + 1, game.display_name(), score, game.ratings_count);
    }

    Ok(())
}

fn print_detail(data: &Value) -> anyhow::Result<()> {
    let game: GameDetail = serde_json::from_value(data.clone())?;
    let summary = &game.summary;

    println!("\n✅ {}", summary.display_name());
    println!("   Id: {}", summary.id);
    println!(
        "   Metacritic: {}",
        summary.metacritic.map(|m| m.to_string()).unwrap_or_else(|| "N/A".to_string())
    );
    println!(
        "   Rating: {} ({} reviews)",
        summary.rating.map(|r| format!("{:.2}", r)).unwrap_or_else(|| "N/A".to_string()),
        summary.ratings_count
    );
    println!("   Genres: {}", summary.genre_slugs().collect::<Vec<_>>().join(", "));

    if let Some(developers) = &game.developers {
        let names: Vec<&str> = developers.iter().map(|d| d.name.as_str()).collect();
        println!("   Developers: {}", names.join(", "));
    }

    Ok(())
}
