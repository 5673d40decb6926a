use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use ns_core::{Error, Result, SearchQuery};
use ns_inference::{Config, SentimentClassifier};
use ns_sources::newsapi::DEFAULT_BASE_URL;
use ns_sources::{NewsApiClient, NewsService};
use ns_storage::SessionStore;
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

mod display;
mod logging;

/// Searches start this many days back when no date is given.
const DEFAULT_LOOKBACK_DAYS: u64 = 3;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// NewsAPI key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,
    #[arg(long, env = "NEWS_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,
    #[arg(long, default_value = "vader", global = true, help = "Sentiment scorer to use. Available scorers: vader (default), fixed")]
    scorer: String,
    /// Full VADER lexicon file loaded over the built-in word table
    #[arg(long, env = "NS_VADER_LEXICON", global = true)]
    lexicon: Option<PathBuf>,
    /// Score returned by the fixed scorer
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, global = true)]
    fixed_score: f64,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the news API over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: SocketAddr,
    },
    /// Search news and page through the labeled results
    Search {
        /// Topic to search for (e.g. 'Tesla', 'AI', 'Health')
        query: String,
        /// Earliest publication date, YYYY-MM-DD. Defaults to three days ago.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print the sentiment label of a piece of text
    Classify {
        text: String,
    },
}

fn default_from_date() -> NaiveDate {
    let today = Local::now().date_naive();
    today
        .checked_sub_days(Days::new(DEFAULT_LOOKBACK_DAYS))
        .unwrap_or(today)
}

fn build_classifier(cli: &Cli) -> Result<SentimentClassifier> {
    let config = Config {
        scorer: cli.scorer.clone(),
        fixed_score: cli.fixed_score,
        lexicon_path: cli.lexicon.clone(),
    };
    let scorer = ns_inference::create_scorer(Some(config))?;
    info!("🧠 Sentiment scorer initialized (using {})", scorer.name());
    Ok(SentimentClassifier::new(scorer))
}

fn build_news_service(cli: &Cli) -> Result<NewsService> {
    let api_key = cli.api_key.clone().ok_or_else(|| {
        Error::Config("A NewsAPI key is required (--api-key or NEWS_API_KEY)".to_string())
    })?;
    let client = NewsApiClient::new(api_key).with_base_url(cli.base_url.as_str());
    let base_url = client.base_url().to_string();
    let news = NewsService::new(Arc::new(client), build_classifier(cli)?);
    info!("📡 News source initialized ({} at {})", news.source_name(), base_url);
    Ok(news)
}

async fn run_search(news: NewsService, query: String, date: Option<NaiveDate>) -> Result<()> {
    let query = SearchQuery::new(query, date.unwrap_or_else(default_from_date));
    let store = SessionStore::new();

    let mut view = news.search_into(&query, &store).await?;
    if view.total_pages == 0 {
        println!("⚠️ No articles found for your criteria. Please try different settings.");
        return Ok(());
    }
    println!("✅ Found and analyzed {} articles.", view.total_results);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!("{}", display::render_page(&view));
        print!("[n]ext, [p]revious, [q]uit > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim().to_lowercase().as_str() {
            "n" | "next" => {
                if !view.has_next {
                    println!("Already on the last page.");
                }
                view = store.next().await;
            }
            "p" | "previous" | "prev" => {
                if !view.has_previous {
                    println!("Already on the first page.");
                }
                view = store.previous().await;
            }
            "q" | "quit" | "exit" => break,
            other => println!("Unknown command: {:?}", other),
        }
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Serve { addr } => {
            let news = build_news_service(&cli)?;
            ns_web::serve(*addr, ns_web::AppState::new(news)).await
        }
        Commands::Search { query, date } => {
            let news = build_news_service(&cli)?;
            run_search(news, query.clone(), *date).await
        }
        Commands::Classify { text } => {
            let classifier = build_classifier(&cli)?;
            let label = classifier.classify(Some(text.as_str()));
            println!("{}", display::sentiment_badge(Some(label)));
            match classifier.polarity(text) {
                Some(scores) => println!(
                    "compound: {:.4}  pos: {:.3}  neu: {:.3}  neg: {:.3}",
                    scores.compound, scores.pos, scores.neu, scores.neg
                ),
                None => println!("compound: {:.4}", classifier.score(text)),
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_message());
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["ns", "search", "tesla", "--date", "2024-03-01"]).unwrap();
        match cli.command {
            Commands::Search { query, date } => {
                assert_eq!(query, "tesla");
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.scorer, "vader");
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["ns", "serve", "--scorer", "fixed", "--fixed-score", "-0.2"]).unwrap();
        match cli.command {
            Commands::Serve { addr } => assert_eq!(addr.port(), 8000),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.fixed_score, -0.2);
        assert_eq!(build_classifier(&cli).unwrap().scorer_name(), "fixed");
    }

    #[test]
    fn test_missing_lexicon_file_fails_startup() {
        let cli = Cli::try_parse_from(["ns", "classify", "great", "--lexicon", "/nonexistent/vader.txt"]).unwrap();
        assert_eq!(cli.lexicon, Some(PathBuf::from("/nonexistent/vader.txt")));
        assert!(matches!(build_classifier(&cli), Err(Error::Io(_))));
    }

    #[test]
    fn test_rejects_bad_date() {
        assert!(Cli::try_parse_from(["ns", "search", "ai", "--date", "03/01/2024"]).is_err());
    }

    #[test]
    fn test_default_from_date() {
        let today = Local::now().date_naive();
        assert_eq!((today - default_from_date()).num_days(), 3);
    }
}
