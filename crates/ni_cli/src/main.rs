use chrono::Utc;
use clap::Parser;
use ni_core::display::{format_count, time_ago};
use ni_core::{
    find_by_slug, related_articles, Article, ArticleDraft, ArticleFeed, ArticleSink, ArticleSource,
    Category, Config, FilterOptions, Result,
};
use ni_search::{ArticleSuggestions, SearchSuggestions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "NewsInsight feed, search and admin tools", long_about = None)]
pub struct Cli {
    /// JSON config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Storage backend: memory (seeded) or empty
    #[arg(long, default_value = "memory")]
    storage: String,
    /// Simulated feed latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the home feed
    Feed {
        /// `all` or a category name
        #[arg(long)]
        category: Option<String>,
        /// newest, featured, popular or breaking
        #[arg(long)]
        sort: Option<String>,
        /// today, week, month or all
        #[arg(long)]
        time_range: Option<String>,
    },
    /// Show one article with its related reads
    Article { slug: String },
    /// Type each argument as a keystroke into the suggestion box
    Search {
        #[arg(required = true)]
        keystrokes: Vec<String>,
        /// Pause between keystrokes in milliseconds
        #[arg(long, default_value_t = 100)]
        typing_ms: u64,
    },
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
    /// Run the JSON API
    Serve {
        #[arg(long)]
        addr: Option<String>,
    },
}

#[derive(clap::Subcommand, Debug)]
enum AdminCommands {
    List,
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long, default_value = "")]
        excerpt: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = "Technology")]
        category: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long)]
        featured: bool,
        #[arg(long)]
        breaking: bool,
    },
    Archive { id: String },
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn print_article_line(article: &Article) {
    let mut flags = Vec::new();
    if article.breaking() {
        flags.push("BREAKING");
    }
    if article.featured() {
        flags.push("FEATURED");
    }
    if article.is_archived {
        flags.push("ARCHIVED");
    }
    println!(
        "  [{}] {} ({}, {}) {} views {}",
        article.id,
        article.title,
        article.category,
        time_ago(article.published_at, Utc::now()),
        format_count(article.views),
        flags.join(" ")
    );
}

/// Anything but `y` or `yes` counts as no, including end of input.
fn confirm(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

async fn run_feed(feed: &ArticleFeed, options: FilterOptions) -> Result<()> {
    info!("📰 Loading feed...");
    let sections = feed.sections(&options).await?;
    if sections.is_empty() {
        println!("No articles match these filters.");
        return Ok(());
    }
    for (title, articles) in [
        ("Breaking News", &sections.breaking),
        ("Featured Analysis", &sections.featured),
        ("Latest Articles", &sections.regular),
    ] {
        if articles.is_empty() {
            continue;
        }
        println!("{}", title);
        articles.iter().for_each(print_article_line);
    }
    Ok(())
}

async fn run_article(storage: &dyn ArticleSource, config: &Config, slug: &str) -> Result<()> {
    let articles = storage.articles().await?;
    let Some(article) = find_by_slug(&articles, slug) else {
        println!("Article not found: {}", slug);
        return Ok(());
    };
    println!("{}", article.title);
    println!(
        "{} | {} | {}",
        article.author,
        article.category,
        article.published_at.format("%B %-d, %Y")
    );
    println!(
        "{} views, {} likes, {} shares, {} comments",
        format_count(article.views),
        format_count(article.likes),
        format_count(article.shares),
        format_count(article.comments)
    );
    println!();
    println!("{}", article.content);
    let related = related_articles(&articles, article, config.related_limit);
    if !related.is_empty() {
        println!();
        println!("Related Articles");
        related.into_iter().for_each(print_article_line);
    }
    Ok(())
}

async fn run_search(
    suggestions: SearchSuggestions,
    keystrokes: &[String],
    typing: Duration,
) -> Result<()> {
    for keystroke in keystrokes {
        suggestions.search(keystroke);
        tokio::time::sleep(typing).await;
    }
    tokio::time::sleep(suggestions.debounce() + Duration::from_millis(50)).await;

    let state = suggestions.state();
    if !state.show_suggestions {
        println!("Type at least two characters to see suggestions.");
    } else if state.results.is_empty() {
        println!("No results found for \"{}\"", state.query);
    } else {
        println!("Suggestions for \"{}\":", state.query);
        for result in &state.results {
            println!(
                "  {} [{:?}] /article/{} ({})",
                result.title,
                result.kind,
                result.slug,
                result.published_at.format("%Y-%m-%d")
            );
        }
    }
    Ok(())
}

async fn run_admin<S, R, W>(
    storage: &S,
    command: AdminCommands,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    S: ArticleSource + ArticleSink,
    R: BufRead,
    W: Write,
{
    match command {
        AdminCommands::List => {
            let articles = storage.articles().await?;
            println!("{} articles", articles.len());
            articles.iter().for_each(print_article_line);
        }
        AdminCommands::Create {
            title,
            author,
            excerpt,
            content,
            category,
            tags,
            image,
            featured,
            breaking,
        } => {
            let draft = ArticleDraft {
                excerpt,
                content,
                category: Some(category.parse::<Category>()?),
                tags,
                featured_image: image,
                is_featured: featured,
                is_breaking: breaking,
                ..ArticleDraft::new(title, author)
            };
            let article = storage.create_article(draft).await?;
            println!("Created article {} (/article/{})", article.id, article.slug);
        }
        AdminCommands::Archive { id } => {
            let article = storage.toggle_archive(&id).await?;
            println!(
                "Article {} is now {}",
                article.id,
                if article.is_archived { "archived" } else { "active" }
            );
        }
        AdminCommands::Delete { id, yes } => {
            let prompt = "Are you sure you want to delete this article?";
            if !yes && !confirm(input, output, prompt)? {
                writeln!(output, "Deletion cancelled.")?;
                return Ok(());
            }
            storage.delete_article(&id).await?;
            writeln!(output, "Deleted article {}", id)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    ni_core::logging::init_logging();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(latency_ms) = cli.latency_ms {
        config = config.with_simulated_latency_ms(latency_ms);
    }

    let storage = ni_storage::create_storage(&cli.storage)?;
    info!("💾 Storage initialized successfully (using {})", cli.storage);

    match cli.command {
        Commands::Feed {
            category,
            sort,
            time_range,
        } => {
            let options = FilterOptions::from_params_or(
                &config.default_filters,
                category.as_deref(),
                sort.as_deref(),
                time_range.as_deref(),
            );
            let feed =
                ArticleFeed::new(storage.clone()).with_latency(config.simulated_latency());
            run_feed(&feed, options).await?;
        }
        Commands::Article { slug } => run_article(storage.as_ref(), &config, &slug).await?,
        Commands::Search {
            keystrokes,
            typing_ms,
        } => {
            let source = Arc::new(ArticleSuggestions::new(storage.clone()));
            let suggestions = SearchSuggestions::new(source, &config);
            run_search(suggestions, &keystrokes, Duration::from_millis(typing_ms)).await?;
        }
        Commands::Admin { command } => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout();
            run_admin(storage.as_ref(), command, &mut input, &mut output).await?
        }
        Commands::Serve { addr } => {
            if let Some(addr) = addr {
                config = config.with_listen_addr(addr);
            }
            ni_web::serve(ni_web::AppState::new(storage, config)).await?;
        }
    }

    Ok(())
}
