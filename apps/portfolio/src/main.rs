use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio::articles::{all_tags, ArticleFilter};
use portfolio::models::{Article, ArticleListItem, Profile, Skills};
use portfolio::profile::timeline::date_range_label;
use portfolio::profile::{sorted_experience, tech_shares};
use portfolio::{ApiClient, Config};

#[derive(Parser, Debug)]
#[command(version, about = "Browse a portfolio profile and its articles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the profile and the experience timeline
    Profile {
        /// Print the normalized profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// List articles, newest first
    Articles {
        /// Free-text search over title, summary, tags and date
        #[arg(long, short)]
        query: Option<String>,
        /// Only articles carrying this exact tag
        #[arg(long, short)]
        tag: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List the tags available for filtering
    Tags,
    /// Show one article
    Article {
        slug: String,
        #[arg(long)]
        json: bool,
    },
    /// Download the CV as a PDF
    Cv {
        /// Bot-verification token
        #[arg(long)]
        token: String,
        #[arg(long, default_value = "cv.pdf")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on a missing or invalid API_BASE_URL)
    let config = Config::from_env()?;

    // Logs go to stderr so JSON output stays pipeable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Portfolio client v{} using {}",
        env!("CARGO_PKG_VERSION"),
        config.api_base_url
    );

    let client = ApiClient::new(&config)?;

    match cli.command {
        Command::Profile { json } => {
            let profile = client.get_profile().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_profile(&profile);
            }
        }
        Command::Articles { query, tag, json } => {
            let articles = client.get_articles().await?;
            let filter = ArticleFilter::new(query.unwrap_or_default(), tag);
            let shown = filter.apply(&articles);
            if json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                print_articles(&filter, &shown);
            }
        }
        Command::Tags => {
            let articles = client.get_articles().await?;
            for tag in all_tags(&articles) {
                println!("{tag}");
            }
        }
        Command::Article { slug, json } => {
            let article = client.get_article(&slug).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&article)?);
            } else {
                print_article(&article);
            }
        }
        Command::Cv { token, out } => {
            let pdf = client.download_cv(&token).await?;
            tokio::fs::write(&out, &pdf)
                .await
                .with_context(|| format!("Failed to write CV to {}", out.display()))?;
            println!("Saved {} bytes to {}", pdf.len(), out.display());
        }
    }

    Ok(())
}

fn print_profile(profile: &Profile) {
    println!("{}", profile.name);
    for line in [&profile.headline, &profile.location, &profile.short_bio] {
        if !line.is_empty() {
            println!("{line}");
        }
    }
    for (key, url) in &profile.links {
        println!("  {key}: {url}");
    }

    print_skills(&profile.skills);

    for job in sorted_experience(&profile.experience) {
        println!();
        println!("{} @ {} ({})", job.title, job.company, date_range_label(job));
        if !job.location.is_empty() {
            println!("  {}", job.location);
        }
        for project in &job.projects {
            match &project.client {
                Some(client) => println!("  * {} for {}", project.name, client),
                None => println!("  * {}", project.name),
            }
            let mix: Vec<String> = tech_shares(&project.tech)
                .iter()
                .map(|s| s.label())
                .collect();
            if !mix.is_empty() {
                println!("    tech: {}", mix.join(", "));
            }
            for highlight in &project.highlights {
                println!("    - {highlight}");
            }
        }
    }
}

fn print_skills(skills: &Skills) {
    for (title, levels) in [("Soft skills", &skills.soft), ("Tech skills", &skills.technical)] {
        if levels.is_empty() {
            continue;
        }
        println!();
        println!("{title}");
        for skill in levels {
            println!(
                "  {:<24} {}/5 ({:.0}%)",
                skill.name,
                skill.level,
                skill.level_percent()
            );
        }
    }
    if !skills.interests.is_empty() {
        println!();
        println!("Interests: {}", skills.interests.join(", "));
    }
}

fn print_articles(filter: &ArticleFilter, shown: &[&ArticleListItem]) {
    println!("{}", filter.summary(shown.len()));
    for article in shown {
        println!();
        println!("{}  [{}]", article.title, article.slug);
        if !article.date.is_empty() {
            println!("  {}", article.date);
        }
        if !article.summary.is_empty() {
            println!("  {}", article.summary);
        }
        if !article.tags.is_empty() {
            println!("  tags: {}", article.tags.join(", "));
        }
    }
}

fn print_article(article: &Article) {
    println!("{}", article.meta.title);
    let minutes = article.reading_time_minutes();
    match (article.meta.date.is_empty(), minutes) {
        (true, 0) => {}
        (false, 0) => println!("{}", article.meta.date),
        (true, m) => println!("{m} min read"),
        (false, m) => println!("{} · {m} min read", article.meta.date),
    }
    if !article.meta.tags.is_empty() {
        println!("tags: {}", article.meta.tags.join(", "));
    }
    println!();
    println!("{}", article.content_html);
}
