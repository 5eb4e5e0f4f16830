use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use legenda_core::{
    Document, FetchConfig, PageRequest, ProfileLoader, ResolvedQuery, SiteProfile,
    build_page_request, extract_content, extract_listing, fetch_page,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Browse web-fiction catalogs through legenda site adapters
#[derive(Parser, Debug)]
#[command(name = "legenda")]
#[command(version)]
#[command(about = "Browse web-fiction catalogs through site adapters", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Directory with additional site-profile JSON files
    #[arg(long, global = true, value_name = "DIR")]
    profiles: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, global = true, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered site adapters
    Sites,
    /// List catalog entries of a site
    List {
        /// Site name, e.g. `novelfull`
        site: String,

        /// 1-based page number
        #[arg(long, default_value = "1", value_name = "NUM")]
        page: u32,

        /// Free-text search (overrides every filter)
        #[arg(long, value_name = "TEXT")]
        query: Option<String>,

        /// Genre/category filter raw value, e.g. `genre/Action`
        #[arg(long, value_name = "VALUE")]
        genre: Option<String>,

        /// List-kind filter raw value, e.g. `hot-novel`
        #[arg(long, value_name = "VALUE")]
        kind: Option<String>,

        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,

        /// Parse a local HTML file instead of fetching
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print the readable text of one content page
    Read {
        /// Site name, e.g. `novelfull`
        site: String,

        /// Entry path (from `list`) or a full URL
        target: String,

        /// Parse a local HTML file instead of fetching
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Emit the raw HTML fragment instead of flattened text
        #[arg(long)]
        html: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    let mut loader = ProfileLoader::new();
    if let Some(dir) = &args.profiles {
        loader = loader.with_custom_dir(dir);
    }

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
    };

    match &args.command {
        Command::Sites => run_sites(&loader),
        Command::List { site, page, query, genre, kind, json, file } => {
            let profile = loader.find(site)?;
            run_list(&profile, *page, query, genre, kind, *json, file, &fetch_config).await
        }
        Command::Read { site, target, file, html } => {
            let profile = loader.find(site)?;
            run_read(&profile, target, file, *html, &fetch_config).await
        }
    }
}

fn run_sites(loader: &ProfileLoader) -> Result<()> {
    for profile in loader.load() {
        let marker = if profile.cipher.is_some() { " [cipher]" } else { "" };
        println!(
            "{}  {}{}  {}",
            profile.name.bold().bright_blue(),
            profile.label,
            marker.yellow(),
            profile.base_url.as_str().dimmed(),
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn run_list(
    profile: &SiteProfile,
    page: u32,
    query: &Option<String>,
    genre: &Option<String>,
    kind: &Option<String>,
    json: bool,
    file: &Option<PathBuf>,
    fetch_config: &FetchConfig,
) -> Result<()> {
    let mut filters = profile.filter_set();
    for (flag, value) in [("--genre", genre), ("--kind", kind)] {
        if let Some(value) = value {
            let matched = filters.iter_mut().any(|filter| filter.select_value(value));
            if !matched {
                bail!("{} value {:?} is not offered by site {:?}", flag, value, profile.name);
            }
        }
    }

    let resolved = ResolvedQuery::new(page, query.clone(), &filters);
    let request = build_page_request(profile, &resolved)?;
    let markup = load_markup(&request, file, fetch_config).await?;
    let doc = Document::parse_with_base(&markup, request.url);

    let listing = extract_listing(&doc, profile);
    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for entry in &listing.entries {
        println!("{}  {}", entry.id.bright_cyan(), entry.title);
    }
    if listing.entries.is_empty() {
        eprintln!("{}", "no entries matched; the site template may have drifted".yellow());
    }
    if listing.has_next_page {
        eprintln!("{}", format!("more entries on page {}", page + 1).dimmed());
    }
    Ok(())
}

async fn run_read(
    profile: &SiteProfile,
    target: &str,
    file: &Option<PathBuf>,
    html: bool,
    fetch_config: &FetchConfig,
) -> Result<()> {
    let url = match Url::parse(target) {
        Ok(absolute) => absolute,
        Err(_) => profile
            .base_url
            .join(target)
            .with_context(|| format!("cannot resolve {:?} against {}", target, profile.base_url))?,
    };

    let request = PageRequest { url, headers: profile.headers.clone() };
    let markup = load_markup(&request, file, fetch_config).await?;
    let doc = Document::parse_with_base(&markup, request.url);

    let content = extract_content(&doc, profile);
    if content.is_empty() {
        eprintln!("{}", "no readable content matched on this page".yellow());
        return Ok(());
    }

    if html {
        println!("{}", content.html);
        return Ok(());
    }

    let fragment = Document::parse(&content.html);
    let paragraphs = fragment.select("p").unwrap_or_default();
    if paragraphs.is_empty() {
        println!("{}", fragment.text_content().trim());
    } else {
        for paragraph in paragraphs {
            let text = paragraph.text();
            let text = text.trim();
            if !text.is_empty() {
                println!("{text}");
                println!();
            }
        }
    }
    Ok(())
}

async fn load_markup(
    request: &PageRequest,
    file: &Option<PathBuf>,
    fetch_config: &FetchConfig,
) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        }
        None => fetch_page(request, fetch_config)
            .await
            .with_context(|| format!("fetching {}", request.url)),
    }
}
