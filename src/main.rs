mod cache;
mod config;
mod contentful;
mod dom;
mod logging;
mod pages;
mod render;

use clap::{Parser, Subcommand};
use color_eyre::{eyre::eyre, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use contentful::{ContentClient, EntryQuery};
use dom::MemoryDocument;
use pages::{Page, PAGES};

#[derive(Parser, Debug)]
#[command(name = "contentbind")]
#[command(about = "Bind headless CMS content into a static site's page templates")]
#[command(version)]
struct Args {
  /// Path to config file (default: ./contentbind.yaml or $XDG_CONFIG_HOME/contentbind/config.yaml)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  /// Write logs to this file instead of stderr
  #[arg(long, global = true)]
  log_file: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Run a page's content bindings against a template and print the result
  Render {
    /// Page name, alias or template file name (e.g. home, faq, service.html)
    page: Page,

    /// YAML description of the page template
    #[arg(short, long)]
    template: PathBuf,

    /// Write the bound template here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Fetch raw entries of one content type
  Entries {
    content_type: String,

    #[arg(long)]
    order: Option<String>,

    #[arg(long)]
    limit: Option<u32>,

    /// Depth of linked entries and assets to include
    #[arg(long)]
    include: Option<u8>,

    /// Field filter as field=value, repeatable
    #[arg(long = "filter", value_parser = parse_filter)]
    filters: Vec<(String, String)>,
  },

  /// Fetch one raw entry by id
  Entry { id: String },

  /// List pages with content bindings
  Pages,
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
  s.split_once('=')
    .filter(|(field, _)| !field.is_empty())
    .map(|(field, value)| (field.to_string(), value.to_string()))
    .ok_or_else(|| format!("expected field=value, got `{}`", s))
}

fn configured_client(config: &config::Config) -> Result<ContentClient> {
  let client = ContentClient::new(&config.contentful)?;
  if !client.is_configured() {
    return Err(eyre!(
      "Content API is not configured: set contentful.space_id and an access token"
    ));
  }
  Ok(client)
}

fn print_json(value: &serde_json::Value) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
  color_eyre::install()?;

  let args = Args::parse();
  let _log_guard = logging::init(args.log_file.as_deref())?;

  let config = config::Config::load(args.config.as_deref())?;

  match args.command {
    Command::Render {
      page,
      template,
      output,
    } => {
      let doc = MemoryDocument::load(&template)?;
      // An unconfigured client is fine here: the page keeps its static content
      let client = ContentClient::new(&config.contentful)?;

      let report = pages::init_page(page, &client, &doc, &config.site).await;
      debug!(fields = ?report.fields, "page fields");
      for (area, outcome) in &report.areas {
        debug!(area, ?outcome, "area rendered");
      }

      let yaml = doc.to_yaml()?;
      match output {
        Some(path) => {
          std::fs::write(&path, yaml)
            .map_err(|e| eyre!("Failed to write {}: {}", path.display(), e))?;
          info!(path = %path.display(), "wrote bound template");
        }
        None => print!("{}", yaml),
      }
    }
    Command::Entries {
      content_type,
      order,
      limit,
      include,
      filters,
    } => {
      let client = configured_client(&config)?;
      let mut query = EntryQuery::new().param("content_type", &content_type);
      if let Some(order) = order {
        query = query.order(&order);
      }
      if let Some(limit) = limit {
        query = query.limit(limit);
      }
      if let Some(include) = include {
        query = query.include(include);
      }
      for (field, value) in filters {
        query = query.field_eq(&field, value);
      }
      print_json(&client.fetch(&["entries"], &query).await?)?;
    }
    Command::Entry { id } => {
      let client = configured_client(&config)?;
      let entry = client.get_entry(&id, EntryQuery::new()).await?;
      info!(id = entry.id(), content_type = entry.content_type(), "fetched entry");
      print_json(&serde_json::to_value(&entry)?)?;
    }
    Command::Pages => {
      for info in PAGES {
        println!(
          "{:<10} {:<16} {:<22} {}",
          info.name,
          info.template,
          info.aliases.join(", "),
          info.description
        );
      }
    }
  }

  Ok(())
}
