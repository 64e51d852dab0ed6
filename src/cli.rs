use std::{fmt::Write as _, io, path::PathBuf};

use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;

use crate::{
    app,
    config::Config,
    content::{Catalog, ContentStore, Project, ProjectId},
    error::{FolioError, Result},
    logging, storage,
    view::{DetailBlock, card_view, detail_view},
};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Browse a project portfolio in the terminal", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file path")]
    config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Content catalog (JSON) to show instead of the built-in one"
    )]
    content: Option<PathBuf>,

    #[arg(long, help = "Delay before the detail view opens, in milliseconds")]
    open_delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Print the project directory")]
    List,

    #[command(about = "Print one project's write-up")]
    Show {
        #[arg(help = "Project id")]
        id: u32,
    },

    #[command(about = "Export the catalog as JSON")]
    Export {
        #[arg(long, short, help = "Output path")]
        out: Option<PathBuf>,
    },

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

#[derive(Debug, Serialize)]
struct CatalogExport {
    schema_version: u32,
    exported_at: DateTime<Utc>,
    #[serde(flatten)]
    catalog: Catalog,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(storage::get_config_path);
    let mut config = Config::load(&path)?;
    if let Some(content) = &cli.content {
        config.content_path = Some(content.clone());
    }
    if let Some(open_delay_ms) = cli.open_delay_ms {
        config.open_delay_ms = open_delay_ms;
    }
    Ok(config)
}

fn load_store(config: &Config) -> Result<ContentStore> {
    match &config.content_path {
        Some(path) => Ok(ContentStore::new(storage::load_catalog(path)?)),
        None => Ok(ContentStore::builtin()),
    }
}

pub fn format_directory(store: &ContentStore, tag_limit: usize) -> String {
    let mut out = String::new();
    for section in store.sections() {
        let _ = writeln!(
            out,
            "{} [{}]",
            section.category.display_name,
            section.category.id.as_str()
        );
        for project in section.projects {
            let card = card_view(project, tag_limit);
            let mut tags = card.tags.join(", ");
            if let Some(label) = card.overflow_label() {
                tags.push_str(&format!(" {}", label));
            }
            let _ = writeln!(out, "  {:>5}  {}", card.id.0, card.title);
            let _ = writeln!(out, "         {}", card.subtitle);
            if !tags.is_empty() {
                let _ = writeln!(out, "         {}", tags);
            }
        }
        out.push('\n');
    }
    out
}

pub fn format_project(project: &Project) -> String {
    let view = detail_view(project);
    let mut out = String::new();

    if !view.tags.is_empty() {
        let _ = writeln!(out, "[{}]", view.tags.join("] ["));
    }
    let _ = writeln!(out, "{}", view.title);
    if let Some(subtitle) = view.subtitle {
        let _ = writeln!(out, "{}", subtitle);
    }

    for block in &view.blocks {
        let _ = writeln!(out, "\n{}", block.heading());
        match block {
            DetailBlock::Text { body, .. } => {
                let _ = writeln!(out, "{}", body);
            }
            DetailBlock::List { items, .. } => {
                for item in *items {
                    let _ = writeln!(out, "  - {}", item);
                }
            }
            DetailBlock::Links(links) => {
                for link in *links {
                    let _ = writeln!(out, "  {} <{}>", link.label, link.href);
                }
            }
        }
    }
    out
}

fn export_catalog(store: &ContentStore, out_path: Option<PathBuf>) -> Result<()> {
    let export = CatalogExport {
        schema_version: 1,
        exported_at: Utc::now(),
        catalog: store.to_catalog(),
    };

    if let Some(path) = out_path {
        storage::write_json_atomic(&path, &export)?;
        println!("Exported to {}", path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(&export)?);
    }
    Ok(())
}

fn print_completions(shell: &str) -> Result<()> {
    use clap_complete::Shell;
    let shell = match shell {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        _ => return Err(FolioError::UnsupportedShell(shell.to_string())),
    };
    clap_complete::generate(shell, &mut Cli::command(), "folio", &mut io::stdout());
    Ok(())
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Completions { shell }) = &cli.command {
        return print_completions(shell);
    }

    logging::init_file_logging(&storage::get_log_path())?;
    let config = load_config(&cli)?;
    let store = load_store(&config)?;

    match cli.command {
        None => app::run_ui(store, config)?,
        Some(Command::List) => print!("{}", format_directory(&store, config.tag_display_limit)),
        Some(Command::Show { id }) => match store.project(ProjectId(id)) {
            Some(project) => print!("{}", format_project(project)),
            None => {
                eprintln!("No project with id {}", id);
                std::process::exit(1);
            }
        },
        Some(Command::Export { out }) => export_catalog(&store, out)?,
        Some(Command::Completions { .. }) => {}
    }
    Ok(())
}
