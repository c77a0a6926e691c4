//! Dragonbane character generator - command line entry point.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dragonbane_domain::{
    project_sheet, Age, Character, CharacterId, GenerationFilters, Kin, Profession, RandomSource,
};
use dragonbane_engine::infrastructure::clock::{SeededRandom, SystemRandom};
use dragonbane_engine::infrastructure::ports::CharacterQuery;
use dragonbane_engine::use_cases::generate::GenerateRequest;
use dragonbane_engine::{App, AppConfig};

#[derive(Parser, Debug)]
#[command(name = "dragonbane")]
#[command(about = "Generate, enrich and keep Dragonbane player characters")]
struct Cli {
    /// Server for /v1/chat/completions calls (overrides OPENAI_SERVER)
    #[arg(long, global = true)]
    server: Option<String>,

    /// API key for the narrative server (overrides OPENAI_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Model for narrative enrichment (overrides OPENAI_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// SQLite character library (overrides DRAGONBANE_DATABASE)
    #[arg(long, global = true)]
    database: Option<String>,

    /// Wordlist directory (overrides DRAGONBANE_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll new characters
    Generate {
        /// How many characters to roll
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        #[arg(long, value_parser = parse_catalog::<Kin>)]
        kin: Option<Kin>,

        #[arg(long, value_parser = parse_catalog::<Profession>)]
        profession: Option<Profession>,

        #[arg(long, value_parser = parse_catalog::<Age>)]
        age: Option<Age>,

        /// Replay a run (random if not specified)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Ask the narrative server for a name, appearance and background
        #[arg(long)]
        narrate: bool,

        /// Store the characters in the library
        #[arg(long)]
        save: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Player name printed on sheets (with --format sheet)
        #[arg(long)]
        player_name: Option<String>,
    },

    /// Draw a stored character at random
    Random {
        /// Any of these kin (repeatable)
        #[arg(long, value_parser = parse_catalog::<Kin>)]
        kin: Vec<Kin>,

        /// Any of these professions (repeatable)
        #[arg(long, value_parser = parse_catalog::<Profession>)]
        profession: Vec<Profession>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List stored characters, newest first
    List {
        #[arg(short, long)]
        limit: Option<u32>,

        #[arg(long, value_parser = parse_catalog::<Kin>)]
        kin: Vec<Kin>,

        #[arg(long, value_parser = parse_catalog::<Profession>)]
        profession: Vec<Profession>,
    },

    /// Print the character sheet for a stored character as JSON
    Sheet {
        id: String,

        #[arg(long)]
        player_name: Option<String>,
    },

    /// Remove a stored character
    Delete { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Sheet,
}

fn parse_catalog<T>(raw: &str) -> Result<T, String>
where
    T: FromStr<Err = dragonbane_domain::DomainError>,
{
    raw.parse::<T>().map_err(|e| e.to_string())
}

fn parse_id(raw: &str) -> anyhow::Result<CharacterId> {
    raw.parse::<CharacterId>()
        .with_context(|| format!("'{raw}' is not a character id"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root so the binary works from any crate directory.
    load_dotenv_from_repo_root();

    // Logs go to stderr; stdout carries the characters
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dragonbane_engine=info,dragonbane_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = apply_overrides(AppConfig::from_env(), &cli);

    let app = App::from_config(&config)
        .await
        .with_context(|| format!("opening character library at {}", config.database_path))?;

    match cli.command {
        Command::Generate {
            count,
            kin,
            profession,
            age,
            seed,
            narrate,
            save,
            format,
            player_name,
        } => {
            let rng: Box<dyn RandomSource> = match seed {
                Some(seed) => Box::new(SeededRandom::new(seed)),
                None => Box::new(SystemRandom::new()),
            };
            let request = GenerateRequest {
                count,
                filters: GenerationFilters {
                    kin,
                    profession,
                    age,
                },
                narrate,
                save,
            };

            let generated = app
                .use_cases
                .generate
                .execute(rng.as_ref(), request)
                .await
                .context("generating characters")?;

            for result in &generated {
                if let Some(error) = &result.narration_error {
                    eprintln!("[narration skipped] {}: {}", result.character.id, error);
                }
            }
            let characters: Vec<Character> =
                generated.into_iter().map(|g| g.character).collect();
            print_characters(&characters, format, player_name.as_deref())?;
        }

        Command::Random {
            kin,
            profession,
            format,
        } => {
            let query = CharacterQuery::new()
                .with_kin(kin)
                .with_professions(profession);
            match app.use_cases.library.random(&query).await? {
                Some(character) => print_characters(&[character], format, None)?,
                None => eprintln!("No stored character matches."),
            }
        }

        Command::List {
            limit,
            kin,
            profession,
        } => {
            let query = CharacterQuery::new()
                .with_kin(kin)
                .with_professions(profession);
            let characters = app.use_cases.library.list(&query, limit).await?;
            for character in &characters {
                println!(
                    "{}  {:<24} {:<14} {:<18} {}",
                    character.id,
                    character.name,
                    character.kin.display_name(),
                    character.profession.display_name(),
                    character.age
                );
            }
        }

        Command::Sheet { id, player_name } => {
            let id = parse_id(&id)?;
            let sheet = app
                .use_cases
                .character_sheet
                .adopt(id, player_name.as_deref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&sheet)?);
        }

        Command::Delete { id } => {
            let id = parse_id(&id)?;
            app.use_cases.library.delete(id).await?;
            println!("Deleted {id}");
        }
    }

    Ok(())
}

fn print_characters(
    characters: &[Character],
    format: OutputFormat,
    player_name: Option<&str>,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for character in characters {
                println!("{}\n", character.description());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(characters)?);
        }
        OutputFormat::Sheet => {
            let sheets: Vec<_> = characters
                .iter()
                .map(|character| project_sheet(character, player_name))
                .collect();
            println!("{}", serde_json::to_string_pretty(&sheets)?);
        }
    }
    Ok(())
}

fn apply_overrides(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(server) = &cli.server {
        config.openai_server = server.clone();
    }
    if let Some(api_key) = &cli.api_key {
        config.openai_api_key = api_key.trim().to_string();
    }
    if let Some(model) = &cli.model {
        config.openai_model = model.clone();
    }
    if let Some(database) = &cli.database {
        config.database_path = database.clone();
    }
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    if config.data_dir.is_relative() && !config.data_dir.exists() {
        let shipped = repo_root().join(&config.data_dir);
        if shipped.is_dir() {
            config.data_dir = shipped;
        }
    }
    config
}

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn load_dotenv_from_repo_root() {
    let repo_root = repo_root();

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
