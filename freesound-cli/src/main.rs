use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use freesound_api::{FreesoundClient, Params};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "freesound", version, about = "Freesound.org API client")]
struct Cli {
    /// API key (falls back to the FREESOUND_API_KEY environment variable)
    #[arg(long, global = true, value_name = "KEY")]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Text search over sounds
    Search {
        /// Search query
        query: Option<String>,
        /// Filter expression, e.g. "tag:rain type:wav"
        #[arg(short, long)]
        filter: Option<String>,
        /// Sort order, e.g. "downloads_desc"
        #[arg(short, long)]
        sort: Option<String>,
        /// Result page (1-based)
        #[arg(short, long)]
        page: Option<u32>,
        /// Extra query parameters
        #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// Content-based (audio-feature) search
    ContentSearch {
        /// Query parameters, e.g. -P target=lowlevel.pitch.mean:220
        #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// Show a sound by id
    Sound {
        /// Sound ID
        sound_id: u64,
    },
    /// Search sounds by geotag bounding box
    Geotag {
        #[arg(long)]
        min_lat: Option<f64>,
        #[arg(long)]
        max_lat: Option<f64>,
        #[arg(long)]
        min_lon: Option<f64>,
        #[arg(long)]
        max_lon: Option<f64>,
        /// Extra query parameters
        #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// Show analysis data for a sound
    Analysis {
        /// Sound ID
        sound_id: u64,
        /// Analysis tree filter, one path segment each (in order)
        #[arg(short, long)]
        filter: Vec<String>,
        /// Extra query parameters
        #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// List sounds similar to the given one
    Similar {
        /// Sound ID
        sound_id: u64,
        /// Extra query parameters
        #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// Show a user profile
    User {
        /// Freesound username
        username: String,
    },
    /// List a user's sounds
    UserSounds {
        /// Freesound username
        username: String,
        /// Extra query parameters
        #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// List a user's packs
    UserPacks {
        /// Freesound username
        username: String,
    },
    /// List a user's bookmark categories
    Bookmarks {
        /// Freesound username
        username: String,
    },
    /// List the sounds in a bookmark category
    BookmarkSounds {
        /// Freesound username
        username: String,
        /// Bookmark category ID
        category_id: u64,
        /// Extra query parameters
        #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// Show a pack by id
    Pack {
        /// Pack ID
        pack_id: u64,
    },
    /// List the sounds in a pack
    PackSounds {
        /// Pack ID
        pack_id: u64,
        /// Extra query parameters
        #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let api_key = cli
        .api_key
        .or_else(|| std::env::var("FREESOUND_API_KEY").ok())
        .context("no API key: pass --api-key or set FREESOUND_API_KEY")?;
    let client = FreesoundClient::new(api_key)?;

    let payload = run(&client, cli.command)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn run(client: &FreesoundClient, command: Command) -> Result<Value> {
    let payload = match command {
        Command::Search {
            query,
            filter,
            sort,
            page,
            params,
        } => {
            let bag = Params::new()
                .with("q", query)
                .with("f", filter)
                .with("s", sort)
                .with("p", page.map(i64::from));
            client.sound_search(with_pairs(bag, &params)?)?
        }
        Command::ContentSearch { params } => {
            client.sound_content_search(with_pairs(Params::new(), &params)?)?
        }
        Command::Sound { sound_id } => client.sound(sound_id)?,
        Command::Geotag {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
            params,
        } => {
            let bag = Params::new()
                .with("min_lat", min_lat)
                .with("max_lat", max_lat)
                .with("min_lon", min_lon)
                .with("max_lon", max_lon);
            client.sound_geotag(with_pairs(bag, &params)?)?
        }
        Command::Analysis {
            sound_id,
            filter,
            params,
        } => {
            let filters: Vec<&str> = filter.iter().map(String::as_str).collect();
            client.sound_analysis(sound_id, &filters, with_pairs(Params::new(), &params)?)?
        }
        Command::Similar { sound_id, params } => {
            client.sound_similar(sound_id, with_pairs(Params::new(), &params)?)?
        }
        Command::User { username } => client.user(&username)?,
        Command::UserSounds { username, params } => {
            client.user_sounds(&username, with_pairs(Params::new(), &params)?)?
        }
        Command::UserPacks { username } => client.user_packs(&username)?,
        Command::Bookmarks { username } => client.user_bookmark_categories(&username)?,
        Command::BookmarkSounds {
            username,
            category_id,
            params,
        } => client.user_bookmark_category_sounds(
            &username,
            category_id,
            with_pairs(Params::new(), &params)?,
        )?,
        Command::Pack { pack_id } => client.pack(pack_id)?,
        Command::PackSounds { pack_id, params } => {
            client.pack_sounds(pack_id, with_pairs(Params::new(), &params)?)?
        }
    };
    Ok(payload)
}

/// Fold repeatable `-P KEY=VALUE` arguments into a parameter bag.
fn with_pairs(mut bag: Params, pairs: &[String]) -> Result<Params> {
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("expected KEY=VALUE, got {pair:?}"))?;
        bag.set(key, value);
    }
    Ok(bag)
}
