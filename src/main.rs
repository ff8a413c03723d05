//! Scryfall Image - command line lookup
//!
//! Prints a card's best image URL, its raw JSON, per-face images or name
//! suggestions.

use clap::{Parser, Subcommand};
use scryfall_image::{ScryfallClient, SCRYFALL_API_URL};

/// Look up MTG cards on Scryfall by name
#[derive(Parser, Debug)]
#[command(name = "scryfall_image")]
#[command(version, about, long_about = None)]
struct Args {
    /// Scryfall API base URL
    #[arg(long, global = true, default_value = SCRYFALL_API_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the best image URL (large, normal, small) of a card
    Image {
        /// Exact card name
        name: String,
    },
    /// Print the raw card JSON
    Card {
        /// Card name
        name: String,

        /// Use fuzzy name matching instead of exact
        #[arg(long, default_value_t = false)]
        fuzzy: bool,
    },
    /// Print the best image URL of each face of a double-faced card
    Faces {
        /// Exact card name
        name: String,
    },
    /// Print card name suggestions for a partial name
    Autocomplete {
        /// Partial card name
        query: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let client = ScryfallClient::new().with_base_url(args.base_url);

    match run(&client, args.command).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Run one subcommand. `Ok(false)` means the lookup found nothing to print.
async fn run(client: &ScryfallClient, command: Command) -> scryfall_image::Result<bool> {
    match command {
        Command::Image { name } => match client.get_card_image_by_name(&name).await? {
            Some(url) => println!("{}", url),
            None => {
                log::error!("No image available for card: {}", name);
                return Ok(false);
            }
        },
        Command::Card { name, fuzzy } => {
            let card = if fuzzy {
                client.get_card_by_fuzzy_name(&name).await?
            } else {
                client.get_card_by_name(&name).await?
            };
            if let Some(error) = card.api_error() {
                log::error!("{}: {}", error.code, error.details);
                return Ok(false);
            }
            println!("{}", serde_json::to_string_pretty(card.as_value())?);
        }
        Command::Faces { name } => {
            let faces = client.get_card_face_images_by_name(&name).await?;
            for (index, url) in faces.iter().enumerate() {
                match url {
                    Some(url) => println!("{}: {}", index + 1, url),
                    None => println!("{}: (no image)", index + 1),
                }
            }
        }
        Command::Autocomplete { query } => {
            for suggestion in client.autocomplete(&query).await? {
                println!("{}", suggestion);
            }
        }
    }
    Ok(true)
}
