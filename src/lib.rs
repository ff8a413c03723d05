//! Scryfall Image - MTG card lookup
//!
//! Fetches a card from Scryfall by name and picks the best available image
//! URL from its `image_uris` (large, then normal, then small).

pub mod error;
pub mod image;
pub mod scryfall;

pub use error::{CardError, Result};
pub use image::{get_card_face_images_by_name, get_card_image_by_name, ImageUris};
pub use scryfall::{
    autocomplete, get_card_by_fuzzy_name, get_card_by_name, CardRecord, ScryfallClient,
    ScryfallError, SCRYFALL_API_URL,
};
