//! Image URL resolution for Scryfall cards

use crate::error::{CardError, Result};
use crate::scryfall::ScryfallClient;
use serde::Deserialize;

/// Image links of a card (or card face) at the three sizes the fallback
/// chain looks at. Other keys (`png`, `art_crop`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
}

impl ImageUris {
    /// Best available URL: large, then normal, then small.
    ///
    /// Empty strings count as absent.
    pub fn best_url(&self) -> Option<&str> {
        [&self.large, &self.normal, &self.small]
            .into_iter()
            .filter_map(|uri| uri.as_deref())
            .find(|uri| !uri.is_empty())
    }
}

impl ScryfallClient {
    /// Fetch a card by exact name and return its best image URL.
    ///
    /// `Ok(None)` means the card has `image_uris` but none of the three
    /// sizes is populated. A card without `image_uris` at all (double-faced
    /// cards, error payloads) is an error; see
    /// [`ScryfallClient::get_card_face_images_by_name`] for the former.
    /// An `image_uris` that is not an object, or a size that is not a
    /// string, is a [`CardError::Parse`].
    pub async fn get_card_image_by_name(&self, name: &str) -> Result<Option<String>> {
        let card = self.get_card_by_name(name).await?;

        let uris = card
            .image_uris()?
            .ok_or_else(|| CardError::MissingImageUris {
                name: name.to_string(),
            })?;

        let url = uris.best_url().map(str::to_string);
        if url.is_none() {
            log::debug!("No image available for {:?}", name);
        }
        Ok(url)
    }

    /// Fetch a card by exact name and return the best image URL of each face
    pub async fn get_card_face_images_by_name(&self, name: &str) -> Result<Vec<Option<String>>> {
        let card = self.get_card_by_name(name).await?;

        let faces = card.face_image_uris()?.ok_or_else(|| CardError::NoFaces {
            name: name.to_string(),
        })?;

        Ok(faces
            .iter()
            .map(|uris| uris.as_ref().and_then(ImageUris::best_url).map(str::to_string))
            .collect())
    }
}

/// Best image URL for a card, using the public API
pub async fn get_card_image_by_name(name: &str) -> Result<Option<String>> {
    ScryfallClient::new().get_card_image_by_name(name).await
}

/// Best image URL of each face of a card, using the public API
pub async fn get_card_face_images_by_name(name: &str) -> Result<Vec<Option<String>>> {
    ScryfallClient::new().get_card_face_images_by_name(name).await
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
