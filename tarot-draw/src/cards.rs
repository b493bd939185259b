//! Static card catalog.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("../data/cards.json");

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub summary: String,
    pub meaning: String,
    #[serde(default)]
    pub advice: SmallVec<[String; 4]>,
}

impl Card {
    /// Asset path of this card's face image.
    #[must_use]
    pub fn front_image(&self) -> String {
        crate::assets::front_image_path(self.id)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("card catalog JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("card catalog is empty")]
    Empty,
    #[error("card id {0} appears more than once")]
    DuplicateId(u32),
}

/// Ordered collection of every drawable card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardCatalog {
    cards: Vec<Card>,
}

impl CardCatalog {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from already parsed cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or contains duplicate ids.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(CatalogError::DuplicateId(card.id));
            }
        }
        Ok(Self { cards })
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, empty, or repeats an id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// The embedded 22-card Major Arcana.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(EMBEDDED_CATALOG).unwrap_or_else(|err| {
            log::error!("embedded card catalog failed to load: {err}");
            Self::empty()
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
