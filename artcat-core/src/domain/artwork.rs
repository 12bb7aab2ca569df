use serde::{Deserialize, Serialize};

// ===== Artwork Record =====

/// One catalog record: an artwork plus optional creator enrichment.
///
/// Records are produced by the fetch layer when a page response is decoded,
/// are immutable afterwards, and are discarded wholesale when a new page
/// replaces the current one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtworkRecord {
    pub title: String,

    pub creator: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub museum: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<EnrichmentRecord>,
}

impl ArtworkRecord {
    pub fn new(title: impl Into<String>, creator: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            creator: creator.into(),
            date: None,
            museum: None,
            movement: None,
            enrichment: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_museum(mut self, museum: impl Into<String>) -> Self {
        self.museum = Some(museum.into());
        self
    }

    pub fn with_movement(mut self, movement: impl Into<String>) -> Self {
        self.movement = Some(movement.into());
        self
    }

    pub fn with_enrichment(mut self, enrichment: EnrichmentRecord) -> Self {
        self.enrichment = Some(enrichment);
        self
    }

    pub fn has_enrichment(&self) -> bool {
        self.enrichment.is_some()
    }
}

// ===== Enrichment Record =====

/// Supplementary biographical metadata about an artwork's creator.
///
/// Zero-or-one per record; every field is optional, and `birth_date` is a
/// partial date string ("YYYY", "YYYY-MM" or "YYYY-MM-DD", possibly with
/// sentinel zero segments meaning "unknown").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichmentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement: Option<String>,
}

impl EnrichmentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    pub fn with_birth_place(mut self, birth_place: impl Into<String>) -> Self {
        self.birth_place = Some(birth_place.into());
        self
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn with_movement(mut self, movement: impl Into<String>) -> Self {
        self.movement = Some(movement.into());
        self
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.birth_date.is_none()
            && self.birth_place.is_none()
            && self.nationality.is_none()
            && self.movement.is_none()
    }
}
