//! Pure projection from fetched records to a display tree.
//!
//! `render` is the only place display content is derived; the surface in
//! `output` consumes the resulting `PageView` in a single update. The same
//! navigation bar value is printed above and below the record list, so the
//! disabled-state rules exist exactly once.

use artcat_core::{is_valid_birth_date, ArtworkRecord, PaginationState};

/// Shown in place of an absent field value.
pub const PLACEHOLDER: &str = "N/A";

/// The display tree for one loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub header: Header,
    pub nav: NavBar,
    pub records: Vec<RecordBlock>,
}

/// Header block: position within the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

impl Header {
    pub fn title(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    pub fn summary(&self) -> String {
        format!("{} artworks total", self.total_items)
    }
}

/// Previous/next controls with their disabled-state already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBar {
    pub previous: NavControl,
    pub next: NavControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub target: u32,
    pub enabled: bool,
}

/// One record's projection: a title plus its resolved field rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBlock {
    pub title: String,
    pub lines: Vec<FieldLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine {
    pub label: &'static str,
    pub value: String,
}

/// Project a fetched page and the pagination state into a display tree.
pub fn render(items: &[ArtworkRecord], state: &PaginationState) -> PageView {
    PageView {
        header: Header {
            page: state.current_page(),
            total_pages: state.total_pages(),
            total_items: state.total_items(),
        },
        nav: NavBar {
            previous: NavControl {
                target: state.current_page().saturating_sub(1),
                enabled: state.has_previous(),
            },
            next: NavControl {
                target: state.current_page() + 1,
                enabled: state.has_next(),
            },
        },
        records: items.iter().map(record_block).collect(),
    }
}

/// Project a single record into its block.
///
/// Field rules: date, museum and movement fall back to a placeholder. When
/// enrichment is present, the birth line appears only for a plausible birth
/// date (omitted otherwise, never placeholdered), nationality always
/// appears, and the creator-movement row appears only when present.
pub fn record_block(record: &ArtworkRecord) -> RecordBlock {
    let mut lines = vec![
        FieldLine {
            label: "Creator",
            value: record.creator.clone(),
        },
        field_or_placeholder("Date", record.date.as_deref()),
        field_or_placeholder("Museum", record.museum.as_deref()),
        field_or_placeholder("Movement", record.movement.as_deref()),
    ];

    if let Some(enrichment) = &record.enrichment {
        if is_valid_birth_date(enrichment.birth_date.as_deref()) {
            let date = enrichment.birth_date.as_deref().unwrap_or_default();
            let place = enrichment.birth_place.as_deref().unwrap_or(PLACEHOLDER);
            lines.push(FieldLine {
                label: "Born",
                value: format!("{date} in {place}"),
            });
        }
        lines.push(field_or_placeholder(
            "Nationality",
            enrichment.nationality.as_deref(),
        ));
        if let Some(movement) = &enrichment.movement {
            lines.push(FieldLine {
                label: "Creator movement",
                value: movement.clone(),
            });
        }
    }

    RecordBlock {
        title: record.title.clone(),
        lines,
    }
}

fn field_or_placeholder(label: &'static str, value: Option<&str>) -> FieldLine {
    FieldLine {
        label,
        value: value.unwrap_or(PLACEHOLDER).to_string(),
    }
}
