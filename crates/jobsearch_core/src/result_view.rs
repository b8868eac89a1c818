use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::JobRecord;

/// Records shown per page.
pub const PAGE_SIZE: usize = 10;

/// Sort applied whenever a search completes.
pub const DEFAULT_SORT: Sort = Sort {
    key: SortKey::PublicationDate,
    direction: SortDirection::Descending,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PublicationDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// The records of the latest completed search and how they are viewed.
///
/// `items` keeps fetch order; sorting is derived on every read so the
/// underlying sequence is never reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    items: Vec<JobRecord>,
    total_count: u64,
    sort: Option<Sort>,
    current_page: u32,
}

impl Default for ResultSet {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            sort: None,
            current_page: 1,
        }
    }
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces everything with a fresh fetch: page 1, default sort.
    pub fn replace(&mut self, items: Vec<JobRecord>, total_count: u64) {
        self.items = items;
        self.total_count = total_count;
        self.current_page = 1;
        self.sort = Some(DEFAULT_SORT);
    }

    /// Drops all records, as after a failed search.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_count = 0;
        self.current_page = 1;
    }

    /// Toggles the direction when `key` is already active, otherwise switches
    /// to `key` ascending. The current page is kept.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = Some(match self.sort {
            Some(sort) if sort.key == key => Sort {
                key,
                direction: sort.direction.toggled(),
            },
            _ => Sort {
                key,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Stores `page` as is; bounds are enforced by whoever offers navigation.
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page;
    }

    pub fn items(&self) -> &[JobRecord] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total_count.div_ceil(PAGE_SIZE as u64);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn find(&self, id: &str) -> Option<&JobRecord> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All records in the current sort order.
    pub fn sorted(&self) -> Vec<&JobRecord> {
        let mut sorted: Vec<&JobRecord> = self.items.iter().collect();
        // `sort_by_key` is stable, so ties keep fetch order in both directions.
        match self.sort {
            Some(Sort {
                key: SortKey::PublicationDate,
                direction: SortDirection::Ascending,
            }) => sorted.sort_by_key(|item| publication_timestamp(item)),
            Some(Sort {
                key: SortKey::PublicationDate,
                direction: SortDirection::Descending,
            }) => sorted.sort_by_key(|item| Reverse(publication_timestamp(item))),
            None => {}
        }
        sorted
    }

    /// The records on the current page, in sort order.
    pub fn visible_page(&self) -> Vec<&JobRecord> {
        let page = self.current_page.max(1) as usize;
        let start = (page - 1).saturating_mul(PAGE_SIZE);
        self.sorted()
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect()
    }
}

/// Milliseconds since the epoch of the record's publication date.
///
/// Missing or unparseable dates count as the epoch. Offset-less values are
/// read as UTC.
pub fn publication_timestamp(record: &JobRecord) -> i64 {
    record
        .publication_date
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(0)
}

fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.timestamp_millis());
    }
    // Read as UTC, unlike a browser, which would use local time here.
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
