use crate::models::Property;
use std::cmp::Ordering;
use tracing::debug;

/// Columns the listing table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Price,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column and direction.
///
/// Each key cycles descending, ascending, unsorted. Switching to another key
/// starts that key at descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    key: Option<SortKey>,
    direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<SortKey> {
        self.key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Advance the tri-state cycle for `key`
    pub fn toggle(&mut self, key: SortKey) {
        match (self.key, self.direction) {
            (Some(active), SortDirection::Descending) if active == key => {
                self.direction = SortDirection::Ascending;
            }
            (Some(active), SortDirection::Ascending) if active == key => {
                self.key = None;
                self.direction = SortDirection::Descending;
            }
            _ => {
                self.key = Some(key);
                self.direction = SortDirection::Descending;
            }
        }
        debug!(key = ?self.key, direction = ?self.direction, "sort toggled");
    }
}

/// Compare two listings on `key`, ascending.
///
/// Listings whose date cannot be parsed sort as older than any valid date.
pub fn compare(a: &Property, b: &Property, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Date => {
            let (da, db) = (a.published_on(), b.published_on());
            if da.is_none() {
                debug!(id = %a.id, date = %a.date, "unparseable listing date");
            }
            if db.is_none() {
                debug!(id = %b.id, date = %b.date, "unparseable listing date");
            }
            // None < Some, so malformed dates come first ascending
            da.cmp(&db)
        }
    }
}

/// Order `items` in place. Unsorted state leaves input order untouched.
pub fn sort_properties(items: &mut [&Property], sort: &SortState) {
    let Some(key) = sort.key() else {
        return;
    };
    let direction = sort.direction();
    items.sort_by(|a, b| direction.apply(compare(a, b, key)));
}
