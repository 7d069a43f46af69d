use crate::config::ScreenConfig;
use crate::detail::{DetailModal, PropertyDetail};
use crate::models::{Property, SearchField};
use crate::search::{filter_indices, DebounceTicket, DebounceTimer, SearchInput, SearchState};
use crate::view::{sort_and_paginate, PageView, Pager, SortKey, SortState};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// State of the property list screen.
///
/// Records are immutable once handed over; the screen only derives views
/// from them (filtered positions, sort order, current page).
#[derive(Debug)]
pub struct ListingScreen {
    records: Vec<Property>,
    fields: Vec<SearchField>,
    filtered: Vec<usize>,
    search: SearchState,
    timer: DebounceTimer,
    fired: mpsc::UnboundedReceiver<DebounceTicket>,
    sort: SortState,
    pager: Pager,
    modal: DetailModal,
}

impl ListingScreen {
    pub fn new(records: Vec<Property>, config: &ScreenConfig) -> Self {
        let (timer, fired) = DebounceTimer::new(config.debounce());
        let filtered = (0..records.len()).collect();

        Self {
            records,
            fields: config.search_fields.clone(),
            filtered,
            search: SearchState::new(),
            timer,
            fired,
            sort: SortState::new(),
            pager: Pager::new(config.page_size),
            modal: DetailModal::default(),
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(self.search.applied(), &self.records, &self.fields);
        self.pager.clamp(self.filtered.len());
        info!(
            query = self.search.applied(),
            results = self.filtered.len(),
            "🔎 search applied"
        );
    }

    /// Query text changed. Blank input is applied immediately, anything else
    /// after the debounce delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn handle_search_change(&mut self, value: &str) {
        match self.search.on_input(value) {
            SearchInput::Scheduled(ticket) => self.timer.schedule(ticket),
            SearchInput::Cleared => {
                self.timer.cancel();
                self.refilter();
            }
        }
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.timer.cancel();
        self.refilter();
    }

    /// Wait for the next debounce delivery and apply it.
    ///
    /// Returns `false` for a superseded ticket. Waits indefinitely when no
    /// search is pending, so check `is_searching()` first.
    pub async fn tick(&mut self) -> bool {
        let Some(ticket) = self.fired.recv().await else {
            return false;
        };
        if !self.search.fire(ticket) {
            return false;
        }
        self.refilter();
        true
    }

    /// Sort header clicked; goes back to the first page
    pub fn handle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        self.pager.reset();
    }

    /// Move to `page`. Out-of-range pages leave the current page unchanged.
    pub fn handle_page_change(&mut self, page: usize) -> bool {
        self.pager.go_to(page, self.filtered.len())
    }

    /// Replace the dataset, keeping the current query, sort and (clamped) page
    pub fn set_records(&mut self, records: Vec<Property>) {
        debug!(count = records.len(), "replacing listings");
        self.records = records;
        self.refilter();

        let gone = self
            .modal
            .selected()
            .is_some_and(|id| !self.records.iter().any(|p| p.id == id));
        if gone {
            self.modal.close();
        }
    }

    /// Current page of the filtered, sorted listings
    pub fn view(&self) -> PageView<'_> {
        let rows = self.filtered.iter().map(|&i| &self.records[i]).collect();
        sort_and_paginate(rows, &self.sort, &self.pager)
    }

    /// Row clicked; opens the detail modal for that listing
    pub fn select(&mut self, id: &str) -> Option<&Property> {
        let property = self.records.iter().find(|p| p.id == id)?;
        self.modal.open(id);
        Some(property)
    }

    pub fn close_detail(&mut self) {
        self.modal.close();
    }

    /// Listing shown in the detail modal, if open
    pub fn selected(&self) -> Option<&Property> {
        let id = self.modal.selected()?;
        self.records.iter().find(|p| p.id == id)
    }

    pub fn detail(&self) -> Option<PropertyDetail> {
        self.selected().map(PropertyDetail::from_property)
    }

    pub fn search_term(&self) -> &str {
        self.search.raw()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_searching()
    }

    pub fn total_results(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_results(&self) -> bool {
        !self.filtered.is_empty()
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.pager.page()
    }

    pub fn is_detail_open(&self) -> bool {
        self.modal.is_open()
    }
}
