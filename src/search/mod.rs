pub mod debounce;
pub mod filter;

pub use debounce::{DebounceTicket, DebounceTimer, SearchInput, SearchState, DEFAULT_DEBOUNCE};
pub use filter::{filter_indices, filter_properties, normalize_query};
