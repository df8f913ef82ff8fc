//! Client-side filtering and pagination of fetched collections.
//!
//! Listings fetch a whole collection once and derive the visible page locally:
//! [`apply_filters`] narrows the snapshot without reordering it, [`paginate`]
//! slices one page out of the result, and [`ListingState`] holds the user's
//! selection for a view. None of these functions fail; malformed criteria just
//! match nothing.

pub mod filter;
pub mod page;
pub mod state;

pub use filter::{apply_filters, FilterCriteria, FilterField, Filterable, MatchRule};
pub use page::{page_count, paginate};
pub use state::{ListingState, PageView};
