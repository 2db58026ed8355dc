//! Collection request descriptors.
//!
//! Translates page + filter state into a canonical, comparable query. Two
//! descriptors are considered equal when their serialized query strings are
//! equal, so callers can detect no-op changes before hitting the network.

mod filter;
mod request;

pub use filter::FilterSet;
pub use request::{CollectionQuery, PageRequest, DEFAULT_PAGE_SIZE};
