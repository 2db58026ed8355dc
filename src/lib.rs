//! Client-side core for a news-content admin panel.
//!
//! Every list view in the panel is the same shape: fetch a page of items
//! for a changing set of filters, keep pagination and loading state
//! consistent, and re-fetch safely when inputs change. This crate
//! formalizes that shape:
//!
//! - [`query`] builds canonical, comparable request descriptors, dropping
//!   sentinel ("All"/empty) filter values from the outgoing request;
//! - [`api`] performs the HTTP call, decodes the response envelope, and
//!   classifies failures;
//! - [`store`] owns the displayed state and guarantees that when requests
//!   overlap, the most recently issued one wins regardless of completion
//!   order.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod query;
pub mod store;
