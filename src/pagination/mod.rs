//! Paginated listing contract.
//!
//! Listing endpoints accept a `limit`/`offset` pair and answer with the
//! requested slice plus a `links` object holding `first`, `prev`, `next` and
//! `last` URLs. Every such URL ends in `limit=<N>&offset=<M>`.
//!
//! [`PaginationLinks`] produces these links, [`validate`] checks them.

pub mod links;
pub mod validator;

pub use links::{
    LinksMap, PageWindow, PaginationLinks, REL_FIRST, REL_LAST, REL_NEXT, REL_PREV, extract_links,
};
pub use validator::{validate, validate_all};
