//! Navigation link validation.

use crate::error::{PaginationLinkError, PaginationResult};
use crate::pagination::{LinksMap, PageWindow};
use log::debug;

/// Check that `relation` exists in `links` and that its URL ends with the
/// query suffix of `window`.
///
/// The match is a byte-exact suffix comparison: `limit` and `offset` must be
/// the last two query parameters, in that order, with no URL encoding of
/// `=` or `&`. Any other parameter order is a contract violation.
///
/// # Errors
///
/// * [`PaginationLinkError::MissingRelation`] if the relation is absent
/// * [`PaginationLinkError::LinkMismatch`] if the URL ends differently
///
/// # Examples
///
/// ```rust
/// use policies_api_core::pagination::{LinksMap, PageWindow, validate};
///
/// let mut links = LinksMap::new();
/// links.insert("next".to_string(), "https://api/x?limit=10&offset=20".to_string());
///
/// assert!(validate(&links, "next", PageWindow::new(10, 20)).is_ok());
/// assert!(validate(&links, "next", PageWindow::new(10, 30)).is_err());
/// ```
pub fn validate(links: &LinksMap, relation: &str, window: PageWindow) -> PaginationResult<()> {
    let url = links
        .get(relation)
        .ok_or_else(|| PaginationLinkError::missing_relation(relation))?;

    let expected_suffix = window.query_suffix();
    if url.ends_with(&expected_suffix) {
        Ok(())
    } else {
        debug!("Link {} = {} does not end in {}", relation, url, expected_suffix);
        Err(PaginationLinkError::link_mismatch(relation, url, expected_suffix))
    }
}

/// Validate several relations, stopping at the first failure.
pub fn validate_all(links: &LinksMap, expectations: &[(&str, PageWindow)]) -> PaginationResult<()> {
    expectations
        .iter()
        .try_for_each(|(relation, window)| validate(links, relation, *window))
}
