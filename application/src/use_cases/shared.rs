//! Shared helpers for use case implementations.

use tally_domain::{Catalog, DisplayEntry, NotFoundError, SurveyFilter};

/// Numbered surveys matching `filter`, or why there are none.
///
/// An empty catalog and an empty filtered listing are reported separately
/// so callers can tell the user which one happened.
pub(crate) fn list_candidates(
    catalog: &Catalog,
    filter: SurveyFilter,
) -> Result<Vec<DisplayEntry<'_>>, NotFoundError> {
    if catalog.is_empty() {
        return Err(NotFoundError::NoSurveys);
    }
    let entries = catalog.list_filtered(filter);
    if entries.is_empty() {
        return Err(NotFoundError::NoMatches(filter));
    }
    Ok(entries)
}
