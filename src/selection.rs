//! Cross-page row selection
//!
//! Selection is keyed by artwork id, never by row position or page, so a row
//! picked on page 1 is still checked after paging away and back. Rows from
//! other pages are remembered but only rendered when their page is loaded.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{ArtworkId, ArtworkRecord};

/// Validation failure for the "select first N rows" input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Enter a valid number greater than zero (got \"{0}\").")]
    NotANumber(String),

    #[error("Enter a valid number greater than zero (got {0}).")]
    NotPositive(i64),
}

/// Parse the popover input into a positive row count
///
/// Surrounding whitespace is ignored. Only whole numbers are accepted, so
/// fractional input such as "2.5" is rejected rather than truncated. Digit
/// strings too large for `usize` saturate, which selects the whole page.
pub fn parse_row_count(input: &str) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SelectionError::NotANumber(trimmed.to_string()));
    }

    if negative {
        let value = digits.parse::<i64>().map(|v| -v).unwrap_or(i64::MIN);
        return Err(SelectionError::NotPositive(value));
    }

    match digits.parse::<usize>() {
        Ok(0) => Err(SelectionError::NotPositive(0)),
        Ok(n) => Ok(n),
        Err(_) => Ok(usize::MAX),
    }
}

/// Set of selected artwork ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<ArtworkId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`, returning whether it is now selected
    pub fn toggle(&mut self, id: ArtworkId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Replace the selection with the first `input` rows of `records`
    ///
    /// Only the given (currently loaded) page is considered. On invalid input
    /// the selection is left untouched. Returns how many rows were selected.
    pub fn select_first_n(
        &mut self,
        input: &str,
        records: &[ArtworkRecord],
    ) -> Result<usize, SelectionError> {
        let requested = parse_row_count(input)?;
        let count = requested.min(records.len());
        self.ids = records[..count].iter().map(|r| r.id).collect();
        Ok(count)
    }

    /// Replace the selection with exactly the checked visible rows
    ///
    /// The grid only reports rows it renders, so ids selected on other pages
    /// are dropped here.
    pub fn replace_from_visible_selection<'a, I>(&mut self, checked: I)
    where
        I: IntoIterator<Item = &'a ArtworkRecord>,
    {
        self.ids = checked.into_iter().map(|r| r.id).collect();
    }

    /// Selected rows of the given page, in page order
    pub fn visible<'a>(&self, records: &'a [ArtworkRecord]) -> Vec<&'a ArtworkRecord> {
        records.iter().filter(|r| self.is_selected(r.id)).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> Vec<ArtworkId> {
        let mut ids: Vec<ArtworkId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: std::ops::RangeInclusive<u64>) -> Vec<ArtworkRecord> {
        ids.map(|id| ArtworkRecord::new(id, format!("Artwork {id}")))
            .collect()
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut selection = SelectionSet::new();
        selection.toggle(3);
        let before = selection.clone();

        assert!(selection.toggle(8));
        assert!(!selection.toggle(8));
        assert_eq!(selection, before);

        assert!(!selection.toggle(3));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_first_n_scenario() {
        let records = page(1..=10);
        let mut selection = SelectionSet::new();

        assert_eq!(selection.select_first_n("3", &records), Ok(3));
        assert_eq!(selection.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_select_first_n_replaces_existing() {
        let records = page(1..=10);
        let mut selection = SelectionSet::new();
        selection.toggle(9);
        selection.toggle(500); // from another page

        selection.select_first_n("2", &records).unwrap();
        assert_eq!(selection.ids(), vec![1, 2]);
    }

    #[test]
    fn test_select_first_n_larger_than_page() {
        let records = page(11..=20);
        let mut selection = SelectionSet::new();

        assert_eq!(selection.select_first_n("25", &records), Ok(10));
        assert_eq!(selection.len(), 10);
        assert!(records.iter().all(|r| selection.is_selected(r.id)));

        assert_eq!(
            selection.select_first_n("99999999999999999999999", &records),
            Ok(10)
        );
    }

    #[test]
    fn test_select_first_n_invalid_leaves_selection() {
        let records = page(1..=10);
        let mut selection = SelectionSet::new();
        selection.toggle(4);
        let before = selection.clone();

        for input in ["abc", "", "  ", "0", "-2", "2.5", "3x"] {
            assert!(selection.select_first_n(input, &records).is_err(), "{input:?}");
            assert_eq!(selection, before);
        }
    }

    #[test]
    fn test_select_first_n_empty_page() {
        let mut selection = SelectionSet::new();
        selection.toggle(1);
        assert_eq!(selection.select_first_n("5", &[]), Ok(0));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_parse_row_count() {
        assert_eq!(parse_row_count(" 7 "), Ok(7));
        assert_eq!(parse_row_count("+4"), Ok(4));
        assert_eq!(parse_row_count("0"), Err(SelectionError::NotPositive(0)));
        assert_eq!(parse_row_count("-12"), Err(SelectionError::NotPositive(-12)));
        assert_eq!(
            parse_row_count("2.5"),
            Err(SelectionError::NotANumber("2.5".to_string()))
        );
        assert_eq!(
            parse_row_count("abc"),
            Err(SelectionError::NotANumber("abc".to_string()))
        );
        assert!(
            parse_row_count("abc")
                .unwrap_err()
                .to_string()
                .starts_with("Enter a valid number greater than zero")
        );
    }

    #[test]
    fn test_replace_from_visible_drops_other_pages() {
        let page1 = page(1..=10);
        let mut selection = SelectionSet::new();
        selection.toggle(2);
        selection.toggle(42); // remembered from another page

        selection.replace_from_visible_selection(&page1[4..6]);
        assert_eq!(selection.ids(), vec![5, 6]);

        selection.replace_from_visible_selection(std::iter::empty::<&ArtworkRecord>());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_visible_filters_current_page() {
        let page1 = page(1..=10);
        let page2 = page(11..=20);
        let mut selection = SelectionSet::new();
        selection.toggle(3);
        selection.toggle(15);

        let visible: Vec<u64> = selection.visible(&page1).iter().map(|r| r.id).collect();
        assert_eq!(visible, vec![3]);
        let visible: Vec<u64> = selection.visible(&page2).iter().map(|r| r.id).collect();
        assert_eq!(visible, vec![15]);
    }
}
