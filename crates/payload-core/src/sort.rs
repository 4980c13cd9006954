//! Sort state for the card table and row ordering.

use std::cmp::Ordering;

use payload_model::Mission;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Column the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Mission name.
    Mission,
    /// Total payload mass.
    Mass,
}

impl SortKey {
    /// Column header text.
    pub const fn header(&self) -> &'static str {
        match self {
            Self::Mission => "MISSION",
            Self::Mass => "TOTAL PAYLOAD MASS",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Arrow shown next to the active column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Ascending,
    Descending,
}

impl SortIndicator {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Ascending => "↓",
            Self::Descending => "↑",
        }
    }
}

/// Current ordering of the table.
///
/// `order_by == None` keeps rows in dataset order; `order_dir` is then the
/// direction armed for the next activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub order_by: Option<SortKey>,
    pub order_dir: SortDirection,
}

impl SortState {
    pub const fn new(order_by: Option<SortKey>, order_dir: SortDirection) -> Self {
        Self { order_by, order_dir }
    }

    /// Advance the per-column cycle: unsorted, ascending, descending, unsorted.
    ///
    /// Activating a different column always starts it ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.order_by != Some(key) {
            self.order_by = Some(key);
            self.order_dir = SortDirection::Asc;
        } else if self.order_dir == SortDirection::Asc {
            self.order_dir = SortDirection::Desc;
        } else {
            self.order_dir = SortDirection::Asc;
            self.order_by = None;
        }
        tracing::debug!(order_by = ?self.order_by, order_dir = ?self.order_dir, "sort toggled");
    }

    /// Indicator for the given column, if it is the active one.
    pub fn indicator(&self, key: SortKey) -> Option<SortIndicator> {
        if self.order_by != Some(key) {
            return None;
        }
        Some(match self.order_dir {
            SortDirection::Asc => SortIndicator::Ascending,
            SortDirection::Desc => SortIndicator::Descending,
        })
    }

    /// Compare two rows under this state; `Equal` when unsorted.
    pub fn compare(&self, a: &Mission, b: &Mission) -> Ordering {
        let ordering = match self.order_by {
            None => return Ordering::Equal,
            Some(SortKey::Mission) => compare_names(&a.name, &b.name),
            Some(SortKey::Mass) => a.total.total_cmp(&b.total),
        };
        self.order_dir.apply(ordering)
    }

    /// Reorder rows in place. Unsorted state leaves them untouched.
    pub fn sort_rows(&self, rows: &mut [Mission]) {
        if self.order_by.is_some() {
            rows.sort_by(|a, b| self.compare(a, b));
        }
    }
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

/// Human-oriented name comparison.
///
/// Letters compare case- and accent-insensitively first; accents break ties
/// next, and lowercase sorts before uppercase last.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_ignore_case_first() {
        assert_eq!(compare_names("apollo", "Gemini"), Ordering::Less);
        assert_eq!(compare_names("Zenit", "apollo"), Ordering::Greater);
    }

    #[test]
    fn lowercase_before_uppercase_on_tie() {
        assert_eq!(compare_names("crs", "CRS"), Ordering::Less);
        assert_eq!(compare_names("CRS", "CRS"), Ordering::Equal);
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(compare_names("Éclair", "Falcon"), Ordering::Less);
        assert_eq!(compare_names("Eclair", "Éclair"), Ordering::Less);
    }

    #[test]
    fn indicator_follows_active_column() {
        let state = SortState::new(Some(SortKey::Mass), SortDirection::Desc);
        assert_eq!(state.indicator(SortKey::Mass), Some(SortIndicator::Descending));
        assert_eq!(state.indicator(SortKey::Mission), None);
        assert_eq!(SortState::default().indicator(SortKey::Mass), None);
    }
}
