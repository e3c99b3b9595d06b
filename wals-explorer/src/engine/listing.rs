// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Filtered, paginated listings

use serde::Serialize;

/// Filters for the language listing. Empty strings mean "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFilter {
    /// Case-insensitive substring of name or ID
    pub search: String,
    /// Exact family
    pub family: String,
    /// Exact macroarea
    pub macroarea: String,
    /// 1-indexed page
    pub page: usize,
    pub per_page: usize,
}

impl Default for LanguageFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            family: String::new(),
            macroarea: String::new(),
            page: 1,
            per_page: 50,
        }
    }
}

impl LanguageFilter {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page,
            per_page,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_macroarea(mut self, macroarea: impl Into<String>) -> Self {
        self.macroarea = macroarea.into();
        self
    }
}

/// Filters for the feature listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFilter {
    /// Case-insensitive substring of name or ID
    pub search: String,
    /// Linguistic area. Accepted but not applied: feature rows carry no area.
    pub area: String,
    /// 1-indexed page
    pub page: usize,
    pub per_page: usize,
}

impl Default for FeatureFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            area: String::new(),
            page: 1,
            per_page: 30,
        }
    }
}

impl FeatureFilter {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page,
            per_page,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }
}

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    /// Number of rows matching the filters, across all pages
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    /// Always at least 1
    pub total_pages: usize,
}

impl<T> Listing<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `ceil(total / per_page)`, never less than 1
pub fn total_pages(total: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    total.div_ceil(per_page).max(1)
}

/// Cut one page out of the filtered rows. Pages past the end (and page 0)
/// are empty rather than clamped.
pub fn paginate<T>(filtered: Vec<T>, page: usize, per_page: usize) -> Listing<T> {
    let total = filtered.len();
    let size = per_page.max(1);

    let items = if page == 0 {
        Vec::new()
    } else {
        let start = (page - 1).saturating_mul(size);
        filtered.into_iter().skip(start).take(size).collect()
    };

    Listing {
        items,
        total,
        page,
        per_page,
        total_pages: total_pages(total, per_page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, 50), 1);
        assert_eq!(total_pages(1, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(2662, 50), 54);
    }

    #[test]
    fn test_paginate_slices() {
        let rows: Vec<u32> = (1..=7).collect();

        let first = paginate(rows.clone(), 1, 3);
        assert_eq!(first.items, vec![1, 2, 3]);
        assert_eq!(first.total, 7);
        assert_eq!(first.total_pages, 3);

        let last = paginate(rows.clone(), 3, 3);
        assert_eq!(last.items, vec![7]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let rows: Vec<u32> = (1..=7).collect();

        let beyond = paginate(rows.clone(), 4, 3);
        assert!(beyond.is_empty());
        assert_eq!(beyond.total, 7);
        assert_eq!(beyond.page, 4);

        assert!(paginate(rows, 0, 3).is_empty());
    }

    #[test]
    fn test_paginate_empty_input() {
        let listing = paginate(Vec::<u32>::new(), 1, 30);
        assert!(listing.is_empty());
        assert_eq!(listing.total, 0);
        assert_eq!(listing.total_pages, 1);
    }
}
