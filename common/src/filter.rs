//! Category filter with an "All" sentinel
//!
//! Used by the Portfolio page (project categories) and the Gallery page
//! (media categories). Filtering never reorders: results keep source order.

use std::fmt;
use std::str::FromStr;

/// Label of the sentinel that disables filtering
pub const ALL_LABEL: &str = "All";

/// Anything that carries a category tag.
pub trait Categorized {
    type Category: Copy + PartialEq;

    fn category(&self) -> Self::Category;
}

/// Active filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<C> {
    All,
    Only(C),
}

impl<C> Default for Filter<C> {
    fn default() -> Self {
        Filter::All
    }
}

impl<C: Copy + PartialEq> Filter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => *wanted == category,
        }
    }

    /// Items passing the filter, in source order.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Categorized<Category = C>,
    {
        items.iter().filter(|item| self.matches(item.category())).collect()
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// Filter bar entries: "All" followed by each given category.
    pub fn options(categories: &[C]) -> Vec<Filter<C>> {
        std::iter::once(Filter::All)
            .chain(categories.iter().copied().map(Filter::Only))
            .collect()
    }
}

impl<C: fmt::Display> fmt::Display for Filter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str(ALL_LABEL),
            Filter::Only(c) => c.fmt(f),
        }
    }
}

impl<C: FromStr> FromStr for Filter<C> {
    type Err = C::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_LABEL) {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str, Category);

    impl Categorized for Item {
        type Category = Category;

        fn category(&self) -> Category {
            self.1
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item("a", Category::Research),
            Item("b", Category::MlAndAi),
            Item("c", Category::Research),
        ]
    }

    #[test]
    fn test_all_returns_everything() {
        let items = items();
        let result = Filter::All.apply(&items);
        assert_eq!(result.len(), items.len());
    }

    #[test]
    fn test_only_keeps_source_order() {
        let items = items();
        let result = Filter::Only(Category::Research).apply(&items);
        let names: Vec<_> = result.iter().map(|i| i.0).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let items = items();
        assert!(Filter::Only(Category::DataEngineering).apply(&items).is_empty());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("All".parse::<Filter<Category>>(), Ok(Filter::All));
        assert_eq!("ML & AI".parse::<Filter<Category>>(), Ok(Filter::Only(Category::MlAndAi)));
        assert_eq!(Filter::Only(Category::Research).to_string(), "Research");
        assert_eq!(Filter::<Category>::All.to_string(), "All");
    }

    #[test]
    fn test_options_start_with_all() {
        let options = Filter::options(&[Category::Research, Category::MlAndAi]);
        assert_eq!(options.len(), 3);
        assert!(options[0].is_all());
        assert_eq!(options[2], Filter::Only(Category::MlAndAi));
    }
}
