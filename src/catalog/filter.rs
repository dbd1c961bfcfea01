//! Catalog filter/sort/search
//!
//! The displayed subset of a category page is a pure function of the static
//! provider table and the page's `CatalogQuery`. No caching, no side effects;
//! unrecognized filter or sort ids fall back to the defaults instead of
//! failing.

use crate::types::{Provider, Quality, Speed};

/// Filter selector for a catalog page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CatalogFilter {
    #[default]
    All,
    Popular,
    Fastest,
    Cheapest,
    HighestQuality,
    LongestDuration,
}

impl CatalogFilter {
    pub fn id(&self) -> &'static str {
        match self {
            CatalogFilter::All => "all",
            CatalogFilter::Popular => "popular",
            CatalogFilter::Fastest => "fastest",
            CatalogFilter::Cheapest => "cheapest",
            CatalogFilter::HighestQuality => "highest-quality",
            CatalogFilter::LongestDuration => "longest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogFilter::All => "All Providers",
            CatalogFilter::Popular => "Most Popular",
            CatalogFilter::Fastest => "Fastest",
            CatalogFilter::Cheapest => "Most Affordable",
            CatalogFilter::HighestQuality => "Highest Quality",
            CatalogFilter::LongestDuration => "Longest Duration",
        }
    }

    /// Falls back to `All` for ids not in the page's enumeration.
    pub fn from_id(id: &str) -> Self {
        match id {
            "popular" => CatalogFilter::Popular,
            "fastest" => CatalogFilter::Fastest,
            "cheapest" => CatalogFilter::Cheapest,
            "highest-quality" => CatalogFilter::HighestQuality,
            "longest" => CatalogFilter::LongestDuration,
            _ => CatalogFilter::All,
        }
    }

    fn matches(&self, provider: &Provider, median_price: f64) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Popular => provider.popular,
            CatalogFilter::Fastest => provider.speed == Speed::Fast,
            CatalogFilter::Cheapest => provider.price.base <= median_price,
            CatalogFilter::HighestQuality => provider.quality == Quality::High,
            CatalogFilter::LongestDuration => provider.max_duration_secs.unwrap_or(0) >= 8,
        }
    }
}

/// Sort selector for a catalog page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CatalogSort {
    #[default]
    Popular,
    Rating,
    PriceLowToHigh,
    PriceHighToLow,
    MaxDuration,
    Name,
}

impl CatalogSort {
    pub fn id(&self) -> &'static str {
        match self {
            CatalogSort::Popular => "popular",
            CatalogSort::Rating => "rating",
            CatalogSort::PriceLowToHigh => "price-low",
            CatalogSort::PriceHighToLow => "price-high",
            CatalogSort::MaxDuration => "duration",
            CatalogSort::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogSort::Popular => "Most Popular",
            CatalogSort::Rating => "Highest Rated",
            CatalogSort::PriceLowToHigh => "Price: Low to High",
            CatalogSort::PriceHighToLow => "Price: High to Low",
            CatalogSort::MaxDuration => "Max Duration",
            CatalogSort::Name => "Name A-Z",
        }
    }

    /// Falls back to `Popular` for ids not in the page's enumeration.
    pub fn from_id(id: &str) -> Self {
        match id {
            "rating" => CatalogSort::Rating,
            "price-low" => CatalogSort::PriceLowToHigh,
            "price-high" => CatalogSort::PriceHighToLow,
            "duration" => CatalogSort::MaxDuration,
            "name" => CatalogSort::Name,
            _ => CatalogSort::Popular,
        }
    }

    /// Stable ordering; records that compare equal keep their original
    /// relative order.
    fn order(&self, providers: &mut [&Provider]) {
        match self {
            CatalogSort::Popular => providers.sort_by_key(|p| !p.popular),
            CatalogSort::Rating => providers.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            CatalogSort::PriceLowToHigh => {
                providers.sort_by(|a, b| a.price.base.total_cmp(&b.price.base))
            }
            CatalogSort::PriceHighToLow => {
                providers.sort_by(|a, b| b.price.base.total_cmp(&a.price.base))
            }
            CatalogSort::MaxDuration => providers.sort_by(|a, b| {
                b.max_duration_secs
                    .unwrap_or(0)
                    .cmp(&a.max_duration_secs.unwrap_or(0))
            }),
            CatalogSort::Name => providers.sort_by(|a, b| a.display_name.cmp(b.display_name)),
        }
    }
}

/// The ephemeral search/filter/sort selections a user makes on a catalog
/// page. Created with defaults on mount, discarded on navigation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogQuery {
    pub search: String,
    pub filter: CatalogFilter,
    pub sort: CatalogSort,
}

impl CatalogQuery {
    /// Derive the ordered subset of `providers` to display.
    pub fn apply<'a>(&self, providers: &'a [Provider]) -> Vec<&'a Provider> {
        let needle = self.search.trim().to_lowercase();
        let median = median_price(providers);

        let mut matched: Vec<&Provider> = providers
            .iter()
            .filter(|p| needle.is_empty() || matches_search(p, &needle))
            .filter(|p| self.filter.matches(p, median))
            .collect();

        self.sort.order(&mut matched);
        matched
    }
}

fn matches_search(provider: &Provider, needle: &str) -> bool {
    provider.name.to_lowercase().contains(needle)
        || provider.display_name.to_lowercase().contains(needle)
        || provider.description.to_lowercase().contains(needle)
}

/// Lower median of the table's base prices; the "Most Affordable" filter
/// keeps records at or below it.
fn median_price(providers: &[Provider]) -> f64 {
    if providers.is_empty() {
        return 0.0;
    }
    let mut prices: Vec<f64> = providers.iter().map(|p| p.price.base).collect();
    prices.sort_by(f64::total_cmp);
    prices[(prices.len() - 1) / 2]
}

// Filter/sort enumerations offered per page. The richer image and video
// pages expose a category-specific option on top of the shared set.
pub static DEFAULT_FILTERS: &[CatalogFilter] = &[
    CatalogFilter::All,
    CatalogFilter::Popular,
    CatalogFilter::Fastest,
    CatalogFilter::Cheapest,
];

pub static IMAGE_FILTERS: &[CatalogFilter] = &[
    CatalogFilter::All,
    CatalogFilter::Popular,
    CatalogFilter::Fastest,
    CatalogFilter::Cheapest,
    CatalogFilter::HighestQuality,
];

pub static VIDEO_FILTERS: &[CatalogFilter] = &[
    CatalogFilter::All,
    CatalogFilter::Popular,
    CatalogFilter::Fastest,
    CatalogFilter::Cheapest,
    CatalogFilter::LongestDuration,
];

pub static DEFAULT_SORTS: &[CatalogSort] = &[
    CatalogSort::Popular,
    CatalogSort::Rating,
    CatalogSort::PriceLowToHigh,
    CatalogSort::PriceHighToLow,
    CatalogSort::Name,
];

pub static VIDEO_SORTS: &[CatalogSort] = &[
    CatalogSort::Popular,
    CatalogSort::Rating,
    CatalogSort::PriceLowToHigh,
    CatalogSort::MaxDuration,
    CatalogSort::Name,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn make_provider(name: &'static str, rating: f32, price: f64, popular: bool) -> Provider {
        Provider {
            id: name,
            name,
            display_name: name,
            description: "",
            logo: "",
            rating,
            price: Price {
                base: price,
                unit: "image",
            },
            features: &[],
            category: "Test",
            speed: Speed::Medium,
            quality: Quality::High,
            badge: None,
            popular,
            censorship: None,
            max_duration_secs: None,
            styles: &[],
            output_formats: &[],
        }
    }

    fn names(result: &[&Provider]) -> Vec<&'static str> {
        result.iter().map(|p| p.name).collect()
    }

    #[test]
    fn empty_search_returns_full_list() {
        let providers = vec![
            make_provider("Alpha", 4.0, 0.02, false),
            make_provider("Beta", 4.5, 0.04, true),
        ];
        let query = CatalogQuery {
            sort: CatalogSort::Name,
            ..Default::default()
        };
        assert_eq!(query.apply(&providers).len(), 2);
    }

    #[test]
    fn search_matches_name_and_description_case_insensitively() {
        let mut providers = vec![
            make_provider("Alpha", 4.0, 0.02, false),
            make_provider("Beta", 4.5, 0.04, true),
        ];
        providers[1].description = "Fast ALPHA-compatible generator";

        let query = CatalogQuery {
            search: "alpha".to_string(),
            sort: CatalogSort::Name,
            ..Default::default()
        };
        let result = query.apply(&providers);
        assert_eq!(names(&result), vec!["Alpha", "Beta"]);

        for p in &result {
            let haystack = format!("{} {}", p.name, p.description).to_lowercase();
            assert!(haystack.contains("alpha"));
        }

        let query = CatalogQuery {
            search: "nothing-matches-this".to_string(),
            ..Default::default()
        };
        assert!(query.apply(&providers).is_empty());
    }

    #[test]
    fn rating_sort_is_descending_and_stable() {
        let providers = vec![
            make_provider("Alpha", 4.2, 0.02, false),
            make_provider("Beta", 4.8, 0.03, false),
            make_provider("Gamma", 4.8, 0.04, false),
        ];
        let query = CatalogQuery {
            sort: CatalogSort::Rating,
            ..Default::default()
        };
        let result = query.apply(&providers);

        // Beta before Gamma: equal ratings preserve input order.
        assert_eq!(names(&result), vec!["Beta", "Gamma", "Alpha"]);
        for pair in result.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn price_ascending_is_non_decreasing() {
        let providers = vec![
            make_provider("A", 4.0, 0.08, false),
            make_provider("B", 4.0, 0.02, false),
            make_provider("C", 4.0, 0.04, false),
        ];
        let query = CatalogQuery {
            sort: CatalogSort::PriceLowToHigh,
            ..Default::default()
        };
        let result = query.apply(&providers);
        for pair in result.windows(2) {
            assert!(pair[0].price.base <= pair[1].price.base);
        }
        assert_eq!(names(&result), vec!["B", "C", "A"]);
    }

    #[test]
    fn all_filter_with_popular_sort_preserves_tie_order() {
        // No record is popular, so the default sort compares everything
        // equal and the input order must survive untouched.
        let providers = vec![
            make_provider("Gamma", 4.0, 0.03, false),
            make_provider("Alpha", 4.5, 0.01, false),
            make_provider("Beta", 4.2, 0.02, false),
        ];
        let query = CatalogQuery::default();
        assert_eq!(names(&query.apply(&providers)), vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn popular_filter_restricts_to_flagged_records() {
        let providers = vec![
            make_provider("Alpha", 4.0, 0.02, true),
            make_provider("Beta", 4.5, 0.04, false),
            make_provider("Gamma", 4.1, 0.03, true),
        ];
        let query = CatalogQuery {
            filter: CatalogFilter::Popular,
            ..Default::default()
        };
        assert_eq!(names(&query.apply(&providers)), vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn fastest_filter_keeps_fast_speed_only() {
        let mut providers = vec![
            make_provider("Alpha", 4.0, 0.02, false),
            make_provider("Beta", 4.5, 0.04, false),
        ];
        providers[0].speed = Speed::Fast;

        let query = CatalogQuery {
            filter: CatalogFilter::Fastest,
            ..Default::default()
        };
        assert_eq!(names(&query.apply(&providers)), vec!["Alpha"]);
    }

    #[test]
    fn cheapest_filter_keeps_at_or_below_median() {
        let providers = vec![
            make_provider("A", 4.0, 0.01, false),
            make_provider("B", 4.0, 0.05, false),
            make_provider("C", 4.0, 0.09, false),
        ];
        let query = CatalogQuery {
            filter: CatalogFilter::Cheapest,
            ..Default::default()
        };
        assert_eq!(names(&query.apply(&providers)), vec!["A", "B"]);
    }

    #[test]
    fn duration_sort_and_filter_use_max_duration() {
        let mut providers = vec![
            make_provider("Short", 4.0, 0.02, false),
            make_provider("Long", 4.0, 0.04, false),
        ];
        providers[0].max_duration_secs = Some(4);
        providers[1].max_duration_secs = Some(12);

        let query = CatalogQuery {
            filter: CatalogFilter::LongestDuration,
            sort: CatalogSort::MaxDuration,
            ..Default::default()
        };
        assert_eq!(names(&query.apply(&providers)), vec!["Long"]);
    }

    #[test]
    fn unknown_ids_fall_back_to_defaults() {
        assert_eq!(CatalogFilter::from_id("does-not-exist"), CatalogFilter::All);
        assert_eq!(CatalogSort::from_id("does-not-exist"), CatalogSort::Popular);
        assert_eq!(CatalogFilter::from_id(""), CatalogFilter::All);
        assert_eq!(CatalogSort::from_id(""), CatalogSort::Popular);
    }
}
