//! Shared catalog page scaffold
//!
//! Each category page provides its static table and option sets; the
//! scaffold owns the per-page view state (search term, filter id, sort id)
//! and derives the visible list on every change.

use dioxus::prelude::*;

use super::{Card, ProviderCard};
use crate::catalog::{CatalogFilter, CatalogQuery, CatalogSort};
use crate::types::{Provider, Quality};

#[derive(Props, Clone, PartialEq)]
pub struct CatalogPageProps {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
    pub search_placeholder: &'static str,
    pub providers: &'static [Provider],
    pub filters: &'static [CatalogFilter],
    pub sorts: &'static [CatalogSort],
}

#[component]
pub fn CatalogPage(props: CatalogPageProps) -> Element {
    let mut search = use_signal(String::new);
    let mut filter = use_signal(CatalogFilter::default);
    let mut sort = use_signal(CatalogSort::default);

    let providers = props.providers;

    // Seed the search box from a ?q= query parameter on load.
    use_effect(move || {
        #[cfg(feature = "web")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(query_string) = window.location().search() {
                    if let Some(q) = query_string.strip_prefix("?q=") {
                        let decoded = urlencoding::decode(q).unwrap_or_default().to_string();
                        if !decoded.is_empty() {
                            search.set(decoded);
                        }
                    }
                }
            }
        }
    });

    // Derive the displayed subset; pure function of the table and the three
    // selections.
    let visible = use_memo(move || {
        let query = CatalogQuery {
            search: search(),
            filter: filter(),
            sort: sort(),
        };
        query
            .apply(providers)
            .into_iter()
            .copied()
            .collect::<Vec<Provider>>()
    });

    let filter_id = filter().id();
    let sort_id = sort().id();

    let count = providers.len();
    let min_price = providers
        .iter()
        .map(|p| p.price.base)
        .fold(f64::INFINITY, f64::min);
    let min_price = format!("${min_price:.3}");
    let avg_rating = providers.iter().map(|p| p.rating as f64).sum::<f64>() / count.max(1) as f64;
    let avg_rating = format!("{avg_rating:.1}");
    let high_quality = providers
        .iter()
        .filter(|p| p.quality == Quality::High)
        .count();

    rsx! {
        // Page Header
        div {
            class: "mb-8",
            div {
                class: "flex items-center space-x-3 mb-4",
                div {
                    class: "w-12 h-12 bg-gradient-to-br {props.gradient} rounded-xl flex items-center justify-center text-2xl",
                    "{props.icon}"
                }
                div {
                    h1 { class: "text-3xl font-bold text-gray-900", "{props.title}" }
                    p { class: "text-gray-600", "{props.subtitle}" }
                }
            }

            div {
                class: "flex flex-col lg:flex-row gap-4",

                // Search
                div {
                    class: "flex-1 relative",
                    input {
                        r#type: "text",
                        placeholder: props.search_placeholder,
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                        class: "w-full pl-4 pr-4 py-3 glass rounded-xl border border-white/20 focus:ring-2 focus:ring-electric-blue focus:border-transparent"
                    }
                }

                // Filter and sort selectors
                div {
                    class: "flex gap-3",
                    select {
                        class: "glass rounded-xl border border-white/20 px-4 py-3 focus:ring-2 focus:ring-electric-blue",
                        value: "{filter_id}",
                        onchange: move |e| filter.set(CatalogFilter::from_id(&e.value())),
                        for opt in props.filters {
                            option { value: opt.id(), "{opt.label()}" }
                        }
                    }
                    select {
                        class: "glass rounded-xl border border-white/20 px-4 py-3 focus:ring-2 focus:ring-electric-blue",
                        value: "{sort_id}",
                        onchange: move |e| sort.set(CatalogSort::from_id(&e.value())),
                        for opt in props.sorts {
                            option { value: opt.id(), "{opt.label()}" }
                        }
                    }
                }
            }
        }

        // Provider Grid
        if visible().is_empty() {
            div {
                class: "text-center py-16",
                h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No providers found" }
                p {
                    class: "text-gray-500 mb-6 max-w-md mx-auto",
                    "Nothing matches \"{search}\". Try adjusting your search or filters."
                }
                button {
                    class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
                    onclick: move |_| {
                        search.set(String::new());
                        filter.set(CatalogFilter::All);
                        sort.set(CatalogSort::Popular);
                    },
                    "Clear Filters"
                }
            }
        } else {
            div {
                class: "mb-6",
                p {
                    class: "text-sm text-gray-500",
                    "Showing "
                    span { class: "font-medium text-gray-900", "{visible().len()}" }
                    " of {count} providers"
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6",
                for provider in visible() {
                    ProviderCard { key: "{provider.id}", provider }
                }
            }
        }

        // Quick Stats
        div {
            class: "mt-12 grid grid-cols-2 md:grid-cols-4 gap-4",
            Card {
                class: "p-4 text-center".to_string(),
                div { class: "text-2xl font-bold text-electric-blue", "{count}" }
                div { class: "text-sm text-gray-600", "Providers" }
            }
            Card {
                class: "p-4 text-center".to_string(),
                div { class: "text-2xl font-bold text-green-600", "{min_price}" }
                div { class: "text-sm text-gray-600", "Starting Price" }
            }
            Card {
                class: "p-4 text-center".to_string(),
                div { class: "text-2xl font-bold text-purple-600", "{avg_rating}" }
                div { class: "text-sm text-gray-600", "Average Rating" }
            }
            Card {
                class: "p-4 text-center".to_string(),
                div { class: "text-2xl font-bold text-orange-600", "{high_quality}" }
                div { class: "text-sm text-gray-600", "High Quality" }
            }
        }
    }
}
