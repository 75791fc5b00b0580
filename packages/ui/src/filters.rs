//! Sidebar filter panel for the tools listing.
//!
//! The checkboxes and the clear button are rendered but not yet connected to
//! the displayed list: the directory API offers no filter parameters the
//! client consumes, so checking a box changes nothing. Kept as an explicit
//! stub rather than fake-wired client-side filtering.

use dioxus::prelude::*;

const CATEGORY_OPTIONS: &[&str] = &[
    "Conversational AI",
    "Image Generation",
    "Code Assistant",
    "Data Analysis",
    "Content Creation",
];

const PRICING_OPTIONS: &[&str] = &["Free", "Freemium", "Paid"];

const RATING_OPTIONS: &[&str] = &["4+ Stars", "3+ Stars"];

#[component]
fn FilterGroup(title: &'static str, options: &'static [&'static str]) -> Element {
    rsx! {
        div {
            class: "filter-group",
            h4 { "{title}" }
            div {
                class: "filter-options",
                for option in options {
                    label {
                        input { r#type: "checkbox" }
                        " {option}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn FilterPanel() -> Element {
    rsx! {
        div {
            class: "filters",
            h3 { "Filters" }
            FilterGroup { title: "Categories", options: CATEGORY_OPTIONS }
            FilterGroup { title: "Pricing", options: PRICING_OPTIONS }
            FilterGroup { title: "Rating", options: RATING_OPTIONS }
            button { class: "clear-filters", "Clear Filters" }
        }
    }
}
