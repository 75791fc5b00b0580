use api::ToolRecord;
use dioxus::prelude::*;

use crate::icons::FaStar;
use crate::Icon;

/// Five star icons plus the numeric rating value.
#[component]
pub fn StarRating(value: f32) -> Element {
    rsx! {
        div {
            class: "tool-rating",
            span {
                class: "stars",
                for _ in 0..5 {
                    Icon { icon: FaStar, width: 14, height: 14 }
                }
            }
            span { class: "rating-value", "{value}" }
        }
    }
}

/// Card for one directory entry: category badge, name, description, rating
/// row, and a details link.
#[component]
pub fn ToolCard(tool: ToolRecord) -> Element {
    rsx! {
        div {
            class: "tool-card",
            div { class: "tool-category", "{tool.category}" }
            h3 { "{tool.name}" }
            p { "{tool.description}" }
            StarRating { value: tool.rating }
            a {
                class: "view-details",
                href: "/tools/{tool.id}",
                "View Details"
            }
        }
    }
}
