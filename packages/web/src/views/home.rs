use dioxus::prelude::*;
use ui::ToolCard;

use crate::Route;

/// Landing page: hero, stats strip, featured tools, and the signup CTA.
/// Everything here is static copy; the featured cards reuse the fixed
/// sample dataset.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-page",

            section {
                class: "hero",
                div {
                    class: "container",
                    h1 {
                        "Find the Perfect "
                        span { "AI Tool" }
                        " for Your Business"
                    }
                    p {
                        "Discover and compare over 250+ AI tools to boost your productivity, \
                         creativity, and business growth. Trusted by 15,000+ professionals."
                    }

                    div {
                        class: "search-container",
                        input {
                            r#type: "text",
                            placeholder: "Search for AI tools, categories, or use cases...",
                        }
                        button { "Search" }
                    }
                }
            }

            section {
                class: "stats",
                div {
                    class: "container",
                    div {
                        class: "stats-container",
                        StatItem { value: "250+", label: "AI Tools Listed" }
                        StatItem { value: "15,000+", label: "Active Users" }
                        StatItem { value: "8,500+", label: "User Reviews" }
                    }
                }
            }

            section {
                class: "featured-tools",
                div {
                    class: "container",
                    div {
                        class: "section-header",
                        h2 { "Featured AI Tools" }
                        p { "Explore the most popular and highly-rated AI tools in our directory" }
                    }

                    div {
                        class: "tools-grid",
                        for tool in api::fallback_tools() {
                            ToolCard { key: "{tool.id}", tool: tool.clone() }
                        }
                    }
                }
            }

            section {
                class: "cta-section",
                div {
                    class: "container",
                    h2 { "Ready to find the perfect AI tools for your business?" }
                    p {
                        "Join thousands of professionals who use A.I Intel to discover, \
                         compare, and implement the best AI tools for their needs."
                    }
                    Link {
                        to: Route::Auth { mode: "register".to_string() },
                        class: "btn btn-primary cta-button",
                        "Get Started - It's Free"
                    }
                }
            }
        }
    }
}

#[component]
fn StatItem(value: &'static str, label: &'static str) -> Element {
    rsx! {
        div {
            class: "stat-item",
            h3 { "{value}" }
            p { "{label}" }
        }
    }
}
