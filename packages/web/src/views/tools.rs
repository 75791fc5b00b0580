use api::DirectoryClient;
use dioxus::prelude::*;
use ui::{FilterPanel, ToolCard, ViewMode};

/// Tools directory page. Fetches the listing on mount; the grid/list toggle
/// swaps only the layout class on the list container.
#[component]
pub fn Tools() -> Element {
    let mut view_mode = use_signal(|| ViewMode::Grid);

    let tools = use_resource(|| async move { DirectoryClient::new().fetch_tools().await });

    rsx! {
        div {
            class: "tools-page",
            div {
                class: "container",
                div {
                    class: "page-header",
                    h1 { "AI Tools Directory" }
                    p { "Browse our curated collection of AI tools for every need" }
                }

                div {
                    class: "tools-controls",
                    div {
                        class: "search-container",
                        input {
                            r#type: "text",
                            placeholder: "Search tools...",
                            class: "search-input",
                        }
                    }

                    div {
                        class: "view-controls",
                        for mode in [ViewMode::Grid, ViewMode::List] {
                            button {
                                class: if view_mode() == mode { "view-button active" } else { "view-button" },
                                onclick: move |_| view_mode.set(mode),
                                "{mode.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "tools-container",
                    FilterPanel {}

                    div {
                        class: "tools-list {view_mode().class()}",
                        match tools() {
                            Some(list) => rsx! {
                                for tool in list {
                                    ToolCard { key: "{tool.id}", tool: tool.clone() }
                                }
                            },
                            None => rsx! {
                                p { class: "loading", "Loading tools..." }
                            },
                        }
                    }
                }
            }
        }
    }
}
