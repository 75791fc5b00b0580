use api::{sample_stats, DirectoryClient};
use dioxus::prelude::*;
use store::SessionStatus;
use ui::{submit_admin_logout, use_admin_session};

use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Overview,
    Users,
    Tools,
    Reviews,
    Subscriptions,
    Settings,
}

impl AdminTab {
    const ALL: [AdminTab; 6] = [
        AdminTab::Overview,
        AdminTab::Users,
        AdminTab::Tools,
        AdminTab::Reviews,
        AdminTab::Subscriptions,
        AdminTab::Settings,
    ];

    fn label(self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Users => "Users",
            AdminTab::Tools => "AI Tools",
            AdminTab::Reviews => "Reviews",
            AdminTab::Subscriptions => "Subscriptions",
            AdminTab::Settings => "Settings",
        }
    }
}

/// Admin dashboard, gated on the session flag.
///
/// The gate runs during render: an unauthenticated mount replaces the route
/// with the login view and renders nothing. This closes the original's
/// post-render flash of protected content.
#[component]
pub fn AdminDashboard() -> Element {
    let nav = use_navigator();
    let status = use_admin_session();
    let mut active_tab = use_signal(|| AdminTab::Overview);

    let users = use_resource(|| async move { DirectoryClient::new().fetch_users().await });
    let tools = use_resource(|| async move { DirectoryClient::new().fetch_tools().await });

    if status() != SessionStatus::Authenticated {
        nav.replace(Route::AdminLogin {});
        return rsx! {};
    }

    let logout = move |_| {
        submit_admin_logout(status);
        nav.push(Route::AdminLogin {});
    };

    rsx! {
        div {
            class: "admin-dashboard",
            div {
                class: "admin-header",
                div {
                    class: "container",
                    div {
                        class: "admin-header-content",
                        h1 { "Admin Dashboard" }
                        button {
                            class: "logout-button",
                            onclick: logout,
                            "Logout"
                        }
                    }
                }
            }

            div {
                class: "container",
                div {
                    class: "admin-content",
                    div {
                        class: "admin-sidebar",
                        nav {
                            class: "admin-nav",
                            for tab in AdminTab::ALL {
                                button {
                                    class: if active_tab() == tab { "admin-nav-item active" } else { "admin-nav-item" },
                                    onclick: move |_| active_tab.set(tab),
                                    "{tab.label()}"
                                }
                            }
                        }
                    }

                    div {
                        class: "admin-main",
                        match active_tab() {
                            AdminTab::Overview => rsx! {
                                Overview { users: users(), tools: tools() }
                            },
                            AdminTab::Users => rsx! {
                                Placeholder {
                                    title: "User Management",
                                    blurb: "Manage user accounts, subscriptions, and permissions.",
                                    note: "User management interface is under development.",
                                }
                            },
                            AdminTab::Tools => rsx! {
                                Placeholder {
                                    title: "AI Tools Management",
                                    blurb: "Add, edit, and manage AI tools in the directory.",
                                    note: "AI tools management interface is under development.",
                                }
                            },
                            AdminTab::Reviews => rsx! {
                                Placeholder {
                                    title: "Review Management",
                                    blurb: "Moderate and manage user reviews.",
                                    note: "Review management interface is under development.",
                                }
                            },
                            AdminTab::Subscriptions => rsx! {
                                Placeholder {
                                    title: "Subscription Management",
                                    blurb: "Manage subscription plans and user subscriptions.",
                                    note: "Subscription management interface is under development.",
                                }
                            },
                            AdminTab::Settings => rsx! {
                                Placeholder {
                                    title: "System Settings",
                                    blurb: "Configure system settings and preferences.",
                                    note: "Settings interface is under development.",
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Overview(
    users: Option<Vec<api::UserRecord>>,
    tools: Option<Vec<api::ToolRecord>>,
) -> Element {
    let stats = sample_stats();

    rsx! {
        div {
            class: "admin-overview",
            h2 { "Dashboard Overview" }

            div {
                class: "stats-grid",
                StatCard { title: "Total Users", value: format_count(stats.users), change: "+12% this month" }
                StatCard { title: "AI Tools", value: format_count(stats.tools), change: "+5 this week" }
                StatCard { title: "Reviews", value: format_count(stats.reviews), change: "+8% this month" }
                StatCard { title: "Monthly Revenue", value: format!("${}", format_count(stats.revenue)), change: "+15% this month" }
            }

            div {
                class: "admin-panels",
                div {
                    class: "admin-panel",
                    div {
                        class: "panel-header",
                        h3 { "Recent Users" }
                        button { class: "view-all-button", "View All" }
                    }

                    match users {
                        Some(list) => rsx! {
                            table {
                                class: "admin-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Joined" }
                                        th { "Subscription" }
                                    }
                                }
                                tbody {
                                    for user in list {
                                        tr {
                                            key: "{user.id}",
                                            td { "{user.name}" }
                                            td { "{user.email}" }
                                            td { "{user.joined}" }
                                            td {
                                                span {
                                                    class: "{user.subscription.badge_class()}",
                                                    "{user.subscription}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        None => rsx! {
                            p { class: "loading", "Loading users..." }
                        },
                    }
                }

                div {
                    class: "admin-panel",
                    div {
                        class: "panel-header",
                        h3 { "Recent Tools" }
                        button { class: "view-all-button", "View All" }
                    }

                    match tools {
                        Some(list) => rsx! {
                            table {
                                class: "admin-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Category" }
                                        th { "Status" }
                                        th { "Rating" }
                                    }
                                }
                                tbody {
                                    for tool in list {
                                        tr {
                                            key: "{tool.id}",
                                            td { "{tool.name}" }
                                            td { "{tool.category}" }
                                            td {
                                                span { class: "status-badge active", "Active" }
                                            }
                                            td { "{tool.rating}" }
                                        }
                                    }
                                }
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

/// Group digits in threes, e.g. `15482` → `"15,482"`.
fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[component]
fn StatCard(title: &'static str, value: String, change: &'static str) -> Element {
    rsx! {
        div {
            class: "stat-card",
            h3 { "{title}" }
            p { class: "stat-value", "{value}" }
            p { class: "stat-change positive", "{change}" }
        }
    }
}

#[component]
fn Placeholder(title: &'static str, blurb: &'static str, note: &'static str) -> Element {
    rsx! {
        div {
            class: "admin-placeholder",
            h2 { "{title}" }
            p { "{blurb}" }
            div {
                class: "placeholder-content",
                p { "{note}" }
            }
        }
    }
}
