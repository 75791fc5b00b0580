use dioxus::prelude::*;

use crate::Route;

struct Plan {
    name: &'static str,
    price: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        price: "$0",
        description: "Perfect for getting started",
        features: &[
            "Browse all AI tools",
            "Basic search and filters",
            "Tool ratings and reviews",
            "Community support",
        ],
        popular: false,
    },
    Plan {
        name: "Premium",
        price: "$9",
        description: "Best for professionals",
        features: &[
            "Everything in Free",
            "Advanced search filters",
            "Save favorite tools",
            "Write reviews",
            "Priority support",
            "Export tool lists",
        ],
        popular: true,
    },
    Plan {
        name: "Business",
        price: "$29",
        description: "For teams and organizations",
        features: &[
            "Everything in Premium",
            "Team collaboration",
            "Custom categories",
            "API access",
            "Analytics dashboard",
            "Dedicated support",
        ],
        popular: false,
    },
];

#[component]
pub fn Pricing() -> Element {
    rsx! {
        div {
            class: "pricing-page",
            div {
                class: "container",
                div {
                    class: "page-header",
                    h1 { "Choose Your Plan" }
                    p {
                        "Get access to premium features and unlock the full potential \
                         of our AI tools directory."
                    }
                }

                div {
                    class: "pricing-plans",
                    for plan in PLANS {
                        div {
                            key: "{plan.name}",
                            class: if plan.popular { "pricing-card popular" } else { "pricing-card" },

                            if plan.popular {
                                div { class: "popular-badge", "Most Popular" }
                            }

                            div {
                                class: "plan-header",
                                h2 { "{plan.name}" }
                                div {
                                    class: "plan-price",
                                    "{plan.price}"
                                    span { "/month" }
                                }
                                p { "{plan.description}" }
                            }

                            div {
                                class: "plan-features",
                                ul {
                                    for feature in plan.features {
                                        li {
                                            span { class: "check-icon", "✓" }
                                            " {feature}"
                                        }
                                    }
                                }
                            }

                            div {
                                class: "plan-action",
                                Link {
                                    to: Route::Auth { mode: "register".to_string() },
                                    class: if plan.popular { "plan-button primary" } else { "plan-button secondary" },
                                    if plan.name == "Free" { "Get Started" } else { "Choose Plan" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "pricing-info",
                    p { "All plans include a 14-day free trial. No credit card required." }
                    p {
                        "Need a custom solution? "
                        a { href: "/contact", "Contact us" }
                    }
                }
            }
        }
    }
}
