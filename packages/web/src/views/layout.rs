//! Site chrome: header, footer, and the routed page in between. The admin
//! pages render outside this layout.

use dioxus::prelude::*;
use ui::Notice;

use crate::Route;

#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "app",
            Header {}
            main {
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header {
            div {
                class: "container",
                nav {
                    Link { to: Route::Home {}, class: "logo",
                        span { "A.I Intel" }
                    }

                    ul {
                        class: "nav-links",
                        li { Link { to: Route::Home {}, "Home" } }
                        li { Link { to: Route::Tools {}, "Browse Tools" } }
                        li { Link { to: Route::Pricing {}, "Pricing" } }
                    }

                    div {
                        class: "auth-buttons",
                        Link {
                            to: Route::Auth { mode: String::new() },
                            class: "btn btn-outline",
                            "Sign In"
                        }
                        Link {
                            to: Route::Auth { mode: "register".to_string() },
                            class: "btn btn-primary",
                            "Get Started"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let mut email = use_signal(String::new);
    let mut subscribed = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !email().trim().is_empty() {
            subscribed.set(true);
            email.set(String::new());
        }
    };

    rsx! {
        footer {
            class: "footer",
            div {
                class: "container",
                div {
                    class: "footer-content",
                    div {
                        class: "footer-section",
                        h3 { "AI Directory" }
                        p { "Find the perfect AI tool for your business" }

                        form {
                            class: "newsletter-form",
                            onsubmit: onsubmit,
                            input {
                                r#type: "email",
                                placeholder: "Your email address",
                                value: email(),
                                oninput: move |evt| email.set(evt.value()),
                            }
                            button { r#type: "submit", "Subscribe" }
                        }
                        if subscribed() {
                            Notice {
                                message: "Thanks for subscribing!",
                                on_dismiss: move |_| subscribed.set(false),
                            }
                        }
                    }

                    div {
                        class: "footer-section",
                        h4 { "Product" }
                        ul {
                            li { Link { to: Route::Tools {}, "Browse Tools" } }
                            li { Link { to: Route::Pricing {}, "Pricing" } }
                        }
                    }

                    div {
                        class: "footer-section",
                        h4 { "Company" }
                        ul {
                            li { a { href: "/about", "About Us" } }
                            li { a { href: "/contact", "Contact" } }
                            li { a { href: "/blog", "Blog" } }
                        }
                    }

                    div {
                        class: "footer-section",
                        h4 { "Legal" }
                        ul {
                            li { a { href: "/terms", "Terms of Service" } }
                            li { a { href: "/privacy", "Privacy Policy" } }
                            li { a { href: "/cookies", "Cookie Policy" } }
                            li {
                                Link {
                                    to: Route::AdminLogin {},
                                    class: "admin-link",
                                    "Admin Portal"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "footer-bottom",
                    p { "© 2025 AI Directory. All rights reserved." }
                }
            }
        }
    }
}
