use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{submit_admin_login, use_admin_session};

use crate::Route;

/// Admin sign-in form. A mismatch shows the inline error and leaves the
/// entered values in place; retries are unlimited.
#[component]
pub fn AdminLogin() -> Element {
    let nav = use_navigator();
    let status = use_admin_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        match submit_admin_login(status, &email(), &password()) {
            Ok(()) => {
                nav.push(Route::AdminDashboard {});
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "admin-login",
            div {
                class: "container",
                div {
                    class: "auth-card",
                    div {
                        class: "auth-content",
                        h1 { "Admin Login" }
                        p { "Sign in to access the admin dashboard" }

                        if let Some(err) = error() {
                            div {
                                class: "error-message",
                                "{err}"
                            }
                        }

                        form {
                            class: "auth-form",
                            onsubmit: onsubmit,

                            div {
                                class: "form-group",
                                label { r#for: "email", "Email Address" }
                                Input {
                                    r#type: "email",
                                    id: "email",
                                    name: "email",
                                    required: true,
                                    value: email(),
                                    oninput: move |evt: FormEvent| email.set(evt.value()),
                                }
                            }

                            div {
                                class: "form-group",
                                label { r#for: "password", "Password" }
                                Input {
                                    r#type: "password",
                                    id: "password",
                                    name: "password",
                                    required: true,
                                    value: password(),
                                    oninput: move |evt: FormEvent| password.set(evt.value()),
                                }
                            }

                            Button {
                                variant: ButtonVariant::Primary,
                                class: "auth-button",
                                r#type: "submit",
                                "Sign In"
                            }

                            div {
                                class: "auth-links",
                                Link { to: Route::Home {}, "Back to Homepage" }
                            }
                        }
                    }
                }
            }
        }
    }
}
