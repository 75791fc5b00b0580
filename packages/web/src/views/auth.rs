use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{field, AuthForm, AuthMode};

use crate::Route;

/// End-user sign-in / sign-up card.
///
/// Submission is simulated: the attempt is logged and the router goes home.
/// No server is contacted and no domain errors (wrong password, duplicate
/// email) exist on this page; the only enforced checks are the browser's
/// `required` attributes.
#[component]
pub fn Auth(mode: String) -> Element {
    let nav = use_navigator();
    let mut form = use_signal({
        let mode = mode.clone();
        move || AuthForm::new(AuthMode::from_query(&mode))
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        tracing::info!("auth form submitted: {}", form().summary());
        nav.push(Route::Home {});
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "container",
                div {
                    class: "auth-card",
                    div {
                        class: "auth-tabs",
                        button {
                            class: if form().mode == AuthMode::Login { "auth-tab active" } else { "auth-tab" },
                            onclick: move |_| form.write().mode = AuthMode::Login,
                            "Sign In"
                        }
                        button {
                            class: if form().mode == AuthMode::Register { "auth-tab active" } else { "auth-tab" },
                            onclick: move |_| form.write().mode = AuthMode::Register,
                            "Sign Up"
                        }
                    }

                    div {
                        class: "auth-content",
                        h1 { "{form().mode.heading()}" }
                        p { "{form().mode.subtitle()}" }

                        form {
                            class: "auth-form",
                            onsubmit: onsubmit,

                            if form().mode == AuthMode::Register {
                                div {
                                    class: "form-row",
                                    div {
                                        class: "form-group",
                                        label { r#for: "first_name", "First Name" }
                                        Input {
                                            id: "first_name",
                                            name: "first_name",
                                            required: form().is_required(field::FIRST_NAME),
                                            value: form().text(field::FIRST_NAME).to_string(),
                                            oninput: move |evt: FormEvent| form.write().set_text(field::FIRST_NAME, evt.value()),
                                        }
                                    }
                                    div {
                                        class: "form-group",
                                        label { r#for: "last_name", "Last Name" }
                                        Input {
                                            id: "last_name",
                                            name: "last_name",
                                            required: form().is_required(field::LAST_NAME),
                                            value: form().text(field::LAST_NAME).to_string(),
                                            oninput: move |evt: FormEvent| form.write().set_text(field::LAST_NAME, evt.value()),
                                        }
                                    }
                                }
                            }

                            div {
                                class: "form-group",
                                label { r#for: "email", "Email Address" }
                                Input {
                                    r#type: "email",
                                    id: "email",
                                    name: "email",
                                    required: form().is_required(field::EMAIL),
                                    value: form().text(field::EMAIL).to_string(),
                                    oninput: move |evt: FormEvent| form.write().set_text(field::EMAIL, evt.value()),
                                }
                            }

                            div {
                                class: "form-group",
                                label { r#for: "password", "Password" }
                                Input {
                                    r#type: "password",
                                    id: "password",
                                    name: "password",
                                    required: form().is_required(field::PASSWORD),
                                    value: form().text(field::PASSWORD).to_string(),
                                    oninput: move |evt: FormEvent| form.write().set_text(field::PASSWORD, evt.value()),
                                }
                            }

                            if form().mode == AuthMode::Register {
                                div {
                                    class: "form-group",
                                    label { r#for: "confirm_password", "Confirm Password" }
                                    Input {
                                        r#type: "password",
                                        id: "confirm_password",
                                        name: "confirm_password",
                                        required: form().is_required(field::CONFIRM_PASSWORD),
                                        value: form().text(field::CONFIRM_PASSWORD).to_string(),
                                        oninput: move |evt: FormEvent| form.write().set_text(field::CONFIRM_PASSWORD, evt.value()),
                                    }
                                }

                                div {
                                    class: "form-section",
                                    h3 { "Professional Information (Optional)" }

                                    div {
                                        class: "form-group",
                                        label { r#for: "company", "Company" }
                                        Input {
                                            id: "company",
                                            name: "company",
                                            value: form().text(field::COMPANY).to_string(),
                                            oninput: move |evt: FormEvent| form.write().set_text(field::COMPANY, evt.value()),
                                        }
                                    }

                                    div {
                                        class: "form-group",
                                        label { r#for: "industry", "Industry" }
                                        select {
                                            id: "industry",
                                            name: "industry",
                                            value: form().text(field::INDUSTRY).to_string(),
                                            onchange: move |evt: FormEvent| form.write().set_text(field::INDUSTRY, evt.value()),
                                            option { value: "", "Select Industry" }
                                            option { value: "technology", "Technology" }
                                            option { value: "healthcare", "Healthcare" }
                                            option { value: "finance", "Finance" }
                                            option { value: "education", "Education" }
                                            option { value: "marketing", "Marketing" }
                                            option { value: "other", "Other" }
                                        }
                                    }

                                    div {
                                        class: "form-group checkbox",
                                        input {
                                            r#type: "checkbox",
                                            id: "agree_terms",
                                            name: "agree_terms",
                                            required: form().is_required(field::AGREE_TERMS),
                                            checked: form().flag(field::AGREE_TERMS),
                                            onchange: move |evt: FormEvent| form.write().set_flag(field::AGREE_TERMS, evt.checked()),
                                        }
                                        label {
                                            r#for: "agree_terms",
                                            "I agree to the "
                                            a { href: "/terms", "Terms of Service" }
                                            " and "
                                            a { href: "/privacy", "Privacy Policy" }
                                        }
                                    }
                                }
                            }

                            Button {
                                variant: ButtonVariant::Primary,
                                class: "auth-button",
                                r#type: "submit",
                                "{form().mode.submit_label()}"
                            }

                            div {
                                class: "auth-links",
                                if form().mode == AuthMode::Login {
                                    a { href: "/forgot-password", "Forgot password?" }
                                    button {
                                        r#type: "button",
                                        class: "link-button",
                                        onclick: move |_| form.write().toggle_mode(),
                                        "Don't have an account? Sign up"
                                    }
                                } else {
                                    button {
                                        r#type: "button",
                                        class: "link-button",
                                        onclick: move |_| form.write().toggle_mode(),
                                        "Already have an account? Sign in"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
