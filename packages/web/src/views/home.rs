//! Landing page with the sign-in and registration forms.

use dioxus::prelude::*;

use super::Layout;

/// `error` is the message from a failed form action.
#[component]
pub fn Home(error: Option<String>) -> Element {
    let notice = error.unwrap_or_default();

    rsx! {
        Layout { heading: "Welcome".to_string(),
            section { class: "hero",
                h1 { "CodeVault" }
                p { "Write HTML, CSS and JavaScript in the browser, preview it live and share it with a link." }
                a { href: "/code-editor", "Try it without an account" }
            }
            if !notice.is_empty() {
                p { class: "notice error", "{notice}" }
            }
            div { class: "auth-forms",
                form { class: "card", method: "post", action: "/actions/login",
                    h2 { "Sign in" }
                    label { "Email"
                        input { r#type: "email", name: "email", autocomplete: "email" }
                    }
                    label { "Password"
                        input { r#type: "password", name: "password", autocomplete: "current-password" }
                    }
                    button { class: "primary", r#type: "submit", "Sign in" }
                }
                form { class: "card", method: "post", action: "/actions/register",
                    h2 { "Create an account" }
                    label { "Full name"
                        input { r#type: "text", name: "name", autocomplete: "name" }
                    }
                    label { "Email"
                        input { r#type: "email", name: "email", autocomplete: "email" }
                    }
                    label { "Password"
                        input { r#type: "password", name: "password", autocomplete: "new-password" }
                    }
                    label { "Avatar URL (optional)"
                        input { r#type: "url", name: "image" }
                    }
                    p { class: "hint", "Your username is the first word of your name." }
                    button { class: "primary", r#type: "submit", "Register" }
                }
            }
        }
    }
}
