use dioxus::prelude::*;

use super::Layout;

#[component]
pub fn NotFound(message: String) -> Element {
    rsx! {
        Layout { heading: "Not found".to_string(),
            section { class: "card centered",
                h1 { "Not found" }
                p { "{message}" }
                a { href: "/", "Home" }
            }
        }
    }
}
