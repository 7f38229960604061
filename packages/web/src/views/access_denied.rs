use api::UserInfo;
use dioxus::prelude::*;

use super::Layout;

/// Shown with 403 when a signed-in user opens someone else's pages.
#[component]
pub fn AccessDenied(user: UserInfo) -> Element {
    let home = user.home_path();

    rsx! {
        Layout { heading: "Access Denied".to_string(), user: user,
            section { class: "card centered",
                h1 { "Access Denied" }
                p { "You can only open your own projects." }
                a { href: "{home}", "Back to your projects" }
            }
        }
    }
}
