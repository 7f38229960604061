use api::UserInfo;
use dioxus::prelude::*;

/// Shared page chrome: head, top bar with the account menu, and the main area.
#[component]
pub(super) fn Layout(heading: String, user: Option<UserInfo>, children: Element) -> Element {
    let account = match user {
        Some(user) => {
            let home = user.home_path();
            let avatar = user.image.clone().unwrap_or_default();
            rsx! {
                nav { class: "account",
                    if !avatar.is_empty() {
                        img { class: "avatar", src: "{avatar}", alt: "{user.name}" }
                    }
                    a { href: "{home}", "{user.name}" }
                    form { method: "post", action: "/actions/logout",
                        button { class: "link", r#type: "submit", "Sign out" }
                    }
                }
            }
        }
        None => rsx! {
            nav { class: "account",
                a { href: "/code-editor", "Try the editor" }
                a { href: "/", "Sign in" }
            }
        },
    };

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{heading} · CodeVault" }
            link { rel: "stylesheet", href: "/assets/main.css" }
        }
        body {
            header { class: "topbar",
                a { class: "brand", href: "/", "CodeVault" }
                {account}
            }
            main { {children} }
        }
    }
}
