//! Editor for visitors without an account. Same panes and live preview as the
//! project editor, with nothing to save.

use dioxus::prelude::*;
use store::{combine_document, preview::SANDBOX, ProjectFiles};

use super::editor::Pane;
use super::Layout;

#[component]
pub fn Playground() -> Element {
    let files = ProjectFiles::playground();
    let document = combine_document(&files);

    rsx! {
        Layout { heading: "Code editor".to_string(),
            section { class: "editor",
                div { class: "toolbar",
                    div {
                        h1 { "Code editor" }
                        p { class: "description", "Sign in to keep your work." }
                    }
                    div { class: "toolbar-actions",
                        a { href: "/", "Sign in" }
                    }
                }
                div { class: "panes",
                    Pane {
                        id: "html".to_string(),
                        caption: "HTML".to_string(),
                        source: files.html,
                    }
                    Pane {
                        id: "css".to_string(),
                        caption: "CSS".to_string(),
                        source: files.css,
                    }
                    Pane {
                        id: "javascript".to_string(),
                        caption: "JavaScript".to_string(),
                        source: files.javascript,
                    }
                }
                iframe { id: "preview", class: "preview", "sandbox": SANDBOX, "title": "Preview", "srcdoc": "{document}" }
            }
            script { src: "/assets/editor.js" }
        }
    }
}
