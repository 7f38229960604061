//! Owner's editor: three source panes, save, live preview, and the
//! rename/delete forms.

use api::{models::project_path, UserInfo};
use dioxus::prelude::*;
use store::{preview::SANDBOX, Project};

use super::Layout;

/// One source pane. The leading newline is eaten by the HTML parser, so
/// content that starts with a newline keeps it.
#[component]
pub(super) fn Pane(id: String, caption: String, source: String) -> Element {
    rsx! {
        div { class: "pane",
            label { "for": "{id}", "{caption}" }
            textarea { id: "{id}", name: "{id}", "spellcheck": "false", "\n{source}" }
        }
    }
}

#[component]
pub fn Editor(user: UserInfo, project: Project) -> Element {
    let name = project.project_name.clone();
    let description = project.project_description.clone();
    let files = project.files.clone();
    let path = project_path(&user.name, &name);
    let share = format!("{path}/share");
    let raw = format!("{path}/raw");
    let download = format!("{path}/download");

    rsx! {
        Layout { heading: name.clone(), user: user,
            section { class: "editor", "data-project": "{name}",
                div { class: "toolbar",
                    div {
                        h1 { "{name}" }
                        p { class: "description", "{description}" }
                    }
                    div { class: "toolbar-actions",
                        span { id: "save-status", class: "hint" }
                        button { id: "save", class: "primary", r#type: "button", "Save" }
                        a { href: "{download}", "Download" }
                        a { href: "{share}", target: "_blank", "Share" }
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
                iframe { id: "preview", class: "preview", "sandbox": SANDBOX, "title": "Preview", src: "{raw}" }
                details { class: "card",
                    summary { "Project settings" }
                    form { method: "post", action: "/actions/rename-project",
                        input { r#type: "hidden", name: "project_name", value: "{name}" }
                        label { "Name"
                            input { r#type: "text", name: "new_project_name", value: "{name}" }
                        }
                        label { "Description"
                            input { r#type: "text", name: "new_project_description", value: "{description}" }
                        }
                        button { r#type: "submit", "Update details" }
                    }
                    form { method: "post", action: "/actions/delete-project",
                        input { r#type: "hidden", name: "project_name", value: "{name}" }
                        button { class: "danger", r#type: "submit", "Delete project" }
                    }
                }
            }
            script { src: "/assets/editor.js" }
        }
    }
}
