use api::models::project_path;
use dioxus::prelude::*;
use store::Project;

use super::Layout;

#[component]
fn Source(label: String, text: String) -> Element {
    rsx! {
        section { class: "source",
            h2 { "{label}" }
            pre { code { "{text}" } }
        }
    }
}

/// Public read-only listing of the three source files.
#[component]
pub fn CodeView(owner: String, project: Project) -> Element {
    let name = project.project_name.clone();
    let files = project.files.clone();
    let path = project_path(&owner, &name);
    let share = format!("{path}/share");
    let download = format!("{path}/download");

    rsx! {
        Layout { heading: name.clone(),
            div { class: "toolbar",
                h1 { "{name}" }
                div { class: "toolbar-actions",
                    a { href: "{download}", "Download" }
                    a { href: "{share}", "Back to preview" }
                }
            }
            Source { label: "HTML".to_string(), text: files.html }
            Source { label: "CSS".to_string(), text: files.css }
            Source { label: "JavaScript".to_string(), text: files.javascript }
        }
    }
}
