use api::models::project_path;
use dioxus::prelude::*;
use store::{preview::SANDBOX, Project};

use super::Layout;

/// Public read-only view: the rendered project in a sandboxed frame.
#[component]
pub fn Share(owner: String, project: Project) -> Element {
    let name = project.project_name.clone();
    let description = project.project_description.clone();
    let path = project_path(&owner, &name);
    let raw = format!("{path}/raw");
    let code = format!("{path}/view-code");

    rsx! {
        Layout { heading: name.clone(),
            section { class: "share",
                div { class: "toolbar",
                    div {
                        h1 { "{name}" }
                        p { class: "description", "by {owner} · {description}" }
                    }
                    div { class: "toolbar-actions",
                        a { href: "{code}", "View code" }
                    }
                }
                iframe { class: "preview full", "sandbox": SANDBOX, "title": "{name}", src: "{raw}" }
            }
        }
    }
}
