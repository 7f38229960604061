//! The signed-in user's project list and the new-project form.

use api::{models::project_path, UserInfo};
use dioxus::prelude::*;
use store::Project;

use super::Layout;

#[component]
fn ProjectCard(owner: String, project: Project) -> Element {
    let name = project.project_name.clone();
    let editor = project_path(&owner, &name);
    let share = format!("{editor}/share");

    rsx! {
        li { class: "project-card",
            a { class: "project-name", href: "{editor}", "{name}" }
            p { "{project.project_description}" }
            div { class: "card-actions",
                a { href: "{share}", "Share" }
                form { method: "post", action: "/actions/delete-project",
                    input { r#type: "hidden", name: "project_name", value: "{name}" }
                    button { class: "link danger", r#type: "submit", "Delete" }
                }
            }
        }
    }
}

#[component]
pub fn Dashboard(user: UserInfo, projects: Vec<Project>, error: Option<String>) -> Element {
    let owner = user.name.clone();
    let notice = error.unwrap_or_default();

    rsx! {
        Layout { heading: owner.clone(), user: user,
            h1 { "Your projects" }
            if !notice.is_empty() {
                p { class: "notice error", "{notice}" }
            }
            form { class: "card new-project", method: "post", action: "/actions/create-project",
                h2 { "New project" }
                label { "Name"
                    input { r#type: "text", name: "pname" }
                }
                label { "Description"
                    input { r#type: "text", name: "pdesc" }
                }
                button { class: "primary", r#type: "submit", "Create" }
            }
            if projects.is_empty() {
                p { class: "hint", "No projects yet." }
            }
            ul { class: "projects",
                for project in projects.iter() {
                    ProjectCard {
                        key: "{project.project_name}",
                        owner: owner.clone(),
                        project: project.clone(),
                    }
                }
            }
        }
    }
}
