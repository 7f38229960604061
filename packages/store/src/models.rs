//! # Domain models for users and their projects
//!
//! One [`UserDocument`] is stored per account. It embeds the user's projects as an
//! ordered list, so every project operation is a read-modify-write of the whole
//! document. These types are `Serialize + Deserialize` and their field names are the
//! JSON wire names used by the HTTP API.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserDocument`] | An account: URL-facing `name`, unique `email`, optional avatar `image`, optional Argon2 `password_hash`, and the embedded `projects`. |
//! | [`Project`] | A named bundle of one markup, one stylesheet and one script blob. |
//! | [`ProjectFiles`] | The three text blobs. [`Default`] yields the starter page every new project gets; [`ProjectFiles::playground`] seeds the anonymous editor. |
//! | [`FilesUpdate`] | A partial overwrite of [`ProjectFiles`]; `None` fields are left untouched. |
//! | [`NewUser`] | Input to [`crate::Repository::register`]. |

use serde::{Deserialize, Serialize};

pub const DEFAULT_HTML: &str = "<!DOCTYPE html><html><head><title>My Web Project</title></head><body><h1>Welcome to My Website</h1><p>Start editing to see your changes!</p></body></html>";
pub const DEFAULT_CSS: &str = "body {margin: 0;background: black;}h1 {color: white;}";
pub const DEFAULT_JAVASCRIPT: &str = "console.log('Hello World!')";

/// Route segments a username may not take, since they are served by the app itself.
pub const RESERVED_NAMES: &[&str] = &[
    "api",
    "actions",
    "assets",
    "code-editor",
    "login",
    "logout",
    "register",
];

/// A user account together with its embedded project list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    /// Username, used as the owner segment in project URLs.
    pub name: String,
    /// Unique, lowercased email address.
    pub email: String,
    /// Avatar image URL.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl UserDocument {
    /// First project with the given name.
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.project_name == name)
    }

    /// Index of the first project with the given name.
    pub fn project_index(&self, name: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.project_name == name)
    }
}

/// A web project: name, description and the three source blobs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_name: String,
    pub project_description: String,
    #[serde(default)]
    pub files: ProjectFiles,
}

impl Project {
    /// A new project with the starter files.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            project_name: name.into(),
            project_description: description.into(),
            files: ProjectFiles::default(),
        }
    }
}

/// The markup, stylesheet and script of a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectFiles {
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub css: String,
    #[serde(default)]
    pub javascript: String,
}

impl Default for ProjectFiles {
    fn default() -> Self {
        Self {
            html: DEFAULT_HTML.to_string(),
            css: DEFAULT_CSS.to_string(),
            javascript: DEFAULT_JAVASCRIPT.to_string(),
        }
    }
}

impl ProjectFiles {
    /// Contents of the editor offered to visitors without an account.
    pub fn playground() -> Self {
        Self {
            html: "<h1>Hello, World!</h1>".to_string(),
            css: "* { background-color: black; }\nh1 { color: white; }".to_string(),
            javascript: "console.log('Hello, World!');".to_string(),
        }
    }
}

/// Partial update of a project's files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilesUpdate {
    pub html: Option<String>,
    pub css: Option<String>,
    pub javascript: Option<String>,
}

impl FilesUpdate {
    /// Overwrite the provided blobs in `files`.
    pub fn apply(self, files: &mut ProjectFiles) {
        if let Some(html) = self.html {
            files.html = html;
        }
        if let Some(css) = self.css {
            files.css = css;
        }
        if let Some(javascript) = self.javascript {
            files.javascript = javascript;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_none() && self.css.is_none() && self.javascript.is_none()
    }
}

/// Registration input. `password_hash` is already hashed by the caller.
#[derive(Clone, Debug)]
pub struct NewUser {
    /// Full display name; the username is its first word.
    pub full_name: String,
    pub email: String,
    pub image: Option<String>,
    pub password_hash: Option<String>,
}

/// Derive a username from a full display name: its first whitespace-separated word.
pub fn username_from(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or("")
}
