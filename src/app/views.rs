use serde::Serialize;

use crate::domain::user::User;
use crate::domain::view::View;

const PLACEHOLDER_MESSAGE: &str = "This section is under development";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewContent {
    Login,
    Screen { view: View },
    Placeholder { view: View, title: String, message: &'static str },
}

/// Maps a requested view id to what should be rendered. Without a session
/// every id resolves to the login screen.
pub fn select(id: &str, user: Option<&User>) -> ViewContent {
    if user.is_none() {
        return ViewContent::Login;
    }

    let view = View::from_id(id);
    if view.is_placeholder() {
        ViewContent::Placeholder {
            view,
            title: format!("{} View", capitalize(view.id())),
            message: PLACEHOLDER_MESSAGE,
        }
    } else {
        ViewContent::Screen { view }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Role;

    fn user() -> User {
        User {
            id: "1".into(),
            name: "John Doe".into(),
            email: "station@metro.example".into(),
            role: Role::StationController,
            department: "Operations".into(),
            avatar: None,
        }
    }

    #[test]
    fn signed_out_always_gets_login() {
        assert_eq!(select("documents", None), ViewContent::Login);
        assert_eq!(select("settings", None), ViewContent::Login);
    }

    #[test]
    fn known_views_render_their_screen() {
        let user = user();
        assert_eq!(
            select("knowledge-graph", Some(&user)),
            ViewContent::Screen {
                view: View::KnowledgeGraph
            }
        );
        assert_eq!(
            select("nowhere", Some(&user)),
            ViewContent::Screen {
                view: View::Dashboard
            }
        );
    }

    #[test]
    fn unfinished_views_render_placeholder() {
        let user = user();
        let ViewContent::Placeholder { title, message, .. } = select("analytics", Some(&user)) else {
            panic!("expected placeholder");
        };
        assert_eq!(title, "Analytics View");
        assert_eq!(message, "This section is under development");
    }
}
