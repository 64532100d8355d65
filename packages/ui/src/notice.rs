use dioxus::prelude::*;

/// An inline status line under a form.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
    Info(String),
}

impl Notice {
    pub fn success(msg: impl Into<String>) -> Self {
        Notice::Success(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Notice::Error(msg.into())
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Notice::Info(msg.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(s) | Notice::Error(s) | Notice::Info(s) => s,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "notice notice--success",
            Notice::Error(_) => "notice notice--error",
            Notice::Info(_) => "notice notice--info",
        }
    }
}

/// Renders an optional [`Notice`]; renders nothing for `None`.
#[component]
pub fn NoticeLine(notice: Option<Notice>) -> Element {
    match notice {
        Some(n) => rsx! {
            p { class: n.class(), "{n.text()}" }
        },
        None => rsx! {},
    }
}
