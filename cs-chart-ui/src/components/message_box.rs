//! Styled message boxes for errors, warnings and confirmations.

use cs_core::Notice;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageLevel {
    Error,
    Warning,
    Success,
    Info,
}

impl MessageLevel {
    fn style(self) -> &'static str {
        match self {
            MessageLevel::Error => "background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A;",
            MessageLevel::Warning => "background: #FFF8E1; color: #8D6E00; border: 1px solid #FFE082;",
            MessageLevel::Success => "background: #E8F5E9; color: #2E7D32; border: 1px solid #A5D6A7;",
            MessageLevel::Info => "background: #E3F2FD; color: #1565C0; border: 1px solid #90CAF9;",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MessageBoxProps {
    pub level: MessageLevel,
    pub message: String,
}

/// Displays a message in a box colored by level.
#[component]
pub fn MessageBox(props: MessageBoxProps) -> Element {
    let style = format!("padding: 12px 16px; margin: 8px 0; border-radius: 4px; {}", props.level.style());
    rsx! {
        div {
            style: "{style}",
            "{props.message}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Notice,
}

/// Shows the message produced by the last event.
#[component]
pub fn NoticeBanner(props: NoticeBannerProps) -> Element {
    let level = if props.notice.is_error() {
        MessageLevel::Error
    } else {
        MessageLevel::Success
    };
    rsx! {
        MessageBox { level, message: props.notice.message().to_string() }
    }
}
