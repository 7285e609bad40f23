//! Message banners for errors and neutral notices.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => "text-center text-red-500",
        AlertKind::Info => "text-center text-gray-700",
    };

    view! { <p class=class role="alert">{message}</p> }
}
