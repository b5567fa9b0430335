//! Panel Component
//!
//! Titled card wrapping one section of the page.

use leptos::prelude::*;

#[component]
pub fn Panel(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel-title">{title}</h2>
            {children()}
        </section>
    }
}
