//! IELTS Info Panel Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{show_alert, Panel};
use crate::context::use_backend;
use crate::store::{store_finish_info, use_coach_store};

#[component]
pub fn InfoPanel() -> impl IntoView {
    let store = use_coach_store();
    let api = use_backend();

    let show_info = move |_| {
        let api = api.clone();
        spawn_local(async move {
            if let Some(message) = store_finish_info(&store, api.info().await) {
                show_alert(&message);
            }
        });
    };

    view! {
        <Panel title="All IELTS Info">
            <button class="btn-outline" on:click=show_info>"Show"</button>
        </Panel>
    }
}
