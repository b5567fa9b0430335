//! Essay Ideas Panel Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Panel;
use crate::context::use_backend;
use crate::store::{store_finish_ideas, use_coach_store, CoachStateStoreFields};

/// Topic input with a generated idea list
#[component]
pub fn IdeasPanel() -> impl IntoView {
    let store = use_coach_store();
    let api = use_backend();

    let generate = move |_| {
        let api = api.clone();
        let topic = store.idea_topic().get_untracked();
        spawn_local(async move {
            store_finish_ideas(&store, api.generate_ideas(&topic).await);
        });
    };

    view! {
        <Panel title="Essay Ideas (IDP-style brainstorming)">
            <div class="inline-form">
                <input
                    class="input grow"
                    prop:value=move || store.idea_topic().get()
                    on:input=move |ev| store.idea_topic().set(event_target_value(&ev))
                />
                <button class="btn-primary" on:click=generate>"Generate"</button>
            </div>
            <ul class="card-list">
                {move || store.ideas().get().into_iter().map(|idea| view! {
                    <li class="card-item">{idea}</li>
                }).collect_view()}
            </ul>
        </Panel>
    }
}
