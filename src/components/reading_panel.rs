//! Reading Passage Panel Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{show_alert, Panel};
use crate::context::use_backend;
use crate::format::display_value;
use crate::store::{store_finish_passage, use_coach_store, CoachStateStoreFields};

/// Generates a sample passage and shows it below the button
#[component]
pub fn ReadingPanel() -> impl IntoView {
    let store = use_coach_store();
    let api = use_backend();

    let create_sample = move |_| {
        let api = api.clone();
        spawn_local(async move {
            if let Some(summary) = store_finish_passage(&store, api.create_passage().await) {
                show_alert(&summary);
            }
        });
    };

    view! {
        <Panel title="Reading Passages (Cambridge-like)">
            <button class="btn-outline" on:click=create_sample>"Create Sample"</button>
            {move || store.passage().get().map(|passage| view! {
                <article class="passage">
                    <h3 class="strong">{passage.title}</h3>
                    {passage.paragraphs.iter().map(|paragraph| view! {
                        <p>{display_value(paragraph)}</p>
                    }).collect_view()}
                </article>
            })}
        </Panel>
    }
}
