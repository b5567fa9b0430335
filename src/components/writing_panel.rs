//! Writing Evaluation Panel Component
//!
//! Submits Task 1 / Task 2 writing and shows the estimated band.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Panel;
use crate::context::use_backend;
use crate::models::TaskType;
use crate::store::{store_finish_evaluation, use_coach_store, CoachStateStoreFields};

#[component]
pub fn WritingPanel() -> impl IntoView {
    let store = use_coach_store();
    let api = use_backend();

    let evaluate = move |_| {
        let api = api.clone();
        let draft = store.writing().get_untracked();
        spawn_local(async move {
            store_finish_evaluation(&store, api.evaluate_writing(&draft).await);
        });
    };

    view! {
        <Panel title="Writing Evaluation (Task 1 & 2)">
            <div class="form-stack">
                <div class="form-grid three">
                    <input
                        class="input"
                        placeholder="User ID (optional)"
                        prop:value=move || store.writing().read().user_id.clone()
                        on:input=move |ev| { store.writing().write().user_id = event_target_value(&ev); }
                    />
                    <select
                        class="input"
                        prop:value=move || store.writing().read().task_type.as_str()
                        on:change=move |ev| {
                            if let Some(task_type) = TaskType::parse(&event_target_value(&ev)) {
                                store.writing().write().task_type = task_type;
                            }
                        }
                    >
                        {TaskType::ALL.iter().map(|task_type| view! {
                            <option value=task_type.as_str()>{task_type.as_str()}</option>
                        }).collect_view()}
                    </select>
                    <input
                        class="input"
                        placeholder="Prompt (optional)"
                        prop:value=move || store.writing().read().prompt.clone()
                        on:input=move |ev| { store.writing().write().prompt = event_target_value(&ev); }
                    />
                </div>
                <textarea
                    class="input essay"
                    placeholder="Paste your writing here"
                    prop:value=move || store.writing().read().content.clone()
                    on:input=move |ev| { store.writing().write().content = event_target_value(&ev); }
                ></textarea>
                <button class="btn-primary fit" on:click=evaluate>"Evaluate"</button>
            </div>
            {move || store.evaluation().get().map(|evaluation| view! {
                <div class="evaluation">
                    <p><span class="strong">"Estimated band:"</span>" "{evaluation.estimated_band.to_string()}</p>
                    <p><span class="strong">"Feedback:"</span>" "{evaluation.feedback}</p>
                </div>
            })}
        </Panel>
    }
}
