//! Score Panel Component
//!
//! Records a module score and asks the backend for weak modules.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{show_alert, Panel};
use crate::context::use_backend;
use crate::format::weak_modules_line;
use crate::models::Module;
use crate::store::{store_finish_save_score, store_finish_weaknesses, use_coach_store, CoachStateStoreFields};

#[component]
pub fn ScorePanel() -> impl IntoView {
    let store = use_coach_store();
    let api = use_backend();

    let save_score = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let draft = store.score().get_untracked();
            spawn_local(async move {
                if let Some(message) = store_finish_save_score(&store, api.save_score(&draft).await) {
                    show_alert(&message);
                }
            });
        }
    };

    let analyze = move |_| {
        let api = api.clone();
        let user_id = store.score().read_untracked().user_id.clone();
        spawn_local(async move {
            store_finish_weaknesses(&store, api.weaknesses(&user_id).await);
        });
    };

    view! {
        <Panel title="Record a Score (tracks improvement e.g., 28 → 31)">
            <div class="form-grid two">
                <input
                    class="input"
                    placeholder="User ID (optional)"
                    prop:value=move || store.score().read().user_id.clone()
                    on:input=move |ev| { store.score().write().user_id = event_target_value(&ev); }
                />
                <select
                    class="input"
                    prop:value=move || store.score().read().module.as_str()
                    on:change=move |ev| {
                        if let Some(module) = Module::parse(&event_target_value(&ev)) {
                            store.score().write().module = module;
                        }
                    }
                >
                    {Module::ALL.iter().map(|module| view! {
                        <option value=module.as_str()>{module.as_str()}</option>
                    }).collect_view()}
                </select>
                <input
                    class="input"
                    placeholder="Score (0-9)"
                    prop:value=move || store.score().read().score.clone()
                    on:input=move |ev| { store.score().write().score = event_target_value(&ev); }
                />
                <input
                    class="input"
                    placeholder="Note"
                    prop:value=move || store.score().read().note.clone()
                    on:input=move |ev| { store.score().write().note = event_target_value(&ev); }
                />
            </div>
            <div class="actions">
                <button class="btn-primary" on:click=save_score>"Save"</button>
                <button class="btn-outline" on:click=analyze>"Analyze Weaknesses"</button>
            </div>
            <Show when=move || !store.weaknesses().read().weak_modules.is_empty()>
                <div class="weaknesses">
                    <p class="strong">{move || weak_modules_line(&store.weaknesses().read())}</p>
                    <ul class="suggestions">
                        {move || store.weaknesses().get().suggestions.into_iter().map(|suggestion| view! {
                            <li>{suggestion}</li>
                        }).collect_view()}
                    </ul>
                </div>
            </Show>
        </Panel>
    }
}
