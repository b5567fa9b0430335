//! Reminders Panel Component
//!
//! Adds study reminders and lists the user's reminders.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BrowserClient;
use crate::components::{show_alert, Panel};
use crate::context::use_backend;
use crate::format::reminder_details;
use crate::models::ReminderCategory;
use crate::store::{
    store_finish_add_reminder, store_finish_reminders, use_coach_store, CoachStateStoreFields, CoachStore,
};

/// Reload the reminder list for the user in the reminder form
pub fn load_reminders(store: CoachStore, api: BrowserClient) {
    let user_id = store.reminder().read_untracked().user_id.clone();
    spawn_local(async move {
        store_finish_reminders(&store, api.list_reminders(&user_id).await);
    });
}

#[component]
pub fn RemindersPanel() -> impl IntoView {
    let store = use_coach_store();
    let api = use_backend();

    let add = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let draft = store.reminder().get_untracked();
            spawn_local(async move {
                if let Some(message) = store_finish_add_reminder(&store, api.add_reminder_and_reload(&draft).await) {
                    show_alert(&message);
                }
            });
        }
    };

    let refresh = move |_| load_reminders(store, api.clone());

    view! {
        <Panel title="Reminders & Deadlines">
            <div class="form-grid two">
                <input
                    class="input"
                    placeholder="User ID (optional)"
                    prop:value=move || store.reminder().read().user_id.clone()
                    on:input=move |ev| { store.reminder().write().user_id = event_target_value(&ev); }
                />
                <input
                    class="input"
                    type="datetime-local"
                    prop:value=move || store.reminder().read().due_date.clone()
                    on:input=move |ev| { store.reminder().write().due_date = event_target_value(&ev); }
                />
                <input
                    class="input"
                    placeholder="Title"
                    prop:value=move || store.reminder().read().title.clone()
                    on:input=move |ev| { store.reminder().write().title = event_target_value(&ev); }
                />
                <select
                    class="input"
                    prop:value=move || store.reminder().read().category.as_str()
                    on:change=move |ev| {
                        if let Some(category) = ReminderCategory::parse(&event_target_value(&ev)) {
                            store.reminder().write().category = category;
                        }
                    }
                >
                    {ReminderCategory::ALL.iter().map(|category| view! {
                        <option value=category.as_str()>{category.as_str()}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="actions">
                <button class="btn-primary" on:click=add>"Add"</button>
                <button class="btn-outline" on:click=refresh>"Refresh"</button>
            </div>
            <ul class="card-list">
                <For
                    each=move || store.reminders().get()
                    key=|reminder| reminder.id.clone()
                    children=move |reminder| {
                        let details = reminder_details(&reminder);
                        view! {
                            <li class="card-item">
                                <span class="strong">{reminder.title}</span>
                                {details}
                            </li>
                        }
                    }
                />
            </ul>
        </Panel>
    }
}
