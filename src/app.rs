//! IELTS Coach Frontend App
//!
//! Root view: owns the store, loads the greeting and reminders on mount,
//! and lays out the panels.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    load_reminders, ErrorToast, GreetingBanner, IdeasPanel, InfoPanel, ReadingPanel, RemindersPanel,
    ScorePanel, WritingPanel,
};
use crate::context::{provide_backend, use_backend};
use crate::store::{store_set_greeting, CoachState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(CoachState::new());
    provide_context(store);
    provide_backend();
    let api = use_backend();

    // Initial loads; greeting failures leave the banner absent
    Effect::new(move |_| {
        let greeting_api = api.clone();
        spawn_local(async move {
            let greeting = greeting_api.greeting().await;
            store_set_greeting(&store, greeting);
        });
        load_reminders(store, api.clone());
    });

    view! {
        <div class="page">
            <div class="container">
                <header class="page-header">
                    <div>
                        <h1>"IELTS Coach"</h1>
                        <p class="tagline">"Blue & white experience inspired by Engnovate"</p>
                    </div>
                    <a href="/test" class="header-link">"Test connection"</a>
                </header>

                <GreetingBanner />
                <ErrorToast />

                <div class="panel-grid">
                    <ScorePanel />
                    <IdeasPanel />
                    <WritingPanel />
                    <ReadingPanel />
                    <RemindersPanel />
                    <InfoPanel />
                </div>

                <footer class="page-footer">
                    "Built for your IELTS journey. Integrations: Google Sheets + n8n guidance below."
                </footer>
            </div>
        </div>
    }
}
