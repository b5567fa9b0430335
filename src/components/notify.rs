//! Notifications
//!
//! Blocking alerts, the greeting banner, and the error toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_dismiss_error, store_expire_error, use_coach_store, CoachStateStoreFields};

/// How long an error stays visible before dismissing itself
const ERROR_TOAST_MS: u32 = 6_000;

/// Show a blocking browser alert
pub fn show_alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::warn!("[APP] alert failed: {:?}", e);
    }
}

/// Backend greeting; renders nothing while absent
#[component]
pub fn GreetingBanner() -> impl IntoView {
    let store = use_coach_store();

    move || {
        store.greeting().get().map(|message| view! {
            <div class="greeting-banner">{message}</div>
        })
    }
}

/// Last action failure, dismissed by click or after a timeout
#[component]
pub fn ErrorToast() -> impl IntoView {
    let store = use_coach_store();

    Effect::new(move |_| {
        let seq = store.error_seq().get();
        if store.error().get_untracked().is_some() {
            spawn_local(async move {
                TimeoutFuture::new(ERROR_TOAST_MS).await;
                // A newer error restarts its own timer
                store_expire_error(&store, seq);
            });
        }
    });

    move || {
        store.error().get().map(|message| view! {
            <div class="error-toast" role="alert">
                <span>{message}</span>
                <button class="toast-close" on:click=move |_| store_dismiss_error(&store)>"×"</button>
            </div>
        })
    }
}
