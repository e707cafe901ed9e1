//! Overlay rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Fixed-position stack of notifications, newest at the bottom. Clicking
/// a toast dismisses it early; auto-expiry is handled where toasts are
/// pushed.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.class())
                            on:click=move |_| toasts.update(|s| s.dismiss(id))
                        >
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
