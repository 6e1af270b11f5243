//! Toast notifications: shared push helper and the rendering host.

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4500;

/// Push a toast onto the shared queue and schedule its auto-dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, toast: Toast) {
    let id = toast.id;
    toasts.update(|state| {
        state.push(toast);
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed-corner stack rendering the toast queue.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Info => "toast",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <div class="toast__body">
                                    <span class="toast__title">{toast.title}</span>
                                    <span class="toast__message">{toast.message}</span>
                                </div>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
