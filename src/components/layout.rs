//! Application chrome: sticky top navigation wrapped around page content.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::show_toast;
use crate::session::AuthSession;
use crate::state::toasts::{Toast, ToastState};

/// Page shell with the Teamboard nav bar: brand, current user, admin-panel
/// entry, and logout.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Pick up role changes made by an admin since this session was cached.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            session.refresh().await;
        });
    });

    let email = move || {
        session
            .state
            .get()
            .email()
            .map(str::to_owned)
            .unwrap_or_default()
    };
    let initial = move || {
        email()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default()
    };

    let on_admin = {
        let navigate = navigate.clone();
        move |_| {
            if session.is_admin() {
                navigate("/admin", NavigateOptions::default());
            } else {
                show_toast(
                    toasts,
                    Toast::error("Access denied", "You don't have admin privileges."),
                );
            }
        }
    };

    let on_logout = move |_| {
        session.log_out();
        show_toast(
            toasts,
            Toast::info("Logged out", "You have been logged out of Teamboard."),
        );
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="layout">
            <nav class="layout__nav">
                <a class="layout__brand" href="/">"Teamboard"</a>
                <div class="layout__user">
                    <span class="layout__email">{email}</span>
                    <span class="layout__avatar">{initial}</span>
                    <button class="btn" on:click=on_admin>"Admin Panel"</button>
                    <button class="btn" on:click=on_logout>"Logout"</button>
                </div>
            </nav>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
