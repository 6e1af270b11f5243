//! Admin page: user role management table.

use leptos::prelude::*;

use crate::components::toast_host::show_toast;
use crate::net::api;
use crate::net::types::Role;
use crate::state::toasts::{Toast, ToastState};
use crate::state::users::AdminUsersState;

/// User table for admins. Role selects edit a client-only shadow value;
/// nothing reaches the backend until the row's Save is clicked, and a
/// reload (or navigating away and back) discards pending edits.
#[component]
pub fn AdminPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let users = RwSignal::new(AdminUsersState::default());

    let load = move || {
        users.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match api::fetch_users().await {
                Ok(list) => users.update(|state| state.set_loaded(list)),
                Err(reason) => {
                    users.update(|state| state.loading = false);
                    show_toast(toasts, Toast::error("Failed to load users", reason));
                }
            }
        });
    };

    Effect::new(move || load());

    let on_save = move |user_id: String| {
        let row = users.with_untracked(|state| {
            state
                .rows
                .iter()
                .find(|row| row.user.id == user_id)
                .map(|row| (row.selected_role, row.saving, row.has_unsaved_changes()))
        });
        let Some((role, saving, unsaved)) = row else {
            return;
        };
        if saving || !unsaved {
            return;
        }
        users.update(|state| state.begin_save(&user_id));
        leptos::task::spawn_local(async move {
            match api::update_user_role(&user_id, role).await {
                Ok(updated) => {
                    users.update(|state| state.finish_save(updated));
                    show_toast(
                        toasts,
                        Toast::info("Role updated", "User role has been changed and saved."),
                    );
                }
                Err(reason) => {
                    users.update(|state| state.fail_save(&user_id));
                    show_toast(toasts, Toast::error("Failed to update role", reason));
                }
            }
        });
    };

    view! {
        <div class="admin">
            <header class="admin__header">
                <h1>"User Role Management"</h1>
                <p class="admin__subtitle">"Manage team member roles and permissions"</p>
            </header>

            <div class="admin__stats">
                <div class="stat-card">
                    <span class="stat-card__label">"Total Users"</span>
                    <span class="stat-card__value">{move || users.with(|state| state.rows.len())}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Administrators"</span>
                    <span class="stat-card__value">{move || users.with(AdminUsersState::admin_count)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Regular Users"</span>
                    <span class="stat-card__value">{move || users.with(AdminUsersState::user_count)}</span>
                </div>
            </div>

            {move || {
                let state = users.get();
                if state.loading {
                    view! { <p class="admin__placeholder">"Loading users..."</p> }.into_any()
                } else if state.rows.is_empty() {
                    view! {
                        <div class="admin__empty">
                            <h3>"No users found"</h3>
                            <p>"Users will appear here once they sign up."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <table class="admin__table">
                            <thead>
                                <tr>
                                    <th>"User Email"</th>
                                    <th>"Current Role"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .rows
                                    .iter()
                                    .map(|row| {
                                        let select_id = row.user.id.clone();
                                        let save_id = row.user.id.clone();
                                        let saving = row.saving;
                                        let unsaved = row.has_unsaved_changes();
                                        let selected = row.selected_role;
                                        let badge = match row.user.role {
                                            Role::Admin => "badge badge--admin",
                                            Role::User => "badge",
                                        };
                                        let save_label = if saving {
                                            "Saving..."
                                        } else if unsaved {
                                            "Save"
                                        } else {
                                            "Saved"
                                        };
                                        view! {
                                            <tr>
                                                <td class="admin__email">{row.user.email.clone()}</td>
                                                <td>
                                                    <span class=badge>{row.user.role.label()}</span>
                                                </td>
                                                <td class="admin__actions">
                                                    <select on:change=move |ev| {
                                                        let role = Role::parse(&event_target_value(&ev));
                                                        users.update(|state| state.select_role(&select_id, role));
                                                    }>
                                                        <option value="user" selected={selected == Role::User}>
                                                            "User"
                                                        </option>
                                                        <option value="admin" selected={selected == Role::Admin}>
                                                            "Admin"
                                                        </option>
                                                    </select>
                                                    <button
                                                        class="btn btn--small"
                                                        disabled={saving || !unsaved}
                                                        on:click=move |_| on_save(save_id.clone())
                                                    >
                                                        {save_label}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
