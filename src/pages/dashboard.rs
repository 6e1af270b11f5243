//! Dashboard page listing announcements with create, edit, and delete.

use leptos::prelude::*;

use crate::components::announcement_card::AnnouncementCard;
use crate::components::create_edit_dialog::CreateEditDialog;
use crate::components::toast_host::show_toast;
use crate::net::api;
use crate::net::types::Announcement;
use crate::state::announcements::AnnouncementsState;
use crate::state::toasts::{Toast, ToastState};

/// Announcement board. The list is fetched on mount and re-fetched after
/// every successful mutation; nothing is patched locally.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let announcements = RwSignal::new(AnnouncementsState::default());

    // Create/edit dialog state.
    let show_dialog = RwSignal::new(false);
    let editing = RwSignal::new(None::<Announcement>);
    let draft_title = RwSignal::new(String::new());
    let draft_content = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let load = move || {
        announcements.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match api::fetch_announcements().await {
                Ok(items) => announcements.update(|state| state.set_loaded(items)),
                Err(reason) => {
                    announcements.update(|state| state.loading = false);
                    show_toast(toasts, Toast::error("Failed to load announcements", reason));
                }
            }
        });
    };

    Effect::new(move || load());

    let open_create = move |_| {
        editing.set(None);
        draft_title.set(String::new());
        draft_content.set(String::new());
        show_dialog.set(true);
    };

    let open_edit = Callback::new(move |announcement: Announcement| {
        draft_title.set(announcement.title.clone());
        draft_content.set(announcement.content.clone());
        editing.set(Some(announcement));
        show_dialog.set(true);
    });

    let close_dialog = Callback::new(move |()| {
        show_dialog.set(false);
        editing.set(None);
    });

    let on_save = Callback::new(move |(title, content): (String, String)| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let target = editing.get_untracked();
        leptos::task::spawn_local(async move {
            let result = match &target {
                Some(announcement) => {
                    api::update_announcement(&announcement.id, &title, &content)
                        .await
                        .map(|_| ())
                }
                None => api::create_announcement(&title, &content).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    let toast = if target.is_some() {
                        Toast::info("Announcement updated", "Your changes have been saved.")
                    } else {
                        Toast::info("Announcement created", "Your announcement has been published.")
                    };
                    show_toast(toasts, toast);
                    show_dialog.set(false);
                    editing.set(None);
                    load();
                }
                Err(reason) => {
                    show_toast(toasts, Toast::error("Failed to save announcement", reason));
                }
            }
            saving.set(false);
        });
    });

    let on_delete = Callback::new(move |id: String| {
        if announcements.with_untracked(|state| state.is_deleting(&id)) {
            return;
        }
        announcements.update(|state| state.begin_delete(&id));
        leptos::task::spawn_local(async move {
            match api::delete_announcement(&id).await {
                Ok(_) => {
                    show_toast(
                        toasts,
                        Toast::info("Announcement deleted", "The announcement has been removed."),
                    );
                    load();
                }
                Err(reason) => {
                    show_toast(toasts, Toast::error("Failed to delete announcement", reason));
                }
            }
            announcements.update(|state| state.end_delete(&id));
        });
    });

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <div>
                    <h1>"Announcements"</h1>
                    <p class="dashboard__subtitle">
                        "Stay updated with the latest team news and updates"
                    </p>
                </div>
                <button class="btn btn--primary" on:click=open_create>
                    "+ New Announcement"
                </button>
            </header>

            {move || {
                let state = announcements.get();
                if state.loading {
                    view! { <p class="dashboard__placeholder">"Loading announcements..."</p> }
                        .into_any()
                } else if state.items.is_empty() {
                    view! {
                        <div class="dashboard__empty">
                            <h3>"No announcements yet"</h3>
                            <p>"Be the first to share important news with your team."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="dashboard__grid">
                            {state
                                .items
                                .iter()
                                .map(|announcement| {
                                    let busy = state.is_deleting(&announcement.id);
                                    view! {
                                        <AnnouncementCard
                                            announcement=announcement.clone()
                                            on_edit=open_edit
                                            on_delete=on_delete
                                            busy=busy
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}

            <Show when=move || show_dialog.get()>
                <CreateEditDialog
                    editing=editing
                    title=draft_title
                    content=draft_content
                    saving=saving
                    on_save=on_save
                    on_cancel=close_dialog
                />
            </Show>
        </div>
    }
}
