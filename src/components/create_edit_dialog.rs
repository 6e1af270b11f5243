//! Modal dialog for creating or editing an announcement.

use leptos::prelude::*;

use crate::net::types::Announcement;
use crate::state::announcements::Draft;

/// Create/edit form over externally owned draft signals. A blank title or
/// content disables submission, so nothing invalid ever reaches `on_save`;
/// `saving` disables the whole footer while the request is outstanding.
#[component]
pub fn CreateEditDialog(
    editing: RwSignal<Option<Announcement>>,
    title: RwSignal<String>,
    content: RwSignal<String>,
    saving: RwSignal<bool>,
    on_save: Callback<(String, String)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = move || editing.with(|editing| editing.is_some());

    let draft_valid = move || {
        Draft { title: title.get(), content: content.get() }.is_valid()
    };

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let draft = Draft {
            title: title.get_untracked(),
            content: content.get_untracked(),
        };
        if let Some((title, content)) = draft.normalized() {
            on_save.run((title, content));
        }
    };

    let heading = move || {
        if is_edit() { "Edit Announcement" } else { "Create New Announcement" }
    };
    let action_label = move || {
        if saving.get() {
            if is_edit() { "Updating..." } else { "Creating..." }
        } else if is_edit() {
            "Update Announcement"
        } else {
            "Create Announcement"
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Content"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button
                        class="btn"
                        disabled=move || saving.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !draft_valid() || saving.get()
                        on:click=move |_| submit()
                    >
                        {action_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
