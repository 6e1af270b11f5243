//! Card for a single announcement with author-gated edit/delete actions.

use leptos::prelude::*;

use crate::net::types::Announcement;
use crate::session::AuthSession;
use crate::state::announcements::can_modify;
use crate::util::confirm::confirm;
use crate::util::format::announcement_date;

/// One announcement in the dashboard grid. Edit/delete controls only render
/// for the author or an admin; `busy` disables them while this row's delete
/// is outstanding.
#[component]
pub fn AnnouncementCard(
    announcement: Announcement,
    on_edit: Callback<Announcement>,
    on_delete: Callback<String>,
    #[prop(optional)] busy: bool,
) -> impl IntoView {
    let session = expect_context::<AuthSession>();

    let date = announcement_date(&announcement.created_at);
    let title = announcement.title.clone();
    let content = announcement.content.clone();
    let author = announcement.author_email.clone();

    let actions = move || {
        if !can_modify(session.state.get().user.as_ref(), &announcement) {
            return None;
        }
        let edit_target = announcement.clone();
        let delete_id = announcement.id.clone();
        Some(view! {
            <span class="announcement-card__actions">
                <button
                    class="btn btn--small"
                    disabled=busy
                    on:click=move |_| on_edit.run(edit_target.clone())
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    disabled=busy
                    on:click=move |_| {
                        if confirm("Are you sure you want to delete this announcement?") {
                            on_delete.run(delete_id.clone());
                        }
                    }
                >
                    "Delete"
                </button>
            </span>
        })
    };

    view! {
        <article class="announcement-card">
            <header class="announcement-card__header">
                <h3 class="announcement-card__title">{title}</h3>
                {actions}
            </header>
            <p class="announcement-card__content">{content}</p>
            <footer class="announcement-card__footer">
                <span class="announcement-card__author">{author}</span>
                <time class="announcement-card__date">{date}</time>
            </footer>
        </article>
    }
}
