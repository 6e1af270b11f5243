//! Sign-in / sign-up page with tabbed forms.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::show_toast;
use crate::net::types::Role;
use crate::session::AuthSession;
use crate::state::toasts::{Toast, ToastState};

/// Which form the visitor is looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthTab {
    #[default]
    SignIn,
    SignUp,
}

fn tab_class(active: bool) -> &'static str {
    if active { "auth-page__tab auth-page__tab--active" } else { "auth-page__tab" }
}

/// Authentication page. Submission disables itself while a request is
/// outstanding — that is the only guard against double submits.
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let tab = RwSignal::new(AuthTab::SignIn);
    let busy = RwSignal::new(false);

    let signin_email = RwSignal::new(String::new());
    let signin_password = RwSignal::new(String::new());

    let signup_email = RwSignal::new(String::new());
    let signup_password = RwSignal::new(String::new());
    let signup_role = RwSignal::new(Role::User);

    let on_sign_in = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let email = signin_email.get_untracked().trim().to_owned();
            let password = signin_password.get_untracked();
            if email.is_empty() || password.is_empty() {
                return;
            }
            busy.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.sign_in(&email, &password).await {
                    Ok(user) => {
                        show_toast(
                            toasts,
                            Toast::info("Welcome back!", format!("Signed in as {}", user.email)),
                        );
                        navigate("/", NavigateOptions::default());
                    }
                    Err(reason) => show_toast(toasts, Toast::error("Sign in failed", reason)),
                }
                busy.set(false);
            });
        }
    };

    let on_sign_up = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let email = signup_email.get_untracked().trim().to_owned();
            let password = signup_password.get_untracked();
            let role = signup_role.get_untracked();
            if email.is_empty() || password.is_empty() {
                return;
            }
            busy.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.sign_up(&email, &password, role).await {
                    Ok(user) => {
                        show_toast(
                            toasts,
                            Toast::info(
                                "Account created!",
                                format!("Welcome to Teamboard, {}", user.email),
                            ),
                        );
                        navigate("/", NavigateOptions::default());
                    }
                    Err(reason) => show_toast(toasts, Toast::error("Sign up failed", reason)),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1 class="auth-page__brand">"Teamboard"</h1>
                <p class="auth-page__tagline">
                    "Connect with your team through internal announcements"
                </p>

                <div class="auth-page__tabs">
                    <button
                        class=move || tab_class(tab.get() == AuthTab::SignIn)
                        on:click=move |_| tab.set(AuthTab::SignIn)
                    >
                        "Sign In"
                    </button>
                    <button
                        class=move || tab_class(tab.get() == AuthTab::SignUp)
                        on:click=move |_| tab.set(AuthTab::SignUp)
                    >
                        "Sign Up"
                    </button>
                </div>

                {move || match tab.get() {
                    AuthTab::SignIn => {
                        view! {
                            <form class="auth-page__form" on:submit=on_sign_in.clone()>
                                <label class="auth-page__label">
                                    "Email"
                                    <input
                                        class="auth-page__input"
                                        type="email"
                                        placeholder="Enter your email"
                                        prop:value=move || signin_email.get()
                                        on:input=move |ev| signin_email.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="auth-page__label">
                                    "Password"
                                    <input
                                        class="auth-page__input"
                                        type="password"
                                        placeholder="Enter your password"
                                        prop:value=move || signin_password.get()
                                        on:input=move |ev| signin_password.set(event_target_value(&ev))
                                    />
                                </label>
                                <button
                                    class="btn btn--primary auth-page__submit"
                                    type="submit"
                                    disabled=move || busy.get()
                                >
                                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                                </button>
                            </form>
                        }
                            .into_any()
                    }
                    AuthTab::SignUp => {
                        view! {
                            <form class="auth-page__form" on:submit=on_sign_up.clone()>
                                <label class="auth-page__label">
                                    "Email"
                                    <input
                                        class="auth-page__input"
                                        type="email"
                                        placeholder="Enter your email"
                                        prop:value=move || signup_email.get()
                                        on:input=move |ev| signup_email.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="auth-page__label">
                                    "Password"
                                    <input
                                        class="auth-page__input"
                                        type="password"
                                        placeholder="Create a password"
                                        prop:value=move || signup_password.get()
                                        on:input=move |ev| signup_password.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="auth-page__label">
                                    "Role"
                                    <select
                                        class="auth-page__input"
                                        on:change=move |ev| {
                                            signup_role.set(Role::parse(&event_target_value(&ev)));
                                        }
                                    >
                                        <option value="user" selected=move || signup_role.get() == Role::User>
                                            "User"
                                        </option>
                                        <option value="admin" selected=move || signup_role.get() == Role::Admin>
                                            "Admin"
                                        </option>
                                    </select>
                                </label>
                                <button
                                    class="btn btn--primary auth-page__submit"
                                    type="submit"
                                    disabled=move || busy.get()
                                >
                                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                                </button>
                            </form>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
