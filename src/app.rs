//! Root application component with routing, context providers, and route
//! guards.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::toast_host::ToastHost;
use crate::pages::{admin::AdminPage, dashboard::DashboardPage, login::AuthPage};
use crate::session::AuthSession;
use crate::state::guard::{self, RouteDecision};
use crate::state::toasts::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session handle and toast queue, restores the persisted
/// session once on startup, and wires the 401 hook to forced logout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AuthSession::provide();
    provide_context(RwSignal::new(ToastState::default()));

    // One-time startup work, browser side only: subscribe to the resource
    // clients' 401 hook, then read the persisted session.
    Effect::new(move || {
        session.install_unauthorized_handler();
        session.restore();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/teamboard.css"/>
        <Title text="Teamboard"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicOnly><AuthPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Protected><Layout><DashboardPage/></Layout></Protected> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <Protected admin_only=true>
                                <Layout>
                                    <AdminPage/>
                                </Layout>
                            </Protected>
                        }
                    }
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}

/// Gate for authenticated routes; `admin_only` additionally requires the
/// admin role. Re-evaluates whenever the session changes, so a forced
/// logout mid-visit bounces straight to the login page.
#[component]
fn Protected(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AuthSession>();

    move || match guard::protected(session.state.get().status(), admin_only) {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Loading => loading_placeholder().into_any(),
        RouteDecision::ToLogin => view! { <Redirect path="/login"/> }.into_any(),
        RouteDecision::ToHome => view! { <Redirect path="/"/> }.into_any(),
    }
}

/// Gate for the login page: already-authenticated sessions go home.
#[component]
fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AuthSession>();

    move || match guard::public_only(session.state.get().status()) {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Loading => loading_placeholder().into_any(),
        RouteDecision::ToLogin | RouteDecision::ToHome => {
            view! { <Redirect path="/"/> }.into_any()
        }
    }
}

fn loading_placeholder() -> impl IntoView {
    view! { <div class="app-loading">"Loading..."</div> }
}
