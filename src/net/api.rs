//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every wrapper resolves to `Result<T, String>` (or `Option` for the
//! identity probe) where the error is already a human-readable message, so
//! UI code can toast it without a try/catch-style dance. A 401 from any
//! endpoint additionally fires [`super::unauthorized::notify`] before the
//! error is returned; session teardown happens in the installed handler,
//! not here.

#![allow(clippy::unused_async)]

use super::types::{Announcement, AuthResponse, DeleteResponse, Role, User};

#[cfg(feature = "hydrate")]
use super::error;
#[cfg(feature = "hydrate")]
use super::types::{RoleUpdateResponse, UserEnvelope};
#[cfg(feature = "hydrate")]
use super::unauthorized;

#[cfg(feature = "hydrate")]
const UNAUTHORIZED: u16 = 401;

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB: &str = "not available on server";

/// Attach the stored bearer token, when one exists.
#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session::load().token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Screen a response: fire the unauthorized hook on 401, normalize every
/// other failure into a display message.
#[cfg(feature = "hydrate")]
async fn accept(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, String> {
    let status = resp.status();
    if status == UNAUTHORIZED {
        unauthorized::notify();
        let body = resp.text().await.unwrap_or_default();
        return Err(error::message_from_body(&body, "Your session has expired"));
    }
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(error::message_from_body(&body, &error::fallback_for_status(status)));
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, String> {
    resp.json::<T>().await.map_err(|e| error::from_transport(&e))
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns the backend's reason (e.g. a duplicate email) as a display string.
pub async fn sign_up(email: &str, password: &str, role: Role) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post("/api/auth/signup"))
            .json(&serde_json::json!({ "email": email, "password": password, "role": role }))
            .map_err(|e| error::from_transport(&e))?
            .send()
            .await
            .map_err(|e| error::from_transport(&e))?;
        read_json(accept(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, role);
        Err(SERVER_STUB.to_owned())
    }
}

/// Exchange credentials for a session via `POST /api/auth/signin`.
///
/// # Errors
///
/// Returns the backend's reason (bad credentials) as a display string.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post("/api/auth/signin"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| error::from_transport(&e))?
            .send()
            .await
            .map_err(|e| error::from_transport(&e))?;
        read_json(accept(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(SERVER_STUB.to_owned())
    }
}

/// Fetch the identity behind the stored token from `GET /api/auth/user`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get("/api/auth/user"))
            .send()
            .await
            .ok()?;
        if resp.status() == UNAUTHORIZED {
            unauthorized::notify();
            return None;
        }
        if !resp.ok() {
            return None;
        }
        resp.json::<UserEnvelope>().await.ok().map(|envelope| envelope.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch all announcements from `GET /api/announcements`.
///
/// # Errors
///
/// Returns a display message when the list cannot be fetched.
pub async fn fetch_announcements() -> Result<Vec<Announcement>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get("/api/announcements"))
            .send()
            .await
            .map_err(|e| error::from_transport(&e))?;
        read_json(accept(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

/// Publish an announcement via `POST /api/announcements`.
///
/// # Errors
///
/// Returns a display message when the backend rejects the announcement.
pub async fn create_announcement(title: &str, content: &str) -> Result<Announcement, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post("/api/announcements"))
            .json(&serde_json::json!({ "title": title, "content": content }))
            .map_err(|e| error::from_transport(&e))?
            .send()
            .await
            .map_err(|e| error::from_transport(&e))?;
        read_json(accept(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, content);
        Err(SERVER_STUB.to_owned())
    }
}

/// Rewrite an announcement via `PUT /api/announcements/:id`.
///
/// # Errors
///
/// Returns a display message when the update is rejected (e.g. not the
/// author and not an admin).
pub async fn update_announcement(
    id: &str,
    title: &str,
    content: &str,
) -> Result<Announcement, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/announcements/{id}");
        let resp = authorized(gloo_net::http::Request::put(&url))
            .json(&serde_json::json!({ "title": title, "content": content }))
            .map_err(|e| error::from_transport(&e))?
            .send()
            .await
            .map_err(|e| error::from_transport(&e))?;
        read_json(accept(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, title, content);
        Err(SERVER_STUB.to_owned())
    }
}

/// Remove an announcement via `DELETE /api/announcements/:id`.
///
/// # Errors
///
/// Returns a display message when the delete is rejected.
pub async fn delete_announcement(id: &str) -> Result<DeleteResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/announcements/{id}");
        let resp = authorized(gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(|e| error::from_transport(&e))?;
        read_json(accept(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}

/// Fetch every account from `GET /api/admin/users`. Admin only.
///
/// # Errors
///
/// Returns a display message when the list cannot be fetched.
pub async fn fetch_users() -> Result<Vec<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get("/api/admin/users"))
            .send()
            .await
            .map_err(|e| error::from_transport(&e))?;
        read_json(accept(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

/// Change an account's role via `PUT /api/admin/users/:id/role`. Admin only.
/// Returns the server-confirmed user record.
///
/// # Errors
///
/// Returns a display message when the change is rejected.
pub async fn update_user_role(user_id: &str, role: Role) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/admin/users/{user_id}/role");
        let resp = authorized(gloo_net::http::Request::put(&url))
            .json(&serde_json::json!({ "role": role }))
            .map_err(|e| error::from_transport(&e))?
            .send()
            .await
            .map_err(|e| error::from_transport(&e))?;
        let update: RoleUpdateResponse = read_json(accept(resp).await?).await?;
        Ok(update.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, role);
        Err(SERVER_STUB.to_owned())
    }
}
