//! Blocking confirmation prompt. Requires a browser environment.

/// Ask the user to confirm a destructive action.
///
/// Returns `false` outside a browser context, so nothing destructive can
/// proceed by accident during server rendering.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
