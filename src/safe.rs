//! Uniform conversion of fallible work into [`Safe`] values.
//!
//! [`safe`] runs an immediate computation, [`safe_async`] awaits a deferred one.
//! Both hand back `Ok(value)` or `Err(message)`, and the caught error value
//! itself never leaves the wrapper. The `_with` variants take [`SafeOptions`]
//! to control how the message is produced.
//!
//! ```rust
//! use dotderpi::safe::{safe, safe_with, SafeOptions};
//!
//! let parsed = safe(|| "x".parse::<u8>().map_err(|e| e.to_string()));
//! assert_eq!(parsed, Err("Something went wrong".to_string()));
//!
//! let parsed = safe_with(
//!     || "x".parse::<u8>().map_err(|e| e.to_string()),
//!     SafeOptions::new().process_error(|e: String| format!("bad number: {e}")),
//! );
//! assert_eq!(parsed, Err("bad number: invalid digit found in string".to_string()));
//! ```

use std::future::Future;

/// Message used when nothing better can be said about a failure.
pub const GENERIC_ERROR: &str = "Something went wrong";

/// Outcome of a wrapped computation: the value, or a message describing the failure.
pub type Safe<T> = std::result::Result<T, String>;

/// A value a wrapped computation failed with.
///
/// Native error types report their own message. Anything else is opaque
/// and can only be described through [`SafeOptions::process_error`].
pub trait Caught {
    /// Returns the error's own message if this is a native error type.
    fn message(&self) -> Option<String>;
}

macro_rules! native {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Caught for $ty {
                fn message(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

macro_rules! opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Caught for $ty {
                fn message(&self) -> Option<String> {
                    None
                }
            }
        )*
    };
}

native!(
    crate::error::Error,
    reqwest::Error,
    serde_json::Error,
    url::ParseError,
    std::io::Error,
    Box<dyn std::error::Error + Send + Sync>,
);

opaque!(String, &'static str, serde_json::Value, (), bool, i32, i64, u32, u64, f64);

/// Controls the message produced for a failed computation.
///
/// Resolution order: a fixed [`error_message`](Self::error_message) always wins,
/// then a native error's own message, then
/// [`process_error`](Self::process_error), then [`GENERIC_ERROR`].
pub struct SafeOptions<'a, E> {
    error_message: Option<String>,
    process_error: Option<Box<dyn FnOnce(E) -> String + Send + 'a>>,
}

impl<'a, E> SafeOptions<'a, E> {
    /// Options with nothing configured.
    pub fn new() -> Self {
        Self {
            error_message: None,
            process_error: None,
        }
    }

    /// Reports `message` for every failure.
    #[must_use]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Describes opaque (non-error) failure values with `process`.
    #[must_use]
    pub fn process_error(mut self, process: impl FnOnce(E) -> String + Send + 'a) -> Self {
        self.process_error = Some(Box::new(process));
        self
    }

    fn settle(self, caught: E) -> String
    where
        E: Caught,
    {
        if let Some(message) = self.error_message {
            return message;
        }
        if let Some(message) = caught.message() {
            return message;
        }
        match self.process_error {
            Some(process) => process(caught),
            None => GENERIC_ERROR.to_string(),
        }
    }
}

impl<E> Default for SafeOptions<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for SafeOptions<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafeOptions")
            .field("error_message", &self.error_message)
            .field("process_error", &self.process_error.is_some())
            .finish()
    }
}

/// Runs `func` and converts its failure into a message.
pub fn safe<T, E, F>(func: F) -> Safe<T>
where
    E: Caught,
    F: FnOnce() -> std::result::Result<T, E>,
{
    safe_with(func, SafeOptions::default())
}

/// Runs `func` and converts its failure into a message according to `options`.
pub fn safe_with<T, E, F>(func: F, options: SafeOptions<'_, E>) -> Safe<T>
where
    E: Caught,
    F: FnOnce() -> std::result::Result<T, E>,
{
    func().map_err(|caught| options.settle(caught))
}

/// Awaits `future` and converts its failure into a message.
pub async fn safe_async<T, E, F>(future: F) -> Safe<T>
where
    E: Caught,
    F: Future<Output = std::result::Result<T, E>>,
{
    future
        .await
        .map_err(|caught| SafeOptions::default().settle(caught))
}

/// Awaits `future` and converts its failure into a message according to `options`.
pub async fn safe_async_with<T, E, F>(future: F, options: SafeOptions<'_, E>) -> Safe<T>
where
    E: Caught,
    F: Future<Output = std::result::Result<T, E>>,
{
    future.await.map_err(|caught| options.settle(caught))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(msg: &str) -> std::io::Error {
        std::io::Error::other(msg.to_string())
    }

    #[test]
    fn sync_success_keeps_value() {
        let result = safe(|| Ok::<_, String>("test"));
        assert_eq!(result, Ok("test"));
    }

    #[test]
    fn sync_native_error_uses_its_message() {
        let result: Safe<()> = safe(|| Err(io_error("test error")));
        assert_eq!(result, Err("test error".to_string()));
    }

    #[test]
    fn sync_fixed_message_wins() {
        let result: Safe<()> = safe_with(
            || Err(io_error("test error")),
            SafeOptions::new().error_message("custom error"),
        );
        assert_eq!(result, Err("custom error".to_string()));
    }

    #[test]
    fn sync_opaque_value_falls_back_to_generic() {
        let result: Safe<()> = safe(|| Err("string error"));
        assert_eq!(result, Err(GENERIC_ERROR.to_string()));
    }

    #[test]
    fn fixed_message_beats_mapper() {
        let result: Safe<()> = safe_with(
            || Err(String::from("raw")),
            SafeOptions::new()
                .error_message("fixed")
                .process_error(|raw: String| format!("mapped {raw}")),
        );
        assert_eq!(result, Err("fixed".to_string()));
    }

    #[test]
    fn native_message_beats_mapper() {
        let result: Safe<()> = safe_with(
            || Err(io_error("native")),
            SafeOptions::new().process_error(|_: std::io::Error| "mapped".to_string()),
        );
        assert_eq!(result, Err("native".to_string()));
    }

    #[test]
    fn mapper_describes_opaque_values() {
        let result: Safe<()> = safe_with(
            || Err(serde_json::json!({ "code": 7 })),
            SafeOptions::new().process_error(|raw: serde_json::Value| format!("code {}", raw["code"])),
        );
        assert_eq!(result, Err("code 7".to_string()));
    }

    #[tokio::test]
    async fn async_success_keeps_value() {
        let result = safe_async(async { Ok::<_, String>("test") }).await;
        assert_eq!(result, Ok("test"));
    }

    #[tokio::test]
    async fn async_native_error_uses_its_message() {
        let result: Safe<()> = safe_async(async { Err(io_error("test error")) }).await;
        assert_eq!(result, Err("test error".to_string()));
    }

    #[tokio::test]
    async fn async_fixed_message_wins() {
        let result: Safe<()> = safe_async_with(
            async { Err(io_error("test error")) },
            SafeOptions::new().error_message("custom error"),
        )
        .await;
        assert_eq!(result, Err("custom error".to_string()));
    }

    #[tokio::test]
    async fn async_opaque_value_falls_back_to_generic() {
        let result: Safe<()> = safe_async(async { Err(String::from("string error")) }).await;
        assert_eq!(result, Err(GENERIC_ERROR.to_string()));
    }

    #[tokio::test]
    async fn async_mapper_describes_opaque_values() {
        let result: Safe<()> = safe_async_with(
            async { Err(404_u32) },
            SafeOptions::new().process_error(|code: u32| format!("status {code}")),
        )
        .await;
        assert_eq!(result, Err("status 404".to_string()));
    }

    #[tokio::test]
    async fn async_wrapper_suspends_with_the_inner_future() {
        let result = safe_async(async {
            tokio::task::yield_now().await;
            Ok::<_, String>(1)
        })
        .await;
        assert_eq!(result, Ok(1));
    }
}
