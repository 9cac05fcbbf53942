//! Validation, request issuance, and result/error state for one
//! URL-shortening attempt.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::domain::entities::ShortenedLink;
use crate::domain::gateway::ShortenGateway;
use crate::utils::url_validation::validate_url;

/// The single state a controller is in at any moment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing submitted yet, or reset.
    #[default]
    Idle,
    /// A request is in flight for the most recent input.
    Loading,
    /// The last cycle ended with a user-visible error message.
    Error(String),
    /// The last cycle produced a shortened link.
    Success(ShortenedLink),
}

impl RequestState {
    fn to_snapshot(&self) -> StateSnapshot {
        match self {
            RequestState::Idle => StateSnapshot::default(),
            RequestState::Loading => StateSnapshot {
                is_loading: true,
                ..StateSnapshot::default()
            },
            RequestState::Error(message) => StateSnapshot {
                error_message: Some(message.clone()),
                ..StateSnapshot::default()
            },
            RequestState::Success(link) => StateSnapshot {
                result: Some(link.clone()),
                ..StateSnapshot::default()
            },
        }
    }
}

/// Read view handed to the presentation layer.
///
/// Exactly one of `result` / `error_message` is set outside of the loading
/// and idle states.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StateSnapshot {
    pub result: Option<ShortenedLink>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

struct ControllerState {
    state: RequestState,
    /// Bumped on every submit/reset; a completion whose generation no longer
    /// matches is discarded without touching state.
    generation: u64,
}

/// Owns validation, request issuance, and result/error state for one
/// URL-shortening attempt at a time.
///
/// At most one outbound request is tracked per controller. Submitting a new
/// input or calling [`reset`](Self::reset) supersedes any in-flight request:
/// the transport call is not cancelled, but its eventual resolution has no
/// observable effect on state.
///
/// The state machine is `Idle → Loading → {Success | Error} → Idle`, with a
/// direct `Idle → Error` edge when validation fails (no request is issued).
pub struct ShorteningController<G: ShortenGateway> {
    gateway: Arc<G>,
    inner: Mutex<ControllerState>,
}

impl<G: ShortenGateway> ShorteningController<G> {
    /// Creates a controller around an explicit gateway.
    ///
    /// The gateway carries its own credential; the controller never reads
    /// process configuration itself.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            inner: Mutex::new(ControllerState {
                state: RequestState::Idle,
                generation: 0,
            }),
        }
    }

    /// Runs one validation-and-request cycle for `input`.
    ///
    /// Any prior result, error, or in-flight request is superseded before
    /// anything else happens. If `input` fails validation the controller
    /// moves straight to the error state and no request is issued; otherwise
    /// exactly one gateway call is made and the terminal state reflects its
    /// outcome.
    ///
    /// Returns the snapshot as of this cycle's completion. If another submit
    /// or reset supersedes this cycle while its request is in flight, the
    /// returned snapshot is the superseding one and this cycle's outcome is
    /// dropped.
    pub async fn submit(&self, input: &str) -> StateSnapshot {
        let generation = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.state = RequestState::Idle;
            inner.generation
        };

        if let Err(err) = validate_url(input) {
            tracing::debug!(input, "rejected input before request");
            return self
                .apply(generation, RequestState::Error(err.to_string()))
                .await;
        }

        self.apply(generation, RequestState::Loading).await;
        tracing::debug!(url = input, "submitting shorten request");

        let outcome = self.gateway.shorten(input).await;

        let next = match outcome {
            Ok(link) => {
                tracing::debug!(short_url = %link.short_url, "shorten request succeeded");
                RequestState::Success(link)
            }
            Err(err) => {
                tracing::warn!(error = %err, "shorten request failed");
                RequestState::Error(err.to_string())
            }
        };

        self.apply(generation, next).await
    }

    /// Resets to `Idle` with no result and no error.
    ///
    /// Also the teardown semantics: an in-flight request is superseded and
    /// its resolution will be discarded.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.state = RequestState::Idle;
    }

    /// Returns the current `{result, is_loading, error_message}` view.
    pub async fn snapshot(&self) -> StateSnapshot {
        self.inner.lock().await.state.to_snapshot()
    }

    /// Applies `next` only if this cycle is still the current one.
    async fn apply(&self, generation: u64, next: RequestState) -> StateSnapshot {
        let mut inner = self.inner.lock().await;
        if inner.generation == generation {
            inner.state = next;
        } else {
            tracing::debug!(
                stale_generation = generation,
                current_generation = inner.generation,
                "discarding superseded request outcome"
            );
        }
        inner.state.to_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateway::MockShortenGateway;
    use crate::error::ShortenError;

    #[tokio::test]
    async fn test_starts_idle() {
        let controller = ShorteningController::new(Arc::new(MockShortenGateway::new()));
        assert_eq!(controller.snapshot().await, StateSnapshot::default());
    }

    #[tokio::test]
    async fn test_invalid_input_errors_without_gateway_call() {
        let mut gateway = MockShortenGateway::new();
        gateway.expect_shorten().times(0);
        let controller = ShorteningController::new(Arc::new(gateway));

        for input in ["", "   ", "example.com", "http://", "mailto:me@example.com"] {
            let snapshot = controller.submit(input).await;
            assert!(!snapshot.is_loading, "input {input:?} left loading set");
            assert_eq!(snapshot.result, None);
            assert_eq!(
                snapshot.error_message.as_deref(),
                Some("Please enter a valid URL."),
                "input {input:?} produced the wrong message"
            );
        }
    }

    #[tokio::test]
    async fn test_valid_input_issues_exactly_one_request() {
        let mut gateway = MockShortenGateway::new();
        gateway
            .expect_shorten()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|url| Ok(ShortenedLink::new(url, "https://tiny.one/abc")));
        let controller = ShorteningController::new(Arc::new(gateway));

        let snapshot = controller.submit("https://example.com").await;

        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.error_message, None);
        assert_eq!(
            snapshot.result,
            Some(ShortenedLink::new(
                "https://example.com",
                "https://tiny.one/abc"
            ))
        );
    }

    #[tokio::test]
    async fn test_api_error_surfaces_status_and_message() {
        let mut gateway = MockShortenGateway::new();
        gateway
            .expect_shorten()
            .times(1)
            .returning(|_| Err(ShortenError::api(400, "Bad request")));
        let controller = ShorteningController::new(Arc::new(gateway));

        let snapshot = controller.submit("https://example.com").await;

        assert_eq!(snapshot.result, None);
        assert!(!snapshot.is_loading);
        assert_eq!(
            snapshot.error_message.as_deref(),
            Some("HTTP Error: 400 - Bad request")
        );
    }

    #[tokio::test]
    async fn test_network_error_surfaces_fixed_message() {
        let mut gateway = MockShortenGateway::new();
        gateway
            .expect_shorten()
            .times(1)
            .returning(|_| Err(ShortenError::Network));
        let controller = ShorteningController::new(Arc::new(gateway));

        let snapshot = controller.submit("https://example.com").await;

        assert_eq!(
            snapshot.error_message.as_deref(),
            Some("Network Error: you are offline or the server is unreachable.")
        );
    }

    #[tokio::test]
    async fn test_new_success_replaces_prior_result() {
        let mut gateway = MockShortenGateway::new();
        gateway
            .expect_shorten()
            .times(2)
            .returning(|url| Ok(ShortenedLink::new(url, format!("https://tiny.one/{}", url.len()))));
        let controller = ShorteningController::new(Arc::new(gateway));

        controller.submit("https://example.com/a").await;
        let snapshot = controller.submit("https://example.com/bb").await;

        let result = snapshot.result.expect("second submit should succeed");
        assert_eq!(result.original_url, "https://example.com/bb");
    }

    #[tokio::test]
    async fn test_error_then_valid_input_recovers() {
        let mut gateway = MockShortenGateway::new();
        gateway
            .expect_shorten()
            .times(1)
            .returning(|url| Ok(ShortenedLink::new(url, "https://tiny.one/ok")));
        let controller = ShorteningController::new(Arc::new(gateway));

        controller.submit("not a url").await;
        let snapshot = controller.submit("https://example.com").await;

        assert_eq!(snapshot.error_message, None);
        assert!(snapshot.result.is_some());
    }

    #[tokio::test]
    async fn test_reset_clears_result_error_and_loading() {
        let mut gateway = MockShortenGateway::new();
        gateway
            .expect_shorten()
            .times(1)
            .returning(|url| Ok(ShortenedLink::new(url, "https://tiny.one/abc")));
        let controller = ShorteningController::new(Arc::new(gateway));

        controller.submit("https://example.com").await;
        controller.reset().await;

        assert_eq!(controller.snapshot().await, StateSnapshot::default());
    }
}
