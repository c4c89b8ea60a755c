use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
struct Window {
    opened: Instant,
    served: u32,
}

/// Fixed one-second window shared by everyone behind the same router
/// group; enough to keep a single instance from being hammered.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    budget: u32,
    window: Arc<Mutex<Window>>,
}

impl RateLimiter {
    pub fn per_second(budget: u32) -> Self {
        Self {
            budget: budget.max(1),
            window: Arc::new(Mutex::new(Window {
                opened: Instant::now(),
                served: 0,
            })),
        }
    }

    fn try_admit(&self) -> bool {
        let mut window = self.window.lock().expect("rate limiter mutex poisoned");
        let now = Instant::now();
        if now.duration_since(window.opened) >= Duration::from_secs(1) {
            window.opened = now;
            window.served = 0;
        }
        if window.served < self.budget {
            window.served += 1;
            true
        } else {
            false
        }
    }
}

pub async fn rps_middleware(
    State(limiter): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !limiter.try_admit() {
        tracing::warn!("Rate limit exceeded on {}", req.uri().path());
        return (StatusCode::TOO_MANY_REQUESTS, "rate_limit_exceeded").into_response();
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    #[test]
    fn admits_up_to_the_budget_within_one_window() {
        let limiter = RateLimiter::per_second(3);
        assert!(limiter.try_admit());
        assert!(limiter.try_admit());
        assert!(limiter.try_admit());
        assert!(!limiter.try_admit());
    }

    #[test]
    fn zero_budget_still_admits_one_request() {
        let limiter = RateLimiter::per_second(0);
        assert!(limiter.try_admit());
        assert!(!limiter.try_admit());
    }

    #[test]
    fn exhausted_budget_turns_into_429_responses() {
        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(axum::middleware::from_fn_with_state(
                RateLimiter::per_second(1),
                rps_middleware,
            ));

        let request = || {
            Request::builder()
                .method("GET")
                .uri("/ping")
                .body(Body::empty())
                .unwrap()
        };

        tokio_test::block_on(async {
            let ok = app.clone().oneshot(request()).await.unwrap();
            assert_eq!(ok.status(), StatusCode::OK);

            let rejected = app.oneshot(request()).await.unwrap();
            assert_eq!(rejected.status(), StatusCode::TOO_MANY_REQUESTS);
        });
    }
}
