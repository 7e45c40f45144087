use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;
use crate::trace_ctx::UNKNOWN_TRACE_ID;

/// Emits one `request_completed` event per request, keyed by route template
/// and game id, and levelled by status class.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();
        let raw_path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            // Routing has happened by now, so the matched pattern and path
            // parameters are available on the response's request.
            let (status, route, game_id) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request().match_pattern(),
                    res.request().match_info().get("game_id").map(str::to_owned),
                ),
                Err(err) => (err.as_response_error().status_code(), None, None),
            };

            Completed {
                method: method.as_str(),
                route: route.as_deref().unwrap_or(&raw_path),
                game_id: game_id.as_deref(),
                status,
                duration_us: start.elapsed().as_micros() as u64,
                trace_id: &trace_id,
            }
            .emit();

            result
        })
    }
}

/// Fields of one `request_completed` event.
struct Completed<'a> {
    method: &'a str,
    /// Route template (`/api/games/{game_id}`), or the raw path when no route matched.
    route: &'a str,
    game_id: Option<&'a str>,
    status: StatusCode,
    duration_us: u64,
    trace_id: &'a str,
}

impl Completed<'_> {
    fn emit(&self) {
        let Completed {
            method,
            route,
            game_id,
            status,
            duration_us,
            trace_id,
        } = *self;
        let status = status.as_u16();
        match status {
            500.. => error!(method, route, game_id, status, duration_us, trace_id, "request_completed"),
            400..=499 => warn!(method, route, game_id, status, duration_us, trace_id, "request_completed"),
            _ => info!(method, route, game_id, status, duration_us, trace_id, "request_completed"),
        }
    }
}
