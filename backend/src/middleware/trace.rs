//! Request correlation middleware.
//!
//! Each request runs with a [`RequestId`] in task-local storage and inside an
//! `http_request` span that records method, path, and id. Clients may supply
//! their own UUID in `x-request-id`; otherwise a fresh one is minted. Either
//! way the id is echoed on the response.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

/// Header read from requests and written to responses.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

tokio::task_local! {
    static REQUEST_ID: RequestId;
}

/// Correlation id for one request.
///
/// ```
/// use smart_icon_backend::middleware::RequestId;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let id: RequestId = "6f1c2a9e-3b7d-4e0f-9a51-2d8c4b6e7f10".parse().unwrap();
/// assert_eq!(RequestId::within(id, async { RequestId::current() }).await, Some(id));
/// assert_eq!(RequestId::current(), None);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    fn from_request(req: &ServiceRequest) -> Option<Self> {
        req.headers()
            .get(REQUEST_ID_HEADER)?
            .to_str()
            .ok()?
            .trim()
            .parse()
            .ok()
    }

    /// Id of the request being served on this task, if any.
    pub fn current() -> Option<Self> {
        REQUEST_ID.try_with(|id| *id).ok()
    }

    /// Drive `fut` with `id` as the current request id.
    ///
    /// Spawned tasks do not inherit the id; wrap them with this as well.
    pub async fn within<F: Future>(id: Self, fut: F) -> F::Output {
        REQUEST_ID.scope(id, fut).await
    }

    fn header_value(self) -> HeaderValue {
        let mut buf = Uuid::encode_buffer();
        // Hyphenated UUIDs are plain ASCII.
        HeaderValue::from_str(self.0.hyphenated().encode_lower(&mut buf))
            .unwrap_or_else(|_| HeaderValue::from_static("invalid"))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for RequestId {
    type Err = uuid::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw).map(Self)
    }
}

/// Middleware factory installing [`RequestId`] scoping and the request span.
///
/// ```
/// use actix_web::App;
/// use smart_icon_backend::middleware::RequestTracing;
///
/// let _app = App::new().wrap(RequestTracing);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTracing;

impl<S, B> Transform<S, ServiceRequest> for RequestTracing
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTracingService<S>;
    type Future = Ready<Result<Self::Transform, ()>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTracingService { inner: service }))
    }
}

/// Service wrapper produced by [`RequestTracing`].
pub struct RequestTracingService<S> {
    inner: S,
}

impl<S, B> Service<ServiceRequest> for RequestTracingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<ServiceResponse<B>, actix_web::Error>>;

    forward_ready!(inner);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let id = RequestId::from_request(&req).unwrap_or_else(RequestId::mint);
        let span = info_span!(
            "http_request",
            method = %req.method(),
            path = %req.path(),
            request_id = %id,
        );
        let pending = {
            let _entered = span.enter();
            RequestId::within(id, self.inner.call(req))
        };

        Box::pin(
            async move {
                let mut res = pending.await?;
                debug!(status = res.status().as_u16(), "request completed");
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), id.header_value());
                Ok(res)
            }
            .instrument(span),
        )
    }
}
