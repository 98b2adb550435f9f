//! Outbound HTTP for folio
//!
//! Covers the two remote calls folio makes: the mail provider's web API and, from the
//! client side, the contact endpoint itself. Every response body is capped and every
//! call is bounded by a timeout.

#![deny(missing_docs)]

use bytes::Bytes;
use http::{
    header::{CONTENT_TYPE, USER_AGENT},
    HeaderValue, Request, StatusCode, Uri,
};
use http_body_util::{combinators::BoxBody, BodyExt, Limited};
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::{client::legacy::Client as HyperClient, rt::TokioExecutor};
use serde::{de::DeserializeOwned, Serialize};
use std::{error::Error as StdError, fmt, time::Duration};
use tower::{util::BoxCloneSyncService, BoxError, Service, ServiceBuilder, ServiceExt};

mod body;

pub use self::body::Body;

/// Responses larger than this are cut off with an error
const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type ResponseBody = BoxBody<Bytes, BoxError>;
type HttpService = BoxCloneSyncService<Request<Body>, http::Response<ResponseBody>, BoxError>;

/// Failure to reach the remote, or to read what it sent back
pub struct Error(BoxError);

impl Error {
    fn wrap<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self(error.into())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// Configures a [`Client`]
#[derive(Clone, Copy)]
pub struct ClientBuilder {
    timeout: Duration,
}

impl ClientBuilder {
    /// Upper bound for a whole request, including reading the response head
    ///
    /// Defaults to 30 seconds
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Client talking HTTP/1.1 or HTTP/2, over rustls with the webpki roots for HTTPS
    #[must_use]
    pub fn build(self) -> Client {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();

        self.service(HyperClient::builder(TokioExecutor::new()).build(connector))
    }

    /// Client on top of any HTTP service
    ///
    /// Tests hand in a `tower::service_fn` here instead of a network connection.
    #[must_use]
    pub fn service<S, B>(self, inner: S) -> Client
    where
        S: Service<Request<Body>, Response = http::Response<B>> + Clone + Send + Sync + 'static,
        S::Error: Into<BoxError>,
        S::Future: Send + 'static,
        B: http_body::Body<Data = Bytes> + Send + Sync + 'static,
        B::Error: Into<BoxError>,
    {
        let inner = inner
            .map_response(|response: http::Response<B>| {
                response.map(|body| BoxBody::new(Limited::new(body, MAX_RESPONSE_BYTES)))
            })
            .map_err(Into::<BoxError>::into);

        let service = ServiceBuilder::new().timeout(self.timeout).service(inner);

        Client {
            inner: BoxCloneSyncService::new(service),
            user_agent: HeaderValue::from_static(folio_core::consts::USER_AGENT),
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client
///
/// Cheap to clone, clones share the connection pool.
#[derive(Clone)]
pub struct Client {
    inner: HttpService,
    user_agent: HeaderValue,
}

impl Client {
    /// Start configuring a client
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Send a request
    ///
    /// Adds `User-Agent: folio/<version>` unless the request already names an agent.
    ///
    /// # Errors
    ///
    /// The connection failed or the timeout expired before a response arrived
    pub async fn execute(&self, mut req: Request<Body>) -> Result<Response, Error> {
        req.headers_mut()
            .entry(USER_AGENT)
            .or_insert_with(|| self.user_agent.clone());

        let inner = self.inner.clone().oneshot(req).await.map_err(Error::wrap)?;
        Ok(Response { inner })
    }

    /// POST `value` as a JSON document to `uri`
    ///
    /// # Errors
    ///
    /// The value didn't serialise, the URI is invalid or the request failed
    pub async fn post_json<U, T>(&self, uri: U, value: &T) -> Result<Response, Error>
    where
        Uri: TryFrom<U>,
        <Uri as TryFrom<U>>::Error: Into<http::Error>,
        T: Serialize + ?Sized,
    {
        let body = Body::json(value).map_err(Error::wrap)?;
        let req = Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(Error::wrap)?;

        self.execute(req).await
    }
}

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

/// Response whose body hasn't been read yet
#[derive(Debug)]
pub struct Response {
    inner: http::Response<ResponseBody>,
}

impl Response {
    /// Status code
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    async fn bytes(self) -> Result<Bytes, Error> {
        let collected = self.inner.into_body().collect().await.map_err(Error::wrap)?;
        Ok(collected.to_bytes())
    }

    /// Body as UTF-8 text
    ///
    /// # Errors
    ///
    /// Reading the body failed, it exceeded the size cap, or it isn't UTF-8
    pub async fn text(self) -> Result<String, Error> {
        let bytes = self.bytes().await?;
        let text = simdutf8::basic::from_utf8(&bytes).map_err(Error::wrap)?;
        Ok(text.to_owned())
    }

    /// Body decoded as JSON
    ///
    /// # Errors
    ///
    /// Reading the body failed, it exceeded the size cap, or it doesn't decode into `T`
    pub async fn json<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let bytes = self.bytes().await?;
        sonic_rs::from_slice(&bytes).map_err(Error::wrap)
    }
}
