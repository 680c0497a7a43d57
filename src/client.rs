//! Top-level client for the Polymarket Gamma API.
//!
//! [`Client`] owns the HTTP session and hands out the resource sub-clients
//! ([`Client::markets`], [`Client::events`], [`Client::sports`], [`Client::tags`], ...).
//!
//! # Example
//!
//! ```no_run
//! use polymarket_gamma_sdk::Client;
//! use polymarket_gamma_sdk::types::request::EventsRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! // List active events
//! let request = EventsRequest::builder()
//!     .active(true)
//!     .limit(10)
//!     .build();
//!
//! let events = client.events().list(&request).await?;
//! for event in events {
//!     println!("{}: {:?}", event.id, event.title);
//! }
//!
//! client.close();
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use async_stream::try_stream;
use bon::Builder;
use futures::Stream;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
#[cfg(feature = "tracing")]
use tracing::warn;
use url::Url;

use crate::error::Error;
use crate::resolve::{Resolved, UrlTarget};
use crate::resources::{Comments, Events, Markets, Profiles, Series, Sports, Tags};
use crate::types::request::SearchRequest;
use crate::types::response::{HealthResponse, SearchResults};
use crate::{DEFAULT_BASE_URL, Result, ToQueryParams as _, serde_helpers};

/// Largest page Gamma serves for offset-paginated endpoints.
const MAX_LIMIT: i32 = 500;

/// Applied to every call unless [`Config`] says otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_USER_AGENT: &str = concat!("polymarket-gamma-sdk/", env!("CARGO_PKG_VERSION"));

/// Construction parameters for a [`Client`]. Immutable once the client is built.
///
/// ```
/// use std::time::Duration;
///
/// use polymarket_gamma_sdk::Config;
///
/// let config = Config::builder()
///     .base_url("https://gamma-api.polymarket.com")
///     .timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Clone, Debug, Builder)]
#[non_exhaustive]
pub struct Config {
    /// Origin (and optional path prefix) every endpoint path is resolved against.
    #[builder(into, default = DEFAULT_BASE_URL.to_owned())]
    base_url: String,
    /// Applied to the whole exchange of every call: connect, send, and reading the body.
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
    /// Extra headers sent with every request. They replace the defaults of the same name, so
    /// this is also where an API key header goes.
    #[builder(default)]
    headers: HeaderMap,
    #[builder(into, default = DEFAULT_USER_AGENT.to_owned())]
    user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// HTTP client for the Polymarket Gamma API.
///
/// Cloning is cheap and every clone shares the same pooled session, so one client can serve any
/// number of concurrent calls. [`Client::close`] releases the session for all clones; calls made
/// afterwards fail with [`Kind::Closed`](crate::error::Kind::Closed).
///
/// # Example
///
/// ```no_run
/// use polymarket_gamma_sdk::Client;
///
/// // Create client with default endpoint
/// let client = Client::default();
///
/// // Or with a custom endpoint
/// let client = Client::new("https://custom-api.example.com").unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    config: Config,
    /// Base URL, always ending in `/`
    host: Url,
    /// `None` once the client has been closed
    session: RwLock<Option<ReqwestClient>>,
}

/// Closes the wrapped client when dropped, see [`Client::scoped`].
struct CloseOnDrop(Client);

impl Drop for CloseOnDrop {
    fn drop(&mut self) {
        self.0.close();
    }
}

impl Default for Client {
    fn default() -> Self {
        Client::with_config(Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a new Gamma API client with a custom host URL and default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be created.
    pub fn new(host: &str) -> Result<Client> {
        Self::with_config(Config::builder().base_url(host).build())
    }

    /// Creates a new Gamma API client from a full [`Config`], opening the HTTP session.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero timeout or a base URL that cannot carry a path,
    /// and an internal error for an unparsable URL, an invalid header value, or when the HTTP
    /// client cannot be created.
    pub fn with_config(config: Config) -> Result<Client> {
        if config.timeout.is_zero() {
            return Err(Error::validation("timeout must be greater than zero"));
        }

        let mut host = Url::parse(&config.base_url)?;
        if host.cannot_be_a_base() {
            return Err(Error::validation(format!(
                "{host} cannot be used as a base URL"
            )));
        }
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(config.headers.clone());

        let session = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                host,
                session: RwLock::new(Some(session)),
            }),
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.inner.host
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Releases the HTTP session and its pooled connections.
    ///
    /// Affects every clone of this client. Requests already in flight finish normally; new ones
    /// fail with [`Kind::Closed`](crate::error::Kind::Closed). Closing twice is a no-op.
    pub fn close(&self) {
        let mut session = self
            .inner
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if session.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!(host = %self.inner.host, "closed Gamma API session");
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Runs `call` with this client and closes the session when it is done.
    ///
    /// The session is released on every exit path: when `call` returns (successfully or with an
    /// error), when it panics, and when the returned future is dropped before completion.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use polymarket_gamma_sdk::Client;
    ///
    /// # async fn example() -> polymarket_gamma_sdk::Result<()> {
    /// let client = Client::default();
    /// let status = client
    ///     .clone()
    ///     .scoped(|client| async move { client.status().await })
    ///     .await?;
    ///
    /// assert!(client.is_closed());
    /// # Ok(())
    /// # }
    /// ```
    pub fn scoped<Call, Fut, Output>(self, call: Call) -> impl Future<Output = Output>
    where
        Call: FnOnce(Client) -> Fut,
        Fut: Future<Output = Output>,
    {
        // Armed before the first poll, so dropping an unpolled future still closes
        let guard = CloseOnDrop(self.clone());

        async move {
            let _guard = guard;
            call(self).await
        }
    }

    fn session(&self) -> Result<ReqwestClient> {
        self.inner
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .cloned()
            .ok_or_else(Error::closed)
    }

    /// Builds the URL for an endpoint from raw path segments, percent-encoding each of them.
    fn endpoint<Req: Serialize>(&self, segments: &[&str], query: &Req) -> Result<Url> {
        let mut url = self.inner.host.clone();
        url.path_segments_mut()
            .map_err(|()| Error::validation(format!("{} cannot be a base URL", self.inner.host)))?
            .pop_if_empty()
            .extend(segments);

        let query = query.query_params();
        url.set_query(query.strip_prefix('?'));

        Ok(url)
    }

    /// Issues a request against any Gamma endpoint and decodes the JSON response.
    ///
    /// `path` is resolved relative to the base URL, `query` is encoded as the query string
    /// (use `&()` for none) and `body`, when present, is sent as JSON. This is the primitive
    /// every sub-client method is built on.
    ///
    /// # Errors
    ///
    /// Returns [`Kind::NotFound`](crate::error::Kind::NotFound) for a 404,
    /// [`Kind::Status`](crate::error::Kind::Status) for any other non-2xx status,
    /// [`Kind::Validation`](crate::error::Kind::Validation) when the body does not decode into
    /// `Res`, [`Kind::Transport`](crate::error::Kind::Transport) for network failures, and
    /// [`Kind::Closed`](crate::error::Kind::Closed) after [`Client::close`].
    pub async fn request<Query, Body, Res>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Body>,
    ) -> Result<Res>
    where
        Query: Serialize,
        Body: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut url = self.inner.host.join(path.trim_start_matches('/'))?;
        let query = query.query_params();
        url.set_query(query.strip_prefix('?'));

        self.send(method, url, body).await
    }

    async fn send<Body, Res>(&self, method: Method, url: Url, body: Option<&Body>) -> Result<Res>
    where
        Body: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let session = self.session()?;

        let mut builder = session.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let request = builder.build()?;

        crate::request(&session, request).await
    }

    pub(crate) async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        segments: &[&str],
        req: &Req,
    ) -> Result<Res> {
        let url = self.endpoint(segments, req)?;
        self.send(Method::GET, url, None::<&()>).await
    }

    /// GET for item endpoints that answer with either the object or a list holding it.
    ///
    /// A list is narrowed to its first element; an empty list or an empty body is reported as
    /// not found.
    pub(crate) async fn get_one<Res: DeserializeOwned>(&self, segments: &[&str]) -> Result<Res> {
        let url = self.endpoint(segments, &())?;
        let path = url.path().to_owned();

        match self.send::<(), Value>(Method::GET, url, None).await? {
            Value::Null => Err(Error::not_found(Method::GET, path)),
            Value::Array(items) => {
                let first = items
                    .into_iter()
                    .next()
                    .ok_or_else(|| Error::not_found(Method::GET, path))?;
                serde_helpers::deserialize_with_warnings(first)
            }
            other => serde_helpers::deserialize_with_warnings(other),
        }
    }

    /// Performs a health check on the Gamma API.
    ///
    /// Returns `"OK"` when the API is healthy and operational. Surrounding quotes and whitespace
    /// are stripped from the body.
    ///
    /// # Errors
    ///
    /// Returns an error if the API is unreachable or returns a non-2xx status code.
    pub async fn status(&self) -> Result<HealthResponse> {
        let session = self.session()?;
        let url = self.endpoint(&["status"], &())?;
        let path = url.path().to_owned();

        let response = session.get(url).send().await?;
        let response = crate::ensure_success(response, &Method::GET, &path).await?;
        let text = response.text().await?;

        Ok(text.trim().trim_matches('"').to_owned())
    }

    /// Searches across events, tags and user profiles.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the search query is invalid.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults> {
        self.get(&["public-search"], request).await
    }

    /// Fetches the market or event a `polymarket.com` URL points at.
    ///
    /// See [`UrlTarget::parse`] for the recognized shapes. Returns `Ok(None)`, without any
    /// network call, when the URL has none of them.
    ///
    /// # Errors
    ///
    /// A recognized URL whose slug does not exist yields
    /// [`Kind::NotFound`](crate::error::Kind::NotFound); it is never turned into `None`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use polymarket_gamma_sdk::{Client, Resolved};
    ///
    /// # async fn example() -> polymarket_gamma_sdk::Result<()> {
    /// let client = Client::default();
    ///
    /// match client
    ///     .resolve_url("https://polymarket.com/event/fed-decision-in-october")
    ///     .await?
    /// {
    ///     Some(Resolved::Event(event)) => println!("event {:?}", event.title),
    ///     Some(Resolved::Market(market)) => println!("market {}", market.question),
    ///     Some(_) => {}
    ///     None => println!("not a market or event URL"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve_url(&self, url: &str) -> Result<Option<Resolved>> {
        let Some(target) = UrlTarget::parse(url) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(url, "URL does not point at a market or event");
            return Ok(None);
        };

        let resolved = match target {
            UrlTarget::Market(slug) => {
                Resolved::Market(Box::new(self.markets().by_slug(&slug).await?))
            }
            UrlTarget::Event(slug) => {
                Resolved::Event(Box::new(self.events().by_slug(&slug).await?))
            }
        };

        Ok(Some(resolved))
    }

    #[must_use]
    pub fn markets(&self) -> Markets<'_> {
        Markets::new(self)
    }

    #[must_use]
    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }

    #[must_use]
    pub fn sports(&self) -> Sports<'_> {
        Sports::new(self)
    }

    #[must_use]
    pub fn tags(&self) -> Tags<'_> {
        Tags::new(self)
    }

    #[must_use]
    pub fn series(&self) -> Series<'_> {
        Series::new(self)
    }

    #[must_use]
    pub fn comments(&self) -> Comments<'_> {
        Comments::new(self)
    }

    #[must_use]
    pub fn profiles(&self) -> Profiles<'_> {
        Profiles::new(self)
    }

    /// Returns a stream of results using offset-based pagination.
    ///
    /// This method repeatedly invokes the provided closure `call`, which takes the
    /// client and pagination parameters (limit and offset) to fetch data. Each page
    /// of results is flattened into individual items in the stream.
    ///
    /// The stream continues fetching pages until:
    /// - An empty page is returned, or
    /// - A page with fewer items than the requested limit is returned (indicating the last page)
    ///
    /// `limit` above 500 is capped to 500, the largest page Gamma serves.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures::StreamExt as _;
    /// use polymarket_gamma_sdk::Client;
    /// use polymarket_gamma_sdk::types::request::EventsRequest;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    ///
    /// // Stream all active events
    /// let stream = client.stream_data(
    ///     |client, limit, offset| {
    ///         let request = EventsRequest::builder()
    ///             .active(true)
    ///             .limit(limit)
    ///             .offset(offset)
    ///             .build();
    ///         async move { client.events().list(&request).await }
    ///     },
    ///     100, // page size
    /// );
    /// let mut stream = std::pin::pin!(stream);
    ///
    /// while let Some(result) = stream.next().await {
    ///     match result {
    ///         Ok(event) => println!("Event: {}", event.id),
    ///         Err(e) => eprintln!("Error: {e}"),
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn stream_data<'client, Call, Fut, Data>(
        &'client self,
        call: Call,
        limit: i32,
    ) -> impl Stream<Item = Result<Data>> + 'client
    where
        Call: Fn(&'client Client, i32, i32) -> Fut + 'client,
        Fut: Future<Output = Result<Vec<Data>>> + 'client,
        Data: 'client,
    {
        let limit = if limit > MAX_LIMIT {
            #[cfg(feature = "tracing")]
            warn!(
                "Supplied {limit} limit, Gamma only allows for maximum {MAX_LIMIT} responses per call, defaulting to {MAX_LIMIT}"
            );

            MAX_LIMIT
        } else {
            limit
        };

        try_stream! {
            let mut offset = 0;

            loop {
                let data = call(self, limit, offset).await?;

                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    reason = "We shouldn't ever truncate/wrap since we'll never return that many records in one call")
                ]
                let count = data.len() as i32;

                for item in data {
                    yield item;
                }

                // Stop if we received fewer items than requested (last page)
                if count < limit {
                    break;
                }

                offset += count;
            }
        }
    }
}
