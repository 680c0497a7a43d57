#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod error;
pub mod resolve;
pub mod resources;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::{Method, Request, Response as HttpResponse, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use crate::client::{Client, Config};
use crate::error::Error;
pub use crate::resolve::{Resolved, UrlTarget};

pub type Result<T> = std::result::Result<T, Error>;

/// Production origin of the Gamma API.
pub const DEFAULT_BASE_URL: &str = "https://gamma-api.polymarket.com";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
/// Arrays are serialized as repeated keys (`key=val1&key=val2`).
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Executes `request` and decodes the JSON body into `Response`.
///
/// 404 becomes [`Kind::NotFound`](error::Kind::NotFound), any other non-2xx status
/// [`Kind::Status`](error::Kind::Status), a body that is not JSON or does not fit `Response`
/// [`Kind::Validation`](error::Kind::Validation) and a network failure
/// [`Kind::Transport`](error::Kind::Transport). An empty body counts as `null`: it decodes into
/// `()` or `Option<T>`, and is reported as not found for any other `Response`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = ensure_success(client.execute(request).await?, &method, &path).await?;
    let body = response.bytes().await?;

    let json_value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&body)?
    };

    if json_value.is_null() {
        // `()` and `Option<T>` accept an empty answer; an entity type means nothing was found
        return serde_json::from_value::<Response>(Value::Null)
            .ok()
            .ok_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::warn!(method = %method, path = %path, "API resource not found");
                Error::not_found(method, path)
            });
    }

    serde_helpers::deserialize_with_warnings(json_value)
}

/// Maps a non-successful status to the matching error, passing 2xx responses through.
async fn ensure_success(
    response: HttpResponse,
    method: &Method,
    path: &str,
) -> Result<HttpResponse> {
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if status_code.is_success() {
        return Ok(response);
    }

    if status_code == StatusCode::NOT_FOUND {
        #[cfg(feature = "tracing")]
        tracing::warn!(path = %path, "API resource not found");

        return Err(Error::not_found(method.clone(), path.to_owned()));
    }

    let message = response.text().await.unwrap_or_default();

    #[cfg(feature = "tracing")]
    tracing::warn!(
        status = %status_code,
        method = %method,
        path = %path,
        message = %message,
        "API request failed"
    );

    Err(Error::status(
        status_code,
        method.clone(),
        path.to_owned(),
        message,
    ))
}
