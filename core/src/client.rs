//! Synchronous client for the analysis service.
//!
//! # Design
//! `AlchemyClient` holds only an API key and a base URL and carries no other
//! state between calls. Each public method covers one analysis operation:
//! the (operation, flavor) pair is validated against the routing table, the
//! request parameters are assembled from caller options plus credentials,
//! and exactly one blocking POST is dispatched. Request building is split
//! from execution so the shaping stays deterministic and testable.
//!
//! Transport failures never surface as errors. A dispatched call always
//! returns a JSON value; failures are folded into the fixed
//! `{"status":"ERROR","statusInfo":"Network error"}` body. Only the two
//! pre-flight conditions in [`ApiError`] produce `Err`.

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::endpoints::{self, Flavor, Operation};
use crate::error::ApiError;
use crate::http::{self, ApiRequest, RequestBody};

const BASE_HTTP_URL: &str = "http://access.alchemyapi.com/calls";
const BASE_HTTPS_URL: &str = "https://access.alchemyapi.com/calls";

/// Additional request parameters, passed through to the service verbatim.
pub type Params = Vec<(String, String)>;

/// Synchronous client for the analysis service.
///
/// One blocking round trip per method call; no internal concurrency, no
/// retries, no timeouts. The API key is replaceable via [`set_key`]; the
/// base URL is fixed at construction.
///
/// [`set_key`]: AlchemyClient::set_key
#[derive(Debug, Clone)]
pub struct AlchemyClient {
    api_key: String,
    base_url: String,
}

impl AlchemyClient {
    /// Create a client against the public service host, `http` or `https`
    /// per the flag. Credentials are an explicit input; the client never
    /// reads the process environment.
    pub fn new(api_key: impl Into<String>, use_https: bool) -> Self {
        let base_url = if use_https { BASE_HTTPS_URL } else { BASE_HTTP_URL };
        Self {
            api_key: api_key.into(),
            base_url: base_url.to_string(),
        }
    }

    /// Create a client against an arbitrary base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Replace the stored API key, returning the client for chaining.
    /// Subsequent calls send the new key; calls already built are unaffected.
    pub fn set_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.api_key = api_key.into();
        self
    }

    // -----------------------------------------------------------------------
    // Analysis operations
    // -----------------------------------------------------------------------

    pub fn sentiment(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Sentiment, flavor, data, options)
    }

    /// Sentiment toward a specific target phrase. Requires a non-empty
    /// `target` in addition to the analyzed data.
    pub fn sentiment_targeted(
        &self,
        flavor: Flavor,
        data: &str,
        target: &str,
        options: Params,
    ) -> Result<Value, ApiError> {
        let path = require_flavor(Operation::SentimentTargeted, flavor)?;
        if target.is_empty() {
            return Err(ApiError::MissingTarget);
        }

        let mut params = options;
        params.push((flavor.as_str().to_string(), data.to_string()));
        params.push(("target".to_string(), target.to_string()));

        Ok(self.analyze(path, params))
    }

    pub fn entities(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Entities, flavor, data, options)
    }

    pub fn keywords(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Keywords, flavor, data, options)
    }

    pub fn concepts(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Concepts, flavor, data, options)
    }

    /// Cleaned page text, with ads and navigation stripped by the service.
    pub fn text(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Text, flavor, data, options)
    }

    /// Raw page text, ads and navigation included.
    pub fn text_raw(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::TextRaw, flavor, data, options)
    }

    pub fn author(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Author, flavor, data, options)
    }

    pub fn language(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Language, flavor, data, options)
    }

    pub fn title(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Title, flavor, data, options)
    }

    pub fn relations(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Relations, flavor, data, options)
    }

    pub fn category(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Category, flavor, data, options)
    }

    pub fn feeds(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Feeds, flavor, data, options)
    }

    pub fn microformats(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Microformats, flavor, data, options)
    }

    pub fn image_extraction(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::ImageExtraction, flavor, data, options)
    }

    pub fn taxonomy(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Taxonomy, flavor, data, options)
    }

    pub fn combined(&self, flavor: Flavor, data: &str, options: Params) -> Result<Value, ApiError> {
        self.document_call(Operation::Combined, flavor, data, options)
    }

    /// Keyword tagging for an image.
    ///
    /// For [`Flavor::Url`] the `image` bytes are the image's URL and travel
    /// as a form parameter like any other call. For the image flavor the
    /// bytes are sent as the literal POST body, with all parameters moved to
    /// the URL query string.
    pub fn image_keywords(
        &self,
        flavor: Flavor,
        image: &[u8],
        options: Params,
    ) -> Result<Value, ApiError> {
        let path = require_flavor(Operation::ImageKeywords, flavor)?;

        if flavor == Flavor::Url {
            let mut params = options;
            params.push((
                flavor.as_str().to_string(),
                String::from_utf8_lossy(image).into_owned(),
            ));
            Ok(self.analyze(path, params))
        } else {
            Ok(self.analyze_image(path, options, image.to_vec()))
        }
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Shared shape for every operation that injects `data` under the flavor
    /// key and has no extra inputs.
    fn document_call(
        &self,
        operation: Operation,
        flavor: Flavor,
        data: &str,
        options: Params,
    ) -> Result<Value, ApiError> {
        let path = require_flavor(operation, flavor)?;

        let mut params = options;
        params.push((flavor.as_str().to_string(), data.to_string()));

        Ok(self.analyze(path, params))
    }

    fn analyze(&self, path: &str, params: Params) -> Value {
        let request = self.build_analyze(path, params);
        self.dispatch(path, request)
    }

    fn analyze_image(&self, path: &str, params: Params, image: Vec<u8>) -> Value {
        let request = self.build_analyze_image(path, params, image);
        self.dispatch(path, request)
    }

    /// Execute the round trip and decode the body, folding any transport
    /// failure (or an undecodable body) into the fixed error value.
    fn dispatch(&self, path: &str, request: ApiRequest) -> Value {
        debug!(path, "dispatching analysis call");

        match http::execute(&request) {
            Ok(response) => match serde_json::from_str(&response.body) {
                Ok(value) => value,
                Err(err) => {
                    warn!(path, error = %err, "response body was not JSON");
                    network_error()
                }
            },
            Err(err) => {
                warn!(path, error = %err, "transport failure swallowed");
                network_error()
            }
        }
    }

    fn build_analyze(&self, path: &str, params: Params) -> ApiRequest {
        let params = self.with_credentials(params);
        ApiRequest {
            url: format!("{}{}", self.base_url, path),
            body: RequestBody::Form(http::form_encode(&params)),
        }
    }

    fn build_analyze_image(&self, path: &str, params: Params, image: Vec<u8>) -> ApiRequest {
        let params = self.with_credentials(params);
        ApiRequest {
            url: format!("{}{}?{}", self.base_url, path, http::form_encode(&params)),
            body: RequestBody::Image(image),
        }
    }

    /// Append the stored key and the fixed output mode after caller options.
    fn with_credentials(&self, mut params: Params) -> Params {
        params.push(("apikey".to_string(), self.api_key.clone()));
        params.push(("outputMode".to_string(), "json".to_string()));
        params
    }
}

fn require_flavor(operation: Operation, flavor: Flavor) -> Result<&'static str, ApiError> {
    endpoints::path(operation, flavor).ok_or(ApiError::FlavorNotSupported {
        operation: operation.label(),
        flavor,
    })
}

/// The fixed value returned in place of any transport failure.
fn network_error() -> Value {
    json!({ "status": "ERROR", "statusInfo": "Network error" })
}
