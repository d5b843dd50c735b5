//! HTTP transport for analysis calls.
//!
//! # Design
//! Requests are described as plain data before anything touches the network:
//! the client builds an `ApiRequest` and `execute` is the single ureq call
//! site. Every call is one blocking POST. The two body shapes mirror the
//! wire contract — form-encoded parameters, or raw image bytes with the
//! parameters moved to the URL query string. Non-2xx statuses are returned
//! as data rather than errors; the service reports failures in the JSON body
//! and the client passes bodies through verbatim.

/// Content type sent with every analysis request.
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body shape for an analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Form-encoded parameters.
    Form(String),
    /// Raw image bytes; the parameters ride on the URL query string.
    Image(Vec<u8>),
}

/// An outbound analysis request described as plain data.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub url: String,
    pub body: RequestBody,
}

/// A response as received from the service.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Form-encode parameters, preserving insertion order.
pub(crate) fn form_encode(params: &[(String, String)]) -> String {
    let mut encoded = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        encoded.append_pair(key, value);
    }
    encoded.finish()
}

/// Execute a request with one blocking POST.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data for the caller to pass through. No timeout is
/// configured; a hung connection blocks the calling thread.
pub(crate) fn execute(request: &ApiRequest) -> Result<ApiResponse, ureq::Error> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let payload: &[u8] = match &request.body {
        RequestBody::Form(encoded) => encoded.as_bytes(),
        RequestBody::Image(bytes) => bytes,
    };

    let mut response = agent
        .post(&request.url)
        .content_type(FORM_CONTENT_TYPE)
        .send(payload)?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(ApiResponse { status, body })
}
