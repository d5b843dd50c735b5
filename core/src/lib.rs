//! Synchronous client for the AlchemyAPI content-analysis service.
//!
//! # Overview
//! Maps a fixed set of text/URL/HTML/image analysis operations (sentiment,
//! entities, keywords, concepts, language detection, ...) onto the service's
//! HTTP interface: validate that the requested (operation, flavor) pair is
//! supported, assemble a form-encoded POST with credentials, send it, and
//! hand back the decoded JSON body.
//!
//! # Design
//! - `endpoints` holds the static routing table; the table lookup plus the
//!   targeted-sentiment target check are the only pre-flight validation.
//! - `AlchemyClient` holds only `api_key` and `base_url`; each call is one
//!   blocking round trip with no state shared beyond those two fields.
//! - Requests are built as plain data (`ApiRequest`) before the single ureq
//!   call site executes them, keeping request shaping deterministic.
//! - Transport failures are never raised: a dispatched call always returns a
//!   JSON value, with failures folded into a fixed
//!   `{"status":"ERROR","statusInfo":"Network error"}` body.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod http;

pub use client::{AlchemyClient, Params};
pub use endpoints::{Flavor, Operation};
pub use error::ApiError;
pub use http::{ApiRequest, ApiResponse, RequestBody};
