// ABOUTME: HTTP middleware for request correlation and cross-origin access
// ABOUTME: Request ID propagation and CORS layer construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from the configured origin list
pub mod cors;
/// Request ID generation and propagation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{make_request_span, request_id_middleware, RequestId, REQUEST_ID_HEADER};
