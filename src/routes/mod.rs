//! HTTP handlers for the two fronts.

pub mod beacon;
pub mod flash;
pub mod tbd;

use std::time::Duration;

use actix_web::{error, HttpResponse, Result};
use askama::Template;

use crate::flow::backend::BEACON_SUBMIT_DELAY;
use crate::template;

/// Artificial latency applied to beacon submissions. Injected through app
/// data so the end-to-end tests run without the wait.
#[derive(Debug, Clone, Copy)]
pub struct FlowConfig {
    pub submit_delay: Duration,
}

impl Default for FlowConfig {
    fn default() -> FlowConfig {
        FlowConfig {
            submit_delay: BEACON_SUBMIT_DELAY,
        }
    }
}

pub async fn not_found() -> Result<HttpResponse> {
    let content = template::error::NotFoundErrorTemplate
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::NotFound()
        .content_type("text/html")
        .body(content))
}
