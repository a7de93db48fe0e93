// Host-side résumé insights: request validation, résumé text extraction,
// the upload pipeline and the HTTP handlers that expose the analysis engine.

pub mod extraction;
pub mod handlers;
pub mod service;
