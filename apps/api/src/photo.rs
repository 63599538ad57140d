//! Photo ingestion collaborator.
//!
//! Turns an uploaded image file into a self-contained `data:` URI that the
//! templates can embed directly. No size or format validation happens here;
//! the transport's body limit is the only cap. If ingestion never completes,
//! the document simply never receives a photo update.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;

/// Mime type assumed when the upload carries none.
const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes raw image bytes as an embeddable data URI.
pub fn to_data_uri(content_type: Option<&str>, bytes: &Bytes) -> String {
    let mime = match content_type {
        Some(ct) if !ct.is_empty() => ct,
        _ => FALLBACK_MIME,
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
