//! Rendering module for serializing assembled documents.

mod docx;
mod json;

pub use self::docx::{to_docx, DOCX_MIME_TYPE};
pub use json::{to_json, JsonFormat};
