//! Report Calls
//!
//! Lost/found reports go up as multipart so an optional photo can ride along.

use findit_core::api::MessagePayload;
use findit_core::validate::ReportForm;
use findit_core::{ApiError, ItemStatus};
use js_sys::Uint8Array;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use wasm_bindgen_futures::JsFuture;

use crate::config::config;
use super::send;

/// Photo picked in the upload area, already read into memory
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub async fn read(file: &web_sys::File) -> Result<Self, ApiError> {
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
        Ok(Self {
            file_name: file.name(),
            mime_type: file.type_(),
            bytes: Uint8Array::new(&buffer).to_vec(),
        })
    }
}

fn report_path(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Lost => "report-lost",
        _ => "report-found",
    }
}

pub async fn submit_report(
    status: ItemStatus,
    form: &ReportForm,
    image: Option<ImageUpload>,
    user_id: Option<u32>,
) -> Result<MessagePayload, ApiError> {
    let mut body = Form::new();
    for (name, value) in form.multipart_fields(status) {
        body = body.text(name, value);
    }
    if let Some(id) = user_id {
        body = body.text("user_id", id.to_string());
    }
    if let Some(image) = image {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime_type)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        body = body.part("itemImage", part);
    }

    let url = config().api_url(report_path(status));
    send("POST", url.clone(), Client::new().post(url).multipart(body)).await
}
