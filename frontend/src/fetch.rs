use crate::api::{ApiRequest, ApiResponse, Transport};
use crate::error::ApiError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, RequestInit, Response};

/// Sends requests through the browser's `fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let (parts, body) = request.into_parts();

        let opts = RequestInit::new();
        opts.set_method(parts.method.as_str());
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&parts.uri.to_string(), &opts)
            .map_err(js_error("Failed to create request"))?;
        for (name, value) in parts.headers.iter() {
            let value = value
                .to_str()
                .map_err(|e| ApiError::Network(format!("Invalid header {}: {}", name, e)))?;
            js_request
                .headers()
                .set(name.as_str(), value)
                .map_err(js_error("Failed to set header"))?;
        }

        let window = window().ok_or_else(|| ApiError::Network("No browser window".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_error("Failed to send request"))?
            .dyn_into()
            .map_err(js_error("Unexpected fetch result"))?;

        let text_promise = response.text().map_err(js_error("Failed to read response"))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(js_error("Failed to get text"))?
            .as_string()
            .unwrap_or_default();

        let response = http::Response::builder()
            .status(response.status())
            .body(text)?;
        Ok(response)
    }
}

fn js_error(context: &'static str) -> impl Fn(JsValue) -> ApiError {
    move |err| ApiError::Network(format!("{}: {:?}", context, err))
}
