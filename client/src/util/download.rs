//! Browser file hand-off: CSV downloads and local document previews.
//!
//! Both go through object URLs; downloads revoke theirs right after the
//! synthetic click, previews leave theirs to the new tab.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("{0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
fn js_err(value: wasm_bindgen::JsValue) -> DownloadError {
    DownloadError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Save `contents` as `file_name` through a temporary anchor.
///
/// # Errors
///
/// Fails when the DOM or Blob APIs are unavailable.
#[cfg(feature = "hydrate")]
pub fn save_text(file_name: &str, mime: &str, contents: &str) -> Result<(), DownloadError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DownloadError::NoWindow)?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| DownloadError::Js("not an anchor".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)
}

/// Open a locally selected file in a new tab.
///
/// # Errors
///
/// Fails when no window exists or the object URL cannot be created.
#[cfg(feature = "hydrate")]
pub fn open_preview(file: &web_sys::File) -> Result<(), DownloadError> {
    let window = web_sys::window().ok_or(DownloadError::NoWindow)?;
    let url = web_sys::Url::create_object_url_with_blob(file).map_err(js_err)?;
    window.open_with_url_and_target(&url, "_blank").map_err(js_err)?;
    Ok(())
}
