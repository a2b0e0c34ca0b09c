//! Poster probing through an off-screen `<img>` element.

use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::core::ImageProbe;
use crate::core::error::PosterError;

/// Loads an image the way the browser would display it, reporting whether
/// it decoded.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserImageProbe;

impl ImageProbe for BrowserImageProbe {
    async fn load(&self, url: &str) -> Result<(), PosterError> {
        let failed = || PosterError::LoadFailed(url.to_string());
        let image = HtmlImageElement::new().map_err(|_| failed())?;

        let loaded = Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(url);

        let result = JsFuture::from(loaded).await;
        image.set_onload(None);
        image.set_onerror(None);

        result.map(|_| ()).map_err(|_| failed())
    }
}
