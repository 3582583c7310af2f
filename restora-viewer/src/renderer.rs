use anyhow::{bail, Context, Result};
use iced::widget::image::Handle;
use restora_core::viewport::Extent;
use restora_core::ApiClient;

/// A decoded page scan ready for the image widget
#[derive(Debug, Clone)]
pub struct PageImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl PageImage {
    /// Natural pixel size of the scan
    pub fn extent(&self) -> Extent {
        Extent::new(self.width as f32, self.height as f32)
    }
}

/// Decode PNG/JPEG/TIFF bytes into RGBA pixels
pub fn decode_page(bytes: &[u8]) -> Result<PageImage> {
    let img = image::load_from_memory(bytes)
        .context("Failed to decode page image")?
        .into_rgba8();

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        bail!("Page image has no pixels");
    }

    Ok(PageImage {
        handle: Handle::from_rgba(width, height, img.into_raw()),
        width,
        height,
    })
}

/// Fetch the cleaned scan from the backend and decode it off the UI thread
pub async fn load_page_image(client: ApiClient, path: String) -> Result<PageImage, String> {
    let bytes = client
        .fetch_image(&path)
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", path, e))?;

    tokio::task::spawn_blocking(move || decode_page(&bytes))
        .await
        .map_err(|e| format!("Image decoding task failed: {}", e))?
        .map_err(|e| format!("{:#}", e))
}
