use crate::renderer::PageImage;
use restora_core::viewport::Extent;
use restora_core::PageData;

/// The processed page currently on screen
#[derive(Debug)]
pub struct Document {
    source: String,
    page: PageData,
    image: Option<PageImage>,
}

impl Document {
    pub fn new(source: impl Into<String>, page: PageData) -> Self {
        Self {
            source: source.into(),
            page,
            image: None,
        }
    }

    /// File name or job id the page came from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn page(&self) -> &PageData {
        &self.page
    }

    pub fn job_id(&self) -> Option<&str> {
        self.page.job_id.as_deref()
    }

    pub fn image(&self) -> Option<&PageImage> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: PageImage) {
        self.image = Some(image);
    }

    /// Natural size of the scan, once it has loaded
    pub fn content_extent(&self) -> Option<Extent> {
        self.image.as_ref().map(PageImage::extent)
    }

    pub fn line_count(&self) -> usize {
        self.page.layout.len()
    }

    pub fn typo_count(&self) -> usize {
        self.page.typos.len()
    }
}
