//! Native dialogs: file picking, confirmations and alerts

use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

const UPLOAD_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp"];

pub async fn pick_document() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Upload PDF or image")
        .add_filter("Scans and PDFs", UPLOAD_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

pub async fn confirm_delete(file_name: String) -> bool {
    let result = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Delete job")
        .set_description(format!(
            "Are you sure you want to delete this job?\n\n{}",
            file_name
        ))
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;
    result == MessageDialogResult::Yes
}

pub async fn alert(message: String) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Restora")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
