//! # restora-core
//!
//! Building blocks of the Restora OCR document viewer.
//!
//! - [`viewport`]: zoom, scroll, fit-to-content and grab-to-pan for the page preview
//! - [`layout`]: detected text lines and their bounding boxes
//! - [`api`]: HTTP client and wire types of the OCR backend
//! - [`log_stream`]: WebSocket client for the backend log broadcast
//! - [`logs`]: log console records
//! - [`config`]: persistent viewer settings
//!
//! ## Example
//!
//! ```
//! use restora_core::viewport::{Extent, ScrollBehavior, ViewportController};
//!
//! let mut viewport = ViewportController::default();
//! viewport.set_content(Extent::new(1600.0, 1200.0));
//!
//! let request = viewport
//!     .fit_to_content(Extent::new(800.0, 600.0), ScrollBehavior::Jump)
//!     .expect("content is loaded");
//! assert!(viewport.zoom() < 0.5);
//! assert_eq!(request.behavior, ScrollBehavior::Jump);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod layout;
pub mod log_stream;
pub mod logs;
pub mod text;
pub mod viewport;

pub use api::{ApiClient, PageData, UploadJob};
pub use config::Config;
pub use error::{Error, Result};
pub use layout::{BoundingBox, OcrLayout, TextLine};
pub use logs::{LogBook, LogEntry, LogSource};
pub use viewport::{ViewportController, ViewportSettings};
