use crate::dialogs;
use crate::document::Document;
use crate::renderer::{self, PageImage};
use crate::scroll_animation::ScrollAnimation;
use crate::subscriptions;
use crate::views;
use iced::keyboard::Modifiers;
use iced::mouse::ScrollDelta;
use iced::widget::{column, container, row, scrollable};
use iced::{window, Element, Length, Rectangle, Subscription, Task, Theme};
use restora_core::config::{Config, ThemePreference};
use restora_core::viewport::{
    Extent, PanDirection, Point as ViewPoint, PointerButton, ScrollBehavior, ScrollRequest,
    ViewportController, WheelOutcome,
};
use restora_core::{ApiClient, LogBook, LogEntry, PageData, UploadJob};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Pixels scrolled per wheel line
const LINE_HEIGHT: f32 = 60.0;

pub fn preview_scroll_id() -> scrollable::Id {
    scrollable::Id::new("preview-scroll")
}

pub fn preview_container_id() -> container::Id {
    container::Id::new("preview-container")
}

#[derive(Debug, Clone)]
pub enum Message {
    // Documents
    PickFile,
    FilePicked(Option<PathBuf>),
    PageProcessed {
        source: String,
        result: Result<PageData, String>,
    },
    ImageLoaded {
        path: String,
        result: Result<PageImage, String>,
    },
    ClearDocument,

    // Job list
    OpenJobList,
    CloseJobList,
    JobsLoaded(Result<Vec<UploadJob>, String>),
    OpenJob(String),
    DeleteJob(String),
    DeleteConfirmed { job_id: String, confirmed: bool },
    JobDeleted {
        job_id: String,
        result: Result<(), String>,
    },

    // Viewport
    ZoomIn,
    ZoomOut,
    ResetZoom,
    FitToContent,
    ContainerMeasured(Option<Rectangle>, ScrollBehavior),
    Pan(PanDirection),
    PreviewScrolled(scrollable::Viewport),
    PreviewPressed(PointerButton),
    PreviewWheel(ScrollDelta),
    PreviewHover(iced::Point),
    PreviewExit,
    CursorMoved(iced::Point),
    ModifiersChanged(Modifiers),
    DragEnded,
    AnimationFrame(Instant),
    Highlight(Option<usize>),

    // Chrome
    ToggleTheme,
    ToggleLogPanel,
    ClearLogs,
    LogReceived(LogEntry),
    AlertDismissed,
}

/// State of the job list dialog
#[derive(Debug, Default)]
pub struct JobList {
    pub jobs: Vec<UploadJob>,
    pub loading: bool,
    pub deleting: Option<String>,
}

pub struct RestoraViewer {
    config: Config,
    config_path: Option<PathBuf>,
    client: ApiClient,
    document: Option<Document>,
    viewport: ViewportController,
    highlight: Option<usize>,
    loading: bool,
    logs: LogBook,
    job_list: Option<JobList>,
    /// Last cursor position in window coordinates
    cursor: iced::Point,
    modifiers: Modifiers,
    /// Visible size of the preview, as last measured
    container: Option<Extent>,
    /// Offset the preview scrollable is showing
    offset: ViewPoint,
    animation: Option<ScrollAnimation>,
}

impl RestoraViewer {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        client: ApiClient,
    ) -> (Self, Task<Message>) {
        let mut logs = LogBook::new(config.ui.log_capacity);
        logs.push(LogEntry::system(format!(
            "Using backend {}",
            client.base_url()
        )));

        (
            Self {
                viewport: ViewportController::new(config.viewport),
                config,
                config_path,
                client,
                document: None,
                highlight: None,
                loading: false,
                logs,
                job_list: None,
                cursor: iced::Point::ORIGIN,
                modifiers: Modifiers::default(),
                container: None,
                offset: ViewPoint::default(),
                animation: None,
            },
            Task::none(),
        )
    }

    fn log(&mut self, message: impl Into<String>) {
        let entry = LogEntry::frontend(message);
        tracing::debug!("{}", entry.message);
        self.logs.push(entry);
    }

    fn save_config(&self) {
        let Some(path) = self.config_path.as_deref() else {
            return;
        };
        if let Err(e) = self.config.save_to_file(path) {
            tracing::warn!("Failed to save config to {}: {}", path.display(), e);
        }
    }

    fn alert(message: String) -> Task<Message> {
        Task::perform(dialogs::alert(message), |_| Message::AlertDismissed)
    }

    /// Replace the displayed page and start fetching its scan
    fn show_page(&mut self, source: String, page: PageData) -> Task<Message> {
        self.viewport.clear();
        self.animation = None;
        self.highlight = None;

        let image_path = page.has_image().then(|| page.clean_image.clone());
        self.document = Some(Document::new(source, page));

        match image_path {
            Some(path) => {
                let client = self.client.clone();
                Task::perform(
                    renderer::load_page_image(client, path.clone()),
                    move |result| Message::ImageLoaded { path: path.clone(), result },
                )
            }
            None => {
                self.log("Response has no clean image to display");
                Task::none()
            }
        }
    }

    fn measure_and_fit(&self, behavior: ScrollBehavior) -> Task<Message> {
        container::visible_bounds(preview_container_id())
            .map(move |bounds| Message::ContainerMeasured(bounds, behavior))
    }

    /// Keep offsets inside the scrollable surface
    fn clamp_scroll(&self, x: f32, y: f32) -> ViewPoint {
        match (self.viewport.surface_extent(), self.container) {
            (Some(surface), Some(container)) => ViewPoint::new(
                x.clamp(0.0, (surface.width - container.width).max(0.0)),
                y.clamp(0.0, (surface.height - container.height).max(0.0)),
            ),
            _ => ViewPoint::new(x.max(0.0), y.max(0.0)),
        }
    }

    fn apply_scroll(&mut self, request: ScrollRequest) -> Task<Message> {
        let target = self.clamp_scroll(request.x, request.y);
        self.viewport.sync_scroll(target.x, target.y);

        match request.behavior {
            ScrollBehavior::Jump => {
                self.animation = None;
                self.offset = target;
                scroll_to(target)
            }
            ScrollBehavior::Animate => {
                self.animation = Some(ScrollAnimation::new(self.offset, target));
                Task::none()
            }
        }
    }

    fn has_image(&self) -> bool {
        self.document
            .as_ref()
            .and_then(Document::content_extent)
            .is_some()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile => {
                if !self.loading {
                    return Task::perform(dialogs::pick_document(), Message::FilePicked);
                }
            }
            Message::FilePicked(None) => {}
            Message::FilePicked(Some(path)) => {
                let source = file_name(&path);
                self.log(format!("Started processing file {}", source));
                self.log("Sending POST /upload request...");
                self.loading = true;

                let client = self.client.clone();
                return Task::perform(
                    async move { client.upload(&path).await.map_err(|e| e.to_string()) },
                    move |result| Message::PageProcessed { source: source.clone(), result },
                );
            }
            Message::PageProcessed { source, result } => {
                self.loading = false;
                match result {
                    Ok(page) => {
                        self.log("Received response. Parsing layout...");
                        let task = self.show_page(source, page);
                        self.log("Data successfully updated.");
                        return task;
                    }
                    Err(e) => {
                        tracing::error!("Processing {} failed: {}", source, e);
                        self.log(format!("Error during processing - {}", e));
                        return Self::alert(format!("An error occurred! {}", e));
                    }
                }
            }
            Message::ImageLoaded { path, result } => {
                let Some(document) = self.document.as_mut() else {
                    return Task::none();
                };
                if document.page().clean_image != path {
                    tracing::debug!("Dropping stale image {}", path);
                    return Task::none();
                }
                match result {
                    Ok(image) => {
                        self.viewport.set_content(image.extent());
                        document.set_image(image);
                        return self.measure_and_fit(ScrollBehavior::Jump);
                    }
                    Err(e) => {
                        tracing::error!("{}", e);
                        self.log(format!("Failed to load page image - {}", e));
                    }
                }
            }
            Message::ClearDocument => {
                self.document = None;
                self.viewport.clear();
                self.highlight = None;
                self.animation = None;
            }

            Message::OpenJobList => {
                if self.loading {
                    return Task::none();
                }
                self.job_list = Some(JobList {
                    loading: true,
                    ..JobList::default()
                });
                let client = self.client.clone();
                return Task::perform(
                    async move { client.list_uploads().await.map_err(|e| e.to_string()) },
                    Message::JobsLoaded,
                );
            }
            Message::CloseJobList => {
                self.job_list = None;
            }
            Message::JobsLoaded(result) => {
                let Some(list) = self.job_list.as_mut() else {
                    return Task::none();
                };
                list.loading = false;
                match result {
                    Ok(jobs) => list.jobs = jobs,
                    Err(e) => {
                        tracing::error!("Error fetching files: {}", e);
                        self.log(format!("Error fetching files - {}", e));
                    }
                }
            }
            Message::OpenJob(job_id) => {
                let source = self
                    .job_list
                    .take()
                    .and_then(|list| list.jobs.into_iter().find(|job| job.id == job_id))
                    .map(|job| job.file_name().to_string())
                    .unwrap_or_else(|| job_id.clone());

                self.log(format!("Opening existing job {}", job_id));
                self.loading = true;
                let client = self.client.clone();
                return Task::perform(
                    async move {
                        client
                            .process_existing(&job_id)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    move |result| Message::PageProcessed { source: source.clone(), result },
                );
            }
            Message::DeleteJob(job_id) => {
                let name = self
                    .job_list
                    .as_ref()
                    .and_then(|list| list.jobs.iter().find(|job| job.id == job_id))
                    .map(|job| job.file_name().to_string())
                    .unwrap_or_else(|| job_id.clone());
                return Task::perform(dialogs::confirm_delete(name), move |confirmed| {
                    Message::DeleteConfirmed { job_id: job_id.clone(), confirmed }
                });
            }
            Message::DeleteConfirmed { job_id, confirmed } => {
                if !confirmed {
                    return Task::none();
                }
                if let Some(list) = self.job_list.as_mut() {
                    list.deleting = Some(job_id.clone());
                }
                let client = self.client.clone();
                return Task::perform(
                    async move {
                        let result = client
                            .delete_upload(&job_id)
                            .await
                            .map_err(|e| e.to_string());
                        (job_id, result)
                    },
                    |(job_id, result)| Message::JobDeleted { job_id, result },
                );
            }
            Message::JobDeleted { job_id, result } => {
                if let Some(list) = self.job_list.as_mut() {
                    list.deleting = None;
                }
                match result {
                    Ok(()) => {
                        if let Some(list) = self.job_list.as_mut() {
                            list.jobs.retain(|job| job.id != job_id);
                        }
                        self.log(format!("Deleted job {}", job_id));
                        if self.document.as_ref().and_then(Document::job_id) == Some(job_id.as_str()) {
                            self.log("The displayed page belongs to the deleted job");
                        }
                    }
                    Err(e) => {
                        tracing::error!("Error deleting job {}: {}", job_id, e);
                        self.log(format!("Error deleting job {} - {}", job_id, e));
                        return Self::alert(format!("Error deleting job: {}", e));
                    }
                }
            }

            Message::ZoomIn => {
                self.viewport.zoom_in();
            }
            Message::ZoomOut => {
                self.viewport.zoom_out();
            }
            Message::ResetZoom => {
                self.viewport.reset_zoom();
            }
            Message::FitToContent => {
                return self.measure_and_fit(ScrollBehavior::Animate);
            }
            Message::ContainerMeasured(bounds, behavior) => {
                if let Some(bounds) = bounds {
                    self.container = Some(Extent::new(bounds.width, bounds.height));
                }
                let Some(container) = self.container else {
                    return Task::none();
                };
                if let Some(request) = self.viewport.fit_to_content(container, behavior) {
                    return self.apply_scroll(request);
                }
            }
            Message::Pan(direction) => {
                if self.has_image() {
                    let request = self.viewport.pan(direction);
                    return self.apply_scroll(request);
                }
            }
            Message::PreviewScrolled(viewport) => {
                let offset = viewport.absolute_offset();
                let bounds = viewport.bounds();
                self.offset = ViewPoint::new(offset.x, offset.y);
                self.container = Some(Extent::new(bounds.width, bounds.height));
                if self.animation.is_none() && !self.viewport.is_dragging() {
                    self.viewport.sync_scroll(offset.x, offset.y);
                }
            }
            Message::PreviewPressed(button) => {
                if self.has_image()
                    && self
                        .viewport
                        .begin_drag(button, to_view_point(self.cursor), self.offset)
                {
                    self.animation = None;
                }
            }
            Message::CursorMoved(position) => {
                self.cursor = position;
                if let Some(request) = self.viewport.drag_to(to_view_point(position)) {
                    return self.apply_scroll(request);
                }
            }
            Message::DragEnded => {
                if self.viewport.end_drag() {
                    self.viewport.sync_scroll(self.offset.x, self.offset.y);
                }
            }
            Message::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
            }
            Message::PreviewWheel(delta) => {
                // iced reports wheel-up as positive y; the viewport expects the opposite
                let (dx, dy) = match delta {
                    ScrollDelta::Lines { x, y } => (-x * LINE_HEIGHT, -y * LINE_HEIGHT),
                    ScrollDelta::Pixels { x, y } => (-x, -y),
                };
                if self.viewport.on_wheel(dy, self.modifiers.command()) == WheelOutcome::Ignored {
                    return scrollable::scroll_by(
                        preview_scroll_id(),
                        scrollable::AbsoluteOffset { x: dx, y: dy },
                    );
                }
            }
            Message::PreviewHover(position) => {
                if self.viewport.is_dragging() {
                    return Task::none();
                }
                if let Some(document) = &self.document {
                    let point = self.viewport.content_point(to_view_point(position));
                    self.highlight = document.page().layout.line_at(point.x, point.y);
                }
            }
            Message::PreviewExit => {
                if !self.viewport.is_dragging() {
                    self.highlight = None;
                }
            }
            Message::AnimationFrame(now) => {
                if let Some(animation) = self.animation.as_mut() {
                    let (offset, finished) = animation.sample(now);
                    if finished {
                        let target = animation.target();
                        self.animation = None;
                        self.viewport.sync_scroll(target.x, target.y);
                    }
                    self.offset = offset;
                    return scroll_to(offset);
                }
            }
            Message::Highlight(index) => {
                self.highlight = index;
            }

            Message::ToggleTheme => {
                self.config.ui.theme = self.config.ui.theme.next();
                self.save_config();
            }
            Message::ToggleLogPanel => {
                self.config.ui.log_panel_open = !self.config.ui.log_panel_open;
                self.save_config();
            }
            Message::ClearLogs => {
                self.logs.clear();
            }
            Message::LogReceived(entry) => {
                self.logs.push(entry);
            }
            Message::AlertDismissed => {}
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        let header = views::header::view(
            self.loading,
            self.document.is_some(),
            self.config.ui.theme,
            self.config.ui.log_panel_open,
        );

        let panes = row![
            views::preview::view(self.document.as_ref(), &self.viewport, self.highlight),
            views::text_panel::view(self.document.as_ref(), self.highlight),
        ]
        .height(Length::Fill);

        let body = if self.loading {
            views::blocking_overlay(panes, views::loading_card())
        } else {
            panes.into()
        };

        let mut layout = column![header, body];
        if self.config.ui.log_panel_open {
            layout = layout.push(views::log_panel::view(&self.logs));
        }

        match &self.job_list {
            Some(list) => views::modal(layout, views::job_list::view(list), Message::CloseJobList),
            None => layout.into(),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.config.ui.theme {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark | ThemePreference::System => Theme::Dark,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![subscriptions::input_events()];

        match self.client.log_stream_url() {
            Ok(url) => subscriptions.push(subscriptions::log_stream(
                url,
                Duration::from_secs(self.config.backend.reconnect_delay_secs),
            )),
            Err(e) => tracing::warn!("No log stream: {}", e),
        }

        if self.viewport.is_dragging() {
            subscriptions.push(subscriptions::drag_release());
        }
        if self.animation.is_some() {
            subscriptions.push(window::frames().map(Message::AnimationFrame));
        }

        Subscription::batch(subscriptions)
    }
}

fn scroll_to(offset: ViewPoint) -> Task<Message> {
    scrollable::scroll_to(
        preview_scroll_id(),
        scrollable::AbsoluteOffset {
            x: offset.x,
            y: offset.y,
        },
    )
}

fn to_view_point(point: iced::Point) -> ViewPoint {
    ViewPoint::new(point.x, point.y)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Untitled")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;
    use pretty_assertions::assert_eq;
    use restora_core::{BoundingBox, OcrLayout, TextLine};

    fn viewer() -> RestoraViewer {
        let client = ApiClient::new("http://localhost:8000").unwrap();
        let (viewer, _) = RestoraViewer::new(Config::default(), None, client);
        viewer
    }

    fn page(clean_image: &str) -> PageData {
        PageData {
            job_id: Some("job-1".to_string()),
            clean_image: clean_image.to_string(),
            text: "Merhaba".to_string(),
            layout: OcrLayout {
                text_lines: vec![TextLine {
                    text: "Merhaba".to_string(),
                    bbox: BoundingBox::new(10.0, 10.0, 110.0, 30.0),
                    confidence: None,
                }],
                image_bbox: None,
            },
            typos: Vec::new(),
        }
    }

    fn page_image(width: u32, height: u32) -> PageImage {
        PageImage {
            handle: Handle::from_rgba(width, height, vec![255; (width * height * 4) as usize]),
            width,
            height,
        }
    }

    fn show(viewer: &mut RestoraViewer, clean_image: &str) {
        let _ = viewer.update(Message::PageProcessed {
            source: "scan.png".to_string(),
            result: Ok(page(clean_image)),
        });
        let _ = viewer.update(Message::ImageLoaded {
            path: clean_image.to_string(),
            result: Ok(page_image(400, 300)),
        });
    }

    fn messages(viewer: &RestoraViewer) -> Vec<&str> {
        viewer.logs.iter().map(|entry| entry.message.as_str()).collect()
    }

    #[test]
    fn processed_page_replaces_document() {
        let mut viewer = viewer();
        let _ = viewer.update(Message::FilePicked(Some(PathBuf::from("/tmp/scan.png"))));
        assert!(viewer.loading);

        show(&mut viewer, "uploads/job-1/clean.png");

        assert!(!viewer.loading);
        let document = viewer.document.as_ref().unwrap();
        assert_eq!(document.job_id(), Some("job-1"));
        assert!(document.image().is_some());
        assert_eq!(
            viewer.viewport.content_extent(),
            Some(Extent::new(400.0, 300.0))
        );
        let logs = messages(&viewer);
        assert!(logs.contains(&"Started processing file scan.png"));
        assert!(logs.contains(&"Data successfully updated."));
    }

    #[test]
    fn failed_processing_keeps_previous_page() {
        let mut viewer = viewer();
        show(&mut viewer, "uploads/job-1/clean.png");

        let _ = viewer.update(Message::PageProcessed {
            source: "broken.pdf".to_string(),
            result: Err("OCR failed".to_string()),
        });

        assert!(!viewer.loading);
        assert_eq!(viewer.document.as_ref().unwrap().source(), "scan.png");
        assert_eq!(
            viewer.logs.last().unwrap().message,
            "Error during processing - OCR failed"
        );
    }

    #[test]
    fn stale_image_is_ignored() {
        let mut viewer = viewer();
        let _ = viewer.update(Message::PageProcessed {
            source: "second.png".to_string(),
            result: Ok(page("uploads/job-2/clean.png")),
        });
        let _ = viewer.update(Message::ImageLoaded {
            path: "uploads/job-1/clean.png".to_string(),
            result: Ok(page_image(10, 10)),
        });

        assert!(viewer.document.as_ref().unwrap().image().is_none());
        assert_eq!(viewer.viewport.content_extent(), None);
    }

    #[test]
    fn zoom_buttons_stay_in_bounds() {
        let mut viewer = viewer();
        for _ in 0..50 {
            let _ = viewer.update(Message::ZoomIn);
        }
        assert_eq!(viewer.viewport.zoom(), viewer.viewport.settings().zoom_max);

        let _ = viewer.update(Message::ResetZoom);
        assert_eq!(viewer.viewport.zoom(), 1.0);
    }

    #[test]
    fn wheel_zooms_only_with_command_held() {
        let mut viewer = viewer();
        let wheel_up = ScrollDelta::Lines { x: 0.0, y: 1.0 };

        let _ = viewer.update(Message::PreviewWheel(wheel_up));
        assert_eq!(viewer.viewport.zoom(), 1.0);

        let _ = viewer.update(Message::ModifiersChanged(Modifiers::COMMAND));
        let _ = viewer.update(Message::PreviewWheel(wheel_up));
        assert!(viewer.viewport.zoom() > 1.0);
    }

    #[test]
    fn hover_highlights_line_under_cursor() {
        let mut viewer = viewer();
        show(&mut viewer, "uploads/job-1/clean.png");
        let _ = viewer.update(Message::ResetZoom);

        let margin = viewer.viewport.settings().scroll_buffer / 2.0;
        let _ = viewer.update(Message::PreviewHover(iced::Point::new(
            margin + 50.0,
            margin + 20.0,
        )));
        assert_eq!(viewer.highlight, Some(0));

        let _ = viewer.update(Message::PreviewHover(iced::Point::new(
            margin + 300.0,
            margin + 200.0,
        )));
        assert_eq!(viewer.highlight, None);
    }

    #[test]
    fn window_release_closes_drag_session() {
        let mut viewer = viewer();
        show(&mut viewer, "uploads/job-1/clean.png");
        let _ = viewer.update(Message::PreviewPressed(PointerButton::Primary));
        assert!(viewer.viewport.is_dragging());

        let release = iced::Event::Mouse(iced::mouse::Event::ButtonReleased(
            iced::mouse::Button::Left,
        ));
        let message = subscriptions::drag_event(
            release,
            iced::event::Status::Ignored,
            window::Id::unique(),
        )
        .unwrap();
        let _ = viewer.update(message);

        assert!(!viewer.viewport.is_dragging());
    }

    #[test]
    fn animation_end_syncs_viewport_scroll() {
        let mut viewer = viewer();
        show(&mut viewer, "uploads/job-1/clean.png");
        viewer.container = Some(Extent::new(200.0, 200.0));
        viewer.offset = ViewPoint::new(300.0, 300.0);

        let _ = viewer.update(Message::Pan(PanDirection::Down));
        let target = viewer.animation.unwrap().target();
        viewer.viewport.sync_scroll(0.0, 0.0);

        let start = Instant::now();
        let _ = viewer.update(Message::AnimationFrame(start));
        let _ = viewer.update(Message::AnimationFrame(start + Duration::from_secs(1)));

        assert!(viewer.animation.is_none());
        assert_eq!(viewer.offset, target);
        assert_eq!(viewer.viewport.scroll(), target);
    }

    #[test]
    fn drag_follows_cursor_until_release() {
        let mut viewer = viewer();
        show(&mut viewer, "uploads/job-1/clean.png");
        let _ = viewer.update(Message::ResetZoom);
        viewer.container = Some(Extent::new(200.0, 200.0));
        viewer.offset = ViewPoint::new(300.0, 300.0);

        let _ = viewer.update(Message::CursorMoved(iced::Point::new(100.0, 100.0)));
        let _ = viewer.update(Message::PreviewPressed(PointerButton::Primary));
        assert!(viewer.viewport.is_dragging());

        let _ = viewer.update(Message::CursorMoved(iced::Point::new(150.0, 130.0)));
        assert_eq!(viewer.offset, ViewPoint::new(250.0, 270.0));

        let _ = viewer.update(Message::DragEnded);
        assert!(!viewer.viewport.is_dragging());
        assert_eq!(viewer.viewport.scroll(), ViewPoint::new(250.0, 270.0));
    }

    #[test]
    fn secondary_button_does_not_drag() {
        let mut viewer = viewer();
        show(&mut viewer, "uploads/job-1/clean.png");

        let _ = viewer.update(Message::PreviewPressed(PointerButton::Secondary));
        assert!(!viewer.viewport.is_dragging());
    }

    #[test]
    fn deleted_job_leaves_list() {
        let mut viewer = viewer();
        viewer.job_list = Some(JobList {
            jobs: vec![UploadJob {
                id: "job-1".to_string(),
                upload_date: "2026-10-01T09:00:00".to_string(),
                original_file: "uploads/job-1/scan.png".to_string(),
                processed_files: Vec::new(),
            }],
            loading: false,
            deleting: Some("job-1".to_string()),
        });

        let _ = viewer.update(Message::JobDeleted {
            job_id: "job-1".to_string(),
            result: Ok(()),
        });

        let list = viewer.job_list.as_ref().unwrap();
        assert!(list.jobs.is_empty());
        assert_eq!(list.deleting, None);
    }

    #[test]
    fn theme_preference_cycles() {
        let mut viewer = viewer();
        assert_eq!(viewer.theme(), Theme::Dark);
        let _ = viewer.update(Message::ToggleTheme);
        let _ = viewer.update(Message::ToggleTheme);
        assert_eq!(viewer.config.ui.theme, ThemePreference::Dark);
    }
}
