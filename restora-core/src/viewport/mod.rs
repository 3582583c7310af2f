//! Viewport controller for a pannable, zoomable document image
//!
//! The controller owns zoom and scroll state for one displayed page and turns
//! button, pointer and wheel input into deterministic state changes. It never
//! renders or animates anything itself: operations that move the view return a
//! [`ScrollRequest`] for the hosting surface to apply, and the host reports the
//! offsets it actually settled on back through [`ViewportController::sync_scroll`].

mod drag;

pub use drag::{DragSession, PointerButton};

use crate::error::{Error, Result};
use crate::layout::BoundingBox;
use serde::{Deserialize, Serialize};

/// A position or offset in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of either the displayed content or the visible container
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// An extent with a zero, negative or non-finite side cannot be fitted
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Rectangle in scaled (on-screen) content coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverlayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// How the hosting surface should apply a scroll change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Move instantly (first load, drag)
    Jump,
    /// Move with the surface's smooth scrolling (explicit user action)
    Animate,
}

/// Absolute scroll offset the hosting surface should move to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub x: f32,
    pub y: f32,
    pub behavior: ScrollBehavior,
}

/// Whether a wheel event was used for zooming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The event zoomed (or would have at a bound); native scrolling must be suppressed
    Consumed,
    /// Native scrolling applies unmodified
    Ignored,
}

/// Directional-pad panning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Zoom/scroll state of the displayed page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom: f32,
    pub scroll_x: f32,
    pub scroll_y: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: ViewportController::DEFAULT_ZOOM,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}

/// Tunable bounds and step sizes of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Lowest zoom reachable by any operation
    pub zoom_min: f32,
    /// Highest zoom reachable interactively
    pub zoom_max: f32,
    /// Highest zoom fit-to-content will pick, keeps small scans from being blown up
    pub fit_zoom_max: f32,
    /// Additive zoom change of one zoom-in/zoom-out
    pub zoom_step: f32,
    /// Margin subtracted from each container side before fitting
    pub fit_padding: f32,
    /// Extra scroll room the surface adds around the scaled content (split evenly)
    pub scroll_buffer: f32,
    /// Distance of one directional-pad pan
    pub pan_step: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            zoom_min: 0.1,
            zoom_max: 5.0,
            fit_zoom_max: 3.0,
            zoom_step: 0.2,
            fit_padding: 64.0,
            scroll_buffer: 1000.0,
            pan_step: 150.0,
        }
    }
}

impl ViewportSettings {
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.zoom_min,
            self.zoom_max,
            self.fit_zoom_max,
            self.zoom_step,
            self.fit_padding,
            self.scroll_buffer,
            self.pan_step,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(Error::Config("viewport values must be finite".to_string()));
        }
        if self.zoom_min <= 0.0 {
            return Err(Error::Config("zoom_min must be > 0".to_string()));
        }
        if self.zoom_min > self.zoom_max {
            return Err(Error::Config("zoom_min must not exceed zoom_max".to_string()));
        }
        if self.fit_zoom_max < self.zoom_min || self.fit_zoom_max > self.zoom_max {
            return Err(Error::Config(
                "fit_zoom_max must lie within [zoom_min, zoom_max]".to_string(),
            ));
        }
        if self.zoom_step <= 0.0 {
            return Err(Error::Config("zoom_step must be > 0".to_string()));
        }
        if self.fit_padding < 0.0 || self.scroll_buffer < 0.0 {
            return Err(Error::Config(
                "fit_padding and scroll_buffer must be >= 0".to_string(),
            ));
        }
        if self.pan_step <= 0.0 {
            return Err(Error::Config("pan_step must be > 0".to_string()));
        }
        Ok(())
    }
}

/// Scale that fits `content` inside `container` minus the padding margin,
/// clamped to `[zoom_min, fit_zoom_max]`.
///
/// Returns `None` when either extent is empty. A container smaller than the
/// padding yields `zoom_min`.
pub fn fit_scale(settings: &ViewportSettings, container: Extent, content: Extent) -> Option<f32> {
    if container.is_empty() || content.is_empty() {
        return None;
    }

    let available_width = container.width - settings.fit_padding;
    let available_height = container.height - settings.fit_padding;
    let scale = (available_width / content.width).min(available_height / content.height);
    // max/min instead of clamp: inverted settings must not panic
    Some(scale.max(settings.zoom_min).min(settings.fit_zoom_max))
}

/// Scroll offset that centers content scaled by `zoom` inside the container
pub fn centered_scroll(
    settings: &ViewportSettings,
    container: Extent,
    content: Extent,
    zoom: f32,
) -> Point {
    let total_width = content.width * zoom + settings.scroll_buffer;
    let total_height = content.height * zoom + settings.scroll_buffer;
    Point {
        x: total_width / 2.0 - container.width / 2.0,
        y: total_height / 2.0 - container.height / 2.0,
    }
}

/// Viewport controller manages the zoom and scroll of one displayed page
#[derive(Debug, Clone)]
pub struct ViewportController {
    settings: ViewportSettings,
    state: ViewportState,
    content: Option<Extent>,
    drag: Option<DragSession>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewportSettings::default())
    }
}

impl ViewportController {
    pub const DEFAULT_ZOOM: f32 = 1.0;

    pub fn new(settings: ViewportSettings) -> Self {
        let mut controller = Self {
            settings,
            state: ViewportState::default(),
            content: None,
            drag: None,
        };
        controller.state.zoom = controller.clamp_zoom(Self::DEFAULT_ZOOM);
        controller
    }

    pub fn settings(&self) -> &ViewportSettings {
        &self.settings
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    pub fn scroll(&self) -> Point {
        Point::new(self.state.scroll_x, self.state.scroll_y)
    }

    /// Natural size of the displayed image, once it has loaded
    pub fn content_extent(&self) -> Option<Extent> {
        self.content
    }

    /// Record the natural image size after a successful load.
    ///
    /// An empty extent leaves the controller without content, so fitting stays inert.
    pub fn set_content(&mut self, extent: Extent) {
        if extent.is_empty() {
            tracing::debug!("Ignoring empty content extent {:?}", extent);
            self.content = None;
        } else {
            self.content = Some(extent);
        }
    }

    /// Discard all state when the document is cleared or replaced
    pub fn clear(&mut self) {
        self.state = ViewportState {
            zoom: self.clamp_zoom(Self::DEFAULT_ZOOM),
            ..ViewportState::default()
        };
        self.content = None;
        self.drag = None;
    }

    /// Host-reported scroll offset, after its own clamping
    pub fn sync_scroll(&mut self, x: f32, y: f32) {
        self.state.scroll_x = x;
        self.state.scroll_y = y;
    }

    fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.max(self.settings.zoom_min).min(self.settings.zoom_max)
    }

    /// Returns true if the zoom changed
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let zoom = self.clamp_zoom(zoom);
        let changed = zoom != self.state.zoom;
        self.state.zoom = zoom;
        changed
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.state.zoom + self.settings.zoom_step)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.state.zoom - self.settings.zoom_step)
    }

    /// Back to 100%; the scroll position is left alone
    pub fn reset_zoom(&mut self) {
        self.state.zoom = self.clamp_zoom(Self::DEFAULT_ZOOM);
    }

    /// Fit the loaded content into `container` and center it.
    ///
    /// Does nothing and returns `None` before the content size is known.
    pub fn fit_to_content(
        &mut self,
        container: Extent,
        behavior: ScrollBehavior,
    ) -> Option<ScrollRequest> {
        let content = self.content?;
        let zoom = fit_scale(&self.settings, container, content)?;
        let scroll = centered_scroll(&self.settings, container, content, zoom);

        tracing::debug!(
            "Fit {}x{} into {}x{}: zoom {:.3}",
            content.width,
            content.height,
            container.width,
            container.height,
            zoom
        );

        self.state = ViewportState {
            zoom,
            scroll_x: scroll.x,
            scroll_y: scroll.y,
        };
        Some(ScrollRequest {
            x: scroll.x,
            y: scroll.y,
            behavior,
        })
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) -> ScrollRequest {
        self.state.scroll_x += dx;
        self.state.scroll_y += dy;
        ScrollRequest {
            x: self.state.scroll_x,
            y: self.state.scroll_y,
            behavior: ScrollBehavior::Animate,
        }
    }

    pub fn pan(&mut self, direction: PanDirection) -> ScrollRequest {
        let step = self.settings.pan_step;
        match direction {
            PanDirection::Up => self.pan_by(0.0, -step),
            PanDirection::Down => self.pan_by(0.0, step),
            PanDirection::Left => self.pan_by(-step, 0.0),
            PanDirection::Right => self.pan_by(step, 0.0),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Open a drag session. Only the primary button starts one, and only
    /// when no other session is open. Returns true if a session was opened.
    pub fn begin_drag(
        &mut self,
        button: PointerButton,
        pointer: Point,
        current_scroll: Point,
    ) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        if self.drag.is_some() {
            tracing::debug!("Drag already in progress, ignoring new press");
            return false;
        }
        self.state.scroll_x = current_scroll.x;
        self.state.scroll_y = current_scroll.y;
        self.drag = Some(DragSession::new(pointer, current_scroll));
        true
    }

    pub fn drag_to(&mut self, pointer: Point) -> Option<ScrollRequest> {
        let scroll = self.drag.as_ref()?.scroll_for(pointer);
        self.state.scroll_x = scroll.x;
        self.state.scroll_y = scroll.y;
        Some(ScrollRequest {
            x: scroll.x,
            y: scroll.y,
            behavior: ScrollBehavior::Jump,
        })
    }

    /// Close the drag session; a no-op without one. Returns true if a session was closed.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Wheel input: zooms only while the zoom modifier is held
    pub fn on_wheel(&mut self, delta_y: f32, modifier_pressed: bool) -> WheelOutcome {
        if !modifier_pressed {
            return WheelOutcome::Ignored;
        }
        if delta_y < 0.0 {
            self.zoom_in();
        } else if delta_y > 0.0 {
            self.zoom_out();
        }
        WheelOutcome::Consumed
    }

    /// Where the host should draw `bbox` at the current zoom
    pub fn overlay_rect(&self, bbox: &BoundingBox) -> OverlayRect {
        let zoom = self.state.zoom;
        OverlayRect {
            left: bbox.x0 * zoom,
            top: bbox.y0 * zoom,
            width: bbox.width() * zoom,
            height: bbox.height() * zoom,
        }
    }

    /// Convert a point on the padded scroll surface to content pixels
    pub fn content_point(&self, surface: Point) -> Point {
        let margin = self.settings.scroll_buffer / 2.0;
        Point {
            x: (surface.x - margin) / self.state.zoom,
            y: (surface.y - margin) / self.state.zoom,
        }
    }

    /// Size of the scroll surface: scaled content plus the scroll buffer
    pub fn surface_extent(&self) -> Option<Extent> {
        self.content.map(|content| {
            Extent::new(
                content.width * self.state.zoom + self.settings.scroll_buffer,
                content.height * self.state.zoom + self.settings.scroll_buffer,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn loaded(width: f32, height: f32) -> ViewportController {
        let mut viewport = ViewportController::default();
        viewport.set_content(Extent::new(width, height));
        viewport
    }

    #[test]
    fn starts_at_default_zoom() {
        let viewport = ViewportController::default();
        assert_eq!(viewport.zoom(), 1.0);
        assert_eq!(viewport.scroll(), Point::new(0.0, 0.0));
        assert!(viewport.content_extent().is_none());
    }

    #[test]
    fn zoom_in_stops_at_upper_bound() {
        let mut viewport = ViewportController::default();
        for _ in 0..100 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom(), 5.0);
        assert!(!viewport.zoom_in());
        assert_eq!(viewport.zoom(), 5.0);
    }

    #[test]
    fn zoom_out_stops_at_lower_bound() {
        let mut viewport = ViewportController::default();
        for _ in 0..100 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom(), 0.1);
        assert!(!viewport.zoom_out());
    }

    #[test]
    fn reset_zoom_keeps_scroll() {
        let mut viewport = ViewportController::default();
        viewport.zoom_in();
        viewport.pan_by(30.0, 40.0);
        viewport.reset_zoom();
        assert_eq!(viewport.zoom(), 1.0);
        assert_eq!(viewport.scroll(), Point::new(30.0, 40.0));
    }

    #[test]
    fn fit_scale_uses_smaller_ratio() {
        let settings = ViewportSettings::default();
        let scale = fit_scale(
            &settings,
            Extent::new(800.0, 600.0),
            Extent::new(1600.0, 1200.0),
        )
        .unwrap();
        let expected = ((800.0 - 64.0) / 1600.0_f32).min((600.0 - 64.0) / 1200.0);
        assert!((scale - expected).abs() < EPS);
        assert!((scale - 0.4467).abs() < 1e-3);
    }

    #[test]
    fn fit_scale_caps_small_images() {
        let settings = ViewportSettings::default();
        let scale = fit_scale(&settings, Extent::new(2000.0, 2000.0), Extent::new(10.0, 10.0));
        assert_eq!(scale, Some(3.0));
    }

    #[test]
    fn fit_scale_rejects_empty_extents() {
        let settings = ViewportSettings::default();
        assert!(fit_scale(&settings, Extent::new(800.0, 600.0), Extent::new(0.0, 600.0)).is_none());
        assert!(fit_scale(&settings, Extent::new(0.0, 0.0), Extent::new(100.0, 100.0)).is_none());
    }

    #[test]
    fn fit_scale_without_room_uses_min_zoom() {
        let settings = ViewportSettings::default();
        let scale = fit_scale(&settings, Extent::new(60.0, 60.0), Extent::new(100.0, 100.0));
        assert_eq!(scale, Some(settings.zoom_min));
    }

    #[test]
    fn fit_into_flat_container_zooms_out_and_centers() {
        let mut viewport = loaded(1600.0, 1200.0);
        viewport.zoom_in();
        let request = viewport
            .fit_to_content(Extent::new(2000.0, 50.0), ScrollBehavior::Jump)
            .unwrap();

        assert!((viewport.zoom() - 0.1).abs() < EPS);
        assert!((request.x - ((160.0 + 1000.0) / 2.0 - 1000.0)).abs() < EPS);
        assert!((request.y - ((120.0 + 1000.0) / 2.0 - 25.0)).abs() < EPS);
    }

    #[test]
    fn inverted_settings_do_not_panic() {
        let settings = ViewportSettings {
            zoom_min: 2.0,
            zoom_max: 1.0,
            fit_zoom_max: 0.5,
            ..ViewportSettings::default()
        };
        assert!(settings.validate().is_err());

        let mut viewport = ViewportController::new(settings);
        viewport.zoom_in();
        viewport.zoom_out();
        viewport.reset_zoom();
        assert!(viewport.zoom().is_finite());

        viewport.set_content(Extent::new(100.0, 100.0));
        assert!(viewport
            .fit_to_content(Extent::new(800.0, 600.0), ScrollBehavior::Jump)
            .is_some());
    }

    #[test]
    fn fit_before_load_is_noop() {
        let mut viewport = ViewportController::default();
        viewport.zoom_in();
        let request = viewport.fit_to_content(Extent::new(800.0, 600.0), ScrollBehavior::Jump);
        assert!(request.is_none());
        assert!((viewport.zoom() - 1.2).abs() < EPS);
    }

    #[test]
    fn fit_centers_scaled_content() {
        let mut viewport = loaded(1600.0, 1200.0);
        let request = viewport
            .fit_to_content(Extent::new(800.0, 600.0), ScrollBehavior::Animate)
            .unwrap();

        let zoom = viewport.zoom();
        assert_eq!(request.behavior, ScrollBehavior::Animate);
        assert!((request.x - ((1600.0 * zoom + 1000.0) / 2.0 - 400.0)).abs() < EPS);
        assert!((request.y - ((1200.0 * zoom + 1000.0) / 2.0 - 300.0)).abs() < EPS);
        assert_eq!(viewport.scroll(), Point::new(request.x, request.y));
    }

    #[test]
    fn empty_content_keeps_fit_inert() {
        let mut viewport = ViewportController::default();
        viewport.set_content(Extent::new(0.0, 1200.0));
        assert!(viewport.content_extent().is_none());
        assert!(viewport
            .fit_to_content(Extent::new(800.0, 600.0), ScrollBehavior::Jump)
            .is_none());
        assert_eq!(viewport.zoom(), 1.0);
    }

    #[test]
    fn drag_moves_scroll_against_pointer() {
        let mut viewport = ViewportController::default();
        assert!(viewport.begin_drag(
            PointerButton::Primary,
            Point::new(100.0, 100.0),
            Point::new(0.0, 0.0)
        ));
        let request = viewport.drag_to(Point::new(150.0, 130.0)).unwrap();
        assert_eq!((request.x, request.y), (-50.0, -30.0));
        assert_eq!(request.behavior, ScrollBehavior::Jump);
        assert_eq!(viewport.scroll(), Point::new(-50.0, -30.0));
    }

    #[test]
    fn only_primary_button_drags() {
        let mut viewport = ViewportController::default();
        assert!(!viewport.begin_drag(PointerButton::Secondary, Point::default(), Point::default()));
        assert!(!viewport.is_dragging());
        assert!(viewport.drag_to(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn second_drag_requires_end() {
        let mut viewport = ViewportController::default();
        assert!(viewport.begin_drag(PointerButton::Primary, Point::default(), Point::default()));
        assert!(!viewport.begin_drag(
            PointerButton::Primary,
            Point::new(5.0, 5.0),
            Point::default()
        ));
        assert!(viewport.end_drag());
        assert!(viewport.begin_drag(PointerButton::Primary, Point::default(), Point::default()));
    }

    #[test]
    fn end_drag_twice_is_noop() {
        let mut viewport = ViewportController::default();
        viewport.begin_drag(PointerButton::Primary, Point::default(), Point::new(3.0, 4.0));
        assert!(viewport.end_drag());
        let before = viewport.state();
        assert!(!viewport.end_drag());
        assert_eq!(viewport.state(), before);
    }

    #[test]
    fn wheel_with_modifier_zooms_one_step() {
        let mut viewport = ViewportController::default();
        assert_eq!(viewport.on_wheel(-10.0, true), WheelOutcome::Consumed);
        assert!((viewport.zoom() - 1.2).abs() < EPS);

        assert_eq!(viewport.on_wheel(10.0, true), WheelOutcome::Consumed);
        assert!((viewport.zoom() - 1.0).abs() < EPS);
    }

    #[test]
    fn wheel_without_modifier_is_ignored() {
        let mut viewport = ViewportController::default();
        assert_eq!(viewport.on_wheel(-10.0, false), WheelOutcome::Ignored);
        assert_eq!(viewport.zoom(), 1.0);
    }

    #[test]
    fn pan_directions_use_step() {
        let mut viewport = ViewportController::default();
        let request = viewport.pan(PanDirection::Right);
        assert_eq!((request.x, request.y), (150.0, 0.0));
        assert_eq!(request.behavior, ScrollBehavior::Animate);
        viewport.pan(PanDirection::Up);
        assert_eq!(viewport.scroll(), Point::new(150.0, -150.0));
    }

    #[test]
    fn clear_resets_everything() {
        let mut viewport = loaded(100.0, 100.0);
        viewport.zoom_in();
        viewport.begin_drag(PointerButton::Primary, Point::default(), Point::new(1.0, 1.0));
        viewport.clear();
        assert_eq!(viewport.state(), ViewportState::default());
        assert!(!viewport.is_dragging());
        assert!(viewport.content_extent().is_none());
    }

    #[test]
    fn overlay_rect_scales_with_zoom() {
        let mut viewport = ViewportController::default();
        viewport.set_zoom(2.0);
        let rect = viewport.overlay_rect(&BoundingBox::new(10.0, 20.0, 110.0, 45.0));
        assert_eq!(
            rect,
            OverlayRect {
                left: 20.0,
                top: 40.0,
                width: 200.0,
                height: 50.0
            }
        );
    }

    #[test]
    fn content_point_removes_margin_and_zoom() {
        let mut viewport = ViewportController::default();
        viewport.set_zoom(2.0);
        let point = viewport.content_point(Point::new(520.0, 700.0));
        assert_eq!(point, Point::new(10.0, 100.0));
    }

    #[test]
    fn settings_validation() {
        assert!(ViewportSettings::default().validate().is_ok());

        let inverted = ViewportSettings {
            zoom_min: 2.0,
            zoom_max: 1.0,
            ..ViewportSettings::default()
        };
        assert!(inverted.validate().is_err());

        let fit_out_of_range = ViewportSettings {
            fit_zoom_max: 8.0,
            ..ViewportSettings::default()
        };
        assert!(fit_out_of_range.validate().is_err());
    }
}
