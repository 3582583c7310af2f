//! Zoomable page preview with the text line overlay and the control island

use crate::app::{preview_container_id, preview_scroll_id, Message};
use crate::document::Document;
use crate::renderer::PageImage;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::{
    button, center, column, container, image, mouse_area, row, scrollable, stack, text,
};
use iced::{
    mouse, Alignment, Color, ContentFit, Element, Font, Length, Rectangle, Renderer, Size, Theme,
};
use restora_core::viewport::{OverlayRect, PanDirection, PointerButton, ViewportController};

pub fn view<'a>(
    document: Option<&'a Document>,
    viewport: &'a ViewportController,
    highlight: Option<usize>,
) -> Element<'a, Message> {
    let image = document.and_then(Document::image);

    let surface: Element<'a, Message> = match (document, image) {
        (None, _) => center(text("Waiting for a document").size(14)).into(),
        (Some(_), None) => center(text("Loading page image...").size(14)).into(),
        (Some(document), Some(image)) => page_surface(document, image, viewport, highlight),
    };

    let mut layers = stack![container(surface)
        .id(preview_container_id())
        .width(Length::Fill)
        .height(Length::Fill)];
    if image.is_some() {
        layers = layers.push(controls(viewport.zoom()));
    }

    container(layers)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .into()
}

fn page_surface<'a>(
    document: &'a Document,
    page_image: &'a PageImage,
    viewport: &'a ViewportController,
    highlight: Option<usize>,
) -> Element<'a, Message> {
    let zoom = viewport.zoom();
    let width = Length::Fixed(page_image.width as f32 * zoom);
    let height = Length::Fixed(page_image.height as f32 * zoom);

    let overlay = LineOverlay {
        boxes: document
            .page()
            .layout
            .text_lines
            .iter()
            .map(|line| viewport.overlay_rect(&line.bbox))
            .collect(),
        highlight,
    };

    let page = stack![
        image(page_image.handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Fill),
        iced::widget::canvas(overlay).width(width).height(height),
    ];

    // Scroll buffer around the page so it can be dragged past its edges
    let padded = container(page).padding(viewport.settings().scroll_buffer / 2.0);

    let interaction = if viewport.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    let surface = mouse_area(padded)
        .on_press(Message::PreviewPressed(PointerButton::Primary))
        .on_right_press(Message::PreviewPressed(PointerButton::Secondary))
        .on_middle_press(Message::PreviewPressed(PointerButton::Middle))
        .on_move(Message::PreviewHover)
        .on_exit(Message::PreviewExit)
        .on_scroll(Message::PreviewWheel)
        .interaction(interaction);

    scrollable(surface)
        .id(preview_scroll_id())
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::default(),
            horizontal: scrollable::Scrollbar::default(),
        })
        .on_scroll(Message::PreviewScrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn controls<'a>(zoom: f32) -> Element<'a, Message> {
    let zoom_row = row![
        button("-").on_press(Message::ZoomOut).style(button::text),
        text(format!("{}%", (zoom * 100.0).round() as i32))
            .font(Font::MONOSPACE)
            .size(13),
        button("+").on_press(Message::ZoomIn).style(button::text),
        button("1:1").on_press(Message::ResetZoom).style(button::text),
        button("Fit").on_press(Message::FitToContent).style(button::text),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let pan = |label: &'static str, direction| {
        button(text(label).size(12))
            .on_press(Message::Pan(direction))
            .style(button::text)
    };
    let d_pad = column![
        pan("▲", PanDirection::Up),
        row![pan("◀", PanDirection::Left), pan("▶", PanDirection::Right)].spacing(16),
        pan("▼", PanDirection::Down),
    ]
    .align_x(Alignment::Center);

    let island = container(row![zoom_row, d_pad].spacing(12).align_y(Alignment::Center))
        .padding(8)
        .style(container::rounded_box);

    container(island)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(24)
        .into()
}

/// Outlines of the detected text lines, in zoomed page coordinates
struct LineOverlay {
    boxes: Vec<OverlayRect>,
    highlight: Option<usize>,
}

impl canvas::Program<Message> for LineOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let accent = theme.extended_palette().primary.base.color;

        for (index, rect) in self.boxes.iter().enumerate() {
            let top_left = iced::Point::new(rect.left, rect.top);
            let size = Size::new(rect.width, rect.height);
            let outline = Path::rectangle(top_left, size);

            if self.highlight == Some(index) {
                frame.fill_rectangle(top_left, size, Color { a: 0.2, ..accent });
                frame.stroke(&outline, Stroke::default().with_color(accent).with_width(2.0));
            } else {
                frame.stroke(
                    &outline,
                    Stroke::default()
                        .with_color(Color { a: 0.3, ..accent })
                        .with_width(1.0),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
