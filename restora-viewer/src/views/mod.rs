pub mod header;
pub mod job_list;
pub mod log_panel;
pub mod preview;
pub mod text_panel;

use crate::app::Message;
use iced::widget::{center, column, container, mouse_area, opaque, stack, text};
use iced::{Alignment, Color, Element, Theme};

fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.7,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}

/// Dialog over `base`; clicking outside the dialog sends `on_blur`
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(mouse_area(center(opaque(content)).style(backdrop)).on_press(on_blur))
    ]
    .into()
}

/// Covers `base` and swallows its input until removed
pub fn blocking_overlay<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    stack![base.into(), opaque(center(content).style(backdrop))].into()
}

pub fn loading_card<'a>() -> Element<'a, Message> {
    container(
        column![
            text("AI processing").size(20),
            text("Restoring the page and extracting text, please wait...").size(14),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .style(container::rounded_box)
    .into()
}
