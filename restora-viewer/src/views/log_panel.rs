use crate::app::Message;
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Font, Length, Theme};
use restora_core::{LogBook, LogEntry, LogSource};

const PANEL_HEIGHT: f32 = 220.0;

pub fn view(logs: &LogBook) -> Element<'_, Message> {
    let header = row![
        text("SYSTEM LOGS").font(Font::MONOSPACE).size(12),
        text(format!("({})", logs.len())).size(11),
        horizontal_space(),
        button("Clear").on_press(Message::ClearLogs).style(button::text),
        button("Close").on_press(Message::ToggleLogPanel).style(button::text),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .padding([4, 12]);

    let body: Element<'_, Message> = if logs.is_empty() {
        container(text("No logs yet...").size(12))
            .padding(12)
            .into()
    } else {
        scrollable(column(logs.iter().map(entry_row)).spacing(2).padding(12))
            .anchor_bottom()
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    container(column![header, body])
        .width(Length::Fill)
        .height(Length::Fixed(PANEL_HEIGHT))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..container::Style::default()
        })
        .into()
}

fn entry_row(entry: &LogEntry) -> Element<'_, Message> {
    let source = entry.source;
    row![
        text(entry.display_time()).font(Font::MONOSPACE).size(12),
        text(source.tag())
            .font(Font::MONOSPACE)
            .size(10)
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                let color = match source {
                    LogSource::Frontend => palette.primary.base.color,
                    LogSource::Backend => palette.success.base.color,
                    LogSource::System => palette.background.strong.color,
                };
                text::Style { color: Some(color) }
            }),
        text(&entry.message).font(Font::MONOSPACE).size(12),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
