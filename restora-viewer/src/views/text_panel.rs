use crate::app::Message;
use crate::document::Document;
use iced::widget::{center, column, container, horizontal_space, mouse_area, row, scrollable, text};
use iced::{border, Alignment, Color, Element, Font, Length, Theme};

pub fn view<'a>(document: Option<&'a Document>, highlight: Option<usize>) -> Element<'a, Message> {
    let summary = match document {
        Some(document) => format!(
            "{} · {} lines · {} possible typos",
            document.source(),
            document.line_count(),
            document.typo_count()
        ),
        None => String::new(),
    };

    let header = container(
        row![
            text("DETECTED TEXT").font(Font::MONOSPACE).size(12),
            horizontal_space(),
            text(summary).size(12),
            text("UTF-8").font(Font::MONOSPACE).size(12),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill);

    let body: Element<'a, Message> = match document {
        Some(document) if !document.page().layout.is_empty() => {
            let lines = column(
                document
                    .page()
                    .layout
                    .text_lines
                    .iter()
                    .enumerate()
                    .map(|(index, line)| line_row(index, &line.text, highlight == Some(index))),
            )
            .spacing(2);
            scrollable(container(lines).padding(24).width(Length::Fill))
                .height(Length::Fill)
                .into()
        }
        // No layout: fall back to the plain text body
        Some(document) if !document.page().text.is_empty() => scrollable(
            container(text(&document.page().text).font(Font::MONOSPACE).size(14)).padding(24),
        )
        .height(Length::Fill)
        .into(),
        _ => center(text("No text extracted yet").size(14)).into(),
    };

    container(column![header, body])
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .into()
}

fn line_row(index: usize, line: &str, highlighted: bool) -> Element<'_, Message> {
    let content = container(text(line).font(Font::MONOSPACE).size(14))
        .padding([2, 8])
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            if !highlighted {
                return container::Style::default();
            }
            let palette = theme.extended_palette();
            container::Style {
                background: Some(
                    Color {
                        a: 0.2,
                        ..palette.primary.base.color
                    }
                    .into(),
                ),
                text_color: Some(palette.primary.strong.color),
                border: border::rounded(4),
                ..container::Style::default()
            }
        });

    mouse_area(content)
        .on_enter(Message::Highlight(Some(index)))
        .on_exit(Message::Highlight(None))
        .into()
}
