use crate::app::Message;
use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Element, Font, Length, Theme};
use restora_core::config::ThemePreference;

pub fn view<'a>(
    loading: bool,
    has_document: bool,
    theme: ThemePreference,
    log_panel_open: bool,
) -> Element<'a, Message> {
    let title = row![
        text("Restora").size(20),
        text(concat!("v", env!("CARGO_PKG_VERSION")))
            .size(11)
            .font(Font::MONOSPACE),
    ]
    .spacing(6)
    .align_y(Alignment::End);

    let idle = |message: Message| (!loading).then_some(message);

    let mut actions = row![
        button("Files")
            .on_press_maybe(idle(Message::OpenJobList))
            .style(button::secondary),
        button(text(if loading {
            "Processing..."
        } else {
            "Upload PDF/Image"
        }))
        .on_press_maybe(idle(Message::PickFile)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    if has_document {
        actions = actions.push(
            button("Clear")
                .on_press_maybe(idle(Message::ClearDocument))
                .style(button::danger),
        );
    }

    actions = actions
        .push(
            button(text(format!("Theme: {}", theme)))
                .on_press(Message::ToggleTheme)
                .style(button::text),
        )
        .push(
            button(if log_panel_open { "Hide logs" } else { "Logs" })
                .on_press(Message::ToggleLogPanel)
                .style(button::secondary),
        );

    container(row![title, horizontal_space(), actions].align_y(Alignment::Center))
        .padding([12, 24])
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..container::Style::default()
        })
        .into()
}
