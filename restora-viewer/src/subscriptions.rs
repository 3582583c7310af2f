//! Event subscriptions: global input, the drag release listener and the log stream

use crate::app::Message;
use iced::event::{self, Event};
use iced::futures::channel::mpsc::Sender;
use iced::futures::SinkExt;
use iced::stream::channel;
use iced::{keyboard, mouse, window, Subscription};
use restora_core::log_stream::LogStream;
use restora_core::LogEntry;
use std::time::Duration;
use url::Url;

/// Cursor position and modifier state, tracked for the whole window
pub fn input_events() -> Subscription<Message> {
    event::listen_with(input_event)
}

fn input_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(Message::ModifiersChanged(modifiers))
        }
        _ => None,
    }
}

/// Window-level listener that ends a drag wherever the button is released.
///
/// Only subscribed while a drag session is open, so it is dropped together
/// with the session.
pub fn drag_release() -> Subscription<Message> {
    event::listen_with(drag_event)
}

pub(crate) fn drag_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Mouse(mouse::Event::CursorLeft)
        | Event::Window(window::Event::Unfocused) => Some(Message::DragEnded),
        _ => None,
    }
}

/// Backend log broadcast, reconnecting after `reconnect_delay` (zero disables it)
pub fn log_stream(url: Url, reconnect_delay: Duration) -> Subscription<Message> {
    let id = url.to_string();
    Subscription::run_with_id(
        id,
        channel(100, move |output: Sender<Message>| async move {
            run_log_stream(url, reconnect_delay, output).await;
        }),
    )
}

async fn run_log_stream(url: Url, reconnect_delay: Duration, mut output: Sender<Message>) {
    loop {
        match LogStream::connect(&url).await {
            Ok(mut stream) => {
                let _ = output
                    .send(Message::LogReceived(LogEntry::system(
                        "Connected to Backend WebSocket",
                    )))
                    .await;

                while let Some(entry) = stream.next_entry().await {
                    if output.send(Message::LogReceived(entry)).await.is_err() {
                        // Subscription dropped
                        return;
                    }
                }

                let _ = output
                    .send(Message::LogReceived(LogEntry::system(
                        "Disconnected from Backend WebSocket",
                    )))
                    .await;
            }
            Err(e) => {
                tracing::warn!("Log stream unavailable at {}: {}", url, e);
            }
        }

        if reconnect_delay.is_zero() {
            break;
        }
        tokio::time::sleep(reconnect_delay).await;
    }

    // Keep the subscription alive for cleanup
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(event: Event) -> Option<Message> {
        drag_event(event, event::Status::Ignored, window::Id::unique())
    }

    #[test]
    fn drag_ends_on_release_leave_or_unfocus() {
        let ending = [
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            Event::Mouse(mouse::Event::CursorLeft),
            Event::Window(window::Event::Unfocused),
        ];
        for event in ending {
            assert!(matches!(drag(event), Some(Message::DragEnded)));
        }
    }

    #[test]
    fn other_input_keeps_drag_open() {
        let ignored = [
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right)),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Middle)),
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            Event::Mouse(mouse::Event::CursorMoved {
                position: iced::Point::new(10.0, 20.0),
            }),
        ];
        for event in ignored {
            assert!(drag(event).is_none());
        }
    }

    #[test]
    fn input_events_track_cursor() {
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: iced::Point::new(3.0, 4.0),
        });
        let message = input_event(moved, event::Status::Ignored, window::Id::unique());
        assert!(matches!(
            message,
            Some(Message::CursorMoved(position)) if position == iced::Point::new(3.0, 4.0)
        ));
    }
}
