use iced::widget::{button, column, container, text, Space};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use crate::app::{App, Dialog, Message};
use crate::theme::colors;

impl App {
    /// Info and error popups share one modal: a title, a message and an
    /// OK button.
    pub fn view_dialog<'a>(&self, dialog: &'a Dialog) -> Element<'a, Message> {
        let title_color = if dialog.is_error() {
            colors::ERROR
        } else {
            colors::ACCENT
        };

        let modal_content = column![
            text(dialog.title()).size(18).color(title_color),
            Space::with_height(12),
            text(dialog.message()).size(14).color(colors::TEXT_SECONDARY),
            Space::with_height(20),
            button(text("OK").size(13).color(Color::WHITE))
                .padding(Padding::from([8, 24]))
                .style(|_: &Theme, status: button::Status| {
                    let bg = match status {
                        button::Status::Hovered => Color::from_rgb(0.40, 0.58, 0.95),
                        _ => colors::ACCENT,
                    };
                    button::Style {
                        background: Some(Background::Color(bg)),
                        text_color: Color::WHITE,
                        border: Border {
                            radius: 4.0.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }
                })
                .on_press(Message::CloseDialog),
        ]
        .padding(24)
        .width(Length::Fixed(380.0))
        .align_x(iced::Alignment::Center);

        container(
            container(modal_content)
                .style(|_| container::Style {
                    background: Some(Background::Color(colors::BG_MEDIUM)),
                    border: Border {
                        color: colors::BORDER,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    ..Default::default()
                })
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
