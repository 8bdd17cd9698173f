pub mod dialogs;
pub mod menu;

use iced::widget::{column, container, mouse_area, stack, text, text_editor, Space};
use iced::{keyboard, Background, Border, Color, Element, Font, Length, Padding, Theme};

use crate::app::{App, Message};
use crate::theme::colors;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_menubar(),
            self.view_editor(),
            self.view_status_bar(),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into();

        if let Some(dialog) = &self.dialog {
            stack![
                main_view,
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(|_| container::Style {
                            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
                            ..Default::default()
                        })
                )
                .on_press(Message::CloseDialog),
                self.view_dialog(dialog),
            ]
            .into()
        } else if self.active_menu.is_some() {
            stack![
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::CloseMenu),
                main_view,
                self.view_menu_dropdown(),
            ]
            .into()
        } else {
            main_view
        }
    }

    pub fn view_editor(&self) -> Element<'_, Message> {
        let has_dialog = self.dialog.is_some();

        // text_editor scrolls on its own; wrapping it in scrollable() would
        // reset the scroll position on every re-render.
        text_editor(&self.shell.buffer().0)
            .height(Length::Fill)
            .padding(Padding { top: 12.0, right: 16.0, bottom: 12.0, left: 12.0 })
            .font(Font::MONOSPACE)
            .size(self.config.editor.font_size)
            .style(|_theme: &Theme, _status| text_editor::Style {
                background: Background::Color(colors::BG_DARK),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: colors::TEXT_MUTED,
                placeholder: colors::TEXT_MUTED,
                value: colors::TEXT_PRIMARY,
                selection: Color::from_rgba(0.25, 0.46, 0.85, 0.55),
            })
            .key_binding(move |key_press| {
                // The focused editor captures Escape before the key subscription sees it.
                if has_dialog
                    && matches!(key_press.key, keyboard::Key::Named(keyboard::key::Named::Escape))
                {
                    return Some(text_editor::Binding::Custom(Message::CloseDialog));
                }
                text_editor::Binding::from_key_press(key_press)
            })
            .on_action(Message::EditorAction)
            .into()
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let status = text(self.shell.status().text())
            .size(self.config.ui.status_font_size)
            .color(colors::STATUS_TEXT);

        container(status)
            .width(Length::Fill)
            .padding(Padding::from([4, 8]))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::STATUS_BG)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
