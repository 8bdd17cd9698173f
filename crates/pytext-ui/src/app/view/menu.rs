use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row, Space};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use pytext_core::{Menu, MenuAction, MenuEntry};

use crate::app::{App, Message};
use crate::theme::colors;

/// Approximate width of one top-level menu button, used to line the
/// dropdown up under its title.
const MENU_TITLE_WIDTH: f32 = 56.0;

impl App {
    pub fn view_menubar(&self) -> Element<'_, Message> {
        let font_size = self.config.ui.menu_font_size;
        let mut menu_items: Vec<Element<'_, Message>> = Vec::new();

        for (index, menu) in self.menubar.menus().iter().enumerate() {
            let is_active = self.active_menu == Some(index);

            let menu_btn = button(
                text(menu.title).size(font_size).color(if is_active {
                    colors::TEXT_PRIMARY
                } else {
                    colors::TEXT_SECONDARY
                }),
            )
            .padding(Padding::from([4, 10]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = if is_active {
                    colors::BG_ACTIVE
                } else {
                    match status {
                        button::Status::Hovered => colors::BG_HOVER,
                        _ => colors::BG_MEDIUM,
                    }
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::ToggleMenu(index));

            menu_items.push(menu_btn.into());
        }

        menu_items.push(horizontal_space().into());

        let toolbar = Row::with_children(menu_items)
            .spacing(2)
            .padding(Padding::from([4, 8]))
            .align_y(iced::Alignment::Center);

        container(toolbar)
            .width(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Build a single dropdown menu item with label, shortcut, and action.
    fn menu_item<'a>(
        label: &'a str,
        shortcut: Option<&'a str>,
        action: MenuAction,
        font_size: f32,
    ) -> Element<'a, Message> {
        button(
            row![
                text(label).size(font_size).color(colors::TEXT_PRIMARY),
                horizontal_space(),
                text(shortcut.unwrap_or_default())
                    .size(font_size - 2.0)
                    .color(colors::TEXT_MUTED),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 16]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border::default(),
                ..Default::default()
            }
        })
        .on_press(Message::MenuActivated(action))
        .into()
    }

    fn menu_separator<'a>() -> Element<'a, Message> {
        container(Space::new(Length::Fill, 1))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BORDER)),
                ..Default::default()
            })
            .into()
    }

    fn menu_entries<'a>(menu: &'a Menu, font_size: f32) -> Vec<Element<'a, Message>> {
        menu.entries
            .iter()
            .map(|entry| match entry {
                MenuEntry::Item {
                    label,
                    accelerator,
                    action,
                } => Self::menu_item(label, accelerator.as_deref(), *action, font_size),
                MenuEntry::Separator => Self::menu_separator(),
            })
            .collect()
    }

    pub fn view_menu_dropdown(&self) -> Element<'_, Message> {
        let Some((index, menu)) = self
            .active_menu
            .and_then(|index| self.menubar.menu(index).map(|menu| (index, menu)))
        else {
            return Space::new(0, 0).into();
        };

        let menu_content = Column::with_children(Self::menu_entries(menu, self.config.ui.menu_font_size))
            .width(Length::Fixed(240.0))
            .padding(4);

        let menu_box = container(menu_content).style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MEDIUM)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        });

        column![
            Space::with_height(Length::Fixed(34.0)),
            row![
                Space::with_width(Length::Fixed(8.0 + index as f32 * MENU_TITLE_WIDTH)),
                menu_box,
            ],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
