use iced::{
    Alignment::Center,
    Color, Element, Length,
    widget::{Container, button, column, container, container::Style, progress_bar, row, text},
};
use iced_widget::container::bordered_box;

use crate::{core::ActiveView, gui::Message};

fn sidebar_style(_theme: &iced::Theme) -> Style {
    Style::default()
        .background(Color::from_rgb8(15, 23, 42))
        .color(Color::WHITE)
}

/// Sidebar navigation on the left, screen title and content on the right.
pub fn layout<'a>(active: ActiveView, content: Element<'a, Message>) -> Element<'a, Message> {
    let nav = ActiveView::ALL.iter().fold(
        column![
            text("KONSTRUKSI").size(20),
            text("PRO MASTER").size(12),
        ]
        .spacing(8),
        |nav, &view| {
            let style = if view == active {
                button::primary
            } else {
                button::text
            };
            nav.push(
                button(text(view.nav_label()))
                    .on_press(Message::Navigate(view))
                    .style(style)
                    .width(Length::Fill),
            )
        },
    );

    row![
        container(nav)
            .padding(16)
            .width(Length::Fixed(220.0))
            .height(Length::Fill)
            .style(sidebar_style),
        container(column![text(active.title()).size(24), content].spacing(20))
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .into()
}

pub fn stat_card<'a, M: 'a>(title: &str, value: String) -> Element<'a, M> {
    container(column![text(title.to_string()).size(14), text(value).size(22)].spacing(6))
        .padding(16)
        .width(Length::Fill)
        .style(bordered_box)
        .into()
}

/// Horizontal bar of `value` out of `max`, with a caption on the left.
pub fn bar<'a, M: 'a>(caption: String, value: f64, max: f64) -> Element<'a, M> {
    let max = if max > 0.0 { max as f32 } else { 1.0 };
    row![
        text(caption).width(Length::FillPortion(2)),
        container(progress_bar(0.0..=max, value.max(0.0) as f32)).width(Length::FillPortion(5)),
    ]
    .spacing(10)
    .align_y(Center)
    .into()
}

pub fn panel<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Container<'a, M> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(bordered_box)
}
