use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, row, scrollable, text},
};

use crate::{
    core::{
        MaterialRepository,
        locale::{format_quantity, format_rupiah, format_short_date},
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::panel,
    },
    models::Material,
};

const CARDS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct InventoryScreen;

#[derive(Debug, Clone)]
pub enum InventoryMessage {
    AskAdvisor,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    AskAdvisor,
}

impl Screen for InventoryScreen {
    type Message = InventoryMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let materials = state.session.store().materials();
        let summary = state.session.inventory();

        let mut grid = Column::new().spacing(16);
        for chunk in materials.chunks(CARDS_PER_ROW) {
            let cards = chunk
                .iter()
                .fold(row![].spacing(16), |cards, material| cards.push(material_card(material)));
            grid = grid.push(cards);
        }
        if materials.is_empty() {
            grid = grid.push(text("No materials recorded."));
        }

        let categories = summary
            .categories
            .iter()
            .map(|c| format!("{} ({})", c.category, c.items))
            .collect::<Vec<_>>()
            .join(", ");

        let prompt = panel(
            row![
                column![
                    text("Need more material?").size(16),
                    text(
                        "Use the AI Consultant to predict next month's material needs from project progress."
                    )
                    .size(13),
                ]
                .spacing(4)
                .width(Length::Fill),
                button("Ask AI").on_press(ScreenMessage::ScreenMessage(InventoryMessage::AskAdvisor)),
            ]
            .spacing(12)
            .align_y(Center),
        );

        scrollable(
            column![
                text(format!(
                    "{} items, stock value {}",
                    summary.item_count,
                    format_rupiah(summary.total_value)
                )),
                text(categories).size(13),
                grid,
                prompt,
            ]
            .spacing(16),
        )
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            InventoryMessage::AskAdvisor => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::AskAdvisor))
            }
        }
    }
}

fn material_card<'a>(material: &'a Material) -> Element<'a, ScreenMessage<InventoryScreen>> {
    panel(
        column![
            text(material.category.as_str()).size(12),
            text(material.name.as_str()).size(16),
            text(format!("{} {}", format_quantity(material.quantity), material.unit)).size(22),
            row![
                text("Unit price").width(Length::Fill),
                text(format_rupiah(material.unit_price)),
            ],
            text(format!("Updated {}", format_short_date(material.last_updated))).size(11),
        ]
        .spacing(6),
    )
    .width(Length::FillPortion(1))
    .into()
}
