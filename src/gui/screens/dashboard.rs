use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, column, row, scrollable, text},
};

use crate::{
    core::locale::format_rupiah,
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{bar, panel, stat_card},
    },
};

#[derive(Debug, Clone, Default)]
pub struct DashboardScreen;

impl Screen for DashboardScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let data = state.session.dashboard();
        let totals = data.totals;

        let cards = row![
            stat_card("Total Budget", format_rupiah(totals.total_budget)),
            stat_card("Spent", format_rupiah(totals.total_spent)),
            stat_card("Active Projects", totals.active_count.to_string()),
            stat_card("Pending Projects", totals.pending_count.to_string()),
        ]
        .spacing(16);

        let max = data
            .budget_series
            .iter()
            .map(|point| point.budget.max(point.spent))
            .fold(0.0, f64::max);
        let finance = data.budget_series.iter().fold(
            column![text("Project Financial Analysis").size(18)].spacing(8),
            |chart, point| {
                chart
                    .push(bar(format!("{} (budget)", point.label), point.budget, max))
                    .push(bar(format!("{} (spent)", point.label), point.spent, max))
            },
        );

        let status = data.status_distribution.iter().fold(
            Column::new()
                .spacing(8)
                .push(text("Project Status").size(18))
                .push(text(format!("{} projects in total", data.project_count))),
            |list, entry| {
                list.push(bar(
                    format!("{}: {}", entry.status.label(), entry.count),
                    entry.count as f64,
                    data.project_count as f64,
                ))
            },
        );

        let utilisation = match totals.utilisation() {
            Some(percent) => format!("{:.1}% of the total budget has been spent", percent),
            None => "No budget recorded yet".to_string(),
        };

        scrollable(
            column![
                cards,
                text(utilisation),
                row![
                    panel(finance).width(Length::FillPortion(2)),
                    panel(status).width(Length::FillPortion(1)),
                ]
                .spacing(16),
            ]
            .spacing(24),
        )
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
