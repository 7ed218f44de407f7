use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, button, row, scrollable, text, text_input},
};

use crate::{
    advisory::{AdvisoryOutcome, AdvisoryState, ChatRole, Ticket},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::panel,
    },
};

#[derive(Debug, Clone, Default)]
pub struct AdvisoryScreen {
    draft: String,
}

#[derive(Debug, Clone)]
pub enum AdvisoryMessage {
    DraftChanged(String),
    Send,
    Finished(Ticket, AdvisoryOutcome),
}

impl Screen for AdvisoryScreen {
    type Message = AdvisoryMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let panel_state = state.session.advisory();

        let mut log = Column::new().spacing(12).push(text(
            "Ask about budgets, schedules, risks or material needs. The current project and material data is sent along with the question.",
        ));
        for entry in panel_state.log() {
            let speaker = match entry.role {
                ChatRole::User => "You",
                ChatRole::Advisor => "AI Consultant",
            };
            log = log.push(panel(
                Column::new()
                    .spacing(4)
                    .push(text(speaker).size(12))
                    .push(text(entry.text.as_str())),
            ));
        }
        if let AdvisoryState::Pending { .. } = panel_state.state() {
            log = log.push(text("Analysing data..."));
        }

        let send = (!panel_state.is_pending())
            .then(|| ScreenMessage::ScreenMessage(AdvisoryMessage::Send));
        let input = row![
            text_input("Ask the AI consultant...", &self.draft)
                .on_input(|value| ScreenMessage::ScreenMessage(AdvisoryMessage::DraftChanged(value)))
                .on_submit_maybe(send.clone())
                .width(Length::Fill),
            button("Send").on_press_maybe(send),
        ]
        .spacing(12);

        Column::new()
            .spacing(16)
            .push(scrollable(log).height(Length::Fill))
            .push(input)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            AdvisoryMessage::DraftChanged(value) => {
                self.draft = value;
                Task::none()
            }
            AdvisoryMessage::Send => {
                let query = std::mem::take(&mut self.draft);
                let Some(request) = state.session.begin_advisory(query.trim()) else {
                    self.draft = query;
                    return Task::none();
                };
                let advisor = state.advisor.clone();
                Task::perform(
                    async move {
                        let outcome = advisor.advise(&request.context, &request.query).await;
                        (request.ticket, outcome)
                    },
                    |(ticket, outcome)| {
                        ScreenMessage::ScreenMessage(AdvisoryMessage::Finished(ticket, outcome))
                    },
                )
            }
            AdvisoryMessage::Finished(ticket, outcome) => {
                state.session.complete_advisory(ticket, outcome);
                Task::none()
            }
        }
    }
}
