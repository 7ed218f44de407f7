use crate::advisory::{AdvisoryContext, AdvisoryOutcome};

/// Identifies one advisory request so late results can be matched or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum AdvisoryState {
    Idle,
    Pending { ticket: Ticket, query: String },
    Resolved(String),
    /// Holds the fallback text shown in place of an answer
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Advisor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
}

/// Everything needed to run the call away from the UI state.
#[derive(Debug, Clone)]
pub struct AdvisoryRequest {
    pub ticket: Ticket,
    pub context: AdvisoryContext,
    pub query: String,
}

/// Chat panel state. There is no cancellation: leaving the panel only drops
/// interest in the in-flight ticket and its result is ignored on arrival.
#[derive(Debug, Clone)]
pub struct AdvisoryPanel {
    next_ticket: u64,
    state: AdvisoryState,
    log: Vec<ChatEntry>,
}

impl Default for AdvisoryPanel {
    fn default() -> Self {
        Self {
            next_ticket: 1,
            state: AdvisoryState::Idle,
            log: Vec::new(),
        }
    }
}

impl AdvisoryPanel {
    pub fn state(&self) -> &AdvisoryState {
        &self.state
    }

    pub fn log(&self) -> &[ChatEntry] {
        &self.log
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, AdvisoryState::Pending { .. })
    }

    /// Starts a request. Refused while another one is pending.
    pub fn begin(&mut self, query: &str, context: AdvisoryContext) -> Option<AdvisoryRequest> {
        if self.is_pending() {
            tracing::debug!("advisory request refused, one is already pending");
            return None;
        }
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.log.push(ChatEntry {
            role: ChatRole::User,
            text: query.to_string(),
        });
        self.state = AdvisoryState::Pending {
            ticket,
            query: query.to_string(),
        };
        tracing::info!(ticket = ticket.0, "advisory request dispatched");
        Some(AdvisoryRequest {
            ticket,
            context,
            query: query.to_string(),
        })
    }

    /// Applies a result. Returns `false` when nobody is waiting for `ticket`.
    pub fn complete(&mut self, ticket: Ticket, outcome: AdvisoryOutcome) -> bool {
        match &self.state {
            AdvisoryState::Pending { ticket: waiting, .. } if *waiting == ticket => {}
            _ => {
                tracing::debug!(ticket = ticket.0, "discarding advisory result nobody waits for");
                return false;
            }
        }
        self.log.push(ChatEntry {
            role: ChatRole::Advisor,
            text: outcome.text().to_string(),
        });
        self.state = match outcome {
            AdvisoryOutcome::Resolved(text) => AdvisoryState::Resolved(text),
            AdvisoryOutcome::Failed(text) => AdvisoryState::Failed(text),
        };
        true
    }

    /// Drops interest in a pending request.
    pub fn abandon(&mut self) {
        if let AdvisoryState::Pending { ticket, .. } = self.state {
            tracing::debug!(ticket = ticket.0, "advisory result abandoned");
            self.state = AdvisoryState::Idle;
        }
    }
}
