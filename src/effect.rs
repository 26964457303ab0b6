//! Effects that panels hand to the app shell.
//!
//! Panels only mutate their own view state. Anything that touches the outside
//! world (HTTP, clipboard, timers, the system URL handler) is returned as an
//! `Effect` and turned into a `Task` by `Console::perform`.

use crate::backend::types::{AgentRequest, NlRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// `POST /api/nl`
    RunAgent(AgentRequest),
    /// `POST /api/users/nl`
    RunUsersNl(NlRequest),
    /// `GET /api/users`
    LoadUsers,
    /// `POST /tools/user-manager/run` with `{ "action": "read" }`
    ReadToolUsers,
    /// Write `text` to the clipboard and schedule the indicator reset for `ticket`
    Copy { text: String, ticket: u64 },
    /// Open a `mailto:` link for the address
    OpenMailto(String),
}

impl Effect {
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}
