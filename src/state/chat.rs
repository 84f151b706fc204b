#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Text shown on the pending line while a chat request is in flight.
pub const THINKING_TEXT: &str = "Thinking...";

/// State for the chat widget's message log.
///
/// An exchange appends the user line plus a pending "Thinking..."
/// placeholder. On success the placeholder is removed and the reply
/// appended; on failure the placeholder's text is overwritten in place
/// and the line stays in the log.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub lines: Vec<ChatLine>,
}

/// A single line in the chat log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    /// True only for the in-flight placeholder line.
    pub pending: bool,
}

/// Who a chat line is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatState {
    /// Append the user line and a pending placeholder; returns the
    /// placeholder id so the network task can settle it later.
    ///
    /// Callers guard against trimmed-empty input before calling.
    pub fn begin_exchange(&mut self, text: &str) -> String {
        self.lines.push(ChatLine {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::User,
            text: text.to_owned(),
            pending: false,
        });

        let placeholder_id = uuid::Uuid::new_v4().to_string();
        self.lines.push(ChatLine {
            id: placeholder_id.clone(),
            role: ChatRole::Bot,
            text: THINKING_TEXT.to_owned(),
            pending: true,
        });
        placeholder_id
    }

    /// Success path: drop the placeholder and append the bot reply.
    pub fn resolve(&mut self, placeholder_id: &str, reply: String) {
        self.lines.retain(|line| line.id != placeholder_id);
        self.lines.push(ChatLine {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::Bot,
            text: reply,
            pending: false,
        });
    }

    /// Failure path: overwrite the placeholder's text in place. The
    /// line is kept in the log; no retry is scheduled.
    pub fn fail(&mut self, placeholder_id: &str, error: String) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == placeholder_id) {
            line.text = error;
            line.pending = false;
        }
    }
}
