#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state not tied to plan or chat data.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// Whether the floating chat window is visible.
    pub chat_open: bool,
}

impl UiState {
    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }
}
