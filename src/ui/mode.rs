use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Text,
    Conversation,
}

impl InteractionMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(InteractionMode::Text),
            "conversation" => Some(InteractionMode::Conversation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionMode::Text => "text",
            InteractionMode::Conversation => "conversation",
        }
    }
}

/// Presentation preferences shared across wizard screens
#[derive(Debug, Clone, Default)]
pub struct UiState {
    selected_mode: InteractionMode,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a mode by name; unknown names are ignored
    pub fn set_mode(&mut self, mode: &str) {
        if let Some(mode) = InteractionMode::parse(mode) {
            self.selected_mode = mode;
            info!("Selected mode: {}", mode.as_str());
        }
    }

    pub fn selected_mode(&self) -> InteractionMode {
        self.selected_mode
    }

    pub fn is_text_mode(&self) -> bool {
        self.selected_mode == InteractionMode::Text
    }

    pub fn is_conversation_mode(&self) -> bool {
        self.selected_mode == InteractionMode::Conversation
    }
}
