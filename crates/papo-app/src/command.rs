//! Input parsing and the side menu.
//!
//! Only actions that never touch the server parse as local commands.
//! Everything else, including the server's own `/help`, `/hora` and
//! `/historico`, is an ordinary message for the server to interpret.

/// Parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Clear the transcript locally.
    Clear,
    /// Trigger the install offer.
    Install,
    /// Quit the application.
    Quit,
    /// Ordinary message for the server.
    Message(String),
}

impl Command {
    /// Parse a submitted input line. The input is trimmed first, matching
    /// the send path.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed {
            "/clear" => Self::Clear,
            "/install" => Self::Install,
            "/quit" | "/q" => Self::Quit,
            _ => Self::Message(trimmed.to_string()),
        }
    }
}

/// Side-menu entries: canned command shortcuts plus local actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// Send `/help` to the server.
    Help,
    /// Send `/hora` to the server.
    Hora,
    /// Send `/historico` to the server.
    Historico,
    /// Clear the transcript locally.
    ClearChat,
    /// Trigger the install offer.
    Install,
    /// Quit the application.
    Quit,
}

impl MenuEntry {
    /// All entries, in display order.
    pub const ALL: [Self; 6] =
        [Self::Help, Self::Hora, Self::Historico, Self::ClearChat, Self::Install, Self::Quit];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Help => "Help  (/help)",
            Self::Hora => "Server time  (/hora)",
            Self::Historico => "History  (/historico)",
            Self::ClearChat => "Clear chat",
            Self::Install => "Install app",
            Self::Quit => "Quit",
        }
    }

    /// The canned input this entry populates and submits, if it is a
    /// command shortcut rather than a local action.
    pub fn canned_input(self) -> Option<&'static str> {
        match self {
            Self::Help => Some("/help"),
            Self::Hora => Some("/hora"),
            Self::Historico => Some("/historico"),
            Self::ClearChat | Self::Install | Self::Quit => None,
        }
    }
}
