//! Application side-effects and intents.

/// Actions produced by the App state machine for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Transmit `body` as one envelope, stamped with the current time
    /// immediately before send. Fire-and-forget.
    Send {
        /// Message body.
        body: String,
    },

    /// Run the platform install flow for the armed offer.
    TriggerInstall,
}
