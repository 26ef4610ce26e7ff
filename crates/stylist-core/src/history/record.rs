/// One handled action: the input, what was done to it, and the result.
///
/// Fields are private so a record cannot change after it was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRecord {
    original_text: String,
    action_label: String,
    output_text: String,
}

impl InteractionRecord {
    pub fn new(
        original_text: impl Into<String>,
        action_label: impl Into<String>,
        output_text: impl Into<String>,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            action_label: action_label.into(),
            output_text: output_text.into(),
        }
    }

    /// The user's input at the time of the action.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Human-readable name of the operation (e.g. "Poetic Rewrite").
    pub fn action_label(&self) -> &str {
        &self.action_label
    }

    /// The gateway's output, or its error message.
    pub fn output_text(&self) -> &str {
        &self.output_text
    }
}
