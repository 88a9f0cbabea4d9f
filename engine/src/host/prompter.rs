use async_trait::async_trait;

/// One row of a quick pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickPickItem {
    pub label: String,
    pub description: String,
    pub detail: String,
}

/// Options for a single-line text prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBoxOptions {
    pub prompt: String,
    pub placeholder: String,
    /// Pre-filled value.
    pub value: Option<String>,
}

impl InputBoxOptions {
    pub fn new(prompt: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            placeholder: placeholder.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Interactive prompts provided by the host.
///
/// Both methods return `None` when the user dismisses the prompt.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Index into `items` of the chosen row.
    async fn show_quick_pick(&self, items: &[QuickPickItem], placeholder: &str) -> Option<usize>;

    async fn show_input_box(&self, options: &InputBoxOptions) -> Option<String>;
}
