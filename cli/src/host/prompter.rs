use async_trait::async_trait;
use engine::host::{InputBoxOptions, Prompter, QuickPickItem};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tokio::sync::Mutex;

/// Line-oriented prompts on a terminal or any pair of streams.
///
/// Quick picks print a numbered list and read a 1-based number. Input boxes
/// show the pre-filled value in brackets; an empty answer accepts it. End of
/// input dismisses either prompt.
pub struct LinePrompter<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl LinePrompter<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> LinePrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    async fn write(&self, text: &str) {
        let mut output = self.output.lock().await;
        if let Err(e) = output.write_all(text.as_bytes()).await {
            log::warn!("Failed to write prompt: {e}");
            return;
        }
        if let Err(e) = output.flush().await {
            log::warn!("Failed to flush prompt: {e}");
        }
    }

    /// One line without its terminator; `None` at end of input.
    async fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match self.input.lock().await.read_line(&mut line).await {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("Failed to read answer: {e}");
                None
            }
        }
    }
}

fn render_items(items: &[QuickPickItem], placeholder: &str) -> String {
    let width = items.len().to_string().len();
    let mut text = format!("{placeholder}\n");
    for (position, item) in items.iter().enumerate() {
        text.push_str(&format!(
            "  {:>width$}) {} [{}]  {}\n",
            position + 1,
            item.label,
            item.description,
            item.detail
        ));
    }
    text.push_str("> ");
    text
}

#[async_trait]
impl<R, W> Prompter for LinePrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn show_quick_pick(&self, items: &[QuickPickItem], placeholder: &str) -> Option<usize> {
        if items.is_empty() {
            return None;
        }
        self.write(&render_items(items, placeholder)).await;

        let answer = self.read_line().await?;
        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }

        match answer.parse::<usize>() {
            Ok(choice) if (1..=items.len()).contains(&choice) => Some(choice - 1),
            _ => {
                self.write(&format!("Invalid selection: {answer}\n")).await;
                None
            }
        }
    }

    async fn show_input_box(&self, options: &InputBoxOptions) -> Option<String> {
        let hint = options.value.as_deref().unwrap_or(&options.placeholder);
        self.write(&format!("{} [{hint}]: ", options.prompt)).await;

        let answer = self.read_line().await?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Some(options.value.clone().unwrap_or_default());
        }
        Some(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<QuickPickItem> {
        ["Ocean Blue", "Forest Green", "Mine"]
            .iter()
            .map(|label| QuickPickItem {
                label: label.to_string(),
                description: "Fixed".to_string(),
                detail: "#000000".to_string(),
            })
            .collect()
    }

    fn scripted(input: &'static str) -> LinePrompter<&'static [u8], Vec<u8>> {
        LinePrompter::new(input.as_bytes(), Vec::new())
    }

    fn transcript(prompter: LinePrompter<&'static [u8], Vec<u8>>) -> String {
        String::from_utf8(prompter.output.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn test_quick_pick_is_one_based() {
        let prompter = scripted("2\n");
        assert_eq!(prompter.show_quick_pick(&items(), "Pick").await, Some(1));

        let shown = transcript(prompter);
        assert!(shown.starts_with("Pick\n"));
        assert!(shown.contains("1) Ocean Blue [Fixed]"));
        assert!(shown.contains("3) Mine [Fixed]"));
    }

    #[tokio::test]
    async fn test_quick_pick_dismissals() {
        for input in ["", "\n", "0\n", "4\n", "blue\n"] {
            let prompter = scripted(input);
            assert_eq!(prompter.show_quick_pick(&items(), "Pick").await, None);
        }
    }

    #[tokio::test]
    async fn test_input_box_accepts_prefilled_value_on_empty_answer() {
        let prompter = scripted("\n");
        let options = InputBoxOptions::new("Background", "#1e3a5f").with_value("#1e3a5f");

        assert_eq!(
            prompter.show_input_box(&options).await,
            Some("#1e3a5f".to_string())
        );
        assert_eq!(transcript(prompter), "Background [#1e3a5f]: ");
    }

    #[tokio::test]
    async fn test_input_box_reads_answers_in_order() {
        let prompter = scripted("Sunset\r\n#ff5500\n");
        let options = InputBoxOptions::new("Name", "My Custom Color");

        assert_eq!(
            prompter.show_input_box(&options).await,
            Some("Sunset".to_string())
        );
        assert_eq!(
            prompter.show_input_box(&options).await,
            Some("#ff5500".to_string())
        );
        assert_eq!(prompter.show_input_box(&options).await, None);
    }

    #[tokio::test]
    async fn test_empty_answer_without_default_is_empty() {
        let prompter = scripted("\n");
        let options = InputBoxOptions::new("Name", "My Custom Color");

        assert_eq!(prompter.show_input_box(&options).await, Some(String::new()));
    }
}
