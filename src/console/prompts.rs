//! Higher-level prompts built on the console primitives: titles,
//! press-ENTER pauses, and validated text/number input.

use super::Console;
use crate::error::Result;
use crate::terminal::Terminal;
use crate::text::visible_width;
use crate::validate::{NumberRules, TextRules};

/// Minimum width of the rule printed under a title.
const TITLE_RULE_MIN_WIDTH: usize = 20;

/// A validated free-text question.
#[derive(Debug, Clone)]
pub struct TextPrompt {
    /// Printed on its own line before each attempt.
    pub title: Option<String>,
    /// Printed raw after each attempt.
    pub end: String,
    pub rules: TextRules,
    /// Returned as-is when the operator submits an empty line.
    pub fallback_if_blank: Option<String>,
    pub keep_asking_until_valid: bool,
}

impl Default for TextPrompt {
    fn default() -> Self {
        Self {
            title: None,
            end: "\n".to_string(),
            rules: TextRules::default(),
            fallback_if_blank: None,
            keep_asking_until_valid: false,
        }
    }
}

impl TextPrompt {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn rules(mut self, rules: TextRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    pub fn fallback_if_blank(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_if_blank = Some(fallback.into());
        self
    }

    pub fn keep_asking(mut self) -> Self {
        self.keep_asking_until_valid = true;
        self
    }
}

/// A validated numeric question.
#[derive(Debug, Clone)]
pub struct NumberPrompt {
    pub title: Option<String>,
    pub end: String,
    pub rules: NumberRules,
    pub fallback_if_blank: Option<f64>,
    pub keep_asking_until_valid: bool,
}

impl Default for NumberPrompt {
    fn default() -> Self {
        Self {
            title: None,
            end: "\n".to_string(),
            rules: NumberRules::default(),
            fallback_if_blank: None,
            keep_asking_until_valid: false,
        }
    }
}

impl NumberPrompt {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn rules(mut self, rules: NumberRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    pub fn fallback_if_blank(mut self, fallback: f64) -> Self {
        self.fallback_if_blank = Some(fallback);
        self
    }

    pub fn keep_asking(mut self) -> Self {
        self.keep_asking_until_valid = true;
        self
    }
}

impl<T: Terminal> Console<T> {
    // -----------------------------------------------------------------------
    // Titles
    // -----------------------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.settings.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.settings.title = title.into();
    }

    /// Print `text` (or the default title) upper-cased over a dash rule.
    pub fn print_title(&mut self, text: Option<&str>, clear_first: bool) -> Result<()> {
        let title = text.unwrap_or(&self.settings.title).to_string();
        if clear_first {
            self.clear_screen()?;
        }
        let rule_width = (visible_width(&title) + 2).max(TITLE_RULE_MIN_WIDTH);
        self.print(&title.to_uppercase())?;
        self.print(&"-".repeat(rule_width))?;
        self.print("")
    }

    // -----------------------------------------------------------------------
    // Pauses
    // -----------------------------------------------------------------------

    /// Show `Press ENTER to {action}.` and wait for a line.
    pub fn wait_for_enter(&mut self, action: &str) -> Result<()> {
        self.input(&format!("Press ENTER to {action}."))?;
        Ok(())
    }

    pub fn press_enter_to_continue(&mut self) -> Result<()> {
        self.wait_for_enter("continue")
    }

    pub fn press_enter_to_start(&mut self) -> Result<()> {
        self.wait_for_enter("start")
    }

    pub fn press_enter_to_play(&mut self) -> Result<()> {
        self.wait_for_enter("play")
    }

    pub fn press_enter_to_finish(&mut self) -> Result<()> {
        self.wait_for_enter("finish")
    }

    pub fn press_enter_to_close(&mut self) -> Result<()> {
        self.wait_for_enter("close")
    }

    pub fn press_enter_to_retry(&mut self) -> Result<()> {
        self.wait_for_enter("retry")
    }

    // -----------------------------------------------------------------------
    // Validated input
    // -----------------------------------------------------------------------

    /// Ask for text. `Ok(None)` means the answer was invalid and the prompt
    /// was not configured to keep asking.
    pub fn text_input(&mut self, prompt: &TextPrompt) -> Result<Option<String>> {
        self.validated_loop(
            prompt.title.as_deref(),
            &prompt.end,
            prompt.fallback_if_blank.clone(),
            prompt.keep_asking_until_valid,
            |line| prompt.rules.check(line),
        )
    }

    /// Ask for a number. `Ok(None)` as for [`Console::text_input`].
    pub fn number_input(&mut self, prompt: &NumberPrompt) -> Result<Option<f64>> {
        self.validated_loop(
            prompt.title.as_deref(),
            &prompt.end,
            prompt.fallback_if_blank,
            prompt.keep_asking_until_valid,
            |line| prompt.rules.check(line),
        )
    }

    /// Shared ask/validate/retry loop.
    ///
    /// Before a retry the operator confirms with ENTER and the screen is
    /// restored to how it looked before the first attempt.
    fn validated_loop<V, F>(
        &mut self,
        title: Option<&str>,
        end: &str,
        mut fallback_if_blank: Option<V>,
        keep_asking: bool,
        check: F,
    ) -> Result<Option<V>>
    where
        F: Fn(&str) -> std::result::Result<V, Vec<String>>,
    {
        let snapshot = self.screen.snapshot();
        let prompt = self.settings.prompt.clone();

        loop {
            if let Some(title) = title {
                self.print(title)?;
            }
            let line = self.input(&prompt)?;

            if line.is_empty() {
                if let Some(fallback) = fallback_if_blank.take() {
                    return Ok(Some(fallback));
                }
            }

            let outcome = check(&line);
            if let Err(reasons) = &outcome {
                self.print_rejection(reasons)?;
            }
            self.print_raw(end)?;

            match outcome {
                Ok(value) => return Ok(Some(value)),
                Err(_) if !keep_asking => return Ok(None),
                Err(_) => {}
            }

            self.press_enter_to_continue()?;
            self.reprint(Some(&snapshot))?;
        }
    }
}
