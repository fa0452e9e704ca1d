//! Input validation rules for text and number prompts.
//!
//! Rules never fail hard: a rejected input yields one human-readable reason
//! per violated rule, which the console prints before re-prompting.

/// Constraints on free-text input. Lengths count chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// When set, every char must be in this list.
    pub whitelist: Option<Vec<char>>,
    /// When set, no char may be in this list.
    pub blacklist: Option<Vec<char>>,
}

impl TextRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn whitelist(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.whitelist = Some(chars.into_iter().collect());
        self
    }

    pub fn blacklist(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.blacklist = Some(chars.into_iter().collect());
        self
    }

    /// Check `input` against every rule, collecting all violations.
    pub fn check(&self, input: &str) -> Result<String, Vec<String>> {
        let mut reasons = Vec::new();
        let length = input.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                reasons.push(format!("Must be {min} characters or more!"));
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                reasons.push(format!("Must be {max} characters or less!"));
            }
        }
        if let Some(allowed) = &self.whitelist {
            if !input.chars().all(|c| allowed.contains(&c)) {
                let listed: String = allowed.iter().collect();
                reasons.push(format!("Must only contain these characters: {listed}"));
            }
        }
        if let Some(denied) = &self.blacklist {
            if input.chars().any(|c| denied.contains(&c)) {
                let listed: String = denied.iter().collect();
                reasons.push(format!("Cannot contain these characters: {listed}"));
            }
        }

        if reasons.is_empty() {
            Ok(input.to_string())
        } else {
            Err(reasons)
        }
    }
}

/// Constraints on numeric input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberRules {
    pub must_be_int: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// When set, the value must equal one of these.
    pub whitelist: Option<Vec<f64>>,
    /// When set, the value must not equal any of these.
    pub blacklist: Option<Vec<f64>>,
}

impl NumberRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn integer(mut self) -> Self {
        self.must_be_int = true;
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }

    pub fn whitelist(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.whitelist = Some(values.into_iter().collect());
        self
    }

    pub fn blacklist(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.blacklist = Some(values.into_iter().collect());
        self
    }

    /// Parse `input` and check it against every rule.
    ///
    /// An unparseable number short-circuits: no other rule is evaluated.
    pub fn check(&self, input: &str) -> Result<f64, Vec<String>> {
        let Ok(value) = input.trim().parse::<f64>() else {
            return Err(vec!["Invalid number format!".to_string()]);
        };

        let mut reasons = Vec::new();
        if self.must_be_int && value != value.round() {
            reasons.push("Must be a whole number!".to_string());
        }
        if let Some(min) = self.min {
            if value < min {
                reasons.push(format!("Must be {min} or more!"));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                reasons.push(format!("Must be {max} or less!"));
            }
        }
        if let Some(allowed) = &self.whitelist {
            if !allowed.contains(&value) {
                reasons.push(format!(
                    "Must be one of these numbers: {}",
                    join_numbers(allowed)
                ));
            }
        }
        if let Some(denied) = &self.blacklist {
            if denied.contains(&value) {
                reasons.push(format!(
                    "Cannot be any of these numbers: {}",
                    join_numbers(denied)
                ));
            }
        }

        if reasons.is_empty() {
            Ok(value)
        } else {
            Err(reasons)
        }
    }
}

fn join_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rules_accept_conforming_input() {
        let rules = TextRules::new().min_length(2).max_length(5);
        assert_eq!(rules.check("abc"), Ok("abc".to_string()));
    }

    #[test]
    fn text_rules_report_every_violation() {
        let rules = TextRules::new()
            .min_length(3)
            .whitelist(['a', 'b'])
            .blacklist(['!']);
        let reasons = rules.check("a!").unwrap_err();
        assert_eq!(
            reasons,
            vec![
                "Must be 3 characters or more!".to_string(),
                "Must only contain these characters: ab".to_string(),
                "Cannot contain these characters: !".to_string(),
            ]
        );
    }

    #[test]
    fn text_length_counts_chars_not_bytes() {
        let rules = TextRules::new().max_length(3);
        assert!(rules.check("äöü").is_ok());
        assert_eq!(
            rules.check("äöüß").unwrap_err(),
            vec!["Must be 3 characters or less!".to_string()]
        );
    }

    #[test]
    fn number_rules_reject_bad_format_only_once() {
        let rules = NumberRules::new().min(1.0).integer();
        assert_eq!(
            rules.check("twelve").unwrap_err(),
            vec!["Invalid number format!".to_string()]
        );
    }

    #[test]
    fn number_rules_check_integer_and_bounds() {
        let rules = NumberRules::new().integer().min(0.0).max(10.0);
        assert_eq!(rules.check(" 7 "), Ok(7.0));
        assert_eq!(
            rules.check("10.5").unwrap_err(),
            vec![
                "Must be a whole number!".to_string(),
                "Must be 10 or less!".to_string(),
            ]
        );
        assert_eq!(
            rules.check("-1").unwrap_err(),
            vec!["Must be 0 or more!".to_string()]
        );
    }

    #[test]
    fn bounds_render_in_shortest_form() {
        let rules = NumberRules::new().min(1.5).max(2.0);
        assert_eq!(
            rules.check("1").unwrap_err(),
            vec!["Must be 1.5 or more!".to_string()]
        );
        assert_eq!(
            rules.check("2.25").unwrap_err(),
            vec!["Must be 2 or less!".to_string()]
        );
    }

    #[test]
    fn number_rules_check_lists() {
        let allowed = NumberRules::new().whitelist([1.0, 2.5]);
        assert_eq!(allowed.check("2.5"), Ok(2.5));
        assert_eq!(
            allowed.check("3").unwrap_err(),
            vec!["Must be one of these numbers: 1, 2.5".to_string()]
        );

        let denied = NumberRules::new().blacklist([13.0]);
        assert_eq!(
            denied.check("13").unwrap_err(),
            vec!["Cannot be any of these numbers: 13".to_string()]
        );
    }
}
