use crate::error::{Error, Result};

/// Runtime knobs for a [`DataExtractor`](crate::DataExtractor).
///
/// The rule table itself is fixed; only the input budget is configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Upper bound on the number of bytes scanned per call. `None` means unlimited.
    pub max_input_bytes: Option<usize>,
}

impl ExtractorConfig {
    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_input_bytes == Some(0) {
            return Err(Error::InvalidConfig(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Longest prefix of `text` that fits the budget, cut on a char boundary.
    pub fn clamp<'a>(&self, text: &'a str) -> &'a str {
        let Some(limit) = self.max_input_bytes else {
            return text;
        };
        if text.len() <= limit {
            return text;
        }

        let mut end = limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        tracing::warn!(
            input_bytes = text.len(),
            limit,
            "input exceeds budget, scanning truncated prefix"
        );
        &text[..end]
    }

    pub fn fits(&self, text: &str) -> bool {
        self.max_input_bytes.map_or(true, |limit| text.len() <= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        let config = ExtractorConfig::default();
        let text = "x".repeat(10_000);
        assert_eq!(config.clamp(&text).len(), 10_000);
        assert!(config.fits(&text));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let config = ExtractorConfig::default().with_max_input_bytes(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_clamp_respects_char_boundary() {
        let config = ExtractorConfig::default().with_max_input_bytes(4);
        // 'é' is two bytes and straddles the limit
        assert_eq!(config.clamp("abcé"), "abc");
        assert_eq!(config.clamp("ab"), "ab");
        assert!(!config.fits("abcde"));
    }
}
