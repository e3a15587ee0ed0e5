use serde::{Deserialize, Serialize};

/// Language-model provider the backend should use. Forwarded verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelChoice {
    #[default]
    Gemini,
    Deepseek,
}

impl ModelChoice {
    pub const ALL: [Self; 2] = [Self::Gemini, Self::Deepseek];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Deepseek => "deepseek",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Gemini => "Google Gemini",
            Self::Deepseek => "DeepSeek",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Gemini),
            1 => Some(Self::Deepseek),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Gemini => 0,
            Self::Deepseek => 1,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "deepseek" => Some(Self::Deepseek),
            _ => None,
        }
    }

    /// Cycle to the next provider
    pub const fn next(self) -> Self {
        match Self::from_index((self.index() + 1) % Self::ALL.len()) {
            Some(model) => model,
            None => self,
        }
    }

    /// Cycle to the previous provider
    pub const fn prev(self) -> Self {
        match Self::from_index((self.index() + Self::ALL.len() - 1) % Self::ALL.len()) {
            Some(model) => model,
            None => self,
        }
    }
}

impl std::fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a page has a request in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

impl Phase {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_in_both_directions() {
        assert_eq!(ModelChoice::Gemini.next(), ModelChoice::Deepseek);
        assert_eq!(ModelChoice::Deepseek.next(), ModelChoice::Gemini);
        assert_eq!(ModelChoice::Gemini.prev(), ModelChoice::Deepseek);
    }

    #[test]
    fn parse_accepts_wire_names_only() {
        assert_eq!(ModelChoice::parse(" Gemini "), Some(ModelChoice::Gemini));
        assert_eq!(ModelChoice::parse("deepseek"), Some(ModelChoice::Deepseek));
        assert_eq!(ModelChoice::parse("gpt-4"), None);
    }

    #[test]
    fn serializes_as_lowercase_identifier() {
        let json = serde_json::to_string(&ModelChoice::Deepseek).expect("model serializes");
        assert_eq!(json, "\"deepseek\"");
    }
}
