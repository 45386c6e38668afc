//! Reply style presets.
//!
//! A [`ReplyMode`] is applied as an extra system directive on every
//! completion call. Selection happens either by a numeric code typed in
//! chat or by name through an interactive menu; anything else flows on
//! as an ordinary message.

/// A named response-style preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReplyMode {
    /// Friendly everyday replies.
    #[default]
    Standard,
    /// Structured, precise explanations.
    Expert,
    /// Light and creative replies.
    Fun,
    /// Short, direct replies.
    Strict,
}

impl ReplyMode {
    /// All modes in selection order.
    pub const ALL: [ReplyMode; 4] = [Self::Standard, Self::Expert, Self::Fun, Self::Strict];

    /// Parse a numeric selection code ("1"–"4").
    pub fn from_code(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Self::Standard),
            "2" => Some(Self::Expert),
            "3" => Some(Self::Fun),
            "4" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Parse a mode name, as used in menu callback payloads.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::Standard),
            "expert" => Some(Self::Expert),
            "fun" => Some(Self::Fun),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Stable identifier used in callback payloads.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Expert => "expert",
            Self::Fun => "fun",
            Self::Strict => "strict",
        }
    }

    /// Short label for selection menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Friendly",
            Self::Expert => "Expert",
            Self::Fun => "Playful",
            Self::Strict => "Strict",
        }
    }

    /// Description injected into the prompt for the active mode.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Standard => {
                "Friendly and clear: plain, gentle answers for everyday conversation."
            }
            Self::Expert => {
                "Expert: confident and structured, precise and well-reasoned explanations."
            }
            Self::Fun => "Playful: light and creative, an occasional joke, never over the top.",
            Self::Strict => "Strict: direct and exact, minimal emotion, short and to the point.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_cover_all_modes() {
        assert_eq!(ReplyMode::from_code("1"), Some(ReplyMode::Standard));
        assert_eq!(ReplyMode::from_code("2"), Some(ReplyMode::Expert));
        assert_eq!(ReplyMode::from_code("3"), Some(ReplyMode::Fun));
        assert_eq!(ReplyMode::from_code("4"), Some(ReplyMode::Strict));
    }

    #[test]
    fn code_tolerates_whitespace() {
        assert_eq!(ReplyMode::from_code(" 2 "), Some(ReplyMode::Expert));
    }

    #[test]
    fn other_input_is_not_a_code() {
        for token in ["0", "5", "42", "mode", "expert please", ""] {
            assert_eq!(ReplyMode::from_code(token), None, "token {token:?}");
        }
    }

    #[test]
    fn names_round_trip() {
        for mode in ReplyMode::ALL {
            assert_eq!(ReplyMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(ReplyMode::from_name("verbose"), None);
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(ReplyMode::default(), ReplyMode::Standard);
    }
}
