use std::fmt;

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// The three upstream eSIM providers this bot can query.
///
/// The set is closed: every valid ICCID maps to exactly one variant, with
/// Holafly as the fallback when no longer sub-prefix matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Cmlink,
    ThreeHk,
    Holafly,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::Cmlink => "CMLink",
            ProviderKind::ThreeHk => "3HK",
            ProviderKind::Holafly => "Holafly",
        };
        f.write_str(name)
    }
}

/// A validated ICCID (SIM card serial number).
///
/// Construction goes through [`Iccid::parse`], so a value of this type is
/// guaranteed to be an all-digit string carrying the `89` telecom prefix.
/// No length bound is enforced; upstreams reject unknown identifiers on
/// their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Iccid(String);

impl Iccid {
    /// Validate raw message text as an ICCID candidate.
    pub fn parse(text: &str) -> Option<Self> {
        if !text.starts_with("89") {
            return None;
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route the card to its upstream provider by sub-prefix.
    ///
    /// Pure and total: longer literal prefixes are checked first, anything
    /// else falls through to Holafly.
    pub fn provider(&self) -> ProviderKind {
        if self.0.starts_with("8985234") {
            ProviderKind::Cmlink
        } else if self.0.starts_with("8985203") {
            ProviderKind::ThreeHk
        } else {
            ProviderKind::Holafly
        }
    }
}

impl fmt::Display for Iccid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_digit_strings_with_89_prefix() {
        assert!(Iccid::parse("8985234000000000000").is_some());
        assert!(Iccid::parse("89").is_some()); // no length bound
    }

    #[test]
    fn rejects_non_digits_and_wrong_prefix() {
        assert!(Iccid::parse("89ABCDEF").is_none());
        assert!(Iccid::parse("1985234000000000000").is_none());
        assert!(Iccid::parse("").is_none());
        assert!(Iccid::parse(" 8985234000000000000").is_none());
        assert!(Iccid::parse("8985234 000").is_none());
    }

    #[test]
    fn routes_by_sub_prefix() {
        let route = |s: &str| Iccid::parse(s).unwrap().provider();
        assert_eq!(route("8985234111111111111"), ProviderKind::Cmlink);
        assert_eq!(route("8985203222222222222"), ProviderKind::ThreeHk);
        assert_eq!(route("8999999999999999999"), ProviderKind::Holafly);
        // A partial sub-prefix match is not a match.
        assert_eq!(route("8985200000000000000"), ProviderKind::Holafly);
        assert_eq!(route("89852"), ProviderKind::Holafly);
    }
}
