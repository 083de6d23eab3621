//! Scripted support bot.
//!
//! Replies come from an ordered keyword table: the first rule with a keyword
//! contained in the lower-cased message wins, otherwise the fallback reply.
//! Keywords match whole words, so "hey" does not fire inside "they".

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reply used when no rule matches.
pub const FALLBACK_REPLY: &str = "I'm not sure about that one. You can reach our team at support@shopverse.example and we'll get back to you within a day.";

/// One keyword rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupportRule {
    /// Lower-case keywords; any of them triggers the rule.
    pub keywords: Vec<String>,
    /// Reply text.
    pub reply: String,
}

impl SupportRule {
    /// Create a rule from keywords and a reply.
    pub fn new<I, K>(keywords: I, reply: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            reply: reply.into(),
        }
    }

    /// Whether any keyword appears as a run of whole words in `words`.
    fn matches(&self, words: &[&str]) -> bool {
        self.keywords.iter().any(|keyword| {
            let phrase = words_of(keyword);
            !phrase.is_empty() && words.windows(phrase.len()).any(|w| w == phrase.as_slice())
        })
    }
}

fn words_of(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Keyword-table support bot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupportBot {
    rules: Vec<SupportRule>,
    fallback: String,
}

impl Default for SupportBot {
    fn default() -> Self {
        Self {
            rules: vec![
                SupportRule::new(
                    ["hello", "hi", "hey"],
                    "Hi there! Ask me about shipping, returns, orders or payments.",
                ),
                SupportRule::new(
                    ["shipping", "ship", "delivery", "deliver"],
                    "Standard shipping takes 5-7 days and is free on orders over $50. Express shipping arrives in 1-2 days.",
                ),
                SupportRule::new(
                    ["return", "returns", "refund", "refunds", "exchange"],
                    "You can return unused items within 30 days of delivery for a full refund.",
                ),
                SupportRule::new(
                    ["track", "tracking", "order status", "where is my order"],
                    "Once your order ships you'll receive an email with a tracking link.",
                ),
                SupportRule::new(
                    ["payment", "payments", "pay", "card", "paypal"],
                    "We accept all major credit cards and PayPal. Payments are processed securely at checkout.",
                ),
                SupportRule::new(
                    ["contact", "human", "agent", "email"],
                    "You can reach our team at support@shopverse.example.",
                ),
            ],
            fallback: FALLBACK_REPLY.to_string(),
        }
    }
}

impl SupportBot {
    /// Create a bot with no rules.
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Append a rule. Earlier rules take precedence.
    pub fn with_rule(mut self, rule: SupportRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Reply to a customer message.
    pub fn reply(&self, message: &str) -> &str {
        let normalized = message.to_lowercase();
        let words = words_of(&normalized);
        match self.rules.iter().position(|r| r.matches(&words)) {
            Some(index) => {
                debug!(rule = index, "support rule matched");
                &self.rules[index].reply
            }
            None => &self.fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let bot = SupportBot::default();
        assert!(bot.reply("How long does SHIPPING take?").contains("5-7 days"));
    }

    #[test]
    fn test_first_rule_wins() {
        let bot = SupportBot::empty("fallback")
            .with_rule(SupportRule::new(["refund"], "first"))
            .with_rule(SupportRule::new(["refund", "card"], "second"));
        assert_eq!(bot.reply("refund to my card"), "first");
        assert_eq!(bot.reply("card declined"), "second");
    }

    #[test]
    fn test_fallback() {
        let bot = SupportBot::default();
        assert_eq!(bot.reply("do you sell bicycles?"), FALLBACK_REPLY);
        assert_eq!(bot.reply(""), FALLBACK_REPLY);
    }

    #[test]
    fn test_greeting_at_end_of_message() {
        let bot = SupportBot::default();
        assert!(bot.reply("hi").starts_with("Hi there"));
        assert!(!bot.reply("this is a shipment").starts_with("Hi there"));
    }

    #[test]
    fn test_keywords_match_whole_words() {
        let bot = SupportBot::default();
        assert!(bot
            .reply("They said my delivery is late")
            .starts_with("Standard shipping"));
        assert_eq!(bot.reply("I had to discard the box"), FALLBACK_REPLY);
        assert!(!bot.reply("when do I repay?").starts_with("We accept"));
    }

    #[test]
    fn test_multi_word_keyword() {
        let bot = SupportBot::default();
        assert!(bot
            .reply("Where is my order?!")
            .starts_with("Once your order ships"));
        assert_eq!(bot.reply("where is my cat"), FALLBACK_REPLY);
    }

    #[test]
    fn test_rule_keywords_lowercased() {
        let rule = SupportRule::new(["Gift Card"], "yes");
        assert_eq!(rule.keywords, vec!["gift card"]);
    }
}
