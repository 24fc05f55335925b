use crate::types::ScopeDecision;

// Matching is raw substring containment on the lowercased message, not
// word-boundary matching. Short entries like "bin" or "tax" also fire inside
// longer words ("cabinet", "taxi").
const WASTE_KEYWORDS: &[&str] = &[
    // Core domain
    "waste",
    "garbage",
    "trash",
    "refuse",
    "rubbish",
    "litter",
    "recycle",
    "recycling",
    "compost",
    "composting",
    "landfill",
    "incineration",
    "waste segregation",
    "segregation",
    "bin",
    "bins",
    "collection",
    "pickup",
    "solid waste",
    "hazardous waste",
    "ewaste",
    "e-waste",
    "medical waste",
    "organic waste",
    "plastic",
    "paper",
    "glass",
    "metal",
    "battery",
    "batteries",
    "electronics disposal",
    "zero waste",
    "circular economy",
    "resource recovery",
    "material recovery",
    "mrf",
    "msw",
    "municipal waste",
    "biodegradable",
    "non-biodegradable",
    "sanitary waste",
    "waste audit",
    "dumpster",
    "transfer station",
    "compactor",
    "leachate",
    "methane",
    "anaerobic digestion",
    "extended producer responsibility",
    "epr",
    // Services and rules
    "collection schedule",
    "pickup schedule",
    "bulk waste",
    "drop-off",
    "recycling center",
    "recycling centre",
    "clean-up",
    "sorting",
    "guidelines",
    "contamination",
    "blue bin",
    "green bin",
    "brown bin",
];

// Finance/business topics the bot refuses to engage with.
const BANNED_KEYWORDS: &[&str] = &[
    "stock",
    "stocks",
    "share",
    "shares",
    "crypto",
    "bitcoin",
    "ethereum",
    "forex",
    "currency",
    "currencies",
    "dividend",
    "portfolio",
    "valuation",
    "budget",
    "loan",
    "mortgage",
    "interest",
    "roi",
    "return on investment",
    "revenue",
    "profit",
    "loss",
    "accounting",
    "tax",
    "taxes",
    "irs",
    "gst",
    "balance sheet",
    "income statement",
    "inflation",
    "economy",
    "economic",
    "finance",
    "financial",
    "bank",
    "banking",
    "trading",
    "hedge",
    "fund",
];

// Phrases implying disposal/pickup intent without naming a domain keyword.
const CONTEXT_HINTS: &[&str] = &["bin day", "pickup day", "how to dispose", "can i throw"];

#[derive(Debug, Clone)]
pub struct ScopePolicy {
    waste_keywords: &'static [&'static str],
    banned_keywords: &'static [&'static str],
    context_hints: &'static [&'static str],
}

impl Default for ScopePolicy {
    fn default() -> Self {
        Self {
            waste_keywords: WASTE_KEYWORDS,
            banned_keywords: BANNED_KEYWORDS,
            context_hints: CONTEXT_HINTS,
        }
    }
}

impl ScopePolicy {
    /// Decides whether a message is in scope. Always returns exactly one
    /// reason, and never fails regardless of input.
    pub fn evaluate(&self, input: &str) -> ScopeDecision {
        let text = input.to_lowercase();

        let banned_hit = self.banned_keywords.iter().any(|word| text.contains(word));
        let waste_hit = self.waste_keywords.iter().any(|word| text.contains(word));

        // A message that touches both sets stays in scope; only a pure
        // finance/business hit is rejected.
        if banned_hit && !waste_hit {
            return ScopeDecision {
                allowed: false,
                reasons: vec![
                    "Question appears to be about finance/business, which is out of scope."
                        .to_owned(),
                ],
            };
        }

        if waste_hit {
            return ScopeDecision {
                allowed: true,
                reasons: vec!["Detected waste-management related keywords.".to_owned()],
            };
        }

        if self.context_hints.iter().any(|hint| text.contains(hint)) {
            return ScopeDecision {
                allowed: true,
                reasons: vec!["Detected disposal/pickup context.".to_owned()],
            };
        }

        ScopeDecision {
            allowed: false,
            reasons: vec!["Could not match the topic to waste management.".to_owned()],
        }
    }
}
