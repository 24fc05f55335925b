use crate::{
    faq::FaqBook,
    scope::ScopePolicy,
    types::{ChatOutcome, ScopeDecision},
};

const REFUSAL_REPLY: &str = "I'm here to help with waste management topics only. Please ask about recycling, disposal guidelines, pickup schedules, composting, etc.";

/// Stateless two-stage rule engine: the scope policy decides whether a
/// message is in the waste-management domain, and the FAQ book picks a
/// canned reply for messages that pass.
#[derive(Debug, Clone, Default)]
pub struct ChatEngine {
    scope: ScopePolicy,
    faqs: FaqBook,
}

impl ChatEngine {
    pub fn classify(&self, message: &str) -> ScopeDecision {
        self.scope.evaluate(message)
    }

    pub fn classify_and_reply(&self, message: &str) -> ChatOutcome {
        let decision = self.scope.evaluate(message);

        if !decision.allowed {
            return ChatOutcome {
                reply: REFUSAL_REPLY.to_owned(),
                allowed: false,
                reasons: decision.reasons,
            };
        }

        ChatOutcome {
            reply: self.faqs.reply_for(message),
            allowed: true,
            reasons: decision.reasons,
        }
    }
}
