const BATTERY_ANSWER: &str = "Batteries should not go in regular bins. Use designated e-waste or hazardous waste drop-offs in your city.";

// Entry order is part of the contract: when several keywords occur in one
// message, the first entry in this list wins.
const FAQS: &[(&str, &str)] = &[
    (
        "plastic",
        "Clean and dry plastics with numbers 1-5 are typically recyclable. Film/plastic bags usually are not curbside—use store drop-offs if available.",
    ),
    ("battery", BATTERY_ANSWER),
    ("batteries", BATTERY_ANSWER),
    (
        "compost",
        "Compost accepts food scraps, coffee grounds, yard waste, and uncoated paper. Avoid meat, dairy, and oily foods if your local guidelines restrict them.",
    ),
    (
        "glass",
        "Rinse glass containers and remove caps. Some areas separate by color; check local rules.",
    ),
    (
        "electronics",
        "Electronics are e-waste. Use certified e-waste collection points for safe recycling.",
    ),
    (
        "pickup",
        "Curbside pickup days vary by location. Please check your local collection schedule or provide your area for specific guidance.",
    ),
    (
        "hazard",
        "Hazardous waste (paint, chemicals, solvents) requires special drop-offs—never place in regular bins.",
    ),
    (
        "landfill",
        "Items that are contaminated, mixed materials, or non-recyclable plastics often go to landfill. Consider reuse first.",
    ),
];

const FALLBACK_REPLY: &str = "This appears related to waste management. Could you share your city/area if you need local rules, or specify the material/item you're disposing of?";

#[derive(Debug, Clone)]
pub struct FaqBook {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for FaqBook {
    fn default() -> Self {
        Self { entries: FAQS }
    }
}

impl FaqBook {
    /// Returns the canned answer for the first keyword found in the message,
    /// or a generic prompt for more detail when nothing matches.
    pub fn reply_for(&self, input: &str) -> String {
        let text = input.to_lowercase();

        for (keyword, answer) in self.entries {
            if text.contains(keyword) {
                return (*answer).to_owned();
            }
        }

        FALLBACK_REPLY.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{FALLBACK_REPLY, FaqBook};

    fn book() -> FaqBook {
        FaqBook::default()
    }

    #[test]
    fn first_listed_keyword_wins() {
        // "plastic battery" matches two entries; "plastic" is listed first.
        let reply = book().reply_for("plastic battery");
        assert!(reply.starts_with("Clean and dry plastics"));
    }

    #[test]
    fn matches_battery_answer() {
        let reply = book().reply_for("where do I take a dead battery?");
        assert!(reply.starts_with("Batteries should not go in regular bins"));
    }

    #[test]
    fn plural_batteries_matches_battery_answer() {
        let reply = book().reply_for("how do i dispose of old batteries?");
        assert!(reply.starts_with("Batteries should not go in regular bins"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let reply = book().reply_for("GLASS bottles");
        assert!(reply.starts_with("Rinse glass containers"));
    }

    #[test]
    fn falls_back_when_no_keyword_matches() {
        let reply = book().reply_for("tell me about bin day");
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[test]
    fn reply_is_deterministic() {
        let first = book().reply_for("compost or landfill?");
        let second = book().reply_for("compost or landfill?");
        assert_eq!(first, second);
    }
}
