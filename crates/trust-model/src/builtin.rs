//! Built-in Preset
//!
//! A generic-organization catalog so the engine is playable without any
//! external content files. Industry-specific presets follow the same TOML
//! shape and load through [`Preset::from_file`](crate::Preset::from_file).

use crate::preset::Preset;

/// The built-in catalog, parsed. The TOML is a compile-time constant, so a
/// parse failure here is a programming error, not a runtime condition.
pub fn generic_preset() -> Preset {
    Preset::from_toml_str(GENERIC_PRESET_TOML).expect("built-in preset should always parse")
}

/// The built-in catalog as TOML, usable as a template for new scenarios.
pub const GENERIC_PRESET_TOML: &str = r#"
id = "generic"
name = "Generic Organization"
description = "A flexible trust scenario for any organization"
welcome_message = "Grow stakeholder trust while keeping the business alive."
goal_description = "Balance credibility, reliability, and intimacy against the pull of self-orientation."
insights = [
    "Trust = (Credibility + Reliability + Intimacy) / Self-Orientation",
    "You can excel at all three numerators and still lose to the divisor.",
    "Every real option carries a trade-off. Purely good moves are rare.",
    "Some harm is unavoidable. Choose which harm, and how often.",
    "Neglecting the finances destroys trust as surely as neglecting people.",
    "Your own state invites events - low reliability attracts failures.",
]

[metrics]
resources_label = "Resources"
profit_label = "Performance"
customers_label = "Stakeholders"

# --- Investments: good but expensive ---

[[initiatives]]
id = 1
title = "Independent Certification"
description = "Third-party audits of your expertise. Credible, and priced like it."
cost = 4
category = "investment"
effects = { credibility = 10.0, profit = -8 }

[[initiatives]]
id = 2
title = "Service Guarantee"
description = "A hard SLA with penalty clauses. Dependable, and risky."
cost = 4
category = "investment"
effects = { reliability = 10.0, profit = -10 }

[[initiatives]]
id = 3
title = "Named Account Leads"
description = "One person who knows each stakeholder. Personal, and slow to scale."
cost = 4
category = "investment"
effects = { intimacy = 10.0, profit = -8 }

[[initiatives]]
id = 4
title = "Stakeholder-First Charter"
description = "Put their outcomes formally ahead of your own margins."
cost = 5
category = "investment"
effects = { self_orientation = -8.0, profit = -15 }

# --- Trade-offs: mixed effects ---

[[initiatives]]
id = 10
title = "Standardize Delivery"
description = "Consistent output, less personal touch."
cost = 2
category = "trade-off"
effects = { reliability = 6.0, intimacy = -4.0, profit = 5 }

[[initiatives]]
id = 11
title = "Open Pricing"
description = "Publish the numbers. Honest, and it shows your margins."
cost = 2
category = "trade-off"
effects = { self_orientation = -5.0, credibility = 3.0, profit = -8 }

[[initiatives]]
id = 12
title = "Brand Campaign"
description = "Raise the profile. Some will read it as self-promotion."
cost = 3
category = "trade-off"
effects = { credibility = 4.0, self_orientation = 4.0, profit = 6 }

[[initiatives]]
id = 13
title = "Always-On Support Bot"
description = "Answers at 3am, warmth not included."
cost = 3
category = "trade-off"
effects = { reliability = 5.0, intimacy = -6.0, profit = 4 }

# --- Necessary evils ---

[[initiatives]]
id = 20
title = "Annual Price Adjustment"
description = "Track inflation. Nobody cheers, the margins need it."
cost = 1
category = "necessary"
effects = { self_orientation = 4.0, intimacy = -3.0, profit = 15 }

[[initiatives]]
id = 21
title = "Overhead Reduction"
description = "Trim costs. Service quality absorbs the cut."
cost = 1
category = "necessary"
effects = { reliability = -4.0, intimacy = -2.0, profit = 12 }

[[initiatives]]
id = 22
title = "Slip the Roadmap"
description = "Break a date now to ship something stable later."
cost = 1
category = "necessary"
effects = { credibility = -4.0, reliability = 3.0, profit = -3 }

# --- Tempting: short-term gain, trust cost ---

[[initiatives]]
id = 30
title = "Hard Upsell Push"
description = "Lean on every renewal call. Great quarter, strained relationships."
cost = 1
category = "tempting"
effects = { self_orientation = 8.0, intimacy = -4.0, profit = 20 }

[[initiatives]]
id = 31
title = "Oversell the Capability"
description = "Promise what the team has not built yet."
cost = 1
category = "tempting"
effects = { credibility = -5.0, self_orientation = 6.0, profit = 15 }

[[initiatives]]
id = 32
title = "Ship It Anyway"
description = "First to market, bugs and all."
cost = 2
category = "tempting"
effects = { reliability = -8.0, profit = 20 }

# --- Background events ---

[[challenges]]
title = "Competitor Stumbles"
description = "A rival fails publicly and their stakeholders go looking."
dimension = "reliability"
effect = 3.0
customer_effect = 15.0
trigger = { condition = "random" }

[[challenges]]
title = "Industry Award"
description = "A respected body recognizes your work."
dimension = "credibility"
effect = 8.0
trigger = { condition = "random" }

[[challenges]]
title = "Glowing Testimonial"
description = "A stakeholder's praise circulates widely."
dimension = "intimacy"
effect = 6.0
customer_effect = 10.0
trigger = { condition = "random" }

[[challenges]]
title = "Market Downturn"
description = "Conditions tighten for everyone at once."
dimension = "self_orientation"
effect = 3.0
profit_effect = -20
trigger = { condition = "random" }

# --- Triggered by state ---

[[challenges]]
title = "Failure Cascade"
description = "Your reliability problems finally show in public."
dimension = "reliability"
effect = -12.0
customer_effect = -8.0
trigger = { condition = "low_reliability", threshold = 35.0 }

[[challenges]]
title = "Stakeholder Exodus"
description = "Word spreads that you look out for yourself first."
dimension = "self_orientation"
effect = 5.0
customer_effect = -15.0
trigger = { condition = "high_self_orientation", threshold = 55.0 }

[[challenges]]
title = "Cash Crunch"
description = "Thin margins force cuts you did not plan."
dimension = "reliability"
effect = -5.0
profit_effect = -10
trigger = { condition = "low_profit", threshold = 50.0 }

[[challenges]]
title = "Referral Wave"
description = "High trust starts selling for you."
dimension = "intimacy"
effect = 3.0
customer_effect = 12.0
trigger = { condition = "high_trust", threshold = 55.0 }

# --- Forced decisions ---

[[challenges]]
title = "Price War"
description = "A competitor undercuts you by thirty percent. Respond?"
dimension = "self_orientation"
effect = 0.0

[[challenges.options]]
label = "Match their prices"
effects = { profit = -15, self_orientation = -3.0, customers = 5.0 }

[[challenges.options]]
label = "Hold firm"
effects = { customers = -10.0, credibility = 2.0 }

[[challenges.options]]
label = "Add value instead"
effects = { profit = -8, reliability = 3.0, intimacy = 2.0 }

[[challenges]]
title = "Mistake Found"
description = "You discover a significant error stakeholders have not noticed."
dimension = "credibility"
effect = 0.0

[[challenges.options]]
label = "Disclose proactively"
effects = { credibility = 4.0, intimacy = 5.0, self_orientation = -5.0, profit = -10 }

[[challenges.options]]
label = "Fix it quietly"
effects = { self_orientation = 4.0, profit = -3 }

[[challenges.options]]
label = "Hope nobody notices"
effects = { self_orientation = 6.0 }

[[personas]]
id = "analytical"
name = "Alex"
role = "Analytical Stakeholder"
avatar = "A"

[[personas]]
id = "relational"
name = "Jordan"
role = "Relationship-Focused"
avatar = "J"

[[personas]]
id = "pragmatic"
name = "Morgan"
role = "Pragmatic Partner"
avatar = "M"

[feedback.credibility]
high = [
    "Their expertise holds up under any scrutiny I can apply.",
    "Every claim they make checks out. No spin, no padding.",
    "I come away from each conversation knowing more than I did.",
]
medium = [
    "Competent, though I have not seen them truly tested.",
    "The credentials look right. The depth is harder to judge.",
    "Knowledgeable, but not distinctively so.",
]
low = [
    "I am not convinced they know what they are doing.",
    "What they claim and what I observe keep diverging.",
    "The confidence is there. The substance, less so.",
]

[feedback.reliability]
high = [
    "Like clockwork. I never have to chase them.",
    "They do what they say, every single time.",
    "I plan around their commitments without a second thought.",
]
medium = [
    "Usually dependable, with the occasional slip.",
    "They deliver, though sometimes only after a reminder.",
    "Reasonably steady. Nothing exceptional.",
]
low = [
    "I keep a backup plan for everything they touch.",
    "Their promises read more like intentions.",
    "Following up on them has become part of my job.",
]

[feedback.intimacy]
high = [
    "They understand our situation well enough that I can be fully candid.",
    "I feel looked after, not processed.",
    "They remember details I had forgotten myself.",
]
medium = [
    "Professional and pleasant, if a little transactional.",
    "They listen. How deeply, I am not sure.",
    "Cordial, but I keep some things back.",
]
low = [
    "I feel like an account number, not a person.",
    "Sharing anything sensitive with them feels risky.",
    "The motions are there. The connection is not.",
]

[feedback.self_orientation]
high = [
    "Everything they do seems designed to extract value from me.",
    "I keep wondering what is in it for them.",
    "The relationship runs one way, and it is not my way.",
]
medium = [
    "They balance their interests against mine fairly enough.",
    "Commercial, but not exploitative.",
    "They need to profit. The way they do it feels fair.",
]
low = [
    "They genuinely put my interests ahead of their own.",
    "I have watched them give up easy revenue to do right by us.",
    "Rare to find an outfit this client-focused.",
]
"#;
