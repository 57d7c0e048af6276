//! Theme catalog
//!
//! Display metadata and reflective prompt pools for the twelve themes.

use crate::types::Theme;

/// Static metadata for one theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub theme: Theme,
    pub name: &'static str,
    pub description: &'static str,
    /// Pool the weekly report draws reflective prompts from
    pub prompts: [&'static str; 3],
}

/// Catalog entry for a theme.
///
/// `DEFINITIONS` is declared in canonical theme order, so the discriminant
/// indexes directly.
pub fn definition(theme: Theme) -> &'static ThemeDefinition {
    &DEFINITIONS[theme as usize]
}

static DEFINITIONS: [ThemeDefinition; 12] = [
    ThemeDefinition {
        theme: Theme::Pride,
        name: "Pride",
        description: "Excessive focus on self-image, seeking validation, and comparing yourself favorably to others.",
        prompts: [
            "What drove my need for recognition today?",
            "How did I respond when I didn't receive the attention I expected?",
            "What would happen if I celebrated someone else's success today?",
        ],
    },
    ThemeDefinition {
        theme: Theme::Greed,
        name: "Greed",
        description: "Excessive desire for material possessions or wealth beyond what is needed.",
        prompts: [
            "What purchases today were truly necessary vs. impulsive?",
            "What am I trying to fill by acquiring more things?",
            "What do I already have that I could be more grateful for?",
        ],
    },
    ThemeDefinition {
        theme: Theme::Lust,
        name: "Lust",
        description: "Intense desires that distract from meaningful connections and personal growth.",
        prompts: [
            "What emotions was I avoiding when I felt this pull?",
            "How can I channel this energy into something constructive?",
            "What healthier ways can I meet my need for connection?",
        ],
    },
    ThemeDefinition {
        theme: Theme::Anger,
        name: "Anger",
        description: "Intense feelings of frustration, resentment, or hostility toward others or situations.",
        prompts: [
            "What was I really feeling underneath my anger today?",
            "What boundary was crossed that triggered this response?",
            "How might I respond differently next time?",
        ],
    },
    ThemeDefinition {
        theme: Theme::Gluttony,
        name: "Gluttony",
        description: "Excessive consumption of entertainment, media, or other indulgences.",
        prompts: [
            "What was I avoiding by consuming so much content?",
            "How did I feel after extended screen time?",
            "What activities bring me fulfillment that I'm neglecting?",
        ],
    },
    ThemeDefinition {
        theme: Theme::Envy,
        name: "Envy",
        description: "Resentment or longing for what others have, whether possessions, qualities, or experiences.",
        prompts: [
            "Whose life was I comparing myself to today?",
            "What do I have that I'm taking for granted?",
            "How might I turn admiration into inspiration instead of envy?",
        ],
    },
    ThemeDefinition {
        theme: Theme::Sloth,
        name: "Sloth",
        description: "Avoidance of physical, emotional, or spiritual effort and growth.",
        prompts: [
            "What important task did I avoid today?",
            "What small step could I take tomorrow toward my goals?",
            "What's the cost of staying comfortable?",
        ],
    },
    ThemeDefinition {
        theme: Theme::Fear,
        name: "Fear",
        description: "Anxiety, worry, or avoidance driven by concerns about the future or potential threats.",
        prompts: [
            "What am I afraid might happen?",
            "What evidence do I have that my fear is realistic?",
            "What would I do if I weren't afraid?",
        ],
    },
    ThemeDefinition {
        theme: Theme::SelfPity,
        name: "Self-Pity",
        description: "Excessive focus on one's own misfortunes and feeling victimized by circumstances.",
        prompts: [
            "What story am I telling myself about my situation?",
            "What power do I have to change my circumstances?",
            "Who might be struggling more than me right now?",
        ],
    },
    ThemeDefinition {
        theme: Theme::Guilt,
        name: "Guilt",
        description: "Excessive remorse or self-blame for past actions, often beyond what is proportionate.",
        prompts: [
            "What am I holding onto that I need to release?",
            "Have I made amends where possible?",
            "What would I tell a friend who felt this way?",
        ],
    },
    ThemeDefinition {
        theme: Theme::Shame,
        name: "Shame",
        description: "Deep feelings of unworthiness or inadequacy about who you are as a person.",
        prompts: [
            "What am I hiding from others?",
            "Where did this belief about myself come from?",
            "What would self-compassion look like right now?",
        ],
    },
    ThemeDefinition {
        theme: Theme::Dishonesty,
        name: "Dishonesty",
        description: "Deception of self or others, including rationalizations, omissions, and self-deception.",
        prompts: [
            "What truth am I avoiding?",
            "Who am I pretending to be?",
            "What would radical honesty look like today?",
        ],
    },
];
