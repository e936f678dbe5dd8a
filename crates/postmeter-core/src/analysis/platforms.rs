//! Per-platform suitability scoring.
//!
//! Every platform is a [`PlatformProfile`] in a fixed registry: its character
//! limit plus the bonus and tip rules that apply to it. Scoring a text for a
//! platform starts from [`BASE_SCORE`], adds the profile's bonuses, and clamps
//! to 0–100. Adding a platform means adding a registry entry.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::LexicalStats;

/// Score every platform starts from.
pub const BASE_SCORE: i32 = 70;

static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").expect("valid regex"));

static MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").expect("valid regex"));

/// Pictographs that mark visual content for Instagram.
const VISUAL_MARKERS: &[char] = &['📷', '🎨'];

/// A supported social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Platform {
    /// Twitter / X.
    Twitter,
    /// Facebook.
    Facebook,
    /// Instagram.
    Instagram,
    /// LinkedIn.
    Linkedin,
    /// TikTok.
    Tiktok,
}

impl Platform {
    /// Returns the platform identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
        }
    }

    /// Look up this platform's profile in the registry.
    ///
    /// Variants are declared in registry order.
    pub fn profile(self) -> &'static PlatformProfile {
        &PLATFORMS[self as usize]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PLATFORMS
            .iter()
            .map(|p| p.platform)
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let available: Vec<_> = PLATFORMS.iter().map(|p| p.platform.as_str()).collect();
                format!("unknown platform: {s}. Use: {}", available.join(", "))
            })
    }
}

/// Text features the platform rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSignals<'a> {
    /// The raw text.
    pub text: &'a str,
    /// Length of the text in characters.
    pub characters: usize,
    /// `#word` occurrences.
    pub hashtags: usize,
    /// `@word` occurrences.
    pub mentions: usize,
    /// `?` occurrences.
    pub questions: usize,
    /// Word count from the lexical stats.
    pub words: usize,
}

impl<'a> PlatformSignals<'a> {
    /// Gather signals from a text and its lexical stats.
    pub fn collect(text: &'a str, stats: &LexicalStats) -> Self {
        Self {
            text,
            characters: text.chars().count(),
            hashtags: HASHTAG.find_iter(text).count(),
            mentions: MENTION.find_iter(text).count(),
            questions: text.matches('?').count(),
            words: stats.words,
        }
    }
}

/// Static configuration of one platform.
#[derive(Debug)]
pub struct PlatformProfile {
    /// Which platform this profile describes.
    pub platform: Platform,
    /// Post character limit.
    pub max_chars: usize,
    /// Points added on top of [`BASE_SCORE`].
    pub bonus: fn(&PlatformSignals<'_>) -> i32,
    /// Advice shown alongside the score.
    pub tip: fn(&PlatformSignals<'_>) -> &'static str,
}

/// The platform registry, in report order.
pub static PLATFORMS: [PlatformProfile; 5] = [
    PlatformProfile {
        platform: Platform::Twitter,
        max_chars: 280,
        bonus: twitter_bonus,
        tip: twitter_tip,
    },
    PlatformProfile {
        platform: Platform::Facebook,
        max_chars: 63_206,
        bonus: facebook_bonus,
        tip: facebook_tip,
    },
    PlatformProfile {
        platform: Platform::Instagram,
        max_chars: 2_200,
        bonus: instagram_bonus,
        tip: instagram_tip,
    },
    PlatformProfile {
        platform: Platform::Linkedin,
        max_chars: 3_000,
        bonus: linkedin_bonus,
        tip: linkedin_tip,
    },
    PlatformProfile {
        platform: Platform::Tiktok,
        max_chars: 150,
        bonus: no_bonus,
        tip: tiktok_tip,
    },
];

fn twitter_bonus(s: &PlatformSignals<'_>) -> i32 {
    let mut bonus = 0;
    if s.characters <= 280 {
        bonus += 20;
    }
    if s.hashtags > 0 {
        bonus += 10;
    }
    if s.mentions > 0 {
        bonus += 5;
    }
    bonus
}

fn facebook_bonus(s: &PlatformSignals<'_>) -> i32 {
    let mut bonus = 0;
    if s.questions > 0 {
        bonus += 10;
    }
    if s.words > 20 && s.words < 100 {
        bonus += 15;
    }
    bonus
}

fn instagram_bonus(s: &PlatformSignals<'_>) -> i32 {
    let mut bonus = 0;
    if s.hashtags > 5 {
        bonus += 15;
    }
    if s.text.contains(VISUAL_MARKERS) {
        bonus += 10;
    }
    bonus
}

fn linkedin_bonus(s: &PlatformSignals<'_>) -> i32 {
    let mut bonus = 0;
    if s.words > 50 {
        bonus += 15;
    }
    // Case-sensitive on purpose: matches the lower-case terms only.
    if s.text.contains("professional") || s.text.contains("business") {
        bonus += 10;
    }
    bonus
}

// TikTok scores the base only.
const fn no_bonus(_: &PlatformSignals<'_>) -> i32 {
    0
}

fn twitter_tip(s: &PlatformSignals<'_>) -> &'static str {
    if s.words > 40 {
        "Consider breaking into thread for better engagement"
    } else {
        "Perfect length for Twitter!"
    }
}

fn linkedin_tip(s: &PlatformSignals<'_>) -> &'static str {
    if s.words < 50 {
        "Add more professional context for LinkedIn audience"
    } else {
        "Great for professional networking"
    }
}

const fn facebook_tip(_: &PlatformSignals<'_>) -> &'static str {
    "Ask questions to encourage comments and engagement"
}

const fn instagram_tip(_: &PlatformSignals<'_>) -> &'static str {
    "Add relevant hashtags and visual elements for better reach"
}

fn tiktok_tip(s: &PlatformSignals<'_>) -> &'static str {
    if s.words > 30 {
        "Keep it short and punchy for TikTok"
    } else {
        "Perfect for quick TikTok captions"
    }
}

/// Suitability of a text for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlatformReport {
    /// The platform scored.
    pub platform: Platform,
    /// Heuristic fit, 0–100.
    pub suitability: u8,
    /// Length of the text in characters.
    pub characters: usize,
    /// The platform's character limit.
    pub max_chars: usize,
    /// The text as it would fit the platform.
    pub preview: String,
    /// Whether the preview was cut to the limit.
    pub truncated: bool,
    /// Platform-specific advice.
    pub tip: String,
}

/// Score a text against one platform profile.
pub fn evaluate_profile(signals: &PlatformSignals<'_>, profile: &PlatformProfile) -> PlatformReport {
    let score = (BASE_SCORE + (profile.bonus)(signals)).clamp(0, 100);
    let (preview, truncated) = truncate_preview(signals.text, signals.characters, profile.max_chars);

    PlatformReport {
        platform: profile.platform,
        suitability: score as u8,
        characters: signals.characters,
        max_chars: profile.max_chars,
        preview,
        truncated,
        tip: (profile.tip)(signals).to_string(),
    }
}

/// Score a text for a single platform.
pub fn evaluate_platform(text: &str, stats: &LexicalStats, platform: Platform) -> PlatformReport {
    let signals = PlatformSignals::collect(text, stats);
    evaluate_profile(&signals, platform.profile())
}

/// Score a text for every registered platform, in registry order.
#[tracing::instrument(skip(text, stats), fields(text_len = text.len()))]
pub fn evaluate_platforms(text: &str, stats: &LexicalStats) -> Vec<PlatformReport> {
    let signals = PlatformSignals::collect(text, stats);
    tracing::debug!(
        hashtags = signals.hashtags,
        mentions = signals.mentions,
        questions = signals.questions,
        "platform signals collected"
    );
    PLATFORMS
        .iter()
        .map(|profile| evaluate_profile(&signals, profile))
        .collect()
}

/// Cut text to `max_chars`, ending in `...`, when it is longer than the limit.
fn truncate_preview(text: &str, characters: usize, max_chars: usize) -> (String, bool) {
    if characters <= max_chars {
        return (text.to_string(), false);
    }
    let mut preview: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    preview.push_str("...");
    (preview, true)
}
