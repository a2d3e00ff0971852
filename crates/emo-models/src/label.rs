//! Emotion label definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The seven emotion categories the classifier scores.
///
/// Declaration order matches the classifier's output index order; the
/// derived `Ord` therefore sorts labels by class index, not alphabetically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum EmotionLabel {
    Angry,
    Disgust,
    Fear,
    Happy,
    Sad,
    Surprise,
    Neutral,
}

impl EmotionLabel {
    /// Number of emotion classes.
    pub const COUNT: usize = 7;

    /// All labels in classifier index order.
    pub const ALL: [EmotionLabel; EmotionLabel::COUNT] = [
        EmotionLabel::Angry,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
    ];

    /// Classifier output index for this label.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Label for a classifier output index.
    pub fn from_index(index: usize) -> Option<EmotionLabel> {
        EmotionLabel::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Angry => "Angry",
            EmotionLabel::Disgust => "Disgust",
            EmotionLabel::Fear => "Fear",
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Sad => "Sad",
            EmotionLabel::Surprise => "Surprise",
            EmotionLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Angry" => Ok(EmotionLabel::Angry),
            "Disgust" => Ok(EmotionLabel::Disgust),
            "Fear" => Ok(EmotionLabel::Fear),
            "Happy" => Ok(EmotionLabel::Happy),
            "Sad" => Ok(EmotionLabel::Sad),
            "Surprise" => Ok(EmotionLabel::Surprise),
            "Neutral" => Ok(EmotionLabel::Neutral),
            _ => Err(ParseLabelError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown emotion label: {0}")]
pub struct ParseLabelError(String);
