//! Cognitive skill tags and puzzle kinds

use serde::{Deserialize, Serialize};

/// Mental faculty a mission or level trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CognitiveSkill {
    Focus,
    Logic,
    Memory,
    Speed,
    #[serde(rename = "Pattern Recognition")]
    PatternRecognition,
    #[serde(rename = "Spatial Reasoning")]
    SpatialReasoning,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    #[serde(rename = "Working Memory")]
    WorkingMemory,
}

impl CognitiveSkill {
    pub const ALL: [CognitiveSkill; 8] = [
        Self::Focus,
        Self::Logic,
        Self::Memory,
        Self::Speed,
        Self::PatternRecognition,
        Self::SpatialReasoning,
        Self::ProblemSolving,
        Self::WorkingMemory,
    ];

    /// Human-readable label, also the persisted form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Logic => "Logic",
            Self::Memory => "Memory",
            Self::Speed => "Speed",
            Self::PatternRecognition => "Pattern Recognition",
            Self::SpatialReasoning => "Spatial Reasoning",
            Self::ProblemSolving => "Problem Solving",
            Self::WorkingMemory => "Working Memory",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|skill| skill.label().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for CognitiveSkill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of puzzle a level is played with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleType {
    Memory,
    Logic,
    Pattern,
    Number,
    Reaction,
    Spatial,
    Attention,
    Language,
}

impl PuzzleType {
    /// Rotation used to assign puzzle kinds to consecutive levels
    pub const LEVEL_ROTATION: [PuzzleType; 5] = [
        Self::Memory,
        Self::Logic,
        Self::Pattern,
        Self::Number,
        Self::Reaction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Logic => "logic",
            Self::Pattern => "pattern",
            Self::Number => "number",
            Self::Reaction => "reaction",
            Self::Spatial => "spatial",
            Self::Attention => "attention",
            Self::Language => "language",
        }
    }

    /// Whether a puzzle adapter exists for this kind.
    ///
    /// Kinds without one are completed through a demo action by the front end.
    pub fn has_adapter(&self) -> bool {
        matches!(self, Self::Memory | Self::Pattern | Self::Number)
    }
}

impl std::fmt::Display for PuzzleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
