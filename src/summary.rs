//! Summary presets: prompt phrasing and model length bounds.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::Error;

/// Requested summary shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryType {
    /// 1-2 concise sentences.
    Short,
    /// One descriptive paragraph.
    Medium,
    /// A list of key points.
    Bullet,
}

impl SummaryType {
    fn instruction(self) -> &'static str {
        match self {
            Self::Short => "Summarize the following text in 1-2 concise sentences:",
            Self::Medium => {
                "Provide a medium-length summary (one paragraph) of the following text:"
            }
            Self::Bullet => "Summarize the following text as a list of bullet points:",
        }
    }
}

impl FromStr for SummaryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "bullet" => Ok(Self::Bullet),
            other => Err(Error::validation(format!(
                "invalid summary type '{other}' (expected short | medium | bullet)"
            ))),
        }
    }
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Bullet => "bullet",
        })
    }
}

/// Length bounds forwarded to the model, in model tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthParams {
    pub max_length: u32,
    pub min_length: u32,
}

/// Build the natural-language instruction embedding `text`.
///
/// Pure and deterministic. `None` is the defensive default for an
/// unrecognized preset; the CLI never produces it.
pub fn build_prompt(kind: Option<SummaryType>, text: &str) -> String {
    let instruction = match kind {
        Some(kind) => kind.instruction(),
        None => "Summarize the following text:",
    };
    format!("{instruction}\n\n{text}")
}

/// Length bounds for a preset; `None` yields no constraints at all.
pub fn length_params(kind: Option<SummaryType>) -> Option<LengthParams> {
    kind.map(|kind| match kind {
        SummaryType::Short => LengthParams {
            max_length: 60,
            min_length: 20,
        },
        SummaryType::Medium => LengthParams {
            max_length: 150,
            min_length: 80,
        },
        SummaryType::Bullet => LengthParams {
            max_length: 250,
            min_length: 50,
        },
    })
}
