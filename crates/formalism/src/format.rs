//! Input format selection.

use crate::codecs::{eds_json, eds_native, mrs_json, simplemrs};
use crate::convert::eds_from_mrs;
use crate::eds::Eds;
use crate::error::FormalismError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported input format. Each variant decodes straight to an [`Eds`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// SimpleMRS text.
    Mrs,
    /// MRS JSON.
    MrsJson,
    /// Native EDS text.
    #[default]
    Eds,
    /// EDS JSON.
    EdsJson,
    /// ACE parser output: one header line followed by SimpleMRS.
    Ace,
}

impl InputFormat {
    pub const ALL: [InputFormat; 5] = [
        InputFormat::Mrs,
        InputFormat::MrsJson,
        InputFormat::Eds,
        InputFormat::EdsJson,
        InputFormat::Ace,
    ];

    /// The selector used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            InputFormat::Mrs => "mrs",
            InputFormat::MrsJson => "mrs_json",
            InputFormat::Eds => "eds",
            InputFormat::EdsJson => "eds_json",
            InputFormat::Ace => "ace",
        }
    }

    /// Decode `text` in this format.
    pub fn decode(self, text: &str) -> Result<Eds, FormalismError> {
        let eds = match self {
            InputFormat::Mrs => eds_from_mrs(&simplemrs::decode(text)?),
            InputFormat::MrsJson => eds_from_mrs(&mrs_json::decode(text)?),
            InputFormat::Eds => eds_native::decode(text)?,
            InputFormat::EdsJson => eds_json::decode(text)?,
            InputFormat::Ace => eds_from_mrs(&simplemrs::decode_ace(text)?),
        };
        tracing::debug!(format = self.name(), nodes = eds.nodes.len(), "decoded input");
        Ok(eds)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputFormat {
    type Err = FormalismError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormalismError::UnknownFormat(s.to_string()))
    }
}
