use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// The closed set of transform commands.
///
/// Names are case-sensitive and match the wire names exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// 5x5 box blur.
    Edges,
    /// Blurred image framed by row and column brightness bars.
    Histograms,
    /// Darken the region covered by the shadow mask.
    OpaqueShadow,
    /// Reduce to at most `maxColors` colors.
    ReduceColor,
    /// Copy green into red and blue.
    Grayscale,
    /// Black-and-white error diffusion on the red channel.
    Monochrome,
    /// Invert color channels.
    NegateImage,
    /// Mirror left to right.
    HorizontalFlip,
    /// Transpose through the anti-diagonal.
    Rotate,
}

impl Command {
    /// Every command, in the order the command list reports them.
    pub const ALL: [Command; 9] = [
        Command::Edges,
        Command::Histograms,
        Command::OpaqueShadow,
        Command::ReduceColor,
        Command::Grayscale,
        Command::Monochrome,
        Command::NegateImage,
        Command::HorizontalFlip,
        Command::Rotate,
    ];

    /// Wire name of the command.
    pub const fn name(self) -> &'static str {
        match self {
            Command::Edges => "edges",
            Command::Histograms => "histograms",
            Command::OpaqueShadow => "opaqueshadow",
            Command::ReduceColor => "reduceColor",
            Command::Grayscale => "grayscale",
            Command::Monochrome => "monochrome",
            Command::NegateImage => "negateImage",
            Command::HorizontalFlip => "horizontalflip",
            Command::Rotate => "rotate",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| EngineError::UnknownCommand(s.to_string()))
    }
}
