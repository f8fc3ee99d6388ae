use std::collections::HashMap;

use crate::error::EngineError;
use crate::quantize::DEFAULT_MAX_COLORS;

/// Argument key read by `reduceColor`.
pub const MAX_COLORS_KEY: &str = "maxColors";

/// String-keyed arguments that accompany a command.
///
/// Unknown keys are carried along and ignored by commands that do not read
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    values: HashMap<String, String>,
}

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, consuming and returning `self`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The `maxColors` argument, [`DEFAULT_MAX_COLORS`] when absent.
    ///
    /// Fails when the value is not an integer or is not positive.
    pub fn max_colors(&self) -> Result<usize, EngineError> {
        let Some(raw) = self.get(MAX_COLORS_KEY) else {
            return Ok(DEFAULT_MAX_COLORS);
        };
        let invalid = |reason| EngineError::InvalidArgument {
            key: MAX_COLORS_KEY,
            value: raw.to_string(),
            reason,
        };
        let parsed: i64 = raw.parse().map_err(|_| invalid("expected an integer"))?;
        if parsed <= 0 {
            return Err(invalid("must be a positive integer"));
        }
        usize::try_from(parsed).map_err(|_| invalid("value out of range"))
    }
}

impl From<HashMap<String, String>> for CommandArgs {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CommandArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_colors_default() {
        assert_eq!(CommandArgs::new().max_colors(), Ok(8));
    }

    #[test]
    fn test_max_colors_parsed() {
        let args = CommandArgs::new().with("maxColors", "3");
        assert_eq!(args.max_colors(), Ok(3));
    }

    #[test]
    fn test_max_colors_not_integer() {
        let args = CommandArgs::new().with("maxColors", "eight");
        assert_eq!(
            args.max_colors(),
            Err(EngineError::InvalidArgument {
                key: "maxColors",
                value: "eight".to_string(),
                reason: "expected an integer",
            })
        );
        assert!(CommandArgs::new().with("maxColors", "2.5").max_colors().is_err());
        assert!(CommandArgs::new().with("maxColors", "").max_colors().is_err());
    }

    #[test]
    fn test_max_colors_not_positive() {
        for raw in ["0", "-4"] {
            let err = CommandArgs::new().with("maxColors", raw).max_colors().unwrap_err();
            assert!(matches!(
                err,
                EngineError::InvalidArgument {
                    reason: "must be a positive integer",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_from_iterator() {
        let args: CommandArgs = [("image", "a.png"), ("maxColors", "4")].into_iter().collect();
        assert_eq!(args.len(), 2);
        assert_eq!(args.get("image"), Some("a.png"));
        assert_eq!(args.get("missing"), None);
    }
}
