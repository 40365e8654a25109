use std::str::FromStr;

use crate::foundation::error::{SiteError, SiteResult};

/// Where a tween is placed on its timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Position {
    /// At the current end of the timeline.
    #[default]
    Append,
    /// At an absolute time in seconds.
    At(f64),
    /// Relative to the current end (`"+=0.6"`, `"-=1.5"`).
    FromEnd(f64),
    /// Relative to the start of the previously placed tween (`"<"`, `"<0.2"`).
    WithPrevious(f64),
}

impl Position {
    /// Resolve to an absolute start time, never earlier than zero.
    pub fn resolve(self, end_s: f64, prev_start_s: f64) -> f64 {
        let t = match self {
            Self::Append => end_s,
            Self::At(t) => t,
            Self::FromEnd(offset) => end_s + offset,
            Self::WithPrevious(offset) => prev_start_s + offset,
        };
        t.max(0.0)
    }
}

impl FromStr for Position {
    type Err = SiteError;

    fn from_str(s: &str) -> SiteResult<Self> {
        let s = s.trim();
        let number = |raw: &str| -> SiteResult<f64> {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(0.0);
            }
            raw.parse::<f64>()
                .map_err(|_| SiteError::animation(format!("invalid timeline position '{s}'")))
        };

        if s.is_empty() {
            Ok(Self::Append)
        } else if let Some(rest) = s.strip_prefix("+=") {
            Ok(Self::FromEnd(number(rest)?))
        } else if let Some(rest) = s.strip_prefix("-=") {
            Ok(Self::FromEnd(-number(rest)?))
        } else if let Some(rest) = s.strip_prefix('<') {
            let rest = rest.strip_prefix("+=").unwrap_or(rest);
            Ok(Self::WithPrevious(number(rest)?))
        } else {
            Ok(Self::At(number(s)?))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/position.rs"]
mod tests;
