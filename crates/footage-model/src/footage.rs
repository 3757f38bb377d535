//! Footage: the ordered segment sequence for one clip.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// The complete footage for one clip: contiguous, time-ordered segments
/// plus the total duration in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footage {
    pub segments: Vec<Segment>,
    pub duration_secs: f64,
}

impl Footage {
    /// Load a footage manifest from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FootageError> {
        let path = path.as_ref().to_path_buf();

        let json = std::fs::read_to_string(&path).map_err(|e| FootageError::Io {
            path: path.clone(),
            source: e,
        })?;

        let footage: Footage =
            serde_json::from_str(&json).map_err(|e| FootageError::Parse { path, source: e })?;

        footage.validate()?;
        Ok(footage)
    }

    /// Check the segment-ordering invariants: starts begin at zero, strictly
    /// increase, and stay within the total duration.
    pub fn validate(&self) -> Result<(), FootageError> {
        if self.duration_secs < 0.0 {
            return Err(FootageError::invalid("Negative clip duration"));
        }

        if let Some(first) = self.segments.first() {
            if first.start_secs != 0.0 {
                return Err(FootageError::invalid("First segment must start at 0"));
            }
        }

        for pair in self.segments.windows(2) {
            if pair[1].start_secs <= pair[0].start_secs {
                return Err(FootageError::invalid(format!(
                    "Segments out of order: {} does not start after {}",
                    pair[1].name, pair[0].name
                )));
            }
        }

        if let Some(last) = self.segments.last() {
            if last.start_secs > self.duration_secs {
                return Err(FootageError::invalid(
                    "Last segment starts beyond the clip duration",
                ));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index of the last segment, if any.
    pub fn last_index(&self) -> Option<usize> {
        self.segments.len().checked_sub(1)
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Length of a segment in seconds: the distance to the next segment's
    /// start, or to the clip's end for the last segment.
    pub fn segment_len(&self, index: usize) -> Option<f64> {
        let segment = self.segments.get(index)?;
        let end = match self.segments.get(index + 1) {
            Some(next) => next.start_secs,
            None => self.duration_secs,
        };
        Some((end - segment.start_secs).max(0.0))
    }
}

/// Errors that can occur when loading footage manifests.
#[derive(Debug, thiserror::Error)]
pub enum FootageError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid footage: {message}")]
    Invalid { message: String },
}

impl FootageError {
    fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn segment(name: &str, start_secs: f64) -> Segment {
        Segment {
            name: name.to_string(),
            start_secs,
            front: format!("{name}-front.mp4"),
            back: format!("{name}-back.mp4"),
            left: format!("{name}-left.mp4"),
            right: format!("{name}-right.mp4"),
        }
    }

    fn two_segment_footage() -> Footage {
        Footage {
            segments: vec![
                segment("2024-03-18_14-05-33", 0.0),
                segment("2024-03-18_14-06-03", 30.0),
            ],
            duration_secs: 75.0,
        }
    }

    #[test]
    fn test_segment_lengths() {
        let footage = two_segment_footage();
        assert_eq!(footage.segment_len(0), Some(30.0));
        assert_eq!(footage.segment_len(1), Some(45.0));
        assert_eq!(footage.segment_len(2), None);
    }

    #[test]
    fn test_last_index() {
        let footage = two_segment_footage();
        assert_eq!(footage.last_index(), Some(1));
        let empty = Footage {
            segments: vec![],
            duration_secs: 0.0,
        };
        assert_eq!(empty.last_index(), None);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(two_segment_footage().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_order() {
        let mut footage = two_segment_footage();
        footage.segments[1].start_secs = 0.0;
        assert!(footage.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonzero_first_start() {
        let mut footage = two_segment_footage();
        footage.segments[0].start_secs = 1.0;
        assert!(footage.validate().is_err());
    }

    #[test]
    fn test_manifest_round_trip() {
        let footage = two_segment_footage();
        let json = serde_json::to_string_pretty(&footage).unwrap();
        let parsed: Footage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, footage);
    }

    proptest! {
        /// Segment lengths partition the clip: they sum to the duration.
        #[test]
        fn prop_segment_lengths_cover_the_clip(
            gaps in proptest::collection::vec(0.5f64..60.0, 1..8)
        ) {
            let mut start = 0.0;
            let mut segments = vec![];
            for (i, gap) in gaps.iter().enumerate() {
                segments.push(segment(&format!("seg-{i}"), start));
                start += gap;
            }
            let footage = Footage {
                segments,
                duration_secs: start,
            };

            prop_assert!(footage.validate().is_ok());
            let total: f64 = (0..footage.len())
                .map(|i| footage.segment_len(i).unwrap())
                .sum();
            prop_assert!((total - footage.duration_secs).abs() < 1e-6);
        }
    }
}
