//! Pure mapping between the clip timeline and discrete segments.

use dashview_footage_model::{Clip, Footage, Segment};

use crate::seek::SeekInfo;

/// Resolve a clip-relative time into the segment containing it and the
/// offset within that segment.
///
/// Returns `None` for negative times and times beyond the clip duration.
/// A time exactly on a segment boundary belongs to the later segment
/// (offset 0); a time exactly at the clip's end clamps into the last
/// segment.
pub fn segment_and_offset_for(footage: &Footage, clip_secs: f64) -> Option<SeekInfo> {
    if footage.is_empty() || clip_secs < 0.0 || clip_secs > footage.duration_secs {
        return None;
    }

    let mut index = 0;
    for (i, segment) in footage.segments.iter().enumerate() {
        if segment.start_secs <= clip_secs {
            index = i;
        } else {
            break;
        }
    }

    let start = footage.segments[index].start_secs;
    let len = footage.segment_len(index)?;
    Some(SeekInfo {
        index,
        seconds: (clip_secs - start).min(len),
    })
}

/// Clip-relative offset of the clip's triggering event, using the first
/// segment's absolute start as the origin. `None` when the clip has no
/// event or the involved timestamps do not parse.
pub fn event_offset(clip: &Clip, footage: &Footage) -> Option<f64> {
    let event_time = clip.event.as_ref()?.time()?;
    let origin = footage.segments.first()?.start_time()?;
    Some((event_time - origin).num_milliseconds() as f64 / 1000.0)
}

/// Display timestamp for a position within a segment: the segment's encoded
/// start time plus the offset, as a weekday-bearing calendar string. Falls
/// back to the raw segment name when the name does not parse.
pub fn absolute_time_label(segment: &Segment, offset_secs: f64) -> String {
    match segment.absolute_time(offset_secs) {
        Some(time) => time.format("%a, %-d %b %Y, %-I:%M:%S %p").to_string(),
        None => segment.name.clone(),
    }
}

/// `HH:MM:SS` from a zero origin, for mark and position labels.
pub fn zero_based_label(secs: f64) -> String {
    let total = secs.max(0.0).floor() as u64;
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
