//! Segment partitioning of the strip

/// Pixel range `[start, end)` covered by one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentBounds {
    pub start: u16,
    pub end: u16,
}

impl SegmentBounds {
    /// Get the number of pixels in the segment
    pub const fn count(self) -> u16 {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }

    pub const fn contains(self, pixel: u16) -> bool {
        pixel >= self.start && pixel < self.end
    }
}

/// Bounds of segment `index` when `pixel_count` pixels are split into
/// `segment_count` contiguous blocks.
///
/// Block `s` spans `floor(n * s / S)..floor(n * (s + 1) / S)`, so the blocks
/// tile the strip without gaps or overlap.
#[allow(clippy::cast_possible_truncation)]
pub const fn segment_bounds(index: u16, segment_count: u16, pixel_count: u16) -> SegmentBounds {
    if segment_count == 0 {
        return SegmentBounds { start: 0, end: 0 };
    }
    let n = pixel_count as u32;
    let segments = segment_count as u32;
    let index = if index < segment_count { index as u32 } else { segments };
    let start = n * index / segments;
    let end = if index < segments {
        n * (index + 1) / segments
    } else {
        n
    };
    // both are <= pixel_count
    SegmentBounds {
        start: start as u16,
        end: end as u16,
    }
}

/// Index of the segment containing `pixel`
///
/// Inverse of [`segment_bounds`]: `ceil((p + 1) * S / n) - 1`.
#[allow(clippy::cast_possible_truncation)]
pub const fn segment_of(pixel: u16, segment_count: u16, pixel_count: u16) -> Option<u16> {
    if segment_count == 0 || pixel >= pixel_count {
        return None;
    }
    let n = pixel_count as u32;
    let segments = segment_count as u32;
    let index = ((pixel as u32 + 1) * segments - 1) / n;
    Some(index as u16)
}
