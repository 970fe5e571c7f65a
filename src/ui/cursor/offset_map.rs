// SPDX-License-Identifier: MPL-2.0
//! Mapping between integer scale values and pixel offsets along the track.

use crate::domain::MaxValue;

/// One scale step and where it sits on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub value: u32,
    pub offset: f32,
}

/// Linear value-to-offset table for a track of a given pixel width.
///
/// Holds `max_value + 1` entries, the first at offset 0 and the last at
/// `max_offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetMap {
    max_offset: f32,
    entries: Vec<Entry>,
}

impl OffsetMap {
    /// Builds the table for a track `max_offset` pixels wide.
    ///
    /// Negative or NaN widths are treated as zero.
    #[must_use]
    pub fn new(max_offset: f32, max_value: MaxValue) -> Self {
        let max_offset = max_offset.max(0.0);
        let steps = max_value.as_f32();

        let entries = (0..=max_value.get())
            .map(|value| {
                #[allow(clippy::cast_precision_loss)] // scale values are small
                let ratio = value as f32 / steps;
                Entry {
                    value,
                    offset: max_offset * ratio,
                }
            })
            .collect();

        Self {
            max_offset,
            entries,
        }
    }

    /// Track width in pixels.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// Highest value on the scale.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.entries.last().map_or(0, |entry| entry.value)
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Offset of `value`, clamped to the scale.
    #[must_use]
    pub fn offset_of(&self, value: u32) -> f32 {
        let index = value.min(self.max_value()) as usize;
        self.entries
            .get(index)
            .map_or(self.max_offset, |entry| entry.offset)
    }

    /// Whether a pixel position lies on the track, ends included.
    #[must_use]
    pub fn contains(&self, position: f32) -> bool {
        (0.0..=self.max_offset).contains(&position)
    }

    /// Snaps a pixel position to the nearest scale value.
    ///
    /// Positions at or past either end resolve to that end. On an exact tie
    /// between two steps the lower value wins.
    #[must_use]
    pub fn nearest(&self, position: f32) -> u32 {
        if position >= self.max_offset {
            return self.max_value();
        }
        if position <= 0.0 {
            return 0;
        }

        let mut best = Entry {
            value: 0,
            offset: 0.0,
        };
        for entry in &self.entries {
            if (entry.offset - position).abs() < (best.offset - position).abs() {
                best = *entry;
            }
        }
        best.value
    }
}
