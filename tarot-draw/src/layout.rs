//! Two-row fanned card layout and responsive scaling.
//!
//! Every value here is a pure function of [`FanConfig`]; nothing is measured
//! from the host page except the container width fed to [`FanConfig::scale_for_width`].
use serde::{Deserialize, Serialize};

/// Which of the two fanned rows a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Row {
    Top,
    Bottom,
}

/// Layout tunables, in design pixels and degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanConfig {
    pub card_width: f64,
    pub card_height: f64,
    pub top_count: usize,
    pub bottom_count: usize,
    /// Extra rotation at the outermost card relative to the row's tilt.
    pub spread_deg: f64,
    /// Horizontal distance between neighbouring cards.
    pub overlap: f64,
    /// Vertical droop per card of distance from the centre.
    pub arc_y: f64,
    pub row_gap: f64,
    pub top_padding: f64,
    /// Magnitude of each row's base tilt; top tilts left, bottom right.
    pub row_tilt_deg: f64,
    pub height_margin: f64,
    pub z_base: i32,
    pub bottom_z_offset: i32,
    pub design_width: f64,
    pub min_scale: f64,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            card_width: 128.0,
            card_height: 198.0,
            top_count: 11,
            bottom_count: 11,
            spread_deg: 28.0,
            overlap: 34.0,
            arc_y: 8.5,
            row_gap: 210.0,
            top_padding: 18.0,
            row_tilt_deg: 8.0,
            height_margin: 26.0,
            z_base: 10,
            bottom_z_offset: 100,
            design_width: 900.0,
            min_scale: 0.62,
        }
    }
}

/// Position of one card back in the pile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanSlot {
    pub row: Row,
    /// Index within the row, left to right.
    pub index: usize,
    /// Index across both rows, top row first; this is what `pick` receives.
    pub global_index: usize,
    pub x: f64,
    pub y: f64,
    /// Final rotation in degrees (row tilt plus fan angle).
    pub rotate: f64,
    /// Rotation relative to the row tilt; zero at the centre card.
    pub fan_angle: f64,
    pub z: i32,
}

impl FanSlot {
    /// CSS transform placing the card relative to the stage centre line.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!(
            "translate(calc(-50% + {}px), {}px) rotate({}deg)",
            self.x, self.y, self.rotate
        )
    }
}

impl FanConfig {
    #[must_use]
    pub const fn total_slots(&self) -> usize {
        self.top_count + self.bottom_count
    }

    #[must_use]
    pub const fn count_for(&self, row: Row) -> usize {
        match row {
            Row::Top => self.top_count,
            Row::Bottom => self.bottom_count,
        }
    }

    #[must_use]
    pub fn base_rotation(&self, row: Row) -> f64 {
        match row {
            Row::Top => -self.row_tilt_deg,
            Row::Bottom => self.row_tilt_deg,
        }
    }

    #[must_use]
    pub fn row_offset_y(&self, row: Row) -> f64 {
        match row {
            Row::Top => self.top_padding,
            Row::Bottom => self.top_padding + self.row_gap,
        }
    }

    fn row_z_offset(&self, row: Row) -> i32 {
        match row {
            Row::Top => 0,
            // Never let the bottom row start inside the top row's z range.
            Row::Bottom => {
                let top_span = i32::try_from(self.top_count).unwrap_or(i32::MAX);
                self.bottom_z_offset.max(top_span)
            }
        }
    }

    const fn global_offset(&self, row: Row) -> usize {
        match row {
            Row::Top => 0,
            Row::Bottom => self.top_count,
        }
    }

    /// Slots for one row holding `count` cards.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build_fan_slots(&self, row: Row, count: usize) -> Vec<FanSlot> {
        let mid = count.saturating_sub(1) as f64 / 2.0;
        let base = self.base_rotation(row);
        let offset_y = self.row_offset_y(row);
        let z_row = self.z_base + self.row_z_offset(row);
        let global = self.global_offset(row);

        (0..count)
            .map(|index| {
                let t = index as f64 - mid;
                let ratio = if mid == 0.0 { 0.0 } else { t / mid };
                let fan_angle = ratio * self.spread_deg;
                FanSlot {
                    row,
                    index,
                    global_index: global + index,
                    x: t * self.overlap,
                    y: offset_y + t.abs() * self.arc_y,
                    rotate: base + fan_angle,
                    fan_angle,
                    z: z_row.saturating_add(i32::try_from(index).unwrap_or(i32::MAX)),
                }
            })
            .collect()
    }

    /// Both rows, top row first.
    #[must_use]
    pub fn slots(&self) -> Vec<FanSlot> {
        let mut slots = self.build_fan_slots(Row::Top, self.top_count);
        slots.extend(self.build_fan_slots(Row::Bottom, self.bottom_count));
        slots
    }

    /// Slot for a global index, if it exists.
    #[must_use]
    pub fn slot_at(&self, global_index: usize) -> Option<FanSlot> {
        let (row, index) = if global_index < self.top_count {
            (Row::Top, global_index)
        } else if global_index < self.total_slots() {
            (Row::Bottom, global_index - self.top_count)
        } else {
            return None;
        };
        self.build_fan_slots(row, self.count_for(row))
            .get(index)
            .copied()
    }

    /// Stage height fitting the deepest arc of both rows plus a margin.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pile_height(&self) -> f64 {
        let widest = self.top_count.max(self.bottom_count);
        let mid = widest.saturating_sub(1) as f64 / 2.0;
        let max_arc = mid.abs() * self.arc_y;
        let top_max = self.row_offset_y(Row::Top) + max_arc + self.card_height;
        let bottom_max = self.row_offset_y(Row::Bottom) + max_arc + self.card_height;
        (top_max.max(bottom_max) + self.height_margin).ceil()
    }

    /// Uniform scale for a container `width`, clamped to `[min_scale, 1]`.
    #[must_use]
    pub fn scale_for_width(&self, width: f64) -> f64 {
        if !width.is_finite() || self.design_width <= 0.0 {
            return self.min_scale;
        }
        (width / self.design_width).clamp(self.min_scale, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn eleven_card_row_is_symmetric_about_centre() {
        let cfg = FanConfig::default();
        let slots = cfg.build_fan_slots(Row::Top, 11);
        assert_eq!(slots.len(), 11);

        let centre = slots[5];
        assert!(close(centre.x, 0.0));
        assert!(close(centre.fan_angle, 0.0));
        assert!(close(centre.rotate, -8.0));
        assert!(close(centre.y, 18.0));

        let (left, right) = (slots[0], slots[10]);
        assert!(close(left.fan_angle, -28.0));
        assert!(close(right.fan_angle, 28.0));
        assert!(close(left.x, -170.0));
        assert!(close(right.x, 170.0));
        assert!(close(left.y, right.y));
        assert!(close(left.y, 18.0 + 42.5));
        for slot in &slots {
            assert!(slot.fan_angle.abs() <= 28.0 + 1e-9);
            assert!(slot.fan_angle.abs() >= centre.fan_angle.abs());
        }
    }

    #[test]
    fn rows_tilt_in_opposite_directions() {
        let cfg = FanConfig::default();
        let top = cfg.build_fan_slots(Row::Top, 11);
        let bottom = cfg.build_fan_slots(Row::Bottom, 11);
        assert!(close(top[5].rotate, -8.0));
        assert!(close(bottom[5].rotate, 8.0));
        assert!(close(bottom[0].rotate, -20.0));
        assert!(close(bottom[10].rotate, 36.0));
        assert!(close(bottom[5].y - top[5].y, 210.0));
    }

    #[test]
    fn z_order_is_left_to_right_and_rows_never_collide() {
        let cfg = FanConfig::default();
        let slots = cfg.slots();
        assert_eq!(slots.len(), 22);
        for pair in slots.windows(2) {
            assert!(pair[1].z > pair[0].z);
        }
        let max_top = slots[..11].iter().map(|s| s.z).max().unwrap();
        let min_bottom = slots[11..].iter().map(|s| s.z).min().unwrap();
        assert!(min_bottom > max_top);

        let crowded = FanConfig {
            bottom_z_offset: 2,
            ..FanConfig::default()
        };
        let slots = crowded.slots();
        let max_top = slots[..11].iter().map(|s| s.z).max().unwrap();
        let min_bottom = slots[11..].iter().map(|s| s.z).min().unwrap();
        assert!(min_bottom > max_top);
    }

    #[test]
    fn single_card_row_sits_at_centre() {
        let cfg = FanConfig::default();
        let slots = cfg.build_fan_slots(Row::Bottom, 1);
        assert_eq!(slots.len(), 1);
        assert!(close(slots[0].x, 0.0));
        assert!(close(slots[0].fan_angle, 0.0));
        assert!(cfg.build_fan_slots(Row::Top, 0).is_empty());
    }

    #[test]
    fn global_indices_map_back_to_slots() {
        let cfg = FanConfig::default();
        let first_bottom = cfg.slot_at(11).unwrap();
        assert_eq!(first_bottom.row, Row::Bottom);
        assert_eq!(first_bottom.index, 0);
        assert_eq!(cfg.slot_at(21).unwrap().index, 10);
        assert_eq!(cfg.slot_at(3).unwrap().row, Row::Top);
        assert!(cfg.slot_at(22).is_none());
        for (idx, slot) in cfg.slots().iter().enumerate() {
            assert_eq!(slot.global_index, idx);
        }
    }

    #[test]
    fn pile_height_fits_both_rows() {
        let cfg = FanConfig::default();
        let height = cfg.pile_height();
        assert!(close(height, 495.0));
        for slot in cfg.slots() {
            assert!(slot.y + cfg.card_height <= height);
        }
    }

    #[test]
    fn scale_is_clamped_and_continuous() {
        let cfg = FanConfig::default();
        assert!(close(cfg.scale_for_width(900.0), 1.0));
        assert!(close(cfg.scale_for_width(450.0), 0.62));
        assert!(close(cfg.scale_for_width(1800.0), 1.0));
        assert!(close(cfg.scale_for_width(720.0), 0.8));
        assert!(close(cfg.scale_for_width(0.0), 0.62));
        assert!(close(cfg.scale_for_width(f64::NAN), 0.62));
    }

    #[test]
    fn transform_css_matches_slot() {
        let cfg = FanConfig::default();
        let slot = cfg.slot_at(0).unwrap();
        assert_eq!(
            slot.transform_css(),
            "translate(calc(-50% + -170px), 60.5px) rotate(-36deg)"
        );
    }
}
