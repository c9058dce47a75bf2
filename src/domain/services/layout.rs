//! Panel sizing for the character summary

use crate::domain::value_objects::{
    ColumnProfile, PanelSize, Viewport, BUTTON_AREA, CARD_GAP, MAX_HEIGHT_RATIO,
    MAX_WIDTH_RATIO, MIN_PANEL_HEIGHT, PANEL_PADDING, TITLE_RESERVE,
};

/// Compute the summary panel size for `item_count` cards laid out in
/// `columns` columns.
///
/// Width fits one row of cards and is capped at 95% of the viewport, but
/// never drops below the column profile's minimum width. Height fits every
/// row, is capped at 90% of the viewport and never drops below 350px.
/// Column counts outside 1..=3 use the two-column profile.
pub fn size_panel(columns: u32, item_count: usize, viewport: Viewport) -> PanelSize {
    let profile = ColumnProfile::for_columns(columns);
    let cols = profile.columns as usize;

    let content_width = profile.card_width * cols as f64 + gaps(cols) + PANEL_PADDING;
    let width = content_width
        .min(viewport.width * MAX_WIDTH_RATIO)
        .max(profile.min_width);

    let rows = item_count.div_ceil(cols);
    let content_height = profile.card_height * rows as f64
        + gaps(rows)
        + PANEL_PADDING
        + BUTTON_AREA
        + TITLE_RESERVE;
    let height = content_height
        .min(viewport.height * MAX_HEIGHT_RATIO)
        .max(MIN_PANEL_HEIGHT);

    PanelSize::new(width, height)
}

/// Total gap between `count` cards laid out in a line
fn gaps(count: usize) -> f64 {
    CARD_GAP * count.saturating_sub(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(columns: u32, count: usize) -> PanelSize {
        size_panel(columns, count, Viewport::default())
    }

    #[test]
    fn test_one_column() {
        let panel = size(1, 2);
        // 400 + 0 + 60
        assert_eq!(panel.width, 460.0);
        // 300*2 + 20 + 60 + 50 + 100
        assert_eq!(panel.height, 830.0);
    }

    #[test]
    fn test_two_columns() {
        let panel = size(2, 4);
        // 640 + 20 + 60 = 720
        assert_eq!(panel.width, 720.0);
        // 280*2 + 20 + 210
        assert_eq!(panel.height, 790.0);
    }

    #[test]
    fn test_three_columns_uses_min_width() {
        let panel = size(3, 6);
        // 840 + 40 + 60 = 940
        assert_eq!(panel.width, 940.0);
        // 260*2 + 20 + 210
        assert_eq!(panel.height, 750.0);
        assert!(panel.width >= 920.0);
    }

    #[test]
    fn test_single_card_two_columns() {
        let panel = size(2, 1);
        assert!(panel.width >= 700.0);
        assert_eq!(panel.height, 490.0);
    }

    #[test]
    fn test_zero_cards_hits_height_floor() {
        let panel = size(2, 0);
        assert_eq!(panel.width, 720.0);
        assert_eq!(panel.height, 350.0);
    }

    #[test]
    fn test_width_capped_by_viewport() {
        let panel = size_panel(1, 2, Viewport::new(480.0, 600.0));
        // 460 > 480 * 0.95 = 456, min width 450 still below the cap
        assert_eq!(panel.width, 456.0);
    }

    #[test]
    fn test_min_width_beats_viewport_cap() {
        let panel = size_panel(3, 3, Viewport::new(400.0, 600.0));
        assert_eq!(panel.width, 920.0);
    }

    #[test]
    fn test_height_capped_by_viewport() {
        let panel = size_panel(1, 10, Viewport::new(1920.0, 600.0));
        assert_eq!(panel.height, 540.0);
    }

    #[test]
    fn test_height_floor_beats_viewport_cap() {
        let panel = size_panel(2, 8, Viewport::new(1920.0, 300.0));
        assert_eq!(panel.height, 350.0);
    }

    #[test]
    fn test_height_grows_with_rows() {
        let one_row = size(2, 2);
        let two_rows = size(2, 4);
        let three_rows = size(2, 5);
        assert!(two_rows.height > one_row.height);
        assert!(three_rows.height > two_rows.height);
        assert_eq!(size(2, 3).height, two_rows.height);
    }

    #[test]
    fn test_height_monotonic_in_item_count() {
        for columns in 1..=3 {
            let mut previous = 0.0;
            for count in 0..20 {
                let height = size(columns, count).height;
                assert!(height >= previous, "columns={} count={}", columns, count);
                previous = height;
            }
        }
    }

    #[test]
    fn test_out_of_range_columns_use_two_column_profile() {
        assert_eq!(size(0, 3), size(2, 3));
        assert_eq!(size(7, 5), size(2, 5));
    }
}
