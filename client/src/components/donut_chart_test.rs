use super::*;

#[test]
fn series_colors_cycle() {
    assert_eq!(series_color(0), SERIES_COLORS[0]);
    assert_eq!(series_color(SERIES_COLORS.len()), SERIES_COLORS[0]);
    assert_eq!(series_color(SERIES_COLORS.len() + 2), SERIES_COLORS[2]);
}
