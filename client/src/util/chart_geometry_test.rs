use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn fmt_num_trims_trailing_zeros() {
    assert_eq!(fmt_num(10.0), "10");
    assert_eq!(fmt_num(12.5), "12.5");
    assert_eq!(fmt_num(1.234), "1.23");
    assert_eq!(fmt_num(-0.001), "0");
    assert_eq!(fmt_num(0.0), "0");
}

#[test]
fn donut_with_zero_total_has_no_segments() {
    assert!(donut_segments(&[], 40.0).is_empty());
    assert!(donut_segments(&[0.0, 0.0], 40.0).is_empty());
    assert!(donut_segments(&[-3.0, f64::NAN], 40.0).is_empty());
}

#[test]
fn donut_segments_cover_the_circle() {
    let r = 40.0;
    let segs = donut_segments(&[1.0, 1.0, 2.0], r);
    let c = circumference(r);
    assert_eq!(segs.len(), 3);
    assert!(close(segs.iter().map(|s| s.dash_length).sum::<f64>(), c));
    assert!(close(segs[0].fraction, 0.25));
    assert!(close(segs[2].fraction, 0.5));
    for s in &segs {
        assert!(close(s.dash_length + s.gap_length, c));
    }
}

#[test]
fn donut_offsets_skip_previous_segments() {
    let r = 10.0;
    let c = circumference(r);
    let segs = donut_segments(&[3.0, 0.0, 1.0], r);
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].index, 0);
    assert_eq!(segs[1].index, 2);
    assert!(close(segs[0].dash_offset, 0.0));
    assert!(close(segs[1].dash_offset, -(c * 0.75)));
}

#[test]
fn donut_dash_array_formats_length_and_gap() {
    let segs = donut_segments(&[1.0], 10.0);
    assert_eq!(segs[0].dash_array(), format!("{} 0", fmt_num(circumference(10.0))));
}

#[test]
fn stacked_columns_accumulate_and_pad() {
    let cols = stacked_columns(&[vec![1.0, 2.0, 3.0], vec![1.0], vec![0.0, -5.0, 2.0]]);
    assert_eq!(cols, vec![vec![1.0, 2.0, 3.0], vec![2.0, 2.0, 3.0], vec![2.0, 2.0, 5.0]]);
}

#[test]
fn stacked_area_single_layer_polygon() {
    let paths = stacked_area_paths(&[vec![0.0, 5.0, 10.0]], 100.0, 50.0);
    assert_eq!(paths, vec!["M 0,50 L 50,25 L 100,0 L 100,50 L 50,50 L 0,50 Z".to_owned()]);
}

#[test]
fn stacked_area_upper_layer_sits_on_lower() {
    let paths = stacked_area_paths(&[vec![2.0, 2.0], vec![2.0, 6.0]], 10.0, 80.0);
    assert_eq!(paths.len(), 2);
    // Top of the tallest column (8) touches y = 0.
    assert_eq!(paths[0], "M 0,60 L 10,60 L 10,80 L 0,80 Z");
    assert_eq!(paths[1], "M 0,40 L 10,0 L 10,60 L 0,60 Z");
}

#[test]
fn stacked_area_all_zero_lies_on_baseline() {
    let paths = stacked_area_paths(&[vec![0.0, 0.0]], 10.0, 20.0);
    assert_eq!(paths, vec!["M 0,20 L 10,20 L 10,20 L 0,20 Z".to_owned()]);
}

#[test]
fn stacked_area_with_fewer_than_two_points_is_flat() {
    assert_eq!(stacked_area_paths(&[vec![4.0], vec![]], 10.0, 20.0), vec!["M 0,20 L 10,20 Z".to_owned(); 2]);
    assert!(stacked_area_paths(&[], 10.0, 20.0).is_empty());
}
