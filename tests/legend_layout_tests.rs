use approx::assert_relative_eq;
use simplecharts::core::{TextMetrics, layout_legend};

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|label| (*label).to_owned()).collect()
}

#[test]
fn short_legend_fits_one_right_aligned_row() {
    let legend = labels(&["X", "Y"]);
    let layout = layout_legend(&legend, 640.0, 20.0, TextMetrics::new(10.0, 4.0));

    assert_eq!(layout.row_count(), 1);
    // Two entries of 10 + 4 + 10 + 10 = 34px, plus 2 * 4 - 10 box slack.
    assert_relative_eq!(layout.width, 66.0);
    assert_relative_eq!(layout.height, 20.0);
    assert_relative_eq!(layout.box_x, 574.0);
    assert_relative_eq!(layout.box_y, -20.0);

    let first = &layout.rows[0].entries[0];
    assert_relative_eq!(first.swatch_x, 578.0);
    assert_relative_eq!(first.swatch_y, -15.0);
    assert_relative_eq!(first.text_x, 592.0);
    assert_relative_eq!(first.text_y, -10.0);

    let second = &layout.rows[0].entries[1];
    assert_eq!(second.series, 1);
    assert_relative_eq!(second.swatch_x, 612.0);
}

#[test]
fn long_legend_wraps_and_grows_downward_box() {
    let legend = vec!["abcdefghij".to_owned(); 10];
    let layout = layout_legend(&legend, 640.0, 20.0, TextMetrics::new(10.0, 4.0));

    // Entries are 124px wide; five fit in 640px (618px), six do not.
    assert_eq!(layout.row_count(), 2);
    assert_eq!(layout.rows[0].entries.len(), 5);
    assert_eq!(layout.rows[1].entries.len(), 5);
    assert_relative_eq!(layout.width, 618.0);
    assert_relative_eq!(layout.height, 40.0);
    assert_relative_eq!(layout.box_y, -40.0);

    assert_relative_eq!(layout.rows[0].entries[0].text_y, -30.0);
    assert_relative_eq!(layout.rows[1].entries[0].text_y, -10.0);
    assert_eq!(layout.rows[1].entries[0].series, 5);
    assert_relative_eq!(
        layout.rows[1].entries[0].swatch_x,
        layout.rows[0].entries[0].swatch_x
    );
}

#[test]
fn box_width_is_widest_row() {
    let legend = labels(&["a-rather-long-series-name", "b", "c"]);
    let layout = layout_legend(&legend, 300.0, 20.0, TextMetrics::new(10.0, 4.0));

    assert_eq!(layout.row_count(), 2);
    let widest = layout
        .rows
        .iter()
        .map(|row| row.width)
        .fold(0.0, f64::max);
    assert_relative_eq!(layout.width, widest);
    assert_relative_eq!(layout.rows[0].width, 272.0);
}

#[test]
fn oversized_label_still_gets_a_row() {
    let legend = vec!["x".repeat(80)];
    let layout = layout_legend(&legend, 640.0, 20.0, TextMetrics::new(10.0, 4.0));

    assert_eq!(layout.row_count(), 1);
    assert!(layout.width > 640.0);
    assert!(layout.box_x < 0.0);
}

#[test]
fn empty_legend_has_no_rows() {
    let layout = layout_legend(&[], 640.0, 20.0, TextMetrics::new(10.0, 4.0));
    assert!(layout.is_empty());
    assert_relative_eq!(layout.height, 0.0);
}
