use std::fs;
use std::path::{Path, PathBuf};

use simplecharts::{ChartData, ChartKind, ChartRenderer};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_dataset(name: &str) -> ChartData {
    let raw = fs::read_to_string(fixture_path(name)).expect("read dataset fixture");
    ChartData::from_json_str(&raw).expect("parse dataset fixture")
}

#[test]
fn two_row_column_chart_matches_golden_svg() {
    let data = load_dataset("two_rows.json");
    let actual = ChartRenderer::with_defaults(ChartKind::Column)
        .render(&data)
        .expect("render");
    let expected =
        fs::read_to_string(fixture_path("two_rows_column.svg")).expect("read golden svg");

    assert_eq!(actual, expected);
}

#[test]
fn fixture_loads_without_legend_field() {
    let data = load_dataset("two_rows.json");
    assert!(data.legend.is_empty());
    assert_eq!(data.validate().expect("valid").rows, 2);
}

#[test]
fn csv_and_json_inputs_render_identically() {
    let from_json = load_dataset("two_rows.json");
    let from_csv = ChartData::from_delimited_str("A,1\nB,2\n", ',', false).expect("parse csv");
    assert_eq!(from_json, from_csv);

    for kind in ChartKind::ALL {
        let renderer = ChartRenderer::with_defaults(kind);
        assert_eq!(
            renderer.render(&from_json).expect("render json"),
            renderer.render(&from_csv).expect("render csv"),
            "{kind}"
        );
    }
}
