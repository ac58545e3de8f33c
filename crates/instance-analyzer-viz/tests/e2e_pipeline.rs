/// End-to-end tests for the chart renderer and the full run pipeline.
///
/// Real data trees are built in a temporary directory and the real PNG
/// backend is used, so the tests cover file creation, overwriting and the
/// ordering guarantee between scan failures and output.
use instance_analyzer_core::{AnalyzerConfig, Category, InstanceRecord, PerformanceData};
use instance_analyzer_viz::{render_boxplot, run, ChartError, PipelineError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn write_instance(dir: &Path, name: &str, first_line: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), format!("{first_line}\n0.0 1.0\n1.0 0.0\n")).unwrap();
}

/// Width and height from a PNG's IHDR chunk.
fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    assert_eq!(&bytes[..8], &PNG_SIGNATURE, "not a PNG file");
    let w = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let h = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    (w, h)
}

/// Config rooted at `<tmp>/data`, writing all outputs into `tmp`.
fn config_in(tmp: &TempDir) -> AnalyzerConfig {
    AnalyzerConfig {
        output: tmp.path().join("performance_analysis.png"),
        chart_size: (600, 400),
        ..AnalyzerConfig::with_data_dir(tmp.path().join("data"))
    }
}

fn populate(data_dir: &Path) {
    for (i, size) in [10, 12, 14, 40].iter().enumerate() {
        write_instance(&data_dir.join("small"), &format!("s{i}.dat"), &size.to_string());
    }
    for (i, size) in [100, 120].iter().enumerate() {
        write_instance(&data_dir.join("large"), &format!("l{i}.dat"), &size.to_string());
    }
}

// ── Chart ─────────────────────────────────────────────────────────────────────

#[test]
fn chart_is_written_as_png_of_requested_size() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chart.png");

    let mut data = PerformanceData::new();
    data.push(Category::Medium, InstanceRecord::new(50, "a.dat"));
    data.push(Category::Medium, InstanceRecord::new(70, "b.dat"));

    render_boxplot(&data, &path, (640, 480)).expect("render failed");
    assert_eq!(png_dimensions(&fs::read(&path).unwrap()), (640, 480));
}

/// No data at all still yields a chart (three empty slots).
#[test]
fn chart_is_produced_for_empty_data() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.png");

    render_boxplot(&PerformanceData::new(), &path, (300, 200)).expect("render failed");
    assert_eq!(png_dimensions(&fs::read(&path).unwrap()), (300, 200));
}

#[test]
fn chart_overwrites_existing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chart.png");
    fs::write(&path, b"stale contents").unwrap();

    render_boxplot(&PerformanceData::new(), &path, (200, 100)).unwrap();
    assert_eq!(png_dimensions(&fs::read(&path).unwrap()), (200, 100));
}

#[test]
fn zero_sized_chart_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let err = render_boxplot(&PerformanceData::new(), &tmp.path().join("x.png"), (0, 10))
        .unwrap_err();
    assert!(matches!(err, ChartError::InvalidSize(0, 10)));
}

#[test]
fn unwritable_chart_path_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("no-such-dir").join("chart.png");
    let err = render_boxplot(&PerformanceData::new(), &path, (100, 100)).unwrap_err();
    assert!(matches!(err, ChartError::Save(_)), "got {err:?}");
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

#[test]
fn run_reports_and_draws() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);
    populate(&config.data_dir);

    let mut out = Vec::new();
    let outcome = run(&config, &mut out).expect("run failed");
    let report = String::from_utf8(out).unwrap();

    assert_eq!(outcome.data.len(), 6);
    assert_eq!(outcome.summaries.len(), 2);
    assert!(report.starts_with("\nPerformance Analysis Summary:\n"));
    assert!(report.contains(
        "\nSMALL instances:\nNumber of instances: 4\nAverage size: 19.00 nodes\nSize range: 10 - 40 nodes\n"
    ));
    assert!(report.contains(
        "\nLARGE instances:\nNumber of instances: 2\nAverage size: 110.00 nodes\nSize range: 100 - 120 nodes\n"
    ));
    // Medium has no directory, so no section.
    assert!(!report.contains("MEDIUM"));

    assert_eq!(
        png_dimensions(&fs::read(&config.output).unwrap()),
        (600, 400)
    );
}

/// An empty data root prints the header only and still writes the chart.
#[test]
fn run_with_no_data_prints_header_and_draws() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);

    let mut out = Vec::new();
    let outcome = run(&config, &mut out).unwrap();

    assert!(outcome.summaries.is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nPerformance Analysis Summary:\n"
    );
    assert!(config.output.exists());
}

/// A malformed instance aborts before any report or chart is written.
#[test]
fn run_aborts_before_output_on_malformed_instance() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);
    populate(&config.data_dir);
    write_instance(&config.data_dir.join("medium"), "broken.dat", "N=12");

    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();

    assert!(matches!(err, PipelineError::Scan(_)), "got {err:?}");
    assert!(out.is_empty(), "report must not be printed");
    assert!(!config.output.exists(), "chart must not be written");
}

#[test]
fn run_writes_requested_exports() {
    let tmp = TempDir::new().unwrap();
    let config = AnalyzerConfig {
        json_output: Some(tmp.path().join("summary.json")),
        csv_output: Some(tmp.path().join("records.csv")),
        ..config_in(&tmp)
    };
    populate(&config.data_dir);

    run(&config, &mut Vec::new()).unwrap();

    let json = fs::read_to_string(tmp.path().join("summary.json")).unwrap();
    assert!(json.contains("\"category\": \"small\""));
    let csv = fs::read_to_string(tmp.path().join("records.csv")).unwrap();
    assert_eq!(csv.lines().count(), 1 + 6, "header plus one row per record");
}
