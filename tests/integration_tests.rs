use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use utm_reproject::models::{GeoCoordinate, LatitudeCoverage};
use utm_reproject::processors::{Pipeline, PipelineOptions};
use utm_reproject::projection::{Proj4Projector, Projector, Transformer};
use utm_reproject::ProcessingError;

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("input.csv");
    std::fs::write(&path, contents).expect("Failed to write input file");
    path
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .expect("Failed to open output file");
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_new_york_scenario() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_input(&temp_dir, "lat,lon,name\n40.7128,-74.0060,NYC\n");
    let output = temp_dir.path().join("output.csv");

    let report = Pipeline::new().unwrap().run(&input, &output, None).unwrap();

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["lat", "lon", "name", "UTM X", "UTM Y"]);
    assert_eq!(&rows[1][..3], &["40.7128", "-74.0060", "NYC"]);

    let easting: f64 = rows[1][3].parse().unwrap();
    let northing: f64 = rows[1][4].parse().unwrap();
    assert!((easting - 583959.372).abs() < 1.0, "easting {}", easting);
    assert!((northing - 4507350.998).abs() < 1.0, "northing {}", northing);

    assert_eq!(report.total_rows, 1);
    assert_eq!(report.zone_counts.get("18T"), Some(&1));
}

#[test]
fn test_row_count_width_and_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_input(
        &temp_dir,
        "lat,lon,name,notes\n\
         -33.8688,151.2093,Sydney,\"harbour, bridge\"\n\
         51.5074,-0.1278,London,\n\
         78.2232,15.6267,Longyearbyen,svalbard\n\
         -22.9068,-43.1729,Rio,\n",
    );
    let output = temp_dir.path().join("output.csv");

    Pipeline::new().unwrap().run(&input, &output, None).unwrap();

    let input_rows = read_rows(&input);
    let output_rows = read_rows(&output);
    assert_eq!(output_rows.len(), input_rows.len());

    for (original, extended) in input_rows.iter().zip(&output_rows) {
        assert_eq!(extended.len(), original.len() + 2);
        assert_eq!(&extended[..original.len()], original.as_slice());
    }

    let names: Vec<&str> = output_rows[1..].iter().map(|r| r[2].as_str()).collect();
    assert_eq!(names, vec!["Sydney", "London", "Longyearbyen", "Rio"]);
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_input(
        &temp_dir,
        "lat,lon,id\n40.7128,-74.0060,1\n-33.8688,151.2093,2\n60.39,5.32,3\n",
    );
    let first = temp_dir.path().join("first.csv");
    let second = temp_dir.path().join("second.csv");

    Pipeline::new().unwrap().run(&input, &first, None).unwrap();
    Pipeline::new().unwrap().run(&input, &second, None).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn test_malformed_row_leaves_no_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_input(
        &temp_dir,
        "lat,lon,name\n40.7128,-74.0060,NYC\nabc,def,Bad\n",
    );
    let output = temp_dir.path().join("output.csv");

    let err = Pipeline::new().unwrap().run(&input, &output, None).unwrap_err();
    let message = err.to_string();

    match err {
        ProcessingError::MalformedRow { row, value, .. } => {
            assert_eq!(row, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(message, "Malformed row 2: invalid latitude value 'abc'");
    assert!(!output.exists());
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_failed_run_keeps_existing_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_input(&temp_dir, "lat,lon\n95.0,10.0\n");
    let output = temp_dir.path().join("output.csv");
    std::fs::write(&output, "previous\n").unwrap();

    let err = Pipeline::new().unwrap().run(&input, &output, None).unwrap_err();

    assert_eq!(err.row(), Some(1));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous\n");
}

#[test]
fn test_empty_input_is_missing_header() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_input(&temp_dir, "");
    let output = temp_dir.path().join("output.csv");

    let err = Pipeline::new().unwrap().run(&input, &output, None).unwrap_err();

    assert!(matches!(err, ProcessingError::MissingHeader));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.csv");
    let output = temp_dir.path().join("output.csv");

    let err = Pipeline::new().unwrap().run(&input, &output, None).unwrap_err();

    assert!(matches!(err, ProcessingError::MissingInputFile { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn test_directory_input_is_missing_input_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("not_a_file.csv");
    std::fs::create_dir(&input).unwrap();
    let output = temp_dir.path().join("output.csv");

    let err = Pipeline::new().unwrap().run(&input, &output, None).unwrap_err();

    assert!(matches!(err, ProcessingError::MissingInputFile { .. }));
    assert!(!output.exists());
}

#[test]
fn test_header_only_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_input(&temp_dir, "lat,lon,name\n");
    let output = temp_dir.path().join("output.csv");

    let report = Pipeline::new().unwrap().run(&input, &output, None).unwrap();

    assert_eq!(report.total_rows, 0);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "lat,lon,name,UTM X,UTM Y\n"
    );
}

#[test]
fn test_polar_rows_need_extended_coverage() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_input(&temp_dir, "lat,lon\n-85.5,120.0\n");
    let output = temp_dir.path().join("output.csv");

    let err = Pipeline::new().unwrap().run(&input, &output, None).unwrap_err();
    assert!(matches!(err, ProcessingError::Row { row: 1, .. }));

    let pipeline = Pipeline::from_options(PipelineOptions {
        coverage: LatitudeCoverage::Extended,
    })
    .unwrap();
    let report = pipeline.run(&input, &output, None).unwrap();
    assert_eq!(report.zone_counts.get("51 south"), Some(&1));
    assert_eq!(report.zone_counts.get("51S"), None);
}

#[test]
fn test_dry_run_does_not_write() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_input(&temp_dir, "lat,lon\n40.7128,-74.0060\n");

    let report = Pipeline::new().unwrap().dry_run(&input, None).unwrap();

    assert_eq!(report.total_rows, 1);
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_round_trip_through_projector() {
    let projector = Proj4Projector::new().unwrap();
    let transformer = Transformer::new().unwrap();

    let mut lat = -79.0;
    while lat < 84.0 {
        let mut lon = -177.5;
        while lon < 180.0 {
            let projected = transformer.transform(lat, lon).unwrap();
            let back: GeoCoordinate = projector
                .unproject(&projected.point, &projected.zone)
                .unwrap();

            assert!((back.latitude - lat).abs() < 1e-6, "({}, {})", lat, lon);
            assert!((back.longitude - lon).abs() < 1e-6, "({}, {})", lat, lon);
            lon += 22.5;
        }
        lat += 9.5;
    }
}
