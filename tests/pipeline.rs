use qrbadge::{Error, Pipeline};
use std::fs;
use tempfile::TempDir;

fn pipeline_in(dir: &TempDir) -> Pipeline {
    Pipeline::new(dir.path())
}

#[test]
fn generate_writes_deterministic_path() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline_in(&dir);

    let artifact = pipeline.generate("Alice", "100").expect("generate");

    assert_eq!(artifact.filename, "Alice_100.png");
    assert_eq!(artifact.path, dir.path().join("Alice_100.png"));
    assert_eq!(artifact.payload, "name: Alice, id: 100");
    assert!(artifact.path.exists());

    let on_disk = fs::read(&artifact.path).unwrap();
    assert_eq!(on_disk, artifact.png);
}

#[test]
fn missing_field_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline_in(&dir);

    assert!(matches!(
        pipeline.generate("", "100"),
        Err(Error::MissingField(_))
    ));
    assert!(matches!(
        pipeline.generate("Alice", "   "),
        Err(Error::MissingField(_))
    ));

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty(), "no artifact should be produced");
}

#[test]
fn regenerating_overwrites_in_place() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline_in(&dir);

    let first = pipeline.generate("Alice", "100").unwrap();
    let second = pipeline.generate("Alice", "100").unwrap();

    assert_eq!(first.path, second.path);

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "no duplicate or versioned file");
}

#[test]
fn round_trip_decodes_exact_payload() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline_in(&dir);

    let artifact = pipeline.generate("Alice", "100").unwrap();

    let img = image::open(&artifact.path).unwrap().to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(img);
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR symbol");

    let (_meta, content) = grids[0].decode().unwrap();
    assert_eq!(content, "name: Alice, id: 100");
}

#[test]
fn whitespace_inputs_normalize_to_same_artifact() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline_in(&dir);

    let padded = pipeline.generate("  Bob  ", " 7 ").unwrap();
    let plain = pipeline.generate("Bob", "7").unwrap();

    assert_eq!(padded.payload, plain.payload);
    assert_eq!(padded.filename, plain.filename);
    assert_eq!(padded.path, plain.path);
    assert_eq!(padded.png, plain.png);
}

#[test]
fn path_separator_in_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline_in(&dir);

    let err = pipeline.generate("A/B", "1").unwrap_err();
    assert!(matches!(err, Error::InvalidPathComponent(_)));

    // Nothing written anywhere, nested or otherwise
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty());
}

#[test]
fn missing_output_dir_surfaces_io_error() {
    let dir = TempDir::new().unwrap();
    let gone = dir.path().join("removed");
    let pipeline = Pipeline::new(&gone);

    let err = pipeline.generate("Alice", "100").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
