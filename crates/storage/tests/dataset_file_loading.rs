use std::io::Write;

use storage::Dataset;
use tempfile::NamedTempFile;

#[test]
fn loads_dataset_from_csv_file_on_disk() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category"
    )
    .expect("write header");
    writeln!(file, "1,CCAFS SLC-40,1,2205.0,FT").expect("write row");
    writeln!(file, "2,KSC LC-39A,0,5300.0,B4").expect("write row");
    file.flush().expect("flush");

    let dataset = Dataset::load(file.path()).expect("dataset");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.min_payload_kg(), 2205.0);
    assert_eq!(dataset.max_payload_kg(), 5300.0);
}

#[test]
fn missing_file_fails_with_path_in_message() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");

    let err = Dataset::load(&path).expect_err("should fail");
    assert!(
        err.to_string().contains("absent.csv"),
        "error should name the file: {err:#}"
    );
}
