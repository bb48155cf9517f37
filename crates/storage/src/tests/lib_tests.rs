use super::*;

const SAMPLE_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
3,4,KSC LC-39A,1,9600.0,F9 FT B1031.1,FT
4,5,CCAFS LC-40,1,3170.0,F9 B4 B1040.1,B4
";

#[test]
fn loads_records_and_payload_bounds() {
    let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).expect("dataset");
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.min_payload_kg(), 0.0);
    assert_eq!(dataset.max_payload_kg(), 9600.0);

    let first = &dataset.records()[0];
    assert_eq!(first.launch_site, "CCAFS LC-40");
    assert_eq!(first.class, OutcomeClass::Failure);
    assert_eq!(first.booster_version_category, "v1.0");
}

#[test]
fn keeps_sites_in_first_appearance_order() {
    let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).expect("dataset");
    assert_eq!(
        dataset.sites(),
        ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
    );
}

#[test]
fn filters_records_by_site_selection() {
    let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).expect("dataset");

    let all = SiteSelection::All;
    assert_eq!(dataset.records_for_site(&all).count(), 5);

    let ccafs = SiteSelection::Site("CCAFS LC-40".into());
    assert_eq!(dataset.records_for_site(&ccafs).count(), 3);

    let unknown = SiteSelection::Site("Boca Chica".into());
    assert_eq!(dataset.records_for_site(&unknown).count(), 0);
}

#[test]
fn rejects_empty_dataset() {
    let header_only = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
    let err = Dataset::from_reader(header_only.as_bytes()).expect_err("should fail");
    assert!(err.to_string().contains("no records"));
}

#[test]
fn rejects_non_binary_class() {
    let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC LC-39A,2,100,FT\n";
    let err = Dataset::from_reader(csv.as_bytes()).expect_err("should fail");
    assert!(err.to_string().contains("line 2"), "{err:#}");
}

#[test]
fn rejects_missing_column() {
    let csv = "Launch Site,class,Booster Version Category\nKSC LC-39A,1,FT\n";
    assert!(Dataset::from_reader(csv.as_bytes()).is_err());
}

#[test]
fn rejects_unparsable_payload() {
    let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC LC-39A,1,heavy,FT\n";
    assert!(Dataset::from_reader(csv.as_bytes()).is_err());
}

#[test]
fn rejects_nan_payload() {
    let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC LC-39A,1,NaN,FT\n";
    let err = Dataset::from_reader(csv.as_bytes()).expect_err("should fail");
    assert_eq!(
        err.to_string(),
        "payload mass for site 'KSC LC-39A' is not a finite number"
    );
}

#[test]
fn rejects_infinite_payload_record() {
    let record = LaunchRecord {
        launch_site: "VAFB SLC-4E".to_string(),
        payload_mass_kg: f64::INFINITY,
        class: OutcomeClass::Success,
        booster_version_category: "FT".to_string(),
    };
    let err = Dataset::from_records(vec![record]).expect_err("should fail");
    assert!(err.to_string().contains("not a finite number"), "{err:#}");
}

#[test]
fn summary_reports_counts_and_bounds() {
    let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).expect("dataset");
    let summary = dataset.summary();
    assert_eq!(summary.records, 5);
    assert_eq!(summary.sites.len(), 3);
    assert_eq!(summary.min_payload_kg, 0.0);
    assert_eq!(summary.max_payload_kg, 9600.0);
}
