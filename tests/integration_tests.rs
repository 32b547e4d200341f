use std::fs;
use tempfile::TempDir;
use venue_scout::{
    biggest_venue, closest_venue, smallest_venue, Coordinate, GeoError, GeoJsonFile, VenueSource,
};

fn write_dataset(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("bars.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_end_to_end_queries_over_geojson_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dataset(
        &temp_dir,
        r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "geometry": {"coordinates": [0.0, 0.0]},
                    "properties": {"Attributes": {"Name": "A", "SeatsCount": 10}}
                },
                {
                    "geometry": {"coordinates": [1.0, 1.0]},
                    "properties": {"Attributes": {"Name": "B", "SeatsCount": 50}}
                }
            ]
        }"#,
    );

    let source = GeoJsonFile::new(path);
    let venues = source.load().unwrap();
    assert_eq!(venues.len(), 2);

    assert_eq!(biggest_venue(&venues).unwrap().name, "B");
    assert_eq!(smallest_venue(&venues).unwrap().name, "A");

    let closest = closest_venue(&venues, Coordinate::new(0.0, 0.0)).unwrap();
    assert_eq!(closest.name, "A");
}

#[test]
fn test_load_through_trait_object() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dataset(
        &temp_dir,
        r#"{"features": [
            {
                "geometry": {"coordinates": [37.6, 55.7]},
                "properties": {"Attributes": {"Name": "Only", "SeatsCount": 42}}
            }
        ]}"#,
    );

    let source: Box<dyn VenueSource> = Box::new(GeoJsonFile::new(path));
    let venues = source.load().unwrap();
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].seats, 42);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = GeoJsonFile::new(temp_dir.path().join("does_not_exist.json"));
    assert!(matches!(source.load(), Err(GeoError::IoError(_))));
}

#[test]
fn test_document_without_features_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dataset(&temp_dir, r#"{"type": "FeatureCollection"}"#);

    let source = GeoJsonFile::new(path);
    let err = source.load().unwrap_err();
    assert!(matches!(err, GeoError::MissingFieldError { ref field } if field == "features"));
}

#[test]
fn test_empty_collection_loads_but_selection_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dataset(&temp_dir, r#"{"features": []}"#);

    let venues = GeoJsonFile::new(path).load().unwrap();
    assert!(venues.is_empty());
    assert!(matches!(
        biggest_venue(&venues),
        Err(GeoError::EmptyInputError)
    ));
    assert!(matches!(
        closest_venue(&venues, Coordinate::new(10.0, 20.0)),
        Err(GeoError::EmptyInputError)
    ));
}

#[test]
fn test_closest_over_realistic_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dataset(
        &temp_dir,
        r#"{"features": [
            {
                "geometry": {"coordinates": [37.6173, 55.7558]},
                "properties": {"Attributes": {"Name": "Red Square Bar", "SeatsCount": 80}}
            },
            {
                "geometry": {"coordinates": [37.5413, 55.7447]},
                "properties": {"Attributes": {"Name": "Arbat Cellar", "SeatsCount": 25}}
            },
            {
                "geometry": {"coordinates": [30.3158, 59.9343]},
                "properties": {"Attributes": {"Name": "Nevsky Hall", "SeatsCount": 200}}
            }
        ]}"#,
    );

    let venues = GeoJsonFile::new(path).load().unwrap();

    assert_eq!(biggest_venue(&venues).unwrap().name, "Nevsky Hall");
    assert_eq!(smallest_venue(&venues).unwrap().name, "Arbat Cellar");

    // A point in central Moscow is far closer to the Moscow venues than to
    // the Saint Petersburg one.
    let closest = closest_venue(&venues, Coordinate::new(37.62, 55.75)).unwrap();
    assert_eq!(closest.name, "Red Square Bar");
}
