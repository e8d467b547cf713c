use std::fs;
use suggest_core::loader::{get_cache_path, SourceFormat, CACHE_SUFFIX};
use suggest_core::prelude::*;

const TSV: &str = "id\tname\tascii\talt_name\tlat\tlong\tfeat_class\tfeat_code\tcountry\tcc2\tadmin1\tadmin2\tadmin3\tadmin4\tpopulation\televation\tdem\ttz\tmodified_at
6077243\tMontréal\tMontreal\tMontreal\t45.50884\t-73.58781\tP\tPPLA2\tCA\t\t10\t06\t\t\t3268513\t\t19\tAmerica/Montreal\t2012-11-19
4671654\tAustin\tAustin\t\t30.26715\t-97.74306\tP\tPPLA\tUS\t\tTX\t453\t\t\t790390\t149\t165\tAmerica/Chicago\t2011-05-14

6058560\tLondon\tLondon\t\t42.98339\t-81.23304\tP\tPPL\tCA\t\t08\t\t\t\t346765\t\t252\tAmerica/Toronto\t2012-08-19
";

#[test]
fn bundled_dataset_loads_once() {
    let a = Catalog::load().unwrap();
    let b = Catalog::load().unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    assert_eq!(a.len(), 20);
    assert_eq!(a.min_population(), 5184);
}

#[test]
fn format_detection() {
    use std::path::Path;
    assert_eq!(SourceFormat::detect(Path::new("cities.json")), SourceFormat::Json);
    assert_eq!(SourceFormat::detect(Path::new("cities.JSON.gz")), SourceFormat::Json);
    assert_eq!(SourceFormat::detect(Path::new("a/cities_canada-usa.tsv")), SourceFormat::Tsv);
    assert_eq!(SourceFormat::detect(Path::new("cities.tsv.cache.bin")), SourceFormat::Binary);
}

#[test]
fn tsv_catalog_builds_display_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cities.tsv");
    fs::write(&path, TSV).unwrap();

    let catalog = Catalog::load_from_path(&path).unwrap();
    let names: Vec<&str> = catalog.cities().iter().map(City::name).collect();
    assert_eq!(
        names,
        ["Montréal, QC, Canada", "Austin, TX, USA", "London, ON, Canada"]
    );
    assert_eq!(catalog.min_population(), 346765);
    assert_eq!(catalog.cities()[0].latitude, 45.50884);
}

#[test]
fn tsv_with_zero_population_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.tsv");
    let bad = TSV.replace("\t790390\t", "\t0\t");
    fs::write(&path, bad).unwrap();

    let err = Catalog::load_from_path(&path).unwrap_err();
    assert!(matches!(err, SuggestError::DataIntegrity { .. }), "{err}");
}

#[test]
fn tsv_without_required_columns_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.tsv");
    fs::write(&path, "id\tname\n1\tX\n").unwrap();

    let err = Catalog::load_from_path(&path).unwrap_err();
    assert!(matches!(err, SuggestError::InvalidData(_)), "{err}");
}

#[test]
fn missing_file_is_not_found() {
    let err = Catalog::load_from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, SuggestError::NotFound(_)), "{err}");
}

#[test]
fn binary_cache_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.bin");
    let original = Catalog::load().unwrap();

    original.save_as(&path).unwrap();
    let restored = Catalog::load_from_path(&path).unwrap();

    assert_eq!(restored.cities(), original.cities());
    assert_eq!(restored.min_population(), original.min_population());

    let bytes = fs::read(&path).unwrap();
    assert_eq!(Catalog::from_bytes(&bytes).unwrap().len(), original.len());
}

#[test]
fn load_cached_writes_and_reuses_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("cities.tsv");
    fs::write(&source, TSV).unwrap();
    let cache = get_cache_path(&source, CACHE_SUFFIX).unwrap();
    assert_eq!(cache.file_name().unwrap(), "cities.tsv.cache.bin");

    let first = Catalog::load_cached(&source).unwrap();
    assert!(cache.exists());

    // Make the source unreadable as TSV; a fresh cache must still serve.
    fs::remove_file(&source).unwrap();
    let second = Catalog::load_cached(&source).unwrap();
    assert_eq!(first.cities(), second.cities());
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_json_source_loads() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cities.json.gz");
    let json = fs::read(Catalog::default_data_dir().join(Catalog::default_dataset_filename())).unwrap();

    let mut enc = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(&json).unwrap();
    enc.finish().unwrap();

    assert_eq!(Catalog::load_from_path(&path).unwrap().len(), 20);
}
