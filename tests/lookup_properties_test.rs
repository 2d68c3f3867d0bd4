use london_price_lookup::adapters::LocalSource;
use london_price_lookup::core::format::{format_currency, EstimateText, NOT_FOUND_MESSAGE};
use london_price_lookup::core::Variant;
use london_price_lookup::domain::model::{Estimate, Projection};
use london_price_lookup::{EstimateInput, Estimator, EstimatorSettings, TableLoader};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn basic_input(neighborhood: &str, area: i64, distance: i64, rooms: i64) -> EstimateInput {
    EstimateInput {
        neighborhood: Some(neighborhood.to_string()),
        area: Some(area.to_string()),
        distance: Some(distance.to_string()),
        rooms: Some(rooms.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_camden_reference_quote() {
    let loaded = TableLoader::new(LocalSource::new(fixture("basic.csv")), Variant::Basic)
        .load()
        .await
        .unwrap();
    let estimator = Estimator::new(&loaded.table, EstimatorSettings::new(Variant::Basic));

    let estimate = estimator.estimate(&basic_input("Camden", 1455, 949, 1));
    let Estimate::Quote(quote) = &estimate else {
        panic!("expected a quote, got {:?}", estimate);
    };
    assert_eq!(quote.current, 1_455_000.0);
    assert_eq!(quote.future, 2_910_000.0);

    let text = EstimateText::from_estimate(&estimate);
    assert_eq!(text.current_price.as_deref(), Some("£1,455,000.00"));
    assert_eq!(
        text.headline,
        "The estimated price for Camden is: £1,455,000.00"
    );
    assert_eq!(text.future_price.as_deref(), Some("£2,910,000.00"));
}

#[tokio::test]
async fn test_every_stored_combination_returns_its_value() {
    let loaded = TableLoader::new(LocalSource::new(fixture("basic.csv")), Variant::Basic)
        .load()
        .await
        .unwrap();
    let estimator = Estimator::new(&loaded.table, EstimatorSettings::new(Variant::Basic));

    for record in loaded.table.records() {
        let input = basic_input(
            &record.neighborhood,
            record.area.unwrap(),
            record.distance,
            record.rooms,
        );
        match estimator.estimate(&input) {
            Estimate::Quote(quote) => {
                assert_eq!(quote.current, record.value);
                assert_eq!(
                    EstimateText::from_estimate(&Estimate::Quote(quote.clone())).current_price,
                    Some(format_currency(record.value))
                );
            }
            other => panic!("{:?} not found: {:?}", record, other),
        }
    }
}

#[tokio::test]
async fn test_absent_combinations_are_not_found() {
    let loaded = TableLoader::new(LocalSource::new(fixture("basic.csv")), Variant::Basic)
        .load()
        .await
        .unwrap();
    let estimator = Estimator::new(&loaded.table, EstimatorSettings::new(Variant::Basic));

    let absent = [
        basic_input("Camden", 1455, 949, 3),
        basic_input("Camden", 1456, 949, 1),
        basic_input("Camden", 1455, 948, 1),
        basic_input("Sutton", 1455, 949, 1),
    ];
    for input in absent {
        let estimate = estimator.estimate(&input);
        assert_eq!(estimate, Estimate::NotFound);
        assert_eq!(EstimateText::from_estimate(&estimate).headline, NOT_FOUND_MESSAGE);
    }
}

#[tokio::test]
async fn test_per_deployment_multiplier() {
    let loaded = TableLoader::new(LocalSource::new(fixture("basic.csv")), Variant::Basic)
        .load()
        .await
        .unwrap();
    let settings = EstimatorSettings {
        projection: Projection::Multiplier { factor: 1.9 },
        ..EstimatorSettings::new(Variant::Basic)
    };
    let estimator = Estimator::new(&loaded.table, settings);

    let Estimate::Quote(quote) = estimator.estimate(&basic_input("Hackney", 820, 300, 1)) else {
        panic!("expected a quote");
    };
    assert_eq!(quote.current, 640_000.0);
    assert!((quote.future - 640_000.0 * 1.9).abs() < 1e-6);
}

#[tokio::test]
async fn test_zoned_table_uses_record_growth() {
    let loaded = TableLoader::new(LocalSource::new(fixture("zoned.csv")), Variant::Zoned)
        .load()
        .await
        .unwrap();
    assert_eq!(loaded.table.len(), 4);
    let estimator = Estimator::new(&loaded.table, EstimatorSettings::new(Variant::Zoned));

    let input = EstimateInput {
        neighborhood: Some("Islington".to_string()),
        distance: Some("500".to_string()),
        rooms: Some("2".to_string()),
        zone: Some("2".to_string()),
        property_type: Some("Terraced".to_string()),
        ..Default::default()
    };
    let estimate = estimator.estimate(&input);
    let Estimate::Quote(quote) = &estimate else {
        panic!("expected a quote, got {:?}", estimate);
    };
    assert_eq!(quote.current, 820_000.0);
    assert!((quote.future - 943_000.0).abs() < 1e-6);

    let text = EstimateText::from_estimate(&estimate);
    assert_eq!(text.growth.as_deref(), Some("15.00%"));
}

#[test]
fn test_loader_blocking_on_missing_file() {
    let loader = TableLoader::new(LocalSource::new(fixture("missing.csv")), Variant::Basic);
    let result = tokio_test::block_on(loader.load());
    assert!(result.is_err());
}
