use algos_core::errors::AlgoError;
use algos_core::{DistanceTable, UNREACHED};

#[test]
fn error_round_trip_json() {
    let err = AlgoError::invalid_query("start-out-of-range", "vertex is not part of the graph")
        .with_context("vertex", 9);
    let json = serde_json::to_string_pretty(&err).expect("serialize");
    assert!(json.contains("\"family\": \"InvalidQuery\""));
    let decoded: AlgoError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn distance_table_round_trip_json() {
    let mut table = DistanceTable::new(3, 1);
    table.as_mut_slice()[2] = 4;
    let json = serde_json::to_string(&table).expect("serialize");
    let decoded: DistanceTable = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, table);
    assert_eq!(decoded.raw(0), UNREACHED);
}
