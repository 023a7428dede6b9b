use super::*;

#[test]
fn test_parse_simple_table() {
    let data = parse_csv("Name,Addr\nA,Via Roma 1\nB,Corso Milano 2\n").unwrap();

    assert_eq!(data.headers(), ["Name", "Addr"]);
    assert_eq!(data.len(), 2);
    assert_eq!(data.records()[0].field(1), Some("Via Roma 1"));
    assert_eq!(data.records()[1].field(0), Some("B"));
}

#[test]
fn test_parse_quoted_fields() {
    let raw = "Name,Addr\n\"Rossi, Mario\",\"Via \"\"Garibaldi\"\" 3\"\n";
    let data = parse_csv(raw).unwrap();

    assert_eq!(data.records()[0].field(0), Some("Rossi, Mario"));
    assert_eq!(data.records()[0].field(1), Some("Via \"Garibaldi\" 3"));
}

#[test]
fn test_parse_embedded_newline_inside_quotes() {
    let raw = "Name,Addr\nA,\"Via Roma 1\n35100 Padova\"\n";
    let data = parse_csv(raw).unwrap();

    assert_eq!(data.records()[0].field(1), Some("Via Roma 1\n35100 Padova"));
}

#[test]
fn test_parse_crlf_line_endings() {
    let data = parse_csv("Name,Addr\r\nA,Via Roma 1\r\n").unwrap();

    assert_eq!(data.headers(), ["Name", "Addr"]);
    assert_eq!(data.len(), 1);
}

#[test]
fn test_parse_drops_all_blank_rows() {
    let data = parse_csv("Name,Addr\n , \nA,Via Roma 1\n,\n").unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data.records()[0].field(0), Some("A"));
}

#[test]
fn test_parse_empty_input_is_rejected() {
    assert!(matches!(parse_csv(""), Err(DatasetError::Empty)));
    assert!(matches!(parse_csv(" , \n,\n"), Err(DatasetError::Empty)));
}

#[test]
fn test_parse_headers_without_rows_is_rejected() {
    assert!(matches!(parse_csv("Name,Addr\n"), Err(DatasetError::NoRows)));
}

#[test]
fn test_short_rows_are_padded_to_header_width() {
    let data = parse_csv("Name,Addr,Note\nA,Via Roma 1\n").unwrap();

    assert_eq!(data.records()[0].len(), 3);
    assert_eq!(data.records()[0].field(2), Some(""));
}

#[test]
fn test_wide_rows_are_rejected() {
    let result = parse_csv("Name\nA,Via Roma 1\n");
    assert!(matches!(
        result,
        Err(DatasetError::RowTooWide {
            row: 0,
            expected: 1,
            actual: 2
        })
    ));
}

#[test]
fn test_column_index_by_name_and_index() {
    let data = parse_csv("Name,Addr\nA,Via Roma 1\n").unwrap();

    assert_eq!(data.column_index("Addr").unwrap(), 1);
    assert_eq!(data.column_index("addr").unwrap(), 1);
    assert_eq!(data.column_index("0").unwrap(), 0);
    assert!(matches!(
        data.column_index("Missing"),
        Err(DatasetError::ColumnNotFound { .. })
    ));
    assert!(data.column_index("7").is_err());
}

#[test]
fn test_write_quotes_special_fields() {
    let headers = vec!["Name".to_string(), "Addr".to_string()];
    let rows = vec![vec!["Rossi, Mario".to_string(), "Via \"G\" 3".to_string()]];

    let out = write_csv(&headers, &rows).unwrap();

    assert!(out.contains("\"Rossi, Mario\""));
    assert!(out.contains("\"Via \"\"G\"\" 3\""));
}

#[test]
fn test_csv_round_trip_preserves_values() {
    let headers = vec!["Name".to_string(), "Addr".to_string()];
    let rows = vec![
        vec!["Rossi, Mario".to_string(), "Via \"G\" 3".to_string()],
        vec!["B".to_string(), "line1\nline2".to_string()],
    ];

    let out = write_csv(&headers, &rows).unwrap();
    let parsed = parse_csv(&out).unwrap();

    assert_eq!(parsed.headers(), headers.as_slice());
    assert_eq!(parsed.len(), rows.len());
    for (record, row) in parsed.records().iter().zip(&rows) {
        assert_eq!(record.fields(), row.as_slice());
    }
}

#[test]
fn test_dataset_role_labels() {
    assert_eq!(DatasetRole::Requester.to_string(), "requester");
    assert_eq!(DatasetRole::Provider.to_string(), "provider");
}
