use tcreport::core::columns::{HeaderKey, compact_header, find_column, resolve_columns};
use tcreport::errors::AppError;

fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn compact_header_lowercases_and_drops_whitespace() {
    assert_eq!(compact_header("Dt. Entrada (Gate)"), "dt.entrada(gate)");
    assert_eq!(compact_header("TEMPO\tTOTAL"), "tempototal");
}

#[test]
fn find_column_matches_substring_ignoring_case_and_spaces() {
    let c = cols(&["Contêiner", "Dt. Entrada", "Tempo Permanência"]);
    assert_eq!(find_column(&c, "dt.entrada"), Some(1));
    assert_eq!(find_column(&c, "tempo"), Some(2));
    assert_eq!(find_column(&c, "TEMPO"), Some(2));
}

#[test]
fn find_column_first_match_wins() {
    let c = cols(&["Placa", "Tempo Gate", "Tempo Pátio"]);
    assert_eq!(find_column(&c, "tempo"), Some(1));
}

#[test]
fn find_column_not_found() {
    let c = cols(&["Placa", "Entrada"]);
    assert_eq!(find_column(&c, "tempo"), None);
    assert_eq!(find_column(&[], "tempo"), None);
}

#[test]
fn resolve_columns_returns_both_indices() {
    let c = cols(&["Contêiner", "Dt.Entrada", "Tempo"]);
    let r = resolve_columns(&c).expect("columns resolved");
    assert_eq!(r.date_entry, 1);
    assert_eq!(r.duration, 2);
}

#[test]
fn resolve_columns_reports_missing_and_available() {
    let c = cols(&["Contêiner", "Dt.Entrada", "Placa"]);
    let err = resolve_columns(&c).unwrap_err();

    match &err {
        AppError::MissingColumns { missing, available } => {
            assert_eq!(missing, &vec![HeaderKey::Duration.display_name().to_string()]);
            assert_eq!(available, &c);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let msg = err.to_string();
    assert!(msg.contains("'Tempo'"));
    assert!(msg.contains("Contêiner"));
    assert!(msg.contains("Placa"));
}

#[test]
fn resolve_columns_lists_both_when_nothing_matches() {
    let err = resolve_columns(&cols(&["A", "B"])).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'Dt.Entrada' and 'Tempo'"));
    assert!(msg.contains("[\"A\", \"B\"]"));
}
