use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{
    SHEET, legacy_headers, no_config, read_sheet, sample_rows, sheet_names, tc, temp_path,
    write_input,
};

#[test]
fn test_process_writes_report() {
    let input = temp_path("cli_process_in", "xlsx");
    let output = temp_path("cli_process_out", "xlsx");
    write_input(&input, &legacy_headers(), &sample_rows());

    tc()
        .args(["--config", &no_config("cli_process")])
        .args(["process", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--force")
        .assert()
        .success()
        .stdout(contains("Dt.Entrada (Gate)").and(contains("Tempo Permanência")))
        .stdout(contains("2 day(s) summarized"))
        .stdout(contains("Custom thresholds").not());

    assert_eq!(sheet_names(&output).len(), 5);
    let pivot = read_sheet(&output, "Planilha2");
    assert_eq!(pivot[1], vec!["5", "1", "1", "0"]);
}

#[test]
fn test_process_missing_columns_fails_without_output() {
    let input = temp_path("cli_missing_in", "xlsx");
    let output = temp_path("cli_missing_out", "xlsx");
    write_input(
        &input,
        &["Contêiner", "Entrada", "Placa"],
        &[vec!["A", "2024-03-05 08:10:00", "X"]],
    );

    tc()
        .args(["--config", &no_config("cli_missing")])
        .args(["process", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("Could not find the expected columns"))
        .stderr(contains("Contêiner").and(contains("Placa")));

    assert!(!output.exists());
}

#[test]
fn test_process_warns_about_fallbacks() {
    let input = temp_path("cli_fallback_in", "xlsx");
    let output = temp_path("cli_fallback_out", "xlsx");
    write_input(
        &input,
        &legacy_headers(),
        &[
            vec!["A", "not a date", "P1", "0:30"],
            vec!["B", "2024-03-05 09:00:00", "P2", "garbage"],
            vec!["C", "2024-04-05 09:00:00", "P3", "1:30"],
        ],
    );

    tc()
        .args(["--config", &no_config("cli_fallback")])
        .args(["process", "-f", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("1 record(s) with an unreadable entry date"))
        .stdout(contains("1 record(s) with an unreadable duration"))
        .stdout(contains("2024-03, 2024-04"));

    let pivot = read_sheet(&output, "Planilha2");
    assert_eq!(pivot, vec![
        vec!["DAY", "ATÉ 45 MIN", "46 MIN até 1H", "> 1h"],
        vec!["5", "1", "0", "1"],
    ]);
}

#[test]
fn test_process_rejects_bad_thresholds() {
    let input = temp_path("cli_thresholds_in", "xlsx");
    let output = temp_path("cli_thresholds_out", "xlsx");
    write_input(&input, &legacy_headers(), &sample_rows());

    tc()
        .args(["--config", &no_config("cli_thresholds")])
        .args(["process", "--first-threshold", "90", "--second-threshold", "60", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("Invalid thresholds"));

    assert!(!output.exists());
}

#[test]
fn test_process_warns_about_custom_thresholds() {
    let input = temp_path("cli_custom_thresholds_in", "xlsx");
    let output = temp_path("cli_custom_thresholds_out", "xlsx");
    write_input(&input, &legacy_headers(), &sample_rows());

    tc()
        .args(["--config", &no_config("cli_custom_thresholds")])
        .args(["process", "--first-threshold", "30", "--second-threshold", "90", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--force")
        .assert()
        .success()
        .stdout(contains("Custom thresholds 30/90 min"))
        .stdout(contains("'ATÉ 45 MIN'"));

    assert!(output.exists());
}

#[test]
fn test_process_warns_about_header_only_sheet() {
    let input = temp_path("cli_header_only_in", "xlsx");
    let output = temp_path("cli_header_only_out", "xlsx");
    write_input(&input, &legacy_headers(), &[]);

    tc()
        .args(["--config", &no_config("cli_header_only")])
        .args(["process", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--force")
        .assert()
        .success()
        .stdout(contains("No data rows found below the header row"))
        .stdout(contains("0 day(s) summarized"));
}

#[test]
fn test_process_refuses_to_overwrite_its_input() {
    let input = temp_path("cli_same_file_in", "xlsx");
    write_input(&input, &legacy_headers(), &sample_rows());

    tc()
        .args(["--config", &no_config("cli_same_file")])
        .args(["process", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&input)
        .arg("--force")
        .assert()
        .failure()
        .stderr(contains("is the input file"));

    assert_eq!(sheet_names(&input), vec![SHEET]);
}

#[test]
fn test_summary_json() {
    let input = temp_path("cli_summary_in", "xlsx");
    write_input(&input, &legacy_headers(), &sample_rows());

    tc()
        .args(["--config", &no_config("cli_summary")])
        .args(["summary", "--json", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains(r#""DAY": 5"#))
        .stdout(contains(r#""ATÉ 45 MIN": 1"#))
        .stdout(contains(r#""> 1h": 1"#));
}

#[test]
fn test_summary_table() {
    let input = temp_path("cli_summary_table_in", "xlsx");
    write_input(&input, &legacy_headers(), &sample_rows());

    tc()
        .args(["--config", &no_config("cli_summary_table")])
        .args(["summary", "--sheet", SHEET, "--header-row", "14", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("DAY").and(contains("46 MIN até 1H")))
        .stdout(contains("TOTAL"))
        .stdout(contains("12"));
}

#[test]
fn test_summary_unknown_sheet() {
    let input = temp_path("cli_summary_sheet_in", "xlsx");
    write_input(&input, &legacy_headers(), &sample_rows());

    tc()
        .args(["--config", &no_config("cli_summary_sheet")])
        .args(["summary", "--sheet", "Planilha9", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("Sheet 'Planilha9' not found"))
        .stderr(contains(SHEET));
}

#[test]
fn test_convert_copies_all_sheets() {
    let input = temp_path("cli_convert_in", "xlsx");
    let output = temp_path("cli_convert_out", "xlsx");

    let mut wb = rust_xlsxwriter::Workbook::new();
    let first = wb.add_worksheet();
    first.set_name("Dados").expect("name");
    first.write_string(0, 0, "Tempo").expect("cell");
    first.write_number(1, 0, 42.0).expect("cell");
    let second = wb.add_worksheet();
    second.set_name("Outra").expect("name");
    second.write_string(3, 1, "x").expect("cell");
    wb.save(&input).expect("save");

    tc()
        .args(["--config", &no_config("cli_convert"), "convert"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("2 sheet(s) copied"));

    assert_eq!(sheet_names(&output), vec!["Dados", "Outra"]);
    assert_eq!(read_sheet(&output, "Dados"), vec![vec!["Tempo"], vec!["42"]]);
    assert_eq!(read_sheet(&output, "Outra"), vec![vec!["x"]]);
}

#[test]
fn test_convert_refuses_same_input_and_output() {
    let input = temp_path("cli_convert_same", "xlsx");
    write_input(&input, &legacy_headers(), &sample_rows());

    tc()
        .args(["--config", &no_config("cli_convert_same"), "convert", "--force"])
        .arg(&input)
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("is the input file"));

    assert_eq!(sheet_names(&input), vec![SHEET]);
}

#[test]
fn test_config_print_uses_file_values() {
    let conf = temp_path("cli_config_print", "conf");
    std::fs::write(&conf, "sheet_name: Planilha1\nheader_row: 3\n").expect("write conf");

    tc()
        .arg("--config")
        .arg(&conf)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("sheet_name: Planilha1"))
        .stdout(contains("header_row: 3"))
        .stdout(contains("up_to_minutes: 45"));
}

#[test]
fn test_config_check_reports_missing_and_unknown() {
    let conf = temp_path("cli_config_check", "conf");
    std::fs::write(&conf, "sheet_name: Planilha1\ncolour: blue\n").expect("write conf");

    tc()
        .arg("--config")
        .arg(&conf)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("input_path").and(contains("thresholds")))
        .stdout(contains("colour"));
}

#[test]
fn test_init_writes_default_config() {
    let conf = temp_path("cli_init", "conf");

    tc().arg("--config").arg(&conf).arg("init").assert().success();

    let content = std::fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("sheet_name: Recuperada_Planilha1"));
    assert!(content.contains("header_row: 14"));
}
