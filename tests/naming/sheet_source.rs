use specname::naming::{ProductGroup, Vocabulary, compile};
use specname::sheet::{RESULT_HEADER, read_sheet, write_name_csv};
use std::fs;

#[test]
fn tsv_sheet_is_read_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.tsv");
    fs::write(
        &path,
        "Sales Model Name\tR760-8SFF\nStorage\t2x 960GB SSD SATA + 2x 2TB HDD\nPower Supply\t2x 800W hot-plug\n",
    )
    .unwrap();

    let rows = read_sheet(&path).expect("tsv sheet should read");
    assert_eq!(rows.len(), 3);

    let result = compile(&rows, ProductGroup::Server, &Vocabulary::default()).unwrap();
    let joined = result.tokens.join("/");
    assert!(joined.starts_with("R760/960G*2-SSD/"), "{joined}");
    assert!(joined.contains("/800W*2/"), "{joined}");
}

#[test]
fn colon_separated_sheet_compiles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.csv");
    fs::write(&path, "Sales Model Name: K20-BLK\nColor: Black\n").unwrap();

    let rows = read_sheet(&path).unwrap();
    let result = compile(&rows, ProductGroup::Accy, &Vocabulary::default()).unwrap();
    assert_eq!(result.name, "K20/TPM/NOS/Warranty_input/Đen/(K20-BLK)");
}

#[test]
fn result_csv_holds_single_named_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.csv");
    write_name_csv(&path, "A/B, C/(A-1)").unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(reader.headers().unwrap().iter().collect::<Vec<_>>(), [RESULT_HEADER]);
    let names: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(names, ["A/B, C/(A-1)"]);
}
