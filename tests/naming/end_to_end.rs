use specname::config::NamingConfig;
use specname::naming::{Category, ProductGroup, Vocabulary, compile};
use specname::sheet::parse_sheet;

const NOTEBOOK_SHEET: &str = "\
Sales Model Name,X515-ABC123
Processor,Intel® Core™ i5-1240P
Memory,\"16GB DDR5 5600MHz (2x8GB DIMM)\"
SSD,512GB SSD
Color,Starlight Black
Operating System,
";

#[test]
fn notebook_sheet_compiles_to_expected_name() {
    let rows = parse_sheet(NOTEBOOK_SHEET.as_bytes(), b',').expect("sheet should parse");
    let result = compile(&rows, ProductGroup::Nb, &Vocabulary::default())
        .expect("sales model name present");

    assert_eq!(
        result.name,
        "X515/Core i5-1240P/16GD5*2/512G-SSD/TPM/N/A_Battery/NOS/Warranty_input/Đen/(X515-ABC123)"
    );
    let categories: Vec<Category> = result.errors.iter().map(|e| e.category).collect();
    assert_eq!(
        categories,
        [Category::Display, Category::Battery, Category::Warranty]
    );
}

#[test]
fn english_labels_and_custom_separator() {
    let naming = NamingConfig {
        separator: " | ".into(),
        label_locale: "en".into(),
        ..NamingConfig::default()
    };
    let rows = parse_sheet(NOTEBOOK_SHEET.as_bytes(), b',').unwrap();
    let result = compile(&rows, ProductGroup::Nb, &Vocabulary::from_config(&naming)).unwrap();

    assert!(result.name.starts_with("X515 | Core i5-1240P | "));
    assert!(result.tokens.iter().any(|t| t == "Black"), "{:?}", result.tokens);
    assert_eq!(result.name, result.tokens.join(" | "));
}

#[test]
fn key_spelling_does_not_change_the_name() {
    let tidy = "Sales Model Name,M1-A\nKeyboard & Mouse,Wireless Keyboard & Wireless Mouse\n";
    let messy = "  sales   MODEL name ,M1-A\nKEYBOARD AND MOUSE,Wireless Keyboard & Wireless Mouse\n";

    let vocab = Vocabulary::default();
    let a = compile(&parse_sheet(tidy.as_bytes(), b',').unwrap(), ProductGroup::Pc, &vocab).unwrap();
    let b = compile(&parse_sheet(messy.as_bytes(), b',').unwrap(), ProductGroup::Pc, &vocab).unwrap();
    assert_eq!(a, b);
    assert!(a.tokens.iter().any(|t| t == "WL_KB&WL_M"));
}

#[test]
fn every_group_ends_with_sales_code() {
    let rows = parse_sheet("Sales Model Name,Q9-77\n".as_bytes(), b',').unwrap();
    for group in [
        ProductGroup::Nb,
        ProductGroup::Pc,
        ProductGroup::Aio,
        ProductGroup::Server,
        ProductGroup::Accy,
    ] {
        let result = compile(&rows, group, &Vocabulary::default()).unwrap();
        assert!(result.name.starts_with("Q9/"), "{group}: {}", result.name);
        assert!(result.name.ends_with("/(Q9-77)"), "{group}: {}", result.name);
        assert!(!result.errors.is_empty());
    }
}
