use monkeycard_core::{parse_catalog, CatalogError, ThemeCatalog};

const BODY: &str = r##"[
    {"name":"serika_dark","bgColor":"#323437","subAltColor":"#2c2e31","subColor":"#646669","mainColor":"#e2b714","textColor":"#d1d0c5"},
    {"name":"nord","bgColor":"#242933","subAltColor":"#1d2128","subColor":"#929aaa","mainColor":"#d8dee9","textColor":"#d8dee9"},
    {"name":"nord","bgColor":"#000000","subAltColor":"#000000","subColor":"#000000","mainColor":"#000000","textColor":"#000000"},
    {"name":"  ","bgColor":"#fff","subAltColor":"#fff","subColor":"#fff","mainColor":"#fff","textColor":"#fff"}
]"##;

#[test]
fn parse_keeps_order_and_first_duplicate() {
    let records = parse_catalog(BODY).expect("valid body");
    let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, ["serika_dark", "nord"]);
    assert_eq!(records[1].bg_color, "#242933");
    assert_eq!(records[0].main_color, "#e2b714");
}

#[test]
fn parse_rejects_malformed_payload() {
    assert!(matches!(parse_catalog("{\"themes\": 3}"), Err(CatalogError::Decode(_))));
    assert!(matches!(parse_catalog(""), Err(CatalogError::Decode(_))));
    assert_eq!(parse_catalog("[]"), Ok(Vec::new()));
}

#[test]
fn load_is_one_shot() {
    let mut catalog = ThemeCatalog::new();
    assert!(!catalog.is_ready());
    assert!(catalog.begin_load());
    assert!(catalog.is_loading());
    assert!(!catalog.begin_load());
    catalog.finish_load(parse_catalog(BODY));
    assert!(catalog.is_ready());
    assert!(!catalog.begin_load());
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains("nord"));
    assert!(catalog.theme_by_name("missing").is_none());
}

#[test]
fn failed_load_degrades_to_empty_catalog() {
    let mut catalog = ThemeCatalog::new();
    assert!(catalog.begin_load());
    catalog.finish_load(Err(CatalogError::Status(500)));
    assert!(catalog.is_ready());
    assert!(catalog.is_empty());
    assert_eq!(catalog.error(), Some(&CatalogError::Status(500)));
    assert_eq!(
        CatalogError::Status(500).to_string(),
        "theme catalog returned status 500"
    );
}
