use monkeycard_core::grid::{display_label, render};
use monkeycard_core::{ThemeCatalog, ThemeGrid, ThemeRecord};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn record(name: &str) -> ThemeRecord {
    ThemeRecord {
        name: name.to_string(),
        bg_color: "#323437".to_string(),
        sub_alt_color: "#2c2e31".to_string(),
        sub_color: "#646669".to_string(),
        main_color: "#e2b714".to_string(),
        text_color: "#d1d0c5".to_string(),
    }
}

fn catalog() -> Vec<ThemeRecord> {
    ["serika_dark", "serika", "nord", "dark_magic_girl", "Olivia"]
        .into_iter()
        .map(record)
        .collect()
}

fn active_count(entries: &[monkeycard_core::ThemeEntry]) -> usize {
    entries.iter().filter(|entry| entry.is_active).count()
}

#[test]
fn labels_replace_underscores_without_touching_ids() {
    let entries = render(&catalog(), "", "");
    let magic = entries
        .iter()
        .find(|entry| entry.id == "dark_magic_girl")
        .expect("entry present");
    assert_eq!(magic.label, "dark magic girl");
    assert_eq!(display_label("a_b_c"), "a b c");
}

#[test]
fn empty_filter_keeps_catalog_order() {
    let ids: Vec<String> = render(&catalog(), "", "").into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["serika_dark", "serika", "nord", "dark_magic_girl", "Olivia"]);
    let spaced: Vec<String> = render(&catalog(), " ", "").into_iter().map(|e| e.id).collect();
    assert_eq!(spaced, ["serika_dark", "dark_magic_girl"]);
}

#[test]
fn surrounding_whitespace_is_part_of_the_filter() {
    let records = [record("serika_dark"), record("darkness")];
    let ids: Vec<String> = render(&records, " dark", "").into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["serika_dark"]);
    let ids: Vec<String> = render(&records, "dark", "").into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["serika_dark", "darkness"]);
}

#[test]
fn filter_is_case_insensitive_substring_of_display_name() {
    let ids: Vec<String> = render(&catalog(), "SERIKA", "").into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["serika_dark", "serika"]);
    let spaced: Vec<String> = render(&catalog(), "magic g", "").into_iter().map(|e| e.id).collect();
    assert_eq!(spaced, ["dark_magic_girl"]);
    let olivia: Vec<String> = render(&catalog(), "oli", "").into_iter().map(|e| e.id).collect();
    assert_eq!(olivia, ["Olivia"]);
    assert!(render(&catalog(), "zzz", "").is_empty());
}

#[test]
fn at_most_one_entry_is_active() {
    assert_eq!(active_count(&render(&catalog(), "", "nord")), 1);
    assert_eq!(active_count(&render(&catalog(), "", "unknown")), 0);
    assert_eq!(active_count(&render(&[], "", "nord")), 0);
    // The active entry may be filtered out of view.
    assert_eq!(active_count(&render(&catalog(), "serika", "nord")), 0);
}

#[test]
fn render_is_idempotent() {
    let first = render(&catalog(), "ser", "serika");
    let second = render(&catalog(), "ser", "serika");
    assert_eq!(first, second);
}

#[test]
fn random_pick_clears_filter_and_targets_a_catalog_entry() {
    let catalog = ThemeCatalog::from_records(catalog());
    let mut grid = ThemeGrid::new();
    for seed in 0..32u64 {
        grid.set_filter("nord");
        let mut rng = SmallRng::seed_from_u64(seed);
        let id = grid.pick_random(&catalog, &mut rng).expect("non-empty catalog");
        assert_eq!(grid.filter(), "");
        assert!(catalog.contains(&id));
        let entries = grid.entries(&catalog, &id);
        assert_eq!(entries.len(), catalog.len());
        assert_eq!(active_count(&entries), 1);
        let request = grid.scroll_request().expect("scroll queued");
        assert_eq!(request.id, id);
    }
}

#[test]
fn random_pick_reaches_every_entry() {
    let catalog = ThemeCatalog::from_records(catalog());
    let mut grid = ThemeGrid::new();
    let mut rng = SmallRng::seed_from_u64(7);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        if let Some(id) = grid.pick_random(&catalog, &mut rng) {
            seen.insert(id);
        }
    }
    assert_eq!(seen.len(), catalog.len());
}

#[test]
fn random_pick_on_empty_catalog_is_noop() {
    let catalog = ThemeCatalog::from_records(Vec::new());
    let mut grid = ThemeGrid::new();
    grid.set_filter("abc");
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(grid.pick_random(&catalog, &mut rng), None);
    assert_eq!(grid.filter(), "abc");
    assert!(grid.scroll_request().is_none());
}
