use std::collections::HashSet;

use tigers_seminovos::models::vehicle::{Armor, Body, ARMORED_SUFFIX};
use tigers_seminovos::services::catalog_service::{Catalog, CatalogBrowser, DEFAULT_PAGE_SIZE};
use tigers_seminovos::services::vehicle_generator::{generate_vehicles, DEFAULT_INVENTORY};
use tigers_seminovos::utils::validation::is_http_url;

#[test]
fn test_generated_records_hold_invariants_for_many_sizes() {
    for count in [0, 1, 7, 12, 120, 300] {
        let vehicles = generate_vehicles(count);
        assert_eq!(vehicles.len(), count + 2);

        let ids: HashSet<u32> = vehicles.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), vehicles.len(), "ids repetidos con count={}", count);

        for v in &vehicles {
            assert_eq!(v.images[0], v.image);
            assert!(v.images.iter().all(|url| is_http_url(url)));
            assert!((2014..=2025).contains(&v.year));
            assert!(v.km < 150_000);
            assert_eq!(v.name.contains(ARMORED_SUFFIX), v.armor == Armor::NivelIIIA);
        }

        let motos: Vec<&str> = vehicles
            .iter()
            .filter(|v| v.body == Body::Moto)
            .map(|v| v.model.as_str())
            .collect();
        assert_eq!(motos, vec!["CG 160", "Fazer 250"]);
    }
}

#[test]
fn test_search_for_bmw_only_returns_matching_records() {
    let catalog = Catalog::new(DEFAULT_INVENTORY.clone());
    let mut browser = CatalogBrowser::new(&catalog, DEFAULT_PAGE_SIZE);
    browser.update_filters(|f| f.set_search("BmW"));

    let results = browser.filtered();
    assert!(!results.is_empty());
    assert!(results.iter().all(|v| v.search_haystack().contains("bmw")));
}

#[test]
fn test_browsing_session() {
    let catalog = Catalog::new(DEFAULT_INVENTORY.clone());
    let mut browser = CatalogBrowser::new(&catalog, DEFAULT_PAGE_SIZE);

    assert_eq!(browser.filtered().len(), catalog.all().len());
    assert_eq!(browser.page_items().len(), 12);
    assert_eq!(browser.total_pages(), 11);

    browser.go_to_page(50);
    assert_eq!(browser.page(), 11);
    assert_eq!(browser.page_items().len(), 2);
    assert!(!browser.has_next());

    // cambiar un filtro vuelve a la primera página
    browser.update_filters(|f| f.select_make(Some("Toyota".to_string())));
    assert_eq!(browser.page(), 1);
    assert!(browser.filtered().iter().all(|v| v.make == "Toyota"));
    assert_eq!(browser.options().models, vec!["Hilux"]);

    browser.update_filters(|f| {
        f.set_year_max(Some(2016));
        f.set_year_min(Some(2020));
    });
    assert_eq!(browser.filters().year_range(), (Some(2020), Some(2020)));

    browser.update_filters(|f| f.select_make(None));
    assert_eq!(browser.filters().model(), None);
}
