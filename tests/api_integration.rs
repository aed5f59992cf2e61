use chrono::NaiveDate;
use marina::api::{MarinaApi, SearchInput};
use marina::catalog::ListingStatus;
use marina::config::MarinaConfig;
use marina::store::fs::FileCatalog;
use marina::store::CatalogDocument;
use tempfile::TempDir;

const CATALOG: &str = include_str!("common_catalog.json");

fn api_with_catalog() -> (TempDir, MarinaApi<FileCatalog>) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");
    std::fs::write(&path, CATALOG).unwrap();
    let api = MarinaApi::new(FileCatalog::new(path), MarinaConfig::default());
    (temp, api)
}

fn ids(result: &marina::commands::CmdResult) -> Vec<u32> {
    result.listed_products.iter().map(|v| v.product.id).collect()
}

#[test]
fn test_file_catalog_parses_sparse_rows() {
    let document: CatalogDocument = serde_json::from_str(CATALOG).unwrap();
    let poyraz = &document.products[3];
    assert_eq!(poyraz.title, None);
    assert_eq!(poyraz.price, 0.0);
    assert!(poyraz.images.is_empty());
}

#[test]
fn test_shared_link_round_trip() {
    let (_temp, mut api) = api_with_catalog();
    let input = SearchInput {
        location: Some("Marmaris".into()),
        date: Some("2025-07-14".into()),
        people: Some(5),
        ..Default::default()
    };
    let first = api.search(None, input).unwrap();
    let link = first.link.clone().unwrap();
    assert_eq!(
        link,
        "http://localhost:5173/search?location=7&date=2025-07-14&people=5"
    );

    let reopened = api.open(&link).unwrap();
    let criteria = reopened.criteria.clone().unwrap();
    assert_eq!(criteria.selected_location.map(|l| l.id), Some(7));
    assert_eq!(criteria.departure_date, NaiveDate::from_ymd_opt(2025, 7, 14));
    assert_eq!(criteria.number_of_people, 5);
    assert_eq!(ids(&first), ids(&reopened));
}

#[test]
fn test_path_segment_and_query_location() {
    let (_temp, mut api) = api_with_catalog();

    let by_segment = api.open("/search/Bodrum").unwrap();
    assert_eq!(ids(&by_segment), vec![1, 3]);

    // The query parameter wins over the path segment.
    let both = api.open("/search/bodrum?location=7").unwrap();
    assert_eq!(ids(&both), vec![2]);
}

#[test]
fn test_clearing_path_location_link_reproduces_results() {
    let (_temp, mut api) = api_with_catalog();
    let input = SearchInput {
        location: Some("all".into()),
        ..Default::default()
    };
    let cleared = api.search(Some("/search/bodrum?people=4"), input).unwrap();
    let link = cleared.link.clone().unwrap();
    assert_eq!(link, "http://localhost:5173/search?people=4");
    assert!(cleared.criteria.clone().unwrap().selected_location.is_none());

    let reopened = api.open(&link).unwrap();
    assert!(reopened.criteria.clone().unwrap().selected_location.is_none());
    assert_eq!(ids(&reopened), ids(&cleared));
}

#[test]
fn test_switching_location_replaces_path_segment() {
    let (_temp, mut api) = api_with_catalog();
    let input = SearchInput {
        location: Some("marmaris".into()),
        ..Default::default()
    };
    let result = api.search(Some("/search/bodrum"), input).unwrap();
    assert_eq!(
        result.link.as_deref(),
        Some("http://localhost:5173/search?location=7")
    );
    assert_eq!(ids(&result), vec![2]);
}

#[test]
fn test_capacity_and_type_filters_combine() {
    let (_temp, mut api) = api_with_catalog();
    let input = SearchInput {
        boat_type: Some("gulet".into()),
        people: Some(8),
        ..Default::default()
    };
    let result = api.search(None, input).unwrap();
    assert_eq!(ids(&result), vec![1]);
    assert_eq!(result.status, Some(ListingStatus::Ready(1)));
}

#[test]
fn test_people_at_default_is_not_in_link() {
    let (_temp, mut api) = api_with_catalog();
    let result = api
        .search(
            Some("/search?people=6"),
            SearchInput {
                people: Some(1),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(result.link.as_deref(), Some("http://localhost:5173/search"));
    assert_eq!(ids(&result).len(), 4);
}

#[test]
fn test_unrelated_parameters_survive() {
    let (_temp, mut api) = api_with_catalog();
    let result = api
        .search(
            Some("/search?utm_source=newsletter"),
            SearchInput {
                people: Some(3),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(
        result.link.as_deref(),
        Some("http://localhost:5173/search?utm_source=newsletter&people=3")
    );
}
