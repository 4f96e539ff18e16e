use fedifollow_client::pretty_table::print_lists_table;
use fedifollow_client::types::List;

#[test]
fn test_lists_parse_in_server_order() {
    let json = r#"[{"id":"1","title":"Friends"},{"id":"2","title":"Work"}]"#;
    let lists: Vec<List> = serde_json::from_str(json).unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].id, "1");
    assert_eq!(lists[0].title, "Friends");
    assert_eq!(lists[1].id, "2");
    assert_eq!(lists[1].title, "Work");
}

#[test]
fn test_lists_parse_ignores_extra_fields() {
    let json = r#"[{"id":"5","title":"Rustaceans","replies_policy":"followed"}]"#;
    let lists: Vec<List> = serde_json::from_str(json).unwrap();
    assert_eq!(lists[0].id, "5");
    assert_eq!(lists[0].title, "Rustaceans");
}

#[test]
fn test_table_preserves_row_order() {
    let lists = vec![
        List {
            id: "1".to_string(),
            title: "Friends".to_string(),
        },
        List {
            id: "2".to_string(),
            title: "Work".to_string(),
        },
    ];
    let table = print_lists_table(lists).unwrap();
    let friends = table.find("Friends").unwrap();
    let work = table.find("Work").unwrap();
    assert!(friends < work);
}

#[test]
fn test_table_has_headers() {
    let lists = vec![List {
        id: "1".to_string(),
        title: "Friends".to_string(),
    }];
    let table = print_lists_table(lists).unwrap();
    assert!(table.contains("Id"));
    assert!(table.contains("Title"));
}

#[test]
fn test_empty_table_fallback_row() {
    let table = print_lists_table(vec![]).unwrap();
    assert!(table.contains("Sorry..."));
    assert!(table.contains("No lists found for this account..."));
}
