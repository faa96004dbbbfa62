use super::*;

#[test]
fn technology_rotation_wraps() {
    let len = technologies().len();
    assert_eq!(next_technology_index(0, len), 1);
    assert_eq!(next_technology_index(len - 1, len), 0);
}

#[test]
fn technology_rotation_handles_empty_list() {
    assert_eq!(next_technology_index(3, 0), 0);
}

#[test]
fn social_links_cover_expected_networks() {
    let links = social_links();
    assert_eq!(links.len(), 4);
    assert!(links.iter().all(|l| l.url.starts_with("https://")));
}
