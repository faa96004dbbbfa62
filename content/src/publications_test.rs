use super::*;

#[test]
fn journal_filter_sorted_by_year_descends() {
    let result = filter_and_sort(&publications(), PubFilter::Journal, PubSort::Year);
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|p| p.kind == PubKind::Journal));
    assert_eq!(
        result.iter().map(|p| p.year).collect::<Vec<_>>(),
        vec![2023, 2020, 2013]
    );
}

#[test]
fn conference_filter_sorted_by_field_is_lexicographic() {
    let result = filter_and_sort(&publications(), PubFilter::Conference, PubSort::Field);
    assert_eq!(
        result.iter().map(|p| p.field).collect::<Vec<_>>(),
        vec!["Biomedical Engineering", "Power Systems", "RF Engineering"]
    );
}

#[test]
fn all_filter_keeps_every_record() {
    let all = publications();
    let result = filter_and_sort(&all, PubFilter::All, PubSort::Year);
    assert_eq!(result.len(), all.len());
}

#[test]
fn output_is_a_subset_of_input() {
    let all = publications();
    for filter in [PubFilter::All, PubFilter::Journal, PubFilter::Conference] {
        for sort in [PubSort::Year, PubSort::Field] {
            let result = filter_and_sort(&all, filter, sort);
            assert!(result.iter().all(|p| all.contains(p)));
        }
    }
}

#[test]
fn transform_is_idempotent() {
    let all = publications();
    for filter in [PubFilter::All, PubFilter::Journal, PubFilter::Conference] {
        for sort in [PubSort::Year, PubSort::Field] {
            let once = filter_and_sort(&all, filter, sort);
            let twice = filter_and_sort(&once, filter, sort);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn year_sort_is_stable_for_equal_years() {
    let all = publications();
    let result = filter_and_sort(&all, PubFilter::Conference, PubSort::Year);
    // Both 2014 conference papers keep their dataset order.
    let y2014: Vec<_> = result.iter().filter(|p| p.year == 2014).map(|p| p.field).collect();
    assert_eq!(y2014, vec!["Power Systems", "RF Engineering"]);
}

#[test]
fn statistics_match_dataset() {
    let (journals, conferences, fields) = statistics(&publications());
    assert_eq!(journals, 3);
    assert_eq!(conferences, 3);
    assert_eq!(fields, 5);
}

#[test]
fn short_authors_truncates_coauthored_papers() {
    let all = publications();
    let biosensor = all.iter().find(|p| p.year == 2020).unwrap();
    assert_eq!(biosensor.short_authors(), "Md. Asaduzzaman et al.");
}

#[test]
fn doi_url_prefixes_bare_dois() {
    let all = publications();
    let bare = all.iter().find(|p| p.doi == Some("10.1109/JSEN.2020.3021056")).unwrap();
    assert_eq!(
        bare.doi_url().as_deref(),
        Some("https://doi.org/10.1109/JSEN.2020.3021056")
    );
    let full = all.iter().find(|p| p.year == 2023).unwrap();
    assert!(full.doi_url().unwrap().starts_with("https://doi.org/10.21203"));
    let none = all.iter().find(|p| p.doi.is_none()).unwrap();
    assert_eq!(none.doi_url(), None);
}
