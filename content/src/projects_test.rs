use super::*;

#[test]
fn recent_tab_shows_only_recent_work() {
    let result = filtered(ProjectTab::Recent, ProjectCategory::All);
    assert_eq!(result.len(), recent_projects().len());
    assert!(result.iter().all(|p| p.era == ProjectEra::Recent));
}

#[test]
fn past_tab_merges_past_and_supervision() {
    let result = filtered(ProjectTab::Past, ProjectCategory::All);
    assert_eq!(result.len(), past_projects().len() + thesis_supervision().len());
    assert!(result.iter().all(|p| p.era != ProjectEra::Recent));
}

#[test]
fn ai_category_on_recent_tab_is_recent_only() {
    let result = filtered(ProjectTab::Recent, ProjectCategory::Ai);
    assert!(!result.is_empty());
    assert!(result.iter().all(|p| p.category == ProjectCategory::Ai));
    assert!(result.iter().all(|p| p.era == ProjectEra::Recent));
}

#[test]
fn hardware_category_on_past_tab_spans_eras() {
    let result = filtered(ProjectTab::Past, ProjectCategory::Hardware);
    assert_eq!(result.len(), past_projects().len());
    assert!(result.iter().all(|p| p.category == ProjectCategory::Hardware));
}

#[test]
fn supervision_category_exposes_students() {
    let result = filtered(ProjectTab::Past, ProjectCategory::Supervision);
    assert_eq!(result.len(), 4);
    assert!(result.iter().all(|p| p.student.is_some() && p.year.is_some()));
}

#[test]
fn hardware_category_on_recent_tab_is_empty() {
    // No recent hardware work exists, so the recent tab filters it all out.
    assert!(filtered(ProjectTab::Recent, ProjectCategory::Hardware).is_empty());
}

#[test]
fn category_labels_are_distinct() {
    let labels: Vec<_> = ProjectCategory::all().iter().map(|c| c.label()).collect();
    let mut deduped = labels.clone();
    deduped.dedup();
    assert_eq!(labels, deduped);
}
