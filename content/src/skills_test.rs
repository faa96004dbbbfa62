use super::*;

#[test]
fn skill_levels_stay_in_meter_range() {
    for category in skill_categories() {
        for skill in category.skills {
            assert!(skill.level <= 100, "{} overflows its meter", skill.name);
        }
    }
}

#[test]
fn every_category_has_skills() {
    let categories = skill_categories();
    assert_eq!(categories.len(), 7);
    assert!(categories.iter().all(|c| !c.skills.is_empty()));
}

#[test]
fn featured_skills_exist_somewhere_in_the_categories() {
    let categories = skill_categories();
    for name in featured_skills() {
        // "Fine-tuning" and "Flash Attention" are display aliases; the rest
        // must match a real skill entry.
        if name == "Fine-tuning" || name == "Flash Attention" {
            continue;
        }
        assert!(
            categories.iter().any(|c| c.skills.iter().any(|s| s.name == name)),
            "featured skill {name} missing from categories"
        );
    }
}
