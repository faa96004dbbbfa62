//! Site identity and the small fixed lists used by the hero and footer.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// Display name shown in the header logo.
pub const SITE_NAME: &str = "Alam";
/// Domain suffix rendered after the name.
pub const SITE_SUFFIX: &str = ".dev";
/// Public contact address shown on the contact page.
pub const CONTACT_EMAIL: &str = "contact@alamcse.com";
/// Current location shown on the contact page map card.
pub const LOCATION: &str = "Reno, Nevada, USA";

/// Specialties rotated through the hero tagline, one every two seconds.
#[must_use]
pub fn technologies() -> Vec<&'static str> {
    vec![
        "Machine Learning",
        "Neural Networks",
        "Computer Vision",
        "NLP",
        "Deep Learning",
        "Transformers",
        "LLMs",
        "GPT",
        "TensorFlow",
        "PyTorch",
        "Data Science",
    ]
}

/// A social profile link rendered in the contact sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

#[must_use]
pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "GitHub",
            url: "https://github.com/yourusername",
            icon: "github",
        },
        SocialLink {
            name: "LinkedIn",
            url: "https://linkedin.com/in/yourusername",
            icon: "linkedin",
        },
        SocialLink {
            name: "Twitter",
            url: "https://twitter.com/yourusername",
            icon: "twitter",
        },
        SocialLink {
            name: "Scholar",
            url: "https://scholar.google.com/citations?user=youruserid",
            icon: "scholar",
        },
    ]
}

/// Advance the rotating hero label to the next technology, wrapping at the end.
#[must_use]
pub fn next_technology_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}
