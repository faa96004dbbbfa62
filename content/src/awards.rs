//! Academic awards and honors shown on the publications page.

/// A single award card: emoji badge plus a gradient accent class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Award {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

#[must_use]
pub fn awards() -> Vec<Award> {
    vec![
        Award {
            title: "President Gold Medal 2010",
            description: "Highest National Honor in Bangladesh for Undergraduate",
            icon: "🏅",
            color: "amber",
        },
        Award {
            title: "Prime Minister Gold Medal 2010",
            description: "Highest National Honor in Bangladesh for Undergraduate",
            icon: "🏆",
            color: "orange",
        },
        Award {
            title: "Dean List Award",
            description: "Khulna University of Engineering & Technology, 2007-2010",
            icon: "🎓",
            color: "indigo",
        },
        Award {
            title: "University Technical Scholarship",
            description: "2006-2010",
            icon: "📚",
            color: "violet",
        },
        Award {
            title: "UGC Scholarship",
            description: "University Grants Commission of Bangladesh, 2010",
            icon: "💰",
            color: "emerald",
        },
        Award {
            title: "KUET Students Merit Scholarship",
            description: "Government of the People's Republic of Bangladesh",
            icon: "🎯",
            color: "rose",
        },
    ]
}
