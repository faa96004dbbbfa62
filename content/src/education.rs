//! Degrees, relevant coursework, and certifications for the education page.

/// One degree entry on the education timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// A group of related courses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCategory {
    pub category: &'static str,
    pub courses: &'static [&'static str],
    pub icon: &'static str,
    pub color: &'static str,
}

/// A professional certification card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub credential: &'static str,
}

#[must_use]
pub fn education_entries() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            degree: "Ph.D. in AI Engineering",
            institution: "University of Nevada, Reno",
            location: "Reno, NV, USA",
            period: "2019 - Present",
            description: "Focused on generative AI models and deep learning for materials \
                          science and engineering applications.",
        },
        EducationEntry {
            degree: "M.Sc. in Computer Science and Engineering",
            institution: "Khulna University of Engineering & Technology (KUET)",
            location: "Khulna, Bangladesh",
            period: "2012 - 2014",
            description: "Specialized in artificial intelligence and machine learning algorithms.",
        },
        EducationEntry {
            degree: "B.Sc. in Computer Science and Engineering",
            institution: "Khulna University of Engineering & Technology (KUET)",
            location: "Khulna, Bangladesh",
            period: "2008 - 2012",
            description: "Graduated with honors, focusing on computer science fundamentals and \
                          software engineering.",
        },
    ]
}

#[must_use]
pub fn course_categories() -> Vec<CourseCategory> {
    vec![
        CourseCategory {
            category: "Statistics & Mathematics",
            courses: &[
                "Bayesian Statistics",
                "Multivariate Analysis",
                "Time Series Analysis",
                "Probability Theory",
                "Random Signal and Estimation Theory",
            ],
            icon: "📊",
            color: "violet",
        },
        CourseCategory {
            category: "Artificial Intelligence",
            courses: &[
                "Deep Learning",
                "Machine Learning Algorithms",
                "Neural Networks",
                "Computer Vision",
                "Natural Language Processing",
            ],
            icon: "🧠",
            color: "cyan",
        },
        CourseCategory {
            category: "Computing & Engineering",
            courses: &[
                "Elements of Research Computing",
                "Distributed Systems",
                "High-Performance Computing",
                "Advanced Algorithms",
                "Software Engineering",
            ],
            icon: "💻",
            color: "emerald",
        },
    ]
}

#[must_use]
pub fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            name: "Deep Learning Specialization",
            organization: "Coursera (deeplearning.ai)",
            date: "2020",
            credential: "ABCD-1234-EFGH",
        },
        Certification {
            name: "TensorFlow Developer Certificate",
            organization: "Google",
            date: "2019",
            credential: "TF-DEV-2021",
        },
        Certification {
            name: "Machine Learning Engineering",
            organization: "Stanford Online",
            date: "2018",
            credential: "ML-E-2018-STF",
        },
    ]
}
