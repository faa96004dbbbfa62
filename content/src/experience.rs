//! Research and professional experience records for the research page.

/// A research engagement with expandable detail rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResearchExperience {
    pub title: &'static str,
    pub organization: &'static str,
    pub duration: Option<&'static str>,
    pub current: bool,
    pub icon: &'static str,
    pub color: &'static str,
    pub details: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

/// A professional position with responsibilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfessionalExperience {
    pub title: &'static str,
    pub organization: &'static str,
    pub department: &'static str,
    pub duration: &'static str,
    pub years: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub responsibilities: &'static [&'static str],
}

#[must_use]
pub fn research_experiences() -> Vec<ResearchExperience> {
    vec![
        ResearchExperience {
            title: "Graduate Research Assistant",
            organization: "University of Nevada, Reno (Park Lab)",
            duration: None,
            current: true,
            icon: "🔬",
            color: "rose",
            details: &[
                "Developing a generative AI model that could generate reactive force field that \
                 is essential for molecular dynamic simulations",
                "Developed a deep learning model to find optimized parameters that could \
                 facilitate the CVD process for material growth",
                "Developing 2D nano materials using chemical vapor deposition (CVD) method and \
                 building sensors for IoT and biomedical applications",
            ],
            technologies: &[
                "Generative AI",
                "Molecular Dynamics",
                "Deep Learning",
                "CVD",
                "Sensor Development",
            ],
        },
        ResearchExperience {
            title: "AI Research Lead",
            organization: "Khulna University of Engineering & Technology",
            duration: Some("2018 - 2023"),
            current: false,
            icon: "🧠",
            color: "violet",
            details: &[
                "Led a research group focused on applications of AI in engineering problems",
                "Developed novel deep learning architectures for signal and image processing tasks",
                "Applied reinforcement learning techniques to solve control and optimization \
                 problems",
                "Mentored graduate students in AI research methodologies and best practices",
            ],
            technologies: &[
                "Deep Learning",
                "Reinforcement Learning",
                "Signal Processing",
                "Control Systems",
            ],
        },
        ResearchExperience {
            title: "Industry-Academia Collaborative Research",
            organization: "Various Industry Partners",
            duration: Some("2015 - 2022"),
            current: false,
            icon: "🔗",
            color: "indigo",
            details: &[
                "Conducted joint research with industry partners to solve real-world problems",
                "Adapted academic AI models for practical industrial applications",
                "Developed scalable machine learning solutions for manufacturing optimization",
                "Created AI-driven quality control and predictive maintenance systems",
            ],
            technologies: &["Applied AI", "Industrial IoT", "Process Optimization", "Quality Control"],
        },
    ]
}

#[must_use]
pub fn professional_experiences() -> Vec<ProfessionalExperience> {
    vec![
        ProfessionalExperience {
            title: "Assistant Professor",
            organization: "Khulna University of Engineering & Technology (KUET), Bangladesh",
            department: "Department of Electrical & Electronic Engineering",
            duration: "March 2014 - January 2023",
            years: "8 Years",
            icon: "🎓",
            color: "indigo",
            responsibilities: &[
                "Led research initiatives in AI applications and deep learning",
                "Taught advanced courses in machine learning, signal processing, and electrical \
                 engineering",
                "Supervised undergraduate and graduate student research projects",
                "Published research work in international conferences and journals",
            ],
        },
        ProfessionalExperience {
            title: "Lecturer",
            organization: "Khulna University of Engineering & Technology (KUET), Bangladesh",
            department: "Department of Electrical & Electronic Engineering",
            duration: "June 2010 - March 2014",
            years: "4 Years",
            icon: "📚",
            color: "cyan",
            responsibilities: &[
                "Taught fundamental engineering courses and laboratories",
                "Conducted research in signal processing and early applications of machine \
                 learning",
                "Mentored student projects and thesis work",
                "Participated in curriculum development and academic committee work",
            ],
        },
        ProfessionalExperience {
            title: "Industry Consultant",
            organization: "Consultancy Research & Testing Services (CRTS)",
            department: "Khulna University of Engineering & Technology (KUET), Bangladesh",
            duration: "January 2011 - January 2022",
            years: "11 Years",
            icon: "💼",
            color: "violet",
            responsibilities: &[
                "Provided technical consultancy to various industries in Bangladesh",
                "Designed and implemented machine learning solutions for industrial applications",
                "Conducted technical audits and performance optimizations",
                "Advised on technology adoption and digital transformation strategies",
            ],
        },
        ProfessionalExperience {
            title: "Associate Sub Project Manager",
            organization: "Teaching-Learning and Research in EEE (TLREEE)",
            department: "A Sub Project of the Ministry of Education, Bangladesh",
            duration: "January 2012 - January 2014",
            years: "2 Years",
            icon: "📋",
            color: "emerald",
            responsibilities: &[
                "Managed research and educational development initiatives",
                "Coordinated academic and research activities between faculty and government",
                "Supervised budget allocation and resource management for the project",
                "Facilitated training and workshops for teachers and researchers",
            ],
        },
        ProfessionalExperience {
            title: "Cultural and Sports Secretary",
            organization: "Teachers Association",
            department: "Khulna University of Engineering & Technology (KUET), Bangladesh",
            duration: "January 2012 - January 2013",
            years: "1 Year",
            icon: "🏆",
            color: "amber",
            responsibilities: &[
                "Organized cultural events and sports competitions for faculty members",
                "Coordinated inter-university faculty sports tournaments",
                "Managed cultural exchange programs and community engagement activities",
                "Promoted work-life balance and wellness activities among faculty",
            ],
        },
    ]
}
