//! Publication records and the filter/sort transform behind the
//! publications page controls.

#[cfg(test)]
#[path = "publications_test.rs"]
mod publications_test;

use std::collections::HashSet;

/// Venue class of a publication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PubKind {
    Journal,
    Conference,
}

impl PubKind {
    /// Short label used on the type badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Journal => "Journal",
            Self::Conference => "Conference",
        }
    }
}

/// One publication record. `venue` is the journal or conference name
/// depending on `kind`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Publication {
    pub kind: PubKind,
    pub title: &'static str,
    pub authors: &'static str,
    pub venue: &'static str,
    pub year: u16,
    pub doi: Option<&'static str>,
    pub volume: Option<&'static str>,
    pub field: &'static str,
}

impl Publication {
    /// First author plus "et al." when co-authored, for the collapsed card.
    #[must_use]
    pub fn short_authors(&self) -> String {
        let first = self.authors.split(',').next().unwrap_or(self.authors).trim();
        if self.authors.contains(',') {
            format!("{first} et al.")
        } else {
            first.to_owned()
        }
    }

    /// Resolvable DOI link; bare DOIs are prefixed with the resolver host.
    #[must_use]
    pub fn doi_url(&self) -> Option<String> {
        self.doi.map(|doi| {
            if doi.starts_with("http") {
                doi.to_owned()
            } else {
                format!("https://doi.org/{doi}")
            }
        })
    }
}

/// Type filter for the publication list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PubFilter {
    #[default]
    All,
    Journal,
    Conference,
}

/// Sort key for the publication list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PubSort {
    /// Descending numeric year.
    #[default]
    Year,
    /// Ascending lexicographic research field.
    Field,
}

#[must_use]
pub fn publications() -> Vec<Publication> {
    vec![
        Publication {
            kind: PubKind::Journal,
            title: "Intriguing Type-II g-GeC/AlN Bilayer Heterostructure for Photocatalytic \
                    Water Decomposition and Hydrogen Production",
            authors: "Naim Ferdous, Md Sherajul Islam, Md Shahabul Alam, Md Yasir Zamil, \
                      Jeshurun Biney, Sareh Vatani, Jeongwon Park",
            venue: "Nature Scientific Reports",
            year: 2023,
            doi: Some("https://doi.org/10.21203/rs.3.rs-3235354/v1"),
            volume: None,
            field: "Materials Science",
        },
        Publication {
            kind: PubKind::Journal,
            title: "Combined FIM-PHI Based Wearable Biosensor",
            authors: "Md. Asaduzzaman, Tahsin Solaiman, Rushdi Zahid Rusho, Md Shahabul Alam, \
                      Md Arafat Hossain",
            venue: "IEEE Sensors Journal (IF:3.073)",
            year: 2020,
            doi: Some("10.1109/JSEN.2020.3021056"),
            volume: None,
            field: "Biomedical Engineering",
        },
        Publication {
            kind: PubKind::Journal,
            title: "Impact Analysis of PMD and GVD on the Performance of Optical Fiber \
                    Communication Employing OFDM-QAM Technique",
            authors: "Md Shahabul Alam, Md Abul Hossain",
            venue: "International Journal of Innovative Technology and Exploring Engineering (IJITEE)",
            year: 2013,
            doi: None,
            volume: Some("vol. 3, issue 4, pp. 58-63"),
            field: "Telecommunications",
        },
        Publication {
            kind: PubKind::Conference,
            title: "Design and Implementation of Low-Cost ECG Monitoring System for the Patient \
                    Using Smartphone",
            authors: "Md. Asif Ahamed, Md. Kamrul Hasan, Md. Shahabul Alam",
            venue: "IEEE Conference on Electrical & Electronic Engineering (CEEE)",
            year: 2016,
            doi: Some("10.1109/CEEE.2015.7428272"),
            volume: None,
            field: "Biomedical Engineering",
        },
        Publication {
            kind: PubKind::Conference,
            title: "Localization of FACTS Devices for Optimal Power Flow Using Genetic Algorithm",
            authors: "A.K.M. Rezwanur Rahman, Md. Shahabul Alam, Md. Zakir Hossain and Md.Shahjahan",
            venue: "IEEE International Conference on Electrical Information and Communication \
                    Technology (EICT)",
            year: 2014,
            doi: Some("10.1109/EICT.2014.6777889"),
            volume: None,
            field: "Power Systems",
        },
        Publication {
            kind: PubKind::Conference,
            title: "A compact W-shaped 2.45 GHz RFID tag antenna design for UHF RFID applications",
            authors: "Mukit Sarkar, Md. Abul Hossain, Md. Reshad Ul Hoque and Md. Shahabul Alam",
            venue: "IEEE International Conference on Computer and Information Technology (ICCIT)",
            year: 2014,
            doi: Some("10.1109/ICCITechn.2014.6997331"),
            volume: None,
            field: "RF Engineering",
        },
    ]
}

/// Filter by exact kind (no-op for [`PubFilter::All`]), then stable-sort by
/// the chosen key. Pure: the result is always a subset of the input, and
/// re-applying the same transform leaves it unchanged.
#[must_use]
pub fn filter_and_sort(records: &[Publication], filter: PubFilter, sort: PubSort) -> Vec<Publication> {
    let mut out: Vec<Publication> = records
        .iter()
        .filter(|p| match filter {
            PubFilter::All => true,
            PubFilter::Journal => p.kind == PubKind::Journal,
            PubFilter::Conference => p.kind == PubKind::Conference,
        })
        .cloned()
        .collect();

    match sort {
        PubSort::Year => out.sort_by(|a, b| b.year.cmp(&a.year)),
        PubSort::Field => out.sort_by(|a, b| a.field.cmp(b.field)),
    }
    out
}

/// Counts for the statistics panel: journals, conferences, distinct fields.
#[must_use]
pub fn statistics(records: &[Publication]) -> (usize, usize, usize) {
    let journals = records.iter().filter(|p| p.kind == PubKind::Journal).count();
    let conferences = records.iter().filter(|p| p.kind == PubKind::Conference).count();
    let fields = records.iter().map(|p| p.field).collect::<HashSet<_>>().len();
    (journals, conferences, fields)
}
