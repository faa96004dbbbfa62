//! Project showcase records, thesis supervision, and the tab/category
//! filter behind the projects page.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Which showcase list a project belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectEra {
    Recent,
    Past,
    Supervision,
}

/// Category used by the filter pills.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectCategory {
    #[default]
    All,
    Ai,
    Hardware,
    Supervision,
}

impl ProjectCategory {
    /// Label shown on the filter pill.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Ai => "AI & ML Projects",
            Self::Hardware => "Hardware & IoT",
            Self::Supervision => "Thesis Supervision",
        }
    }

    /// Every selectable category, in pill order.
    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::All, Self::Ai, Self::Hardware, Self::Supervision]
    }
}

/// Tab selector above the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectTab {
    /// Recent key projects.
    #[default]
    Recent,
    /// Past projects plus thesis supervision.
    Past,
}

/// One card in the projects grid. Supervision records reuse the same shape
/// with `student`/`year` set and an empty description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
    pub link: &'static str,
    pub category: ProjectCategory,
    pub era: ProjectEra,
    pub student: Option<&'static str>,
    pub year: Option<u16>,
}

#[must_use]
pub fn recent_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Full-Spectrum GPT-2 (124M) Reimplementation",
            description: "From-scratch PyTorch nn.Module, seamless loading of OpenAI/Hugging Face \
                          weights, uint16-based tokenization, and a robust, device-agnostic \
                          sampling loop for next-token generation.",
            icon: "🤖",
            color: "indigo",
            tags: &["PyTorch", "LLM", "Tokenization", "Transformer"],
            featured: true,
            link: "#",
            category: ProjectCategory::Ai,
            era: ProjectEra::Recent,
            student: None,
            year: None,
        },
        Project {
            title: "Ultra-Low-Latency Inference Stack",
            description: "Systematic Tensor Core benchmarking (FP32→TF32→FP16/BF16), \
                          torch.compile kernel fusion, and FlashAttention integration — driving \
                          end-to-end inference down from ~1000 ms to ~93 ms.",
            icon: "⚡",
            color: "amber",
            tags: &["FlashAttention", "CUDA", "Optimization", "Inference"],
            featured: true,
            link: "#",
            category: ProjectCategory::Ai,
            era: ProjectEra::Recent,
            student: None,
            year: None,
        },
        Project {
            title: "Production-Ready Training & Scale-Out",
            description: "Modular (B,T)→(B,T,C) data pipelines, AdamW with warmup+cosine decay, \
                          gradient clipping/accumulation, and DDP across multi-GPU clusters; \
                          validated on FineWeb (EDU) corpora and HellaSwag benchmarks.",
            icon: "🚀",
            color: "purple",
            tags: &["DDP", "AdamW", "Training", "Distributed"],
            featured: true,
            link: "#",
            category: ProjectCategory::Ai,
            era: ProjectEra::Recent,
            student: None,
            year: None,
        },
        Project {
            title: "DeepSeek R1-inspired GRPO Agent",
            description: "Designed and implemented a model leveraging Group Relative Policy \
                          Optimization (GRPO) to enhance policy stability and sample efficiency \
                          with smoother training dynamics and faster policy refinement.",
            icon: "🧠",
            color: "emerald",
            tags: &["GRPO", "Reinforcement Learning", "Agent", "Policy Optimization"],
            featured: false,
            link: "#",
            category: ProjectCategory::Ai,
            era: ProjectEra::Recent,
            student: None,
            year: None,
        },
        Project {
            title: "Diffusion Model Image Synthesis",
            description: "Designed an image synthesis model based on diffusion techniques that \
                          generates images based on the training dataset's characteristics with \
                          progressive denoising and controlled generation.",
            icon: "🖼️",
            color: "cyan",
            tags: &["PyTorch", "Diffusion Models", "Computer Vision", "Generative AI"],
            featured: false,
            link: "#",
            category: ProjectCategory::Ai,
            era: ProjectEra::Recent,
            student: None,
            year: None,
        },
        Project {
            title: "Transformer for Translation",
            description: "Designed and implemented a transformer architecture in PyTorch \
                          specifically for translation tasks, with attention mechanisms and \
                          cross-lingual embedding alignment.",
            icon: "🌐",
            color: "rose",
            tags: &["PyTorch", "NLP", "Transformer", "Translation"],
            featured: false,
            link: "#",
            category: ProjectCategory::Ai,
            era: ProjectEra::Recent,
            student: None,
            year: None,
        },
    ]
}

#[must_use]
pub fn past_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Low-cost ECG Machine",
            description: "Designed and implemented a low-cost ECG machine accessible to anyone \
                          for heart rate monitoring, recognized with a national award for \
                          innovation and affordability.",
            icon: "❤️",
            color: "red",
            tags: &["Hardware", "Medical", "Embedded Systems"],
            featured: true,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
        Project {
            title: "Blood Pressure Monitoring System",
            description: "Digital blood pressure monitor with threshold alerts for patients with \
                          hypertension and hypotension, featuring wireless connectivity and data \
                          logging.",
            icon: "📊",
            color: "indigo",
            tags: &["Medical", "IoT", "Monitoring"],
            featured: false,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
        Project {
            title: "Intelligent Home Security System",
            description: "Security system that wirelessly alerts homeowners of security breaches, \
                          with motion detection, camera integration, and mobile notifications.",
            icon: "🔒",
            color: "violet",
            tags: &["IoT", "Security", "Wireless"],
            featured: false,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
        Project {
            title: "Smart Home Appliance Control",
            description: "System to control home appliances (TV, refrigerator, fans, lights) \
                          using an Android smartphone from a distance via Bluetooth and WiFi \
                          connectivity.",
            icon: "🏠",
            color: "emerald",
            tags: &["IoT", "Android", "Smart Home"],
            featured: false,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
        Project {
            title: "Smart Solar Sun Tracker",
            description: "Motor driver system that tracks the sun even in cloudy environments \
                          using light sensors and predictive algorithms, controllable via Android \
                          smartphone.",
            icon: "☀️",
            color: "amber",
            tags: &["Renewable Energy", "IoT", "Android"],
            featured: false,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
        Project {
            title: "Underwater Obstacle Detection Robot",
            description: "Robot capable of underwater navigation with obstacle detection using \
                          laser sensors, designed for exploration and underwater mapping.",
            icon: "🤿",
            color: "cyan",
            tags: &["Robotics", "Sensors", "Navigation"],
            featured: true,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
        Project {
            title: "Line Follower Robot",
            description: "Autonomous robot that follows line paths using optical sensors with PID \
                          control for smooth navigation and obstacle avoidance capabilities.",
            icon: "🔄",
            color: "slate",
            tags: &["Robotics", "Sensors", "Control Systems"],
            featured: false,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
        Project {
            title: "Wireless Motor Drives System",
            description: "Motor drive system with wireless speed control from any distance using \
                          Android smartphone, featuring variable frequency drive and power \
                          optimization.",
            icon: "📱",
            color: "orange",
            tags: &["Motor Control", "Wireless", "Android"],
            featured: false,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
        Project {
            title: "Smart Water Level Indicator",
            description: "System designed to sense water levels in tanks and automatically \
                          control pumps based on predefined thresholds with wireless monitoring.",
            icon: "💧",
            color: "sky",
            tags: &["IoT", "Automation", "Sensors"],
            featured: false,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
        Project {
            title: "Wireless Power Transmission",
            description: "System for transferring power wirelessly using resonance, designed for \
                          short-range applications with efficiency optimization.",
            icon: "⚡",
            color: "yellow",
            tags: &["Power Electronics", "Wireless", "Energy"],
            featured: false,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
        Project {
            title: "High Quality FM Transmitter and Receiver",
            description: "Custom-designed FM radio transmitter and receiver with enhanced audio \
                          quality and range, featuring digital signal processing.",
            icon: "📻",
            color: "purple",
            tags: &["Communications", "Electronics", "DSP"],
            featured: false,
            link: "#",
            category: ProjectCategory::Hardware,
            era: ProjectEra::Past,
            student: None,
            year: None,
        },
    ]
}

#[must_use]
pub fn thesis_supervision() -> Vec<Project> {
    vec![
        Project {
            title: "Drowsiness detection in real time by using CNN and eye landmarks' distance",
            description: "",
            icon: "👁️",
            color: "cyan",
            tags: &["CNN", "Computer Vision", "Safety"],
            featured: false,
            link: "#",
            category: ProjectCategory::Supervision,
            era: ProjectEra::Supervision,
            student: Some("Abdullah Arafat Miah"),
            year: Some(2018),
        },
        Project {
            title: "Effect of vocal tract dynamics on isolated Bangla vowel and word recognition \
                    by neural network",
            description: "",
            icon: "🗣️",
            color: "indigo",
            tags: &["Neural Networks", "Speech Recognition", "NLP"],
            featured: false,
            link: "#",
            category: ProjectCategory::Supervision,
            era: ProjectEra::Supervision,
            student: Some("Md Rakibul Hasan"),
            year: Some(2018),
        },
        Project {
            title: "Wireless Power transmission system analysis in real time mode",
            description: "",
            icon: "⚡",
            color: "orange",
            tags: &["Wireless", "Power Electronics", "Real-time Systems"],
            featured: false,
            link: "#",
            category: ProjectCategory::Supervision,
            era: ProjectEra::Supervision,
            student: Some("Md Fahim Khan"),
            year: Some(2017),
        },
        Project {
            title: "Design and implementation of Low-Cost 3D printer for industry purpose in the \
                    context of Bangladesh",
            description: "",
            icon: "🖨️",
            color: "emerald",
            tags: &["3D Printing", "Manufacturing", "Low-cost Design"],
            featured: false,
            link: "#",
            category: ProjectCategory::Supervision,
            era: ProjectEra::Supervision,
            student: Some("Md Fardeen"),
            year: Some(2019),
        },
    ]
}

/// The merged showcase list restricted by tab and category.
///
/// With category `All` the tab decides: `Recent` shows recent projects,
/// `Past` shows past projects plus supervision records. A specific category
/// additionally requires the recent tab to show only recent work, while the
/// past tab shows every match regardless of era.
#[must_use]
pub fn filtered(tab: ProjectTab, category: ProjectCategory) -> Vec<Project> {
    let mut all = recent_projects();
    all.extend(past_projects());
    all.extend(thesis_supervision());

    match category {
        ProjectCategory::All => all
            .into_iter()
            .filter(|p| match tab {
                ProjectTab::Recent => p.era == ProjectEra::Recent,
                ProjectTab::Past => matches!(p.era, ProjectEra::Past | ProjectEra::Supervision),
            })
            .collect(),
        _ => all
            .into_iter()
            .filter(|p| {
                p.category == category && (tab == ProjectTab::Past || p.era == ProjectEra::Recent)
            })
            .collect(),
    }
}
