//! Skill categories with proficiency levels and the technical achievement
//! highlights shown on the skills page.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// One named skill with a 0-100 proficiency level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// A group of skills rendered as one meter panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
    pub icon: &'static str,
    pub color: &'static str,
}

/// A headline engineering result highlighted under the meters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TechnicalAchievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[must_use]
pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            name: "Generative Models",
            skills: &[
                Skill { name: "GPT-3/4", level: 95 },
                Skill { name: "GPT Neo", level: 90 },
                Skill { name: "T5", level: 85 },
                Skill { name: "BART", level: 88 },
                Skill { name: "Vision & Audio Diffusion", level: 92 },
            ],
            icon: "🧠",
            color: "indigo",
        },
        SkillCategory {
            name: "Deep Learning Frameworks",
            skills: &[
                Skill { name: "PyTorch", level: 98 },
                Skill { name: "Hugging Face Transformers", level: 95 },
            ],
            icon: "🔥",
            color: "purple",
        },
        SkillCategory {
            name: "Scalable Training",
            skills: &[
                Skill { name: "DDP", level: 92 },
                Skill { name: "ZeRO-Offload", level: 88 },
                Skill { name: "FlashAttention", level: 90 },
                Skill { name: "Multihead Latent Attention", level: 86 },
                Skill { name: "CUDA", level: 85 },
                Skill { name: "Mixed Precision (AMP)", level: 94 },
            ],
            icon: "⚡",
            color: "indigo",
        },
        SkillCategory {
            name: "Reinforcement Learning",
            skills: &[
                Skill { name: "PPO", level: 88 },
                Skill { name: "GRPO", level: 85 },
                Skill { name: "RLHF", level: 92 },
                Skill { name: "Multi-agent Systems", level: 86 },
            ],
            icon: "🤖",
            color: "purple",
        },
        SkillCategory {
            name: "Data Engineering",
            skills: &[
                Skill { name: "Tiktoken Tokenization", level: 90 },
                Skill { name: "Uint16 Sharding", level: 88 },
                Skill { name: "Streaming Pipelines", level: 92 },
            ],
            icon: "📊",
            color: "indigo",
        },
        SkillCategory {
            name: "Cloud & DevOps",
            skills: &[
                Skill { name: "AWS SageMaker", level: 86 },
                Skill { name: "GCP AI Platform", level: 84 },
                Skill { name: "Docker", level: 90 },
                Skill { name: "Kubernetes", level: 88 },
                Skill { name: "GitOps", level: 85 },
            ],
            icon: "☁️",
            color: "purple",
        },
        SkillCategory {
            name: "Full Stack Dev",
            skills: &[
                Skill { name: "Next.js", level: 94 },
                Skill { name: "React", level: 92 },
                Skill { name: "TypeScript", level: 90 },
                Skill { name: "Prisma", level: 85 },
                Skill { name: "REST APIs", level: 92 },
            ],
            icon: "💻",
            color: "indigo",
        },
    ]
}

#[must_use]
pub fn technical_achievements() -> Vec<TechnicalAchievement> {
    vec![
        TechnicalAchievement {
            title: "Multi-GPU Training Pipeline",
            description: "Led design of multi GPU GPT 2/3 training pipeline using PyTorch DDP + \
                          ZeRO, cut GPU memory usage by 40% and halved epoch times on 8× A100 \
                          nodes",
            icon: "⚡",
        },
        TechnicalAchievement {
            title: "Tokenization & Sharding System",
            description: "Architected uint16-based tokenization & sharding system processing 10 \
                          billion+ tokens, driving 20% throughput gains in data loading",
            icon: "🔄",
        },
        TechnicalAchievement {
            title: "LLM Fine-tuning",
            description: "Fine-tuned domain specific LLMs with LoRA and RLHF, achieving a 15% \
                          reduction in perplexity and a 20% lift in human evaluated coherence \
                          scores",
            icon: "📈",
        },
        TechnicalAchievement {
            title: "Flash Attention Integration",
            description: "Integrated Flash Attention into production inference stack, improving \
                          throughput by 25% and reducing 95th percentile latency by 30 ms",
            icon: "⚡",
        },
    ]
}

/// Skills highlighted as pills on the home page teaser.
#[must_use]
pub fn featured_skills() -> Vec<&'static str> {
    vec!["GPT-3/4", "PyTorch", "RLHF", "DDP", "Fine-tuning", "Flash Attention"]
}
