//! Static technology-family taxonomy for the skills view.

use serde::Serialize;

/// Technology families, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillFamily {
    Frontend,
    Backend,
    Database,
    Mobile,
    #[serde(rename = "devops")]
    DevOps,
    Tools,
    /// Catch-all family; matched by no keyword.
    Other,
}

impl SkillFamily {
    /// All families in match-priority order, `Other` last.
    pub const ALL: [SkillFamily; 7] = [
        SkillFamily::Frontend,
        SkillFamily::Backend,
        SkillFamily::Database,
        SkillFamily::Mobile,
        SkillFamily::DevOps,
        SkillFamily::Tools,
        SkillFamily::Other,
    ];

    /// Stable key used in serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            SkillFamily::Frontend => "frontend",
            SkillFamily::Backend => "backend",
            SkillFamily::Database => "database",
            SkillFamily::Mobile => "mobile",
            SkillFamily::DevOps => "devops",
            SkillFamily::Tools => "tools",
            SkillFamily::Other => "other",
        }
    }

    /// Keywords matched by lower-cased substring containment — looser than
    /// the gallery's exact matching, on purpose.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SkillFamily::Frontend => &[
                "javascript",
                "typescript",
                "react",
                "vue",
                "next",
                "html",
                "css",
                "sass",
                "tailwind",
                "webpack",
                "vite",
                "angular",
            ],
            SkillFamily::Backend => &[
                "node", "express", "python", "django", "flask", "java", "spring", "php",
                "laravel", "ruby", "rails", "go", "rust", "c#", ".net", "nestjs",
            ],
            SkillFamily::Database => &[
                "mongodb",
                "mysql",
                "postgresql",
                "sqlite",
                "redis",
                "firebase",
                "supabase",
                "dynamodb",
                "cassandra",
            ],
            SkillFamily::Mobile => &[
                "react-native",
                "flutter",
                "swift",
                "kotlin",
                "android",
                "ios",
            ],
            SkillFamily::DevOps => &[
                "git",
                "github",
                "gitlab",
                "docker",
                "kubernetes",
                "aws",
                "azure",
                "gcp",
                "jenkins",
                "ci/cd",
                "terraform",
                "ansible",
            ],
            SkillFamily::Tools => &["figma", "adobe", "photoshop", "illustrator", "xd"],
            SkillFamily::Other => &[],
        }
    }
}
