#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod catalog;
pub mod config;
pub mod projects;
pub mod runner;
pub mod skills;

pub use catalog::{
    classify_project, group_by_category, CategoryBucket, CategoryGrouping, ProjectCategory,
};
pub use config::{load_account, AccountConfig, ConfigError, DEFAULT_ACCOUNT};
pub use projects::{
    fetch_project_detail, fetch_projects, normalize_repositories, thumbnail_url, FetchError,
    Project, ProjectDetail, RawRepository, NO_DESCRIPTION,
};
pub use runner::{PortfolioView, Runner, RunnerConfig, RunnerError};
pub use skills::{
    classify_token, extract_technologies, SkillFamily, SkillGroup, SkillProfile, Technology,
};
