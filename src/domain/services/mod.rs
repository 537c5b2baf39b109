//! Domain Services
//!
//! Stateless helpers that inspect the working directory.

mod asset_check;
mod stage_planner;

pub use asset_check::{check_essential_assets, AssetCheck, DEFAULT_ESSENTIAL_ASSETS};
pub use stage_planner::{
    plan_stage_ops, PlanOptions, StageOp, StagePlan, DEFAULT_ASSET_FOLDERS, DEFAULT_ASSET_PATTERNS,
    DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_SUFFIXES,
};
