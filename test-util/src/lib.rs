pub use random::{random_domain, random_transformation};
pub use target_data::{TARGET_CASES, TargetCase, iter_target_cases, target_case};

mod random;
mod target_data;
