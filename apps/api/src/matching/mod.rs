pub mod experience;
pub mod handlers;
pub mod keywords;
pub mod ranking;
pub mod scoring;
pub mod semantic;
pub mod skills;
pub mod weights;
