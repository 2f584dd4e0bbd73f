pub mod catalog;
pub mod submission;

pub use catalog::CatalogService;
pub use submission::SubmissionService;
