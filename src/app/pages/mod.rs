pub mod routes;

pub mod home;
pub mod projects;
pub mod other_projects;
pub mod project_detail;
pub mod thoughts;
pub mod thought_detail;
pub mod recommendations;
pub mod not_found;

pub use home::Home;
pub use projects::Projects;
pub use other_projects::OtherProjects;
pub use project_detail::ProjectDetail;
pub use thoughts::Thoughts;
pub use thought_detail::ThoughtDetail;
pub use recommendations::Recommendations;
pub use not_found::NotFound;
