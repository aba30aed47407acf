/// Use cases module containing application business logic orchestration
mod check_project;

pub use check_project::CheckProjectUseCase;
