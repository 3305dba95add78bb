pub mod experience_repository;
