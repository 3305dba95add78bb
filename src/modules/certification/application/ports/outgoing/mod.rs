pub mod certification_repository;
