// Application layer - Use cases and trait seams
pub mod catalog_repository;
pub mod diagram_store;
pub mod plate_service;
