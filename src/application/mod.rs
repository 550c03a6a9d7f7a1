// Application layer - Use cases and the ports they depend on
pub mod catalog_repository;
pub mod catalog_service;
pub mod lead_notifier;
pub mod lead_service;
pub mod report_service;
