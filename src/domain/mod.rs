// Domain layer - Business records and pure rules
pub mod company;
pub mod lead;
pub mod member;
pub mod project;
pub mod report;
