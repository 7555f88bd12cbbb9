//! Application pages

pub mod research;

pub use research::ResearchPage;
