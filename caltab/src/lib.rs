// CLI support modules
pub mod report;
