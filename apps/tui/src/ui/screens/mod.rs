pub mod dashboards;
pub mod explainer;
pub mod generate_page;
pub mod generator;
pub mod help;
pub mod history;
pub mod query;
pub mod settings;
