pub mod dashboards;
pub mod warehouse;
