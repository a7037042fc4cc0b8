use crate::shared::dashboard::TabView;

/// Response for the overview tab (no filters)
pub type OverviewResponse = TabView;
