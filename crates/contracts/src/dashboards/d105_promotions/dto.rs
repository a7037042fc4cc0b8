use crate::shared::dashboard::TabView;

/// Response for the promotions tab (no filters)
pub type PromotionsResponse = TabView;
