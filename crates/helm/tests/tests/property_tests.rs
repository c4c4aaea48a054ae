#[path = "property/ranking_order.rs"]
mod ranking_order;

#[path = "property/decision_safety.rs"]
mod decision_safety;

#[path = "property/world_model.rs"]
mod world_model;

#[path = "property/action_plans.rs"]
mod action_plans;
