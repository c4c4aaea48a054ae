#[path = "e2e/signal_to_action.rs"]
mod signal_to_action;

#[path = "e2e/escalation.rs"]
mod escalation;

#[path = "e2e/world_model_lifecycle.rs"]
mod world_model_lifecycle;

#[path = "e2e/rollback_on_payment_failure.rs"]
mod rollback_on_payment_failure;

#[path = "e2e/outcome_feedback.rs"]
mod outcome_feedback;
