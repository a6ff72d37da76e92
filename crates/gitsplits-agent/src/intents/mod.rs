//! Built-in GitSplits intents

mod analyze;
mod create;
mod pay;
mod pending;
mod reputation;
mod verify;

pub use analyze::AnalyzeIntent;
pub use create::CreateIntent;
pub use pay::PayIntent;
pub use pending::PendingIntent;
pub use reputation::ReputationIntent;
pub use verify::VerifyIntent;

use crate::agent::Agent;

/// Register the standard intent set in production order.
pub fn register_default_intents(agent: &mut Agent) {
    agent.register_intent(Box::new(AnalyzeIntent::new()));
    agent.register_intent(Box::new(CreateIntent::new()));
    agent.register_intent(Box::new(PayIntent::new()));
    agent.register_intent(Box::new(VerifyIntent::new()));
    agent.register_intent(Box::new(PendingIntent::new()));
    agent.register_intent(Box::new(ReputationIntent::new()));
}
