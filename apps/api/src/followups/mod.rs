// Follow-up reminders: scheduling rules, working-set transformations and
// message templates. Stateless; the client holds the reminders.

pub mod handlers;
pub mod models;
pub mod scheduler;
pub mod templates;
