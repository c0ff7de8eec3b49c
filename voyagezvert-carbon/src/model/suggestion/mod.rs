mod suggestion_record;
mod suggestion_ops;
mod suggestion_rule;

pub use suggestion_record::Suggestion;
pub use suggestion_ops::suggest;
pub use suggestion_rule::SuggestionRule;
