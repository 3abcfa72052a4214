//! Token budget enforcement for prospective prompts.
//!
//! A prompt that serializes past the budget is rejected before any
//! request is sent. The check runs per call and is never cached.

use gptfn_types::chat::ChatModel;
use gptfn_types::error::Error;

/// An integer ceiling on prompt tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBudget {
    limit: usize,
}

impl TokenBudget {
    /// Default budget: 7/8 of the model's context window, leaving the
    /// remaining eighth for the generated answer.
    pub fn for_model(model: ChatModel) -> Self {
        Self {
            limit: model.max_context_tokens() * 7 / 8,
        }
    }

    /// Caller-supplied ceiling.
    pub fn explicit(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Reject a prompt that does not fit. A count exactly at the limit
    /// proceeds.
    pub fn check(&self, count: usize) -> Result<(), Error> {
        if count > self.limit {
            return Err(Error::BudgetExceeded {
                count,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_is_seven_eighths_of_context() {
        assert_eq!(TokenBudget::for_model(ChatModel::Gpt35Turbo).limit(), 3_584);
        assert_eq!(TokenBudget::for_model(ChatModel::Gpt4).limit(), 7_168);
    }

    #[test]
    fn test_over_budget_reports_count_and_limit() {
        let budget = TokenBudget::explicit(10);
        match budget.check(11) {
            Err(Error::BudgetExceeded { count, limit }) => {
                assert_eq!(count, 11);
                assert_eq!(limit, 10);
            }
            other => panic!("expected BudgetExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_exactly_at_budget_proceeds() {
        let budget = TokenBudget::explicit(10);
        assert!(budget.check(10).is_ok());
        assert!(budget.check(0).is_ok());
    }
}
