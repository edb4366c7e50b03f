use bankledger_core::{LedgerError, LedgerResult, Money};

use crate::account::{Account, BankAccount, ensure_non_negative};

/// Account variant whose balance may go negative, down to a fixed overdraft
/// limit.
///
/// Composed over [`Account`] rather than inheriting from it: deposits and
/// balance reads pass through unchanged, only the withdrawal rule is replaced.
/// Invariant: `balance >= -overdraft_limit` at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdraftAccount {
    inner: Account,
    overdraft_limit: Money,
}

impl OverdraftAccount {
    /// Opens an account with `initial_balance` and a fixed `overdraft_limit`.
    ///
    /// The balance check is delegated to [`Account::new`]; the limit must
    /// itself be non-negative.
    pub fn new(initial_balance: Money, overdraft_limit: Money) -> LedgerResult<Self> {
        let inner = Account::new(initial_balance)?;
        ensure_non_negative(overdraft_limit, "overdraft limit")?;
        Ok(Self {
            inner,
            overdraft_limit,
        })
    }

    /// The fixed overdraft limit. No side effects.
    pub fn overdraft_limit(&self) -> Money {
        self.overdraft_limit
    }
}

impl BankAccount for OverdraftAccount {
    fn deposit(&mut self, amount: Money) -> LedgerResult<()> {
        self.inner.deposit(amount)
    }

    fn withdraw(&mut self, amount: Money) -> LedgerResult<()> {
        ensure_non_negative(amount, "withdrawal amount")?;
        if amount > self.inner.balance() + self.overdraft_limit {
            return Err(LedgerError::insufficient_funds(
                "insufficient balance and overdraft limit exceeded",
            ));
        }
        // This check is the effective gate; the base floor check must not run
        // again or in-limit overdrafts would be rejected.
        self.inner.debit(amount);
        Ok(())
    }

    fn balance(&self) -> Money {
        self.inner.balance()
    }
}
