use bankledger_core::{LedgerError, LedgerResult, Money};

/// Capability contract shared by every account variant.
///
/// Callers (CLI, GUI shells, tests) hold `&mut dyn BankAccount` or a generic
/// and stay oblivious to which variant they drive; the variants differ only in
/// where the withdrawal floor sits.
pub trait BankAccount {
    /// Adds `amount` to the balance. Rejects negative amounts; no upper bound.
    fn deposit(&mut self, amount: Money) -> LedgerResult<()>;

    /// Removes `amount` from the balance, subject to the variant's floor.
    fn withdraw(&mut self, amount: Money) -> LedgerResult<()>;

    /// Current balance. No side effects.
    fn balance(&self) -> Money;
}

/// Basic account: the balance never goes below zero.
///
/// Single-state value holder with guarded mutation — every mutation passes
/// through the non-negativity validation first, so no sequence of operations
/// can leave the balance negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    balance: Money,
}

impl Account {
    /// Opens an account with `initial_balance`.
    pub fn new(initial_balance: Money) -> LedgerResult<Self> {
        ensure_non_negative(initial_balance, "initial balance")?;
        Ok(Self {
            balance: initial_balance,
        })
    }

    /// Unconditional decrement, for use after a variant's own floor check has
    /// already passed.
    pub(crate) fn debit(&mut self, amount: Money) {
        self.balance -= amount;
    }
}

impl BankAccount for Account {
    fn deposit(&mut self, amount: Money) -> LedgerResult<()> {
        ensure_non_negative(amount, "deposit amount")?;
        self.balance += amount;
        Ok(())
    }

    fn withdraw(&mut self, amount: Money) -> LedgerResult<()> {
        ensure_non_negative(amount, "withdrawal amount")?;
        if amount > self.balance {
            return Err(LedgerError::insufficient_funds("insufficient balance"));
        }
        self.debit(amount);
        Ok(())
    }

    fn balance(&self) -> Money {
        self.balance
    }
}

/// The shared amount-validation rule: every monetary input is rejected if
/// negative, with a reason naming the rejected input.
pub(crate) fn ensure_non_negative(amount: Money, what: &str) -> LedgerResult<()> {
    if amount.is_negative() {
        return Err(LedgerError::invalid_amount(format!(
            "{what} cannot be negative"
        )));
    }
    Ok(())
}
