//! End-to-end account scenarios driven through the capability trait, the way
//! an external shell would drive them.

use bankledger_accounts::{Account, BankAccount, OverdraftAccount};
use bankledger_core::{LedgerError, Money};

fn cents(c: i64) -> Money {
    Money::from_cents(c)
}

/// Deposit 500, withdraw 200, then attempt an over-large withdrawal. Works on
/// any account variant.
fn run_session(account: &mut dyn BankAccount) -> Result<(), LedgerError> {
    account.deposit(cents(50_000))?;
    account.withdraw(cents(20_000))?;
    account.withdraw(cents(200_000))
}

#[test]
fn basic_account_session() {
    let mut account = Account::new(cents(100_000)).unwrap();

    account.deposit(cents(50_000)).unwrap();
    assert_eq!(account.balance(), cents(150_000));

    account.withdraw(cents(20_000)).unwrap();
    assert_eq!(account.balance(), cents(130_000));

    let err = account.withdraw(cents(200_000)).unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds(_)));
    assert_eq!(account.balance(), cents(130_000));
}

#[test]
fn both_variants_run_the_same_session() {
    let mut basic = Account::new(cents(100_000)).unwrap();
    let err = run_session(&mut basic).unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds(_)));
    assert_eq!(basic.balance(), cents(130_000));

    // Same session; the only difference is where the withdrawal floor sits.
    let mut overdraft = OverdraftAccount::new(cents(100_000), cents(100_000)).unwrap();
    run_session(&mut overdraft).unwrap();
    assert_eq!(overdraft.balance(), cents(-70_000));
}

#[test]
fn rejected_operations_never_change_state() {
    let mut account = OverdraftAccount::new(cents(1_000), cents(200)).unwrap();

    assert!(account.deposit(cents(-1)).is_err());
    assert!(account.withdraw(cents(-1)).is_err());
    assert!(account.withdraw(cents(1_201)).is_err());

    assert_eq!(account.balance(), cents(1_000));
    assert_eq!(account.overdraft_limit(), cents(200));
}
