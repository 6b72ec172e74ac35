//! Account data model

use rust_decimal::Decimal;

/// Account identifier (primary key, never changes after creation)
pub type AccountId = String;

/// A balance-holding account.
///
/// `account_id` is private so identity cannot change once the account
/// exists. The balance is only mutated by the ledger's transfer path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_id: AccountId,
    balance: Decimal,
}

impl Account {
    /// Create an account with an opening balance
    pub fn new(account_id: impl Into<AccountId>, balance: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            balance,
        }
    }

    /// Read-only access to the account id
    #[inline]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Current balance
    #[inline]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Balance after debiting `amount`, or `None` if it cannot be held exactly.
    pub(crate) fn balance_after_withdraw(&self, amount: Decimal) -> Option<Decimal> {
        exact_sub(self.balance, amount)
    }

    /// Balance after crediting `amount`, or `None` on overflow or rounding.
    pub(crate) fn balance_after_deposit(&self, amount: Decimal) -> Option<Decimal> {
        exact_add(self.balance, amount)
    }

    /// Store a balance computed by `balance_after_withdraw`/`balance_after_deposit`.
    pub(crate) fn commit_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }
}

/// `a + b` without loss.
///
/// `Decimal` arithmetic drops fractional digits when the exact result needs
/// more than 96 bits of mantissa. An exact sum keeps the larger input scale
/// and subtracts back to `a`.
fn exact_add(a: Decimal, b: Decimal) -> Option<Decimal> {
    let sum = a.checked_add(b)?;
    let exact = sum.scale() == a.scale().max(b.scale()) && sum.checked_sub(b) == Some(a);
    exact.then_some(sum)
}

/// `a - b` without loss.
fn exact_sub(a: Decimal, b: Decimal) -> Option<Decimal> {
    let diff = a.checked_sub(b)?;
    let exact = diff.scale() == a.scale().max(b.scale()) && diff.checked_add(b) == Some(a);
    exact.then_some(diff)
}
