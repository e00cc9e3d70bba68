use rust_decimal_macros::dec;

use crate::modules::accounts::core::account::Account;

/// Demonstration records loaded when the service starts with seeding enabled.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account::new(123456789, 987654321, "George Baird", dec!(354.23)),
        Account::new(121212121, 888777666, "Mary Taylor", dec!(560.03)),
        Account::new(545454545, 222444999, "Diana Rigg", dec!(422.00)),
    ]
}
