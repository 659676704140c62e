use chrono::NaiveDate;

use super::{
    account::{Account, AccountVariant},
    customer::Customer,
    error::{Error, Result},
};

/// In-memory state for one run: every registered customer and every open
/// account. Accounts are stored once, globally; customers refer to them by
/// number.
#[derive(Debug, Default)]
pub struct Bank {
    customers: Vec<Customer>,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer; tax ids are unique across the bank.
    pub fn register_customer(
        &mut self,
        name: String,
        birth_date: NaiveDate,
        tax_id: String,
        address: String,
    ) -> Result<()> {
        if self.find_customer(&tax_id).is_some() {
            return Err(Error::DuplicateTaxId { tax_id });
        }
        self.customers
            .push(Customer::new(name, birth_date, tax_id, address));
        Ok(())
    }

    pub fn find_customer(&self, tax_id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.tax_id == tax_id)
    }

    /// Opens an account for the customer, assigning the next sequential
    /// number (starting at 1), and returns that number.
    pub fn open_account(&mut self, tax_id: &str, variant: AccountVariant) -> Result<u32> {
        let number = self.accounts.len() as u32 + 1;
        let customer = self
            .customers
            .iter_mut()
            .find(|customer| customer.tax_id == tax_id)
            .ok_or_else(|| Error::CustomerNotFound {
                tax_id: tax_id.to_string(),
            })?;
        customer.add_account(number);
        self.accounts
            .push(Account::open(number, tax_id.to_string(), variant));
        Ok(number)
    }

    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.number() == number)
    }

    pub fn account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The customer's accounts, in the order they were opened.
    pub fn accounts_of(&self, customer: &Customer) -> Vec<&Account> {
        customer
            .accounts()
            .iter()
            .filter_map(|number| self.account(*number))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 3, 15).unwrap()
    }

    fn register(bank: &mut Bank, name: &str, tax_id: &str) {
        bank.register_customer(
            name.to_string(),
            birth_date(),
            tax_id.to_string(),
            "Main St, 1 - Center - Springfield/SP".to_string(),
        )
        .unwrap();
    }

    #[test]
    fn test_register_rejects_duplicate_tax_id() {
        let mut bank = Bank::new();
        register(&mut bank, "First", "11122233344");

        let outcome = bank.register_customer(
            "Second".to_string(),
            birth_date(),
            "11122233344".to_string(),
            "Elsewhere".to_string(),
        );

        assert!(matches!(outcome, Err(Error::DuplicateTaxId { .. })));
        assert_eq!(bank.find_customer("11122233344").unwrap().name, "First");
    }

    #[test]
    fn test_account_numbers_are_sequential_across_customers() {
        let mut bank = Bank::new();
        register(&mut bank, "Ana", "11122233344");
        register(&mut bank, "Bia", "55566677788");

        let first = bank
            .open_account("11122233344", AccountVariant::checking())
            .unwrap();
        let second = bank
            .open_account("55566677788", AccountVariant::savings())
            .unwrap();
        let third = bank
            .open_account("11122233344", AccountVariant::savings())
            .unwrap();

        assert_eq!((first, second, third), (1, 2, 3));
        let numbers: Vec<u32> = bank.accounts().iter().map(Account::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_open_account_requires_a_registered_customer() {
        let mut bank = Bank::new();

        let outcome = bank.open_account("00000000000", AccountVariant::checking());

        assert!(matches!(outcome, Err(Error::CustomerNotFound { .. })));
        assert!(bank.accounts().is_empty());
    }

    #[test]
    fn test_open_account_links_customer_and_account() {
        let mut bank = Bank::new();
        register(&mut bank, "Ana", "11122233344");

        let number = bank
            .open_account("11122233344", AccountVariant::checking())
            .unwrap();

        let customer = bank.find_customer("11122233344").unwrap();
        assert_eq!(customer.accounts(), [number]);
        assert_eq!(bank.account(number).unwrap().owner_tax_id(), "11122233344");
    }

    #[test]
    fn test_accounts_of_lists_only_that_customer() {
        let mut bank = Bank::new();
        register(&mut bank, "Ana", "11122233344");
        register(&mut bank, "Bia", "55566677788");
        bank.open_account("11122233344", AccountVariant::checking())
            .unwrap();
        bank.open_account("55566677788", AccountVariant::savings())
            .unwrap();
        bank.open_account("11122233344", AccountVariant::savings())
            .unwrap();

        let ana = bank.find_customer("11122233344").unwrap();
        let numbers: Vec<u32> = bank
            .accounts_of(ana)
            .iter()
            .map(|account| account.number())
            .collect();

        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_deposits_land_on_the_selected_account() {
        let mut bank = Bank::new();
        register(&mut bank, "Ana", "11122233344");
        let first = bank
            .open_account("11122233344", AccountVariant::checking())
            .unwrap();
        let second = bank
            .open_account("11122233344", AccountVariant::savings())
            .unwrap();

        bank.account_mut(second)
            .unwrap()
            .deposit(dec!(250))
            .unwrap();

        assert_eq!(bank.account(first).unwrap().balance(), Decimal::ZERO);
        assert_eq!(bank.account(second).unwrap().balance(), dec!(250));
    }
}
