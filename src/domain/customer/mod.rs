use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub name: String,
    pub birth_date: NaiveDate,
    pub tax_id: String,
    pub address: String,
    accounts: Vec<u32>,
}

impl Customer {
    pub fn new(name: String, birth_date: NaiveDate, tax_id: String, address: String) -> Self {
        Self {
            name,
            birth_date,
            tax_id,
            address,
            accounts: Vec::new(),
        }
    }

    /// Numbers of the accounts this customer owns, in opening order.
    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }

    pub fn add_account(&mut self, number: u32) {
        self.accounts.push(number);
    }
}
