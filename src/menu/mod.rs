use std::io::{self, Write};

use chrono::NaiveDate;
use itertools::Itertools;
use rust_decimal::Decimal;

use crate::{
    domain::{
        account::{Account, AccountVariant, AGENCY},
        bank::Bank,
        error::Error as BusinessError,
        transaction::Transaction,
    },
    error::{Error, Result},
};

const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew customer
[q]\tQuit
=> ";

const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Runs the interactive session until the operator quits or stdin ends.
///
/// Business failures abort only the current flow; the menu is shown again.
/// Terminal failures other than end of file are fatal.
pub fn run(bank: &mut Bank) -> Result<()> {
    loop {
        let option = match prompt(MENU) {
            Ok(option) => option,
            Err(failure) if is_eof(&failure) => break,
            Err(failure) => return Err(failure),
        };
        if option == "q" {
            println!("Thank you for using our system!");
            break;
        }
        match dispatch(bank, &option) {
            Ok(()) => {}
            Err(failure) if is_eof(&failure) => break,
            Err(failure @ Error::TerminalError(_)) => return Err(failure),
            Err(failure) => println!("Operation failed: {failure}"),
        }
    }
    Ok(())
}

fn dispatch(bank: &mut Bank, option: &str) -> Result<()> {
    match option {
        "d" => deposit(bank),
        "s" => withdraw(bank),
        "e" => statement(bank),
        "nc" => open_account(bank),
        "lc" => list_accounts(bank),
        "nu" => register_customer(bank),
        _ => {
            println!("Invalid option, please select the desired operation again.");
            Ok(())
        }
    }
}

fn is_eof(failure: &Error) -> bool {
    matches!(
        failure,
        Error::TerminalError(source) if source.kind() == io::ErrorKind::UnexpectedEof
    )
}

fn deposit(bank: &mut Bank) -> Result<()> {
    let number = select_account(bank)?;
    let amount = read_amount("Amount to deposit: ")?;
    transact(bank, number, Transaction::deposit(amount))
}

fn withdraw(bank: &mut Bank) -> Result<()> {
    let number = select_account(bank)?;
    let amount = read_amount("Amount to withdraw: ")?;
    transact(bank, number, Transaction::withdrawal(amount))
}

fn transact(bank: &mut Bank, number: u32, transaction: Transaction) -> Result<()> {
    let account = bank
        .account_mut(number)
        .ok_or(BusinessError::AccountNotFound)?;
    transaction.apply(account)?;
    println!(
        "=== {} of R$ {:.2} completed ===",
        transaction.kind, transaction.amount
    );
    println!("Current balance: R$ {:.2}", account.balance());
    Ok(())
}

fn statement(bank: &Bank) -> Result<()> {
    let number = select_account(bank)?;
    let account = bank
        .account(number)
        .ok_or(BusinessError::AccountNotFound)?;

    println!("================ STATEMENT ================");
    let ledger = account.ledger();
    if ledger.is_empty() {
        println!("No transactions recorded.");
    } else {
        println!("{}", ledger.entries().iter().join("\n"));
    }
    println!("Current balance: R$ {:.2}", account.balance());
    println!("{}", "=".repeat(42));
    Ok(())
}

fn open_account(bank: &mut Bank) -> Result<()> {
    let tax_id = prompt("Customer tax id: ")?;
    if bank.find_customer(&tax_id).is_none() {
        return Err(BusinessError::CustomerNotFound { tax_id }.into());
    }

    println!("[1]\tChecking");
    println!("[2]\tSavings");
    let variant = match read_number("Account type: ")? {
        1 => AccountVariant::checking(),
        2 => AccountVariant::savings(),
        _ => {
            println!("Invalid option, account not created.");
            return Ok(());
        }
    };

    let number = bank.open_account(&tax_id, variant)?;
    println!("=== Account {number} created ===");
    println!("Type:\t\t{}", variant.label());
    println!("Balance:\tR$ {:.2}", Decimal::ZERO);
    Ok(())
}

fn list_accounts(bank: &Bank) -> Result<()> {
    if bank.accounts().is_empty() {
        println!("No accounts registered.");
        return Ok(());
    }
    for account in bank.accounts() {
        println!("{}", "=".repeat(100));
        print_card(bank, account);
    }
    Ok(())
}

fn print_card(bank: &Bank, account: &Account) {
    let holder = bank
        .find_customer(account.owner_tax_id())
        .map_or("unknown", |customer| customer.name.as_str());
    println!("Type:\t\t{}", account.variant().label());
    println!("Agency:\t\t{AGENCY}");
    println!("Number:\t\t{}", account.number());
    println!("Holder:\t\t{holder}");
    println!("Balance:\tR$ {:.2}", account.balance());
}

fn register_customer(bank: &mut Bank) -> Result<()> {
    let tax_id = prompt("Customer tax id (numbers only): ")?;
    if bank.find_customer(&tax_id).is_some() {
        return Err(BusinessError::DuplicateTaxId { tax_id }.into());
    }

    let name = prompt("Full name: ")?;
    let birth_date = read_date("Birth date (dd-mm-yyyy): ")?;
    let address = prompt("Address (street, number - district - city/state): ")?;

    bank.register_customer(name, birth_date, tax_id, address)?;
    println!("=== Customer registered ===");
    Ok(())
}

/// Asks for a tax id and for one of that customer's accounts, echoing the
/// balance of the chosen one. Returns the account number so the caller can
/// borrow the account mutably afterwards.
fn select_account(bank: &Bank) -> Result<u32> {
    let tax_id = prompt("Customer tax id: ")?;
    let customer = bank
        .find_customer(&tax_id)
        .ok_or(BusinessError::CustomerNotFound { tax_id })?;

    let accounts = bank.accounts_of(customer);
    if accounts.is_empty() {
        return Err(BusinessError::AccountNotFound.into());
    }
    println!("Available accounts:");
    for (position, account) in accounts.iter().enumerate() {
        println!("[{}] {account}", position + 1);
    }

    let index = read_number("Select an account (number): ")?;
    let account = index
        .checked_sub(1)
        .and_then(|position| accounts.get(position))
        .ok_or(BusinessError::AccountNotFound)?;
    println!("Current balance: R$ {:.2}", account.balance());
    Ok(account.number())
}

/// Prints the message without a newline and reads one trimmed line.
/// Reaching end of file surfaces as an [`io::ErrorKind::UnexpectedEof`]
/// terminal error.
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(input.trim().to_string())
}

fn read_amount(message: &str) -> Result<Decimal> {
    let text = prompt(message)?;
    text.parse().map_err(|_| Error::MalformedInput {
        expected: "a decimal amount",
    })
}

fn read_number(message: &str) -> Result<usize> {
    let text = prompt(message)?;
    text.parse()
        .map_err(|_| Error::MalformedInput { expected: "a number" })
}

fn read_date(message: &str) -> Result<NaiveDate> {
    let text = prompt(message)?;
    NaiveDate::parse_from_str(&text, BIRTH_DATE_FORMAT).map_err(|_| Error::MalformedInput {
        expected: "a date in dd-mm-yyyy format",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_is_not_fatal() {
        let mut bank = Bank::new();

        assert!(dispatch(&mut bank, "zz").is_ok());
    }

    #[test]
    fn test_only_eof_terminal_errors_end_the_session() {
        let eof = Error::TerminalError(io::Error::from(io::ErrorKind::UnexpectedEof));
        let broken = Error::TerminalError(io::Error::from(io::ErrorKind::BrokenPipe));
        let business = Error::BusinessError(BusinessError::AccountNotFound);

        assert!(is_eof(&eof));
        assert!(!is_eof(&broken));
        assert!(!is_eof(&business));
    }
}
