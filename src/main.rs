mod domain;
mod error;
mod menu;

use domain::bank::Bank;

fn main() -> error::Result<()> {
    let mut bank = Bank::new();
    menu::run(&mut bank)
}
