pub mod balance;
pub mod wallet;
