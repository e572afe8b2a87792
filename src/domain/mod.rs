pub mod banknote;
pub mod card;
pub mod deposit;
pub mod withdrawal;
