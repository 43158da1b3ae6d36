mod dao;
mod stake_pool;
mod token_account;
mod validator_list;

pub use dao::*;
pub use stake_pool::*;
pub use token_account::*;
pub use validator_list::*;
