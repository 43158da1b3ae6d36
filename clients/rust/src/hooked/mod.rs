mod c_option;

pub use c_option::*;
