pub mod demo;
pub mod fuzz;
pub mod inspect;
pub mod printer;
pub mod replay;

pub use fuzz::{FuzzInput, FuzzReport};
pub use inspect::{Family, Values};
pub use printer::Printer;
