pub mod check;
pub mod extract;
