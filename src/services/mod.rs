pub mod activity;
pub mod process;

#[cfg(test)]
mod tests;

pub use activity::*;
pub use process::*;
