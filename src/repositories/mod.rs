pub mod user;

#[cfg(test)]
pub mod memory;
