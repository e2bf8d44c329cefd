pub mod arrays;
pub mod list;
pub mod lookup;

#[cfg(test)]
mod lookup_tests;
