pub mod ai;
pub mod engine;
pub mod snapshot;
pub mod state;

#[cfg(test)]
pub(crate) mod tests;
