pub mod aggregator;
pub mod label;
pub mod label_gate;
pub mod main;
pub mod quality_gate;
pub mod routing;
pub mod run;
pub mod summary;
pub mod verdict;

#[cfg(test)]
mod tests;
