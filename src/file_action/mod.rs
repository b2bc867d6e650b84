pub mod impl_dry_run;
pub mod impl_fs;
pub mod interface;

#[cfg(test)]
mod tests;
