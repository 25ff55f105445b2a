#[cfg(feature = "list")]
pub mod result;
#[cfg(test)]
pub mod testing;
