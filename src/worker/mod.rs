pub mod allocator;
pub mod machine;

#[cfg(test)]
mod props;
