pub mod correction;
pub mod detection;
pub mod extraction;
pub mod geometry;
pub mod imaging;
pub mod pipeline;
pub mod shared;

#[cfg(test)]
mod test_support;
