pub mod helpers;

pub use context::TestContext;
