pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use fixtures::extract::ExtractFile;

pub mod prelude {
    pub use crate::{fixtures::factory, ExtractFile, TestBuilder, TestContext, TestError};
}
