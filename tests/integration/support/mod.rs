mod directory_fixture;
mod refiners;

pub use directory_fixture::DirectoryFixture;
pub use refiners::{CountingRefiner, PassthroughRefiner, RewritingRefiner};
