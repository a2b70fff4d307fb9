pub mod fixtures;
pub mod run;

pub use fixtures::{access_line, fixture_path};
pub use run::TestRun;
