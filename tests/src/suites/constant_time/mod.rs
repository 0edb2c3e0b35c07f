//! Wall-clock timing comparison between two classes of secret inputs


pub use config::TestConfig;
pub use tester::{TimingAnalysis, TimingTester};
