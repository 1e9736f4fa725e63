pub mod clock;
pub mod congestion;
pub mod driver;
pub mod error;
pub mod rate;
pub mod sender;
pub mod trace;
pub mod transport;
mod utils;

pub use congestion::{CongestionController, CongestionRegistry, CongestionState};
pub use rate::DataRate;
pub use sender::{AdaptiveSender, SenderConfig, SenderPhase};
