pub mod collector;
pub mod types;

pub use collector::{ConnectivitySource, HttpConnectivitySource, NetworkCollector};
pub use types::NetworkStatus;
