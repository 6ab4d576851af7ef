mod failover;
mod invoker;
mod race;
mod strategy;

pub use failover::FailoverStrategy;
pub use invoker::UpstreamInvoker;
pub use race::RaceStrategy;
pub use strategy::ResolutionStrategy;
