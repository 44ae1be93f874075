pub mod sink;
pub mod source;

pub use sink::{AlertSink, TicketTracker};
pub use source::MetricSource;
