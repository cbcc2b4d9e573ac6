#![doc = include_str!("../README.md")]

pub mod config;
pub mod dialect;
pub mod endtime;
pub mod error;
pub mod mapper;
pub mod priority;
pub mod sender;
pub mod timestamp;

pub use config::{ForwarderConfig, ForwarderConfigBuilder, TransportKind};
pub use dialect::Dialect;
pub use error::ForwarderError;
pub use mapper::remap_fields;
pub use priority::{Facility, Level, WIRE_PRIORITY, priority};
pub use sender::{APPLICATION, SyslogForwarder};
pub use timestamp::{SENTINEL_HOSTNAME, resolve_hostname, resolve_timestamp};
