/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that the CLI uses to interact with
/// the application core.
pub mod notice_port;

pub use notice_port::NoticePort;
