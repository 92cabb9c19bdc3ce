/// Notice generation domain - pure logic behind the NOTICE document
///
/// Nothing in here touches the file system; license files reach it as bytes
/// through the outbound ports.
pub mod domain;
pub mod policies;
pub mod services;
