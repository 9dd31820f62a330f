//! Data Transfer Objects for the VAPI REST API
//!
//! Bodies sent to and received from the vendor service. Field names follow
//! the service's camelCase wire format.

pub mod call;
