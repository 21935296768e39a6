//! crates/talentos_core/src/staff.rs
//!
//! Demo-only login for the company dashboards. Two literal credential pairs
//! are accepted. This is a stub, not an authentication mechanism: there is
//! no hashing, no session and no lockout.

use crate::ports::{PortError, PortResult};
use serde::Serialize;
use tracing::{info, warn};

pub const INVALID_CREDENTIALS: &str =
    "Invalid credentials. Please use admin/admin or manager/manager";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Admin,
    Manager,
}

pub fn mock_login(username: &str, password: &str) -> PortResult<StaffRole> {
    let role = match (username, password) {
        ("admin", "admin") => StaffRole::Admin,
        ("manager", "manager") => StaffRole::Manager,
        _ => {
            warn!("Rejected demo login for '{}'.", username);
            return Err(PortError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }
    };
    info!("Demo login as {:?}.", role);
    Ok(role)
}
