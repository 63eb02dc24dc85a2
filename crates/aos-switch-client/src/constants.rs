// REST path constants and defaults for the ArubaOS-Switch API

pub mod rest_path {
    /// Prefix between the origin and the version tag
    pub const REST_PREFIX: &str = "/rest/";

    // Session
    pub const LOGIN_SESSIONS: &str = "/login-sessions";

    // Command execution
    pub const CLI: &str = "/cli";
}

pub mod defaults {
    pub const USERNAME: &str = "manager";
    pub const PASSWORD: &str = "";
}

pub mod env_var {
    pub const ORIGIN: &str = "ARUBAOS_SWITCH_ORIGIN";
    pub const VERSION: &str = "ARUBAOS_SWITCH_VERSION";
    pub const USERNAME: &str = "ARUBAOS_SWITCH_USERNAME";
    pub const PASSWORD: &str = "ARUBAOS_SWITCH_PASSWORD";
}

/// `status` value the CLI endpoint reports for a command that ran cleanly
pub const CLI_STATUS_SUCCESS: &str = "CCS_SUCCESS";
