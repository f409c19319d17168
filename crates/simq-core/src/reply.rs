//! Static user-facing reply templates.
//!
//! Upstream failures never surface structured errors to the chat; the
//! service picks one of these per (provider, stage).

pub const INVALID_ICCID: &str =
    "Please send a valid ICCID: a string of digits starting with 89.";

pub const CMLINK_LOGIN_FAILED: &str = "CMLink login failed, please try again later.";
pub const CMLINK_TOKEN_FAILED: &str =
    "Could not obtain a CMLink access token, please try again later.";
pub const CMLINK_NETWORK_ERROR: &str =
    "Network error while querying CMLink, please try again later.";

pub const HK3_MSISDN_FAILED: &str =
    "Could not retrieve the MSISDN, please check the ICCID.";
pub const HK3_NETWORK_ERROR: &str = "Network error while querying 3HK, please try again later.";

pub const HOLAFLY_NETWORK_ERROR: &str =
    "Network error while querying Holafly, please try again later.";

pub const GENERIC_ERROR: &str = "Something went wrong, please try again later.";
