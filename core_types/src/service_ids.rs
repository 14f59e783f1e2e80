//! Stable service identifiers for the built-in services.

use crate::ServiceId;

const CONSOLE_SERVICE_ID: u128 = 0x2b2f_8f83_4d77_4d6f_9b9f_0d8a_5c2a_9e11u128;
const FACE_SERVICE_ID: u128 = 0x3c1a_1d5e_2f14_4a4a_8e9c_7b3c_19f0_7a22u128;
const MONITOR_SERVICE_ID: u128 = 0x5d8b_2af1_7d2a_4a97_9c4d_2e4b_1c7e_6b33u128;
const SCRIPTING_SERVICE_ID: u128 = 0x91a7_2f0e_c9c3_4d8a_8e76_0e8c_9f0a_2d4bu128;
const SPEECH_SERVICE_ID: u128 = 0xa4e6_0b19_3f52_4c1d_b7a8_6d2f_0e91_5c44u128;

/// Stable service ID for the console service.
pub fn console_service_id() -> ServiceId {
    ServiceId::from_u128(CONSOLE_SERVICE_ID)
}

/// Stable service ID for the face recognition service.
pub fn face_service_id() -> ServiceId {
    ServiceId::from_u128(FACE_SERVICE_ID)
}

/// Stable service ID for the monitor service.
pub fn monitor_service_id() -> ServiceId {
    ServiceId::from_u128(MONITOR_SERVICE_ID)
}

/// Stable service ID for the scripting service.
pub fn scripting_service_id() -> ServiceId {
    ServiceId::from_u128(SCRIPTING_SERVICE_ID)
}

/// Stable service ID for the speech service.
pub fn speech_service_id() -> ServiceId {
    ServiceId::from_u128(SPEECH_SERVICE_ID)
}
