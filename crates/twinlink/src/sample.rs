/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// src/sample.rs
// Telemetry sample type and inbound payload parsing.
//
// Payloads on the wire are UTF-8 text representations of decimal
// numbers. Parsing tolerates surrounding whitespace; anything else is
// a PayloadParse error and the sample is dropped upstream.

use chrono::{DateTime, Utc};

use crate::errors::TwinLinkError;

// Cap on how much of a bad payload is echoed back in errors and
// status text.
const PAYLOAD_DISPLAY_LIMIT: usize = 64;

// TelemetrySample is one decoded telemetry value. Immutable once
// constructed; the next sample overwrites it in the ValueChannel.
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetrySample {
    // value is the decoded numeric payload.
    pub value: f64,
    // received_at is when the message callback decoded the payload,
    // not a broker or publisher timestamp.
    pub received_at: DateTime<Utc>,
}

impl TelemetrySample {
    // now creates a sample stamped with the current wall-clock time.
    pub fn now(value: f64) -> Self {
        Self {
            value,
            received_at: Utc::now(),
        }
    }
}

// parse_payload decodes a raw publish payload as UTF-8 text and parses
// it as a float. Matches the tolerance of the publishing side: leading
// and trailing whitespace is accepted, everything else is an error.
pub fn parse_payload(payload: &[u8]) -> Result<f64, TwinLinkError> {
    let text = std::str::from_utf8(payload).map_err(|err| TwinLinkError::PayloadParse {
        payload: display_payload(payload),
        reason: err.to_string(),
    })?;
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|err| TwinLinkError::PayloadParse {
            payload: display_payload(payload),
            reason: err.to_string(),
        })
}

// display_payload renders a payload for status text, lossily decoded
// and truncated so a hostile publisher cannot flood the status stream.
pub(crate) fn display_payload(payload: &[u8]) -> String {
    let text = String::from_utf8_lossy(payload);
    if text.chars().count() <= PAYLOAD_DISPLAY_LIMIT {
        text.into_owned()
    } else {
        let truncated: String = text.chars().take(PAYLOAD_DISPLAY_LIMIT).collect();
        format!("{truncated}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_payload(b"3.5").unwrap(), 3.5);
        assert_eq!(parse_payload(b"-12").unwrap(), -12.0);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(parse_payload(b" 7.25 \n").unwrap(), 7.25);
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = parse_payload(b"not_a_number").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let err = parse_payload(&[0xff, 0xfe, 0x31]).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_display_payload_truncates() {
        let long = "x".repeat(200);
        let shown = display_payload(long.as_bytes());
        assert!(shown.chars().count() < 70);
        assert!(shown.ends_with('…'));
    }
}
