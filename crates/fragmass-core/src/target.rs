//! The passive per-target metadata record.
//!
//! A [`Target`] carries the immutable description of one quantification
//! target: an optional display name, a numeric id, the sequence length, and
//! two ordered sets of bias-correction indices. The record has no behavior;
//! the surrounding pipeline writes it once and reads it back verbatim.
//!
//! Wire layout is a 4-byte big-endian payload length followed by a bincode
//! payload. Field presence survives the round trip: the two required fields
//! ride the wire as options and a record missing either is rejected at
//! decode time.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_TARGET_RECORD_SIZE;
use crate::error::TargetError;

/// Immutable metadata for one target.
///
/// `id` and `length` are required; `name` is optional; the bias index
/// sequences may be empty but their element order is significant and
/// preserved by the codec.
#[derive(
    Serialize, Deserialize, Clone, Debug, PartialEq, Eq,
    bincode::Encode, bincode::Decode,
)]
pub struct Target {
    /// Human-readable target name, if one was assigned.
    pub name: Option<String>,
    /// Numeric target id, unique within a target set.
    pub id: u32,
    /// Target sequence length in bases.
    pub length: u32,
    /// Bias-correction indices for the left (5') end, in pipeline order.
    pub bias_indices_l: Vec<u32>,
    /// Bias-correction indices for the right (3') end, in pipeline order.
    pub bias_indices_r: Vec<u32>,
}

/// Wire form of [`Target`]: required fields are options so that presence
/// is observable after decode.
#[derive(bincode::Encode, bincode::Decode)]
struct TargetWire {
    name: Option<String>,
    id: Option<u32>,
    length: Option<u32>,
    bias_indices_l: Vec<u32>,
    bias_indices_r: Vec<u32>,
}

impl Target {
    /// Encode this record as a 4-byte big-endian length prefix + bincode payload.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::OversizedRecord`] if the payload exceeds
    /// [`MAX_TARGET_RECORD_SIZE`], or [`TargetError::MalformedPayload`] on an
    /// encoder failure.
    pub fn encode(&self) -> Result<Vec<u8>, TargetError> {
        let wire = TargetWire {
            name: self.name.clone(),
            id: Some(self.id),
            length: Some(self.length),
            bias_indices_l: self.bias_indices_l.clone(),
            bias_indices_r: self.bias_indices_r.clone(),
        };
        let payload = bincode::encode_to_vec(&wire, bincode::config::standard())
            .map_err(|e| TargetError::MalformedPayload(e.to_string()))?;
        if payload.len() > MAX_TARGET_RECORD_SIZE {
            return Err(TargetError::OversizedRecord {
                size: payload.len(),
                max: MAX_TARGET_RECORD_SIZE,
            });
        }
        let mut out = Vec::with_capacity(4 + payload.len());
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        out.extend_from_slice(&payload);
        Ok(out)
    }

    /// Decode one record from the front of `data`.
    ///
    /// Returns the record and the total number of bytes consumed (prefix +
    /// payload), so concatenated records can be read back to back.
    ///
    /// # Errors
    ///
    /// - [`TargetError::Truncated`] if `data` is shorter than the prefix or
    ///   the declared payload length.
    /// - [`TargetError::OversizedRecord`] if the declared length exceeds
    ///   [`MAX_TARGET_RECORD_SIZE`].
    /// - [`TargetError::MalformedPayload`] if the payload does not decode.
    /// - [`TargetError::MissingField`] if `id` or `length` is absent.
    pub fn decode(data: &[u8]) -> Result<(Self, usize), TargetError> {
        if data.len() < 4 {
            return Err(TargetError::Truncated { need: 4, have: data.len() });
        }
        let len = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
        if len > MAX_TARGET_RECORD_SIZE {
            return Err(TargetError::OversizedRecord { size: len, max: MAX_TARGET_RECORD_SIZE });
        }
        let total = 4 + len;
        if data.len() < total {
            return Err(TargetError::Truncated { need: total, have: data.len() });
        }
        let (wire, consumed): (TargetWire, usize) =
            bincode::decode_from_slice(&data[4..total], bincode::config::standard())
                .map_err(|e| TargetError::MalformedPayload(e.to_string()))?;
        if consumed != len {
            return Err(TargetError::MalformedPayload(format!(
                "trailing bytes in payload: decoded {consumed} of {len}"
            )));
        }
        let id = wire.id.ok_or(TargetError::MissingField("id"))?;
        let length = wire.length.ok_or(TargetError::MissingField("length"))?;
        Ok((
            Self {
                name: wire.name,
                id,
                length,
                bias_indices_l: wire.bias_indices_l,
                bias_indices_r: wire.bias_indices_r,
            },
            total,
        ))
    }
}
