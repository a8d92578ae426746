//! The reference answer file: one little-endian `f64` per pair, in data-set order, followed by
//! the mean of all of them.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use thiserror::Error;

use crate::distance::running_mean;

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("reference answer is empty")]
    Empty,
    #[error("reference answer of {len} bytes is not a multiple of 8")]
    Truncated { len: usize },
    #[error("failed to read or write reference answer: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceAnswer {
    pub distances: Vec<f64>,
    pub mean: f64,
}

/// Writes each distance followed by their running mean, and returns the mean.
pub fn write_answer<W>(mut writer: W, distances: &[f64]) -> Result<f64, AnswerError>
where
    W: Write,
{
    for &distance in distances {
        writer.write_f64::<LittleEndian>(distance)?;
    }

    let mean = running_mean(distances.iter().copied());
    writer.write_f64::<LittleEndian>(mean)?;
    writer.flush()?;

    tracing::debug!(count = distances.len(), mean, "wrote reference answer");
    Ok(mean)
}

pub fn read_answer<R>(mut reader: R) -> Result<ReferenceAnswer, AnswerError>
where
    R: Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.is_empty() {
        return Err(AnswerError::Empty);
    }
    if bytes.len() % 8 != 0 {
        return Err(AnswerError::Truncated { len: bytes.len() });
    }

    let mut values = Vec::with_capacity(bytes.len() / 8);
    let mut cursor = bytes.as_slice();
    while !cursor.is_empty() {
        values.push(cursor.read_f64::<LittleEndian>()?);
    }

    // Non-empty, so there is always a trailing mean.
    let mean = values.pop().unwrap_or_default();
    Ok(ReferenceAnswer {
        distances: values,
        mean,
    })
}
