//! Binary payload codec.
//!
//! Layout, little-endian, no padding:
//!
//! ```text
//! i32 count | count x f32
//! ```
//!
//! The payload carries no null flag. [`encode_nullable`] and
//! [`decode_nullable`] add a leading presence byte for callers that must
//! persist the null state themselves.

use crate::{vector::Vector, Result, VectorError};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Cursor, Read, Write};
use tracing::{debug, trace};

const COUNT_SIZE: usize = 4;
const ELEMENT_SIZE: usize = 4;

const TAG_NULL: u8 = 0x00;
const TAG_PRESENT: u8 = 0x01;

// Upper bound on capacity reserved before elements have actually been read.
const READ_CHUNK: usize = 4096;

/// Size in bytes of the payload for `dimension` elements.
pub fn encoded_len(dimension: usize) -> usize {
    COUNT_SIZE + dimension * ELEMENT_SIZE
}

pub fn write_payload<W: Write>(writer: &mut W, values: &[f32]) -> Result<()> {
    let count = i32::try_from(values.len()).map_err(|_| {
        VectorError::CorruptDataError(format!(
            "dimension {} does not fit the i32 count field",
            values.len()
        ))
    })?;

    writer.write_i32::<LittleEndian>(count)?;
    for value in values {
        writer.write_f32::<LittleEndian>(*value)?;
    }
    Ok(())
}

/// Reads one payload from a stream, consuming exactly its bytes.
pub fn read_payload<R: Read>(reader: &mut R) -> Result<Vector> {
    let count = reader.read_i32::<LittleEndian>().map_err(truncated)?;
    let count = checked_count(count)?;

    let mut data = Vec::with_capacity(count.min(READ_CHUNK));
    for _ in 0..count {
        data.push(reader.read_f32::<LittleEndian>().map_err(truncated)?);
    }

    trace!(dimension = data.len(), "decoded vector");
    Ok(Vector::Values(data))
}

pub fn encode(values: &[f32]) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(encoded_len(values.len()));
    write_payload(&mut buffer, values)?;
    Ok(buffer)
}

/// Decodes a complete payload. The buffer must hold exactly the declared
/// number of elements.
pub fn decode(bytes: &[u8]) -> Result<Vector> {
    if bytes.len() < COUNT_SIZE {
        return Err(corrupt(format!(
            "buffer of {} bytes is too short for the count field",
            bytes.len()
        )));
    }

    let mut cursor = Cursor::new(bytes);
    let count = checked_count(cursor.read_i32::<LittleEndian>()?)?;

    let available = (bytes.len() - COUNT_SIZE) / ELEMENT_SIZE;
    if count > available {
        return Err(corrupt(format!(
            "declared {} elements but only {} are present",
            count, available
        )));
    }
    if encoded_len(count) != bytes.len() {
        return Err(corrupt(format!(
            "{} trailing bytes after {} elements",
            bytes.len() - encoded_len(count),
            count
        )));
    }

    read_payload(&mut cursor)
}

pub fn encode_nullable(vector: &Vector) -> Result<Vec<u8>> {
    match vector {
        Vector::Null => Ok(vec![TAG_NULL]),
        Vector::Values(data) => {
            let mut buffer = Vec::with_capacity(1 + encoded_len(data.len()));
            buffer.push(TAG_PRESENT);
            write_payload(&mut buffer, data)?;
            Ok(buffer)
        }
    }
}

pub fn decode_nullable(bytes: &[u8]) -> Result<Vector> {
    match bytes.split_first() {
        Some((&TAG_NULL, [])) => Ok(Vector::Null),
        Some((&TAG_NULL, rest)) => Err(corrupt(format!(
            "{} bytes follow a null marker",
            rest.len()
        ))),
        Some((&TAG_PRESENT, payload)) => decode(payload),
        Some((tag, _)) => Err(corrupt(format!("unknown presence tag 0x{:02x}", tag))),
        None => Err(corrupt("empty buffer".to_string())),
    }
}

fn checked_count(count: i32) -> Result<usize> {
    usize::try_from(count).map_err(|_| corrupt(format!("negative element count {}", count)))
}

fn truncated(e: io::Error) -> VectorError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        corrupt("payload ended before the declared element count".to_string())
    } else {
        VectorError::Io(e)
    }
}

fn corrupt(message: String) -> VectorError {
    debug!(%message, "rejected binary payload");
    VectorError::CorruptDataError(message)
}
