use crate::{codec, parse, vector::Vector, Result, VectorError};
use std::io::{Read, Write};

/// Contract a host environment expects from a pluggable scalar value type.
///
/// The binary payload carries no null flag; a host that persists values
/// tracks null-ness itself and only calls the payload methods for
/// present values. Writing the payload of a null value is an error.
pub trait HostValue: Sized {
    fn null() -> Self;
    fn is_null(&self) -> bool;
    fn parse_text(text: Option<&str>) -> Result<Self>;
    /// `None` for the null value.
    fn to_text(&self) -> Option<String>;
    fn write_payload<W: Write>(&self, writer: &mut W) -> Result<()>;
    fn read_payload<R: Read>(reader: &mut R) -> Result<Self>;
}

impl HostValue for Vector {
    fn null() -> Self {
        Vector::Null
    }

    fn is_null(&self) -> bool {
        Vector::is_null(self)
    }

    fn parse_text(text: Option<&str>) -> Result<Self> {
        parse::parse_vector(text)
    }

    fn to_text(&self) -> Option<String> {
        self.values().map(crate::format::format_values)
    }

    fn write_payload<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self.values() {
            Some(data) => codec::write_payload(writer, data),
            None => Err(VectorError::CorruptDataError(
                "null vector has no payload".to_string(),
            )),
        }
    }

    fn read_payload<R: Read>(reader: &mut R) -> Result<Self> {
        codec::read_payload(reader)
    }
}
