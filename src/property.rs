//! `name: value` property printing.
//!
//! Composite values (anything that serializes to a map, struct or sequence)
//! are rendered as indented JSON on the lines below the name. Scalars keep
//! their plain text form.

use std::fmt::Display;
use std::io::Write;

use serde::Serialize;
use serde::ser::{self, Error as _};
use thiserror::Error;

use crate::console::Console;
use crate::error::Result;
use crate::terminal::{LINE_ENDING, write_plain};

/// Text printed for an absent value.
pub const NULL_TEXT: &str = "null";

/// Text shown after `name: ` for `value`.
pub fn display_value<T>(value: Option<&T>, prevent_serialize: bool) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let Some(value) = value else {
        return Ok(NULL_TEXT.to_owned());
    };

    match value.serialize(ScalarText) {
        Ok(text) => Ok(text),
        Err(Classify::Composite) if prevent_serialize => Ok(serde_json::to_string(value)?),
        Err(Classify::Composite) => {
            let pretty = serde_json::to_string_pretty(value)?;
            Ok(format!("{LINE_ENDING}{}", pretty.replace('\n', LINE_ENDING)))
        }
        Err(Classify::Custom(msg)) => Err(serde_json::Error::custom(msg).into()),
    }
}

/// Why [`ScalarText`] produced no text.
#[derive(Debug, Error)]
enum Classify {
    #[error("composite value")]
    Composite,
    #[error("{0}")]
    Custom(String),
}

impl ser::Error for Classify {
    fn custom<T: Display>(msg: T) -> Self {
        Classify::Custom(msg.to_string())
    }
}

/// Serializer that renders primitives as their `Display` text and rejects
/// everything with fields or elements as [`Classify::Composite`].
struct ScalarText;

fn text(value: impl Display) -> std::result::Result<String, Classify> {
    Ok(value.to_string())
}

impl ser::Serializer for ScalarText {
    type Ok = String;
    type Error = Classify;
    type SerializeSeq = ser::Impossible<String, Classify>;
    type SerializeTuple = ser::Impossible<String, Classify>;
    type SerializeTupleStruct = ser::Impossible<String, Classify>;
    type SerializeTupleVariant = ser::Impossible<String, Classify>;
    type SerializeMap = ser::Impossible<String, Classify>;
    type SerializeStruct = ser::Impossible<String, Classify>;
    type SerializeStructVariant = ser::Impossible<String, Classify>;

    fn serialize_bool(self, v: bool) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_i8(self, v: i8) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_i16(self, v: i16) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_i32(self, v: i32) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_i64(self, v: i64) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_i128(self, v: i128) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_u8(self, v: u8) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_u16(self, v: u16) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_u32(self, v: u32) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_u64(self, v: u64) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_u128(self, v: u128) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_f32(self, v: f32) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_f64(self, v: f64) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_char(self, v: char) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_str(self, v: &str) -> std::result::Result<String, Classify> {
        text(v)
    }
    fn serialize_bytes(self, _: &[u8]) -> std::result::Result<String, Classify> {
        Err(Classify::Composite)
    }
    fn serialize_none(self) -> std::result::Result<String, Classify> {
        text(NULL_TEXT)
    }
    fn serialize_some<T: Serialize + ?Sized>(
        self,
        value: &T,
    ) -> std::result::Result<String, Classify> {
        value.serialize(self)
    }
    fn serialize_unit(self) -> std::result::Result<String, Classify> {
        text(NULL_TEXT)
    }
    fn serialize_unit_struct(self, _: &'static str) -> std::result::Result<String, Classify> {
        text(NULL_TEXT)
    }
    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
    ) -> std::result::Result<String, Classify> {
        text(variant)
    }
    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> std::result::Result<String, Classify> {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: &T,
    ) -> std::result::Result<String, Classify> {
        Err(Classify::Composite)
    }
    fn serialize_seq(
        self,
        _: Option<usize>,
    ) -> std::result::Result<Self::SerializeSeq, Classify> {
        Err(Classify::Composite)
    }
    fn serialize_tuple(self, _: usize) -> std::result::Result<Self::SerializeTuple, Classify> {
        Err(Classify::Composite)
    }
    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self::SerializeTupleStruct, Classify> {
        Err(Classify::Composite)
    }
    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self::SerializeTupleVariant, Classify> {
        Err(Classify::Composite)
    }
    fn serialize_map(
        self,
        _: Option<usize>,
    ) -> std::result::Result<Self::SerializeMap, Classify> {
        Err(Classify::Composite)
    }
    fn serialize_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self::SerializeStruct, Classify> {
        Err(Classify::Composite)
    }
    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self::SerializeStructVariant, Classify> {
        Err(Classify::Composite)
    }
}

impl<K, W: Write> Console<K, W> {
    /// Print `name: ` in the system color, then the value and a newline in
    /// the default color. `None` prints `null`.
    pub fn print_property<T>(
        &mut self,
        name: &str,
        value: Option<&T>,
        prevent_serialize: bool,
    ) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        // Render before writing anything so a failure leaves no partial line.
        let text = display_value(value, prevent_serialize)?;
        self.system_write(&format!("{name}: "))?;
        write_plain(&mut self.out, &format!("{text}{LINE_ENDING}"))
    }
}
