//! Declarative header layouts.
//!
//! A [`HeaderLayout`] lists the fixed fields of a header in wire order, plus
//! an optional fixed-width [`Trailer`] whose interpretation is chosen by the
//! raw value of an earlier discriminant field. The trailer always consumes
//! its full width: variants reinterpret those bytes but never resize them.

use smallvec::SmallVec;
use tracing::trace;

use super::{ByteCursor, CodeTable, FieldRecord, FieldValue, RecordBuilder, UnmappedPolicy};
use crate::error::ProtocolError;
use crate::schema::{DataKind, FieldDescriptor};

/// How the bytes of a field are turned into a value.
#[derive(Debug, Clone, Copy)]
pub enum DecodeAs {
    /// Big-endian unsigned integer (width 1, 2, 4 or 8).
    UInt,
    /// Four octets rendered `a.b.c.d`.
    DottedQuad,
    /// Opaque bytes, carried through unvalidated.
    Raw,
    /// Big-endian integer code resolved through a table.
    Code(&'static CodeTable),
}

/// One field of a layout: `(name, width in bytes, decode-as)`.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: usize,
    pub decode: DecodeAs,
}

impl FieldSpec {
    pub const fn uint(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            decode: DecodeAs::UInt,
        }
    }

    pub const fn dotted_quad(name: &'static str) -> Self {
        Self {
            name,
            width: 4,
            decode: DecodeAs::DottedQuad,
        }
    }

    pub const fn raw(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            decode: DecodeAs::Raw,
        }
    }

    pub const fn code(name: &'static str, width: usize, table: &'static CodeTable) -> Self {
        Self {
            name,
            width,
            decode: DecodeAs::Code(table),
        }
    }

    /// Kind of the value this field decodes to.
    pub fn kind(&self) -> DataKind {
        let uint = || DataKind::uint_for_width(self.width).unwrap_or(DataKind::UInt64);
        match self.decode {
            DecodeAs::UInt => uint(),
            DecodeAs::DottedQuad => DataKind::String,
            DecodeAs::Raw => DataKind::FixedBinary(self.width),
            DecodeAs::Code(table) => match table.policy() {
                UnmappedPolicy::Fallback(_) => DataKind::String,
                UnmappedPolicy::PassThrough => DataKind::OneOf(vec![DataKind::String, uint()]),
            },
        }
    }

    fn descriptor(&self) -> FieldDescriptor {
        FieldDescriptor::new(self.name, self.kind())
    }
}

/// Fixed-width trailing region with discriminant-selected sub-layouts.
#[derive(Debug, Clone, Copy)]
pub struct Trailer {
    pub name: &'static str,
    pub width: usize,
    /// Name of an earlier UInt or Code field; its raw value selects the variant.
    pub discriminant: &'static str,
    /// Sub-layouts keyed by raw discriminant value. Unlisted values keep the
    /// trailer as raw bytes.
    pub variants: &'static [(u64, &'static [FieldSpec])],
}

impl Trailer {
    /// Sub-layout for a raw discriminant value.
    pub fn variant(&self, code: u64) -> Option<&'static [FieldSpec]> {
        self.variants
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, specs)| *specs)
    }
}

/// On-wire layout of one protocol header.
#[derive(Debug, Clone, Copy)]
pub struct HeaderLayout {
    pub protocol: &'static str,
    pub fields: &'static [FieldSpec],
    pub trailer: Option<Trailer>,
}

impl HeaderLayout {
    /// Total bytes the layout consumes.
    pub const fn fixed_len(&self) -> usize {
        let mut len = fields_len(self.fields);
        if let Some(trailer) = &self.trailer {
            len += trailer.width;
        }
        len
    }

    /// True if every trailer variant fits inside the trailer width.
    pub const fn variants_fit(&self) -> bool {
        let Some(trailer) = &self.trailer else {
            return true;
        };
        let mut i = 0;
        while i < trailer.variants.len() {
            if fields_len(trailer.variants[i].1) > trailer.width {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Decode the layout from the cursor.
    ///
    /// On error nothing is returned; the partially staged fields are dropped.
    pub fn decode<'data>(
        &self,
        cursor: &mut ByteCursor<'data>,
    ) -> Result<DecodedFields<'data>, ProtocolError> {
        let mut out = DecodedFields::new();
        read_fields(cursor, self.protocol, self.fields, &mut out)?;

        if let Some(trailer) = &self.trailer {
            let mut region = cursor
                .sub_cursor(trailer.width)
                .map_err(|e| e.in_field(self.protocol, trailer.name))?;

            let code = out.raw(trailer.discriminant);
            let value = match code.and_then(|c| trailer.variant(c)) {
                Some(specs) => {
                    trace!(
                        protocol = self.protocol,
                        field = trailer.name,
                        discriminant = code,
                        "decoding trailer sub-layout"
                    );
                    let mut nested = DecodedFields::new();
                    read_fields(&mut region, self.protocol, specs, &mut nested)?;
                    FieldValue::record(nested.finish())
                }
                None => FieldValue::Bytes(region.rest()),
            };
            out.push(trailer.name, value);
        }

        Ok(out)
    }

    /// Schema of the fields this layout produces, in wire order.
    pub fn schema_fields(&self) -> Vec<FieldDescriptor> {
        let mut fields: Vec<_> = self.fields.iter().map(FieldSpec::descriptor).collect();
        if let Some(trailer) = &self.trailer {
            // Unlisted discriminant values always leave the raw bytes
            let kind = if trailer.variants.is_empty() {
                DataKind::FixedBinary(trailer.width)
            } else {
                DataKind::OneOf(vec![DataKind::Record, DataKind::FixedBinary(trailer.width)])
            };
            fields.push(
                FieldDescriptor::new(trailer.name, kind)
                    .with_description("raw bytes unless the discriminant selects a sub-layout"),
            );
        }
        fields
    }
}

const fn fields_len(specs: &[FieldSpec]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while i < specs.len() {
        len += specs[i].width;
        i += 1;
    }
    len
}

/// Fields staged during a decode, plus the raw integers behind them.
///
/// Raw values are kept for every UInt and Code field so that later
/// decisions (variant dispatch, next-layer hints) use the wire value and
/// never the resolved name.
#[derive(Debug, Default)]
pub struct DecodedFields<'data> {
    builder: RecordBuilder<'data>,
    raw: SmallVec<[(&'static str, u64); 8]>,
}

impl<'data> DecodedFields<'data> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw wire value of an integer or code field.
    pub fn raw(&self, name: &str) -> Option<u64> {
        self.raw.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    /// Stage an extra field that does not come from a FieldSpec.
    pub fn push(&mut self, name: &'static str, value: FieldValue<'data>) {
        self.builder.push(name, value);
    }

    /// Freeze the staged fields.
    pub fn finish(self) -> FieldRecord<'data> {
        self.builder.finish()
    }
}

/// Read `specs` in order, staging each field into `out`.
pub fn read_fields<'data>(
    cursor: &mut ByteCursor<'data>,
    protocol: &'static str,
    specs: &[FieldSpec],
    out: &mut DecodedFields<'data>,
) -> Result<(), ProtocolError> {
    for spec in specs {
        let label = |e: ProtocolError| e.in_field(protocol, spec.name);

        let value = match spec.decode {
            DecodeAs::UInt => {
                let v = cursor.read_uint(spec.width).map_err(label)?;
                out.raw.push((spec.name, v));
                FieldValue::uint(spec.width, v)
            }
            DecodeAs::DottedQuad => FieldValue::dotted_quad(cursor.read_array().map_err(label)?),
            DecodeAs::Raw => FieldValue::Bytes(cursor.read(spec.width).map_err(label)?),
            DecodeAs::Code(table) => {
                let v = cursor.read_uint(spec.width).map_err(label)?;
                out.raw.push((spec.name, v));
                table.resolve(v).into_value(spec.width)
            }
        };
        out.builder.push(spec.name, value);
    }
    Ok(())
}

/// Decode a standalone record from `specs`.
pub fn read_record<'data>(
    cursor: &mut ByteCursor<'data>,
    protocol: &'static str,
    specs: &[FieldSpec],
) -> Result<FieldRecord<'data>, ProtocolError> {
    let mut out = DecodedFields::new();
    read_fields(cursor, protocol, specs, &mut out)?;
    Ok(out.finish())
}
