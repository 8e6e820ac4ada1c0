//! Curve identifiers and the domain parameter record

use core::fmt;
use core::ops::Range;
use core::str::FromStr;

use ecdp_api::{Error, Result};
use ecdp_internal::endian::le_to_be_into;

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Number of enumeration values including the `None` sentinel.
///
/// One past the last valid ordinal. Adding a curve means bumping this and
/// appending a table row; the lookup logic never changes.
pub const CURVES_COUNT: u32 = 6;

/// Ordinals that name an actual curve: strictly between `None` and
/// [`CURVES_COUNT`].
pub const VALID_CURVE_ORDINALS: Range<u32> = (CurveId::None as u32 + 1)..CURVES_COUNT;

/// Identifier of a supported curve
///
/// The ordinal order is fixed and matches the parameter table.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CurveId {
    /// Reserved "no curve" value; never resolves to parameters
    None = 0,
    /// NIST P-192 / secp192r1
    P192 = 1,
    /// NIST P-224 / secp224r1
    P224 = 2,
    /// NIST P-256 / secp256r1
    P256 = 3,
    /// NIST P-384 / secp384r1
    P384 = 4,
    /// NIST P-521 / secp521r1
    P521 = 5,
}

static SUPPORTED: [CurveId; 5] = [
    CurveId::P192,
    CurveId::P224,
    CurveId::P256,
    CurveId::P384,
    CurveId::P521,
];

// Accepted spellings, compared ASCII case-insensitively.
const NAME_ALIASES: &[(&str, CurveId)] = &[
    ("NIST P-192", CurveId::P192),
    ("P-192", CurveId::P192),
    ("P192", CurveId::P192),
    ("secp192r1", CurveId::P192),
    ("prime192v1", CurveId::P192),
    ("NIST P-224", CurveId::P224),
    ("P-224", CurveId::P224),
    ("P224", CurveId::P224),
    ("secp224r1", CurveId::P224),
    ("NIST P-256", CurveId::P256),
    ("P-256", CurveId::P256),
    ("P256", CurveId::P256),
    ("secp256r1", CurveId::P256),
    ("prime256v1", CurveId::P256),
    ("NIST P-384", CurveId::P384),
    ("P-384", CurveId::P384),
    ("P384", CurveId::P384),
    ("secp384r1", CurveId::P384),
    ("NIST P-521", CurveId::P521),
    ("P-521", CurveId::P521),
    ("P521", CurveId::P521),
    ("secp521r1", CurveId::P521),
];

impl CurveId {
    /// Numeric ordinal of this identifier
    #[inline]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// True for every identifier except the `None` sentinel
    #[inline]
    pub const fn is_curve(self) -> bool {
        !matches!(self, CurveId::None)
    }

    /// Decode an externally supplied ordinal.
    ///
    /// `0` decodes to [`CurveId::None`]; anything at or beyond
    /// [`CURVES_COUNT`] is absent. The full `u32` is inspected, so wide values
    /// are never truncated onto a valid ordinal.
    pub const fn from_ordinal(ordinal: u32) -> Option<CurveId> {
        match ordinal {
            0 => Some(CurveId::None),
            1 => Some(CurveId::P192),
            2 => Some(CurveId::P224),
            3 => Some(CurveId::P256),
            4 => Some(CurveId::P384),
            5 => Some(CurveId::P521),
            _ => None,
        }
    }

    /// Resolve a curve name.
    ///
    /// Accepts the table label ("NIST P-256"), the short form ("P-256" or
    /// "P256") and the SEC 2 / X9.62 names ("secp256r1", "prime256v1"),
    /// ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<CurveId> {
        let name = name.trim();
        let found = NAME_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|&(_, id)| id);

        if found.is_none() {
            log_unsupported!("unsupported curve name {:?}", name);
        }
        found
    }

    /// The five supported curves in ordinal order
    pub fn supported() -> impl Iterator<Item = CurveId> + Clone {
        SUPPORTED.iter().copied()
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CurveId::None => "none",
            CurveId::P192 => "P-192",
            CurveId::P224 => "P-224",
            CurveId::P256 => "P-256",
            CurveId::P384 => "P-384",
            CurveId::P521 => "P-521",
        };
        f.write_str(label)
    }
}

impl TryFrom<u32> for CurveId {
    type Error = Error;

    /// Decode an ordinal that must name a curve; the `None` sentinel is
    /// rejected along with out-of-range values.
    fn try_from(ordinal: u32) -> Result<Self> {
        match CurveId::from_ordinal(ordinal) {
            Some(id) if id.is_curve() => Ok(id),
            _ => {
                log_unsupported!("unsupported curve ordinal {}", ordinal);
                Err(Error::unsupported(ordinal))
            }
        }
    }
}

impl TryFrom<u8> for CurveId {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self> {
        CurveId::try_from(u32::from(ordinal))
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CurveId::from_name(s).ok_or(Error::param("unknown curve name"))
    }
}

/// Modular reduction algorithm the arithmetic engine must use for a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReductionMode {
    /// Fast reduction exploiting the special form of the prime
    CurveSpecific,
    /// Generic Barrett reduction using the precomputed constants
    Barrett,
}

impl fmt::Display for ReductionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReductionMode::CurveSpecific => f.write_str("curve-specific"),
            ReductionMode::Barrett => f.write_str("Barrett"),
        }
    }
}

/// Selects one of the byte-string fields of a [`DomainParameters`] record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    /// Field prime p
    Modulus,
    /// floor(2^(2 * bits) / p)
    ModulusBarrett,
    /// Order n of the base point
    Order,
    /// floor(2^(2 * bits) / n)
    OrderBarrett,
    /// Base point x-coordinate
    BasePointX,
    /// Base point y-coordinate
    BasePointY,
}

impl ParamField {
    /// Every field, in record order
    pub const ALL: [ParamField; 6] = [
        ParamField::Modulus,
        ParamField::ModulusBarrett,
        ParamField::Order,
        ParamField::OrderBarrett,
        ParamField::BasePointX,
        ParamField::BasePointY,
    ];
}

/// Domain parameters of one curve.
///
/// All integers are stored little-endian (least-significant byte first) and
/// borrow from the compiled-in table. Records cannot be built outside this
/// crate; obtain them through [`get_curve_params`](crate::get_curve_params).
#[derive(Debug, PartialEq, Eq)]
pub struct DomainParameters {
    pub(crate) id: CurveId,
    pub(crate) byte_size: usize,
    pub(crate) bit_size: usize,
    pub(crate) name: &'static str,
    pub(crate) reduction_mode: ReductionMode,
    pub(crate) modulus: &'static [u8],
    pub(crate) modulus_barrett: &'static [u8],
    pub(crate) order: &'static [u8],
    pub(crate) order_barrett: &'static [u8],
    pub(crate) base_point_x: &'static [u8],
    pub(crate) base_point_y: &'static [u8],
}

impl DomainParameters {
    /// Identifier of this record; equals its table index
    #[inline]
    pub const fn id(&self) -> CurveId {
        self.id
    }

    /// Field element size in bytes (24, 28, 32, 48 or 66)
    #[inline]
    pub const fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Field size in bits (521 for P-521)
    #[inline]
    pub const fn bit_size(&self) -> usize {
        self.bit_size
    }

    /// Human-readable label, e.g. "NIST P-256"
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn reduction_mode(&self) -> ReductionMode {
        self.reduction_mode
    }

    #[inline]
    pub const fn modulus(&self) -> &'static [u8] {
        self.modulus
    }

    #[inline]
    pub const fn modulus_barrett(&self) -> &'static [u8] {
        self.modulus_barrett
    }

    #[inline]
    pub const fn order(&self) -> &'static [u8] {
        self.order
    }

    #[inline]
    pub const fn order_barrett(&self) -> &'static [u8] {
        self.order_barrett
    }

    #[inline]
    pub const fn base_point_x(&self) -> &'static [u8] {
        self.base_point_x
    }

    #[inline]
    pub const fn base_point_y(&self) -> &'static [u8] {
        self.base_point_y
    }

    /// Select a byte-string field by name
    pub const fn field(&self, field: ParamField) -> &'static [u8] {
        match field {
            ParamField::Modulus => self.modulus,
            ParamField::ModulusBarrett => self.modulus_barrett,
            ParamField::Order => self.order,
            ParamField::OrderBarrett => self.order_barrett,
            ParamField::BasePointX => self.base_point_x,
            ParamField::BasePointY => self.base_point_y,
        }
    }

    /// Write `field` into `out` big-endian, right-aligned and zero-padded.
    ///
    /// Returns the field length in bytes.
    pub fn write_be(&self, field: ParamField, out: &mut [u8]) -> Result<usize> {
        let le = self.field(field);
        le_to_be_into(le, out).ok_or(Error::InvalidLength {
            context: "big-endian export buffer",
            expected: le.len(),
            actual: out.len(),
        })
    }

    /// Uppercase big-endian hex of `field`, two digits per stored byte.
    #[cfg(feature = "alloc")]
    pub fn to_be_hex(&self, field: ParamField) -> String {
        let be: Vec<u8> = self.field(field).iter().rev().copied().collect();
        hex::encode_upper(be)
    }
}
