//! # Display formats
//!
//! Sliders describe their text with a printf-style format. The supported
//! subset is:
//!
//! - flags `-`, `+`, space, `0`, `#`;
//! - a decimal width and a `.precision`;
//! - length modifiers `h hh l ll L q j z t I I32 I64`, accepted and ignored;
//! - conversions `d i u x X o f F e E g G`, plus `%%` for a literal percent sign.
//!
//! A format may contain zero, one or two conversions:
//!
//! | conversions | rendering of the pair `(a, b)` |
//! |-------------|--------------------------------|
//! | 0 | the literal text, values hidden |
//! | 1 | the format applied to each value, joined as `"(A, B)"` |
//! | 2 | each value fills its own conversion |
//!
//! Anything else makes [`FormatSpec::parse`] fail; widgets then fall back to
//! the default format of their [`DataKind`] (see [`FormatSpec::for_kind`]).
//!
//! ```
//! use duoslide_components::{format::FormatSpec, numeric::DataKind};
//!
//! let spec = FormatSpec::for_kind(DataKind::F32, Some("%.1f ms"));
//! assert_eq!(spec.format_pair(1.24f32, 3.0f32), "(1.2 ms, 3.0 ms)");
//!
//! // Integer kinds rewrite float conversions.
//! let spec = FormatSpec::for_kind(DataKind::S32, Some("[%.0f .. %.0f]"));
//! assert_eq!(spec.to_string(), "[%d .. %d]");
//! assert_eq!(spec.format_pair(-3i32, 12i32), "[-3 .. 12]");
//! ```

use std::{
    fmt::{self, Display, Write as _},
    iter::Peekable,
    str::Chars,
};

use smallvec::{SmallVec, smallvec};
use thiserror::Error;
use tracing::debug;

use crate::numeric::{DataKind, Scalar};

/// Decimal precision assumed for float conversions without an explicit one.
pub const DEFAULT_PRECISION: usize = 3;
/// Largest accepted `.precision`.
pub const MAX_PRECISION: usize = 64;
const MAX_CONVERSIONS: usize = 2;
const PRINTF_FLOAT_PRECISION: usize = 6;

/// Why a format string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The string ends in the middle of a conversion.
    #[error("format ends inside a conversion specifier")]
    Unterminated,
    /// Unknown conversion character (including `%s`, `%c`, `%p`, `*`).
    #[error("unsupported conversion `{0}`")]
    UnsupportedConversion(char),
    /// More than two conversions.
    #[error("format has {0} conversions, at most two are supported")]
    TooManyConversions(usize),
    /// Precision above [`MAX_PRECISION`].
    #[error("precision {0} exceeds the supported maximum")]
    PrecisionTooLarge(usize),
}

/// A value handed to a conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg {
    /// Signed integer.
    Signed(i64),
    /// Unsigned integer.
    Unsigned(u64),
    /// Floating point.
    Float(f64),
}

impl FormatArg {
    /// Integer view; floats are rounded half away from zero.
    fn as_i128(self) -> i128 {
        match self {
            FormatArg::Signed(v) => i128::from(v),
            FormatArg::Unsigned(v) => i128::from(v),
            FormatArg::Float(v) => v.round() as i128,
        }
    }

    /// Two's complement 64-bit view used by unsigned conversions.
    fn as_u64(self) -> u64 {
        match self {
            FormatArg::Signed(v) => v as u64,
            FormatArg::Unsigned(v) => v,
            FormatArg::Float(v) => v.round() as i64 as u64,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            FormatArg::Signed(v) => v as f64,
            FormatArg::Unsigned(v) => v as f64,
            FormatArg::Float(v) => v,
        }
    }
}

/// printf flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// `-`: left-justify within the width.
    pub left: bool,
    /// `+`: always print a sign.
    pub plus: bool,
    /// space: print a space in place of a plus sign.
    pub space: bool,
    /// `0`: pad with zeros.
    pub zero: bool,
    /// `#`: alternate form.
    pub alternate: bool,
}

/// Conversion character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `d`, `i`
    Signed,
    /// `u`
    Unsigned,
    /// `x`, `X`
    Hex {
        /// `X`
        upper: bool,
    },
    /// `o`
    Octal,
    /// `f`, `F`
    Fixed {
        /// `F`
        upper: bool,
    },
    /// `e`, `E`
    Exponent {
        /// `E`
        upper: bool,
    },
    /// `g`, `G`
    General {
        /// `G`
        upper: bool,
    },
}

impl Conversion {
    /// True for the integer conversions.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Conversion::Signed | Conversion::Unsigned | Conversion::Hex { .. } | Conversion::Octal
        )
    }

    fn as_char(self) -> char {
        match self {
            Conversion::Signed => 'd',
            Conversion::Unsigned => 'u',
            Conversion::Hex { upper: false } => 'x',
            Conversion::Hex { upper: true } => 'X',
            Conversion::Octal => 'o',
            Conversion::Fixed { upper: false } => 'f',
            Conversion::Fixed { upper: true } => 'F',
            Conversion::Exponent { upper: false } => 'e',
            Conversion::Exponent { upper: true } => 'E',
            Conversion::General { upper: false } => 'g',
            Conversion::General { upper: true } => 'G',
        }
    }
}

/// One `%...` conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSpec {
    /// Flags.
    pub flags: Flags,
    /// Minimum field width.
    pub width: Option<usize>,
    /// Precision.
    pub precision: Option<usize>,
    /// Conversion character.
    pub conversion: Conversion,
}

impl ConversionSpec {
    /// A conversion without flags or width.
    pub const fn plain(conversion: Conversion, precision: Option<usize>) -> Self {
        Self {
            flags: Flags {
                left: false,
                plus: false,
                space: false,
                zero: false,
                alternate: false,
            },
            width: None,
            precision,
            conversion,
        }
    }

    /// Appends `arg` rendered by this conversion to `out`.
    pub fn render(&self, arg: FormatArg, out: &mut String) {
        let flags = self.flags;
        let mut negative = false;
        let mut prefix = "";
        let mut numeric = true;
        let body = match self.conversion {
            Conversion::Signed => {
                let value = arg.as_i128();
                negative = value < 0;
                integer_digits(value.unsigned_abs().to_string(), self.precision)
            }
            Conversion::Unsigned => integer_digits(arg.as_u64().to_string(), self.precision),
            Conversion::Hex { upper } => {
                let value = arg.as_u64();
                if flags.alternate && value != 0 {
                    prefix = if upper { "0X" } else { "0x" };
                }
                let digits = if upper {
                    format!("{value:X}")
                } else {
                    format!("{value:x}")
                };
                integer_digits(digits, self.precision)
            }
            Conversion::Octal => {
                let mut digits = integer_digits(format!("{:o}", arg.as_u64()), self.precision);
                if flags.alternate && !digits.starts_with('0') {
                    digits.insert(0, '0');
                }
                digits
            }
            Conversion::Fixed { upper }
            | Conversion::Exponent { upper }
            | Conversion::General { upper } => {
                let value = arg.as_f64();
                negative = value.is_sign_negative() && !value.is_nan();
                if value.is_finite() {
                    let precision = self.precision.unwrap_or(PRINTF_FLOAT_PRECISION);
                    let text = match self.conversion {
                        Conversion::Fixed { .. } => fixed(value.abs(), precision, flags.alternate),
                        Conversion::Exponent { .. } => exponent(value.abs(), precision, flags.alternate),
                        _ => general(value.abs(), precision, flags.alternate),
                    };
                    if upper { text.to_uppercase() } else { text }
                } else {
                    numeric = false;
                    let text = if value.is_nan() { "nan" } else { "inf" };
                    if upper {
                        text.to_uppercase()
                    } else {
                        text.to_string()
                    }
                }
            }
        };

        let sign = if matches!(
            self.conversion,
            Conversion::Unsigned | Conversion::Hex { .. } | Conversion::Octal
        ) {
            ""
        } else if negative {
            "-"
        } else if flags.plus {
            "+"
        } else if flags.space {
            " "
        } else {
            ""
        };

        let len = sign.len() + prefix.len() + body.chars().count();
        let pad = self.width.unwrap_or(0).saturating_sub(len);
        let zero_pad = flags.zero
            && !flags.left
            && numeric
            && !(self.conversion.is_integer() && self.precision.is_some());

        if flags.left {
            out.push_str(sign);
            out.push_str(prefix);
            out.push_str(&body);
            out.extend(std::iter::repeat_n(' ', pad));
        } else if zero_pad {
            out.push_str(sign);
            out.push_str(prefix);
            out.extend(std::iter::repeat_n('0', pad));
            out.push_str(&body);
        } else {
            out.extend(std::iter::repeat_n(' ', pad));
            out.push_str(sign);
            out.push_str(prefix);
            out.push_str(&body);
        }
    }
}

impl Display for ConversionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('%')?;
        let flags = self.flags;
        for (set, c) in [
            (flags.left, '-'),
            (flags.plus, '+'),
            (flags.space, ' '),
            (flags.zero, '0'),
            (flags.alternate, '#'),
        ] {
            if set {
                f.write_char(c)?;
            }
        }
        if let Some(width) = self.width {
            write!(f, "{width}")?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{precision}")?;
        }
        f.write_char(self.conversion.as_char())
    }
}

fn integer_digits(digits: String, precision: Option<usize>) -> String {
    match precision {
        Some(0) if digits == "0" => String::new(),
        Some(min) if digits.len() < min => {
            let mut padded = "0".repeat(min - digits.len());
            padded.push_str(&digits);
            padded
        }
        _ => digits,
    }
}

fn fixed(value: f64, precision: usize, alternate: bool) -> String {
    let mut text = format!("{value:.precision$}");
    if alternate && precision == 0 {
        text.push('.');
    }
    text
}

/// Splits Rust's `1.5e3` exponent notation into mantissa and exponent.
fn split_exponent(text: &str) -> (&str, i32) {
    match text.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (text, 0),
    }
}

fn exponent(value: f64, precision: usize, alternate: bool) -> String {
    let text = format!("{value:.precision$e}");
    let (mantissa, exp) = split_exponent(&text);
    let mut out = mantissa.to_string();
    if alternate && precision == 0 {
        out.push('.');
    }
    let sign = if exp < 0 { '-' } else { '+' };
    let _ = write!(out, "e{sign}{:02}", exp.unsigned_abs());
    out
}

fn general(value: f64, precision: usize, alternate: bool) -> String {
    let significant = precision.max(1);
    let probe = format!("{value:.prec$e}", prec = significant - 1);
    let (_, exp) = split_exponent(&probe);
    let mut text = if exp >= -4 && exp < significant as i32 {
        let decimals = (significant as i32 - 1 - exp).max(0) as usize;
        format!("{value:.decimals$}")
    } else {
        exponent(value, significant - 1, false)
    };
    if !alternate {
        text = strip_trailing_zeros(&text);
    }
    text
}

fn strip_trailing_zeros(text: &str) -> String {
    let (mantissa, suffix) = match text.find('e') {
        Some(at) => text.split_at(at),
        None => (text, ""),
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    format!("{mantissa}{suffix}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Value(ConversionSpec),
}

/// A parsed display format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pieces: SmallVec<[Piece; 5]>,
}

impl FormatSpec {
    /// Parses a printf-style format.
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let mut pieces = SmallVec::new();
        let mut literal = String::new();
        let mut conversions = 0;
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }
            let spec = parse_conversion(&mut chars)?;
            conversions += 1;
            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(&mut literal)));
            }
            pieces.push(Piece::Value(spec));
        }

        if conversions > MAX_CONVERSIONS {
            return Err(FormatError::TooManyConversions(conversions));
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Ok(Self { pieces })
    }

    /// The default `"(a, b)"` format of `kind`.
    pub fn default_for(kind: DataKind) -> Self {
        let conversion = match kind {
            DataKind::S8 | DataKind::S16 | DataKind::S32 | DataKind::S64 => {
                ConversionSpec::plain(Conversion::Signed, None)
            }
            DataKind::U8 | DataKind::U16 | DataKind::U32 | DataKind::U64 => {
                ConversionSpec::plain(Conversion::Unsigned, None)
            }
            DataKind::F32 | DataKind::F64 => {
                ConversionSpec::plain(Conversion::Fixed { upper: false }, Some(DEFAULT_PRECISION))
            }
        };
        Self {
            pieces: smallvec![
                Piece::Literal("(".into()),
                Piece::Value(conversion),
                Piece::Literal(", ".into()),
                Piece::Value(conversion),
                Piece::Literal(")".into()),
            ],
        }
    }

    /// Resolves the format a widget of `kind` displays.
    ///
    /// `None` selects the kind's default. Integer kinds get their float
    /// conversions rewritten to `%d`. A format that fails to parse is replaced
    /// by the default and the failure is logged at debug level.
    pub fn for_kind(kind: DataKind, user: Option<&str>) -> Self {
        let Some(source) = user else {
            return Self::default_for(kind);
        };
        match Self::parse(source) {
            Ok(spec) if kind.is_float() => spec,
            Ok(spec) => spec.patch_float_to_int(),
            Err(err) => {
                debug!(%err, format = source, ?kind, "unusable format, using the default");
                Self::default_for(kind)
            }
        }
    }

    /// Rewrites every float conversion to a plain `%d`, keeping the text
    /// around it. Flags, width and precision of rewritten conversions are
    /// dropped.
    pub fn patch_float_to_int(mut self) -> Self {
        for piece in &mut self.pieces {
            if let Piece::Value(spec) = piece
                && !spec.conversion.is_integer()
            {
                *spec = ConversionSpec::plain(Conversion::Signed, None);
            }
        }
        self
    }

    /// Conversions in order.
    pub fn conversions(&self) -> impl Iterator<Item = &ConversionSpec> {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Value(spec) => Some(spec),
            Piece::Literal(_) => None,
        })
    }

    /// Number of conversions (0, 1 or 2).
    pub fn conversion_count(&self) -> usize {
        self.conversions().count()
    }

    /// Decimal digits shown by the first conversion.
    ///
    /// Integer conversions show none; float conversions without an explicit
    /// precision count as [`DEFAULT_PRECISION`]. `None` for formats without
    /// conversions and for `%e`/`%g` without an explicit precision.
    pub fn decimal_precision(&self) -> Option<usize> {
        let spec = self.conversions().next()?;
        match spec.conversion {
            c if c.is_integer() => Some(0),
            Conversion::Fixed { .. } => Some(spec.precision.unwrap_or(DEFAULT_PRECISION)),
            _ => spec.precision,
        }
    }

    /// Precision used to size keyboard/gamepad steps.
    ///
    /// Scientific notation counts as zero so stepping falls back to whole
    /// units of the range.
    pub fn step_precision(&self) -> usize {
        match self.conversions().next() {
            None => DEFAULT_PRECISION,
            Some(spec) => match spec.conversion {
                Conversion::Exponent { .. } => 0,
                _ => self.decimal_precision().unwrap_or(0),
            },
        }
    }

    /// The bare conversion a float value is round-tripped through so the
    /// stored value matches what the format shows. `None` means no rounding.
    ///
    /// `%e` and `%g` without a precision round to the six digits they print.
    pub(crate) fn rounding_conversion(&self) -> Option<ConversionSpec> {
        let spec = self.conversions().next()?;
        let (conversion, precision) = match spec.conversion {
            c if c.is_integer() => (Conversion::Fixed { upper: false }, 0),
            Conversion::Fixed { .. } => (
                Conversion::Fixed { upper: false },
                spec.precision.unwrap_or(DEFAULT_PRECISION),
            ),
            Conversion::Exponent { .. } => (
                Conversion::Exponent { upper: false },
                spec.precision.unwrap_or(PRINTF_FLOAT_PRECISION),
            ),
            Conversion::General { .. } => (
                Conversion::General { upper: false },
                spec.precision.unwrap_or(PRINTF_FLOAT_PRECISION),
            ),
            _ => return None,
        };
        Some(ConversionSpec::plain(conversion, Some(precision)))
    }

    /// Renders a pair of raw arguments.
    pub fn render_pair(&self, first: FormatArg, second: FormatArg) -> String {
        match self.conversion_count() {
            0 => self.render_with(&[]),
            1 => format!(
                "({}, {})",
                self.render_with(&[first]),
                self.render_with(&[second])
            ),
            _ => self.render_with(&[first, second]),
        }
    }

    /// Renders a pair of values.
    pub fn format_pair<T: Scalar>(&self, first: T, second: T) -> String {
        self.render_pair(first.format_arg(), second.format_arg())
    }

    fn render_with(&self, args: &[FormatArg]) -> String {
        let mut out = String::new();
        let mut args = args.iter();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Value(spec) => {
                    if let Some(arg) = args.next() {
                        spec.render(*arg, &mut out);
                    }
                }
            }
        }
        out
    }
}

impl Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => f.write_str(&text.replace('%', "%%"))?,
                Piece::Value(spec) => write!(f, "{spec}")?,
            }
        }
        Ok(())
    }
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }
    value
}

fn expect_char(chars: &mut Peekable<Chars<'_>>, expected: char) -> Result<(), FormatError> {
    match chars.next() {
        Some(c) if c == expected => Ok(()),
        Some(c) => Err(FormatError::UnsupportedConversion(c)),
        None => Err(FormatError::Unterminated),
    }
}

fn parse_conversion(chars: &mut Peekable<Chars<'_>>) -> Result<ConversionSpec, FormatError> {
    let mut flags = Flags::default();
    while let Some(&c) = chars.peek() {
        match c {
            '-' => flags.left = true,
            '+' => flags.plus = true,
            ' ' => flags.space = true,
            '0' => flags.zero = true,
            '#' => flags.alternate = true,
            _ => break,
        }
        chars.next();
    }

    let width = parse_number(chars);
    let precision = if chars.peek() == Some(&'.') {
        chars.next();
        let precision = parse_number(chars).unwrap_or(0);
        if precision > MAX_PRECISION {
            return Err(FormatError::PrecisionTooLarge(precision));
        }
        Some(precision)
    } else {
        None
    };

    loop {
        match chars.peek() {
            Some('h' | 'l' | 'L' | 'q' | 'j' | 'z' | 't') => {
                chars.next();
            }
            Some('I') => {
                chars.next();
                match chars.peek() {
                    Some('3') => {
                        chars.next();
                        expect_char(chars, '2')?;
                    }
                    Some('6') => {
                        chars.next();
                        expect_char(chars, '4')?;
                    }
                    _ => {}
                }
            }
            _ => break,
        }
    }

    let conversion = match chars.next() {
        None => return Err(FormatError::Unterminated),
        Some('d' | 'i') => Conversion::Signed,
        Some('u') => Conversion::Unsigned,
        Some('x') => Conversion::Hex { upper: false },
        Some('X') => Conversion::Hex { upper: true },
        Some('o') => Conversion::Octal,
        Some('f') => Conversion::Fixed { upper: false },
        Some('F') => Conversion::Fixed { upper: true },
        Some('e') => Conversion::Exponent { upper: false },
        Some('E') => Conversion::Exponent { upper: true },
        Some('g') => Conversion::General { upper: false },
        Some('G') => Conversion::General { upper: true },
        Some(other) => return Err(FormatError::UnsupportedConversion(other)),
    };

    Ok(ConversionSpec {
        flags,
        width,
        precision,
        conversion,
    })
}
