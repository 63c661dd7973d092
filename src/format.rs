//! Positional printf-style formatting of message templates.
//!
//! Placeholders follow `%[flags][width][.precision]verb` and consume the
//! arguments in order. `%%` is a literal percent sign.
//!
//! | verb        | accepted arguments          |
//! |-------------|-----------------------------|
//! | `s`, `v`    | any                         |
//! | `d`         | integers                    |
//! | `f`, `e`    | floats and integers         |
//! | `t`         | booleans                    |
//! | `c`         | chars and integer code points |
//! | `x`, `X`    | integers and strings        |
//! | `q`         | strings and chars           |
//!
//! The `0` flag pads numeric verbs with zeros after the sign. Other verbs
//! are always padded with spaces. Widths and precisions above
//! [`MAX_WIDTH`] are rejected.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

/// Largest accepted placeholder width or precision.
pub const MAX_WIDTH: usize = 1_000_000;

/// A positional argument substituted into a template.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl FormatArg {
    /// Classifies a piece of text, e.g. a command-line argument.
    ///
    /// Integers, floats and `true`/`false` get their typed variant, anything
    /// else is kept as a string.
    #[must_use]
    pub fn infer(text: &str) -> Self {
        if let Ok(i) = text.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(u) = text.parse::<u64>() {
            return Self::UInt(u);
        }
        if text.bytes().any(|b| b.is_ascii_digit())
            && let Ok(f) = text.parse::<f64>()
        {
            return Self::Float(f);
        }
        match text {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Str(text.to_string()),
        }
    }

    /// Name of the argument kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
        }
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for FormatArg {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for FormatArg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<char> for FormatArg {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<f32> for FormatArg {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for FormatArg {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// `From` impls for integer primitives.
macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for FormatArg {
                fn from(n: $t) -> Self {
                    Self::$variant(<$target>::from(n))
                }
            }
        )*
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64);
impl_from_int!(UInt, u64, u8, u16, u32, u64);

impl From<isize> for FormatArg {
    fn from(n: isize) -> Self {
        i64::try_from(n).map_or_else(|_| Self::Str(n.to_string()), Self::Int)
    }
}

impl From<usize> for FormatArg {
    fn from(n: usize) -> Self {
        u64::try_from(n).map_or_else(|_| Self::Str(n.to_string()), Self::UInt)
    }
}

/// Errors raised when arguments do not fit a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing argument {position} for placeholder %{verb}")]
    MissingArgument { verb: char, position: usize },

    #[error("{extra} argument(s) not used by the template")]
    ExtraArguments { extra: usize },

    #[error("placeholder %{verb} cannot format argument {position} ({kind})")]
    KindMismatch { verb: char, position: usize, kind: &'static str },

    #[error("unknown placeholder %{verb}")]
    UnknownVerb { verb: char },

    #[error("template ends inside a placeholder")]
    Unterminated,

    #[error("placeholder width exceeds {}", MAX_WIDTH)]
    WidthTooLarge,

    #[error("placeholder precision exceeds {}", MAX_WIDTH)]
    PrecisionTooLarge,
}

/// A parsed placeholder.
#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    /// `-`: pad on the right.
    left_align: bool,
    /// `0`: pad numbers with leading zeros.
    zero_pad: bool,
    /// `+`: always print the sign of numbers.
    plus: bool,
    /// ` `: leave a space for the sign of positive numbers.
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

/// Formats `template` with positional `args`.
///
/// Without arguments the template is returned verbatim, placeholders included.
///
/// # Examples
/// ```
/// use tree_i18n::format::{FormatArg, sprintf};
///
/// let text = sprintf("Password too short: %s", &[FormatArg::from("1234a")]).unwrap();
/// assert_eq!(text, "Password too short: 1234a");
///
/// assert_eq!(sprintf("100%s", &[]).unwrap(), "100%s");
/// ```
pub fn sprintf(template: &str, args: &[FormatArg]) -> Result<String, FormatError> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut remaining = args.iter();
    let mut position = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let spec = parse_spec(&mut chars)?;
        if spec.verb == '%' {
            out.push('%');
            continue;
        }

        position += 1;
        let arg = remaining
            .next()
            .ok_or(FormatError::MissingArgument { verb: spec.verb, position })?;
        let body = render(&spec, arg, position)?;
        pad(&mut out, &spec, &body);
    }

    match remaining.len() {
        0 => Ok(out),
        extra => Err(FormatError::ExtraArguments { extra }),
    }
}

/// Parses the part of a placeholder following `%`.
fn parse_spec(chars: &mut Peekable<Chars<'_>>) -> Result<Spec, FormatError> {
    let mut spec = Spec::default();

    while let Some(&c) = chars.peek() {
        match c {
            '-' => spec.left_align = true,
            '0' => spec.zero_pad = true,
            '+' => spec.plus = true,
            ' ' => spec.space = true,
            _ => break,
        }
        chars.next();
    }

    spec.width = parse_number(chars);
    if spec.width.is_some_and(|width| width > MAX_WIDTH) {
        return Err(FormatError::WidthTooLarge);
    }
    if chars.next_if_eq(&'.').is_some() {
        let precision = parse_number(chars).unwrap_or(0);
        if precision > MAX_WIDTH {
            return Err(FormatError::PrecisionTooLarge);
        }
        spec.precision = Some(precision);
    }

    spec.verb = chars.next().ok_or(FormatError::Unterminated)?;
    Ok(spec)
}

/// Reads a run of decimal digits.
fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let digit = usize::try_from(digit).unwrap_or(0);
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit));
    }
    value
}

/// Renders one argument according to its placeholder, without padding.
#[allow(clippy::cast_precision_loss)]
fn render(spec: &Spec, arg: &FormatArg, position: usize) -> Result<String, FormatError> {
    let mismatch = || FormatError::KindMismatch { verb: spec.verb, position, kind: arg.kind() };

    let body = match (spec.verb, arg) {
        ('s' | 'v', _) => {
            let text = arg.to_string();
            match spec.precision {
                Some(max) if spec.verb == 's' => text.chars().take(max).collect(),
                _ => text,
            }
        }
        ('d', FormatArg::Int(i)) => signed(spec, i.is_negative(), &i.unsigned_abs().to_string()),
        ('d', FormatArg::UInt(u)) => signed(spec, false, &u.to_string()),
        ('f' | 'e', FormatArg::Float(x)) => float(spec, *x),
        ('f' | 'e', FormatArg::Int(i)) => float(spec, *i as f64),
        ('f' | 'e', FormatArg::UInt(u)) => float(spec, *u as f64),
        ('t', FormatArg::Bool(b)) => b.to_string(),
        ('c', FormatArg::Char(c)) => c.to_string(),
        ('c', FormatArg::Int(i)) => code_point(u32::try_from(*i).ok()).ok_or_else(mismatch)?,
        ('c', FormatArg::UInt(u)) => code_point(u32::try_from(*u).ok()).ok_or_else(mismatch)?,
        ('x' | 'X', FormatArg::Int(i)) => {
            signed(spec, i.is_negative(), &format!("{:x}", i.unsigned_abs()))
        }
        ('x' | 'X', FormatArg::UInt(u)) => signed(spec, false, &format!("{u:x}")),
        ('x' | 'X', FormatArg::Str(s)) => s.bytes().map(|b| format!("{b:02x}")).collect(),
        ('q', FormatArg::Str(s)) => format!("{s:?}"),
        ('q', FormatArg::Char(c)) => format!("{c:?}"),
        ('s' | 'v' | 'd' | 'f' | 'e' | 't' | 'c' | 'x' | 'X' | 'q', _) => return Err(mismatch()),
        (verb, _) => return Err(FormatError::UnknownVerb { verb }),
    };

    Ok(if spec.verb == 'X' { body.to_uppercase() } else { body })
}

/// Prefixes a number's digits with its sign.
fn signed(spec: &Spec, negative: bool, digits: &str) -> String {
    let sign = if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    };
    format!("{sign}{digits}")
}

/// Renders `%f` and `%e`; `%e` uses a signed two-digit exponent.
fn float(spec: &Spec, x: f64) -> String {
    let precision = spec.precision.unwrap_or(6);
    let digits = if spec.verb == 'e' {
        let raw = format!("{:.*e}", precision, x.abs());
        match raw.split_once('e') {
            Some((mantissa, exp)) => {
                let exp: i32 = exp.parse().unwrap_or(0);
                let exp_sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{exp_sign}{:02}", exp.unsigned_abs())
            }
            None => raw,
        }
    } else {
        format!("{:.*}", precision, x.abs())
    };
    signed(spec, x.is_sign_negative() && x != 0.0, &digits)
}

/// Converts an integer code point for `%c`.
fn code_point(value: Option<u32>) -> Option<String> {
    value.and_then(char::from_u32).map(String::from)
}

/// Appends `body` to `out`, padded to the placeholder width.
fn pad(out: &mut String, spec: &Spec, body: &str) {
    let len = body.chars().count();
    let fill = spec.width.map_or(0, |width| width.saturating_sub(len));

    if fill == 0 {
        out.push_str(body);
    } else if spec.left_align {
        out.push_str(body);
        out.extend(std::iter::repeat_n(' ', fill));
    } else if spec.zero_pad && matches!(spec.verb, 'd' | 'f' | 'e' | 'x' | 'X') {
        let split = body.find(|c: char| c.is_ascii_alphanumeric()).unwrap_or(0);
        let (sign, digits) = body.split_at(split);
        out.push_str(sign);
        out.extend(std::iter::repeat_n('0', fill));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat_n(' ', fill));
        out.push_str(body);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Password too short: %s", vec![FormatArg::from("1234a")], "Password too short: 1234a")]
    #[case("%s has %d items", vec!["cart".into(), 3.into()], "cart has 3 items")]
    #[case("%v / %v", vec![true.into(), 1.5.into()], "true / 1.5")]
    #[case("%5d|", vec![42.into()], "   42|")]
    #[case("%-5d|", vec![42.into()], "42   |")]
    #[case("%05d", vec![(-42).into()], "-0042")]
    #[case("%+d", vec![7.into()], "+7")]
    #[case("%.2f", vec![1.23456.into()], "1.23")]
    #[case("%f", vec![2.into()], "2.000000")]
    #[case("%.3e", vec![1234.56.into()], "1.235e+03")]
    #[case("%x %X", vec![255.into(), 255u32.into()], "ff FF")]
    #[case("%x", vec!["hi".into()], "6869")]
    #[case("%c%c", vec!['o'.into(), 107.into()], "ok")]
    #[case("%t", vec![false.into()], "false")]
    #[case("%q", vec!["say \"hi\"".into()], r#""say \"hi\"""#)]
    #[case("%.3s", vec!["abcdef".into()], "abc")]
    #[case("%05s|", vec!["ab".into()], "   ab|")]
    #[case("100%% of %s", vec!["tests".into()], "100% of tests")]
    #[case("密码太短: %s", vec!["1234a".into()], "密码太短: 1234a")]
    fn test_sprintf(#[case] template: &str, #[case] args: Vec<FormatArg>, #[case] expected: &str) {
        assert_eq!(sprintf(template, &args).unwrap(), expected);
    }

    #[rstest]
    #[case("Password too simple")]
    #[case("Password too short: %s")]
    #[case("%d%%")]
    fn test_sprintf_without_args_is_verbatim(#[case] template: &str) {
        assert_eq!(sprintf(template, &[]).unwrap(), template);
    }

    #[rstest]
    fn test_sprintf_missing_argument() {
        let result = sprintf("%s and %s", &["one".into()]);

        assert_eq!(result, Err(FormatError::MissingArgument { verb: 's', position: 2 }));
    }

    #[rstest]
    fn test_sprintf_extra_arguments() {
        let result = sprintf("only %s", &["one".into(), "two".into(), "three".into()]);

        assert_eq!(result, Err(FormatError::ExtraArguments { extra: 2 }));
    }

    #[rstest]
    fn test_sprintf_kind_mismatch() {
        let result = sprintf("%d", &["abc".into()]);

        assert_eq!(result, Err(FormatError::KindMismatch { verb: 'd', position: 1, kind: "string" }));
    }

    #[rstest]
    #[case("%y", FormatError::UnknownVerb { verb: 'y' })]
    #[case("50%", FormatError::Unterminated)]
    #[case("%c", FormatError::KindMismatch { verb: 'c', position: 1, kind: "integer" })]
    #[case("%99999999999999999999d", FormatError::WidthTooLarge)]
    #[case("%2000000000d", FormatError::WidthTooLarge)]
    #[case("%.1000001f", FormatError::PrecisionTooLarge)]
    #[case("%5.99999999999999999999s", FormatError::PrecisionTooLarge)]
    fn test_sprintf_invalid_placeholder(#[case] template: &str, #[case] expected: FormatError) {
        let args = [FormatArg::Int(-1)];

        assert_eq!(sprintf(template, &args), Err(expected));
    }

    #[rstest]
    fn test_sprintf_accepts_max_width() {
        let text = sprintf(&format!("%{MAX_WIDTH}d"), &[1.into()]).unwrap();

        assert_eq!(text.len(), MAX_WIDTH);
        assert!(text.ends_with(" 1"));
    }

    #[rstest]
    #[case("42", FormatArg::Int(42))]
    #[case("-7", FormatArg::Int(-7))]
    #[case("18446744073709551615", FormatArg::UInt(u64::MAX))]
    #[case("2.5", FormatArg::Float(2.5))]
    #[case("true", FormatArg::Bool(true))]
    #[case("1234a", FormatArg::Str("1234a".to_string()))]
    #[case("inf", FormatArg::Str("inf".to_string()))]
    fn test_infer(#[case] text: &str, #[case] expected: FormatArg) {
        assert_eq!(FormatArg::infer(text), expected);
    }
}
