//! Number and duration formatting for console output.

/// Options for [`format_number`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Minimum digit count of the integer part; commas are not counted.
    pub leading_zeroes: usize,
    /// Places after the decimal point, or `None` to keep the value's own.
    pub decimal_places: Option<usize>,
    pub separate_thousands: bool,
    /// Multiply by 100 and append `%`.
    pub percentage: bool,
    /// Put a space where the minus sign would be for non-negative values.
    pub sign_slot: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            leading_zeroes: 1,
            decimal_places: None,
            separate_thousands: true,
            percentage: false,
            sign_slot: false,
        }
    }
}

impl NumberFormat {
    pub fn decimals(mut self, places: usize) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn leading_zeroes(mut self, digits: usize) -> Self {
        self.leading_zeroes = digits;
        self
    }

    pub fn without_separators(mut self) -> Self {
        self.separate_thousands = false;
        self
    }

    pub fn percentage(mut self) -> Self {
        self.percentage = true;
        self
    }

    pub fn sign_slot(mut self) -> Self {
        self.sign_slot = true;
        self
    }
}

/// Format a floating-point number.
///
/// Without `decimal_places`, the shortest representation that round-trips
/// is used, with at least one decimal place. NaN and infinities render as
/// `NaN`, `inf` and `-inf`.
pub fn format_number(n: f64, opts: NumberFormat) -> String {
    let n = if opts.percentage { n * 100.0 } else { n };
    if !n.is_finite() {
        return non_finite(n, opts);
    }

    let repr = match opts.decimal_places {
        Some(places) => format!("{:.places$}", n.abs()),
        None => format!("{}", n.abs()),
    };
    let (integer, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let fraction = if opts.decimal_places.is_none() && fraction.is_empty() {
        "0"
    } else {
        fraction
    };

    assemble(n < 0.0, integer, fraction, opts)
}

/// Format an integer. Decimal places are shown only when requested.
pub fn format_integer(n: i64, opts: NumberFormat) -> String {
    let magnitude = u128::from(n.unsigned_abs());
    let magnitude = if opts.percentage {
        magnitude * 100
    } else {
        magnitude
    };
    let fraction = "0".repeat(opts.decimal_places.unwrap_or(0));
    assemble(n < 0, &magnitude.to_string(), &fraction, opts)
}

/// Format a complex number as `<re><sign><im>i`.
pub fn format_complex(re: f64, im: f64, opts: NumberFormat) -> String {
    let real = format_number(re, opts);
    let imag = format_number(im, NumberFormat { sign_slot: true, ..opts });
    let imag = match imag.strip_prefix(' ') {
        Some(rest) => format!("+{rest}"),
        None => imag,
    };
    format!("{real}{imag}i")
}

/// Format seconds as `HH:MM:SS.cc`; negative input clamps to zero.
pub fn format_duration(seconds: f64) -> String {
    let centis = (seconds.max(0.0) * 100.0).round() as u64;
    let hours = centis / 360_000;
    let minutes = (centis / 6_000) % 60;
    let secs = (centis / 100) % 60;
    let hundredths = centis % 100;
    format!("{hours:02}:{minutes:02}:{secs:02}.{hundredths:02}")
}

fn non_finite(n: f64, opts: NumberFormat) -> String {
    let mut out = String::new();
    if n.is_nan() {
        out.push_str("NaN");
    } else {
        if n < 0.0 {
            out.push('-');
        } else if opts.sign_slot {
            out.push(' ');
        }
        out.push_str("inf");
    }
    if opts.percentage {
        out.push('%');
    }
    out
}

/// Join sign, padded integer digits and fraction digits.
///
/// `integer` holds plain decimal digits without leading zeroes (`"0"` for
/// zero); `fraction` is rendered as-is.
fn assemble(negative: bool, integer: &str, fraction: &str, opts: NumberFormat) -> String {
    let is_zero = integer.bytes().all(|b| b == b'0');
    let mut integer_part = if opts.separate_thousands {
        group_thousands(integer)
    } else if is_zero {
        String::new()
    } else {
        integer.to_string()
    };
    let commas = integer_part.matches(',').count();
    let width = opts.leading_zeroes + commas;
    if integer_part.len() < width {
        integer_part = format!("{}{integer_part}", "0".repeat(width - integer_part.len()));
    }

    let visible = !is_zero || fraction.bytes().any(|b| b != b'0');
    let mut out = String::new();
    if negative && visible {
        out.push('-');
    } else if opts.sign_slot {
        out.push(' ');
    }
    out.push_str(&integer_part);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    if opts.percentage {
        out.push('%');
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
