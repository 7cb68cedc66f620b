//! Localized string template formatting
//!
//! Templates use the platform's `%[index$][flags][width][.precision]conversion`
//! syntax. Localization args in push payloads are always strings, so `%s`
//! renders them verbatim and `%d` formats them as integers when they parse
//! as one, verbatim otherwise.
//!
//! Supported flags are `-` (left-justify), `0` (zero-pad), `+`, space, `,`
//! (thousands grouping) and `(` (parenthesized negatives). The `#` flag is
//! accepted and has no effect on these conversions.

use super::error::FormatError;

const FLAGS: &str = "-#+ 0,(";

/// One parsed `%...` conversion
#[derive(Debug)]
struct Specifier<'a> {
    index: Option<usize>,
    flags: &'a str,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

impl<'a> Specifier<'a> {
    /// Parse the text following a `%`, returning the specifier and the rest
    fn parse(s: &'a str) -> Result<(Self, &'a str), FormatError> {
        let (index, s) = match split_digits(s) {
            (digits, tail) if !digits.is_empty() && tail.starts_with('$') => {
                // Positions are 1-based
                let position = parse_number(digits)?;
                let index = position
                    .checked_sub(1)
                    .ok_or(FormatError::MissingArgument(0))?;
                (Some(index), &tail[1..])
            }
            _ => (None, s),
        };

        let flags_end = s.find(|c: char| !FLAGS.contains(c)).unwrap_or(s.len());
        let (flags, s) = s.split_at(flags_end);

        let (width, s) = match split_digits(s) {
            ("", s) => (None, s),
            (digits, s) => (Some(parse_number(digits)?), s),
        };

        let (precision, s) = match s.strip_prefix('.') {
            Some(tail) => match split_digits(tail) {
                ("", _) => return Err(FormatError::InvalidSpecifier),
                (digits, tail) => (Some(parse_number(digits)?), tail),
            },
            None => (None, s),
        };

        let mut chars = s.chars();
        let conversion = chars.next().ok_or(FormatError::Unterminated)?;

        let specifier = Self {
            index,
            flags,
            width,
            precision,
            conversion,
        };
        Ok((specifier, chars.as_str()))
    }

    fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    /// Apply the field width with spaces
    fn pad(&self, text: String) -> String {
        let len = text.chars().count();
        match self.width {
            Some(width) if len < width => {
                let fill = " ".repeat(width - len);
                if self.has_flag('-') {
                    text + &fill
                } else {
                    fill + &text
                }
            }
            _ => text,
        }
    }
}

/// Format a string resource template with localization args.
pub fn format_template(template: &str, args: &[String]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next_arg = 0usize;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let (spec, tail) = Specifier::parse(&rest[start + 1..])?;
        rest = tail;

        match spec.conversion {
            '%' if spec.index.is_none() => out.push_str(&spec.pad("%".to_string())),
            'n' if spec.index.is_none() => out.push('\n'),
            's' | 'S' | 'd' => {
                let index = spec.index.unwrap_or_else(|| {
                    let index = next_arg;
                    next_arg += 1;
                    index
                });
                let arg = args
                    .get(index)
                    .ok_or(FormatError::MissingArgument(index + 1))?;
                out.push_str(&render(&spec, arg));
            }
            other => return Err(FormatError::UnsupportedConversion(other)),
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn render(spec: &Specifier<'_>, arg: &str) -> String {
    match spec.conversion {
        'd' => match arg.trim().parse::<i64>() {
            Ok(value) => spec.pad(render_integer(spec, value)),
            Err(_) => spec.pad(arg.to_string()),
        },
        conversion => {
            let text: String = match spec.precision {
                Some(max) => arg.chars().take(max).collect(),
                None => arg.to_string(),
            };
            if conversion == 'S' {
                spec.pad(text.to_uppercase())
            } else {
                spec.pad(text)
            }
        }
    }
}

fn render_integer(spec: &Specifier<'_>, value: i64) -> String {
    let mut digits = value.unsigned_abs().to_string();
    if spec.has_flag(',') {
        digits = group_thousands(&digits);
    }

    let (prefix, suffix) = if value < 0 {
        if spec.has_flag('(') {
            ("(", ")")
        } else {
            ("-", "")
        }
    } else if spec.has_flag('+') {
        ("+", "")
    } else if spec.has_flag(' ') {
        (" ", "")
    } else {
        ("", "")
    };

    if let (true, Some(width)) = (spec.has_flag('0'), spec.width) {
        let len = prefix.len() + digits.len() + suffix.len();
        if len < width {
            digits.insert_str(0, &"0".repeat(width - len));
        }
    }

    format!("{}{}{}", prefix, digits, suffix)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_number(digits: &str) -> Result<usize, FormatError> {
    digits.parse().map_err(|_| FormatError::InvalidSpecifier)
}
