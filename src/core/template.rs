//! printf-style interpolation of sanitized arguments
//!
//! Supports `%%`, positional `%1$s`, the flags `-`, `+`, `0`, space and
//! `'c` (custom pad character), a width, a `.precision`, and the conversions
//! `s d u f F e E x X o b c`. Placeholders without a matching argument render
//! as an empty substitution; unknown conversions are copied through verbatim.

/// Interpolate `args` into `template`.
///
/// ```
/// use eggshell::core::template::interpolate;
///
/// let args = vec!["'disk'".to_string(), "93".to_string()];
/// assert_eq!(interpolate("%s is %d%% full", &args), "'disk' is 93% full");
/// assert_eq!(interpolate("[%5s]", &["ab".to_string()]), "[   ab]");
/// ```
pub fn interpolate(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(String::len).sum::<usize>());
    let chars: Vec<char> = template.chars().collect();
    let mut next_arg = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '%' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        match parse_spec(&chars, i + 1) {
            Some((spec, end)) => {
                if spec.conversion == '%' {
                    out.push('%');
                } else {
                    let index = match spec.position {
                        Some(position) => position,
                        None => {
                            let index = next_arg;
                            next_arg += 1;
                            index
                        }
                    };
                    let value = args.get(index).map(String::as_str).unwrap_or("");
                    out.push_str(&spec.render(value));
                }
                i = end;
            }
            None => {
                out.push('%');
                i += 1;
            }
        }
    }

    out
}

#[derive(Debug, Default)]
struct Spec {
    position: Option<usize>,
    left_align: bool,
    plus: bool,
    pad: Option<char>,
    width: usize,
    precision: Option<usize>,
    conversion: char,
}

/// Parse a conversion starting right after a `%`; returns the spec and the
/// index just past it.
fn parse_spec(chars: &[char], start: usize) -> Option<(Spec, usize)> {
    let mut spec = Spec::default();
    let mut i = start;

    if chars.get(i) == Some(&'%') {
        spec.conversion = '%';
        return Some((spec, i + 1));
    }

    // Positional argument: digits followed by '$'
    let digits_end = scan_digits(chars, i);
    if digits_end > i && chars.get(digits_end) == Some(&'$') {
        let position: usize = chars[i..digits_end].iter().collect::<String>().parse().ok()?;
        spec.position = Some(position.checked_sub(1)?);
        i = digits_end + 1;
    }

    loop {
        match chars.get(i) {
            Some('-') => spec.left_align = true,
            Some('+') => spec.plus = true,
            Some('0') => spec.pad = Some('0'),
            Some(' ') => spec.pad = Some(' '),
            Some('\'') => {
                spec.pad = Some(*chars.get(i + 1)?);
                i += 1;
            }
            _ => break,
        }
        i += 1;
    }

    let width_end = scan_digits(chars, i);
    if width_end > i {
        spec.width = chars[i..width_end].iter().collect::<String>().parse().ok()?;
        i = width_end;
    }

    if chars.get(i) == Some(&'.') {
        let precision_end = scan_digits(chars, i + 1);
        let digits: String = chars[i + 1..precision_end].iter().collect();
        spec.precision = Some(digits.parse().unwrap_or(0));
        i = precision_end;
    }

    let conversion = *chars.get(i)?;
    if !matches!(
        conversion,
        's' | 'd' | 'u' | 'f' | 'F' | 'e' | 'E' | 'x' | 'X' | 'o' | 'b' | 'c'
    ) {
        return None;
    }
    spec.conversion = conversion;
    Some((spec, i + 1))
}

fn scan_digits(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while chars.get(i).is_some_and(char::is_ascii_digit) {
        i += 1;
    }
    i
}

impl Spec {
    fn render(&self, value: &str) -> String {
        let body = match self.conversion {
            's' => match self.precision {
                Some(precision) => value.chars().take(precision).collect(),
                None => value.to_string(),
            },
            'd' => {
                let n = leading_int(value);
                if self.plus && n >= 0 {
                    format!("+{}", n)
                } else {
                    n.to_string()
                }
            }
            'u' => (leading_int(value) as u64).to_string(),
            'f' | 'F' => {
                let n = leading_float(value);
                let precision = self.precision.unwrap_or(6);
                if self.plus && n >= 0.0 {
                    format!("+{:.*}", precision, n)
                } else {
                    format!("{:.*}", precision, n)
                }
            }
            'e' => format!("{:.*e}", self.precision.unwrap_or(6), leading_float(value)),
            'E' => format!("{:.*E}", self.precision.unwrap_or(6), leading_float(value)),
            'x' => format!("{:x}", leading_int(value)),
            'X' => format!("{:X}", leading_int(value)),
            'o' => format!("{:o}", leading_int(value)),
            'b' => format!("{:b}", leading_int(value)),
            'c' => u32::try_from(leading_int(value))
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default(),
            _ => value.to_string(),
        };
        self.pad(body)
    }

    fn pad(&self, body: String) -> String {
        let len = body.chars().count();
        if len >= self.width {
            return body;
        }
        let fill = self.pad.unwrap_or(' ');
        let count = self.width - len;

        if self.left_align {
            // Zero padding on the right would change the number.
            let fill = if fill == '0' { ' ' } else { fill };
            return format!("{}{}", body, fill.to_string().repeat(count));
        }

        let padding = fill.to_string().repeat(count);
        if fill == '0' && (body.starts_with('-') || body.starts_with('+')) {
            let (sign, digits) = body.split_at(1);
            format!("{}{}{}", sign, padding, digits)
        } else {
            format!("{}{}", padding, body)
        }
    }
}

/// Integer value of the leading numeric part, 0 when there is none.
fn leading_int(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let mut end = 0;
    for (idx, c) in trimmed.char_indices() {
        if c.is_ascii_digit() || (idx == 0 && (c == '-' || c == '+')) {
            end = idx + c.len_utf8();
        } else {
            break;
        }
    }
    trimmed[..end].parse().unwrap_or(0)
}

/// Float value of the leading numeric part, 0.0 when there is none.
fn leading_float(value: &str) -> f64 {
    let trimmed = value.trim_start();
    let mut best = 0.0;
    for (idx, c) in trimmed.char_indices() {
        let end = idx + c.len_utf8();
        match trimmed[..end].parse::<f64>() {
            Ok(n) => best = n,
            Err(_) if matches!(c, '-' | '+' | '.' | 'e' | 'E') => continue,
            Err(_) => break,
        }
    }
    if best.is_finite() {
        best
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(interpolate("nothing to see", &[]), "nothing to see");
    }

    #[test]
    fn test_strings_and_numbers() {
        let out = interpolate("user %s has %d items", &args(&["'kvz'", "12"]));
        assert_eq!(out, "user 'kvz' has 12 items");
    }

    #[test]
    fn test_missing_arguments_are_empty() {
        assert_eq!(interpolate("%s-%s-%s", &args(&["a"])), "a--");
    }

    #[test]
    fn test_extra_arguments_ignored() {
        assert_eq!(interpolate("%s", &args(&["a", "b"])), "a");
    }

    #[test]
    fn test_percent_escape_and_unknown_conversion() {
        assert_eq!(interpolate("100%% done", &[]), "100% done");
        assert_eq!(interpolate("50%q", &args(&["x"])), "50%q");
        assert_eq!(interpolate("trailing %", &[]), "trailing %");
    }

    #[test]
    fn test_positional() {
        assert_eq!(interpolate("%2$s %1$s", &args(&["a", "b"])), "b a");
    }

    #[test]
    fn test_padding() {
        assert_eq!(interpolate("%-5s|", &args(&["ab"])), "ab   |");
        assert_eq!(interpolate("%05d", &args(&["-42"])), "-0042");
        assert_eq!(interpolate("%'*6s", &args(&["ab"])), "****ab");
        assert_eq!(interpolate("%8s", &args(&["debug"])), "   debug");
    }

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(interpolate("%d", &args(&["'abc'"])), "0");
        assert_eq!(interpolate("%d", &args(&["3.9"])), "3");
        assert_eq!(interpolate("%.2f", &args(&["3.14159"])), "3.14");
        assert_eq!(interpolate("%x/%X/%o/%b", &args(&["255", "255", "8", "5"])), "ff/FF/10/101");
        assert_eq!(interpolate("%+d", &args(&["7"])), "+7");
        assert_eq!(interpolate("%c", &args(&["65"])), "A");
        assert_eq!(interpolate("%.3s", &args(&["abcdef"])), "abc");
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("3.5abc"), 3.5);
        assert_eq!(leading_float("  -2e3 units"), -2000.0);
        assert_eq!(leading_float("1e"), 1.0);
        assert_eq!(leading_float("abc"), 0.0);
        assert_eq!(interpolate("%.1f", &args(&["2.5x"])), "2.5");
    }
}
