/// 고정 소수점 문자열로 값을 표시한다.
///
/// 화면 표시 규약(JavaScript `toFixed`)을 따른다. 정확히 중간인 값은 크기 쪽으로 올리고,
/// -0은 부호 없이, 유한하지 않은 값은 `NaN`, `Infinity`, `-Infinity`로, 절댓값이 1e21
/// 이상이면 지수 표기로 출력한다.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let s = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    // -0은 부호 없이 출력된다
    let sign = if value < 0.0 { "-" } else { "" };
    let x = value.abs();
    if x >= 1e21 {
        return format!("{sign}{}", exponent_form(x));
    }
    format!("{sign}{}", round_half_up(x, digits))
}

/// 가장 짧은 지수 표기. 양의 지수에는 `+`를 붙인다 (`1e+23`).
fn exponent_form(x: f64) -> String {
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

/// 음이 아닌 x를 반올림한다. 이진값이 정확히 중간이면 크기 쪽으로 올린다.
///
/// f64의 십진 전개는 소수 1074자리 안에서 끝나므로 1100자리로 찍으면 정확한 값이다.
fn round_half_up(x: f64, digits: usize) -> String {
    let exact = format!("{:.1100}", x);
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let tail = frac.get(digits..).unwrap_or("");
    let tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !tie {
        return format!("{:.*}", digits, x);
    }
    let mut truncated = int_part.to_string();
    if digits > 0 {
        truncated.push('.');
        truncated.push_str(&frac[..digits]);
    }
    increment_last_digit(&truncated)
}

/// 십진 문자열의 마지막 자리에 1을 더한다.
fn increment_last_digit(s: &str) -> String {
    let mut digits: Vec<char> = s.chars().collect();
    for i in (0..digits.len()).rev() {
        match digits[i] {
            '.' => continue,
            '9' => digits[i] = '0',
            d => {
                digits[i] = char::from(d as u8 + 1);
                return digits.into_iter().collect();
            }
        }
    }
    std::iter::once('1').chain(digits).collect()
}

/// 출력 필드 식별자와 표시 문자열의 순서 있는 매핑. 계산할 때마다 새로 만든다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyResult {
    entries: Vec<(&'static str, String)>,
}

impl PropertyResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// 값을 넣는다. 같은 필드가 있으면 덮어쓴다.
    pub fn insert(&mut self, field: &'static str, text: impl Into<String>) {
        let text = text.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((field, text)),
        }
    }

    pub fn with(mut self, field: &'static str, text: impl Into<String>) -> Self {
        self.insert(field, text);
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, t)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(f, t)| (*f, t.as_str()))
    }
}
