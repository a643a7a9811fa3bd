//! Sign readers

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn apply(self, value: i32) -> i32 {
        match self {
            Sign::Positive => value,
            Sign::Negative => -value,
        }
    }

    pub fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// ASCII `+` or `-`
pub fn try_read_sign(text: &str, pos: &mut usize) -> Option<Sign> {
    let sign = match text.get(*pos..)?.chars().next()? {
        '+' => Sign::Positive,
        '-' => Sign::Negative,
        _ => return None,
    };
    *pos += 1;
    Some(sign)
}

/// Superscript `⁺` or `⁻`
pub fn try_read_superscript_sign(text: &str, pos: &mut usize) -> Option<Sign> {
    let c = text.get(*pos..)?.chars().next()?;
    let sign = match c {
        '⁺' => Sign::Positive,
        '⁻' => Sign::Negative,
        _ => return None,
    };
    *pos += c.len_utf8();
    Some(sign)
}
