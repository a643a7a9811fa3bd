//! Multiply / divide operator reader

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '*' | '⋅' | '·' | 'x' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// Read `*`, `⋅` (U+22C5), `·` (U+00B7) or `x` as multiply and `/` as divide.
pub fn try_read_operator(text: &str, pos: &mut usize) -> Option<Operator> {
    let c = text.get(*pos..)?.chars().next()?;
    let op = Operator::from_char(c)?;
    *pos += c.len_utf8();
    Some(op)
}
